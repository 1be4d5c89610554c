//! BIP-32 derivation paths.
//!
//! Grammar: `m` or `M`, followed by one or more `/`-separated components.
//! Each component is a non-negative decimal integer below 2^31, optionally
//! suffixed with `'` (or `h` / `H`) to mark it hardened. Anything else is
//! rejected before any derivation work begins.

use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::error::{Error, Result};

/// Maximum number of components a path may carry.
pub const MAX_DEPTH: usize = 255;

/// A child index in a derivation path.
///
/// Hardened indices are >= 2^31 in raw form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChildIndex {
    /// Normal (non-hardened) index: 0 to 2^31 - 1
    Normal(u32),
    /// Hardened index: displayed as n', stored as n
    Hardened(u32),
}

impl ChildIndex {
    /// The offset for hardened indices (2^31).
    pub const HARDENED_OFFSET: u32 = 0x8000_0000;

    /// Create a normal (non-hardened) child index.
    pub fn normal(index: u32) -> Result<Self> {
        if index >= Self::HARDENED_OFFSET {
            Err(Error::InvalidPath(index.to_string()))
        } else {
            Ok(Self::Normal(index))
        }
    }

    /// Create a hardened child index.
    pub fn hardened(index: u32) -> Result<Self> {
        if index >= Self::HARDENED_OFFSET {
            Err(Error::InvalidPath(alloc::format!("{index}'")))
        } else {
            Ok(Self::Hardened(index))
        }
    }

    /// Check if this is a hardened index.
    pub const fn is_hardened(&self) -> bool {
        matches!(self, Self::Hardened(_))
    }

    /// Get the raw index value (without hardened flag).
    pub const fn index(&self) -> u32 {
        match self {
            Self::Normal(i) | Self::Hardened(i) => *i,
        }
    }

    /// Whether the inner value fits below the hardened offset.
    ///
    /// The variants are public, so `Hardened(2^31)` can be built by hand; such
    /// an index would alias `Hardened(0)` once the offset is applied.
    pub const fn is_in_range(&self) -> bool {
        self.index() < Self::HARDENED_OFFSET
    }

    /// Convert to the raw u32 value used in BIP-32 derivation.
    ///
    /// For hardened indices, this includes the hardened offset (2^31).
    pub const fn to_u32(&self) -> u32 {
        match self {
            Self::Normal(i) => *i,
            Self::Hardened(i) => *i | Self::HARDENED_OFFSET,
        }
    }
}

impl From<u32> for ChildIndex {
    fn from(value: u32) -> Self {
        if value >= Self::HARDENED_OFFSET {
            Self::Hardened(value & !Self::HARDENED_OFFSET)
        } else {
            Self::Normal(value)
        }
    }
}

impl From<ChildIndex> for u32 {
    fn from(index: ChildIndex) -> Self {
        index.to_u32()
    }
}

impl fmt::Display for ChildIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal(i) => write!(f, "{}", i),
            Self::Hardened(i) => write!(f, "{}'", i),
        }
    }
}

impl FromStr for ChildIndex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidPath(s.to_string());

        let (digits, hardened) = match s.strip_suffix(['\'', 'h', 'H']) {
            Some(digits) => (digits, true),
            None => (s, false),
        };

        // `u32::from_str` would also take a leading '+'
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let index: u32 = digits.parse().map_err(|_| invalid())?;

        if hardened {
            Self::hardened(index).map_err(|_| invalid())
        } else {
            Self::normal(index).map_err(|_| invalid())
        }
    }
}

/// A BIP-32 derivation path.
///
/// Represents paths like "m/44'/195'/0'/0/0" as a sequence of child indices.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct DerivationPath {
    indices: Vec<ChildIndex>,
}

impl DerivationPath {
    /// Create an empty derivation path (master key).
    pub fn master() -> Self {
        Self {
            indices: Vec::new(),
        }
    }

    /// Create a derivation path from a vector of child indices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the path is deeper than [`MAX_DEPTH`]
    /// or any index carries an inner value of 2^31 or more.
    pub fn new(indices: Vec<ChildIndex>) -> Result<Self> {
        if indices.len() > MAX_DEPTH {
            return Err(Error::InvalidPath(alloc::format!(
                "depth {} exceeds {MAX_DEPTH}",
                indices.len()
            )));
        }
        if let Some(index) = indices.iter().find(|index| !index.is_in_range()) {
            return Err(Error::InvalidPath(index.to_string()));
        }
        Ok(Self { indices })
    }

    /// Parse a derivation path from a string.
    ///
    /// Accepts `m/44'/195'/0'/0/0`, `M/44'/195'/0'/0/0` and `m/44h/195h/0h/0/0`.
    /// At least one component is required; use [`DerivationPath::master`] for
    /// the master key itself.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] carrying the whole input on any
    /// malformed or missing component.
    pub fn parse(path: &str) -> Result<Self> {
        let mut components = path.split('/');

        match components.next() {
            Some("m" | "M") => {}
            _ => return Err(Error::InvalidPath(path.to_string())),
        }
        if path.len() == 1 {
            return Err(Error::InvalidPath(path.to_string()));
        }

        let indices = components
            .map(|component| {
                component
                    .parse::<ChildIndex>()
                    .map_err(|_| Error::InvalidPath(path.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(indices)
    }

    /// Get the child indices in this path.
    pub fn indices(&self) -> &[ChildIndex] {
        &self.indices
    }

    /// Iterate over the child indices.
    pub fn iter(&self) -> core::slice::Iter<'_, ChildIndex> {
        self.indices.iter()
    }

    /// Get the number of levels in this path.
    pub fn depth(&self) -> usize {
        self.indices.len()
    }

    /// Check if this path is empty (master key).
    pub fn is_master(&self) -> bool {
        self.indices.is_empty()
    }

    /// Append a child index to the path.
    pub fn child(&self, index: ChildIndex) -> Result<Self> {
        let mut indices = self.indices.clone();
        indices.push(index);
        Self::new(indices)
    }

    /// Create BIP-44 path: m/44'/coin_type'/account'/change/address_index
    pub fn bip44(coin_type: u32, account: u32, change: u32, address_index: u32) -> Result<Self> {
        Self::new(alloc::vec![
            ChildIndex::hardened(44)?,
            ChildIndex::hardened(coin_type)?,
            ChildIndex::hardened(account)?,
            ChildIndex::normal(change)?,
            ChildIndex::normal(address_index)?,
        ])
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m")?;
        for index in &self.indices {
            write!(f, "/{}", index)?;
        }
        Ok(())
    }
}

impl FromStr for DerivationPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl<'a> IntoIterator for &'a DerivationPath {
    type Item = &'a ChildIndex;
    type IntoIter = core::slice::Iter<'a, ChildIndex>;

    fn into_iter(self) -> Self::IntoIter {
        self.indices.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_index_normal() {
        let index = ChildIndex::normal(0).unwrap();
        assert!(!index.is_hardened());
        assert_eq!(index.index(), 0);
        assert_eq!(index.to_u32(), 0);
        assert_eq!(index.to_string(), "0");
    }

    #[test]
    fn test_child_index_hardened() {
        let index = ChildIndex::hardened(44).unwrap();
        assert!(index.is_hardened());
        assert_eq!(index.index(), 44);
        assert_eq!(index.to_u32(), 44 | 0x80000000);
        assert_eq!(index.to_string(), "44'");
    }

    #[test]
    fn test_child_index_out_of_range() {
        assert!(ChildIndex::normal(0x8000_0000).is_err());
        assert!(ChildIndex::hardened(0x8000_0000).is_err());
        assert!("2147483648".parse::<ChildIndex>().is_err());
        assert!("2147483648'".parse::<ChildIndex>().is_err());
        assert_eq!(
            "2147483647'".parse::<ChildIndex>().unwrap().to_u32(),
            u32::MAX
        );
    }

    #[test]
    fn test_child_index_from_u32() {
        assert_eq!(ChildIndex::from(44), ChildIndex::Normal(44));
        assert_eq!(ChildIndex::from(0x80000000), ChildIndex::Hardened(0));
        assert_eq!(ChildIndex::from(0x80000000 + 195), ChildIndex::Hardened(195));
    }

    #[test]
    fn test_child_index_parse() {
        assert_eq!("0".parse::<ChildIndex>().unwrap(), ChildIndex::Normal(0));
        assert_eq!("195'".parse::<ChildIndex>().unwrap(), ChildIndex::Hardened(195));
        assert_eq!("44h".parse::<ChildIndex>().unwrap(), ChildIndex::Hardened(44));
        assert_eq!("44H".parse::<ChildIndex>().unwrap(), ChildIndex::Hardened(44));
    }

    #[test]
    fn test_child_index_rejects_malformed() {
        for bad in ["", "'", "+1", "-1", " 1", "1 ", "1''", "0x10", "a"] {
            assert!(bad.parse::<ChildIndex>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_derivation_path_parse() {
        let path: DerivationPath = "m/44'/195'/0'/0/0".parse().unwrap();
        assert_eq!(path.depth(), 5);
        assert_eq!(path.indices()[0], ChildIndex::Hardened(44));
        assert_eq!(path.indices()[1], ChildIndex::Hardened(195));
        assert_eq!(path.indices()[2], ChildIndex::Hardened(0));
        assert_eq!(path.indices()[3], ChildIndex::Normal(0));
        assert_eq!(path.indices()[4], ChildIndex::Normal(0));
    }

    #[test]
    fn test_derivation_path_upper_m() {
        let path: DerivationPath = "M/44'/195'/0'/0'".parse().unwrap();
        assert_eq!(path.to_string(), "m/44'/195'/0'/0'");
    }

    #[test]
    fn test_derivation_path_master() {
        let path = DerivationPath::master();
        assert!(path.is_master());
        assert_eq!(path.to_string(), "m");
    }

    #[test]
    fn test_derivation_path_requires_component() {
        for s in ["m", "M"] {
            assert!(matches!(
                DerivationPath::parse(s),
                Err(Error::InvalidPath(p)) if p == s
            ));
        }
    }

    #[test]
    fn test_derivation_path_rejects_out_of_range_variants() {
        for index in [
            ChildIndex::Hardened(0x8000_0000),
            ChildIndex::Normal(0x8000_0000),
            ChildIndex::Hardened(u32::MAX),
        ] {
            assert!(!index.is_in_range());
            assert!(matches!(
                DerivationPath::new(alloc::vec![ChildIndex::Hardened(44), index]),
                Err(Error::InvalidPath(_))
            ));
            assert!(DerivationPath::master().child(index).is_err());
        }
        assert!(ChildIndex::Hardened(0x7fff_ffff).is_in_range());
    }

    #[test]
    fn test_derivation_path_rejects_malformed() {
        for bad in [
            "",
            "44'/195'/0'",
            "m/",
            "m//0",
            "m/0/",
            "/m/0",
            "x/0",
            "m/44'/195'/0'/a",
            "m/44''",
            " m/0",
            "m/-1",
        ] {
            match DerivationPath::parse(bad) {
                Err(Error::InvalidPath(p)) => assert_eq!(p, bad),
                other => panic!("{bad:?} gave {other:?}"),
            }
        }
    }

    #[test]
    fn test_derivation_path_max_depth() {
        let deep = alloc::format!("m{}", "/0".repeat(MAX_DEPTH));
        assert_eq!(DerivationPath::parse(&deep).unwrap().depth(), MAX_DEPTH);

        let too_deep = alloc::format!("m{}", "/0".repeat(MAX_DEPTH + 1));
        assert!(DerivationPath::parse(&too_deep).is_err());
    }

    #[test]
    fn test_derivation_path_display_roundtrip() {
        let path: DerivationPath = "m/44h/195h/3h/1/7".parse().unwrap();
        assert_eq!(path.to_string(), "m/44'/195'/3'/1/7");
    }

    #[test]
    fn test_bip44_tron() {
        let path = DerivationPath::bip44(195, 0, 0, 0).unwrap();
        assert_eq!(path.to_string(), "m/44'/195'/0'/0/0");
    }

    #[test]
    fn test_child() {
        let path = DerivationPath::master()
            .child(ChildIndex::Hardened(44))
            .unwrap();
        assert_eq!(path.to_string(), "m/44'");
    }
}
