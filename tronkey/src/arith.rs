//! Fixed-width 256-bit arithmetic modulo the secp256k1 group order.
//!
//! Values are 32-byte big-endian buffers. Private keys stay in these buffers
//! for their whole life so they can be zeroized in place; no arbitrary
//! precision integer ever holds key material.

use core::cmp::Ordering;

/// Width of a scalar buffer in bytes.
pub const SCALAR_LEN: usize = 32;

/// The secp256k1 group order n, big-endian.
pub const CURVE_ORDER: [u8; SCALAR_LEN] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe,
    0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36, 0x41, 0x41,
];

/// Compare two big-endian values, most significant byte first.
pub fn compare(a: &[u8; SCALAR_LEN], b: &[u8; SCALAR_LEN]) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        match x.cmp(y) {
            Ordering::Equal => {}
            other => return other,
        }
    }
    Ordering::Equal
}

/// `target += addend`, wrapping at 2^256. Returns the carry out of the top byte.
pub fn add_with_carry(target: &mut [u8; SCALAR_LEN], addend: &[u8; SCALAR_LEN]) -> bool {
    let mut carry = 0u16;
    for i in (0..SCALAR_LEN).rev() {
        let sum = u16::from(target[i]) + u16::from(addend[i]) + carry;
        target[i] = sum as u8;
        carry = sum >> 8;
    }
    carry != 0
}

/// `target -= n`, wrapping at 2^256.
///
/// Applied to a value in [n, 2^256) this yields the value mod n. Applied to the
/// low 256 bits of a sum that overflowed, the borrow out of the top byte cancels
/// the lost carry and the result is again the sum mod n.
pub fn subtract_order_with_borrow(target: &mut [u8; SCALAR_LEN]) {
    let mut borrow = 0i16;
    for i in (0..SCALAR_LEN).rev() {
        let mut diff = i16::from(target[i]) - i16::from(CURVE_ORDER[i]) - borrow;
        if diff < 0 {
            diff += 256;
            borrow = 1;
        } else {
            borrow = 0;
        }
        target[i] = diff as u8;
    }
}

/// True iff every byte is zero.
pub fn is_zero(buffer: &[u8; SCALAR_LEN]) -> bool {
    buffer.iter().fold(0u8, |acc, b| acc | b) == 0
}

/// True iff the buffer is a usable private key: 1 <= value < n.
pub fn is_valid_scalar(buffer: &[u8; SCALAR_LEN]) -> bool {
    !is_zero(buffer) && compare(buffer, &CURVE_ORDER) == Ordering::Less
}

/// `target = (target + addend) mod n`, for `target < n` and `addend < n`.
pub fn add_mod_order(target: &mut [u8; SCALAR_LEN], addend: &[u8; SCALAR_LEN]) {
    let overflow = add_with_carry(target, addend);
    if overflow || compare(target, &CURVE_ORDER) != Ordering::Less {
        subtract_order_with_borrow(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// n - 1
    const ORDER_MINUS_ONE: [u8; 32] =
        hex_literal::hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364140");

    fn scalar(v: u8) -> [u8; 32] {
        let mut out = [0u8; 32];
        out[31] = v;
        out
    }

    mod compare_tests {
        use super::*;

        #[test]
        fn test_compare_orders() {
            assert_eq!(compare(&scalar(1), &scalar(2)), Ordering::Less);
            assert_eq!(compare(&scalar(2), &scalar(2)), Ordering::Equal);
            assert_eq!(compare(&scalar(3), &scalar(2)), Ordering::Greater);
        }

        #[test]
        fn test_compare_most_significant_first() {
            let mut high = [0u8; 32];
            high[0] = 1;
            let low = [0xffu8; 32];
            assert_eq!(compare(&high, &low), Ordering::Less);
            assert_eq!(compare(&low, &high), Ordering::Greater);
        }

        #[test]
        fn test_compare_against_order() {
            assert_eq!(compare(&ORDER_MINUS_ONE, &CURVE_ORDER), Ordering::Less);
            assert_eq!(compare(&CURVE_ORDER, &CURVE_ORDER), Ordering::Equal);
            assert_eq!(compare(&[0xff; 32], &CURVE_ORDER), Ordering::Greater);
        }
    }

    mod add_tests {
        use super::*;

        #[test]
        fn test_add_no_carry() {
            let mut a = scalar(200);
            assert!(!add_with_carry(&mut a, &scalar(50)));
            assert_eq!(a, scalar(250));
        }

        #[test]
        fn test_add_carry_between_bytes() {
            let mut a = scalar(0xff);
            assert!(!add_with_carry(&mut a, &scalar(1)));
            let mut expected = [0u8; 32];
            expected[30] = 1;
            assert_eq!(a, expected);
        }

        #[test]
        fn test_add_carry_out_of_top_byte() {
            let mut a = [0xffu8; 32];
            assert!(add_with_carry(&mut a, &scalar(1)));
            assert_eq!(a, [0u8; 32]);
        }
    }

    mod subtract_tests {
        use super::*;

        #[test]
        fn test_subtract_order_itself_is_zero() {
            let mut a = CURVE_ORDER;
            subtract_order_with_borrow(&mut a);
            assert!(is_zero(&a));
        }

        #[test]
        fn test_subtract_from_max() {
            // 2^256 - 1 - n
            let mut a = [0xffu8; 32];
            subtract_order_with_borrow(&mut a);
            assert_eq!(
                a,
                hex_literal::hex!(
                    "000000000000000000000000000000014551231950b75fc4402da1732fc9bebe"
                )
            );
        }

        #[test]
        fn test_subtract_order_plus_small() {
            let mut a = CURVE_ORDER;
            add_with_carry(&mut a, &scalar(7));
            subtract_order_with_borrow(&mut a);
            assert_eq!(a, scalar(7));
        }
    }

    mod mod_add_tests {
        use super::*;

        #[test]
        fn test_add_mod_wraps_to_zero() {
            let mut a = ORDER_MINUS_ONE;
            add_mod_order(&mut a, &scalar(1));
            assert!(is_zero(&a));
        }

        #[test]
        fn test_add_mod_reduces_without_overflow() {
            // (n - 1) + 2 = n + 1, which fits in 256 bits
            let mut a = ORDER_MINUS_ONE;
            add_mod_order(&mut a, &scalar(2));
            assert_eq!(a, scalar(1));
        }

        #[test]
        fn test_add_mod_reduces_after_overflow() {
            // (n - 1) + (n - 1) = 2n - 2 overflows 2^256; result is n - 2
            let mut a = ORDER_MINUS_ONE;
            add_mod_order(&mut a, &ORDER_MINUS_ONE);
            let mut expected = ORDER_MINUS_ONE;
            expected[31] -= 1;
            assert_eq!(a, expected);
        }

        #[test]
        fn test_add_mod_small() {
            let mut a = scalar(3);
            add_mod_order(&mut a, &scalar(4));
            assert_eq!(a, scalar(7));
        }
    }

    #[test]
    fn test_is_zero() {
        assert!(is_zero(&[0u8; 32]));
        assert!(!is_zero(&scalar(1)));
        let mut top = [0u8; 32];
        top[0] = 0x80;
        assert!(!is_zero(&top));
    }

    #[test]
    fn test_is_valid_scalar() {
        assert!(!is_valid_scalar(&[0u8; 32]));
        assert!(is_valid_scalar(&scalar(1)));
        assert!(is_valid_scalar(&ORDER_MINUS_ONE));
        assert!(!is_valid_scalar(&CURVE_ORDER));
        assert!(!is_valid_scalar(&[0xff; 32]));
    }
}
