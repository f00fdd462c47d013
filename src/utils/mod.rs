use core::fmt::Write;

cfg_if::cfg_if! {
    if #[cfg(feature = "variable_time_eq")] {
        #[inline(always)]
        pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
            a == b
        }
    } else {
        /// Compares without an early exit on the first differing byte. Only
        /// the lengths leak.
        #[inline(always)]
        pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
            if a.len() != b.len() {
                return false;
            }

            let mut x = 0u8;
            for i in 0..a.len() {
                x |= a[i] ^ b[i];
            }

            core::hint::black_box(x) == 0
        }
    }
}

/// Compares two digests, in constant time unless the `variable_time_eq`
/// feature is enabled.
#[inline]
pub fn digest_eq(a: &[u8; 32], b: &[u8; 32]) -> bool {
    constant_time_eq(a, b)
}

/// Lowercase hex, two characters per byte.
pub fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        // writing to a String cannot fail
        let _ = write!(out, "{:02x}", byte);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"", b""));
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"ab"));

        let a = crate::digest(b"abc");
        let mut b = a;
        assert!(digest_eq(&a, &b));
        b[31] ^= 1;
        assert!(!digest_eq(&a, &b));
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(&[]), "");
        assert_eq!(to_hex(&[0x00, 0x0f, 0xa5, 0xff]), "000fa5ff");
        let digest = crate::digest(b"abc");
        assert_eq!(to_hex(&digest), hex::encode(digest));
    }
}
