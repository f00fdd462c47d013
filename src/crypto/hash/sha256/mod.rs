#[macro_use]
pub mod soft;
pub mod derive;
pub mod error;
pub mod observe;
pub mod ops;
pub mod pad;

pub use error::{Error, Table};
pub use observe::{NoopObserver, Observer, TraceWriter};
pub use pad::{Block, BlockSource, Blocks, PaddingTail};
pub use soft::Sha256;

/// Round constants: first 32 bits of the fractional parts of the cube roots
/// of the first 64 primes, 2..311.
pub const K32: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

/// H(0): first 32 bits of the fractional parts of the square roots of the
/// first 8 primes, 2..19.
pub const INITIAL_STATE: [u32; 8] = [
    0x6a09e667,
    0xbb67ae85,
    0x3c6ef372,
    0xa54ff53a,
    0x510e527f,
    0x9b05688c,
    0x1f83d9ab,
    0x5be0cd19,
];

const _: () = assert!(
    derive::tables_match(),
    "sha256: K32/INITIAL_STATE disagree with their derivation from the primes"
);

/// SHA-256 of `data`.
#[inline]
pub fn digest<T: AsRef<[u8]>>(data: T) -> [u8; Sha256::DIGEST_LEN] {
    Sha256::oneshot(data)
}

/// SHA-256 of `data`, reporting a message too long for the length field
/// instead of panicking.
#[inline]
pub fn try_digest(data: &[u8]) -> Result<[u8; Sha256::DIGEST_LEN], Error> {
    Sha256::try_oneshot(data)
}

#[inline]
pub fn digest_observed<O: Observer + ?Sized>(
    data: &[u8],
    observer: &mut O,
) -> Result<[u8; Sha256::DIGEST_LEN], Error> {
    Sha256::oneshot_observed(data, observer)
}

/// Re-derives `K32` and `INITIAL_STATE` from the primes and compares.
pub fn verify_constants() -> Result<(), Error> {
    derive::verify()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest() {
        assert_eq!(
            hex::encode(digest(b"")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
        );
        assert_eq!(
            hex::encode(digest("abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        );
        assert_eq!(try_digest(b"abc"), Ok(digest(b"abc")));
        assert_eq!(digest_observed(b"abc", &mut NoopObserver), Ok(digest(b"abc")));
    }

    #[test]
    fn test_verify_constants() {
        assert_eq!(verify_constants(), Ok(()));
    }

    #[test]
    fn test_constant_mismatch_message() {
        let err = Error::ConstantMismatch {
            table: Table::RoundConstants,
            index: 3,
            expected: 0xe9b5dba5,
            derived: 0xe9b5dba4,
        };
        assert_eq!(err.to_string(), "K[3] is 0xe9b5dba5 but derives to 0xe9b5dba4");
    }
}
