//! SHA-256 as specified by FIPS 180-4.
//!
//! ```
//! let digest = sha256_core::digest(b"abc");
//! assert_eq!(
//!     sha256_core::utils::to_hex(&digest),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
//! );
//! ```

pub mod crypto;
pub mod utils;

pub use crypto::hash::sha256::{digest, digest_observed, try_digest, verify_constants, Error, Sha256};
pub use utils::{digest_eq, to_hex};
