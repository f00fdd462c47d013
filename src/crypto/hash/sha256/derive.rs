//! Derivation of the SHA-256 constant tables from first principles.
//!
//! `K32[t]` holds the first 32 bits of the fractional part of the cube root of
//! the `t+1`-th prime, `INITIAL_STATE[i]` the first 32 bits of the fractional
//! part of the square root of the `i+1`-th prime. Everything here is exact
//! integer arithmetic and usable in const context.

use super::error::{Error, Table};
use super::{INITIAL_STATE, K32};

/// The first `N` primes, found by trial division.
pub const fn first_primes<const N: usize>() -> [u32; N] {
    let mut primes = [0u32; N];
    let mut found = 0;
    let mut candidate = 2u32;
    while found < N {
        let mut is_prime = true;
        let mut j = 0;
        while j < found {
            let p = primes[j];
            if p * p > candidate {
                break;
            }
            if candidate % p == 0 {
                is_prime = false;
                break;
            }
            j += 1;
        }
        if is_prime {
            primes[found] = candidate;
            found += 1;
        }
        candidate += if candidate == 2 { 1 } else { 2 };
    }
    primes
}

/// floor(cbrt(n))
const fn icbrt(n: u128) -> u128 {
    let mut lo = 0u128;
    let mut hi = 1u128 << 43;
    while lo < hi {
        let mid = (lo + hi + 1) / 2;
        // mid^3 <= n, without overflowing
        if mid <= n / mid / mid {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    lo
}

/// floor(sqrt(n))
const fn isqrt(n: u128) -> u128 {
    let mut lo = 0u128;
    let mut hi = 1u128 << 64;
    while lo < hi {
        let mid = (lo + hi + 1) / 2;
        if mid <= n / mid {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    lo
}

/// First 32 bits of the fractional part of `cbrt(p)`.
///
/// `floor(cbrt(p * 2^96)) == floor(cbrt(p) * 2^32)`, whose low word is the
/// fraction.
pub const fn frac_cbrt(p: u32) -> u32 {
    icbrt((p as u128) << 96) as u32
}

/// First 32 bits of the fractional part of `sqrt(p)`.
pub const fn frac_sqrt(p: u32) -> u32 {
    isqrt((p as u128) << 64) as u32
}

pub const fn round_constants() -> [u32; 64] {
    let primes = first_primes::<64>();
    let mut k = [0u32; 64];
    let mut t = 0;
    while t < 64 {
        k[t] = frac_cbrt(primes[t]);
        t += 1;
    }
    k
}

pub const fn initial_state() -> [u32; 8] {
    let primes = first_primes::<8>();
    let mut h = [0u32; 8];
    let mut i = 0;
    while i < 8 {
        h[i] = frac_sqrt(primes[i]);
        i += 1;
    }
    h
}

/// Whether both hardcoded tables equal their derivation.
pub const fn tables_match() -> bool {
    let k = round_constants();
    let mut t = 0;
    while t < 64 {
        if k[t] != K32[t] {
            return false;
        }
        t += 1;
    }
    let h = initial_state();
    let mut i = 0;
    while i < 8 {
        if h[i] != INITIAL_STATE[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Re-derives both tables and reports the first entry that disagrees.
pub fn verify() -> Result<(), Error> {
    let tables: [(Table, &[u32], &[u32]); 2] = [
        (Table::RoundConstants, &K32, &round_constants()),
        (Table::InitialState, &INITIAL_STATE, &initial_state()),
    ];
    for (table, fixed, derived) in tables {
        for (index, (&expected, &got)) in fixed.iter().zip(derived).enumerate() {
            if expected != got {
                return Err(Error::ConstantMismatch {
                    table,
                    index,
                    expected,
                    derived: got,
                });
            }
        }
    }
    Ok(())
}
