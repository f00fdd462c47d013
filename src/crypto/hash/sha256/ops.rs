//! 32-bit word operations of FIPS 180-4, section 4.1.2.
//!
//! All functions are total over `u32`. Rotation amounts are taken mod 32.

/// Rotate right by `n` bits.
#[inline(always)]
pub const fn rotr(x: u32, n: u32) -> u32 {
    x.rotate_right(n % 32)
}

/// Rotate left by `n` bits.
#[inline(always)]
pub const fn rotl(x: u32, n: u32) -> u32 {
    x.rotate_left(n % 32)
}

/// Logical right shift. Shifting out every bit yields 0.
#[inline(always)]
pub const fn shr(x: u32, n: u32) -> u32 {
    if n >= 32 {
        0
    } else {
        x >> n
    }
}

/// For each bit, choose `y` where `x` is set and `z` where it is clear.
#[inline(always)]
pub const fn ch(x: u32, y: u32, z: u32) -> u32 {
    // (x & y) ^ (!x & z)
    z ^ (x & (y ^ z))
}

/// Bitwise majority of the three inputs.
#[inline(always)]
pub const fn maj(x: u32, y: u32, z: u32) -> u32 {
    // (x & y) ^ (x & z) ^ (y & z)
    (x & (y ^ z)) | (y & z)
}

/// Σ0
#[inline(always)]
pub const fn big_sigma0(x: u32) -> u32 {
    rotr(x, 2) ^ rotr(x, 13) ^ rotr(x, 22)
}

/// Σ1
#[inline(always)]
pub const fn big_sigma1(x: u32) -> u32 {
    rotr(x, 6) ^ rotr(x, 11) ^ rotr(x, 25)
}

/// σ0
#[inline(always)]
pub const fn small_sigma0(x: u32) -> u32 {
    rotr(x, 7) ^ rotr(x, 18) ^ shr(x, 3)
}

/// σ1
#[inline(always)]
pub const fn small_sigma1(x: u32) -> u32 {
    rotr(x, 17) ^ rotr(x, 19) ^ shr(x, 10)
}
