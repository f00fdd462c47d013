use super::error::Error;
use super::observe::{NoopObserver, Observer};
use super::ops::{big_sigma0, big_sigma1, ch, maj, small_sigma0, small_sigma1};
use super::pad::Blocks;

/// The running hash state `H0..H7`.
///
/// Each computation owns its own value; nothing is shared between digests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sha256 {
    state: [u32; 8],
}

impl Sha256 {
    pub const BLOCK_LEN: usize = 64;
    pub const DIGEST_LEN: usize = 32;
    pub const ROUNDS: usize = 64;

    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            state: super::INITIAL_STATE,
        }
    }

    #[inline(always)]
    pub const fn state(&self) -> &[u32; 8] {
        &self.state
    }

    /// Folds one block into the state.
    #[inline]
    pub fn compress(&mut self, block: &[u8; Self::BLOCK_LEN]) {
        transform(&mut self.state, block, &mut NoopObserver);
    }

    /// Like [`compress`](Self::compress) for a block of unchecked size.
    ///
    /// # Panics
    /// If `block` is not exactly 64 bytes.
    pub fn compress_slice(&mut self, block: &[u8]) {
        match <&[u8; Self::BLOCK_LEN]>::try_from(block) {
            Ok(array) => self.compress(array),
            Err(_) => panic!("sha256: block must be {} bytes, got {}", Self::BLOCK_LEN, block.len()),
        }
    }

    /// Serializes the state big-endian.
    #[inline]
    pub fn finalize(self) -> [u8; Self::DIGEST_LEN] {
        let mut output = [0u8; Self::DIGEST_LEN];
        for (chunk, word) in output.chunks_exact_mut(4).zip(self.state) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        output
    }

    /// # Panics
    /// If the message bit length does not fit in 64 bits, which no in-memory
    /// buffer on a 64-bit target can reach in practice.
    #[inline]
    pub fn oneshot<T: AsRef<[u8]>>(data: T) -> [u8; Self::DIGEST_LEN] {
        match Self::try_oneshot(data.as_ref()) {
            Ok(digest) => digest,
            Err(err) => panic!("sha256: {}", err),
        }
    }

    #[inline]
    pub fn try_oneshot(data: &[u8]) -> Result<[u8; Self::DIGEST_LEN], Error> {
        Self::oneshot_observed(data, &mut NoopObserver)
    }

    /// Hashes `data`, reporting every block, schedule, round and intermediate
    /// state to `observer`.
    pub fn oneshot_observed<O: Observer + ?Sized>(
        data: &[u8],
        observer: &mut O,
    ) -> Result<[u8; Self::DIGEST_LEN], Error> {
        let blocks = Blocks::new(data)?;
        debug_assert_eq!(blocks.tail().padded_len() % Self::BLOCK_LEN, 0);

        let mut sha256 = Self::new();
        for (index, block) in blocks.enumerate() {
            observer.block(index, &block);
            transform(&mut sha256.state, block.as_bytes(), observer);
            observer.state(index, &sha256.state);
        }
        Ok(sha256.finalize())
    }
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

/// Expands a block into the 64-word message schedule.
#[inline(always)]
fn schedule(block: &[u8; Sha256::BLOCK_LEN]) -> [u32; Sha256::ROUNDS] {
    let mut w = [0u32; Sha256::ROUNDS];
    for (word, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    for t in 16..Sha256::ROUNDS {
        w[t] = small_sigma1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(small_sigma0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }
    w
}

#[inline(always)]
fn transform<O: Observer + ?Sized>(state: &mut [u32; 8], block: &[u8; Sha256::BLOCK_LEN], observer: &mut O) {
    let w = schedule(block);
    observer.schedule(&w);

    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];
    let mut f = state[5];
    let mut g = state[6];
    let mut h = state[7];

    for t in 0..Sha256::ROUNDS {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(super::K32[t])
            .wrapping_add(w[t]);
        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));
        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
        observer.round(t, &[a, b, c, d, e, f, g, h]);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
    state[5] = state[5].wrapping_add(f);
    state[6] = state[6].wrapping_add(g);
    state[7] = state[7].wrapping_add(h);
}

#[cfg(test)]
macro_rules! sha256_test_case {
    ($name:ty) => {
        assert_eq!(
            <$name>::oneshot(&[]),
            [
                0xe3, 0xb0, 0xc4, 0x42, 0x98, 0xfc, 0x1c, 0x14,
                0x9a, 0xfb, 0xf4, 0xc8, 0x99, 0x6f, 0xb9, 0x24,
                0x27, 0xae, 0x41, 0xe4, 0x64, 0x9b, 0x93, 0x4c,
                0xa4, 0x95, 0x99, 0x1b, 0x78, 0x52, 0xb8, 0x55,
            ]
        );
        assert_eq!(
            <$name>::oneshot(b"abc"),
            [
                0xba, 0x78, 0x16, 0xbf, 0x8f, 0x01, 0xcf, 0xea,
                0x41, 0x41, 0x40, 0xde, 0x5d, 0xae, 0x22, 0x23,
                0xb0, 0x03, 0x61, 0xa3, 0x96, 0x17, 0x7a, 0x9c,
                0xb4, 0x10, 0xff, 0x61, 0xf2, 0x00, 0x15, 0xad,
            ]
        );
        assert_eq!(
            hex::encode(<$name>::oneshot(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq")),
            "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
        );
        assert_eq!(
            hex::encode(<$name>::oneshot(b"abcdefghijklmnopqrstuvwxyz")),
            "71c480df93d6ae2f1efad1447c66c9525e316218cf51fc8d9ed832f2daf18b73",
        );

        let random_data = (0..1000).map(|_| rand::random::<u8>()).collect::<Vec<u8>>();
        for length in 0..=200 {
            let data = &random_data[..length];
            let expected = ring::digest::digest(&ring::digest::SHA256, data);
            assert_eq!(<$name>::oneshot(data), expected.as_ref(), "length {}", length);
        }
        for _ in 0..100 {
            let length = (rand::random::<u32>() % 1000) as usize;
            let data = &random_data[..length];
            let expected = ring::digest::digest(&ring::digest::SHA256, data);
            assert_eq!(<$name>::oneshot(data), expected.as_ref());
        }
        let expected = ring::digest::digest(&ring::digest::SHA256, &random_data);
        assert_eq!(<$name>::oneshot(&random_data), expected.as_ref());
    };
    () => {
        sha256_test_case!(Sha256);
    };
}
