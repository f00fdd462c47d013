//! Hooks into the intermediate values of a digest computation.
//!
//! The plain digest entry points use [`NoopObserver`], which compiles away.
//! [`TraceWriter`] prints the same intermediate values FIPS 180-4's example
//! appendices list, which is handy when checking another implementation.

use std::io::{self, Write};

use super::pad::Block;

/// Receives the intermediate values of one digest computation, in order:
/// for each block `block`, `schedule`, 64 × `round`, then `state`.
///
/// All callbacks default to doing nothing.
pub trait Observer {
    /// A block is about to be compressed. `index` counts from 0.
    #[inline(always)]
    fn block(&mut self, index: usize, block: &Block<'_>) {
        let _ = (index, block);
    }

    /// The expanded message schedule `W[0..64)` of the current block.
    #[inline(always)]
    fn schedule(&mut self, w: &[u32; 64]) {
        let _ = w;
    }

    /// Working variables `a..h` after round `t`.
    #[inline(always)]
    fn round(&mut self, t: usize, vars: &[u32; 8]) {
        let _ = (t, vars);
    }

    /// Hash state after block `index` has been folded in.
    #[inline(always)]
    fn state(&mut self, index: usize, state: &[u32; 8]) {
        let _ = (index, state);
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {}

/// Writes a human readable trace of every block to `W`.
///
/// The first write error stops further output and is returned by
/// [`finish`](Self::finish).
pub struct TraceWriter<W: Write> {
    out: W,
    rounds: bool,
    error: Option<io::Error>,
}

impl<W: Write> TraceWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            rounds: true,
            error: None,
        }
    }

    /// Skip the 64 per-round lines of each block.
    pub fn without_rounds(mut self) -> Self {
        self.rounds = false;
        self
    }

    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn emit(&mut self, args: core::fmt::Arguments<'_>) {
        if self.error.is_none() {
            if let Err(err) = self.out.write_fmt(args) {
                self.error = Some(err);
            }
        }
    }
}

impl<W: Write> Observer for TraceWriter<W> {
    fn block(&mut self, index: usize, block: &Block<'_>) {
        self.emit(format_args!("Block {} ({}):\n", index + 1, block.source()));
        for (i, bytes) in block.as_bytes().chunks_exact(4).enumerate() {
            let word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
            self.emit(format_args!("  W[{:2}] = {:08x}\n", i, word));
        }
    }

    fn schedule(&mut self, _w: &[u32; 64]) {
        if self.rounds {
            self.emit(format_args!(
                "          a        b        c        d        e        f        g        h\n"
            ));
        }
    }

    fn round(&mut self, t: usize, v: &[u32; 8]) {
        if self.rounds {
            self.emit(format_args!(
                "t={:2}: {:08x} {:08x} {:08x} {:08x} {:08x} {:08x} {:08x} {:08x}\n",
                t, v[0], v[1], v[2], v[3], v[4], v[5], v[6], v[7]
            ));
        }
    }

    fn state(&mut self, index: usize, h: &[u32; 8]) {
        self.emit(format_args!(
            "H({}) = {:08x} {:08x} {:08x} {:08x} {:08x} {:08x} {:08x} {:08x}\n",
            index + 1, h[0], h[1], h[2], h[3], h[4], h[5], h[6], h[7]
        ));
    }
}
