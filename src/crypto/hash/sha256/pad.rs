use core::fmt;

use super::error::Error;

const BLOCK_LEN: usize = 64;
const BLOCK_LEN_BITS: u64 = BLOCK_LEN as u64 * 8;
const MLEN_SIZE: usize = core::mem::size_of::<u64>();
const MLEN_SIZE_BITS: u64 = MLEN_SIZE as u64 * 8;
// separator byte, at most 63 zero bytes, length field
const MAX_PAD_LEN: usize = BLOCK_LEN + MLEN_SIZE;

/// The bytes appended to a message: `0x80`, zero fill, then the message bit
/// length as a big-endian `u64`.
///
/// Only the suffix is materialized; the message itself is never copied.
#[derive(Clone, Copy)]
pub struct PaddingTail {
    buf: [u8; MAX_PAD_LEN],
    len: usize,
    message_len: usize,
}

impl PaddingTail {
    /// Builds the tail for a message of `message_len` bytes.
    pub fn new(message_len: usize) -> Result<Self, Error> {
        let too_large = Error::InputTooLarge { len: message_len };
        let mlen_bits = u64::try_from(message_len)
            .ok()
            .and_then(|len| len.checked_mul(8))
            .ok_or(too_large)?;

        // zero bits between the separator byte and the length field
        let plen_bits = (BLOCK_LEN_BITS - (mlen_bits % BLOCK_LEN_BITS + 8 + MLEN_SIZE_BITS) % BLOCK_LEN_BITS)
            % BLOCK_LEN_BITS;
        let len = ((8 + plen_bits + MLEN_SIZE_BITS) / 8) as usize;

        assert!(len <= MAX_PAD_LEN);
        assert_eq!((mlen_bits % BLOCK_LEN_BITS + len as u64 * 8) % BLOCK_LEN_BITS, 0);
        if message_len.checked_add(len).is_none() {
            return Err(too_large);
        }

        let mut buf = [0u8; MAX_PAD_LEN];
        buf[0] = 0x80;
        buf[len - MLEN_SIZE..len].copy_from_slice(&mlen_bits.to_be_bytes());

        Ok(Self { buf, len, message_len })
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Length of the tail in bytes, between 9 and 72.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn message_len(&self) -> usize {
        self.message_len
    }

    /// Message plus tail, in bytes. Always a multiple of 64.
    #[inline]
    pub fn padded_len(&self) -> usize {
        self.message_len + self.len
    }

    #[inline]
    pub fn block_count(&self) -> usize {
        self.padded_len() / BLOCK_LEN
    }

    /// The length field, i.e. the original message length in bits.
    #[inline]
    pub fn message_bits(&self) -> u64 {
        let mut field = [0u8; MLEN_SIZE];
        field.copy_from_slice(&self.buf[self.len - MLEN_SIZE..self.len]);
        u64::from_be_bytes(field)
    }
}

impl fmt::Debug for PaddingTail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaddingTail")
            .field("len", &self.len)
            .field("message_len", &self.message_len)
            .finish()
    }
}

/// Where the bytes of a block come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockSource {
    Message,
    Boundary,
    Tail,
}

impl fmt::Display for BlockSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BlockSource::Message => "message",
            BlockSource::Boundary => "boundary",
            BlockSource::Tail => "padding",
        })
    }
}

/// One 64-byte window of the padded stream.
#[derive(Clone, Copy, Debug)]
pub enum Block<'a> {
    /// Lies entirely inside the message; borrowed, not copied.
    Message(&'a [u8; BLOCK_LEN]),
    /// Message tail followed by the head of the padding tail.
    Boundary([u8; BLOCK_LEN]),
    /// Lies entirely inside the padding tail.
    Tail([u8; BLOCK_LEN]),
}

impl<'a> Block<'a> {
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8; BLOCK_LEN] {
        match self {
            Block::Message(block) => block,
            Block::Boundary(block) | Block::Tail(block) => block,
        }
    }

    #[inline]
    pub fn source(&self) -> BlockSource {
        match self {
            Block::Message(_) => BlockSource::Message,
            Block::Boundary(_) => BlockSource::Boundary,
            Block::Tail(_) => BlockSource::Tail,
        }
    }
}

/// Iterates the logical stream `message ++ tail` in 64-byte blocks.
#[derive(Clone)]
pub struct Blocks<'a> {
    message: &'a [u8],
    tail: PaddingTail,
    offset: usize,
}

impl<'a> Blocks<'a> {
    pub fn new(message: &'a [u8]) -> Result<Self, Error> {
        let tail = PaddingTail::new(message.len())?;
        Ok(Self { message, tail, offset: 0 })
    }

    #[inline]
    pub fn tail(&self) -> &PaddingTail {
        &self.tail
    }
}

impl<'a> Iterator for Blocks<'a> {
    type Item = Block<'a>;

    fn next(&mut self) -> Option<Block<'a>> {
        let i = self.offset;
        if i >= self.tail.padded_len() {
            return None;
        }
        self.offset += BLOCK_LEN;

        let message = self.message;
        let n = message.len();
        let tail = self.tail.as_bytes();

        if let Some(window) = message.get(i..).and_then(|rest| rest.first_chunk::<BLOCK_LEN>()) {
            return Some(Block::Message(window));
        }

        let mut block = [0u8; BLOCK_LEN];
        if i >= n {
            let start = i - n;
            block.copy_from_slice(&tail[start..start + BLOCK_LEN]);
            Some(Block::Tail(block))
        } else {
            // 1..=63 message bytes remain; the tail supplies the rest
            let head = n - i;
            block[..head].copy_from_slice(&message[i..]);
            block[head..].copy_from_slice(&tail[..BLOCK_LEN - head]);
            Some(Block::Boundary(block))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.tail.padded_len() - self.offset.min(self.tail.padded_len())) / BLOCK_LEN;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Blocks<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_shape() {
        for message_len in 0..300 {
            let tail = PaddingTail::new(message_len).unwrap();
            let bytes = tail.as_bytes();
            assert_eq!(tail.padded_len() % 64, 0, "len {}", message_len);
            assert!(tail.len() >= 9 && tail.len() <= 72);
            assert_eq!(bytes[0], 0x80);
            assert!(bytes[1..bytes.len() - 8].iter().all(|&b| b == 0));
            assert_eq!(tail.message_bits(), message_len as u64 * 8);
            assert_eq!(&bytes[bytes.len() - 8..], &(message_len as u64 * 8).to_be_bytes());
        }
    }

    #[test]
    fn test_tail_lengths() {
        assert_eq!(PaddingTail::new(0).unwrap().len(), 64);
        assert_eq!(PaddingTail::new(3).unwrap().len(), 61);
        assert_eq!(PaddingTail::new(55).unwrap().len(), 9);
        // 448 bits: separator and length no longer fit
        assert_eq!(PaddingTail::new(56).unwrap().len(), 72);
        assert_eq!(PaddingTail::new(63).unwrap().len(), 65);
        assert_eq!(PaddingTail::new(64).unwrap().len(), 64);
        assert_eq!(PaddingTail::new(64).unwrap().block_count(), 2);
        assert_eq!(PaddingTail::new(128).unwrap().block_count(), 3);
    }

    #[test]
    fn test_input_too_large() {
        let len = (u64::MAX / 8 + 1) as usize;
        assert_eq!(PaddingTail::new(len).unwrap_err(), Error::InputTooLarge { len });
        assert!(PaddingTail::new(usize::MAX).is_err());
        assert!(PaddingTail::new((u64::MAX / 8) as usize - 100).is_ok());
    }

    #[test]
    fn test_block_sources() {
        let data = (0..=255u8).cycle().take(200).collect::<Vec<u8>>();
        for len in 0..200 {
            let message = &data[..len];
            let blocks = Blocks::new(message).unwrap();
            assert_eq!(blocks.len(), (len + 9 + 63) / 64);

            let mut stream = Vec::new();
            for (index, block) in blocks.enumerate() {
                let start = index * 64;
                let expected = if start + 64 <= len {
                    BlockSource::Message
                } else if start >= len {
                    BlockSource::Tail
                } else {
                    BlockSource::Boundary
                };
                assert_eq!(block.source(), expected, "len {} block {}", len, index);
                stream.extend_from_slice(block.as_bytes());
            }

            let tail = PaddingTail::new(len).unwrap();
            let mut expected = message.to_vec();
            expected.extend_from_slice(tail.as_bytes());
            assert_eq!(stream, expected, "len {}", len);
        }
    }

    #[test]
    fn test_multiple_of_block_adds_full_block() {
        let message = [0x61u8; 128];
        let sources = Blocks::new(&message)
            .unwrap()
            .map(|block| block.source())
            .collect::<Vec<_>>();
        assert_eq!(
            sources,
            [BlockSource::Message, BlockSource::Message, BlockSource::Tail]
        );
    }

    #[test]
    fn test_message_blocks_borrow() {
        let message = [7u8; 70];
        let mut blocks = Blocks::new(&message).unwrap();
        match blocks.next() {
            Some(Block::Message(window)) => {
                assert!(core::ptr::eq(window.as_ptr(), message.as_ptr()));
            }
            other => panic!("unexpected first block {:?}", other.map(|b| b.source())),
        }
        assert_eq!(blocks.next().map(|b| b.source()), Some(BlockSource::Boundary));
        assert!(blocks.next().is_none());
    }
}
