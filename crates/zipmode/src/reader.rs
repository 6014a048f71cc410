//! Little-endian cursor over a byte slice.
//!
//! All archive parsing in this crate happens over a memory-mapped slice;
//! [`BinaryReader`] keeps the current position and decodes fixed-width
//! little-endian integers and raw byte runs from it. A short read is always
//! an error, never zero-padded.

use zerocopy::FromBytes;

use crate::{Error, Result};

/// A positioned reader over a byte slice.
///
/// The position advances by exactly the number of bytes consumed on every
/// successful read. After a failed read the reader must not be used for
/// further reads.
#[derive(Debug, Clone)]
pub struct BinaryReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> BinaryReader<'a> {
    /// Create a reader positioned at the start of the slice.
    #[inline]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Create a reader positioned at a specific offset.
    #[inline]
    pub const fn new_at(data: &'a [u8], position: usize) -> Self {
        Self { data, position }
    }

    /// Current position in the slice.
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Number of bytes left to read.
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Move to an absolute position.
    #[inline]
    pub fn seek(&mut self, position: usize) {
        self.position = position;
    }

    /// Skip `count` bytes without reading them.
    #[inline]
    pub fn advance(&mut self, count: usize) {
        self.position = self.position.saturating_add(count);
    }

    /// Read `count` bytes and advance past them.
    #[inline]
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        if self.remaining() < count {
            return Err(Error::UnexpectedEof {
                needed: count,
                available: self.remaining(),
            });
        }
        let bytes = &self.data[self.position..self.position + count];
        self.position += count;
        Ok(bytes)
    }

    /// Read a single byte.
    #[inline]
    pub fn read_u8(&mut self) -> Result<u8> {
        self.read_bytes(1).map(|b| b[0])
    }

    /// Read a little-endian u16.
    #[inline]
    pub fn read_u16(&mut self) -> Result<u16> {
        let b = self.read_bytes(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    /// Read a little-endian u32.
    #[inline]
    pub fn read_u32(&mut self) -> Result<u32> {
        let b = self.read_bytes(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Read a fixed-layout struct using zerocopy.
    #[inline]
    pub fn read_struct<T: FromBytes>(&mut self) -> Result<T> {
        let size = std::mem::size_of::<T>();
        let bytes = self.read_bytes(size)?;
        T::read_from_bytes(bytes).map_err(|_| Error::UnexpectedEof {
            needed: size,
            available: bytes.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_little_endian_integers() {
        let data = [0x50, 0x4b, 0x05, 0x06, 0xa4, 0x81];
        let mut reader = BinaryReader::new(&data);

        assert_eq!(reader.read_u32().unwrap(), 0x0605_4b50);
        assert_eq!(reader.read_u16().unwrap(), 0x81a4);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn short_read_is_an_error() {
        let data = [0x01, 0x02];
        let mut reader = BinaryReader::new(&data);

        match reader.read_u32() {
            Err(Error::UnexpectedEof { needed, available }) => {
                assert_eq!(needed, 4);
                assert_eq!(available, 2);
            }
            other => panic!("expected UnexpectedEof, got {other:?}"),
        }
    }

    #[test]
    fn seek_and_advance_move_the_position() {
        let data = [0u8; 16];
        let mut reader = BinaryReader::new(&data);

        reader.seek(8);
        assert_eq!(reader.position(), 8);
        reader.advance(4);
        assert_eq!(reader.position(), 12);
        assert_eq!(reader.remaining(), 4);

        // Advancing past the end saturates; the next read fails cleanly.
        reader.advance(usize::MAX);
        assert!(reader.read_u8().is_err());
    }

    #[test]
    fn read_bytes_borrows_the_slice() {
        let data = b"name.txt rest";
        let mut reader = BinaryReader::new(data);

        assert_eq!(reader.read_bytes(8).unwrap(), b"name.txt");
        assert_eq!(reader.position(), 8);
    }
}
