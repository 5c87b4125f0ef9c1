//! Bounds-checked byte cursor over an in-memory O2W buffer
//!
//! `std::io::Cursor` only reports `UnexpectedEof`; decode diagnostics need
//! the offset a truncated read started at, so this cursor tracks it itself
//! and leaves the multi-byte decoding to `byteorder`.

use byteorder::{ByteOrder, LittleEndian};

use crate::error::{Error, Result};

/// A read-only cursor over a byte buffer.
///
/// Every read advances the offset past the consumed bytes; a read that
/// would run past the end of the buffer fails with [`Error::OutOfBounds`]
/// and leaves the offset unchanged.
#[derive(Debug)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor at offset 0.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Current byte offset into the buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// True once every byte has been consumed.
    pub fn at_end(&self) -> bool {
        self.offset >= self.data.len()
    }

    /// Consume `len` bytes and return them as one contiguous span.
    ///
    /// Used to hand a whole index run to the primitive assembler as a
    /// self-contained sub-buffer.
    pub fn take_span(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self.offset.checked_add(len).filter(|&e| e <= self.data.len());
        match end {
            Some(end) => {
                let span = &self.data[self.offset..end];
                self.offset = end;
                Ok(span)
            }
            None => Err(Error::OutOfBounds {
                offset: self.offset,
                needed: len,
                len: self.data.len(),
            }),
        }
    }

    /// Read one unsigned byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take_span(1)?[0])
    }

    /// Read a little-endian `u16`.
    pub fn read_u16_le(&mut self) -> Result<u16> {
        Ok(LittleEndian::read_u16(self.take_span(2)?))
    }

    /// Read a 3-byte little-endian two's-complement integer.
    ///
    /// The wire value occupies bits 0..24; bit 23 is the sign bit and is
    /// extended into the upper byte of the returned `i32`, so the result
    /// covers [-8_388_608, 8_388_607].
    pub fn read_i24_le(&mut self) -> Result<i32> {
        Ok(LittleEndian::read_i24(self.take_span(3)?))
    }
}

#[cfg(test)]
mod tests {
    use byteorder::WriteBytesExt;

    use super::*;

    #[test]
    fn test_reads_advance_in_order() {
        let data = [0x05, 0x34, 0x12, 0xff];
        let mut cursor = ByteCursor::new(&data);

        assert_eq!(cursor.read_u8().unwrap(), 5);
        assert_eq!(cursor.read_u16_le().unwrap(), 0x1234);
        assert_eq!(cursor.offset(), 3);
        assert!(!cursor.at_end());
        assert_eq!(cursor.read_u8().unwrap(), 0xff);
        assert!(cursor.at_end());
    }

    #[test]
    fn test_int24_round_trip() {
        // Range boundaries plus values exercising the sign bit
        let values = [
            -8_388_608,
            -8_388_607,
            -65_536,
            -1,
            0,
            1,
            256,
            65_535,
            8_388_606,
            8_388_607,
        ];
        for value in values {
            let mut encoded = Vec::new();
            encoded.write_i24::<LittleEndian>(value).unwrap();
            assert_eq!(encoded.len(), 3);

            let mut cursor = ByteCursor::new(&encoded);
            assert_eq!(cursor.read_i24_le().unwrap(), value, "value {value}");
            assert!(cursor.at_end());
        }
    }

    #[test]
    fn test_int24_sign_extension() {
        // 0xff_ff_ff is -1 in 24-bit two's complement
        let mut cursor = ByteCursor::new(&[0xff, 0xff, 0xff]);
        assert_eq!(cursor.read_i24_le().unwrap(), -1);

        // Bit 23 clear: plain positive value
        let mut cursor = ByteCursor::new(&[0xff, 0xff, 0x7f]);
        assert_eq!(cursor.read_i24_le().unwrap(), 8_388_607);

        // Bit 23 set, everything else clear: most negative value
        let mut cursor = ByteCursor::new(&[0x00, 0x00, 0x80]);
        assert_eq!(cursor.read_i24_le().unwrap(), -8_388_608);
    }

    #[test]
    fn test_out_of_bounds_reports_offset() {
        let data = [0x01, 0x02];
        let mut cursor = ByteCursor::new(&data);
        cursor.read_u8().unwrap();

        let err = cursor.read_u16_le().unwrap_err();
        match err {
            Error::OutOfBounds { offset, needed, len } => {
                assert_eq!(offset, 1);
                assert_eq!(needed, 2);
                assert_eq!(len, 2);
            }
            other => panic!("expected OutOfBounds, got {other:?}"),
        }

        // Failed read does not consume anything
        assert_eq!(cursor.offset(), 1);
        assert_eq!(cursor.read_u8().unwrap(), 0x02);
    }

    #[test]
    fn test_take_span_rejects_overflowing_length() {
        let data = [0u8; 4];
        let mut cursor = ByteCursor::new(&data);
        assert!(cursor.take_span(usize::MAX).is_err());
        assert_eq!(cursor.offset(), 0);
    }
}
