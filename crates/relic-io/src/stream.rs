// Copyright 2025 the Relic authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Little-endian cursor types for the binary codecs.

use relic_core::resref::RESREF_LEN;
use relic_core::ResRef;
use thiserror::Error;

/// An error while walking a byte stream.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StreamError {
    /// The stream ended before the requested bytes.
    #[error("unexpected end of stream at offset {offset}, wanted {wanted} more bytes")]
    UnexpectedEof {
        /// Position the read started from.
        offset: usize,
        /// Number of bytes the read asked for.
        wanted: usize,
    },
    /// A seek target lay outside the stream.
    #[error("seek to {target} is outside the {len}-byte stream")]
    BadSeek {
        /// The requested absolute position.
        target: usize,
        /// Total stream length.
        len: usize,
    },
}

/// A little-endian reader over a borrowed byte slice.
pub struct StreamReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> StreamReader<'a> {
    /// Wraps a byte slice, positioned at its start.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Current read position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the read position to an absolute offset.
    pub fn seek(&mut self, target: usize) -> Result<(), StreamError> {
        if target > self.bytes.len() {
            return Err(StreamError::BadSeek {
                target,
                len: self.bytes.len(),
            });
        }
        self.pos = target;
        Ok(())
    }

    fn take(&mut self, count: usize) -> Result<&'a [u8], StreamError> {
        let end = self.pos.checked_add(count).filter(|&e| e <= self.bytes.len());
        match end {
            Some(end) => {
                let slice = &self.bytes[self.pos..end];
                self.pos = end;
                Ok(slice)
            }
            None => Err(StreamError::UnexpectedEof {
                offset: self.pos,
                wanted: count,
            }),
        }
    }

    /// Reads exactly `buf.len()` bytes.
    pub fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), StreamError> {
        let slice = self.take(buf.len())?;
        buf.copy_from_slice(slice);
        Ok(())
    }

    /// Skips `count` bytes.
    pub fn skip(&mut self, count: usize) -> Result<(), StreamError> {
        self.take(count).map(|_| ())
    }

    /// Reads one byte.
    pub fn read_u8(&mut self) -> Result<u8, StreamError> {
        Ok(self.take(1)?[0])
    }

    /// Reads a little-endian `u16`.
    pub fn read_u16(&mut self) -> Result<u16, StreamError> {
        let b = self.take(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    /// Reads a little-endian `u32`.
    pub fn read_u32(&mut self) -> Result<u32, StreamError> {
        let b = self.take(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Reads a little-endian `i32`.
    pub fn read_i32(&mut self) -> Result<i32, StreamError> {
        Ok(self.read_u32()? as i32)
    }

    /// Reads an 8-byte, NUL-padded resource reference.
    pub fn read_resref(&mut self) -> Result<ResRef, StreamError> {
        let mut raw = [0u8; RESREF_LEN];
        self.read_exact(&mut raw)?;
        Ok(ResRef::from_bytes(&raw))
    }
}

/// A little-endian writer building an owned byte vector.
#[derive(Default)]
pub struct StreamWriter {
    bytes: Vec<u8>,
}

impl StreamWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes written so far.
    pub fn position(&self) -> usize {
        self.bytes.len()
    }

    /// Appends raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    /// Appends `count` zero bytes (normalized padding).
    pub fn write_zeros(&mut self, count: usize) {
        self.bytes.resize(self.bytes.len() + count, 0);
    }

    /// Appends a little-endian `u16`.
    pub fn write_u16(&mut self, value: u16) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    /// Appends a little-endian `u32`.
    pub fn write_u32(&mut self, value: u32) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    /// Appends a little-endian `i32`.
    pub fn write_i32(&mut self, value: i32) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    /// Appends an 8-byte, NUL-padded resource reference.
    pub fn write_resref(&mut self, key: ResRef) {
        self.bytes.extend_from_slice(&key.to_bytes());
    }

    /// Finishes the stream.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_scalars_and_resrefs() {
        let mut w = StreamWriter::new();
        w.write_u32(0xDEADBEEF);
        w.write_u16(125);
        w.write_i32(-1);
        w.write_resref(ResRef::new("Ribald"));
        let bytes = w.into_bytes();
        assert_eq!(bytes.len(), 4 + 2 + 4 + 8);

        let mut r = StreamReader::new(&bytes);
        assert_eq!(r.read_u32().unwrap(), 0xDEADBEEF);
        assert_eq!(r.read_u16().unwrap(), 125);
        assert_eq!(r.read_i32().unwrap(), -1);
        assert_eq!(r.read_resref().unwrap(), ResRef::new("ribald"));
    }

    #[test]
    fn short_reads_report_eof() {
        let mut r = StreamReader::new(&[1, 2]);
        assert_eq!(
            r.read_u32(),
            Err(StreamError::UnexpectedEof {
                offset: 0,
                wanted: 4
            })
        );
    }

    #[test]
    fn seek_is_bounds_checked() {
        let mut r = StreamReader::new(&[0; 16]);
        r.seek(16).unwrap();
        assert_eq!(r.seek(17), Err(StreamError::BadSeek { target: 17, len: 16 }));
    }

    #[test]
    fn skip_advances_past_padding() {
        let mut r = StreamReader::new(&[0, 0, 0, 7]);
        r.skip(3).unwrap();
        assert_eq!(r.read_u8().unwrap(), 7);
        assert!(r.skip(1).is_err());
    }
}
