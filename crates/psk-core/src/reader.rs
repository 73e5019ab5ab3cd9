//! Typed little-endian reads over a sequential byte source.
//!
//! `ByteReader` wraps any [`std::io::Read`] and exposes the primitive reads
//! the PSK format is built from: fixed-length NUL-trimmed strings, 8/16/32-bit
//! integers, IEEE-754 floats and small float vectors. It keeps a running byte
//! position so that errors can report where the stream went wrong; it never
//! seeks backward.

use std::io::{self, Read};

use byteorder::{LittleEndian, ReadBytesExt};

use crate::status::{PskError, Result};

/// Sequential little-endian reader with byte-position tracking.
pub struct ByteReader<R> {
    inner: R,
    pos: u64,
}

/// Maps an I/O failure to the decoder's error taxonomy.
///
/// `read_exact` style short reads become `UnexpectedEof` at the current
/// position; anything else (device error, broken pipe) is an opaque I/O error.
fn translate(err: io::Error, offset: u64) -> PskError {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        PskError::UnexpectedEof { offset }
    } else {
        PskError::Io(err.to_string())
    }
}

impl<R: Read> ByteReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, pos: 0 }
    }

    /// Bytes consumed from the source so far.
    pub fn position(&self) -> u64 {
        self.pos
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        let pos = self.pos;
        let v = self.inner.read_u8().map_err(|e| translate(e, pos))?;
        self.pos += 1;
        Ok(v)
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        let pos = self.pos;
        let v = self.inner.read_i8().map_err(|e| translate(e, pos))?;
        self.pos += 1;
        Ok(v)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let pos = self.pos;
        let v = self
            .inner
            .read_u16::<LittleEndian>()
            .map_err(|e| translate(e, pos))?;
        self.pos += 2;
        Ok(v)
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        let pos = self.pos;
        let v = self
            .inner
            .read_i16::<LittleEndian>()
            .map_err(|e| translate(e, pos))?;
        self.pos += 2;
        Ok(v)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let pos = self.pos;
        let v = self
            .inner
            .read_u32::<LittleEndian>()
            .map_err(|e| translate(e, pos))?;
        self.pos += 4;
        Ok(v)
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        let pos = self.pos;
        let v = self
            .inner
            .read_i32::<LittleEndian>()
            .map_err(|e| translate(e, pos))?;
        self.pos += 4;
        Ok(v)
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        let pos = self.pos;
        let v = self
            .inner
            .read_f32::<LittleEndian>()
            .map_err(|e| translate(e, pos))?;
        self.pos += 4;
        Ok(v)
    }

    pub fn read_vec2(&mut self) -> Result<[f32; 2]> {
        Ok([self.read_f32()?, self.read_f32()?])
    }

    pub fn read_vec3(&mut self) -> Result<[f32; 3]> {
        Ok([self.read_f32()?, self.read_f32()?, self.read_f32()?])
    }

    pub fn read_vec4(&mut self) -> Result<[f32; 4]> {
        Ok([
            self.read_f32()?,
            self.read_f32()?,
            self.read_f32()?,
            self.read_f32()?,
        ])
    }

    /// Reads a fixed-length string of `len` bytes, trimming trailing NULs.
    ///
    /// The trimmed bytes must be valid UTF-8.
    pub fn read_fixed_string(&mut self, len: usize) -> Result<String> {
        let start = self.pos;
        let mut buf = vec![0u8; len];
        self.inner
            .read_exact(&mut buf)
            .map_err(|e| translate(e, start))?;
        self.pos += len as u64;
        let trimmed = match buf.iter().rposition(|&b| b != 0) {
            Some(last) => &buf[..=last],
            None => &[][..],
        };
        std::str::from_utf8(trimmed)
            .map(str::to_owned)
            .map_err(|_| PskError::InvalidString { offset: start })
    }

    /// Fills `buf` exactly, distinguishing a clean end of stream from a
    /// truncated record.
    ///
    /// Returns `Ok(false)` when zero bytes were available (the stream ended
    /// at a record boundary) and `Ok(true)` when `buf` was filled. A partial
    /// fill is an `UnexpectedEof`.
    pub fn read_exact_or_eof(&mut self, buf: &mut [u8]) -> Result<bool> {
        let mut filled = 0;
        while filled < buf.len() {
            let pos = self.pos;
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => {
                    filled += n;
                    self.pos += n as u64;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(translate(e, pos)),
            }
        }
        if filled == 0 {
            Ok(false)
        } else if filled < buf.len() {
            Err(PskError::UnexpectedEof { offset: self.pos })
        } else {
            Ok(true)
        }
    }

    /// Consumes exactly `n` bytes without interpreting them.
    pub fn skip(&mut self, n: u64) -> Result<()> {
        let copied = io::copy(&mut self.inner.by_ref().take(n), &mut io::sink())
            .map_err(|e| translate(e, self.pos))?;
        self.pos += copied;
        if copied < n {
            Err(PskError::UnexpectedEof { offset: self.pos })
        } else {
            Ok(())
        }
    }
}
