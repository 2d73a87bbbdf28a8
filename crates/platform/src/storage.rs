//! Storage abstraction for image sources
//!
//! Image decoders only need to read forward, skip around, and know how big
//! the source is. Any `embedded_io` reader that can seek qualifies once it
//! reports its size.

use embedded_io::{ErrorKind, ErrorType, Read, Seek, SeekFrom};

/// Readable, seekable byte source with a known length.
pub trait File: Read + Seek {
    /// Total size in bytes.
    fn size(&self) -> u64;
}

/// Errors from [`MemoryFile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror_no_std::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// Seek target before the start of the file.
    #[error("seek before start of file")]
    SeekBeforeStart,
    /// Seek target past the end of the file.
    #[error("seek past end of file")]
    SeekPastEnd,
}

impl embedded_io::Error for StorageError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidInput
    }
}

/// A [`File`] over a byte slice (flash-resident assets, test fixtures).
#[derive(Debug, Clone)]
pub struct MemoryFile<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> MemoryFile<'a> {
    /// Wrap `data`, positioned at offset 0.
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current read offset.
    pub const fn position(&self) -> usize {
        self.pos
    }
}

impl ErrorType for MemoryFile<'_> {
    type Error = StorageError;
}

impl Read for MemoryFile<'_> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let rest = self.data.get(self.pos..).unwrap_or_default();
        let n = rest.len().min(buf.len());
        // n <= buf.len() and n <= rest.len().
        #[allow(clippy::indexing_slicing, clippy::arithmetic_side_effects)]
        {
            buf[..n].copy_from_slice(&rest[..n]);
            self.pos += n;
        }
        Ok(n)
    }
}

impl Seek for MemoryFile<'_> {
    fn seek(&mut self, pos: SeekFrom) -> Result<u64, Self::Error> {
        let len = self.data.len() as i64;
        let target = match pos {
            SeekFrom::Start(n) => i64::try_from(n).map_err(|_| StorageError::SeekPastEnd)?,
            SeekFrom::End(delta) => len.saturating_add(delta),
            SeekFrom::Current(delta) => (self.pos as i64).saturating_add(delta),
        };
        if target < 0 {
            return Err(StorageError::SeekBeforeStart);
        }
        if target > len {
            return Err(StorageError::SeekPastEnd);
        }
        // 0 <= target <= len, which came from a usize.
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        {
            self.pos = target as usize;
        }
        Ok(target.unsigned_abs())
    }
}

impl File for MemoryFile<'_> {
    fn size(&self) -> u64 {
        self.data.len() as u64
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn reads_then_hits_eof() {
        let mut f = MemoryFile::new(b"hello");
        let mut buf = [0u8; 3];
        assert_eq!(f.read(&mut buf).unwrap(), 3);
        assert_eq!(&buf, b"hel");
        assert_eq!(f.read(&mut buf).unwrap(), 2);
        assert_eq!(&buf[..2], b"lo");
        assert_eq!(f.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn seek_variants() {
        let mut f = MemoryFile::new(&[0u8; 10]);
        assert_eq!(f.seek(SeekFrom::Start(4)).unwrap(), 4);
        assert_eq!(f.seek(SeekFrom::Current(3)).unwrap(), 7);
        assert_eq!(f.seek(SeekFrom::End(-1)).unwrap(), 9);
        assert_eq!(f.seek(SeekFrom::Current(-20)), Err(StorageError::SeekBeforeStart));
        assert_eq!(f.seek(SeekFrom::Start(11)), Err(StorageError::SeekPastEnd));
        assert_eq!(f.position(), 9, "failed seeks leave the position alone");
        assert_eq!(f.size(), 10);
    }
}
