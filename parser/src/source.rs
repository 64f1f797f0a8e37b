//! The byte source abstraction consumed by the scanner.
//!
//! A byte source only ever moves forward:
//! values are either read or skipped,
//! and the number of bytes consumed so far is always known.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// The initial capacity of the buffer used when opening files.
pub const SOURCE_BUFFER_CAPACITY: usize = 2048;

/// A forward-only source of bytes with a known position.
pub trait ByteSource: Read {
    /// Skip up to `n` bytes,
    /// returning the number of bytes actually skipped.
    /// A result lower than `n` means that the source has ended.
    fn skip(&mut self, n: u64) -> io::Result<u64>;

    /// Retrieve the number of bytes consumed so far.
    fn position(&self) -> u64;

    /// Check whether the source has no more bytes to provide.
    fn at_end(&mut self) -> io::Result<bool>;
}

impl<T: ?Sized> ByteSource for &mut T
where
    T: ByteSource,
{
    fn skip(&mut self, n: u64) -> io::Result<u64> {
        (**self).skip(n)
    }

    fn position(&self) -> u64 {
        (**self).position()
    }

    fn at_end(&mut self) -> io::Result<bool> {
        (**self).at_end()
    }
}

/// A byte source over any buffered reader,
/// which counts the bytes consumed from it.
#[derive(Debug)]
pub struct StreamSource<R> {
    inner: R,
    position: u64,
}

impl<R> StreamSource<R>
where
    R: BufRead,
{
    /// Wrap a buffered reader, starting at position 0.
    pub fn new(inner: R) -> Self {
        StreamSource { inner, position: 0 }
    }

    /// Unwrap the underlying reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<'a> StreamSource<&'a [u8]> {
    /// Create a byte source over an in-memory buffer.
    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        StreamSource::new(bytes)
    }
}

impl StreamSource<BufReader<File>> {
    /// Open the file at the given path as a byte source.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(StreamSource::new(BufReader::with_capacity(
            SOURCE_BUFFER_CAPACITY,
            file,
        )))
    }
}

impl<R> Read for StreamSource<R>
where
    R: BufRead,
{
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.position += n as u64;
        Ok(n)
    }
}

impl<R> ByteSource for StreamSource<R>
where
    R: BufRead,
{
    fn skip(&mut self, n: u64) -> io::Result<u64> {
        let skipped = io::copy(&mut (&mut self.inner).take(n), &mut io::sink())?;
        self.position += skipped;
        Ok(skipped)
    }

    fn position(&self) -> u64 {
        self.position
    }

    fn at_end(&mut self) -> io::Result<bool> {
        Ok(self.inner.fill_buf()?.is_empty())
    }
}
