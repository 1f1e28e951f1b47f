//! Password generation core.
//!
//! Stateless: a [`Request`] goes in, a password string comes out. Length
//! bounds are caller policy (see `settings`); the core never validates.

pub mod alphabet;
mod generate;

use std::io::{self, Write};

use zeroize::Zeroize;

pub use generate::generate;
pub use generate::generate_batch;

/// Input parameters for one generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub length: usize,
    pub include_symbols: bool,
    pub include_digits: bool,
}

/// Buffered writer that wipes its buffer on every flush and on drop, so
/// generated passwords don't linger in freed heap memory.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    const CAPACITY: usize = 8 * 1024;

    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(Self::CAPACITY),
        }
    }

    pub fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        if self.buf.len() + data.len() > Self::CAPACITY {
            self.flush()?;
        }
        if data.len() >= Self::CAPACITY {
            return self.inner.write_all(data);
        }
        self.buf.extend_from_slice(data);
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        if !self.buf.is_empty() {
            let result = self.inner.write_all(&self.buf);
            self.buf.zeroize();
            result?;
        }
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::SecureBufWriter;

    #[test]
    fn secure_writer_flushes_everything_on_drop() {
        let mut sink = Vec::new();
        {
            let mut w = SecureBufWriter::new(&mut sink);
            w.write_all(b"abcd\n").unwrap();
            w.write_all(b"efgh\n").unwrap();
        }
        assert_eq!(sink, b"abcd\nefgh\n");
    }

    #[test]
    fn secure_writer_handles_oversized_writes() {
        let big = vec![b'x'; 3 * SecureBufWriter::<Vec<u8>>::CAPACITY];
        let mut sink = Vec::new();
        {
            let mut w = SecureBufWriter::new(&mut sink);
            w.write_all(b"head").unwrap();
            w.write_all(&big).unwrap();
            w.write_all(b"tail").unwrap();
        }
        assert_eq!(sink.len(), 8 + big.len());
        assert!(sink.starts_with(b"head"));
        assert!(sink.ends_with(b"tail"));
    }
}
