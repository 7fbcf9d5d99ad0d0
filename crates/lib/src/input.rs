//! Input loading.

mod error;

#[cfg(test)]
mod tests;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use bstr::ByteSlice;

pub use self::error::{ErrorKind, InputError, LineCol};

pub(crate) const NL: u8 = b'\n';

/// The full contents of an input file.
#[derive(Debug, Clone)]
pub struct Input {
    /// The path being parsed.
    path: PathBuf,
    data: Vec<u8>,
}

impl Input {
    /// Construct an input from data already in memory.
    #[inline]
    pub fn new(path: impl Into<PathBuf>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            data: data.into(),
        }
    }

    /// Read the input at the given path.
    pub fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();

        let data = fs::read(&path).with_context(|| anyhow!("{}", path.display()))?;

        log::debug!("read {} bytes from {}", data.len(), path.display());
        Ok(Self { path, data })
    }

    /// The path the input was read from.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Iterate over the lines of the input.
    #[inline]
    pub fn lines(&self) -> Lines<'_> {
        Lines {
            data: &self.data,
            line: 0,
        }
    }
}

/// Iterator over the lines of an [Input], see [Input::lines].
///
/// A trailing `\r` is stripped from every line, and a final newline does not
/// produce an empty trailing line.
pub struct Lines<'a> {
    data: &'a [u8],
    line: usize,
}

impl<'a> Lines<'a> {
    /// Number of lines consumed so far.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = Result<&'a str, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.data.is_empty() {
            return None;
        }

        let (line, rest) = match memchr::memchr(NL, self.data) {
            Some(at) => (&self.data[..at], &self.data[at + 1..]),
            None => (self.data, &[][..]),
        };

        self.data = rest;
        let n = self.line;
        self.line += 1;

        let line = line.strip_suffix(b"\r").unwrap_or(line);

        Some(match line.to_str() {
            Ok(line) => Ok(line),
            Err(e) => Err(InputError::new(
                LineCol::new(n, e.valid_up_to()),
                ErrorKind::NotUtf8,
            )),
        })
    }
}
