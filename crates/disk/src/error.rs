use thiserror::Error;

use crate::node::Dir;

/// Fatal errors raised while interpreting the terminal log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// `cd <name>` where `<name>` is not a child directory of the working
    /// directory.
    #[error("no directory `{name}` in `{cwd}`")]
    DirectoryNotFound { name: String, cwd: String },
    /// `cd ..` while in the root directory.
    #[error("cannot move above the root directory")]
    AboveRoot,
    /// The working directory stack no longer resolves to a directory.
    #[error("working directory at depth {depth} is not a directory")]
    BadWorkingDirectory { depth: usize },
}

/// A parse run which stopped early.
///
/// Carries the partially built tree so that callers can choose to carry on
/// with what was parsed.
#[derive(Debug, Error)]
#[error("line {line}: {error}")]
pub struct Aborted {
    pub(crate) root: Dir,
    pub(crate) line: usize,
    pub(crate) error: ParseError,
    pub(crate) cwd: String,
    pub(crate) listing: Vec<String>,
}

impl Aborted {
    /// The 1-based line the parser stopped at.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// The error which stopped the parser.
    #[inline]
    pub fn error(&self) -> &ParseError {
        &self.error
    }

    /// The working directory at the point of failure.
    #[inline]
    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    /// Listing of the working directory at the point of failure.
    #[inline]
    pub fn listing(&self) -> &[String] {
        &self.listing
    }

    /// The partially built tree.
    #[inline]
    pub fn root(&self) -> &Dir {
        &self.root
    }

    /// Recover the partially built tree.
    #[inline]
    pub fn into_root(self) -> Dir {
        self.root
    }
}

/// Errors raised when answering the puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SolveError {
    /// No directory is large enough to free the required space.
    #[error("no directory of at least {needed} to delete")]
    NoCandidate { needed: u64 },
}
