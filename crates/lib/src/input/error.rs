use core::fmt;

/// A line and column combination.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    line: usize,
    column: usize,
}

impl LineCol {
    pub(crate) const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.line + 1;
        write!(f, "{line}:{}", self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    NotUtf8,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NotUtf8 => write!(f, "not utf-8"),
        }
    }
}

/// Error raised while reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputError {
    pos: LineCol,
    kind: ErrorKind,
}

impl InputError {
    /// Construct a new input error.
    #[inline]
    pub fn new(pos: LineCol, kind: ErrorKind) -> Self {
        Self { pos, kind }
    }

    #[inline]
    pub fn pos(&self) -> LineCol {
        self.pos
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Display for InputError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at {})", self.kind, self.pos)
    }
}

impl std::error::Error for InputError {}
