//! Interpreter for a terminal log of `cd` and `ls` commands.

mod line;

pub use self::line::Line;

use crate::error::{Aborted, ParseError};
use crate::node::{Dir, Entry, File, Node};

/// The state of the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Expecting a command line.
    AwaitingCommand,
    /// Reading the output of `ls`.
    Listing,
    /// A fatal error was raised, remaining input is ignored.
    Aborted,
}

#[derive(Debug)]
struct Failure {
    line: usize,
    error: ParseError,
    cwd: String,
    listing: Vec<String>,
}

/// Builds a directory tree one line at a time.
///
/// ```
/// use disk::parser::{Parser, State};
///
/// let mut p = Parser::new();
/// p.feed("$ cd /")?;
/// p.feed("$ ls")?;
/// p.feed("dir a")?;
/// assert_eq!(p.state(), State::Listing);
/// p.feed("$ cd a")?;
/// assert_eq!(p.cwd(), "/a");
///
/// let root = p.finish()?;
/// assert!(root.find_child_dir("a").is_some());
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Parser {
    root: Dir,
    /// Child indexes leading from the root to the working directory. Empty
    /// when the working directory is the root.
    cwd: Vec<usize>,
    state: State,
    line: usize,
    failure: Option<Failure>,
}

impl Parser {
    /// Construct a new parser with an empty root directory.
    pub fn new() -> Self {
        Self {
            root: Dir::root(),
            cwd: Vec::new(),
            state: State::AwaitingCommand,
            line: 0,
            failure: None,
        }
    }

    /// The current state of the parser.
    #[inline]
    pub fn state(&self) -> State {
        self.state
    }

    /// The tree built so far.
    #[inline]
    pub fn root(&self) -> &Dir {
        &self.root
    }

    /// Render the working directory as a path.
    pub fn cwd(&self) -> String {
        let mut path = String::from(Dir::ROOT);
        let mut dir = &self.root;

        for (n, &index) in self.cwd.iter().enumerate() {
            let Some(Node::Dir(child)) = dir.children().get(index) else {
                break;
            };

            if n > 0 {
                path.push('/');
            }

            path.push_str(child.name());
            dir = child;
        }

        path
    }

    /// Process a single line.
    ///
    /// Unrecognized lines are logged and skipped. A failed directory change
    /// puts the parser into [State::Aborted], after which every line is
    /// ignored.
    pub fn feed(&mut self, raw: &str) -> Result<(), ParseError> {
        if self.state == State::Aborted {
            return Ok(());
        }

        self.line += 1;

        if let Err(error) = self.process(raw, Line::parse(raw)) {
            self.abort(error.clone());
            return Err(error);
        }

        Ok(())
    }

    /// Finish parsing.
    pub fn finish(self) -> Result<Dir, Aborted> {
        let Some(failure) = self.failure else {
            return Ok(self.root);
        };

        Err(Aborted {
            root: self.root,
            line: failure.line,
            error: failure.error,
            cwd: failure.cwd,
            listing: failure.listing,
        })
    }

    fn process(&mut self, raw: &str, line: Line<'_>) -> Result<(), ParseError> {
        if self.state == State::Listing {
            if !line.is_command() {
                return self.entry(raw, line);
            }

            self.state = State::AwaitingCommand;
        }

        match line {
            Line::Ls => {
                self.state = State::Listing;
            }
            Line::CdRoot => {
                self.cwd.clear();
            }
            Line::CdUp => {
                if self.cwd.pop().is_none() {
                    return Err(ParseError::AboveRoot);
                }
            }
            Line::Cd(name) => {
                let Some(index) = self.current()?.child_dir_index(name) else {
                    return Err(ParseError::DirectoryNotFound {
                        name: name.to_owned(),
                        cwd: self.cwd(),
                    });
                };

                self.cwd.push(index);
            }
            Line::UnknownCommand(..)
            | Line::Unrecognized(..)
            | Line::DirEntry(..)
            | Line::FileEntry { .. } => {
                log::warn!("{}: unrecognized input `{}`", self.line, raw.trim_end());
            }
        }

        Ok(())
    }

    fn entry(&mut self, raw: &str, line: Line<'_>) -> Result<(), ParseError> {
        let node = match line {
            Line::DirEntry(name) => Node::Dir(Dir::new(name)),
            Line::FileEntry { size, name } => Node::File(File::new(name, size)),
            _ => {
                log::warn!("{}: unrecognized listing `{}`", self.line, raw.trim_end());
                return Ok(());
            }
        };

        self.current_mut()?.push(node);
        Ok(())
    }

    fn current(&self) -> Result<&Dir, ParseError> {
        self.root
            .descend(&self.cwd)
            .ok_or(ParseError::BadWorkingDirectory {
                depth: self.cwd.len(),
            })
    }

    fn current_mut(&mut self) -> Result<&mut Dir, ParseError> {
        self.root
            .descend_mut(&self.cwd)
            .ok_or(ParseError::BadWorkingDirectory {
                depth: self.cwd.len(),
            })
    }

    fn abort(&mut self, error: ParseError) {
        let cwd = self.cwd();

        let listing = match self.current() {
            Ok(dir) => dir.describe(),
            Err(..) => Vec::new(),
        };

        log::error!("{}: {error}", self.line);
        log::error!("currently in {cwd}:");

        for line in &listing {
            log::error!("{line}");
        }

        self.state = State::Aborted;

        self.failure = Some(Failure {
            line: self.line,
            error,
            cwd,
            listing,
        });
    }
}

impl Default for Parser {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a full terminal log into a tree.
///
/// Stops at the first fatal error, in which case the returned [Aborted]
/// holds the partial tree.
pub fn parse<'a, I>(lines: I) -> Result<Dir, Aborted>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut parser = Parser::new();

    for line in lines {
        if parser.feed(line).is_err() {
            break;
        }
    }

    parser.finish()
}
