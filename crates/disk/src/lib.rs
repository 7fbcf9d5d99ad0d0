//! Reconstructs a directory tree from a terminal log of `cd` and `ls`
//! commands, and answers size queries over it.
//!
//! ```
//! use disk::{Entry, Limits};
//!
//! let log = "$ cd /\n$ ls\ndir a\n100 b\n$ cd a\n$ ls\n50 c\n";
//! let root = disk::parse(log.lines())?;
//!
//! assert_eq!(root.size(), 150);
//! assert_eq!(disk::solve(&root, &Limits::default())?, (200, 50));
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```

mod error;
mod node;
pub mod parser;
mod solve;


pub use self::error::{Aborted, ParseError, SolveError};
pub use self::node::{Dir, Entry, File, Node};
pub use self::parser::{parse, Parser};
pub use self::solve::{part1, part2, solve, Limits};
