//! The directory tree built from a terminal log.

use core::fmt;

/// Capabilities shared by every entry in the tree.
pub trait Entry {
    /// Name of the entry.
    fn name(&self) -> &str;

    /// Size of the entry. For directories this is computed on every call.
    fn size(&self) -> u64;
}

/// A file with a fixed size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    name: String,
    size: u64,
}

impl File {
    /// Construct a new file.
    #[inline]
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    fn describe(&self) -> String {
        format!("{} (file, size={})", self.name, self.size)
    }
}

impl Entry for File {
    #[inline]
    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    fn size(&self) -> u64 {
        self.size
    }
}

/// A directory owning its children in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dir {
    name: String,
    children: Vec<Node>,
}

impl Dir {
    /// Name of the root directory.
    pub const ROOT: &'static str = "/";

    /// Construct a new empty directory.
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Construct an empty root directory.
    #[inline]
    pub fn root() -> Self {
        Self::new(Self::ROOT)
    }

    /// Children in insertion order.
    #[inline]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Append a child, returning its index.
    #[inline]
    pub fn push(&mut self, node: impl Into<Node>) -> usize {
        let index = self.children.len();
        self.children.push(node.into());
        index
    }

    /// Find the index of the first direct child directory called `name`.
    pub(crate) fn child_dir_index(&self, name: &str) -> Option<usize> {
        self.children
            .iter()
            .position(|node| matches!(node, Node::Dir(dir) if dir.name == name))
    }

    /// Find a direct child directory called `name`.
    pub fn find_child_dir(&self, name: &str) -> Option<&Dir> {
        match self.children.get(self.child_dir_index(name)?)? {
            Node::Dir(dir) => Some(dir),
            Node::File(..) => None,
        }
    }

    /// Follow a path of child indexes, where every step must be a directory.
    pub(crate) fn descend(&self, path: &[usize]) -> Option<&Dir> {
        let mut dir = self;

        for &index in path {
            dir = match dir.children.get(index)? {
                Node::Dir(child) => child,
                Node::File(..) => return None,
            };
        }

        Some(dir)
    }

    /// Mutable variant of [Dir::descend].
    pub(crate) fn descend_mut(&mut self, path: &[usize]) -> Option<&mut Dir> {
        let mut dir = self;

        for &index in path {
            dir = match dir.children.get_mut(index)? {
                Node::Dir(child) => child,
                Node::File(..) => return None,
            };
        }

        Some(dir)
    }

    /// Find a descendant directory by name.
    ///
    /// The search is a pre-order depth-first walk over the descendants of
    /// this directory, not including itself. The first match wins.
    pub fn find_descendant(&self, name: &str) -> Option<&Dir> {
        for node in &self.children {
            let Node::Dir(dir) = node else {
                continue;
            };

            if dir.name == name {
                return Some(dir);
            }

            if let Some(found) = dir.find_descendant(name) {
                return Some(found);
            }
        }

        None
    }

    /// Sum the sizes of every directory in this subtree, including itself,
    /// whose size is at most `bound`.
    ///
    /// A file is counted once for each qualifying ancestor.
    pub fn sum_of_small_subtrees(&self, bound: u64) -> u64 {
        let mut sum = 0;

        let size = self.size();

        if size <= bound {
            sum += size;
        }

        for dir in self.child_dirs() {
            sum += dir.sum_of_small_subtrees(bound);
        }

        sum
    }

    /// Collect every directory in this subtree, including itself, whose size
    /// is at least `bound`. Directories are returned in post-order.
    pub fn find_subtrees_at_least(&self, bound: u64) -> Vec<&Dir> {
        let mut out = Vec::new();
        self.collect_post_order(&mut out, &|size: u64| size >= bound);
        out
    }

    /// Collect every directory in this subtree, including itself, whose size
    /// is at most `bound`. Directories are returned in post-order.
    pub fn find_subtrees_at_most(&self, bound: u64) -> Vec<&Dir> {
        let mut out = Vec::new();
        self.collect_post_order(&mut out, &|size: u64| size <= bound);
        out
    }

    fn collect_post_order<'a>(&'a self, out: &mut Vec<&'a Dir>, filter: &dyn Fn(u64) -> bool) {
        for dir in self.child_dirs() {
            dir.collect_post_order(out, filter);
        }

        if filter(self.size()) {
            out.push(self);
        }
    }

    fn child_dirs(&self) -> impl Iterator<Item = &Dir> {
        self.children.iter().filter_map(|node| match node {
            Node::Dir(dir) => Some(dir),
            Node::File(..) => None,
        })
    }

    /// Describe this directory on a single line.
    pub fn describe_self(&self) -> String {
        format!("{} (dir, size={})", self.name, self.size())
    }

    /// Render an indented listing of this subtree.
    ///
    /// ```
    /// use disk::{Dir, File};
    ///
    /// let mut root = Dir::root();
    /// let mut a = Dir::new("a");
    /// a.push(File::new("b.txt", 10));
    /// root.push(a);
    /// root.push(File::new("c", 5));
    ///
    /// assert_eq!(
    ///     root.describe(),
    ///     [
    ///         "/ (dir, size=15)",
    ///         "  a (dir, size=10)",
    ///         "    b.txt (file, size=10)",
    ///         "  c (file, size=5)",
    ///     ]
    /// );
    /// ```
    pub fn describe(&self) -> Vec<String> {
        let mut out = vec![self.describe_self()];

        for node in &self.children {
            match node {
                Node::File(file) => {
                    out.push(format!("  {}", file.describe()));
                }
                Node::Dir(dir) => {
                    out.extend(dir.describe().into_iter().map(|line| format!("  {line}")));
                }
            }
        }

        out
    }
}

impl Entry for Dir {
    #[inline]
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.children.iter().map(Node::size).sum()
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut it = self.describe().into_iter();

        if let Some(first) = it.next() {
            f.write_str(&first)?;
        }

        for line in it {
            writeln!(f)?;
            f.write_str(&line)?;
        }

        Ok(())
    }
}

/// A node in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    File(File),
    Dir(Dir),
}

impl Entry for Node {
    #[inline]
    fn name(&self) -> &str {
        match self {
            Node::File(file) => file.name(),
            Node::Dir(dir) => dir.name(),
        }
    }

    #[inline]
    fn size(&self) -> u64 {
        match self {
            Node::File(file) => file.size(),
            Node::Dir(dir) => dir.size(),
        }
    }
}

impl From<File> for Node {
    #[inline]
    fn from(value: File) -> Self {
        Self::File(value)
    }
}

impl From<Dir> for Node {
    #[inline]
    fn from(value: Dir) -> Self {
        Self::Dir(value)
    }
}
