/// A single classified line of terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// `$ cd /`
    CdRoot,
    /// `$ cd ..`
    CdUp,
    /// `$ cd <name>`
    Cd(&'a str),
    /// `$ ls`
    Ls,
    /// A command we don't know how to interpret.
    UnknownCommand(&'a str),
    /// `dir <name>`
    DirEntry(&'a str),
    /// `<size> <name>`
    FileEntry { size: u64, name: &'a str },
    /// Anything else.
    Unrecognized(&'a str),
}

impl<'a> Line<'a> {
    /// Classify a line of input. Trailing whitespace is ignored.
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim_end();

        if let Some(command) = line.strip_prefix('$') {
            return Self::command(line, command.trim_start());
        }

        let Some((head, name)) = line.split_once(' ') else {
            return Line::Unrecognized(line);
        };

        if name.is_empty() {
            return Line::Unrecognized(line);
        }

        if head == "dir" {
            return Line::DirEntry(name);
        }

        match head.parse::<u64>() {
            Ok(size) => Line::FileEntry { size, name },
            Err(..) => Line::Unrecognized(line),
        }
    }

    fn command(line: &'a str, command: &'a str) -> Self {
        if command == "ls" {
            return Line::Ls;
        }

        let Some(("cd", arg)) = command.split_once(' ') else {
            return Line::UnknownCommand(line);
        };

        match arg {
            "" => Line::UnknownCommand(line),
            "/" => Line::CdRoot,
            ".." => Line::CdUp,
            name => Line::Cd(name),
        }
    }

    /// Test if the line is a command.
    #[inline]
    pub fn is_command(&self) -> bool {
        matches!(
            self,
            Line::CdRoot | Line::CdUp | Line::Cd(..) | Line::Ls | Line::UnknownCommand(..)
        )
    }
}
