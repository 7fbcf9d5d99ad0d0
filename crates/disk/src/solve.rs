use crate::error::SolveError;
use crate::node::{Dir, Entry};

/// Limits used to answer the puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Directories at most this large count as small.
    pub small: u64,
    /// Total capacity of the device.
    pub capacity: u64,
    /// Free space required on the device.
    pub required: u64,
}

impl Limits {
    /// How much needs to be deleted given that `used` is in use.
    ///
    /// ```
    /// use disk::Limits;
    ///
    /// let limits = Limits::default();
    /// assert_eq!(limits.space_to_clear(48381165), 8381165);
    /// assert_eq!(limits.space_to_clear(100), 0);
    /// ```
    #[inline]
    pub fn space_to_clear(&self, used: u64) -> u64 {
        let free = self.capacity.saturating_sub(used);
        self.required.saturating_sub(free)
    }
}

impl Default for Limits {
    #[inline]
    fn default() -> Self {
        Self {
            small: 100_000,
            capacity: 70_000_000,
            required: 30_000_000,
        }
    }
}

/// Sum of the sizes of all small directories.
#[inline]
pub fn part1(root: &Dir, limits: &Limits) -> u64 {
    root.sum_of_small_subtrees(limits.small)
}

/// The smallest directory which would free up enough space if deleted.
pub fn part2<'a>(root: &'a Dir, limits: &Limits) -> Option<&'a Dir> {
    let needed = limits.space_to_clear(root.size());

    let mut best = None::<(u64, &Dir)>;

    for dir in root.find_subtrees_at_least(needed) {
        let size = dir.size();

        if best.map_or(true, |(best, _)| size < best) {
            best = Some((size, dir));
        }
    }

    let (_, dir) = best?;
    log::debug!("deleting {}", dir.describe_self());
    Some(dir)
}

/// Answer both parts of the puzzle.
pub fn solve(root: &Dir, limits: &Limits) -> Result<(u64, u64), SolveError> {
    let p1 = part1(root, limits);

    let Some(dir) = part2(root, limits) else {
        return Err(SolveError::NoCandidate {
            needed: limits.space_to_clear(root.size()),
        });
    };

    Ok((p1, dir.size()))
}
