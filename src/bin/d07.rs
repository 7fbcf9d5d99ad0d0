use std::process::ExitCode;

use disk::{Entry, Limits};
use lib::prelude::*;

/// Known answers for the example input.
const EXPECTED: (u64, u64) = (95437, 24933642);

fn main() -> Result<ExitCode> {
    let opts = Opts::parse()?;
    let input = lib::input!(opts, "d07");
    let limits = limits(&opts)?;

    let expected = (opts.is_example() && !opts.has_params()).then_some(EXPECTED);

    lib::cli::run(&opts, expected, || solve(&input, &limits))
}

/// Build limits from defaults and parameter overrides.
fn limits(opts: &Opts) -> Result<Limits> {
    let mut limits = Limits::default();

    if let Some(small) = opts.param("small")? {
        limits.small = small;
    }

    if let Some(capacity) = opts.param("capacity")? {
        limits.capacity = capacity;
    }

    if let Some(required) = opts.param("required")? {
        limits.required = required;
    }

    Ok(limits)
}

fn solve(input: &Input, limits: &Limits) -> Result<(u64, u64)> {
    let path = input.path().display();

    let lines = input
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| anyhow!("{path}"))?;

    let root = match disk::parse(lines) {
        Ok(root) => root,
        Err(aborted) => {
            log::error!("{path}:{aborted}, continuing with partial tree");
            aborted.into_root()
        }
    };

    log::debug!(
        "{} directories, {} used",
        root.find_subtrees_at_least(0).len(),
        root.size()
    );

    for line in root.describe() {
        log::debug!("{line}");
    }

    Ok(disk::solve(&root, limits)?)
}
