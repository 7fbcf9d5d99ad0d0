//! CLI helpers.

mod output;
mod output_eq;
mod stdout_logger;

#[cfg(test)]
mod tests;

use core::fmt;
use core::str::FromStr;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{anyhow, bail, Context, Result};
use serde::Serialize;

pub(self) use self::output::{Output, OutputKind};
pub use self::output_eq::OutputEq;

static STDOUT_LOGGER: stdout_logger::StdoutLogger = stdout_logger::StdoutLogger;

/// Input options.
#[derive(Debug, Default)]
pub struct Opts {
    /// Run in verbose mode.
    verbose: bool,
    /// Output JSON lines.
    json: bool,
    /// Use the example input.
    example: bool,
    /// Explicit path to the input.
    input: Option<PathBuf>,
    /// Parameter overrides passed through `-D <key>=<value>`.
    params: Vec<(String, String)>,
}

impl Opts {
    /// Parse CLI options and install the logger.
    pub fn parse() -> Result<Self> {
        let opts = Self::parse_from(std::env::args_os().skip(1))?;

        if !opts.json {
            log::set_max_level(if opts.verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            });

            log::set_logger(&STDOUT_LOGGER)
                .map_err(|error| anyhow!("failed to set log: {error}"))?;
        }

        Ok(opts)
    }

    /// Parse options from the given arguments, not including the name of the
    /// program.
    pub fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut opts = Self::default();
        let mut it = args.into_iter();

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "--verbose" => {
                    opts.verbose = true;
                }
                "--json" => {
                    opts.json = true;
                }
                "--example" => {
                    opts.example = true;
                }
                "--input" => {
                    let input = it.next().context("missing argument to `--input`")?;
                    opts.input = Some(PathBuf::from(input));
                }
                "-D" => {
                    let param = it.next().context("missing argument to `-D`")?;
                    let param = param
                        .to_str()
                        .context("missing string argument to `-D`")?;

                    let Some((key, value)) = param.split_once('=') else {
                        bail!("bad argument to `-D`, expected `<key>=<value>`: {param}");
                    };

                    opts.params.push((key.to_owned(), value.to_owned()));
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        Ok(opts)
    }

    /// Test if the example input is selected.
    #[inline]
    pub fn is_example(&self) -> bool {
        self.example && self.input.is_none()
    }

    /// Test if any parameters have been overriden.
    #[inline]
    pub fn has_params(&self) -> bool {
        !self.params.is_empty()
    }

    /// Path to the input called `name`, under the `inputs` directory of
    /// `manifest_dir` unless an explicit input was given.
    pub fn input_path(&self, manifest_dir: &str, name: &str) -> PathBuf {
        if let Some(input) = &self.input {
            return input.clone();
        }

        let file = if self.example {
            format!("{name}-example.txt")
        } else {
            format!("{name}.txt")
        };

        Path::new(manifest_dir).join("inputs").join(file)
    }

    /// Get the parameter `key`, the last one wins if it's been specified
    /// multiple times.
    pub fn param<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let Some((_, value)) = self.params.iter().rev().find(|(k, _)| k == key) else {
            return Ok(None);
        };

        let value = value
            .parse()
            .with_context(|| anyhow!("bad parameter `{key}`: {value}"))?;

        Ok(Some(value))
    }

    fn output_kind(&self) -> OutputKind {
        if self.json {
            OutputKind::Json
        } else {
            OutputKind::Normal
        }
    }
}

/// Run a two part solution, print its answers and compare them against
/// `expected` if present.
pub fn run<T, A, B, C, D>(opts: &Opts, expected: Option<(C, D)>, task: T) -> Result<ExitCode>
where
    T: FnOnce() -> Result<(A, B)>,
    A: fmt::Debug + fmt::Display + Serialize + OutputEq<C>,
    B: fmt::Debug + fmt::Display + Serialize + OutputEq<D>,
    C: fmt::Debug,
    D: fmt::Debug,
{
    let stdout = std::io::stdout();
    let mut o = Output::new(stdout.lock(), opts.output_kind());

    if let Err(e) = run_inner(&mut o, expected, task) {
        o.error(format_args!("{e:#}"))?;
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

fn run_inner<T, A, B, C, D>(
    o: &mut Output<impl Write>,
    expected: Option<(C, D)>,
    task: T,
) -> Result<()>
where
    T: FnOnce() -> Result<(A, B)>,
    A: fmt::Debug + fmt::Display + Serialize + OutputEq<C>,
    B: fmt::Debug + fmt::Display + Serialize + OutputEq<D>,
    C: fmt::Debug,
    D: fmt::Debug,
{
    let value = task()?;

    o.answer(1, &value.0)?;
    o.answer(2, &value.1)?;

    if let Some(expected) = &expected {
        if !value.output_eq(expected) {
            bail!("{value:?} (value) != {expected:?} (expected)");
        }

        o.info("answers match the expected output")?;
    }

    Ok(())
}
