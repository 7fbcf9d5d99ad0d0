//! Helpers shared by puzzle binaries.

pub mod cli;
pub mod input;

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::cli::Opts;
    pub use crate::input::Input;
    pub use anyhow::{anyhow, bail, Context, Result};
}

/// Load the input called `$name` as selected by the given [cli::Opts].
///
/// Inputs live in the `inputs` directory next to the manifest of the crate
/// invoking this macro.
#[macro_export]
macro_rules! input {
    ($opts:expr, $name:literal) => {{
        let path = $opts.input_path(env!("CARGO_MANIFEST_DIR"), $name);
        $crate::input::Input::open(path)?
    }};
}
