//! Configuration for the auction driver.
//!
//! The surface is intentionally small: at most one positional argument.
//!
//! - no argument => commands are read from standard input
//! - `<path>`    => commands are read from the named file

use std::path::PathBuf;

use anyhow::{bail, Result};

/// Driver configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Input file; `None` means standard input.
    pub input: Option<PathBuf>,
}

impl Config {
    /// Construct a `Config` from the argument list (program name already
    /// stripped).
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let input = args.next().map(PathBuf::from);

        if let Some(extra) = args.next() {
            bail!(
                "unexpected argument \"{}\"; usage: auction-cli [input-file]",
                extra
            );
        }

        Ok(Config { input })
    }
}
