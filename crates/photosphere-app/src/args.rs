//! Command-line arguments.

use std::path::PathBuf;

use anyhow::{Result, bail};

pub const USAGE: &str = "usage: photosphere-layout <photos.json> [config.toml]";

/// Where to read the photo list and layout config from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub photos: PathBuf,
    pub config: Option<PathBuf>,
}

impl Args {
    /// Parse the arguments after the program name. The config path falls
    /// back to `env_config` (the `PHOTOSPHERE_CONFIG` variable).
    pub fn parse(
        mut args: impl Iterator<Item = String>,
        env_config: Option<String>,
    ) -> Result<Self> {
        let Some(photos) = args.next() else {
            bail!("missing photo list\n{USAGE}");
        };
        let config = args.next().or(env_config).map(PathBuf::from);
        if let Some(extra) = args.next() {
            bail!("unexpected argument `{extra}`\n{USAGE}");
        }
        Ok(Self {
            photos: PathBuf::from(photos),
            config,
        })
    }
}
