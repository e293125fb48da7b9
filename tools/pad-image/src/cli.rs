// SPDX-License-Identifier: MPL-2.0

use std::{path::PathBuf, process};

use clap::Parser;

use crate::{
    error::PadError,
    error_msg,
    pad::{PadReport, pad_file},
    size::TargetSize,
};

/// Exit codes of the `pad-image` binary. Code 2 is left to `clap` for usage errors.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Errno {
    ReadSource = 3,
    SizeExceeded = 4,
    WriteDestination = 5,
    TargetTooLarge = 6,
}

impl From<&PadError> for Errno {
    fn from(err: &PadError) -> Self {
        match err {
            PadError::ReadSource { .. } => Errno::ReadSource,
            PadError::SizeExceeded { .. } => Errno::SizeExceeded,
            PadError::WriteDestination { .. } => Errno::WriteDestination,
            PadError::TargetTooLarge(_) => Errno::TargetTooLarge,
        }
    }
}

pub fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        error_msg!("{}", err);
        process::exit(Errno::from(&err) as _);
    }
}

pub fn run(cli: &Cli) -> Result<PadReport, PadError> {
    debug!("{:?}", cli);
    pad_file(&cli.source, cli.size, &cli.destination)
}

/// Zero-pad a binary image to the exact size of the region it is flashed into
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The image to pad.
    pub source: PathBuf,

    /// The size of the output in bytes, decimal or prefixed with `0x`, `0o` or `0b`.
    #[arg(value_name = "SIZE")]
    pub size: TargetSize,

    /// Where to write the padded image. Overwritten if it exists.
    pub destination: PathBuf,
}
