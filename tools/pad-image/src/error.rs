// SPDX-License-Identifier: MPL-2.0

use std::{error::Error, fmt, io, path::PathBuf};

use crate::size::TargetSize;

/// Print an error message to stderr with the `[Error]` tag.
#[macro_export]
macro_rules! error_msg {
    () => {
        eprintln!()
    };
    ($($arg:tt)*) => {
        eprintln!("[Error]: {}", format!($($arg)*))
    };
}

/// Errors raised while reading, padding or writing an image.
#[derive(Debug)]
pub enum PadError {
    /// The source image could not be read.
    ReadSource { path: PathBuf, source: io::Error },
    /// The source image is longer than the requested size.
    SizeExceeded { actual: u64, target: u64 },
    /// The requested size cannot be allocated as a buffer on this host.
    TargetTooLarge(TargetSize),
    /// The padded image could not be written.
    WriteDestination { path: PathBuf, source: io::Error },
}

impl fmt::Display for PadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PadError::ReadSource { path, source } => {
                write!(f, "failed to read {:?}: {}", path, source)
            }
            PadError::SizeExceeded { actual, target } => write!(
                f,
                "data of {} bytes does not fit in target size of {} bytes",
                actual, target
            ),
            PadError::TargetTooLarge(target) => {
                write!(f, "target size {} cannot be held in memory", target)
            }
            PadError::WriteDestination { path, source } => {
                write!(f, "failed to write {:?}: {}", path, source)
            }
        }
    }
}

impl Error for PadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PadError::ReadSource { source, .. } | PadError::WriteDestination { source, .. } => {
                Some(source)
            }
            PadError::SizeExceeded { .. } | PadError::TargetTooLarge(_) => None,
        }
    }
}

/// Errors raised while parsing a textual target size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SizeParseError {
    Empty,
    Negative(String),
    InvalidDigit(String),
    Overflow(String),
}

impl fmt::Display for SizeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeParseError::Empty => write!(f, "empty size literal"),
            SizeParseError::Negative(literal) => {
                write!(f, "size must not be negative: {}", literal)
            }
            SizeParseError::InvalidDigit(literal) => {
                write!(f, "invalid size literal: {}", literal)
            }
            SizeParseError::Overflow(literal) => {
                write!(f, "size does not fit in 64 bits: {}", literal)
            }
        }
    }
}

impl Error for SizeParseError {}
