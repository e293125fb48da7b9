// SPDX-License-Identifier: MPL-2.0

//! Zero-pads a binary image to the exact size of the memory region it is
//! going to be placed in, such as a flash partition.
//!
//! ```no_run
//! use pad_image::{TargetSize, pad_file};
//!
//! let size: TargetSize = "0x10000".parse()?;
//! let report = pad_file("app.bin", size, "app-padded.bin")?;
//! println!("appended {} zero bytes", report.padding_len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#[macro_use]
extern crate log;

pub mod cli;
pub mod error;
pub mod pad;
pub mod size;

pub use crate::{
    error::{PadError, SizeParseError},
    pad::{PadReport, check_fits, pad_file, pad_to_size},
    size::TargetSize,
};
