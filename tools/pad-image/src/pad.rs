// SPDX-License-Identifier: MPL-2.0

//! Zero-padding of images to a fixed size.

use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::Path,
};

use crate::{error::PadError, size::TargetSize};

/// What [`pad_file`] did to the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadReport {
    pub source_len: u64,
    pub target_size: TargetSize,
}

impl PadReport {
    /// The number of zero bytes appended after the source data.
    pub fn padding_len(&self) -> u64 {
        self.target_size.bytes() - self.source_len
    }
}

/// Check that `len` bytes fit in `target`.
pub fn check_fits(len: u64, target: TargetSize) -> Result<(), PadError> {
    if len > target.bytes() {
        return Err(PadError::SizeExceeded {
            actual: len,
            target: target.bytes(),
        });
    }
    Ok(())
}

/// Append zero bytes to `data` until it is exactly `target` bytes long.
pub fn pad_to_size(mut data: Vec<u8>, target: TargetSize) -> Result<Vec<u8>, PadError> {
    check_fits(data.len() as u64, target)?;
    let target_len =
        usize::try_from(target.bytes()).map_err(|_| PadError::TargetTooLarge(target))?;
    data.resize(target_len, 0);
    Ok(data)
}

/// Copy `source` to `destination`, zero-padded to exactly `target` bytes.
///
/// The destination is created if absent and overwritten if present. It is
/// only touched once the source is known to fit, so a [`PadError::SizeExceeded`]
/// leaves any existing destination as it was.
pub fn pad_file(
    source: impl AsRef<Path>,
    target: TargetSize,
    destination: impl AsRef<Path>,
) -> Result<PadReport, PadError> {
    let source = source.as_ref();
    let destination = destination.as_ref();

    let data = fs::read(source).map_err(|source_err| PadError::ReadSource {
        path: source.to_path_buf(),
        source: source_err,
    })?;
    let source_len = data.len() as u64;
    debug!("Read {} bytes from {:?}", source_len, source);

    check_fits(source_len, target)?;
    let report = PadReport {
        source_len,
        target_size: target,
    };
    info!(
        "Padding {:?} with {} zero bytes to {} bytes",
        source,
        report.padding_len(),
        target
    );

    write_padded(destination, &data, target).map_err(|source_err| {
        PadError::WriteDestination {
            path: destination.to_path_buf(),
            source: source_err,
        }
    })?;
    info!("Wrote padded image to {:?}", destination);

    Ok(report)
}

fn write_padded(destination: &Path, data: &[u8], target: TargetSize) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(destination)?;
    file.write_all(data)?;
    // Growing the file fills the tail with zeros.
    file.set_len(target.bytes())?;
    Ok(())
}
