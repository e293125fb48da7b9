// SPDX-License-Identifier: MPL-2.0

//! Parsing of the target size given on the command line.
//!
//! Sizes are integer literals whose base is picked by their prefix:
//! `0x` for hexadecimal, `0o` for octal, `0b` for binary and none for
//! decimal. Single underscores may group digits, e.g. `0x10_0000`.

use std::{fmt, str::FromStr};

use crate::error::SizeParseError;

/// The exact number of bytes a padded image must occupy.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TargetSize(u64);

impl TargetSize {
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    pub const fn bytes(self) -> u64 {
        self.0
    }
}

impl From<u64> for TargetSize {
    fn from(bytes: u64) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for TargetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:#x})", self.0, self.0)
    }
}

impl FromStr for TargetSize {
    type Err = SizeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let literal = s.trim();
        if literal.is_empty() {
            return Err(SizeParseError::Empty);
        }
        if literal.starts_with('-') {
            return Err(SizeParseError::Negative(literal.to_string()));
        }
        let invalid = || SizeParseError::InvalidDigit(literal.to_string());

        let unsigned = literal.strip_prefix('+').unwrap_or(literal);
        let (radix, digits) = split_radix(unsigned);
        let digits = strip_underscores(digits, radix != 10).ok_or_else(invalid)?;

        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return Err(invalid());
        }
        // A leading zero on a decimal literal reads like octal, so only
        // spellings of zero itself may start with one.
        if radix == 10 && digits.starts_with('0') && digits.bytes().any(|b| b != b'0') {
            return Err(invalid());
        }

        u64::from_str_radix(&digits, radix)
            .map(Self)
            .map_err(|_| SizeParseError::Overflow(literal.to_string()))
    }
}

/// Split off a base prefix, returning the radix and the remaining digits.
fn split_radix(literal: &str) -> (u32, &str) {
    let bytes = literal.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return (10, literal);
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return (10, literal),
    };
    (radix, &literal[2..])
}

/// Remove digit-grouping underscores. Returns `None` if they are misplaced.
fn strip_underscores(digits: &str, after_prefix: bool) -> Option<String> {
    if digits.ends_with('_') || digits.contains("__") {
        return None;
    }
    if digits.starts_with('_') && !after_prefix {
        return None;
    }
    Some(digits.replace('_', ""))
}
