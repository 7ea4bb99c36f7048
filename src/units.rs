//! Size and duration constructors, and size parsing.
//!
//! Sizes are in bytes, durations in nanoseconds.

use crate::{Error, Result};

pub const fn b(size: usize) -> usize {
    size
}

pub const fn kib(size: usize) -> usize {
    size * 1024
}

pub const fn mib(size: usize) -> usize {
    size * 1024 * 1024
}

pub const fn gib(size: usize) -> usize {
    size * 1024 * 1024 * 1024
}

pub const fn ns(duration: u64) -> u64 {
    duration
}

pub const fn us(duration: u64) -> u64 {
    duration * 1_000
}

pub const fn ms(duration: u64) -> u64 {
    duration * 1_000_000
}

pub const fn s(duration: u64) -> u64 {
    duration * 1_000_000_000
}

/// Parses a size such as `8GiB`, `1.5M` or `512B` into bytes.
///
/// The number may be fractional; only the first letter of the unit is
/// significant (`B`, `K`, `M` or `G`). Fractional bytes are truncated.
///
/// ```
/// use cherry::units::{bytes_from, gib};
///
/// assert_eq!(bytes_from("8GiB")?, gib(8));
/// assert_eq!(bytes_from("1.5KiB")?, 1536);
/// assert!(bytes_from("42").is_err());
/// # Ok::<(), cherry::Error>(())
/// ```
pub fn bytes_from(text: &str) -> Result<usize> {
    let trimmed = text.trim();
    let split = trimmed
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e')))
        .unwrap_or(trimmed.len());
    let (number, unit) = trimmed.split_at(split);

    let unit = unit.trim_start();
    if unit.is_empty() {
        tracing::debug!(text, "size has no unit");
        return Err(Error::MissingUnit(text.to_owned()));
    }

    let invalid = || {
        tracing::debug!(text, "unparsable size");
        Error::InvalidSize(text.to_owned())
    };
    let value: f64 = number.parse().map_err(|_| invalid())?;
    if !value.is_finite() || value < 0.0 {
        return Err(invalid());
    }

    let scale = match unit.as_bytes()[0] {
        b'B' => b(1),
        b'K' => kib(1),
        b'M' => mib(1),
        b'G' => gib(1),
        _ => return Err(invalid()),
    };
    Ok((value * scale as f64) as usize)
}
