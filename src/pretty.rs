//! Human-readable sizes and durations.

const BYTE_UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
const TIME_UNITS: [&str; 4] = ["ns", "us", "ms", "s"];

/// Formats `value` in the largest unit that keeps it at or below `scale`,
/// with six decimal places.
///
/// `units[0]` is the unit of `value`; each following unit is `scale` times
/// the previous one. The last unit absorbs everything larger.
///
/// ```
/// use cherry::pretty::pretty;
///
/// assert_eq!(pretty(1500.0, 1000.0, &["m", "km"]), "1.500000 km");
/// assert_eq!(pretty(1000.0, 1000.0, &["m", "km"]), "1000.000000 m");
/// ```
///
/// # Panics
///
/// Panics if `units` is empty.
pub fn pretty(value: f64, scale: f64, units: &[&str]) -> String {
    assert!(!units.is_empty(), "pretty needs at least one unit");
    let mut value = value;
    let mut level = 0;
    while value > scale && level + 1 < units.len() {
        value /= scale;
        level += 1;
    }
    format!("{value:.6} {}", units[level])
}

/// Formats a byte count with binary units up to GiB.
pub fn pretty_bytes(size: usize) -> String {
    pretty(size as f64, 1024.0, &BYTE_UNITS)
}

/// Formats a nanosecond duration.
///
/// With `fixed` the result is always in milliseconds; otherwise the unit is
/// picked from ns, us, ms and s.
pub fn pretty_nanoseconds(duration: u64, fixed: bool) -> String {
    if fixed {
        format!("{:.6} ms", duration as f64 / 1e6)
    } else {
        pretty(duration as f64, 1000.0, &TIME_UNITS)
    }
}
