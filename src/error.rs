use thiserror::Error;

/// Errors from operations on user-supplied input.
///
/// Misuse of the API itself, such as reading past the end of a view, panics
/// instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid range [{min}, {max}]: bounds must be finite and min <= max")]
    InvalidRange { min: String, max: String },

    #[error("no unit in size {0:?} (format: {{num}}{{B/KiB/MiB/GiB}}, e.g. 8GiB)")]
    MissingUnit(String),

    #[error("failed to parse size {0:?} (format: {{num}}{{B/KiB/MiB/GiB}}, e.g. 8GiB)")]
    InvalidSize(String),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
