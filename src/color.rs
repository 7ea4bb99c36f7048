//! Console colours.
//!
//! Styling goes through [`nu_ansi_term`]. The escape sequences are also
//! exposed as constants for callers that build lines by hand.
//!
//! ```
//! use cherry::color::{self, Color};
//!
//! assert_eq!(color::paint(Color::Green, "ok"), "\x1b[32mok\x1b[0m");
//! assert_eq!(format!("{}ok{}", color::GREEN, color::RESET), "\x1b[32mok\x1b[0m");
//! ```

pub use nu_ansi_term::{Color, Style};

pub const RESET: &str = "\x1b[0m";
pub const BLACK: &str = "\x1b[30m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const WHITE: &str = "\x1b[37m";

/// Renders `text` in `style`, followed by a reset.
///
/// Accepts a [`Color`] or a full [`Style`].
pub fn paint(style: impl Into<Style>, text: &str) -> String {
    style.into().paint(text).to_string()
}
