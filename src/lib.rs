//! # ANSI Sequence Builders
//!
//! A static table of ANSI/VT100 terminal control-sequence builders. Every
//! exported value is either a precomputed `&'static str` or a pure function
//! that concatenates a fixed prefix, numeric parameters, and a terminator
//! into a `String`. Nothing here parses input, touches a stream, or holds
//! state — callers write the returned bytes to the terminal themselves.
//!
//! The families mirror the way terminals group these sequences:
//!
//! - [`cursor`] — movement, visibility, save/restore, position report
//! - [`erase`] — screen and line erasure
//! - [`graphic`] — SGR text styling (bold, italic, blink, ...)
//! - [`color`] — 256-color palette and truecolor selection
//! - [`screen`] — screen modes and screen save/restore
//! - [`buffer`] — alternate screen buffer
//! - [`osc`] — string-valued commands (title, clipboard, hyperlinks)
//!
//! Numeric parameters are not range-checked beyond what their types enforce:
//! out-of-range values pass through verbatim and the terminal decides what to
//! do with them.

pub mod buffer;
pub mod color;
pub mod cursor;
pub mod erase;
pub mod graphic;
pub mod osc;
pub mod screen;
pub mod seq;

pub use screen::Mode;
pub use seq::{csi, CSI, DCS, ESC, OSC};
