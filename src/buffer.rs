//! Alternate screen buffer switching.
//!
//! Full-screen applications enable the alternate buffer on startup and
//! disable it on exit, which restores the shell's scrollback untouched.

/// Switches to the alternate screen buffer (`CSI 1049h`).
pub const ENABLE: &str = "\x1b[1049h";

/// Switches back to the normal screen buffer (`CSI 1049l`).
pub const DISABLE: &str = "\x1b[1049l";
