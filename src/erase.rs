//! Screen and line erasure sequences (ED / EL).

/// Erases the screen and the scrollback buffer (`CSI 3J`).
pub const ALL: &str = "\x1b[3J";

/// Screen erasure relative to the cursor (ED).
pub mod screen {
    /// Erases from the cursor to the end of the screen (`CSI 0J`).
    pub const END: &str = "\x1b[0J";

    /// Erases from the start of the screen to the cursor (`CSI 1J`).
    pub const BEGIN: &str = "\x1b[1J";

    /// Erases the entire visible screen (`CSI 2J`). Scrollback survives;
    /// see [`crate::erase::ALL`] for that.
    pub const CLEAR: &str = "\x1b[2J";
}

/// Line erasure relative to the cursor (EL). None of these move the cursor.
pub mod line {
    /// Erases from the cursor to the end of the line (`CSI 0K`).
    pub const END: &str = "\x1b[0K";

    /// Erases from the start of the line to the cursor (`CSI 1K`).
    pub const BEGIN: &str = "\x1b[1K";

    /// Erases the entire line (`CSI 2K`).
    pub const CLEAR: &str = "\x1b[2K";
}
