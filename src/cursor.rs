//! Cursor movement, visibility, and position sequences.
//!
//! Rows and columns are 1-based, as the terminal counts them: `goto(1, 1)`
//! is the top-left cell. Every builder takes its count explicitly and always
//! emits it; the common no-argument forms are precomputed constants such as
//! [`HOME`].

use crate::seq::csi;

/// Moves the cursor up `n` rows (`CSI n A`).
pub fn up(n: u16) -> String {
    csi('A', &[n])
}

/// Moves the cursor down `n` rows (`CSI n B`).
pub fn down(n: u16) -> String {
    csi('B', &[n])
}

/// Moves the cursor right `n` columns (`CSI n C`).
pub fn forward(n: u16) -> String {
    csi('C', &[n])
}

/// Moves the cursor left `n` columns (`CSI n D`).
pub fn back(n: u16) -> String {
    csi('D', &[n])
}

/// Moves the cursor to column `n` in the current row (`CSI n G`).
pub fn col(n: u16) -> String {
    csi('G', &[n])
}

/// Moves the cursor to `row`, `col` (CUP, `CSI row ; col H`).
pub fn goto(row: u16, col: u16) -> String {
    csi('H', &[row, col])
}

/// Moves the cursor to `row`, `col` (HVP, `CSI row ; col f`).
///
/// Same shape as [`goto`] with terminator `f`. Terminals treat the two
/// identically; HVP is classified as a format effector rather than an editor
/// function.
pub fn hvp(row: u16, col: u16) -> String {
    csi('f', &[row, col])
}

/// Whole-line cursor movement.
pub mod line {
    use crate::seq::csi;

    /// Moves the cursor to the start of the line `n` rows down (`CSI n E`).
    pub fn next(n: u16) -> String {
        csi('E', &[n])
    }

    /// Moves the cursor to the start of the line `n` rows up (`CSI n F`).
    pub fn prev(n: u16) -> String {
        csi('F', &[n])
    }
}

/// Cursor to top-left, `goto(1, 1)` precomputed.
pub const HOME: &str = "\x1b[1;1H";

/// Makes the cursor visible.
pub const SHOW: &str = "\x1b[?25h";

/// Hides the cursor.
pub const HIDE: &str = "\x1b[?25l";

/// Saves the cursor position and attributes (DECSC, `ESC 7`).
pub const SAVE: &str = "\x1b7";

/// Restores the cursor position and attributes saved by [`SAVE`] (DECRC).
pub const RESTORE: &str = "\x1b8";

/// Requests a cursor position report (DSR, `CSI 6n`).
///
/// The terminal answers on stdin with `ESC [ row ; col R`. This crate only
/// builds the request; reading the reply is the caller's problem.
pub const REPORT_POSITION: &str = "\x1b[6n";
