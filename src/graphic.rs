//! Select Graphic Rendition (SGR) sequences: text styling.
//!
//! Each style is a nested module with `ENABLE` / `DISABLE` constants (blink
//! has `SLOW` / `RAPID` / `DISABLE`), all of the shape `CSI code m` from the
//! standard SGR table.
//!
//! Bold and dim share disable code 22: the standard defines 22 as "normal
//! intensity", which clears both at once. [`bold::DISABLE`] and
//! [`dim::DISABLE`] are therefore the same sequence on purpose.

use crate::seq::csi;

/// Resets all graphic rendition attributes (`CSI 0m`).
pub const RESET: &str = "\x1b[0m";

/// Selects alternative font `n` for n in 0..=9 (`CSI (10+n) m`).
///
/// Font 0 is the primary font. Values above 9 are not range-checked and
/// select unrelated SGR codes; keeping `n` in range is the caller's job.
pub fn font(n: u8) -> String {
    csi('m', &[10 + n as u16])
}

pub mod bold {
    pub const ENABLE: &str = "\x1b[1m";
    /// Normal intensity; also clears dim.
    pub const DISABLE: &str = "\x1b[22m";
}

pub mod dim {
    pub const ENABLE: &str = "\x1b[2m";
    /// Normal intensity; also clears bold.
    pub const DISABLE: &str = "\x1b[22m";
}

pub mod italic {
    pub const ENABLE: &str = "\x1b[3m";
    pub const DISABLE: &str = "\x1b[23m";
}

pub mod underline {
    pub const ENABLE: &str = "\x1b[4m";
    pub const DISABLE: &str = "\x1b[24m";
}

pub mod blink {
    /// Blink at the terminal's slow rate, typically under 150 per minute.
    pub const SLOW: &str = "\x1b[5m";
    /// Blink at the terminal's rapid rate. Rarely supported.
    pub const RAPID: &str = "\x1b[6m";
    pub const DISABLE: &str = "\x1b[25m";
}

pub mod inverse {
    pub const ENABLE: &str = "\x1b[7m";
    pub const DISABLE: &str = "\x1b[27m";
}

pub mod hide {
    pub const ENABLE: &str = "\x1b[8m";
    pub const DISABLE: &str = "\x1b[28m";
}

pub mod strike {
    pub const ENABLE: &str = "\x1b[9m";
    pub const DISABLE: &str = "\x1b[29m";
}
