//! Foreground and background color selection.
//!
//! Two forms per plane: `id(n)` selects from the 256-color palette
//! (`CSI 38;5;n m` / `CSI 48;5;n m`) and `rgb(r, g, b)` selects a direct
//! 24-bit color (`CSI 38;2;r;g;b m` / `CSI 48;2;r;g;b m`).
//!
//! The 256-color palette layout: 0–15 are the standard and bright base
//! colors, 16–231 a 6×6×6 RGB cube, 232–255 a grayscale ramp from dark to
//! light. The `u8` parameter type is the only range enforcement; there is no
//! runtime validation.

/// Foreground color selection (`CSI 38;...m`).
pub mod foreground {
    use crate::seq::csi;

    /// Selects palette color `n` for the foreground (`CSI 38;5;n m`).
    pub fn id(n: u8) -> String {
        csi('m', &[38, 5, n as u16])
    }

    /// Selects a 24-bit foreground color (`CSI 38;2;r;g;b m`).
    pub fn rgb(r: u8, g: u8, b: u8) -> String {
        csi('m', &[38, 2, r as u16, g as u16, b as u16])
    }
}

/// Background color selection (`CSI 48;...m`).
pub mod background {
    use crate::seq::csi;

    /// Selects palette color `n` for the background (`CSI 48;5;n m`).
    pub fn id(n: u8) -> String {
        csi('m', &[48, 5, n as u16])
    }

    /// Selects a 24-bit background color (`CSI 48;2;r;g;b m`).
    pub fn rgb(r: u8, g: u8, b: u8) -> String {
        csi('m', &[48, 2, r as u16, g as u16, b as u16])
    }
}
