//! Screen mode switching and screen save/restore.
//!
//! Mode codes are the ANSI.SYS set. They form a closed enumeration, so the
//! [`Mode`] enum is the whole boundary check: there is no way to ask for an
//! unrecognized code.

use crate::seq::CSI;

/// Recognized screen modes (ANSI.SYS code table).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Mode {
    /// 40x25 monochrome text.
    Mono40x25 = 0,
    /// 40x25 color text.
    Color40x25 = 1,
    /// 80x25 monochrome text.
    Mono80x25 = 2,
    /// 80x25 color text.
    Color80x25 = 3,
    /// 320x200, 4 colors.
    FourColor320x200 = 4,
    /// 320x200 monochrome.
    Mono320x200 = 5,
    /// 640x200 monochrome.
    Mono640x200 = 6,
    /// Line wrapping at the right margin.
    LineWrap = 7,
    /// 320x200 color.
    Color320x200 = 13,
    /// 640x200, 16 colors.
    Color640x200 = 14,
    /// 640x350 monochrome.
    Mono640x350 = 15,
    /// 640x350, 16 colors.
    Color640x350 = 16,
    /// 640x480 monochrome.
    Mono640x480 = 17,
    /// 640x480, 16 colors.
    Color640x480 = 18,
    /// 320x200, 256 colors. Set-only in the ANSI.SYS table.
    Color256 = 19,
}

/// Sets screen mode `mode` (`CSI =n h`).
pub fn set(mode: Mode) -> String {
    format!("{}={}h", CSI, mode as u8)
}

/// Resets screen mode `mode` (`CSI =n l`).
///
/// The ANSI.SYS table defines no reset for [`Mode::Color256`]; asking for one
/// emits the sequence verbatim anyway and the terminal decides, consistent
/// with the crate-wide pass-through rule.
pub fn reset(mode: Mode) -> String {
    format!("{}={}l", CSI, mode as u8)
}

/// Saves the screen contents (`CSI 47h`).
pub const SAVE: &str = "\x1b[47h";

/// Restores the screen contents saved by [`SAVE`] (`CSI 47l`).
pub const RESTORE: &str = "\x1b[47l";
