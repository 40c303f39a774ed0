//! Operating System Command sequences: string-valued commands.
//!
//! OSC sequences carry free text rather than numeric parameters. All
//! builders here terminate with BEL (`\x07`), the terminator every modern
//! terminal accepts for these commands.

use base64::prelude::*;

use crate::seq::OSC;

/// Sets the window and icon title (`OSC 0 ; text BEL`).
pub fn title(text: &str) -> String {
    format!("{}0;{}\x07", OSC, text)
}

/// Writes `text` to the system clipboard (`OSC 52 ; c ; base64 BEL`).
///
/// The payload is base64-encoded with the standard alphabet; `c` addresses
/// the clipboard selection. Terminals that disallow clipboard writes ignore
/// the sequence.
pub fn clipboard_copy(text: &str) -> String {
    format!("{}52;c;{}\x07", OSC, BASE64_STANDARD.encode(text))
}

/// Wraps `text` in a hyperlink to `uri` (`OSC 8 ;; uri BEL text OSC 8 ;; BEL`).
///
/// The empty second sequence closes the link span.
pub fn hyperlink(uri: &str, text: &str) -> String {
    format!("{osc}8;;{uri}\x07{text}{osc}8;;\x07", osc = OSC)
}
