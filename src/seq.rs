use std::fmt::Write;

/// Escape byte, the first byte of every sequence this crate produces.
pub const ESC: &str = "\x1b";

/// Control Sequence Introducer (`ESC [`).
pub const CSI: &str = "\x1b[";

/// Device Control String introducer (`ESC P`).
pub const DCS: &str = "\x1bP";

/// Operating System Command introducer (`ESC ]`).
pub const OSC: &str = "\x1b]";

/// Builds a CSI sequence: `ESC [ params.join(";") final_byte`.
///
/// The parameter list is emitted verbatim, in order, separated by `;`.
/// An empty slice emits no parameters at all (`csi('H', &[])` is `"\x1b[H"`).
/// Values are not range-checked; the terminal is the arbiter of what it
/// accepts.
pub fn csi(final_byte: char, params: &[u16]) -> String {
    let mut out = String::with_capacity(CSI.len() + params.len() * 4 + 1);
    out.push_str(CSI);
    for (i, p) in params.iter().enumerate() {
        if i > 0 {
            out.push(';');
        }
        // writing an integer into a String cannot fail
        let _ = write!(out, "{}", p);
    }
    out.push(final_byte);
    out
}
