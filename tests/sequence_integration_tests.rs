// tests/sequence_integration_tests.rs
//! Integration tests assembling sequences the way real programs emit them.

use ansi_seq::{buffer, color, cursor, erase, graphic, osc, screen, Mode};

/// The byte stream a full-screen application writes on startup.
#[test]
fn fullscreen_app_startup() {
    let mut out = String::new();
    out.push_str(buffer::ENABLE);
    out.push_str(cursor::HIDE);
    out.push_str(erase::screen::CLEAR);
    out.push_str(cursor::HOME);

    assert_eq!(out, "\x1b[1049h\x1b[?25l\x1b[2J\x1b[1;1H");
}

/// The matching teardown stream, restoring the shell exactly.
#[test]
fn fullscreen_app_teardown() {
    let mut out = String::new();
    out.push_str(graphic::RESET);
    out.push_str(cursor::SHOW);
    out.push_str(buffer::DISABLE);

    assert_eq!(out, "\x1b[0m\x1b[?25h\x1b[1049l");
}

/// A status line: position, style, print, restore.
#[test]
fn styled_status_line() {
    let rendered = format!(
        "{}{}{}{} OK {}{}",
        cursor::goto(24, 1),
        graphic::bold::ENABLE,
        color::foreground::rgb(0, 255, 0),
        color::background::id(236),
        graphic::RESET,
        cursor::RESTORE,
    );

    assert_eq!(
        rendered,
        "\x1b[24;1H\x1b[1m\x1b[38;2;0;255;0m\x1b[48;5;236m OK \x1b[0m\x1b8"
    );
}

/// Redrawing a single line in place, as progress indicators do.
#[test]
fn progress_line_redraw() {
    let frame = format!("{}{}42%", cursor::col(1), erase::line::CLEAR);
    assert_eq!(frame, "\x1b[1G\x1b[2K42%");
}

/// Clearing everything including scrollback before a fresh paint.
#[test]
fn full_clear_with_scrollback() {
    let out = format!("{}{}{}", erase::screen::CLEAR, erase::ALL, cursor::HOME);
    assert_eq!(out, "\x1b[2J\x1b[3J\x1b[1;1H");
}

/// Legacy screen-mode dance around a DOS-style mode switch.
#[test]
fn screen_mode_round_trip() {
    let enter = format!("{}{}", screen::SAVE, screen::set(Mode::Color640x480));
    let leave = format!("{}{}", screen::reset(Mode::Color640x480), screen::RESTORE);

    assert_eq!(enter, "\x1b[47h\x1b[=18h");
    assert_eq!(leave, "\x1b[=18l\x1b[47l");
}

/// Title and hyperlink OSC sequences interleave with CSI styling.
#[test]
fn osc_and_csi_interleave() {
    let out = format!(
        "{}{}{}{}",
        osc::title("build: passing"),
        graphic::underline::ENABLE,
        osc::hyperlink("https://ci.example.com/42", "run #42"),
        graphic::underline::DISABLE,
    );

    assert_eq!(
        out,
        "\x1b]0;build: passing\x07\x1b[4m\x1b]8;;https://ci.example.com/42\x07run #42\x1b]8;;\x07\x1b[24m"
    );
}

/// Every exported constant starts with the escape byte and is NUL-free.
#[test]
fn all_constants_start_with_escape() {
    let constants = [
        cursor::HOME,
        cursor::SHOW,
        cursor::HIDE,
        cursor::SAVE,
        cursor::RESTORE,
        cursor::REPORT_POSITION,
        erase::ALL,
        erase::screen::END,
        erase::screen::BEGIN,
        erase::screen::CLEAR,
        erase::line::END,
        erase::line::BEGIN,
        erase::line::CLEAR,
        graphic::RESET,
        graphic::bold::ENABLE,
        graphic::bold::DISABLE,
        graphic::dim::ENABLE,
        graphic::dim::DISABLE,
        graphic::italic::ENABLE,
        graphic::italic::DISABLE,
        graphic::underline::ENABLE,
        graphic::underline::DISABLE,
        graphic::blink::SLOW,
        graphic::blink::RAPID,
        graphic::blink::DISABLE,
        graphic::inverse::ENABLE,
        graphic::inverse::DISABLE,
        graphic::hide::ENABLE,
        graphic::hide::DISABLE,
        graphic::strike::ENABLE,
        graphic::strike::DISABLE,
        screen::SAVE,
        screen::RESTORE,
        buffer::ENABLE,
        buffer::DISABLE,
    ];

    for seq in constants {
        assert_eq!(seq.as_bytes()[0], 0x1b, "bad prefix in {:?}", seq);
        assert!(!seq.as_bytes().contains(&0), "NUL byte in {:?}", seq);
    }
}
