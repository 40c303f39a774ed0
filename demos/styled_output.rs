// demos/styled_output.rs
// Prints a sampler of styled text, 256-color swatches, and truecolor ramps.

use ansi_seq::{color, cursor, erase, graphic};

fn main() {
    print!("{}{}", erase::screen::CLEAR, cursor::HOME);

    println!("{}bold{}", graphic::bold::ENABLE, graphic::RESET);
    println!("{}dim{}", graphic::dim::ENABLE, graphic::RESET);
    println!("{}italic{}", graphic::italic::ENABLE, graphic::RESET);
    println!("{}underline{}", graphic::underline::ENABLE, graphic::RESET);
    println!("{}inverse{}", graphic::inverse::ENABLE, graphic::RESET);
    println!("{}strike{}", graphic::strike::ENABLE, graphic::RESET);

    // 16 base palette entries
    for n in 0..16 {
        print!("{}  ", color::background::id(n));
    }
    println!("{}", graphic::RESET);

    // grayscale ramp
    for n in 232..=255 {
        print!("{} ", color::background::id(n));
    }
    println!("{}", graphic::RESET);

    // truecolor red-to-blue sweep
    for i in 0..64 {
        let t = (i * 4) as u8;
        print!("{} ", color::background::rgb(255 - t, 0, t));
    }
    println!("{}", graphic::RESET);
}
