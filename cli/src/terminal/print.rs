use colored::*;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

const BANNER_0: &str = r#"
        _    _   _  _   _  _   _  __  __
       / \  | \ | || \ | || | | ||  \/  |
      / _ \ |  \| ||  \| || | | || |\/| |
     / ___ \| |\  || |\  || |_| || |  | |
    /_/   \_\_| \_||_| \_| \___/ |_|  |_|
"#;

const BANNER_1: &str = r#"
            ▄▀█ █▄ █ █▄ █ █ █ █▀▄▀█
            █▀█ █ ▀█ █ ▀█ █▄█ █ ▀ █
"#;

pub fn banner(no_banner: bool) {
    if no_banner {
        return;
    }

    initialize();
    let n: u8 = rand::random_range(0..=1);
    match n {
        0 => println!("{}", BANNER_0.green()),
        _ => println!("{}", BANNER_1.truecolor(255, 165, 0)),
    }
    centerln(&"estimates a birth year from an age".italic().dimmed().to_string());
}

fn initialize() {
    let text_content: String = format!("⟦ ANNUM v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═".repeat((TOTAL_WIDTH - text_width) / 2).bright_black();
    println!("{}{}{}", sep, text, sep);
}

pub fn header(msg: &str, no_banner: bool) {
    if no_banner {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    println!("{}", line);
}

pub fn centerln(msg: &str) {
    let width: usize = console::measure_text_width(msg);
    let space: String = " ".repeat(TOTAL_WIDTH.saturating_sub(width) / 2);
    println!("{}{}", space, msg);
}

pub fn end_of_program(no_banner: bool) {
    if no_banner {
        return;
    }

    println!("{}", "═".repeat(TOTAL_WIDTH).bright_black());
}
