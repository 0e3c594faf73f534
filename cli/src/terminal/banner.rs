use colored::*;

use crate::terminal::print;

const BANNER_0: &str = r#"
             ████████╗ ██████╗ ██╗   ██╗██████╗
             ╚══██╔══╝██╔═══██╗██║   ██║██╔══██╗
                ██║   ██║   ██║██║   ██║██████╔╝
                ██║   ██║   ██║██║   ██║██╔══██╗
                ██║   ╚██████╔╝╚██████╔╝██║  ██║
                ╚═╝    ╚═════╝  ╚═════╝ ╚═╝  ╚═╝
"#;

const BANNER_1: &str = r#"
                 _____   ___    _   _   ____
                |_   _| / _ \  | | | | |  _ \
                  | |  | | | | | | | | | |_) |
                  | |  | |_| | | |_| | |  _ <
                  |_|   \___/   \___/  |_| \_\
"#;

const BANNER_2: &str = r#"
              ___       ___       ___       ___
             /\  \     /\  \     /\__\     /\  \
             \:\  \   /::\  \   /:/ _/_   /::\  \
             /::\__\ /:/\:\__\ /:/_/\__\ /::\:\__\
            /:/\/__/ \:\/:/  / \:\/:/  / \;:::/  /
            \/__/     \::/  /   \::/  /   |:\/__/
                       \/__/     \/__/     \|__|
"#;

const BANNER_3: &str = r#"
           .-') _                 (`-.      _  .-')
          (  OO) )              _(OO  )_   ( \( -O )
          /     '._ .-'),-----. ,--(_/   ,.,------.
          |'--...__)( OO'  .-. '\   \   /(__/|   /`. '
          '--.  .--'/   |  | |  | \   \ /   / |  /  | |
             |  |   \_) |  |\|  |  \   '   /, |  |_.' |
             |  |     \ |  | |  |   \     /__)|  .  '.'
             |  |      `'  '-'  '    \   /    |  |\  \
             `--'        `-----'      `-'     `--' '--'
"#;

/// Prints one of the banners, picked at random.
pub fn print() {
    let n: u8 = rand::random_range(0..=3);
    let art: ColoredString = match n {
        0 => BANNER_0.bright_green(),
        1 => BANNER_1.truecolor(255, 165, 0),
        2 => BANNER_2.cyan(),
        _ => BANNER_3.truecolor(120, 120, 160),
    };
    print::print(&art.to_string());
}
