use colored::*;

use crate::terminal::print;

const BANNER: &str = r#"
  _____      ____ _ _ __  _ __ ___   ___  ___| |_
 / __\ \ /\ / / _` | '_ \| '_ ` _ \ / _ \/ _ \ __|
 \__ \\ V  V / (_| | |_) | | | | | |  __/  __/ |_
 |___/ \_/\_/ \__,_| .__/|_| |_| |_|\___|\___|\__|
                   |_|
"#;

const TAGLINE: &str = "trade what you have for what you want";

pub fn print() {
    print::print(&format!("{}", BANNER.bright_green()));
    print::centerln(&format!("{}", TAGLINE.italic().bright_black()));
}
