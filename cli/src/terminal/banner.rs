use colored::*;

use crate::terminal::print;

const BANNER: &str = r#"
     ___ _____ ___  ___ ___ ___ ___  ___  _  _ _____ 
    / __|_   _/ _ \| _ \ __| __| _ \/ _ \| \| |_   _|
    \__ \ | || (_) |   / _|| _||   / (_) | .` | | |  
    |___/ |_| \___/|_|_\___|_| |_|_\\___/|_|\_| |_|  
"#;

pub fn print() {
    print::print(&format!("{}", BANNER.bright_cyan().bold()));
}
