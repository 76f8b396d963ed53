//! Chat formatting
//!
//! Messages and name tags use `§` followed by a code character to switch
//! color or style. Operators type `&` instead since `§` is awkward to enter.

pub const BLACK: &str = "§0";
pub const DARK_BLUE: &str = "§1";
pub const DARK_GREEN: &str = "§2";
pub const DARK_AQUA: &str = "§3";
pub const DARK_RED: &str = "§4";
pub const DARK_PURPLE: &str = "§5";
pub const GOLD: &str = "§6";
pub const GRAY: &str = "§7";
pub const DARK_GRAY: &str = "§8";
pub const BLUE: &str = "§9";
pub const GREEN: &str = "§a";
pub const AQUA: &str = "§b";
pub const RED: &str = "§c";
pub const LIGHT_PURPLE: &str = "§d";
pub const YELLOW: &str = "§e";
pub const WHITE: &str = "§f";
pub const BOLD: &str = "§l";
pub const ITALIC: &str = "§o";
pub const RESET: &str = "§r";

/// Formatting escape character
pub const ESCAPE: char = '§';

fn is_format_code(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), '0'..='9' | 'a'..='g' | 'k'..='o' | 'r')
}

/// Translate `&<code>` sequences into `§<code>`
///
/// An `&` that is not followed by a format code is kept as is, so
/// `"Tom & Jerry"` survives untouched.
pub fn colorize(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '&' {
            if let Some(&next) = chars.peek() {
                if is_format_code(next) {
                    out.push(ESCAPE);
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

/// Remove every `§<code>` pair, leaving plain text (for logs)
pub fn clean(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if c == ESCAPE {
            chars.next();
            continue;
        }
        out.push(c);
    }
    out
}
