//! # Colour Codes
//!
//! Translation between user-typed `&` codes and the client's `§` escapes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The escape character the client renders as a colour or format change.
pub const COLOR_CHAR: char = '§';

/// Every character that may follow an escape.
pub const ALL_CODES: &str = "0123456789AaBbCcDdEeFfKkLlMmNnOoRrXx";

/// Returns true if `c` is a recognised colour or format code.
pub fn is_color_code(c: char) -> bool {
    ALL_CODES.contains(c)
}

/// Rewrites `alt` + code pairs into `§` + lower-cased code.
///
/// An `alt` not followed by a valid code is left alone.
///
/// # Examples
///
/// ```
/// use itembuilder::translate_alternate_color_codes;
///
/// assert_eq!(translate_alternate_color_codes('&', "&CRed &lbold"), "§cRed §lbold");
/// assert_eq!(translate_alternate_color_codes('&', "Fish & Chips&"), "Fish & Chips&");
/// ```
pub fn translate_alternate_color_codes(alt: char, text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    for i in 0..chars.len().saturating_sub(1) {
        if chars[i] == alt && is_color_code(chars[i + 1]) {
            chars[i] = COLOR_CHAR;
            chars[i + 1] = chars[i + 1].to_ascii_lowercase();
        }
    }
    chars.into_iter().collect()
}

/// Translates `&` codes, the convention used in configs and commands.
pub fn colorize(text: &str) -> String {
    translate_alternate_color_codes(crate::config::ALT_COLOR_CHAR, text)
}

/// Removes every `§` escape together with its code.
pub fn strip_color(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == COLOR_CHAR {
            if let Some(&next) = chars.peek() {
                if is_color_code(next) {
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

/// Named colour and format codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChatColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
    Magic,
    Bold,
    Strikethrough,
    Underline,
    Italic,
    Reset,
}

impl ChatColor {
    /// Every colour and format, in code order.
    pub const ALL: &'static [ChatColor] = &[
        ChatColor::Black,
        ChatColor::DarkBlue,
        ChatColor::DarkGreen,
        ChatColor::DarkAqua,
        ChatColor::DarkRed,
        ChatColor::DarkPurple,
        ChatColor::Gold,
        ChatColor::Gray,
        ChatColor::DarkGray,
        ChatColor::Blue,
        ChatColor::Green,
        ChatColor::Aqua,
        ChatColor::Red,
        ChatColor::LightPurple,
        ChatColor::Yellow,
        ChatColor::White,
        ChatColor::Magic,
        ChatColor::Bold,
        ChatColor::Strikethrough,
        ChatColor::Underline,
        ChatColor::Italic,
        ChatColor::Reset,
    ];

    /// The character following the escape.
    pub fn code(self) -> char {
        match self {
            ChatColor::Black => '0',
            ChatColor::DarkBlue => '1',
            ChatColor::DarkGreen => '2',
            ChatColor::DarkAqua => '3',
            ChatColor::DarkRed => '4',
            ChatColor::DarkPurple => '5',
            ChatColor::Gold => '6',
            ChatColor::Gray => '7',
            ChatColor::DarkGray => '8',
            ChatColor::Blue => '9',
            ChatColor::Green => 'a',
            ChatColor::Aqua => 'b',
            ChatColor::Red => 'c',
            ChatColor::LightPurple => 'd',
            ChatColor::Yellow => 'e',
            ChatColor::White => 'f',
            ChatColor::Magic => 'k',
            ChatColor::Bold => 'l',
            ChatColor::Strikethrough => 'm',
            ChatColor::Underline => 'n',
            ChatColor::Italic => 'o',
            ChatColor::Reset => 'r',
        }
    }

    /// Looks a code character up, ignoring case.
    pub fn by_char(code: char) -> Option<ChatColor> {
        let code = code.to_ascii_lowercase();
        ChatColor::ALL.iter().copied().find(|color| color.code() == code)
    }

    /// Formats change style rather than colour.
    pub fn is_format(self) -> bool {
        matches!(
            self,
            ChatColor::Magic
                | ChatColor::Bold
                | ChatColor::Strikethrough
                | ChatColor::Underline
                | ChatColor::Italic
        )
    }

    pub fn is_color(self) -> bool {
        !self.is_format() && self != ChatColor::Reset
    }
}

impl fmt::Display for ChatColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", COLOR_CHAR, self.code())
    }
}
