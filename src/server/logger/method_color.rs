use colored::{ColoredString, Colorize};

/// Terminal color assigned to a request method.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MethodStyle {
    Blue,
    Green,
    Yellow,
    Red,
    Magenta,
    Cyan,
    Gray,
}

impl MethodStyle {
    /// Case-sensitive: only uppercase tokens are recognized.
    pub fn for_method(method: &str) -> Option<MethodStyle> {
        match method {
            "GET" => Some(MethodStyle::Blue),
            "POST" => Some(MethodStyle::Green),
            "PUT" => Some(MethodStyle::Yellow),
            "DELETE" => Some(MethodStyle::Red),
            "PATCH" => Some(MethodStyle::Magenta),
            "OPTIONS" => Some(MethodStyle::Cyan),
            "HEAD" => Some(MethodStyle::Gray),
            _ => None,
        }
    }

    pub fn paint(self, text: &str) -> ColoredString {
        match self {
            MethodStyle::Blue => text.blue(),
            MethodStyle::Green => text.green(),
            MethodStyle::Yellow => text.yellow(),
            MethodStyle::Red => text.red(),
            MethodStyle::Magenta => text.magenta(),
            MethodStyle::Cyan => text.cyan(),
            MethodStyle::Gray => text.bright_black(),
        }
    }
}

/// Method token in its mapped color; unknown methods pass through untouched.
pub fn colorize_method(method: &str) -> String {
    match MethodStyle::for_method(method) {
        Some(style) => style.paint(method).to_string(),
        None => method.to_string(),
    }
}
