use owo_colors::OwoColorize;
use std::fmt::Display;

/// Terminal styling switch. Plain output is byte-for-byte free of escapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    color: bool,
}

impl Style {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn heading(&self, text: impl Display) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn value(&self, text: impl Display) -> String {
        if self.color {
            text.cyan().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn warning(&self, text: impl Display) -> String {
        if self.color {
            text.yellow().bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn muted(&self, text: impl Display) -> String {
        if self.color {
            text.bright_black().to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_style_has_no_escapes() {
        let style = Style::plain();
        assert_eq!(style.heading("title"), "title");
        assert_eq!(style.value(42), "42");
    }

    #[test]
    fn test_color_style_wraps_text() {
        let styled = Style::new(true).warning("careful");
        assert!(styled.contains("careful"));
        assert!(styled.contains('\u{1b}'));
    }
}
