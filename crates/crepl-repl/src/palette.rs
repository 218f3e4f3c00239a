//! Terminal colors for REPL messages.

use owo_colors::{OwoColorize, Style};

/// Paints status messages, or leaves them plain when colors are off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Plain text, no escapes.
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Confirmations.
    pub fn success(&self, text: &str) -> String {
        self.paint(text, Style::new().green())
    }

    /// Compile, runtime, and execution errors.
    pub fn error(&self, text: &str) -> String {
        self.paint(text, Style::new().red())
    }

    /// Help and global-code listings.
    pub fn info(&self, text: &str) -> String {
        self.paint(text, Style::new().blue())
    }

    /// History listings.
    pub fn muted(&self, text: &str) -> String {
        self.paint(text, Style::new().bright_black())
    }

    /// The startup title.
    pub fn title(&self, text: &str) -> String {
        self.paint(text, Style::new().yellow().bold())
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.enabled {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_palette_leaves_text_alone() {
        let palette = Palette::plain();
        assert_eq!(palette.success("ok"), "ok");
        assert_eq!(palette.error("bad"), "bad");
        assert_eq!(palette.muted("1: x"), "1: x");
    }

    #[test]
    fn enabled_palette_adds_escapes() {
        let palette = Palette::new(true);
        let painted = palette.error("bad");
        assert!(painted.contains("bad"));
        assert!(painted.starts_with('\u{1b}'));
        assert_ne!(painted, "bad");
    }
}
