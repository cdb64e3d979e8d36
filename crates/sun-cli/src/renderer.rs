//! Terminal rendering of markdown output via termimad, with a plain-text
//! fallback.

use termimad::{crossterm::style::Color, MadSkin, StyledChar};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Yellow);
        skin.bold.set_fg(Color::White);
        skin.italic.set_fg(Color::DarkGrey);
        skin.bullet = StyledChar::from_fg_char(Color::Yellow, '•');

        Self { rich_enabled, skin }
    }

    /// Prints a markdown document.
    pub fn render(&self, markdown: &str) {
        if self.rich_enabled {
            self.skin.print_text(markdown);
        } else {
            print!("{markdown}");
        }
    }

    /// Prints one line of agent progress as it streams in.
    pub fn progress(&self, line: &str) {
        if self.rich_enabled {
            self.skin.print_inline(&format!("*{line}*"));
            println!();
        } else {
            println!("... {line}");
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        assert!(!TerminalRenderer::new(false).rich_enabled);
    }

    #[test]
    fn test_default_is_rich() {
        assert!(TerminalRenderer::default().rich_enabled);
    }
}
