//! Terminal rendering module for rich markdown output
//!
//! Uses termimad for inline markdown (bold titles, italics) and plain ANSI
//! colors for the line kinds the planner's output is built from: headers,
//! status lines and save warnings. `--no-color` prints the markdown as is.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

const BLUE: &str = "\x1b[34m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            match styled_line(line) {
                Some(styled) => println!("{styled}"),
                None => {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Colors lines that termimad would otherwise restyle or leave plain.
///
/// Headers keep their hashes so day boundaries stay visible.
fn styled_line(line: &str) -> Option<String> {
    if line.starts_with('#') {
        return Some(format!("{BLUE}{line}{RESET}"));
    }
    [("Warning:", YELLOW), ("Success:", GREEN), ("Error:", RED)]
        .into_iter()
        .find_map(|(prefix, color)| {
            line.strip_prefix(prefix)
                .map(|rest| format!("{color}{prefix}{RESET}{rest}"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }

    #[test]
    fn test_day_header_keeps_hashes() {
        let styled = styled_line("### Day 2 · Sunday 2024-06-02").unwrap();
        assert_eq!(styled, format!("{BLUE}### Day 2 · Sunday 2024-06-02{RESET}"));
    }

    #[test]
    fn test_warning_prefix_is_colored() {
        let styled = styled_line("Warning: 1 change(s) could not be saved:").unwrap();
        assert!(styled.starts_with(YELLOW));
        assert!(styled.ends_with(" 1 change(s) could not be saved:"));
    }

    #[test]
    fn test_item_lines_go_through_termimad() {
        assert!(styled_line("- 09:00 **Louvre** (activity) [#3]").is_none());
    }
}
