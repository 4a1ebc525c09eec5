use crate::ui::app::App;
use crate::ui::deck::SwipeDirection;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, LIKE, PASS};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App, area: Rect) -> Paragraph<'static> {
        let hints = " Drag: Swipe │ ←/→: Pass/Like │ R: Deal again │ Q: Quit";
        let version = format!("v{} ", VERSION);
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let (last_text, last_style) = match (app.status(), app.swipes().last()) {
            (Some(error), _) => (format!("  {}", error), Style::default().fg(PASS)),
            (None, Some(record)) => match record.direction {
                SwipeDirection::Right => (format!("  ♥ {}", record.title), Style::default().fg(LIKE)),
                SwipeDirection::Left => (format!("  ✗ {}", record.title), Style::default().fg(PASS)),
            },
            (None, None) => (String::new(), text_style),
        };

        // Padding by char count, not bytes.
        let used = hints.chars().count() + last_text.chars().count() + version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width.saturating_sub(used);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(last_text, last_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
