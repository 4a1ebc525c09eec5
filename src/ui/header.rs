use crate::ui::app::App;
use crate::ui::deck::SwipeDirection;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, LIKE, PASS};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let deck = app.deck();

        let progress = if deck.is_exhausted() {
            format!("{} / {} done", deck.len(), deck.len())
        } else {
            format!("card {} / {}", deck.index() + 1, deck.len())
        };

        let line = Line::from(vec![
            Span::styled(
                "  swipedeck",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(progress, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!("♥ {}", app.swipes().count(SwipeDirection::Right)),
                Style::default().fg(LIKE),
            ),
            Span::styled("  ", text_style),
            Span::styled(
                format!("✗ {}", app.swipes().count(SwipeDirection::Left)),
                Style::default().fg(PASS),
            ),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
