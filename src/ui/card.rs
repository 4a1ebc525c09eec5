//! Card faces and the painter that places them with offset and lean.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap};

use crate::cards::Card;
use crate::ui::deck::{CardRenderer, Layer};
use crate::ui::theme::{ACCENT, CARD_BACKGROUND, CARD_BORDER, HEADER_TEXT, QUEUED_BORDER};

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f32 = 2.0;

/// Renders cards and the empty deck as ratatui paragraphs.
pub struct TerminalCards;

impl CardRenderer<Card> for TerminalCards {
    type Visual = Paragraph<'static>;

    fn render_card(&self, card: &Card) -> Paragraph<'static> {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(card.body.clone(), Style::default().fg(HEADER_TEXT))),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .style(Style::default().bg(CARD_BACKGROUND))
            .block(
                Block::default()
                    .title(Span::styled(
                        format!(" {} ", card.title),
                        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                    ))
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(CARD_BORDER)),
            )
    }

    fn render_empty(&self) -> Paragraph<'static> {
        Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No more cards",
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "press r to deal again",
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(QUEUED_BORDER)),
        )
    }
}

/// Horizontal shift of `row` for a card leaning by `lean` (sine of its rotation).
///
/// Rows above the center move with the lean, rows below move against it.
pub fn shear_shift(row: u16, height: u16, lean: f32) -> i32 {
    let center = (height as f32 - 1.0) / 2.0;
    (-(row as f32 - center) * lean * CELL_ASPECT).round() as i32
}

/// Paint one layer into `buf`.
///
/// `rest` is where the card sits with no offset; `extra_dy` shifts queued
/// cards while the stack settles. Cells falling outside `clip` are dropped.
pub fn paint_layer(
    buf: &mut Buffer,
    clip: Rect,
    rest: Rect,
    layer: &Layer<String, Paragraph<'static>>,
    extra_dy: f32,
) {
    if rest.width == 0 || rest.height == 0 {
        return;
    }

    let local = Rect::new(0, 0, rest.width, rest.height);
    let mut scratch = Buffer::empty(local);
    layer.visual.clone().render(local, &mut scratch);
    if !layer.interactive {
        scratch.set_style(
            local,
            Style::default()
                .fg(QUEUED_BORDER)
                .add_modifier(Modifier::DIM),
        );
    }

    let dx = layer.translate.x.round() as i32;
    let dy = if layer.interactive {
        layer.translate.y.round() as i32
    } else {
        (layer.translate.y + extra_dy).round() as i32
    };
    let lean = layer.rotation_deg.to_radians().sin();

    for row in 0..rest.height {
        let shift = shear_shift(row, rest.height, lean);
        let y = rest.y as i32 + row as i32 + dy;
        if y < clip.top() as i32 || y >= clip.bottom() as i32 {
            continue;
        }
        for col in 0..rest.width {
            let x = rest.x as i32 + col as i32 + dx + shift;
            if x < clip.left() as i32 || x >= clip.right() as i32 {
                continue;
            }
            if let (Some(src), Some(dst)) =
                (scratch.cell((col, row)), buf.cell_mut((x as u16, y as u16)))
            {
                *dst = src.clone();
            }
        }
    }
}
