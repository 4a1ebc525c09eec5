use crate::ui::app::App;
use crate::ui::card::{paint_layer, TerminalCards};
use crate::ui::deck::StackView;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use ratatui::widgets::Clear;
use ratatui::Frame;

const EMPTY_WIDTH: u16 = 30;
const EMPTY_HEIGHT: u16 = 5;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app), header);
    frame.render_widget(Clear, body);

    match app.deck().render(&TerminalCards) {
        StackView::Empty(visual) => {
            frame.render_widget(visual, centered_rect_by_size(body, EMPTY_WIDTH, EMPTY_HEIGHT));
        }
        StackView::Cards(layers) => {
            let rest = app.card_rest_rect();
            let settle = app.settle_offset();
            let buf = frame.buffer_mut();
            for layer in &layers {
                paint_layer(buf, body, rest, layer, settle);
            }
        }
    }

    frame.render_widget(Footer::new().widget(app, footer), footer);
}
