use ratatui::layout::Rect;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

/// Rest position of the top card: centered horizontally, one row below the
/// top of `body`, shrunk to fit.
pub fn card_rect(body: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(body.width);
    let top_margin = 1.min(body.height);
    let height = height.min(body.height.saturating_sub(top_margin));
    Rect {
        x: body.x + (body.width - width) / 2,
        y: body.y + top_margin,
        width,
        height,
    }
}

/// Rect of `width` x `height` centered in `area`, shrunk to fit.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_split_header_body_footer() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 3);
        assert_eq!(footer.y, 21);
        assert_eq!(body, Rect::new(0, 3, 80, 18));
    }

    #[test]
    fn card_is_centered_below_top_edge() {
        let card = card_rect(Rect::new(0, 3, 80, 18), 36, 12);
        assert_eq!(card, Rect::new(22, 4, 36, 12));
    }

    #[test]
    fn card_shrinks_to_small_body() {
        let card = card_rect(Rect::new(0, 3, 20, 5), 36, 12);
        assert_eq!(card, Rect::new(0, 4, 20, 4));
    }

    #[test]
    fn centered_rect_fits_area() {
        let rect = centered_rect_by_size(Rect::new(0, 0, 10, 4), 20, 2);
        assert_eq!(rect, Rect::new(0, 1, 10, 2));
    }
}
