use ratatui::layout::{Constraint, Direction, Layout, Rect};

const TRANSITIONS_WIDTH: u16 = 44;

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

/// Splits the body into the greeting area and, when requested, a
/// right-hand panel. The panel is dropped if the body is too narrow.
pub fn split_body(body: Rect, with_panel: bool) -> (Rect, Option<Rect>) {
    if !with_panel || body.width < TRANSITIONS_WIDTH * 2 {
        return (body, None);
    }
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(TRANSITIONS_WIDTH)])
        .split(body);
    (chunks[0], Some(chunks[1]))
}
