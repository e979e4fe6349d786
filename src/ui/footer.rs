use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const HINTS: &str = " +/↑: More │ -/↓: Less │ q: Quit";

/// What the footer reports about the running app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterStatus {
    pub level: i64,
    /// `None` when no transition history is attached.
    pub transitions_shown: Option<bool>,
}

/// Key hints on the left, level and panel toggle on the right.
pub struct Footer {
    status: FooterStatus,
}

impl Footer {
    pub fn new(status: FooterStatus) -> Self {
        Self { status }
    }

    pub fn line(&self, width: u16) -> Line<'static> {
        let hint_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        // Levels below one cannot be rendered; flag them before the next draw fails.
        let level_style = if self.status.level > 0 {
            Style::default().fg(STATUS_OK)
        } else {
            Style::default().fg(STATUS_ERROR)
        };

        let mut right = vec![Span::styled(format!("level {}", self.status.level), level_style)];
        if let Some(shown) = self.status.transitions_shown {
            let label = if shown { "t: hide transitions" } else { "t: show transitions" };
            right.push(Span::styled(" │ ", separator_style));
            right.push(Span::styled(label, hint_style));
        }
        right.push(Span::raw(" "));

        let used: usize = HINTS.chars().count()
            + right.iter().map(|span| span.content.chars().count()).sum::<usize>();
        let padding = (width.saturating_sub(2) as usize).saturating_sub(used);

        let mut spans = vec![
            Span::styled(HINTS, hint_style),
            Span::raw(" ".repeat(padding)),
        ];
        spans.extend(right);
        Line::from(spans)
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        Paragraph::new(self.line(area.width)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
