use crate::store::TransitionRecord;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Side panel listing recent dispatches, newest first.
pub fn transitions_widget(records: &[TransitionRecord]) -> Paragraph<'static> {
    let lines: Vec<Line> = if records.is_empty() {
        vec![Line::from(Span::styled(
            " No dispatches yet",
            Style::default().fg(HEADER_SEPARATOR),
        ))]
    } else {
        records
            .iter()
            .map(|record| {
                let color = if record.action.starts_with("INCREMENT") {
                    STATUS_OK
                } else {
                    STATUS_ERROR
                };
                Line::from(vec![
                    Span::styled(
                        format!(" #{:<4}", record.sequence),
                        Style::default().fg(HEADER_SEPARATOR),
                    ),
                    Span::styled(record.action.clone(), Style::default().fg(color)),
                ])
            })
            .collect()
    };

    Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(" Transitions ", Style::default().fg(HEADER_TEXT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
