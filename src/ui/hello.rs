//! The greeting component.
//!
//! The component never looks up the store. It reads through a
//! [`HelloSource`] and reports clicks through [`HelloActions`]; the
//! container in [`crate::ui::container`] wires both to a store.

use crate::greeting::{render_greeting, GreetingError, HelloProps};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Read port: state projected onto props.
pub trait HelloSource {
    fn props(&self) -> HelloProps;
}

/// Write port: user intents.
pub trait HelloActions {
    fn on_increment(&mut self);
    fn on_decrement(&mut self);
}

/// Rendered output of the component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelloView {
    pub greeting: String,
    pub level: i64,
}

pub struct Hello;

impl Hello {
    /// Fails when the props carry a level below one; callers are expected
    /// to propagate the error rather than show a fallback.
    pub fn render(props: &HelloProps) -> Result<HelloView, GreetingError> {
        let level = props.level();
        let greeting = render_greeting(&props.name, level)?;
        Ok(HelloView { greeting, level })
    }

    pub fn render_from(source: &dyn HelloSource) -> Result<HelloView, GreetingError> {
        Self::render(&source.props())
    }

    pub fn widget(view: &HelloView) -> Paragraph<'static> {
        let button_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                view.greeting.clone(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("[ - ]", button_style),
                Span::styled(
                    format!("   level {}   ", view.level),
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
                ),
                Span::styled("[ + ]", button_style),
            ]),
        ];

        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(HelloProps);

    impl HelloSource for Fixed {
        fn props(&self) -> HelloProps {
            self.0.clone()
        }
    }

    #[test]
    fn renders_greeting_without_level() {
        let view = Hello::render(&HelloProps::new("Daniel")).unwrap();
        assert_eq!(view.greeting, "Hello Daniel!");
        assert_eq!(view.level, 1);
    }

    #[test]
    fn renders_greeting_with_level_five() {
        let view = Hello::render(&HelloProps::new("Daniel").with_level(5)).unwrap();
        assert_eq!(view.greeting, "Hello Daniel!!!!!");
    }

    #[test]
    fn render_fails_for_zero() {
        let err = Hello::render(&HelloProps::new("Daniel").with_level(0)).unwrap_err();
        assert_eq!(err, GreetingError::NotEnthusiastic { level: 0 });
    }

    #[test]
    fn render_fails_for_negative() {
        assert!(Hello::render(&HelloProps::new("Daniel").with_level(-1)).is_err());
    }

    #[test]
    fn render_from_reads_source() {
        let source = Fixed(HelloProps::new("Rust").with_level(2));
        assert_eq!(Hello::render_from(&source).unwrap().greeting, "Hello Rust!!");
    }
}
