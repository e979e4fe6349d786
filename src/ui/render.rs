use crate::ui::app::App;
use crate::ui::footer::{Footer, FooterStatus};
use crate::ui::header::Header;
use crate::ui::hello::{Hello, HelloView};
use crate::ui::layout::{layout_regions, split_body};
use crate::ui::transitions::transitions_widget;
use ratatui::widgets::Clear;
use ratatui::Frame;

/// Draws one frame. The view is rendered by the caller so a render error
/// surfaces before any drawing happens.
pub fn draw(frame: &mut Frame<'_>, app: &App, view: &HelloView) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new();
    frame.render_widget(header_widget.widget(&app.hello().state().language_name), header);

    frame.render_widget(Clear, body);
    let (main, panel) = split_body(body, app.show_transitions());
    frame.render_widget(Hello::widget(view), main);
    if let Some(panel) = panel {
        frame.render_widget(transitions_widget(&app.recent_transitions()), panel);
    }

    let footer_widget = Footer::new(FooterStatus {
        level: view.level,
        transitions_shown: app.has_transitions().then(|| app.show_transitions()),
    });
    frame.render_widget(footer_widget.widget(footer), footer);
}
