use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::time::Duration;

const POLL_TIMEOUT: Duration = Duration::from_millis(250);

/// Runs the interactive loop until the user quits.
///
/// Frames are drawn only when the app is dirty. A view that fails to
/// render ends the loop with that error after the terminal is restored.
pub fn run(mut app: App) -> anyhow::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(POLL_TIMEOUT);
    tracing::info!("UI started");

    loop {
        if app.take_dirty() {
            let view = match app.view() {
                Ok(view) => view,
                Err(err) => {
                    tracing::error!(error = %err, "Render failed");
                    drop(guard);
                    return Err(err.into());
                }
            };
            terminal.draw(|frame| draw(frame, &app, &view))?;
        }
        if app.should_quit() {
            break;
        }

        match events.next()? {
            Some(AppEvent::Key(key)) => handle_key(&mut app, key),
            Some(AppEvent::Resize) => app.on_resize(),
            None => {}
        }
    }

    drop(guard);
    tracing::info!("UI stopped");
    Ok(())
}
