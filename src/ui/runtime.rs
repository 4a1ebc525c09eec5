use crate::config::ConfigStore;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Instant;

pub fn run(config: ConfigStore) -> io::Result<()> {
    let tick_rate = config.get().ui.tick_rate();
    // Read once: the deck keeps this width even if the terminal is resized.
    let (cols, rows) = crossterm::terminal::size()?;

    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(config, cols, rows);
    let events = EventHandler::new(tick_rate);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        let event = events.next(tick_rate);
        let now = Instant::now();
        match event {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key, now),
            Ok(AppEvent::Mouse(mouse)) => app.on_mouse(mouse, now),
            Ok(AppEvent::Tick) => app.on_tick(now),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => app.on_tick(now),
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(events);
    drop(guard);
    Ok(())
}
