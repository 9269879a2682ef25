use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use morphgrid_config::Config;
use morphgrid_core::Mode;
use morphgrid_engine::{Clock, Stage};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::{Color, Style, Stylize},
    text::{Line, Span},
};

mod logging;
mod scene;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logging::init()?;
    let config = Config::load()?;
    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Loaded configuration.
    config: Config,
    /// Animated cube grid.
    stage: Stage,
    /// Frame clock.
    clock: Clock,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        Self {
            running: false,
            config,
            stage: Stage::default(),
            clock: Clock::system(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let interval = self.config.frame_interval();
        let mut next_frame = Instant::now();

        self.running = true;
        while self.running {
            let now = Instant::now();
            if now >= next_frame {
                self.stage.frame(self.clock.tick());
                terminal.draw(|frame| self.render(frame))?;
                next_frame = now + interval;
            }
            self.handle_crossterm_events(next_frame.saturating_duration_since(Instant::now()))?;
        }
        Ok(())
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        if !self.config.show_help {
            scene::render(frame, area, &self.stage);
            return;
        }

        let chunks = Layout::vertical([
            Constraint::Fill(1),   // Scene
            Constraint::Length(1), // Help text
        ])
        .split(area);

        scene::render(frame, chunks[0], &self.stage);
        frame.render_widget(self.help_line(), chunks[1]);
    }

    /// Key bindings and the active formation.
    fn help_line(&self) -> Line<'static> {
        let accent = Color::Cyan;
        let mut spans: Vec<Span<'static>> = vec!["q".bold().fg(accent), " quit  ".dark_gray()];
        for (key, mode) in self.config.keys.pairs() {
            let label_style = if mode == self.stage.mode() {
                Style::new().fg(accent)
            } else {
                Style::new().dark_gray()
            };
            spans.push(Span::styled(key.to_string(), Style::new().bold().fg(accent)));
            spans.push(Span::styled(
                format!(" {}  ", mode.label().to_lowercase()),
                label_style,
            ));
        }
        spans.push("│ ".dark_gray());
        spans.push(self.stage.mode().label().bold().fg(accent));
        Line::from(spans).centered()
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Waits at most `timeout` so the next frame is not delayed.
    fn handle_crossterm_events(&mut self, timeout: Duration) -> color_eyre::Result<()> {
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char(c)) => {
                if let Some(mode) = self.config.keys.mode_for(c) {
                    self.toggle(mode);
                }
            }
            _ => {}
        }
    }

    /// Toggle a formation on or back to rest.
    fn toggle(&mut self, mode: Mode) {
        let now = self.stage.toggle(mode);
        log::info!("toggled {} -> {}", mode.label(), now.label());
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn test_mode_keys_toggle() {
        let mut app = App::new(Config::default());
        app.on_key_event(press('a'));
        assert_eq!(app.stage.mode(), Mode::Sphere);
        app.on_key_event(press('f'));
        assert_eq!(app.stage.mode(), Mode::HelixDouble);
        app.on_key_event(press('F'));
        assert_eq!(app.stage.mode(), Mode::Rest);
    }

    #[test]
    fn test_unmapped_keys_ignored() {
        let mut app = App::new(Config::default());
        app.running = true;
        app.on_key_event(press('x'));
        app.on_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(app.stage.mode(), Mode::Rest);
        assert!(app.running);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(Config::default());
        app.running = true;
        app.on_key_event(press('q'));
        assert!(!app.running);

        app.running = true;
        app.on_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);
    }

    #[test]
    fn test_help_line_shows_mode() {
        let mut app = App::new(Config::default());
        let last = |app: &App| app.help_line().spans.last().map(|s| s.content.to_string());
        assert_eq!(last(&app), Some("Rest".to_string()));
        app.on_key_event(press('d'));
        assert_eq!(last(&app), Some("Wave".to_string()));
    }
}
