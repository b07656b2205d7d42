use std::{io::stdout, time::Duration};

use anyhow::Result;
use cellhop_client::{
    adapter::{Renderer, Window},
    config::Color,
};
use cellhop_core::types::{Direction, PixelRect};
use crossterm::{
    event::{
        self as ct, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::supports_keyboard_enhancement,
};
use log::{debug, warn};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    widgets::{Block, Borders},
};
use tui_logger::TuiLoggerWidget;

use crate::surface::Surface;

const LOG_PANE_HEIGHT: u16 = 6;

/// Opens windows on the terminal's alternate screen.
pub struct CrosstermRenderer {
    background: Color,
}

impl CrosstermRenderer {
    pub fn new(background: Color) -> Self {
        Self { background }
    }
}

impl Renderer for CrosstermRenderer {
    type Window = CrosstermWindow;

    fn create_window(
        &mut self,
        title: &str,
        width_px: usize,
        height_px: usize,
    ) -> Result<CrosstermWindow> {
        CrosstermWindow::open(title, Surface::new(width_px, height_px, self.background))
    }
}

/// The terminal, seen as a window. Restores the terminal when dropped.
pub struct CrosstermWindow {
    terminal: DefaultTerminal,
    title: String,
    surface: Surface,
    keys: KeyState,
    closed: bool,
}

impl CrosstermWindow {
    fn open(title: &str, surface: Surface) -> Result<Self> {
        // From here on, dropping the window restores the terminal, error paths included.
        let mut window = Self {
            terminal: ratatui::try_init()?,
            title: format!(" {title} "),
            surface,
            keys: KeyState::new(false),
            closed: false,
        };

        // Without release events, a key only counts as pressed for the frame following its press.
        let report_release = supports_keyboard_enhancement().unwrap_or(false);
        if report_release {
            let mut out = stdout();
            execute!(
                out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
            window.keys.report_release = true;
        } else {
            warn!("Terminal does not report key releases, holding a key relies on auto-repeat");
        }
        debug!("Keyboard enhancement: {report_release}");

        Ok(window)
    }

    fn handle_event(&mut self, event: ct::Event) {
        let ct::Event::Key(key) = event else {
            return;
        };

        if let Some(dir) = direction(key.code) {
            self.keys.apply(dir, key.kind);
            return;
        }

        if key.kind != ct::KeyEventKind::Press {
            return;
        }

        let ctrl_c = key.code == ct::KeyCode::Char('c')
            && key.modifiers.contains(ct::KeyModifiers::CONTROL);
        if ctrl_c || matches!(key.code, ct::KeyCode::Esc | ct::KeyCode::Char('q')) {
            self.closed = true;
        }
    }
}

impl Window for CrosstermWindow {
    fn is_closed(&self) -> bool {
        self.closed
    }

    fn is_pressed(&self, dir: Direction) -> bool {
        self.keys.is_pressed(dir)
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Color) {
        self.surface.fill_rect(rect, color);
    }

    fn present(&mut self) -> Result<()> {
        self.terminal
            .draw(|f| render(f, &self.title, &self.surface))?;

        self.keys.next_frame();
        while ct::poll(Duration::ZERO)? {
            let event = ct::read()?;
            self.handle_event(event);
        }
        Ok(())
    }
}

impl Drop for CrosstermWindow {
    fn drop(&mut self) {
        if self.keys.report_release {
            let mut out = stdout();
            let _ = execute!(out, PopKeyboardEnhancementFlags);
        }
        ratatui::restore();
    }
}

fn render(f: &mut Frame, title: &str, surface: &Surface) {
    let [view, logs] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(LOG_PANE_HEIGHT)])
            .areas(f.area());

    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(view);
    f.render_widget(block, view);
    f.render_widget(surface, inner);

    let logger_widget = TuiLoggerWidget::default().block(
        Block::default()
            .title(" Logs (arrows to move, q to quit) ")
            .borders(Borders::ALL),
    );
    f.render_widget(logger_widget, logs);
}

fn direction(code: ct::KeyCode) -> Option<Direction> {
    match code {
        ct::KeyCode::Left => Some(Direction::Left),
        ct::KeyCode::Right => Some(Direction::Right),
        ct::KeyCode::Up => Some(Direction::Up),
        ct::KeyCode::Down => Some(Direction::Down),
        _ => None,
    }
}

/// Which arrow keys count as pressed for the current frame.
#[derive(Debug)]
struct KeyState {
    report_release: bool,
    /// Between a press and its release
    held: [bool; 4],
    /// Pressed or repeated since the previous frame
    latched: [bool; 4],
}

impl KeyState {
    fn new(report_release: bool) -> Self {
        Self {
            report_release,
            held: [false; 4],
            latched: [false; 4],
        }
    }

    fn apply(&mut self, dir: Direction, kind: ct::KeyEventKind) {
        let i = dir as usize;
        match kind {
            ct::KeyEventKind::Press | ct::KeyEventKind::Repeat => {
                self.latched[i] = true;
                if self.report_release {
                    self.held[i] = true;
                }
            }
            ct::KeyEventKind::Release => self.held[i] = false,
        }
    }

    fn next_frame(&mut self) {
        self.latched = [false; 4];
    }

    fn is_pressed(&self, dir: Direction) -> bool {
        let i = dir as usize;
        self.held[i] || self.latched[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_lasts_one_frame_without_release_events() {
        let mut keys = KeyState::new(false);
        keys.apply(Direction::Left, ct::KeyEventKind::Press);
        assert!(keys.is_pressed(Direction::Left));
        assert!(!keys.is_pressed(Direction::Right));

        keys.next_frame();
        assert!(!keys.is_pressed(Direction::Left));

        keys.apply(Direction::Left, ct::KeyEventKind::Repeat);
        assert!(keys.is_pressed(Direction::Left));
    }

    #[test]
    fn press_lasts_until_release() {
        let mut keys = KeyState::new(true);
        keys.apply(Direction::Up, ct::KeyEventKind::Press);
        keys.next_frame();
        keys.next_frame();
        assert!(keys.is_pressed(Direction::Up));

        keys.apply(Direction::Up, ct::KeyEventKind::Release);
        keys.next_frame();
        assert!(!keys.is_pressed(Direction::Up));
    }

    #[test]
    fn quick_tap_is_seen_once() {
        let mut keys = KeyState::new(true);
        keys.apply(Direction::Down, ct::KeyEventKind::Press);
        keys.apply(Direction::Down, ct::KeyEventKind::Release);
        assert!(keys.is_pressed(Direction::Down));

        keys.next_frame();
        assert!(!keys.is_pressed(Direction::Down));
    }

    #[test]
    fn arrow_keys_map_to_directions() {
        assert_eq!(direction(ct::KeyCode::Left), Some(Direction::Left));
        assert_eq!(direction(ct::KeyCode::Right), Some(Direction::Right));
        assert_eq!(direction(ct::KeyCode::Up), Some(Direction::Up));
        assert_eq!(direction(ct::KeyCode::Down), Some(Direction::Down));
        assert_eq!(direction(ct::KeyCode::Char('q')), None);
    }
}
