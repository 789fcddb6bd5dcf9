//! Crossterm front end: draws the board and turns key presses into
//! cancellation.

use std::cell::Cell;
use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor},
    terminal::{self, ClearType},
};

use pathlab_core::{Grid, Role};
use pathlab_paths::Cancellation;

/// Terminal columns per board cell; one cell is one terminal line tall.
pub const CELL_COLUMNS: u16 = 2;

/// Background colour used for each role.
pub fn role_color(role: Role) -> Color {
    match role {
        Role::Empty => Color::White,
        Role::Barrier => Color::Black,
        Role::Start => Color::Rgb { r: 255, g: 165, b: 0 },
        Role::End => Color::Rgb { r: 64, g: 224, b: 208 },
        Role::Frontier => Color::Green,
        Role::Visited => Color::Red,
        Role::Path => Color::Rgb { r: 128, g: 0, b: 128 },
    }
}

/// Whether a key event asks the demo to stop.
pub fn is_quit_key(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Raw-mode alternate screen that is restored on drop.
pub struct Terminal {
    out: Stdout,
    mouse: bool,
}

impl Terminal {
    pub fn enter(mouse: bool) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        if mouse {
            execute!(out, event::EnableMouseCapture)?;
        }
        Ok(Self { out, mouse })
    }

    /// Redraw the whole board plus a status line below it.
    pub fn draw(&mut self, grid: &Grid, status: &str) -> io::Result<()> {
        let n = grid.rows().max(0) as u16;
        for (c, role) in grid.iter() {
            queue!(
                self.out,
                cursor::MoveTo(c.col as u16 * CELL_COLUMNS, c.row as u16),
                SetBackgroundColor(role_color(role)),
                Print("  ")
            )?;
        }
        queue!(
            self.out,
            ResetColor,
            cursor::MoveTo(0, n),
            terminal::Clear(ClearType::CurrentLine),
            Print(status)
        )?;
        self.out.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if self.mouse {
            let _ = execute!(self.out, event::DisableMouseCapture);
        }
        let _ = execute!(self.out, ResetColor, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Cancels once a quit key has been seen. Pending input is drained without
/// blocking every time the search polls.
#[derive(Debug, Default)]
pub struct KeyCancel {
    hit: Cell<bool>,
}

impl KeyCancel {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Cancellation for KeyCancel {
    fn is_cancelled(&self) -> bool {
        if self.hit.get() {
            return true;
        }
        loop {
            match event::poll(Duration::ZERO) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    log::warn!("polling terminal input failed: {e}");
                    break;
                }
            }
            match event::read() {
                Ok(Event::Key(key)) if is_quit_key(&key) => {
                    self.hit.set(true);
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    log::warn!("reading terminal input failed: {e}");
                    break;
                }
            }
        }
        self.hit.get()
    }
}
