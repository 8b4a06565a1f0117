use std::io::{self, Stdout, Write, stdout};
use std::time::Duration;

use crossterm::{cursor, execute, queue, terminal};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};

use crate::board::CELLS_PER_SIDE;
use crate::input::{Key, KeySource};
use crate::prompt::Confirm;
use crate::render::{Scene, SpriteKind, Surface};
use crate::scores::HighScores;

pub type TermInt = u16;
pub type Coords = (TermInt, TermInt);

// Terminal characters are about twice as tall as they are wide
const COLS_PER_CELL: TermInt = 2;
const BOARD_COLS: TermInt = CELLS_PER_SIDE as TermInt * COLS_PER_CELL;
const BOARD_ROWS: TermInt = CELLS_PER_SIDE as TermInt;

/// Smallest terminal that fits the board and its border.
pub const MIN_SIZE: Coords = (BOARD_COLS + 2, BOARD_ROWS + 2);

const SNAKE_CELL: &str = "██";
const FOOD_CELL: &str = "()";
const EMPTY_CELL: &str = "  ";

pub struct TermManager {
    width: TermInt,
    height: TermInt,
    stdout: Stdout,
    last_scene: Scene,
    current_msg: Option<Message>,
}

struct Message {
    top_left: Coords,
    width: TermInt,
    height: TermInt,
    lines: Vec<String>,
}

impl TermManager {
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(TermManager { width, height, stdout: stdout(), last_scene: Scene::default(), current_msg: None })
    }

    pub fn setup(&mut self) -> io::Result<()> {
        execute!(self.stdout, EnterAlternateScreen, cursor::Hide, cursor::DisableBlinking)?;
        terminal::enable_raw_mode()
    }

    pub fn restore(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)
    }

    pub fn get_terminal_size(&self) -> Coords {
        (self.width, self.height)
    }

    pub fn fits_board(&self) -> bool {
        self.width >= MIN_SIZE.0 && self.height >= MIN_SIZE.1
    }

    pub fn read_key_blocking(&mut self) -> io::Result<KeyEvent> {
        loop {
            match event::read()? {
                Event::Key(ev) if ev.kind != KeyEventKind::Release => return Ok(ev),
                Event::Resize(w, h) => self.resize(w, h)?,
                _ => {}
            }
        }
    }

    /// Home screen with this run's high scores. Returns `false` if the
    /// player chose to quit.
    pub fn show_home(&mut self, scores: &HighScores) -> io::Result<bool> {
        self.clear()?;
        self.draw_borders()?;

        let mut lines = vec![
            "SNAKE".to_string(),
            "".to_string(),
            "Arrow keys or WASD to move".to_string(),
            "Esc to pause".to_string(),
            "CTRL+C to quit".to_string(),
            "".to_string(),
            "Press any key to begin".to_string(),
        ];
        if !scores.top().is_empty() {
            lines.push("".to_string());
            lines.push("High scores".to_string());
            lines.extend(scores.lines());
        }

        let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
        self.show_message(&lines)?;

        Ok(!is_ctrl_c(&self.read_key_blocking()?))
    }

    /// Picks up a new terminal size and redraws everything on screen.
    pub fn resize(&mut self, width: TermInt, height: TermInt) -> io::Result<()> {
        self.width = width;
        self.height = height;

        execute!(self.stdout, terminal::Clear(ClearType::All))?;
        self.draw_borders()?;
        self.draw_scene()?;

        if let Some(msg) = self.current_msg.take() {
            let lines: Vec<&str> = msg.lines.iter().map(String::as_str).collect();
            self.show_message(&lines)?;
        }

        self.flush()
    }

    pub fn clear(&mut self) -> io::Result<()> {
        self.last_scene = Scene::default();
        self.current_msg = None;
        execute!(self.stdout, terminal::Clear(ClearType::All))
    }

    pub fn draw_borders(&mut self) -> io::Result<()> {
        let (left, top) = self.board_origin();
        let right = left + BOARD_COLS + 1;
        let bottom = top + BOARD_ROWS + 1;

        for x in left..=right {
            let ch = if x == left || x == right {'+'} else {'-'};
            self.print_at((x, top), ch)?;
            self.print_at((x, bottom), ch)?;
        }

        for y in top + 1..bottom {
            self.print_at((left, y), '|')?;
            self.print_at((right, y), '|')?;
        }

        self.flush()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }

    pub fn has_message(&self) -> bool {
        self.current_msg.is_some()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn board_origin(&self) -> Coords {
        board_origin((self.width, self.height))
    }

    fn cell_coords(&self, col: i32, row: i32) -> Coords {
        let (left, top) = self.board_origin();
        (left + 1 + col as TermInt * COLS_PER_CELL, top + 1 + row as TermInt)
    }

    fn print_at(&mut self, pos: Coords, ch: char) -> io::Result<()> {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), Print(ch))
    }

    fn draw_scene(&mut self) -> io::Result<()> {
        for row in 0..CELLS_PER_SIDE {
            let (x, y) = self.cell_coords(0, row);
            queue!(self.stdout, cursor::MoveTo(x, y), Print(EMPTY_CELL.repeat(CELLS_PER_SIDE as usize)))?;
        }

        for i in 0..self.last_scene.sprites.len() {
            let sprite = self.last_scene.sprites[i];
            let (col, row) = sprite.position().cell();
            if !(0..CELLS_PER_SIDE).contains(&col) || !(0..CELLS_PER_SIDE).contains(&row) {
                continue;
            }

            let (x, y) = self.cell_coords(col, row);
            let styled = match sprite.kind {
                SpriteKind::Snake => SNAKE_CELL.green(),
                SpriteKind::Food => FOOD_CELL.red().bold(),
            };
            queue!(self.stdout, cursor::MoveTo(x, y), PrintStyledContent(styled))?;
        }

        Ok(())
    }
}

impl Surface for TermManager {
    fn present(&mut self, scene: &Scene) -> io::Result<()> {
        self.last_scene = scene.clone();
        self.draw_scene()?;

        // Keep an open overlay on top of the fresh frame
        if let Some(msg) = self.current_msg.take() {
            let lines: Vec<&str> = msg.lines.iter().map(String::as_str).collect();
            self.show_message(&lines)?;
        }

        self.flush()
    }

    fn show_message(&mut self, lines: &[&str]) -> io::Result<()> {
        if self.has_message() {
            self.hide_message()?;
        }

        let msg_height = (lines.len() + 2) as TermInt;
        let msg_width = (lines.iter().map(|x| x.chars().count()).max().unwrap_or(0) + 4) as TermInt;
        let center = (self.width / 2, self.height / 2);
        let top_left = (center.0.saturating_sub(msg_width / 2), center.1.saturating_sub(msg_height / 2));

        let blank = " ".repeat(msg_width as usize);
        queue!(self.stdout, cursor::MoveTo(top_left.0, top_left.1), Print(blank.as_str().reverse()))?;
        for (i, line) in lines.iter().enumerate() {
            let padded_line = format!("{line: ^width$}", line = line, width = msg_width as usize);
            let y = top_left.1 + i as TermInt + 1;
            queue!(self.stdout, cursor::MoveTo(top_left.0, y), Print(padded_line.reverse()))?;
        }
        queue!(self.stdout, cursor::MoveTo(top_left.0, top_left.1 + msg_height - 1), Print(blank.as_str().reverse()))?;

        self.current_msg = Some(Message::new(msg_width, msg_height, top_left, lines));
        self.flush()
    }

    fn hide_message(&mut self) -> io::Result<()> {
        let msg = match self.current_msg.take() {
            Some(msg) => msg,
            None => return Ok(()),
        };

        // Wipe the box, then restore whatever part of the board it covered
        let blank = " ".repeat(msg.width() as usize);
        let top_left = msg.top_left();
        for y_diff in 0..msg.height() {
            queue!(self.stdout, cursor::MoveTo(top_left.0, top_left.1 + y_diff), Print(&blank))?;
        }

        self.draw_borders()?;
        self.draw_scene()?;
        self.flush()
    }
}

impl KeySource for TermManager {
    fn pending_keys(&mut self) -> io::Result<Vec<Key>> {
        let mut keys = vec![];

        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(ev) if ev.kind != KeyEventKind::Release => keys.push(translate_key(&ev)),
                Event::Resize(w, h) => self.resize(w, h)?,
                _ => {}
            }
        }

        Ok(keys)
    }
}

impl Confirm for TermManager {
    fn confirm(&mut self, lines: &[&str]) -> io::Result<bool> {
        self.show_message(lines)?;

        let answer = loop {
            let ev = self.read_key_blocking()?;
            if is_ctrl_c(&ev) {
                break false;
            }
            match ev.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => break true,
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => break false,
                _ => {}
            }
        };

        self.hide_message()?;
        Ok(answer)
    }
}

impl Message {
    pub fn new(width: TermInt, height: TermInt, top_left: Coords, lines: &[&str]) -> Self {
        let lines = lines.iter().map(|l| l.to_string()).collect();
        Message { width, height, top_left, lines }
    }

    pub fn width(&self) -> TermInt {
        self.width
    }

    pub fn height(&self) -> TermInt {
        self.height
    }

    pub fn top_left(&self) -> Coords {
        self.top_left
    }
}

pub fn translate_key(ev: &KeyEvent) -> Key {
    if is_ctrl_c(ev) {
        return Key::Quit;
    }

    match ev.code {
        KeyCode::Char('w') | KeyCode::Up => Key::ArrowUp,
        KeyCode::Char('a') | KeyCode::Left => Key::ArrowLeft,
        KeyCode::Char('s') | KeyCode::Down => Key::ArrowDown,
        KeyCode::Char('d') | KeyCode::Right => Key::ArrowRight,
        KeyCode::Esc => Key::Pause,
        _ => Key::Other,
    }
}

/// Top-left corner of the border, with the board centered on a terminal of
/// the given size.
pub fn board_origin(size: Coords) -> Coords {
    (size.0.saturating_sub(MIN_SIZE.0) / 2, size.1.saturating_sub(MIN_SIZE.1) / 2)
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL)
}
