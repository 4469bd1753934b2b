use std::io::{stdout, Write};

use crossterm::{
    terminal::{ self, EnterAlternateScreen, LeaveAlternateScreen, enable_raw_mode, disable_raw_mode, SetTitle, },
    cursor::{ MoveTo, Show, Hide },
    execute, queue,
    event::{
        self,
        Event,
        KeyEvent,
        KeyModifiers,
        KeyCode, KeyEventKind,
    },
};
use tracing::{debug, info, warn};

use crate::proc::{Grid, Size};

type Err = Box<dyn std::error::Error + Send + Sync>;
type Result<T> = std::result::Result<T, Err>;

const BANNER: &str = "Press any key to step one generation, 'q' to quit.";

pub struct Rect{
    w: u16, // columns
    h: u16, // rows
}

impl Rect {
    #[inline]
    pub fn term_size() -> Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Rect{w: width, h: height})
    }

    #[inline]
    pub fn w(&self) -> u16 {
        self.w
    }

    #[inline]
    pub fn h(&self) -> u16 {
        self.h
    }

    /// Whether a grid of `size` fits below the two status lines.
    pub fn fits(&self, size: Size) -> bool {
        size.columns <= self.w as usize && size.rows.saturating_add(2) <= self.h as usize
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Action {
    Step,
    Quit,
    Ignore,
}

/// Owns the grid for the whole session and advances it on request.
pub struct App {
    grid: Grid,
    generation: u64,
    still: bool,
}

impl App {

    #[inline]
    pub fn new(grid: Grid) -> Self {
        App {
            grid,
            generation: 0,
            still: false,
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the last step left the grid unchanged.
    #[inline]
    pub fn still(&self) -> bool {
        self.still
    }

    pub fn step(&mut self) {
        let next = self.grid.next_generation();
        self.still = next == self.grid;
        self.grid = next;
        self.generation += 1;
        debug!(generation = self.generation, population = self.grid.population(), still = self.still, "stepped");
    }

    pub fn status(&self) -> String {
        let mut s = format!("generation {}, {} alive", self.generation, self.grid.population());
        if self.still {
            s.push_str(", still life");
        }
        s
    }
}

/// Maps a key event to what the loop should do with it.
pub fn hotkey(key: &KeyEvent) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::Ignore;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Action::Quit,
            _ => Action::Ignore,
        };
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
        _ => Action::Step,
    }
}

pub fn run(a: App) -> Result<()> {

    runup()?;
    let d = draw(a);
    shutdown()?;
    d?;
    Ok(())
}

fn runup() -> Result<()> {
    execute!(std::io::stderr(), EnterAlternateScreen, SetTitle("Life, one step at a time"), Hide)?;
    enable_raw_mode()?;
    Ok(())
}

fn shutdown() -> Result<()> {
    execute!(std::io::stderr(), LeaveAlternateScreen, Show)?;
    disable_raw_mode()?;
    Ok(())
}

fn draw(mut a: App) -> Result<()> {
    let size = a.grid().size();
    let term = Rect::term_size()?;
    if !term.fits(size) {
        warn!(rows = size.rows, columns = size.columns, term_w = term.w(), term_h = term.h(), "grid is larger than the terminal");
    }

    info!(rows = size.rows, columns = size.columns, "simulation started");
    frame(&a)?;

    loop {
        match event::read()? {
            Event::Key(key) => match hotkey(&key) {
                Action::Quit => break,
                Action::Step => {
                    a.step();
                    frame(&a)?;
                },
                Action::Ignore => {},
            },
            Event::Resize(..) => frame(&a)?,
            _ => {},
        }
    }

    info!(generation = a.generation(), "simulation finished");
    Ok(())
}

fn frame(a: &App) -> Result<()> {
    use terminal::{ Clear, ClearType };

    let mut out = stdout();
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    write!(out, "{BANNER}\r\n{}\r\n", a.status())?;
    write!(out, "{}", a.grid().to_raw_lines())?;
    out.flush()?;
    Ok(())
}
