//! Reads the starting grid: the number of rows and columns, then one symbol
//! per cell. Whitespace between symbols is ignored, so
//!
//! ```text
//! 3 7
//! .X...X.
//! X.X.X.X
//! X...X.X
//! ```
//!
//! and the same 21 symbols on one line describe the same grid.

use std::{io::BufRead, str::FromStr};

use tracing::{debug, warn};

use crate::{
    error::{Error, Result},
    proc::{Cell, Grid, Size},
};

pub const ALIVE: char = 'X';
pub const DEAD: char = '.';

impl Cell {
    #[inline]
    pub fn from_symbol(c: char) -> Option<Cell> {
        match c {
            ALIVE => Some(Cell::Alive),
            DEAD => Some(Cell::Dead),
            _ => None,
        }
    }

    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Cell::Alive => ALIVE,
            Cell::Dead => DEAD,
        }
    }
}

pub fn parse_grid(s: &str) -> Result<Grid> {
    let mut b = Builder::default();
    b.feed(s).and_then(|_| b.finish()).inspect_err(rejected)
}

/// Reads line by line and stops as soon as the grid is complete, leaving
/// anything after it unread.
pub fn read_grid(mut r: impl BufRead) -> anyhow::Result<Grid> {
    let mut b = Builder::default();
    let mut line = String::new();

    while !b.is_complete() {
        line.clear();
        if r.read_line(&mut line)? == 0 {
            break;
        }
        b.feed(&line).inspect_err(rejected)?;
    }
    Ok(b.finish().inspect_err(rejected)?)
}

fn rejected(err: &Error) {
    warn!(%err, "rejecting grid input");
}

/// Accumulates a grid from text that may arrive in pieces. Tokens must not be
/// split across pieces, which holds for whole lines.
#[derive(Default)]
struct Builder {
    rows: Option<usize>,
    size: Option<(Size, usize)>,
    cells: Vec<Cell>,
}

impl Builder {

    fn feed(&mut self, text: &str) -> Result<()> {
        let mut rest = text;

        let (size, area) = loop {
            if let Some(dims) = self.size {
                break dims;
            }
            let Some(token) = next_token(&mut rest) else {
                return Ok(());
            };
            let n = token.parse().map_err(|_| Error::InvalidDimension(token.to_string()))?;
            match self.rows {
                None => self.rows = Some(n),
                Some(rows) => {
                    let size = Size::new(rows, n);
                    self.size = Some((size, size.cell_count()?));
                },
            }
        };

        for c in rest.chars().filter(|c| !c.is_whitespace()) {
            if self.cells.len() == area {
                break;
            }
            let cell = Cell::from_symbol(c).ok_or_else(|| {
                let at = self.cells.len();
                Error::UnknownSymbol { symbol: c, row: at / size.columns, column: at % size.columns }
            })?;
            self.cells.push(cell);
        }
        Ok(())
    }

    fn is_complete(&self) -> bool {
        matches!(self.size, Some((_, area)) if self.cells.len() == area)
    }

    fn finish(self) -> Result<Grid> {
        let Some((size, area)) = self.size else {
            return Err(Error::MissingDimensions);
        };
        if self.cells.len() < area {
            return Err(Error::MissingCells { expected: area, found: self.cells.len() });
        }

        debug!(rows = size.rows, columns = size.columns, "parsed grid");
        Grid::new(size, self.cells)
    }
}

/// Takes the next whitespace-separated token off `rest`.
fn next_token<'a>(rest: &mut &'a str) -> Option<&'a str> {
    let s = rest.trim_start();
    if s.is_empty() {
        return None;
    }
    let end = s.find(char::is_whitespace).unwrap_or(s.len());
    let (token, tail) = s.split_at(end);
    *rest = tail;
    Some(token)
}

impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_grid(s)
    }
}
