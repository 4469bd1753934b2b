use crate::error::{Error, Result};

/// Relative positions of the eight Moore neighbours, as (row, column).
#[rustfmt::skip]
const NEIGHBOURS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {

    #[inline]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// State of this cell one generation later, given how many of its
    /// neighbours are alive now.
    pub fn next(self, neighbours: u8) -> Cell {
        match (self, neighbours) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

impl From<bool> for Cell {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Size {
    pub rows: usize,
    pub columns: usize,
}

impl Size {
    #[inline]
    pub fn new(rows: usize, columns: usize) -> Self {
        Size { rows, columns }
    }

    /// Number of cells, or `None` when it does not fit in a `usize`.
    #[inline]
    pub fn area(&self) -> Option<usize> {
        self.rows.checked_mul(self.columns)
    }

    /// Number of cells a grid of this size holds, if such a grid can exist.
    pub fn cell_count(&self) -> Result<usize> {
        if self.rows == 0 || self.columns == 0 {
            return Err(Error::EmptyDimension);
        }
        self.area().ok_or(Error::TooLarge { rows: self.rows, columns: self.columns })
    }
}

/// A fixed-size rectangle of cells. Everything outside it counts as dead.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Grid {
    size: Size,
    cells: Vec<Cell>,
}

impl Grid {

    pub fn new(size: Size, cells: Vec<Cell>) -> Result<Self> {
        if cells.len() != size.cell_count()? {
            return Err(Error::CellCount {
                rows: size.rows,
                columns: size.columns,
                found: cells.len(),
            });
        }
        Ok(Grid { size, cells })
    }

    #[inline]
    pub fn dead(size: Size) -> Result<Self> {
        Self::new(size, vec![Cell::Dead; size.cell_count()?])
    }

    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let columns = rows.first().map_or(0, Vec::len);
        let size = Size::new(rows.len(), columns);

        let mut cells = Vec::new();
        for (i, r) in rows.into_iter().enumerate() {
            if r.len() != columns {
                return Err(Error::RaggedRow { row: i, expected: columns, found: r.len() });
            }
            cells.extend(r);
        }
        Self::new(size, cells)
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        if row >= self.size.rows || column >= self.size.columns {
            None
        } else {
            Some(self.cells[row * self.size.columns + column])
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.columns)
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Live cells among the in-bounds Moore neighbours of (row, column).
    /// Works the same for corners, edges, single rows and single columns.
    pub fn live_neighbours(&self, row: usize, column: usize) -> u8 {
        NEIGHBOURS
            .iter()
            .filter_map(|&(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = column.checked_add_signed(dc)?;
                self.get(r, c)
            })
            .filter(|c| c.is_alive())
            .count() as u8
    }

    /// Computes the following generation into a new grid. `self` is only read,
    /// so no cell ever sees a neighbour that has already been updated.
    pub fn next_generation(&self) -> Grid {
        let Size { rows, columns } = self.size;
        let mut next = Vec::with_capacity(self.cells.len());

        for i in 0..rows {
            for j in 0..columns {
                let current = self.cells[i * columns + j];
                next.push(current.next(self.live_neighbours(i, j)));
            }
        }

        Grid {
            size: self.size,
            cells: next,
        }
    }

    pub fn step(&mut self) {
        *self = self.next_generation();
    }
}
