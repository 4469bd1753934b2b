//! Conway's Game of Life on a bounded grid, advanced one generation per key press.

pub mod config;
pub mod draw;
pub mod error;
pub mod parse;
pub mod proc;
pub mod render;

pub use error::{Error, Result};
pub use proc::{Cell, Grid, Size};
