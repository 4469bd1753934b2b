use life_step::{
    config::{self, Args},
    draw::{self, App},
    parse, Grid,
};

use std::{fs::File, io::{stdin, BufReader, IsTerminal}};

use anyhow::{anyhow, Context};
use clap::Parser;
use tracing::info;

const PROMPT: &str = "\
Enter the number of rows and columns, then the grid, for example:
3 7
.X...X.
X.X.X.X
X...X.X";

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    config::init_logging(args.filter());

    let grid = match &args.input {
        Some(path) => {
            let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            parse::read_grid(BufReader::new(f)).with_context(|| format!("reading grid from {}", path.display()))?
        },
        None => {
            if stdin().is_terminal() {
                eprintln!("{PROMPT}");
            }
            parse::read_grid(stdin().lock()).context("reading grid from standard input")?
        },
    };

    match args.generations {
        Some(n) => headless(grid, n),
        None => draw::run(App::new(grid)).map_err(|e| anyhow!(e)),
    }
}

/// Prints generations 0 through `n`, separated by blank lines.
fn headless(mut grid: Grid, n: u64) -> anyhow::Result<()> {
    info!(generations = n, "running headless");
    for i in 0..=n {
        if i > 0 {
            grid.step();
            println!();
        }
        print!("{grid}");
    }
    Ok(())
}
