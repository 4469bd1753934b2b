use std::fmt::{self, Write};

use crate::proc::Grid;

impl Grid {
    /// Rows joined with `\r\n`, for a terminal in raw mode.
    pub fn to_raw_lines(&self) -> String {
        self.to_string().replace('\n', "\r\n")
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for c in row {
                f.write_char(c.symbol())?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}
