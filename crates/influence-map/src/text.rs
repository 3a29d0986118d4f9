//! Text collaborators: turning a map drawing into symbols, the default
//! symbol-to-cost mapping, and a delimited dump of a grid for diagnostics.

use std::fmt::{Display, Write};

use influence_core::Cost;

use crate::config::Sentinels;

/// Symbol for an impassable cell under [`default_cost`].
pub const WALL: char = '#';
/// Symbol for a goal cell under [`default_cost`].
pub const GOAL: char = 'x';

/// Split `text` into rows on `line_delim`, then each row into characters.
///
/// Nothing is validated here: a trailing delimiter produces an empty last
/// row, which field construction then rejects as ragged.
pub fn parse_grid(text: &str, line_delim: &str) -> Vec<Vec<char>> {
    text.split(line_delim)
        .map(|line| line.chars().collect())
        .collect()
}

/// `#` is impassable, `x` is a goal, anything else is unreached floor.
pub fn default_cost<T: Cost>(sentinels: &Sentinels<T>, symbol: &char) -> T {
    match *symbol {
        WALL => sentinels.bad,
        GOAL => sentinels.goal,
        _ => sentinels.unreached,
    }
}

/// Join each row's values with `field_delim` and the rows with
/// `line_delim`.
pub fn serialize_grid<V: Display, R: AsRef<[V]>>(
    rows: &[R],
    field_delim: &str,
    line_delim: &str,
) -> String {
    let mut out = String::new();
    for (r, row) in rows.iter().enumerate() {
        if r > 0 {
            out.push_str(line_delim);
        }
        for (c, v) in row.as_ref().iter().enumerate() {
            if c > 0 {
                out.push_str(field_delim);
            }
            // Writing to a String cannot fail.
            let _ = write!(out, "{v}");
        }
    }
    out
}
