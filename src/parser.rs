use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::state::{State, StateErr, Tile, MIN_SIZE};

/// Line and column numbers are 1-indexed and count blank lines too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Empty,
    InvalidSize(usize),
    InvalidNumber(usize, usize),
    MissingRows,
    TrailingData(usize),
    State(StateErr),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Empty => write!(f, "No puzzle"),
            ParserErr::InvalidSize(line) => write!(f, "Invalid board size on line {}", line),
            ParserErr::InvalidNumber(line, col) => {
                write!(f, "Invalid number at pos: [{}, {}]", line, col)
            }
            ParserErr::MissingRows => write!(f, "Fewer rows than the board size"),
            ParserErr::TrailingData(line) => write!(f, "Unexpected data on line {}", line),
            ParserErr::State(err) => write!(f, "{}", err),
        }
    }
}

impl Error for ParserErr {}

impl From<StateErr> for ParserErr {
    fn from(err: StateErr) -> Self {
        ParserErr::State(err)
    }
}

impl FromStr for State {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// The first line is the board size K, followed by K lines of K numbers separated by whitespace.
pub fn parse(puzzle: &str) -> Result<State, ParserErr> {
    // skip blank lines so we can specify puzzles using raw strings more easily
    let mut lines = puzzle
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|&(_, line)| !line.is_empty());

    let (size_line, size) = lines.next().ok_or(ParserErr::Empty)?;
    let size: usize = size
        .parse()
        .map_err(|_| ParserErr::InvalidSize(size_line))?;
    if size < MIN_SIZE {
        return Err(StateErr::InvalidDimension(size).into());
    }

    // size is untrusted, rows are only allocated as they're read
    let mut grid = Vec::new();
    for _ in 0..size {
        let (line_num, line) = lines.next().ok_or(ParserErr::MissingRows)?;
        let row = line
            .split_whitespace()
            .enumerate()
            .map(|(c, num)| {
                num.parse::<Tile>()
                    .map_err(|_| ParserErr::InvalidNumber(line_num, c + 1))
            })
            .collect::<Result<Vec<_>, _>>()?;
        grid.push(row);
    }

    if let Some((line_num, _)) = lines.next() {
        return Err(ParserErr::TrailingData(line_num));
    }

    Ok(State::new(size, &grid)?)
}
