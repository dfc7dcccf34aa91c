use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::Index;

use crate::data::{Dir, Pos, DIRECTIONS};

pub type Tile = u32;

/// Smallest supported board edge
pub const MIN_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateErr {
    InvalidDimension(usize),
    ShapeMismatch,
    InvalidPermutation,
}

impl Display for StateErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            StateErr::InvalidDimension(size) => {
                write!(f, "Board size must be at least {}, got {}", MIN_SIZE, size)
            }
            StateErr::ShapeMismatch => write!(f, "Board is not square or doesn't match its size"),
            StateErr::InvalidPermutation => {
                write!(f, "Board must contain numbers 0 to K*K-1 exactly once")
            }
        }
    }
}

impl Error for StateErr {}

/// A KxK board, `0` is the blank.
///
/// Immutable once constructed - moving the blank creates a new state.
/// Equality and hashing only look at the tiles.
#[derive(Clone)]
pub struct State {
    size: usize,
    tiles: Vec<Tile>,
    blank: Pos,
}

impl State {
    pub fn new(size: usize, grid: &[Vec<Tile>]) -> Result<State, StateErr> {
        if size < MIN_SIZE {
            return Err(StateErr::InvalidDimension(size));
        }
        if grid.len() != size || grid.iter().any(|row| row.len() != size) {
            return Err(StateErr::ShapeMismatch);
        }

        let tiles: Vec<Tile> = grid
            .iter()
            .flat_map(|row| row.iter().cloned())
            .collect();

        let mut seen = vec![false; tiles.len()];
        for &tile in &tiles {
            let tile = tile as usize;
            if tile >= seen.len() || seen[tile] {
                return Err(StateErr::InvalidPermutation);
            }
            seen[tile] = true;
        }

        Ok(State::from_tiles(size, tiles))
    }

    /// `[1, 2, ..., K*K-1, 0]` in row-major order
    pub fn goal(size: usize) -> Result<State, StateErr> {
        if size < MIN_SIZE {
            return Err(StateErr::InvalidDimension(size));
        }
        Ok(State::from_tiles(size, goal_tiles(size)))
    }

    /// The goal state of a board this size.
    pub fn goal_state(&self) -> State {
        State::from_tiles(self.size, goal_tiles(self.size))
    }

    /// Callers guarantee `tiles` is a valid permutation.
    fn from_tiles(size: usize, tiles: Vec<Tile>) -> State {
        let blank_index = tiles.iter().position(|&t| t == 0).unwrap_or(0);
        State {
            size,
            tiles,
            blank: Pos::from_index(blank_index, size),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn rows(&self) -> Vec<Vec<Tile>> {
        self.tiles.chunks(self.size).map(|row| row.to_vec()).collect()
    }

    pub fn empty_cell(&self) -> Pos {
        self.blank
    }

    /// Where `tile` is located in the goal state.
    pub(crate) fn goal_pos(&self, tile: Tile) -> Pos {
        debug_assert!(tile != 0);
        Pos::from_index(tile as usize - 1, self.size)
    }

    /// The state after sliding the blank in `dir`, if it stays on the board.
    pub fn slide(&self, dir: Dir) -> Option<State> {
        let target = self.blank.step(dir, self.size)?;

        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank.index(self.size), target.index(self.size));
        Some(State {
            size: self.size,
            tiles,
            blank: target,
        })
    }

    /// Up to 4 states - fewer at edges and corners.
    pub fn neighbors(&self) -> Vec<State> {
        DIRECTIONS.iter().filter_map(|&dir| self.slide(dir)).collect()
    }
}

fn goal_tiles(size: usize) -> Vec<Tile> {
    let cells = size * size;
    (1..cells as Tile).chain(Some(0)).collect()
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.tiles == other.tiles
    }
}

impl Eq for State {}

impl Hash for State {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tiles.hash(state);
    }
}

impl Index<Pos> for State {
    type Output = Tile;

    fn index(&self, pos: Pos) -> &Self::Output {
        &self.tiles[pos.index(self.size)]
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let max = (self.size * self.size - 1).to_string();
        let width = max.len();
        for row in self.tiles.chunks(self.size) {
            for (c, tile) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", tile, width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
