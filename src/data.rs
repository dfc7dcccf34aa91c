use std::fmt::{self, Display, Formatter};
use std::ops::Add;

/// Order in which the blank is slid when generating neighbors.
pub(crate) const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: usize,
    pub c: usize,
}

impl Pos {
    pub fn new(r: usize, c: usize) -> Pos {
        Pos { r, c }
    }

    pub(crate) fn from_index(index: usize, size: usize) -> Pos {
        Pos::new(index / size, index % size)
    }

    pub(crate) fn index(self, size: usize) -> usize {
        self.r * size + self.c
    }

    /// Manhattan distance
    pub fn dist(self, other: Pos) -> usize {
        abs_diff(self.r, other.r) + abs_diff(self.c, other.c)
    }

    pub fn euclidean_dist(self, other: Pos) -> f64 {
        let dr = abs_diff(self.r, other.r) as f64;
        let dc = abs_diff(self.c, other.c) as f64;
        (dr * dr + dc * dc).sqrt()
    }

    /// The neighboring position in `dir` if it stays inside a `size`x`size` board.
    pub(crate) fn step(self, dir: Dir, size: usize) -> Option<Pos> {
        (self + dir).filter(|pos| pos.r < size && pos.c < size)
    }

    pub(crate) fn dir_to(self, other: Pos) -> Option<Dir> {
        DIRECTIONS.iter().cloned().find(|&dir| self + dir == Some(other))
    }
}

fn abs_diff(a: usize, b: usize) -> usize {
    if a > b {
        a - b
    } else {
        b - a
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.r, self.c)
    }
}

/// Direction the blank moves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    fn offset(self) -> (isize, isize) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
            Dir::Right => (0, 1),
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let c = match *self {
            Dir::Up => 'u',
            Dir::Down => 'd',
            Dir::Left => 'l',
            Dir::Right => 'r',
        };
        write!(f, "{}", c)
    }
}

/// `None` when the result would be negative.
impl Add<Dir> for Pos {
    type Output = Option<Pos>;

    fn add(self, dir: Dir) -> Option<Pos> {
        let (dr, dc) = dir.offset();
        let r = self.r as isize + dr;
        let c = self.c as isize + dc;
        if r < 0 || c < 0 {
            None
        } else {
            Some(Pos::new(r as usize, c as usize))
        }
    }
}
