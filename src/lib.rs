// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

#[macro_use]
extern crate log;

pub mod config;
pub mod data;
pub mod fs;
pub mod heuristics;
pub mod inversions;
pub mod moves;
pub mod parser;
pub mod solution_formatter;
pub mod solvability;
pub mod solver;
pub mod state;

use std::error::Error;

use crate::config::{Heuristic, Limits};
use crate::solver::SolverOk;
use crate::state::State;

pub trait LoadPuzzle {
    fn load_puzzle(&self) -> Result<State, Box<dyn Error>>;
}

pub trait Solve {
    fn solve(&self, heuristic: Heuristic, limits: &Limits) -> SolverOk;
}
