use std::fmt::{self, Debug, Display, Formatter};
use std::io::{self, BufWriter, Write};

use separator::Separatable;

use crate::solver::SolverOk;

pub struct SolutionFormatter<'a> {
    solution: &'a SolverOk,
    include_boards: bool,
}

impl<'a> SolutionFormatter<'a> {
    pub(crate) fn new(solution: &'a SolverOk, include_boards: bool) -> Self {
        Self {
            solution,
            include_boards,
        }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.solution.heuristic)?;
        writeln!(
            f,
            "Nodes explored: {}",
            self.solution.nodes_explored().separated_string()
        )?;
        writeln!(
            f,
            "Nodes expanded: {}",
            self.solution.nodes_expanded().separated_string()
        )?;

        match (self.solution.path(), self.solution.moves()) {
            (Some(path), Some(moves)) => {
                writeln!(f, "Moves: {}", moves.move_cnt())?;
                writeln!(f, "Solution: {}", moves)?;
                writeln!(f)?;
                if self.include_boards {
                    for state in path {
                        writeln!(f, "{}", state)?;
                    }
                }
            }
            _ => {
                writeln!(f, "{}", self.solution.outcome)?;
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl SolverOk {
    pub fn report(&self, include_boards: bool) -> SolutionFormatter<'_> {
        SolutionFormatter::new(self, include_boards)
    }
}

/// Writes the full report including boards. The sink is flushed even when a write fails midway.
pub fn write_solution<W: Write>(sink: W, solution: &SolverOk) -> io::Result<()> {
    let mut writer = BufWriter::new(sink);
    let written = write!(writer, "{}", solution.report(true));
    let flushed = writer.flush();
    written.and(flushed)
}
