use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use crate::parser;
use crate::state::State;
use crate::LoadPuzzle;

pub(crate) fn read_file<P: AsRef<Path>>(path: P) -> Result<String, Box<dyn Error>> {
    let mut file = File::open(path)?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

impl LoadPuzzle for Path {
    fn load_puzzle(&self) -> Result<State, Box<dyn Error>> {
        let text = read_file(self)?;
        let state = parser::parse(&text)?;
        debug!("Loaded {}x{} puzzle from {}", state.size(), state.size(), self.display());
        Ok(state)
    }
}

/// Treats the string as a path, not as the puzzle itself.
impl LoadPuzzle for str {
    fn load_puzzle(&self) -> Result<State, Box<dyn Error>> {
        Path::new(self).load_puzzle()
    }
}
