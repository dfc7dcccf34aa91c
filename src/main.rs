#[macro_use]
extern crate prettytable;

use std::env;
use std::fs::File;
use std::process;
use std::time::Duration;

use clap::{App, Arg, ArgMatches};
use prettytable::{format, Table};
use separator::Separatable;

use n_puzzle_solver::config::{Heuristic, Limits};
use n_puzzle_solver::solution_formatter::write_solution;
use n_puzzle_solver::solver::{self, SolverOk};
use n_puzzle_solver::LoadPuzzle;

fn main() {
    env_logger::init();

    let matches = App::new("n-puzzle")
        .author("martin-t")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Finds optimal solutions to sliding tile puzzles using A*")
        .arg(
            Arg::with_name("heuristic")
                .short("H")
                .long("heuristic")
                .takes_value(true)
                .possible_values(&["hamming", "manhattan", "euclidean", "linear-conflict", "all"])
                .default_value("all")
                .help("heuristic to search with"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .value_name("FILE")
                .help("also write reports to this file"),
        )
        .arg(
            Arg::with_name("max-expanded")
                .long("max-expanded")
                .takes_value(true)
                .value_name("N")
                .validator(|s| validate_number(&s))
                .help("give up after expanding this many states"),
        )
        .arg(
            Arg::with_name("time-limit")
                .long("time-limit")
                .takes_value(true)
                .value_name("SECONDS")
                .validator(|s| validate_number(&s))
                .help("give up after this many seconds"),
        )
        .arg(
            Arg::with_name("stats")
                .long("stats")
                .help("print statistics by depth"),
        )
        .arg(
            Arg::with_name("file")
                .required(true)
                .help("puzzle file: board size on the first line, then the rows"),
        )
        .get_matches();

    let heuristics = parse_heuristics(&matches);
    let limits = parse_limits(&matches);
    // clap guarantees presence of required args
    let path = matches.value_of("file").unwrap_or_default();

    let start = path.load_puzzle().unwrap_or_else(|err| {
        match env::current_dir() {
            Ok(dir) => eprintln!("Can't load puzzle {} in {}: {}", path, dir.display(), err),
            Err(_) => eprintln!("Can't load puzzle {}: {}", path, err),
        }
        process::exit(1);
    });

    let solutions = solver::solve_all(&start, &heuristics, &limits);

    for solution in &solutions {
        print!("{}", solution.report(true));
        if matches.is_present("stats") {
            println!("{}", solution.stats);
        }
    }

    if let Some(output) = matches.value_of("output") {
        if let Err(err) = write_reports(output, &solutions) {
            eprintln!("Can't write {}: {}", output, err);
            process::exit(1);
        }
    }

    if solutions.len() > 1 {
        print_summary(&solutions);
        if !solver::consistent(&solutions) {
            println!("Inconsistent");
        }
    }
}

fn validate_number(s: &str) -> Result<(), String> {
    s.parse::<usize>()
        .map(|_| ())
        .map_err(|_| format!("{} is not a non-negative integer", s))
}

fn parse_heuristics(matches: &ArgMatches<'_>) -> Vec<Heuristic> {
    match matches.value_of("heuristic") {
        None | Some("all") => Heuristic::ALL.to_vec(),
        Some(name) => match name.parse() {
            Ok(heuristic) => vec![heuristic],
            Err(err) => {
                eprintln!("{}", err);
                process::exit(1);
            }
        },
    }
}

fn parse_limits(matches: &ArgMatches<'_>) -> Limits {
    // values were validated by clap
    let number = |name| {
        matches
            .value_of(name)
            .and_then(|s: &str| s.parse::<usize>().ok())
    };

    let mut limits = Limits::unlimited();
    if let Some(max) = number("max-expanded") {
        limits = limits.max_expanded(max);
    }
    if let Some(secs) = number("time-limit") {
        limits = limits.time_limit(Duration::from_secs(secs as u64));
    }
    limits
}

fn write_reports(path: &str, solutions: &[SolverOk]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    for solution in solutions {
        write_solution(&mut file, solution)?;
    }
    Ok(())
}

fn print_summary(solutions: &[SolverOk]) {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table.set_titles(row!["Heuristic", "Outcome", "Moves", "Explored", "Expanded", "Time (ms)"]);
    for solution in solutions {
        let moves = solution
            .move_cnt()
            .map_or_else(|| "-".to_string(), |cnt| cnt.to_string());
        table.add_row(row![
            solution.heuristic,
            solution.outcome,
            r->moves,
            r->solution.nodes_explored().separated_string(),
            r->solution.nodes_expanded().separated_string(),
            r->(solution.elapsed.as_millis() as u64).separated_string()
        ]);
    }
    table.printstd();
}
