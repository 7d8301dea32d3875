#![deny(clippy::all)]

use clap::{App, Arg, ArgMatches};

use lazy_static::lazy_static;
use log::{debug, info};
use thiserror::Error;

use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::io::Read;

use geometry::coord2d::maze::Maze;
use geometry::coord2d::path::Path;
use geometry::coord2d::problem::{GridHeuristic, PositionProblem};
use geometry::coord2d::{Direction, Point};
use searcher::{astar, bfs, depth, dfs, dijkstra, DepthLimit, Outcome, Report, SearchProblem};

type Error = anyhow::Error;
type MazeProblem<'m> = PositionProblem<'m, Maze>;

/// Runs one search strategy on a maze.
pub type Solver = fn(&MazeProblem<'_>, &Settings) -> Outcome<Direction>;

/// Knobs which only some strategies look at.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Settings {
    /// Depth cap for the depth-bounded strategies.
    pub max_depth: DepthLimit,

    /// Estimate used by A*.
    pub heuristic: GridHeuristic,
}

fn reported(report: Report<Direction>) -> Outcome<Direction> {
    info!("{}", report);
    Outcome {
        expanded: report.expanded,
        cutoff: false,
        solution: report.into_solution(),
    }
}

fn solve_dfs(problem: &MazeProblem<'_>, _: &Settings) -> Outcome<Direction> {
    dfs::build(problem).run()
}

fn solve_bfs(problem: &MazeProblem<'_>, _: &Settings) -> Outcome<Direction> {
    bfs::build(problem).run()
}

fn solve_ucs(problem: &MazeProblem<'_>, _: &Settings) -> Outcome<Direction> {
    dijkstra::build(problem).run()
}

fn solve_astar(problem: &MazeProblem<'_>, settings: &Settings) -> Outcome<Direction> {
    astar::build(problem, settings.heuristic).run()
}

fn solve_dldfs(problem: &MazeProblem<'_>, settings: &Settings) -> Outcome<Direction> {
    reported(depth::depth_limited_report(problem, settings.max_depth))
}

fn solve_iddfs(problem: &MazeProblem<'_>, settings: &Settings) -> Outcome<Direction> {
    reported(depth::iterative_deepening_report(problem, settings.max_depth))
}

lazy_static! {
    static ref SOLVERS: HashMap<&'static str, Solver> = {
        let mut s: HashMap<&'static str, Solver> = HashMap::new();
        let strategies: [(&[&'static str], Solver); 6] = [
            (&["dfs", "depth-first"], solve_dfs),
            (&["bfs", "breadth-first"], solve_bfs),
            (&["ucs", "uniform-cost", "dijkstra"], solve_ucs),
            (&["astar", "a-star"], solve_astar),
            (&["dldfs", "depth-limited"], solve_dldfs),
            (&["iddfs", "iterative-deepening"], solve_iddfs),
        ];

        for (names, func) in strategies.iter() {
            for name in names.iter() {
                s.insert(*name, *func);
            }
        }

        s
    };
}

/// Look up a strategy by name or alias.
pub fn strategy(name: &str) -> Result<Solver, SolverError> {
    SOLVERS
        .get(name.to_ascii_lowercase().as_str())
        .copied()
        .ok_or_else(|| SolverError::UnknownAlgorithm(name.to_string()))
}

/// Solve a maze with the named strategy.
pub fn run(maze: &Maze, algorithm: &str, settings: &Settings) -> Result<Outcome<Direction>, Error> {
    let solver = strategy(algorithm)?;
    let problem = maze.solve();
    let outcome = solver(&problem, settings);
    debug!(
        "{} from {} to {}: {} expansions",
        algorithm,
        maze.start(),
        maze.goal(),
        outcome.expanded
    );
    Ok(outcome)
}

/// Human readable summary of a search.
pub fn describe(
    maze: &Maze,
    algorithm: &str,
    outcome: &Outcome<Direction>,
) -> Result<String, Error> {
    let mut text = format!("Algorithm: {}\n", algorithm);
    match &outcome.solution {
        None => {
            text.push_str(&format!(
                "No path from {} to {}\nExpanded: {}\n",
                maze.start(),
                maze.goal(),
                outcome.expanded
            ));
        }
        Some(actions) => {
            let cost = maze.solve().cost_of_actions(actions)?;
            let moves: Vec<String> = actions.iter().map(|d| d.to_string()).collect();
            let path = Path::follow(maze.start(), actions);
            text.push_str(&format!(
                "Actions: [{}]\nCost: {}\nExpanded: {}\n{}",
                moves.join(", "),
                cost,
                outcome.expanded,
                maze.render(&path)
            ));
        }
    }
    Ok(text)
}

fn settings(matches: &ArgMatches) -> Result<Settings, Error> {
    let mut settings = Settings::default();
    if let Some(depth) = matches.value_of("max-depth") {
        settings.max_depth = depth.parse()?;
    }
    if let Some(heuristic) = matches.value_of("heuristic") {
        settings.heuristic = heuristic.parse()?;
    }
    Ok(settings)
}

fn load(matches: &ArgMatches) -> Result<Maze, Error> {
    let mut layout = String::new();
    get_input_reader(matches.value_of("layout"))?.read_to_string(&mut layout)?;

    let mut maze: Maze = layout.parse()?;
    if let Some(start) = matches.value_of("start") {
        maze = maze.with_start(start.parse::<Point>()?)?;
    }
    if let Some(goal) = matches.value_of("goal") {
        maze = maze.with_goal(goal.parse::<Point>()?)?;
    }
    Ok(maze)
}

pub fn solver() -> Result<(), Error> {
    let matches = App::new("Maze Solver")
        .version("1.0")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Find paths through text mazes with classic search strategies")
        .arg(
            Arg::with_name("layout")
                .value_name("LAYOUT")
                .help("Maze layout file, '-' for stdin")
                .required(false)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("algorithm")
                .short("a")
                .long("algorithm")
                .value_name("NAME")
                .help("dfs, bfs, ucs, astar, dldfs or iddfs")
                .default_value("astar")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("max-depth")
                .short("d")
                .long("max-depth")
                .value_name("DEPTH")
                .help("Depth cap for dldfs and iddfs, or 'inf'")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("heuristic")
                .short("H")
                .long("heuristic")
                .value_name("NAME")
                .help("null, manhattan or euclidean")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("start")
                .long("start")
                .value_name("X,Y")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("goal")
                .long("goal")
                .value_name("X,Y")
                .takes_value(true),
        )
        .get_matches();

    let algorithm = matches.value_of("algorithm").unwrap_or("astar");
    let settings = settings(&matches)?;
    let maze = load(&matches)?;

    let outcome = run(&maze, algorithm, &settings)?;
    print!("{}", describe(&maze, algorithm, &outcome)?);
    Ok(())
}

type BoxedRead = Box<dyn ::std::io::Read + 'static>;

const DEFAULT_LAYOUT: &str = "layouts/medium.txt";

pub fn get_input_reader(filename: Option<&str>) -> Result<BoxedRead, Error> {
    let reader: BoxedRead = match filename {
        Some("-") => Box::new(::std::io::stdin()),
        Some(path) => {
            let f: File = File::open(path)?;
            Box::new(f)
        }
        None => Box::new(File::open(DEFAULT_LAYOUT).map_err(SolverError::DefaultLayoutNotFound)?),
    };
    Ok(reader)
}

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Layout not found: {}", DEFAULT_LAYOUT)]
    DefaultLayoutNotFound(#[source] io::Error),
}
