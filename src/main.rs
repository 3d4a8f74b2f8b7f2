#![warn(rust_2018_idioms)]

//! Greedy first-fit vertex colouring of
//! directed and undirected graphs.

use clap::Parser;
use log::{debug, error, info, warn};
use std::{
    fs::File,
    io::{self, BufReader, BufWriter},
    path::Path,
};

mod colouring;
use colouring::{colour_graph, validate_colouring};

mod debug;
pub use debug::Error;

mod dot;
use dot::write_dot;

mod graph;
use graph::{Colour, Graph};

mod input;
use input::read_graph;

mod misc;
use misc::{InputFormat, Settings};

mod parser;
use parser::{parse_csv_input, parse_txt_input};

mod statistics;
use statistics::ColouringStatistics;

#[cfg(not(tarpaulin_include))]
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

#[cfg(not(tarpaulin_include))]
fn load_graph(settings: &Settings) -> Result<Graph, Error> {
    let path = match &settings.input {
        Some(path) => path,
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            return read_graph(&mut stdin.lock(), &mut stdout.lock());
        }
    };

    info!("Reading {:?} graph from {}", settings.format, path.display());
    let reader = BufReader::new(File::open(path)?);
    match settings.format {
        InputFormat::Txt => parse_txt_input(reader, settings.directed),
        InputFormat::Csv => {
            let graph_size = settings
                .vertices
                .ok_or(Error::SettingsError("csv input needs the number of vertices"))?;
            parse_csv_input(graph_size, settings.directed, reader)
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn render(path: &Path, graph: &Graph, colouring: &[Colour]) -> Result<(), Error> {
    if path == Path::new("-") {
        let stdout = io::stdout();
        write_dot(&mut stdout.lock(), graph, colouring)?;
    } else {
        write_dot(&mut BufWriter::new(File::create(path)?), graph, colouring)?;
        info!("Wrote dot rendering to {}", path.display());
    }
    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() -> Result<(), Error> {
    let settings = Settings::parse();
    init_logging(settings.verbose);
    debug!("{:?}", settings);

    // Build the graph from a file or interactively and ...
    let graph = load_graph(&settings)?;
    info!(
        "Graph with {} vertices and {} edges, directed: {}",
        graph.size(),
        graph.number_edges(),
        graph.is_directed()
    );
    println!("Adjacency list:\n{}", graph);

    // ... colour it with the variant matching its directedness.
    time!(colouring_time, colouring, colour_graph(&graph));
    info!("Colouring took {:?}", colouring_time);
    println!("Greedy colouring: {:?}", colouring);

    let mut statistics = ColouringStatistics::new(&graph, &colouring, colouring_time);
    info!("Used {} colours", statistics.colours_used);
    if !statistics.within_bound() {
        warn!(
            "{} colours exceed the greedy bound of {}",
            statistics.colours_used,
            statistics.max_degree + 1
        );
    }

    if settings.validate {
        let validation = validate_colouring(&graph, &colouring);
        statistics.log_validation(validation.is_ok());
        match validation {
            Ok(()) => info!("Colouring is proper"),
            Err(invalid) => {
                error!("{}", invalid);
                return Err(invalid.into());
            }
        }
    }

    if let Some(path) = &settings.dot {
        render(path, &graph, &colouring)?;
    }

    if let Some(path) = &settings.statistics {
        statistics.save_statistics(path)?;
        info!("Wrote statistics to {}", path.display());
    }

    Ok(())
}
