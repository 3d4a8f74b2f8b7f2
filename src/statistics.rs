//! Statistics about a single colouring run.

use custom_debug_derive::Debug;
use std::{fs::File, io::Write, path::Path, time::Duration};

use crate::debug::opt_fmt;
use crate::{
    colouring::colours_used,
    graph::{Colour, Graph},
    Error,
};

#[derive(Debug)]
pub struct ColouringStatistics {
    // Graph statistics
    pub graph_size: usize,
    pub number_of_edges: usize,
    pub directed: bool,
    pub max_degree: usize,
    // Colouring statistics
    pub colours_used: usize,
    pub colouring_time: Duration,
    #[debug(with = "opt_fmt")]
    pub validated: Option<bool>,
}

impl ColouringStatistics {
    pub fn new(graph: &Graph, colouring: &[Colour], colouring_time: Duration) -> Self {
        ColouringStatistics {
            graph_size: graph.size(),
            number_of_edges: graph.number_edges(),
            directed: graph.is_directed(),
            max_degree: graph.max_degree(),
            colours_used: colours_used(colouring),
            colouring_time,
            validated: None,
        }
    }

    pub fn log_validation(&mut self, valid: bool) {
        self.validated = Some(valid);
    }

    /// The greedy bound: never more than max-degree + 1 colours.
    pub fn within_bound(&self) -> bool {
        self.colours_used <= self.max_degree + 1 && self.colours_used <= self.graph_size
    }

    #[cfg(not(tarpaulin_include))]
    pub fn save_statistics(&self, out_file: &Path) -> Result<(), Error> {
        let mut statistics_file = File::create(out_file)?;
        write!(statistics_file, "Raw Statistics: {:#?}", self).map_err(Error::from)
    }
}
