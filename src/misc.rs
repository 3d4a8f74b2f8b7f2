use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// `n=<vertices> [d]` header followed by `u v` lines
    Txt,
    /// Column header followed by `u,v` lines
    Csv,
}

impl Default for InputFormat {
    fn default() -> Self {
        Self::Txt
    }
}

/// Greedy first-fit colouring of directed and undirected graphs.
///
/// Without an input file the graph is read interactively from stdin.
#[derive(Debug, Default, Parser)]
#[command(name = "gcol", version)]
pub struct Settings {
    /// Read the graph from this file.
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    /// Format of the input file.
    #[arg(short, long, value_enum, default_value_t = InputFormat::Txt)]
    pub format: InputFormat,
    /// Number of vertices, required for csv files.
    #[arg(short = 'n', long, required_if_eq("format", "csv"))]
    pub vertices: Option<usize>,
    /// Treat every edge of the input file as directed.
    #[arg(short, long)]
    pub directed: bool,
    /// Write the coloured graph in dot format to this file (`-` for stdout).
    #[arg(long)]
    pub dot: Option<PathBuf>,
    /// Check that the colouring is total and proper.
    #[arg(long)]
    pub validate: bool,
    /// Write statistics about the colouring to this file.
    #[arg(short, long)]
    pub statistics: Option<PathBuf>,
    /// Log debug information.
    #[arg(short, long)]
    pub verbose: bool,
}
