use log::debug;
use std::io::{self, BufRead, Write};

use crate::{graph::Graph, parser::parse_edge_line, Error};

/// Prints `message` and reads the answer into `buffer`.
/// Returns false if the input is exhausted.
fn prompt<R: BufRead, W: Write>(
    message: &str,
    buffer: &mut String,
    input: &mut R,
    output: &mut W,
) -> Result<bool, io::Error> {
    write!(output, "{}", message)?;
    output.flush()?;

    buffer.clear();
    Ok(input.read_line(buffer)? > 0)
}

fn unexpected_eof() -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, "Input ended before the graph was complete!")
}

fn read_graph_size<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<usize, Error> {
    let mut buffer = String::new();

    loop {
        if !prompt("Number of vertices: ", &mut buffer, input, output)? {
            return Err(unexpected_eof().into());
        }

        match buffer.trim().parse::<usize>() {
            Ok(n) if n > 0 => return Ok(n),
            _ => writeln!(output, "Please insert only natural numbers greater than 0!")?,
        }
    }
}

fn read_directedness<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<bool, Error> {
    let mut buffer = String::new();

    loop {
        if !prompt("Is the graph directed? (yes/no): ", &mut buffer, input, output)? {
            return Err(unexpected_eof().into());
        }

        match buffer.trim().to_lowercase().as_str() {
            "yes" | "y" => return Ok(true),
            "no" | "n" => return Ok(false),
            _ => writeln!(output, "Please answer with `yes` or `no`!")?,
        }
    }
}

fn read_edges<R: BufRead, W: Write>(
    graph: &mut Graph,
    directed: bool,
    input: &mut R,
    output: &mut W,
) -> Result<(), Error> {
    let mut buffer = String::new();

    writeln!(
        output,
        "Insert the edges in the format `u v` where u and v are vertex indices starting at 0. \
An empty line ends the input."
    )?;

    while prompt("Edge: ", &mut buffer, input, output)? {
        let line = buffer.trim();
        if line.is_empty() {
            break;
        }

        match parse_edge_line(line) {
            Ok((start, end)) => {
                if let Err(error) = graph.add_edge(start, end, directed) {
                    debug!("Rejected edge {} {}: {}", start, end, error);
                    writeln!(
                        output,
                        "Please only input valid vertex indices (i.e. between 0 and {})!",
                        graph.size() - 1
                    )?;
                }
            }
            Err(_) => writeln!(
                output,
                "Please insert exactly two vertex indices separated by a space!"
            )?,
        }
    }

    Ok(())
}

/// Asks for the number of vertices, the directedness and
/// the edges until the user ends the input. Malformed answers
/// are reported and asked again, only I/O errors are returned.
pub fn read_graph<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Graph, Error> {
    let size = read_graph_size(input, output)?;
    let directed = read_directedness(input, output)?;

    let mut graph = Graph::new(size)?;
    read_edges(&mut graph, directed, input, output)?;

    Ok(graph)
}
