//! Parser for plain edge lists. The format looks like this:
//! ```text
//! # comments and blank lines are ignored
//! n=5 d
//! 0 1
//! 1 2
//! ```
//! The header gives the number of vertices, the optional `d`
//! marks every edge of the file as directed.

use std::io::BufRead;

use crate::{
    get_line,
    graph::{Graph, VertexIndex},
    parse_single_line, Error,
};

use super::{Input, ParseResult};

fn parse_size_header(input: Input<'_>) -> ParseResult<'_, (usize, bool)> {
    use nom::{
        bytes::complete::tag,
        character::complete::{char, space0, space1, u64},
        combinator::{map, opt},
        error::context,
        sequence::{delimited, pair, preceded},
    };

    let size_parser = preceded(tag("n="), u64);
    let directed_parser = opt(preceded(space1, char('d')));
    let header_parser = delimited(space0, pair(size_parser, directed_parser), space0);

    context(
        "Header with the number of vertices",
        map(header_parser, |(size, directed)| {
            (size as usize, directed.is_some())
        }),
    )(input)
}

fn parse_edge(input: Input<'_>) -> ParseResult<'_, (VertexIndex, VertexIndex)> {
    use nom::{
        character::complete::{space0, space1, u64},
        combinator::map,
        error::context,
        sequence::{delimited, separated_pair},
    };

    let edge_parser = delimited(space0, separated_pair(u64, space1, u64), space0);
    context(
        "Edge as two vertex indices",
        map(edge_parser, |(start, end)| (start as usize, end as usize)),
    )(input)
}

fn is_ignorable(line: &str) -> bool {
    let line = line.trim_start();
    line.is_empty() || line.starts_with('#')
}

/// Parses a single `u v` edge, nothing else may follow on the line.
pub fn parse_edge_line(line: &str) -> Result<(VertexIndex, VertexIndex), Error> {
    use nom::combinator::eof;

    parse_single_line!(start_end, parse_edge(line));
    Ok(start_end)
}

pub fn parse_txt_input<B: BufRead>(input: B, force_directed: bool) -> Result<Graph, Error> {
    use nom::combinator::eof;

    let mut lines = input
        .lines()
        .filter(|line| !matches!(line, Ok(line) if is_ignorable(line)));

    get_line!(header, lines);
    parse_single_line!(size_directed, parse_size_header(&header));
    let (graph_size, directed) = size_directed;
    let directed = directed || force_directed;

    let mut graph = Graph::new(graph_size)?;

    for line in lines {
        let line = line?;
        parse_single_line!(start_end, parse_edge(&line));
        let (start, end) = start_end;
        graph.add_edge(start, end, directed)?;
    }

    Ok(graph)
}
