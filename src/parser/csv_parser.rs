//! Parser for graphs encoded in csv files.

use std::io::BufRead;

use crate::{
    get_line,
    graph::{Graph, VertexIndex},
    parse_single_line, Error,
};

use super::{Input, ParseResult};

fn parse_index(input: Input<'_>) -> ParseResult<'_, u64> {
    use nom::{
        character::complete::{space0, u64},
        sequence::delimited,
    };

    delimited(space0, u64, space0)(input)
}

fn parse_edge(input: Input<'_>) -> ParseResult<'_, (VertexIndex, VertexIndex)> {
    use nom::{character::complete::char, combinator::map, sequence::separated_pair};

    map(
        separated_pair(parse_index, char(','), parse_index),
        |(start, end)| (start as usize, end as usize),
    )(input)
}

fn parse_column_header(input: Input<'_>) -> ParseResult<'_, ()> {
    use nom::{character::complete::not_line_ending, combinator::value};

    value((), not_line_ending)(input)
}

/// The csv format carries neither the graph size
/// nor the directedness, both are given by the caller.
pub fn parse_csv_input<B: BufRead>(
    graph_size: usize,
    directed: bool,
    input: B,
) -> Result<Graph, Error> {
    use nom::combinator::eof;

    let mut graph = Graph::new(graph_size)?;
    let mut lines = input.lines();

    get_line!(header, lines);
    parse_single_line!(_header, parse_column_header(&header));

    for line in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        parse_single_line!(start_end, parse_edge(&line));
        let (start, end) = start_end;
        graph.add_edge(start, end, directed)?;
    }

    Ok(graph)
}
