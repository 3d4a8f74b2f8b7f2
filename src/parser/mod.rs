mod csv_parser;
mod txt_parser;

pub use csv_parser::parse_csv_input;
pub use txt_parser::{parse_edge_line, parse_txt_input};

pub type Input<'a> = &'a str;
pub type ParseError<'a> = nom::error::VerboseError<Input<'a>>;
pub type ParseResult<'a, O> = nom::IResult<Input<'a>, O, ParseError<'a>>;
