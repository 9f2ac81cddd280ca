use std::fmt;
use std::str::FromStr;

use combine::{
    easy,
    parser::char::{digit, newline},
    EasyParser, ParseError, Parser, Stream,
};

pub type EzParseError<'a> = easy::ParseError<&'a str>;
pub type Result<'a, T> = std::result::Result<T, EzParseError<'a>>;

/// Runs `parser` over the whole of `s`, requiring it to consume every last
/// character.
pub fn from_str<'a, P>(s: &'a str, parser: P) -> Result<'a, P::Output>
where
    P: Parser<easy::Stream<&'a str>>,
{
    (parser, combine::eof())
        .map(|(output, _)| output)
        .easy_parse(s)
        .map(|(output, rest)| {
            debug_assert_eq!(rest, "");
            output
        })
}

/// Parses a decimal integer, with an optional leading `-` for signed types.
pub fn decimal_integer<N, Input>() -> impl Parser<Input, Output = N>
where
    N: FromStr,
    N::Err: fmt::Display,
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    let digits = combine::many1::<String, _, _>(digit());
    let number = (combine::optional(combine::token('-')), digits).map(|(sign, digits)| {
        match sign {
            Some(sign) => format!("{sign}{digits}"),
            None => digits,
        }
    });
    combine::from_str(number)
}

/// Wraps `parser` so that it also consumes the line terminator that follows
/// it (or the end of input, for the last line of a file).
pub fn line<Input, P>(parser: P) -> impl Parser<Input, Output = P::Output>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
    P: Parser<Input>,
{
    let terminator = combine::choice((newline().map(|_| ()), combine::eof()));
    (parser, terminator).map(|(output, _)| output)
}
