use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use miette::GraphicalReportHandler;
use nom::{
    character::complete::{char, digit1},
    combinator::{map_res, opt, recognize},
    error::ParseError,
    sequence::tuple,
    IResult,
};
use nom_locate::LocatedSpan;
use nom_supreme::{
    error::{BaseErrorKind, ErrorTree, GenericErrorTree},
    final_parser::final_parser,
};

// Thanks to FasterThanLime! https://fasterthanli.me/series/advent-of-code-2022/part-11

pub type Span<'a> = LocatedSpan<&'a str>;

#[derive(thiserror::Error, Debug, miette::Diagnostic)]
#[error("bad input")]
struct BadInput<'a> {
    #[source_code]
    src: &'a str,

    #[label("{kind}")]
    bad_bit: miette::SourceSpan,

    kind: BaseErrorKind<&'a str, Box<dyn std::error::Error + Send + Sync>>,
}

pub fn parse_number<'a, E>(i: Span<'a>) -> IResult<Span<'a>, i64, E>
where
    E: ParseError<Span<'a>> + nom::error::FromExternalError<Span<'a>, anyhow::Error>,
{
    map_res(recognize(tuple((opt(char('-')), digit1))), |i: Span<'a>| {
        FromStr::from_str(i.fragment()).map_err(anyhow::Error::msg)
    })(i)
}

/// Runs `parse_fun` over the whole of `l`. On failure the returned error
/// carries a rendered report pointing at the offending span.
pub fn parse_line<'a, T, F>(l: &'a str, parse_fun: F) -> Result<T>
where
    F: FnMut(Span<'a>) -> IResult<Span<'a>, T, ErrorTree<Span<'a>>>,
{
    let parsed: Result<_, ErrorTree<Span>> = final_parser(parse_fun)(Span::new(l));
    parsed.map_err(|e| match e {
        GenericErrorTree::Base { location, kind } => {
            let offset = location.location_offset().into();
            let err = BadInput {
                src: l,
                bad_bit: miette::SourceSpan::new(offset, 0.into()),
                kind,
            };
            let mut rendered = String::new();
            GraphicalReportHandler::new()
                .render_report(&mut rendered, &err)
                .unwrap();
            anyhow!("{rendered}")
        }
        e => anyhow!("bad input: {e:?}"),
    })
}

pub fn input_path(day: u32) -> PathBuf {
    PathBuf::from(format!("{day:02}")).join("input.txt")
}

pub fn read_input_for_day(day: u32) -> Result<Vec<String>> {
    let path = input_path(day);
    let contents = fs::read_to_string(&path)
        .with_context(|| format!("reading input from {}", path.display()))?;

    Ok(contents.lines().map(str::to_string).collect())
}
