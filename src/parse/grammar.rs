use winnow::ascii::space0;
use winnow::combinator::{alt, cut_err, opt, separated, terminated};
use winnow::error::{ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{any, rest, take_while};

// -- Keys -------------------------------------------------------------------

fn key<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_')
        .context(StrContext::Expected(StrContextValue::Description("key")))
        .parse_next(input)
}

// -- Values -----------------------------------------------------------------

fn quoted(input: &mut &str) -> ModalResult<String> {
    '"'.parse_next(input)?;
    let mut s = String::new();
    loop {
        let ch = cut_err(any)
            .context(StrContext::Expected(StrContextValue::CharLiteral('"')))
            .parse_next(input)?;
        match ch {
            '"' => return Ok(s),
            '\\' => {
                let esc = cut_err(any).parse_next(input)?;
                match esc {
                    '"' => s.push('"'),
                    '\\' => s.push('\\'),
                    other => {
                        s.push('\\');
                        s.push(other);
                    }
                }
            }
            c => s.push(c),
        }
    }
}

fn bare<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| !matches!(c, ';' | '#' | '"' | '\n' | '\r'))
        .verify(|s: &str| !s.trim().is_empty())
        .map(str::trim_end)
        .parse_next(input)
}

fn value(input: &mut &str) -> ModalResult<String> {
    alt((quoted, bare.map(str::to_owned)))
        .context(StrContext::Expected(StrContextValue::Description("value")))
        .parse_next(input)
}

// -- Records ----------------------------------------------------------------

fn pair<'i>(input: &mut &'i str) -> ModalResult<(&'i str, String)> {
    space0.parse_next(input)?;
    let k = key.parse_next(input)?;
    (
        space0,
        cut_err('=').context(StrContext::Expected(StrContextValue::CharLiteral('='))),
        space0,
    )
        .parse_next(input)?;
    let v = cut_err(value).parse_next(input)?;
    space0.parse_next(input)?;
    Ok((k, v))
}

fn comment(input: &mut &str) -> ModalResult<()> {
    ('#', rest).void().parse_next(input)
}

/// A single record line: `key = value` pairs separated by `;`, with an
/// optional trailing `;` and trailing comment. Anything left over is
/// rejected by [`Parser::parse`].
pub(super) fn record<'i>(input: &mut &'i str) -> ModalResult<Vec<(&'i str, String)>> {
    terminated(
        separated(1.., pair, ';'),
        (opt(';'), space0, opt(comment)),
    )
    .parse_next(input)
}

/// True for lines that hold no record: blank or comment-only.
pub(super) fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with('#')
}
