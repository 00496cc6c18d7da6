use chumsky::prelude::*;

use crate::custom_error::AocError;

/// A single reading: an optionally negative decimal integer filling the whole line.
/// Values outside `i64` become a custom `Rich` error.
fn depth<'a>() -> impl Parser<'a, &'a str, i64, extra::Err<Rich<'a, char>>> {
    just('-')
        .or_not()
        .then(text::digits(10).at_least(1))
        .to_slice()
        .try_map(|digits: &str, span| {
            digits
                .parse::<i64>()
                .map_err(|error| Rich::custom(span, error))
        })
        .then_ignore(end())
}

/// Trimmed, non-blank lines of `input` paired with their 1-based line number.
///
/// Blank lines are skipped but still counted, so numbers match the file.
pub fn lines<'a>(input: &'a str) -> impl Iterator<Item = (usize, &'a str)> + 'a {
    input
        .lines()
        .map(str::trim)
        .enumerate()
        .map(|(index, line)| (index + 1, line))
        .filter(|&(_, line)| !line.is_empty())
}

/// Parses one depth per line, stopping at the first malformed line.
pub fn parse_depths(input: &str) -> Result<Vec<i64>, AocError> {
    lines(input)
        .map(|(number, line)| {
            depth()
                .parse(line)
                .into_result()
                .map_err(|errors| AocError::from_rich(number, line, errors))
        })
        .collect()
}
