use chumsky::prelude::*;

use crate::{custom_error::AocError, navigation::Instruction};

/// `<word> <amount>`: the direction word, which always starts the line, and an
/// unsigned amount. Any word is accepted; [`Instruction::new`] decides whether
/// it is a direction.
fn step<'a>() -> impl Parser<'a, &'a str, (&'a str, u32), extra::Err<Rich<'a, char>>> {
    let direction = text::ident();
    let amount = text::digits(10)
        .at_least(1)
        .to_slice()
        .try_map(|digits: &str, span| {
            digits
                .parse::<u32>()
                .map_err(|error| Rich::custom(span, error))
        });

    direction
        .then_ignore(text::inline_whitespace().at_least(1))
        .then(amount)
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

fn parse_line(number: usize, line: &str) -> Result<Instruction, AocError> {
    let (word, amount) = step()
        .parse(line)
        .into_result()
        .map_err(|errors| AocError::from_rich(number, line, errors))?;

    Instruction::new(word, amount).ok_or_else(|| AocError::UnrecognizedInstruction {
        token: word.to_string(),
        line: number,
        content: line.to_string(),
        span: (0, word.len()).into(),
    })
}

/// Parses one instruction per line, stopping at the first bad line.
pub fn parse_instructions(input: &str) -> Result<Vec<Instruction>, AocError> {
    lines(input)
        .map(|(number, line)| parse_line(number, line))
        .collect()
}
