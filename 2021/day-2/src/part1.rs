use miette::*;

use crate::{navigation::Position, parser::parse_instructions};

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let instructions = parse_instructions(input)?;
    tracing::debug!(steps = instructions.len(), "parsed planned course");

    let position = Position::fold(&instructions)?;
    tracing::debug!(
        horizontal = position.horizontal,
        depth = position.depth,
        "reached final position"
    );

    Ok(position.answer()?.to_string())
}
