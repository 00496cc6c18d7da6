use miette::*;

use crate::{navigation::AimedPosition, parser::parse_instructions};

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let instructions = parse_instructions(input)?;
    tracing::debug!(steps = instructions.len(), "parsed planned course");

    let position = AimedPosition::fold(&instructions)?;
    tracing::debug!(
        horizontal = position.horizontal,
        depth = position.depth,
        aim = position.aim,
        "reached final position"
    );

    Ok(position.answer()?.to_string())
}
