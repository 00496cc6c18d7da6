use miette::*;

use crate::{
    parser::parse_depths,
    sonar::{count_window_increases, WINDOW_WIDTH},
};

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let depths = parse_depths(input)?;
    tracing::debug!(
        readings = depths.len(),
        width = WINDOW_WIDTH,
        "parsed sonar sweep"
    );

    Ok(count_window_increases(&depths, WINDOW_WIDTH).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn it_works() -> Result<()> {
        let input = "199
200
208
210
200
207
240
269
260
263";
        assert_eq!("5", process(input)?);
        Ok(())
    }

    #[rstest]
    #[case("")]
    #[case("1\n2")]
    #[case("1\n2\n3")]
    fn too_short_for_two_windows(#[case] input: &str) -> Result<()> {
        assert_eq!("0", process(input)?);
        Ok(())
    }

    #[test]
    fn four_readings_make_one_comparison() -> Result<()> {
        assert_eq!("1", process("1\n2\n3\n4")?);
        assert_eq!("0", process("4\n3\n2\n1")?);
        Ok(())
    }
}
