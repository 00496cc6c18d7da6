use miette::*;

use crate::{parser::parse_depths, sonar::count_increases};

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let depths = parse_depths(input)?;
    tracing::debug!(readings = depths.len(), "parsed sonar sweep");

    Ok(count_increases(&depths).to_string())
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
        assert_eq!("7", process(input)?);
        Ok(())
    }

    #[rstest]
    #[case("", "0")]
    #[case("5", "0")]
    #[case("5\n5", "0")]
    #[case("5\n6", "1")]
    fn handles_short_sweeps(#[case] input: &str, #[case] expected: &str) -> Result<()> {
        assert_eq!(expected, process(input)?);
        Ok(())
    }

    #[test]
    fn aborts_on_malformed_reading() {
        assert!(process("1\n2\nthree\n4").is_err());
    }
}
