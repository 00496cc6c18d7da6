use miette::*;

use aoc2021_day_1::part1;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let input = include_str!("../../input1.txt");
    let result = part1::process(input)?;
    tracing::info!(part = 1, %result, "sonar sweep analysed");
    println!("Result: {}", result);
    Ok(())
}
