use miette::*;

use aoc2021_day_1::part2;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let input = include_str!("../../input2.txt");
    let result = part2::process(input)?;
    tracing::info!(part = 2, %result, "sonar sweep analysed");
    println!("Result: {}", result);
    Ok(())
}
