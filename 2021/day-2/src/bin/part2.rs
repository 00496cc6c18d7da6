use miette::*;

use aoc2021_day_2::part2;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let input = include_str!("../../input2.txt");
    let result = part2::process(input)?;
    tracing::info!(part = 2, %result, "course plotted");
    println!("Result: {}", result);
    Ok(())
}
