pub mod custom_error;
pub mod parser;
pub mod part1;
pub mod part2;
pub mod sonar;
