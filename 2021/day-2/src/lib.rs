pub mod custom_error;
pub mod navigation;
pub mod parser;
pub mod part1;
pub mod part2;
