#![doc = include_str!("../puzzles/02.md")]

use aoc2021::debugln;
use aoc2021::helpers::parse;

/// One step of the submarine's planned course, e.g. `forward 5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Command {
    direction: Direction,
    units: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Down,
    Up,
}

/// Where the submarine ends up when `down` and `up` change its depth
/// directly.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Location {
    horizontal: i32,
    depth: i32,
}

impl Location {
    pub fn advance(self, command: Command) -> Self {
        let units = command.units;
        match command.direction {
            Direction::Forward => Self {
                horizontal: self.horizontal + units,
                ..self
            },
            Direction::Down => Self {
                depth: self.depth + units,
                ..self
            },
            Direction::Up => Self {
                depth: self.depth - units,
                ..self
            },
        }
    }

    pub fn course(&self) -> i32 {
        self.horizontal * self.depth
    }
}

/// Where the submarine ends up when `down` and `up` steer its aim, and only
/// `forward` moves it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct AimedLocation {
    horizontal: i32,
    depth: i32,
    aim: i32,
}

impl AimedLocation {
    pub fn advance(self, command: Command) -> Self {
        let units = command.units;
        match command.direction {
            Direction::Forward => Self {
                horizontal: self.horizontal + units,
                depth: self.depth + self.aim * units,
                ..self
            },
            Direction::Down => Self {
                aim: self.aim + units,
                ..self
            },
            Direction::Up => Self {
                aim: self.aim - units,
                ..self
            },
        }
    }

    pub fn course(&self) -> i32 {
        self.horizontal * self.depth
    }
}

fn commands(input: &str) -> impl Iterator<Item = Command> + '_ {
    input
        .lines()
        .map(|line| parse::from_str(line, Command::parser()).expect("input should be valid"))
}

pub fn part_one(input: &str) -> Option<i32> {
    let location = commands(input).fold(Location::default(), Location::advance);
    debugln!("{location:?}");
    Some(location.course())
}

pub fn part_two(input: &str) -> Option<i32> {
    let location = commands(input).fold(AimedLocation::default(), AimedLocation::advance);
    debugln!("{location:?}");
    Some(location.course())
}

fn main() {
    let input = &aoc2021::read_file("inputs", 2);
    aoc2021::solve!(1, part_one, input);
    aoc2021::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORWARD_8: Command = Command {
        direction: Direction::Forward,
        units: 8,
    };
    const DOWN_5: Command = Command {
        direction: Direction::Down,
        units: 5,
    };
    const UP_3: Command = Command {
        direction: Direction::Up,
        units: 3,
    };

    #[test]
    fn test_location_advance() {
        let location = [FORWARD_8, DOWN_5, UP_3]
            .into_iter()
            .fold(Location::default(), Location::advance);
        assert_eq!(
            location,
            Location {
                horizontal: 8,
                depth: 2,
            }
        );
        assert_eq!(location.course(), 16);
    }

    #[test]
    fn test_aimed_location_advance() {
        let location = [DOWN_5, UP_3, FORWARD_8]
            .into_iter()
            .fold(AimedLocation::default(), AimedLocation::advance);
        assert_eq!(
            location,
            AimedLocation {
                horizontal: 8,
                depth: 16,
                aim: 2,
            }
        );
        assert_eq!(location.course(), 128);
    }

    #[test]
    fn test_part_one() {
        let input = aoc2021::read_file("examples", 2);
        assert_eq!(part_one(&input), Some(150));
    }

    #[test]
    fn test_part_two() {
        let input = aoc2021::read_file("examples", 2);
        assert_eq!(part_two(&input), Some(900));
    }
}

mod parsing {
    use super::*;

    use aoc2021::helpers::parse;

    mod c {
        pub use combine::{
            parser::char::{self, string},
            *,
        };
    }

    use c::{ParseError, Parser, Stream};

    impl Command {
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            // "down 5"
            (Direction::parser(), c::token(' '), parse::decimal_integer())
                .map(|(direction, _, units)| Command { direction, units })
        }
    }

    impl Direction {
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            c::choice((
                c::string("forward").map(|_| Direction::Forward),
                c::string("down").map(|_| Direction::Down),
                c::string("up").map(|_| Direction::Up),
            ))
        }
    }
}
