#![doc = include_str!("../puzzles/01.md")]

use itertools::Itertools;

fn depths(input: &str) -> impl Iterator<Item = u32> + '_ {
    input
        .lines()
        .map(|line| line.parse().expect("input should be one depth per line"))
}

/// Returns the number of measurements that are larger than the previous
/// measurement.
pub fn part_one(input: &str) -> Option<usize> {
    let increases = depths(input)
        .tuple_windows()
        .filter(|(previous, next)| next > previous)
        .count();

    Some(increases)
}

/// Returns the number of three-measurement sliding window sums that are
/// larger than the previous window's sum.
pub fn part_two(input: &str) -> Option<usize> {
    let increases = depths(input)
        .tuple_windows()
        .map(|(a, b, c)| a + b + c)
        .tuple_windows()
        .filter(|(previous, next)| next > previous)
        .count();

    Some(increases)
}

fn main() {
    let input = &aoc2021::read_file("inputs", 1);
    aoc2021::solve!(1, part_one, input);
    aoc2021::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_one() {
        let input = aoc2021::read_file("examples", 1);
        assert_eq!(part_one(&input), Some(7));

        assert_eq!(part_one("100"), Some(0));
    }

    #[test]
    fn test_part_two() {
        let input = aoc2021::read_file("examples", 1);
        assert_eq!(part_two(&input), Some(5));

        assert_eq!(part_two("1\n2\n3"), Some(0));
    }
}
