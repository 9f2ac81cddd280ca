#![doc = include_str!("../puzzles/03.md")]

use aoc2021::debugln;

use thiserror::Error;

/// Which bit frequency a selection favors. `Descending` keeps the most
/// common bit at each position, `Ascending` the least common.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortingDirection {
    Ascending,
    Descending,
}

impl SortingDirection {
    /// The bit that survives a 50/50 split when filtering by bit criteria.
    pub fn tie_break_bit(self) -> u8 {
        match self {
            SortingDirection::Ascending => b'0',
            SortingDirection::Descending => b'1',
        }
    }
}

/// How often one bit value occurs at a single position across all records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BitCount {
    bit: u8,
    count: usize,
}

/// Counts the `0` and `1` bits at `position` across `records`, ordered by
/// `direction`: most common first for `Descending`, least common first for
/// `Ascending`. A tie orders `0` before `1` in both directions.
fn bit_stats(records: &[&str], position: usize, direction: SortingDirection) -> [BitCount; 2] {
    let ones = records
        .iter()
        .filter(|record| record.as_bytes()[position] == b'1')
        .count();
    let zeros = records.len() - ones;

    let zero = BitCount {
        bit: b'0',
        count: zeros,
    };
    let one = BitCount {
        bit: b'1',
        count: ones,
    };

    match direction {
        SortingDirection::Descending if ones > zeros => [one, zero],
        SortingDirection::Ascending if ones < zeros => [one, zero],
        _ => [zero, one],
    }
}

/// The submarine's diagnostic report: equal-width records of binary digits.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Diagnostics<'a> {
    records: Vec<&'a str>,
    width: usize,
}

impl<'a> Diagnostics<'a> {
    pub fn from_input(input: &'a str) -> Result<Self, MalformedInput> {
        let records: Vec<&str> = input.lines().collect();
        let Some(&first) = records.first() else {
            return Err(MalformedInput::Empty);
        };

        let width = first.len();
        if width == 0 {
            return Err(MalformedInput::ZeroWidth);
        }
        for (index, record) in records.iter().enumerate() {
            if record.len() != width {
                return Err(MalformedInput::WidthMismatch {
                    index,
                    expected: width,
                    actual: record.len(),
                });
            }
            if let Some(found) = record.chars().find(|&c| c != '0' && c != '1') {
                return Err(MalformedInput::NotBinary { index, found });
            }
        }

        Ok(Self { records, width })
    }

    /// Builds a new sequence by selecting one bit per position, favoring
    /// `direction`. Returns the empty string if there are no records.
    pub fn select_sequence(&self, direction: SortingDirection) -> String {
        if self.records.is_empty() {
            return String::new();
        }
        (0..self.width)
            .map(|position| {
                let stats = bit_stats(&self.records, position, direction);
                char::from(stats[0].bit)
            })
            .collect()
    }

    /// Repeatedly discards records whose bit at the current position loses
    /// the selection for `direction`, moving one position right each round,
    /// until a single record remains.
    ///
    /// A 50/50 split keeps the records with [`SortingDirection::tie_break_bit`]
    /// at the current position.
    pub fn filter_by_bit_criteria(
        &self,
        direction: SortingDirection,
    ) -> Result<&'a str, BitCriteriaError> {
        let mut remaining = self.records.clone();
        let mut position = 0;
        loop {
            if let [only] = remaining[..] {
                return Ok(only);
            }
            if position >= self.width {
                return Err(BitCriteriaError::OutOfBounds {
                    position,
                    remaining: remaining.len(),
                });
            }

            let stats = bit_stats(&remaining, position, direction);
            let keep = if stats[0].count == stats[1].count {
                direction.tie_break_bit()
            } else {
                stats[0].bit
            };

            remaining.retain(|record| record.as_bytes()[position] == keep);
            debugln!(
                "position {position}: kept {} records with {}",
                remaining.len(),
                char::from(keep)
            );
            if remaining.is_empty() {
                return Err(BitCriteriaError::ExhaustedInput { position });
            }
            position += 1;
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
enum MalformedInput {
    #[error("input contains no records")]
    Empty,
    #[error("records are zero bits wide")]
    ZeroWidth,
    #[error("record {index} is {actual} bits wide, expected {expected}")]
    WidthMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },
    #[error("record {index} contains non-binary character {found:?}")]
    NotBinary { index: usize, found: char },
}

#[derive(Debug, Error, PartialEq, Eq)]
enum BitCriteriaError {
    #[error("no records match the bit criteria at position {position}")]
    ExhaustedInput { position: usize },
    #[error("ran out of positions at {position} with {remaining} records remaining")]
    OutOfBounds { position: usize, remaining: usize },
}

fn binary_value(sequence: &str) -> u32 {
    u32::from_str_radix(sequence, 2).expect("sequence should be binary")
}

/// The gamma and epsilon rates: the most and least common bit per position,
/// read out as binary numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DiagnosticReport {
    gamma_rate: u32,
    epsilon_rate: u32,
}

impl DiagnosticReport {
    pub fn new(diagnostics: &Diagnostics) -> Self {
        Self {
            gamma_rate: binary_value(&diagnostics.select_sequence(SortingDirection::Descending)),
            epsilon_rate: binary_value(&diagnostics.select_sequence(SortingDirection::Ascending)),
        }
    }

    pub fn power_consumption(&self) -> u32 {
        self.gamma_rate * self.epsilon_rate
    }
}

/// The oxygen generator and CO2 scrubber ratings: the records singled out
/// by the bit criteria, read out as binary numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LifeSupportRating {
    oxygen_generator_rating: u32,
    co2_scrubber_rating: u32,
}

impl LifeSupportRating {
    pub fn new(diagnostics: &Diagnostics) -> Result<Self, BitCriteriaError> {
        Ok(Self {
            oxygen_generator_rating: binary_value(
                diagnostics.filter_by_bit_criteria(SortingDirection::Descending)?,
            ),
            co2_scrubber_rating: binary_value(
                diagnostics.filter_by_bit_criteria(SortingDirection::Ascending)?,
            ),
        })
    }

    pub fn rating(&self) -> u32 {
        self.oxygen_generator_rating * self.co2_scrubber_rating
    }
}

pub fn part_one(input: &str) -> Option<u32> {
    let diagnostics = Diagnostics::from_input(input).expect("input should be valid");
    let report = DiagnosticReport::new(&diagnostics);
    debugln!("{report:?}");
    Some(report.power_consumption())
}

pub fn part_two(input: &str) -> Option<u32> {
    let diagnostics = Diagnostics::from_input(input).expect("input should be valid");
    let rating =
        LifeSupportRating::new(&diagnostics).expect("bit criteria should single out a record");
    debugln!("{rating:?}");
    Some(rating.rating())
}

fn main() {
    let input = &aoc2021::read_file("inputs", 3);
    aoc2021::solve!(1, part_one, input);
    aoc2021::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_diagnostics(input: &str) -> Diagnostics {
        Diagnostics::from_input(input).unwrap()
    }

    #[track_caller]
    fn assert_filters_to(input: &str, direction: SortingDirection, expected: &str) {
        let diagnostics = example_diagnostics(input);
        assert_eq!(diagnostics.filter_by_bit_criteria(direction), Ok(expected));
    }

    #[test]
    fn test_bit_stats_orders_by_direction() {
        let records = ["10", "11", "00"];

        let zero = BitCount {
            bit: b'0',
            count: 1,
        };
        let one = BitCount {
            bit: b'1',
            count: 2,
        };
        assert_eq!(
            bit_stats(&records, 0, SortingDirection::Descending),
            [one, zero]
        );
        assert_eq!(
            bit_stats(&records, 0, SortingDirection::Ascending),
            [zero, one]
        );
    }

    #[test]
    fn test_bit_stats_tie_orders_zero_first() {
        let records = ["10", "01"];

        let expected = [
            BitCount {
                bit: b'0',
                count: 1,
            },
            BitCount {
                bit: b'1',
                count: 1,
            },
        ];
        assert_eq!(
            bit_stats(&records, 0, SortingDirection::Descending),
            expected
        );
        assert_eq!(bit_stats(&records, 0, SortingDirection::Ascending), expected);
    }

    #[test]
    fn test_select_sequence() {
        let input = aoc2021::read_file("examples", 3);
        let diagnostics = example_diagnostics(&input);

        assert_eq!(
            diagnostics.select_sequence(SortingDirection::Descending),
            "10110"
        );
        assert_eq!(
            diagnostics.select_sequence(SortingDirection::Ascending),
            "01001"
        );
    }

    #[test]
    fn test_select_sequence_no_records() {
        let diagnostics = Diagnostics {
            records: Vec::new(),
            width: 5,
        };

        assert_eq!(diagnostics.select_sequence(SortingDirection::Descending), "");
        assert_eq!(diagnostics.select_sequence(SortingDirection::Ascending), "");
    }

    #[test]
    fn test_select_sequence_ties_are_not_complementary() {
        let diagnostics = example_diagnostics("10\n01");

        assert_eq!(
            diagnostics.select_sequence(SortingDirection::Descending),
            "00"
        );
        assert_eq!(
            diagnostics.select_sequence(SortingDirection::Ascending),
            "00"
        );
    }

    #[test]
    fn test_filter_by_bit_criteria() {
        let input = aoc2021::read_file("examples", 3);

        assert_filters_to(&input, SortingDirection::Descending, "10111");
        assert_filters_to(&input, SortingDirection::Ascending, "01010");
    }

    #[test]
    fn test_filter_keeps_single_record() {
        assert_filters_to("10110", SortingDirection::Descending, "10110");
        assert_filters_to("10110", SortingDirection::Ascending, "10110");
    }

    #[test]
    fn test_filter_tie_break() {
        assert_filters_to("10\n01", SortingDirection::Descending, "10");
        assert_filters_to("10\n01", SortingDirection::Ascending, "01");
    }

    #[test]
    fn test_filter_exhausts_records() {
        let diagnostics = example_diagnostics("10\n11");

        assert_eq!(
            diagnostics.filter_by_bit_criteria(SortingDirection::Ascending),
            Err(BitCriteriaError::ExhaustedInput { position: 0 })
        );
    }

    #[test]
    fn test_filter_runs_out_of_positions() {
        let diagnostics = example_diagnostics("101\n101");

        assert_eq!(
            diagnostics.filter_by_bit_criteria(SortingDirection::Descending),
            Err(BitCriteriaError::OutOfBounds {
                position: 3,
                remaining: 2,
            })
        );
    }

    #[test]
    fn test_malformed_input() {
        assert_eq!(Diagnostics::from_input(""), Err(MalformedInput::Empty));
        assert_eq!(Diagnostics::from_input("\n"), Err(MalformedInput::ZeroWidth));
        assert_eq!(Diagnostics::from_input("\n\n"), Err(MalformedInput::ZeroWidth));
        assert_eq!(
            Diagnostics::from_input("101\n10"),
            Err(MalformedInput::WidthMismatch {
                index: 1,
                expected: 3,
                actual: 2,
            })
        );
        assert_eq!(
            Diagnostics::from_input("102"),
            Err(MalformedInput::NotBinary {
                index: 0,
                found: '2',
            })
        );
    }

    #[test]
    fn test_power_consumption() {
        let input = aoc2021::read_file("examples", 3);
        let report = DiagnosticReport::new(&example_diagnostics(&input));

        assert_eq!(report.gamma_rate, 22);
        assert_eq!(report.epsilon_rate, 9);
        assert_eq!(report.power_consumption(), 198);
    }

    #[test]
    fn test_life_support_rating() {
        let input = aoc2021::read_file("examples", 3);
        let rating = LifeSupportRating::new(&example_diagnostics(&input)).unwrap();

        assert_eq!(rating.oxygen_generator_rating, 23);
        assert_eq!(rating.co2_scrubber_rating, 10);
        assert_eq!(rating.rating(), 230);
    }

    #[test]
    fn test_part_one() {
        let input = aoc2021::read_file("examples", 3);
        assert_eq!(part_one(&input), Some(198));
    }

    #[test]
    fn test_part_two() {
        let input = aoc2021::read_file("examples", 3);
        assert_eq!(part_two(&input), Some(230));
    }
}
