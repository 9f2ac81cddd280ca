#![doc = include_str!("../puzzles/04.md")]

use std::fmt;

use aoc2021::debugln;
use aoc2021::helpers::parse;

use grid::Grid;

/// One number on a bingo board and whether it has been drawn yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    value: u32,
    marked: bool,
}

/// A bingo board. Wins once a full row or column is marked.
#[derive(Debug, Clone)]
struct Board {
    cells: Grid<Cell>,
    won: bool,
}

impl Board {
    pub fn new(rows: Vec<Vec<u32>>) -> Self {
        let cols = rows.first().map_or(0, Vec::len);
        let cells = rows
            .into_iter()
            .flatten()
            .map(|value| Cell {
                value,
                marked: false,
            })
            .collect();
        Self {
            cells: Grid::from_vec(cells, cols),
            won: false,
        }
    }

    /// Marks `value` if it appears on the board. Returns true if this mark
    /// completed a row or column. Boards that have already won ignore all
    /// further draws.
    pub fn mark(&mut self, value: u32) -> bool {
        if self.won {
            return false;
        }
        let Some((row, col)) = self.position_of(value) else {
            return false;
        };

        if let Some(cell) = self.cells.get_mut(row, col) {
            cell.marked = true;
        }
        self.won = self.line_marked((row, col));
        self.won
    }

    fn position_of(&self, value: u32) -> Option<(usize, usize)> {
        let index = self.cells.iter().position(|cell| cell.value == value)?;
        Some((index / self.cells.cols(), index % self.cells.cols()))
    }

    fn line_marked(&self, (row, col): (usize, usize)) -> bool {
        self.cells.iter_row(row).all(|cell| cell.marked)
            || self.cells.iter_col(col).all(|cell| cell.marked)
    }

    pub fn unmarked_sum(&self) -> u32 {
        self.cells
            .iter()
            .filter(|cell| !cell.marked)
            .map(|cell| cell.value)
            .sum()
    }

    /// The board's final score: its unmarked sum times the winning draw.
    pub fn score(&self, draw: u32) -> u32 {
        self.unmarked_sum() * draw
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.cells.rows() {
            for cell in self.cells.iter_row(row) {
                if cell.marked {
                    write!(f, "[{:2}]", cell.value)?;
                } else {
                    write!(f, " {:2} ", cell.value)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The bingo subsystem: the order numbers will be drawn in, and every board
/// in play.
#[derive(Debug, Clone)]
struct Game {
    draws: Vec<u32>,
    boards: Vec<Board>,
}

impl Game {
    /// Plays every draw in order, collecting each board's score at the
    /// moment it wins.
    pub fn winning_scores(&mut self) -> Vec<u32> {
        let mut scores = Vec::new();
        for &draw in &self.draws {
            for board in &mut self.boards {
                if board.mark(draw) {
                    debugln!("board won on {draw}:\n{board}");
                    scores.push(board.score(draw));
                }
            }
        }
        scores
    }
}

fn parse_input(input: &str) -> Game {
    parse::from_str(input, Game::parser()).expect("input should be valid")
}

pub fn part_one(input: &str) -> Option<u32> {
    let mut game = parse_input(input);
    game.winning_scores().first().copied()
}

pub fn part_two(input: &str) -> Option<u32> {
    let mut game = parse_input(input);
    game.winning_scores().last().copied()
}

fn main() {
    let input = &aoc2021::read_file("inputs", 4);
    aoc2021::solve!(1, part_one, input);
    aoc2021::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> Board {
        Board::new(vec![vec![1, 2], vec![3, 4]])
    }

    #[test]
    fn test_board_wins_on_completed_row() {
        let mut board = two_by_two();

        assert!(!board.mark(1));
        assert!(!board.mark(4));
        assert!(board.mark(2));
        assert_eq!(board.unmarked_sum(), 3);
        assert_eq!(board.score(2), 6);
    }

    #[test]
    fn test_board_wins_on_completed_column() {
        let mut board = two_by_two();

        assert!(!board.mark(1));
        assert!(board.mark(3));
    }

    #[test]
    fn test_board_ignores_unknown_draws() {
        let mut board = two_by_two();

        assert!(!board.mark(99));
        assert_eq!(board.unmarked_sum(), 10);
    }

    #[test]
    fn test_board_only_wins_once() {
        let mut board = two_by_two();

        board.mark(1);
        assert!(board.mark(2));
        assert!(!board.mark(3));
    }

    #[test]
    fn test_parse() {
        let input = aoc2021::read_file("examples", 4);
        let game = parse_input(&input);

        assert_eq!(game.draws.len(), 27);
        assert_eq!(game.draws[..5], [7, 4, 9, 5, 11]);
        assert_eq!(game.boards.len(), 3);
        assert_eq!(game.boards[0].cells.get(0, 0).unwrap().value, 22);
        assert_eq!(game.boards[2].cells.get(4, 4).unwrap().value, 7);
    }

    #[test]
    fn test_winning_scores_come_in_win_order() {
        let input = aoc2021::read_file("examples", 4);
        let mut game = parse_input(&input);

        let scores = game.winning_scores();
        assert_eq!(scores.len(), 3);
        assert_eq!(scores.first(), Some(&4512));
        assert_eq!(scores.last(), Some(&1924));
    }

    #[test]
    fn test_part_one() {
        let input = aoc2021::read_file("examples", 4);
        assert_eq!(part_one(&input), Some(4512));
    }

    #[test]
    fn test_part_two() {
        let input = aoc2021::read_file("examples", 4);
        assert_eq!(part_two(&input), Some(1924));
    }
}

mod parsing {
    use super::*;

    use aoc2021::helpers::parse::{self, line};

    mod c {
        pub use combine::{
            parser::char::{self, string},
            *,
        };
    }

    use c::{ParseError, Parser, Stream};

    impl Game {
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            // 7,4,9,5,11,17,23,2,0,...
            let draws = line(c::sep_by1(parse::decimal_integer::<u32, _>(), c::token(',')));

            let boards = c::sep_by1(Board::parser(), c::char::newline());

            (draws, c::char::newline(), boards).map(|(draws, _, boards)| Game { draws, boards })
        }
    }

    impl Board {
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            // 22 13 17 11  0
            let number =
                (c::skip_many(c::token(' ')), parse::decimal_integer::<u32, _>()).map(|(_, n)| n);
            let row = line(c::count_min_max::<Vec<_>, _, _>(5, 5, number));

            c::count_min_max::<Vec<_>, _, _>(5, 5, row).map(Board::new)
        }
    }
}
