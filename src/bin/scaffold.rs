/*
 * This file contains template code.
 * There is no need to edit this file unless you want to change template functionality.
 */
use std::{
    fs::{File, OpenOptions},
    io::Write,
    process,
};

const MODULE_TEMPLATE: &str = r#"#![doc = include_str!("../puzzles/DAY_PADDED.md")]

pub fn part_one(input: &str) -> Option<u32> {
    None
}

pub fn part_two(input: &str) -> Option<u32> {
    None
}

fn main() {
    let input = &aoc2021::read_file("inputs", DAY);
    aoc2021::solve!(1, part_one, input);
    aoc2021::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_one() {
        let input = aoc2021::read_file("examples", DAY);
        assert_eq!(part_one(&input), None);
    }

    #[test]
    fn test_part_two() {
        let input = aoc2021::read_file("examples", DAY);
        assert_eq!(part_two(&input), None);
    }
}
"#;

fn parse_args() -> Result<u8, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    args.free_from_str()
}

fn safe_create_file(path: &str) -> Result<File, std::io::Error> {
    OpenOptions::new().write(true).create_new(true).open(path)
}

fn create_file(path: &str) -> Result<File, std::io::Error> {
    OpenOptions::new().write(true).create(true).open(path)
}

fn main() {
    let day = match parse_args() {
        Ok(day) => day,
        Err(_) => {
            eprintln!("Need to specify a day (as integer). example: `cargo scaffold 7`");
            process::exit(1);
        }
    };

    let day_padded = format!("{day:02}");

    let input_path = format!("src/inputs/{day_padded}.txt");
    let example_path = format!("src/examples/{day_padded}.txt");
    let puzzle_path = format!("src/puzzles/{day_padded}.md");
    let module_path = format!("src/bin/{day_padded}.rs");

    let mut file = match safe_create_file(&module_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Failed to create module file: {e}");
            process::exit(1);
        }
    };

    let module = MODULE_TEMPLATE
        .replace("DAY_PADDED", &day_padded)
        .replace("DAY", &day.to_string());

    match file.write_all(module.as_bytes()) {
        Ok(()) => {
            println!("Created module file \"{module_path}\"");
        }
        Err(e) => {
            eprintln!("Failed to write module contents: {e}");
            process::exit(1);
        }
    }

    match create_file(&input_path) {
        Ok(_) => {
            println!("Created empty input file \"{input_path}\"");
        }
        Err(e) => {
            eprintln!("Failed to create input file: {e}");
            process::exit(1);
        }
    }

    match create_file(&example_path) {
        Ok(_) => {
            println!("Created empty example file \"{example_path}\"");
        }
        Err(e) => {
            eprintln!("Failed to create example file: {e}");
            process::exit(1);
        }
    }

    match create_file(&puzzle_path) {
        Ok(_) => {
            println!("Created empty puzzle file \"{puzzle_path}\"");
        }
        Err(e) => {
            eprintln!("Failed to create puzzle file: {e}");
            process::exit(1);
        }
    }

    println!("---");
    println!("🎄 Type `cargo solve {day}` to run your solution.");
}
