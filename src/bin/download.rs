/*
 * This file contains template code.
 * There is no need to edit this file unless you want to change template functionality.
 */
use std::process::{Command, Stdio};

struct Args {
    day: u8,
    year: Option<u16>,
}

fn parse_args() -> Result<Args, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    Ok(Args {
        day: args.free_from_str()?,
        year: args.opt_value_from_str(["-y", "--year"])?,
    })
}

fn main() {
    // download wraps `aoc-cli`, which expects a session cookie in
    // ~/.adventofcode.session. see https://github.com/scarvalhojr/aoc-cli.
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Failed to process arguments: {e}");
            std::process::exit(1);
        }
    };

    let day_padded = format!("{:02}", args.day);
    let input_path = format!("src/inputs/{day_padded}.txt");
    let year = args.year.unwrap_or(2021);

    let cmd_args = vec![
        "--year".into(),
        year.to_string(),
        "--input-only".into(),
        "--overwrite".into(),
        "--input-file".into(),
        input_path.clone(),
        "download".into(),
        "--day".into(),
        args.day.to_string(),
    ];

    println!("Downloading input with >aoc {}", cmd_args.join(" "));

    match Command::new("aoc")
        .args(cmd_args)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .output()
    {
        Ok(cmd_output) => {
            if !cmd_output.status.success() {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("failed to spawn aoc-cli: {e}");
            std::process::exit(1);
        }
    }

    println!("---");
    println!("🎄 Successfully wrote input to \"{input_path}\".");
}
