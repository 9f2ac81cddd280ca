/*
 * Use this file if you want to extract helpers from your solutions.
 * Example import from this file: `use aoc2021::helpers::example_fn;`.
 */

pub mod parse;
