//! Parsing command-line arguments.

use clap::{value_parser, Arg, ArgAction, Command};
use rcasim_lib::Config;
use std::{error::Error, fs};

/// Parses the command-line arguments and runs the simulation.
pub(crate) fn run() -> Result<(), Box<dyn Error>> {
    let matches = Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .long_about(
            "Simulates a one-dimensional cellular automaton under an \
             exact-match rule table, and prints the sum of the coordinates \
             of all active cells at the target generation.\n\
             \n\
             The input file contains an `initial state:` line followed by \
             one rule per line, e.g. `..#.# => #`. Once the per-generation \
             growth of the sum stabilizes, the remaining generations are \
             projected analytically, so astronomically large targets finish \
             instantly.",
        )
        .arg(
            Arg::new("FILE")
                .help("Input file with the initial state and the rules")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("generations")
                .help("Target generation count")
                .short('n')
                .long("generations")
                .value_parser(value_parser!(u64))
                .default_value("50000000000"),
        )
        .arg(
            Arg::new("confidence")
                .help("Consecutive equal deltas required before extrapolating")
                .short('c')
                .long("confidence")
                .value_parser(value_parser!(usize))
                .default_value("1"),
        )
        .arg(
            Arg::new("brute-force")
                .help("Simulate every generation instead of extrapolating")
                .long_help(
                    "Simulate every generation instead of extrapolating.\n\
                     Only sensible for small generation counts.",
                )
                .long("brute-force")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let file = matches.get_one::<String>("FILE").unwrap();
    let generations = *matches.get_one::<u64>("generations").unwrap();
    let confidence = *matches.get_one::<usize>("confidence").unwrap();

    let input = fs::read_to_string(file)?;
    let config = Config::from_input(&input)?.set_confidence(confidence);

    let metric = if matches.get_flag("brute-force") {
        let mut world = config.world()?;
        for _ in 0..generations {
            world.step();
        }
        world.metric()
    } else {
        config.extrapolator()?.project(generations)
    };

    println!(
        "Sum of coordinates of all active cells after {generations} generations: {metric}"
    );
    Ok(())
}
