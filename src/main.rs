use std::fs;

use clap::Parser;
use pocketcalc::run_script;

/// pocketcalc replays key presses on a four-function pocket calculator and
/// prints what its display shows.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells pocketcalc to read the keys from a file instead of the command
    /// line.
    #[arg(short, long)]
    file: bool,

    /// Prints every calculation next to its result.
    #[arg(short, long)]
    verbose: bool,

    /// Keys separated by blanks, one calculation per line, e.g. "7 . 1 * 7 =".
    contents: String,
}

fn main() {
    pretty_env_logger::init();

    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    match run_script(&script) {
        Ok(calculations) => {
            for calculation in calculations {
                if args.verbose {
                    println!("[{}] [{}]", calculation.keys.join(" "), calculation.display);
                } else {
                    println!("{}", calculation.display);
                }
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
