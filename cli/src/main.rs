mod args;

use std::process;

fn main() {
    if let Err(e) = args::run() {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
