use std::{fs, path::PathBuf, process};

use clap::Parser;
use whilst::interpreter::{machine::Machine, parser};

/// whilst is an interpreter for the WHILE language, a minimal imperative
/// language over natural-number registers.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the program to run.
    program: PathBuf,

    /// Initial values for registers x1, x2, ... in argument order.
    inputs: Vec<u64>,

    /// Print the parsed program before running it.
    #[arg(short, long)]
    show: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = ctrlc::set_handler(|| {
        eprintln!("User interrupted execution");
        process::exit(1);
    }) {
        eprintln!("Failed to install the interrupt handler: {e}");
    }

    let source = fs::read_to_string(&args.program).unwrap_or_else(|_| {
        eprintln!("Failed to read the program file '{}'. Perhaps this file does not exist?",
                  args.program.display());
        process::exit(1);
    });

    let program = parser::parse(&source).unwrap_or_else(|e| {
        eprintln!("{e}");
        process::exit(1);
    });

    if args.show {
        print!("{program}");
    }

    let mut machine = Machine::new();
    for (index, value) in (1..).zip(&args.inputs) {
        machine.write(index, *value);
    }

    println!("x0 = {}", machine.run(&program));
}
