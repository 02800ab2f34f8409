//! Tape-machine calculator CLI.
//!
//! This binary is the single entry point for both evaluation modes. It performs:
//! 1. **Batch run:** Evaluate every expression given on the command line and print a results block.
//! 2. **Interactive run:** Read expressions from stdin until `quit` or EOF (default when no expressions are given).
//! 3. **Configuration:** Optional JSON config file, overridden by `--8bit`, `--modules` and `--step-limit`.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::{fs, process};

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use bfcalc_core::calc::Evaluation;
use bfcalc_core::config::{Config, Mode};
use bfcalc_core::{Calculator, Operator};

#[derive(Parser, Debug)]
#[command(
    name = "bfcalc",
    author,
    version,
    about = "Calculator backed by an 8-bit tape machine and base-256 cell arithmetic",
    long_about = "Evaluate <number><op><number> expressions with + - * / ^.\n\nBy default operands of any size are handled by the cell arithmetic engine. With --8bit the operator's tape program runs on the interpreter and results are modulo 256.",
    after_help = "Examples:\n  bfcalc \"999+999\" \"1000*500\"\n  bfcalc --8bit \"200-100\" \"255+1\"\n  bfcalc -i --modules ./bf"
)]
struct Cli {
    /// Arithmetic expressions to calculate.
    expressions: Vec<String>,

    /// Run in interactive mode (also the default when no expressions are given).
    #[arg(short, long)]
    interactive: bool,

    /// Use 8-bit mode: run the tape program, operands and results modulo 256.
    #[arg(long = "8bit")]
    eight_bit: bool,

    /// Directory holding addition.bf, subtraction.bf, multiplication.bf, division.bf, power.bf.
    #[arg(long, value_name = "DIR")]
    modules: Option<PathBuf>,

    /// JSON configuration file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Abort a tape run after this many instructions.
    #[arg(long, value_name = "N")]
    step_limit: Option<u64>,

    /// Print tape machine statistics after each 8-bit evaluation.
    #[arg(long)]
    stats: bool,

    /// Raise log verbosity (-v debug, -vv per-instruction trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = build_config(&cli);
    let calculator = Calculator::new(&config).unwrap_or_else(|e| {
        eprintln!("Initialization error: {e}");
        process::exit(1);
    });
    let mode = config.general.mode;

    if !cli.expressions.is_empty() {
        println!("\nResults:");
        println!("{}", "-".repeat(40));
        for expr in &cli.expressions {
            match calculator.calculate_detailed(expr, mode) {
                Ok(eval) => {
                    println!("{expr} = {}", eval.value);
                    print_stats(cli.stats, &eval);
                }
                Err(e) => println!("{expr}: ERROR - {e}"),
            }
        }
        println!("{}", "-".repeat(40));
    }

    if cli.interactive || cli.expressions.is_empty() {
        run_interactive(&calculator, mode, cli.stats);
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Loads the optional config file and applies command-line overrides.
///
/// Exits the process with status 1 if the file cannot be read or is invalid.
fn build_config(cli: &Cli) -> Config {
    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Error reading config {}: {e}", path.display());
                process::exit(1);
            });
            Config::from_json(&text).unwrap_or_else(|e| {
                eprintln!("Initialization error: {e}");
                process::exit(1);
            })
        }
        None => Config::default(),
    };

    if cli.eight_bit {
        config.general.mode = Mode::EightBit;
    }
    if let Some(dir) = &cli.modules {
        config.general.modules_dir = Some(dir.clone());
    }
    if cli.step_limit.is_some() {
        config.machine.step_limit = cli.step_limit;
    }
    if cli.verbose >= 2 {
        config.machine.trace = true;
    }
    config
}

fn print_stats(enabled: bool, eval: &Evaluation) {
    if let (true, Some(stats)) = (enabled, &eval.stats) {
        stats.print();
    }
}

/// Prompt loop: one expression per line until `quit`, `exit`, `q` or EOF.
fn run_interactive(calculator: &Calculator, mode: Mode, stats: bool) {
    let symbols: Vec<String> = Operator::ALL.iter().map(|op| op.symbol().to_string()).collect();
    println!("Mode: {}", mode.describe());
    println!("Supported operations: {}", symbols.join(", "));
    println!("Enter 'help' for help, 'quit' to exit");

    let mut lines = io::stdin().lock().lines();
    loop {
        print!("\n> ");
        let _ = io::stdout().flush();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("Error: {e}");
                break;
            }
            None => {
                println!("\n\nExiting...");
                break;
            }
        };

        let input = line.trim();
        match input.to_lowercase().as_str() {
            "quit" | "exit" | "q" => {
                println!("Exiting...");
                break;
            }
            "help" => {
                print_help();
                continue;
            }
            "" => continue,
            _ => {}
        }

        match calculator.calculate_detailed(input, mode) {
            Ok(eval) => {
                println!("= {}", eval.value);
                print_stats(stats, &eval);
            }
            Err(e) => println!("Error: {e}"),
        }
    }
}

fn print_help() {
    println!("\nHelp:");
    println!("{}", "-".repeat(30));
    println!("Enter expressions like:");
    println!("  5+3      - Addition");
    println!("  10-4     - Subtraction");
    println!("  6*7      - Multiplication");
    println!("  15/3     - Division");
    println!("  2^10     - Power");
    println!("{}", "-".repeat(30));
    println!("Big number examples:");
    println!("  999+999       = 1998");
    println!("  1000*500      = 500000");
    println!("  999^2         = 998001");
    println!("  123456789*10  = 1234567890");
    println!("{}", "-".repeat(30));
}
