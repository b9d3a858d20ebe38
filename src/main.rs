//! Circle Pair CLI
//!
//! Classify the geometric relationship between pairs of circles.
//!
//! Usage:
//!     circle-pair classify 2 2 5 1 2 1
//!     circle-pair batch pairs.jsonl
//!     circle-pair demo

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use circle_pair::adapters::input::{self, InputResult};
use circle_pair::{CirclePair, PairKind};

/// Circle Pair - classify the relationship between two circles
#[derive(Parser)]
#[command(name = "circle-pair")]
#[command(version)]
#[command(about = "Classify the geometric relationship between two circles", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a single pair given as six numbers
    Classify {
        /// Six values in order: Ax Ay Ar Bx By Br
        #[arg(allow_negative_numbers = true, num_args = 0..)]
        values: Vec<String>,

        /// Also print distance, areas and overlap
        #[arg(short, long)]
        verbose: bool,

        /// Emit a JSON report instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Classify a stream of JSON tuples, one [Ax,Ay,Ar,Bx,By,Br] per line
    Batch {
        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,

        /// Emit a JSON report array instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Classify a built-in list with one pair of each kind
    Demo,
}

/// One classified pair, ready for JSON output
#[derive(Serialize)]
struct Report {
    pair: String,
    distance: f64,
    area_a: f64,
    area_b: f64,
    overlap: f64,
    kind: PairKind,
}

impl Report {
    fn new(pair: &CirclePair) -> Self {
        Self {
            pair: pair.to_string(),
            distance: pair.distance(),
            area_a: pair.area_a(),
            area_b: pair.area_b(),
            overlap: pair.overlap_area(),
            kind: pair.classify(),
        }
    }
}

fn cmd_classify(values: &[String], verbose: bool, json: bool) -> ExitCode {
    let pair = match input::pair_from_tokens(values) {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if json {
        let report = Report::new(&pair);
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("report serializes")
        );
    } else if verbose {
        println!("{}", pair);
        println!("  area A:  {}", pair.area_a());
        println!("  area B:  {}", pair.area_b());
        println!("  overlap: {}", pair.overlap_area());
        println!("  kind:    {}", pair.classify());
    } else {
        println!("{}", pair.classify());
    }

    ExitCode::SUCCESS
}

fn read_input(file: Option<&Path>) -> InputResult<Vec<CirclePair>> {
    match file {
        Some(path) => input::read_pairs(BufReader::new(File::open(path)?)),
        None => input::read_pairs(io::stdin().lock()),
    }
}

fn cmd_batch(file: Option<&Path>, json: bool) -> ExitCode {
    let pairs = match read_input(file) {
        Ok(pairs) => pairs,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if json {
        let reports: Vec<Report> = pairs.iter().map(Report::new).collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&reports).expect("reports serialize")
        );
    } else {
        for pair in &pairs {
            println!("{}", pair.classify());
        }
    }

    ExitCode::SUCCESS
}

fn cmd_demo() -> ExitCode {
    // One pair per category, plus the tangential single-point touch.
    let demo_pairs: [[f64; 6]; 6] = [
        [0.0, 1.0, 1.0, 0.0, 1.0, 1.0],
        [1.0, 1.0, 1.0, 1.0, 1.0, 3.0],
        [2.0, 2.0, 5.0, 1.0, 2.0, 1.0],
        [2.0, 2.0, 3.0, 4.0, 4.0, 3.0],
        [2.0, 3.0, 4.0, -6.0, -6.0, 2.0],
        [0.0, 0.0, 1.0, 2.0, 0.0, 1.0],
    ];

    for values in &demo_pairs {
        let pair = CirclePair::from_values(values).expect("demo values are valid");
        println!("{:<17}{}", pair.classify(), pair);
    }

    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Classify {
            values,
            verbose,
            json,
        } => cmd_classify(&values, verbose, json),
        Commands::Batch { file, json } => cmd_batch(file.as_deref(), json),
        Commands::Demo => cmd_demo(),
    }
}
