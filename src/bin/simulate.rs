//! Balance simulator CLI.
//!
//! Run Monte Carlo battle simulations to analyze game balance.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                          # 1000 runs, normal
//!   cargo run --bin simulate -- -n 100 -d hard -a 0.9
//!   cargo run --bin simulate -- --seed 42             # Reproducible run

use quizboss::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════╗");
    println!("║              QUIZBOSS BALANCE SIMULATOR                   ║");
    println!("╚═══════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:          {}", config.num_runs);
    println!("  Difficulty:    {}", config.difficulty);
    println!("  Bot accuracy:  {:.0}%", config.accuracy * 100.0);
    println!("  Questions:     {}", config.question_count);
    if let Some(seed) = config.seed {
        println!("  Seed:          {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, report.to_json()) {
            Ok(()) => println!("Report saved to {}", filename),
            Err(e) => eprintln!("Failed to save report: {}", e),
        }
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if let Some(v) = args.get(i + 1).and_then(|v| v.parse().ok()) {
                    config.num_runs = v;
                }
                i += 2;
            }
            "--seed" => {
                config.seed = args.get(i + 1).and_then(|v| v.parse().ok());
                i += 2;
            }
            "-a" | "--accuracy" => {
                if let Some(v) = args.get(i + 1).and_then(|v| v.parse::<f64>().ok()) {
                    config.accuracy = v.clamp(0.0, 1.0);
                }
                i += 2;
            }
            "-d" | "--difficulty" => {
                if let Some(v) = args.get(i + 1) {
                    config.difficulty = v.clone();
                }
                i += 2;
            }
            "-q" | "--questions" => {
                if let Some(v) = args.get(i + 1).and_then(|v| v.parse().ok()) {
                    config.question_count = v;
                }
                i += 2;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
                i += 1;
            }
            "--json" => {
                i += 1;
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!(
                    "Options: -n/--runs N, --seed S, -a/--accuracy F, -d/--difficulty KEY, -q/--questions N, -v, --json"
                );
                std::process::exit(2);
            }
        }
    }
    config
}
