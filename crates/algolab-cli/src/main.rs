//! Algolab CLI - drivers for the sorting, routing, packing and scheduling engines.
//!
//! Each subcommand loads or prompts for its input, runs one engine and prints
//! the result as a table or as JSON.

mod commands;
mod input;
mod output;

use std::path::PathBuf;

use algolab_core::Config;
use clap::{Parser, Subcommand, ValueEnum};

use crate::input::{BoatItemArg, ConflictArg, ItemArg};

/// Classical algorithm drivers.
///
/// Sort order exports and movie lists, route traffic to the nearest hospital,
/// pack relief trucks and boats, and schedule exam slots.
#[derive(Parser)]
#[command(name = "algolab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, global = true, default_value = "table")]
    format: OutputFormat,

    /// Suppress progress and info messages
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

/// Output format options.
#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// Machine-readable JSON format
    Json,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Sort order rows by timestamp (stable merge sort)
    Orders {
        /// Path to the orders CSV
        path: PathBuf,

        /// Number of rows to show
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Rank movies by rating, year or popularity (quicksort)
    Movies {
        /// Path to the movies CSV
        path: PathBuf,

        /// Sort key (rating, year, popularity); prompts when omitted
        #[arg(long)]
        by: Option<String>,

        /// Number of movies to show
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Route an ambulance to the nearest hospital before and after a traffic jam
    Traffic {
        /// Write a DOT file per phase into this directory
        #[arg(long)]
        dot_dir: Option<PathBuf>,
    },

    /// Pack one truck (0/1 knapsack with critical bonus)
    Knapsack {
        /// Truck capacity in kg; prompts when omitted
        #[arg(long)]
        capacity: Option<usize>,

        /// Item as name:weight:utility[:critical]; prompts when omitted
        #[arg(long = "item")]
        items: Vec<ItemArg>,

        /// Utility added to critical items
        #[arg(long)]
        bonus: Option<u64>,
    },

    /// Load several trucks in turn from one pool of items
    Trucks {
        /// Capacity of each truck, in loading order
        #[arg(long = "capacity", required = true)]
        capacities: Vec<usize>,

        /// Item as name:weight:utility[:critical]; prompts when omitted
        #[arg(long = "item")]
        items: Vec<ItemArg>,

        /// Utility added to critical items
        #[arg(long)]
        bonus: Option<u64>,
    },

    /// Load a boat with divisible and indivisible goods (fractional knapsack)
    Boat {
        /// Boat capacity in kg; prompts when omitted
        #[arg(long)]
        capacity: Option<f64>,

        /// Item as name:weight:value[:y|n] (divisible flag); prompts when omitted
        #[arg(long = "item")]
        items: Vec<BoatItemArg>,
    },

    /// Assign exam slots to courses (greedy coloring)
    Slots {
        /// Number of courses
        #[arg(long)]
        courses: Option<usize>,

        /// Conflicting course pair as u-v
        #[arg(long = "conflict")]
        conflicts: Vec<ConflictArg>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    } else if !cli.quiet {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(std::io::stderr)
            .init();
    }

    let config = Config::default();
    let result = match cli.command {
        Commands::Orders { path, limit } => {
            let config = match limit {
                Some(n) => config.with_top_n(n),
                None => config,
            };
            commands::orders::run(&path, &config, cli.format, cli.quiet)
        }
        Commands::Movies { path, by, limit } => {
            let config = match limit {
                Some(n) => config.with_top_n(n),
                None => config,
            };
            commands::movies::run(&path, by.as_deref(), &config, cli.format, cli.quiet)
        }
        Commands::Traffic { dot_dir } => {
            commands::traffic::run(dot_dir.as_deref(), &config, cli.format, cli.quiet)
        }
        Commands::Knapsack {
            capacity,
            items,
            bonus,
        } => {
            let config = match bonus {
                Some(b) => config.with_critical_bonus(b),
                None => config,
            };
            commands::knapsack::run(capacity, items, &config, cli.format, cli.quiet)
        }
        Commands::Trucks {
            capacities,
            items,
            bonus,
        } => {
            let config = match bonus {
                Some(b) => config.with_critical_bonus(b),
                None => config,
            };
            commands::trucks::run(&capacities, items, &config, cli.format, cli.quiet)
        }
        Commands::Boat { capacity, items } => {
            commands::boat::run(capacity, items, cli.format, cli.quiet)
        }
        Commands::Slots { courses, conflicts } => {
            commands::slots::run(courses, &conflicts, cli.format, cli.quiet)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
