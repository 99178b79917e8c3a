//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `renavam-fixtures`.
#[derive(Debug, Parser)]
#[command(name = "renavam-fixtures", version, about = "Generate fixture files for renavam record stores")]
pub struct Cli {
    /// Optional YAML file with default paths, sample size and seed.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write a file of deliberately malformed records.
    Invalid {
        /// Output file [default: registros_invalidos.txt].
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Sample existing renavams from a record file for search tests.
    Sample {
        /// Record file to read [default: registros_carros.txt].
        #[arg(long, short)]
        source: Option<PathBuf>,
        /// Output file [default: buscas.txt].
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Number of renavams to sample [default: 100].
        #[arg(long, short = 'n')]
        count: Option<usize>,
        /// Fixed RNG seed for reproducible samples.
        #[arg(long)]
        seed: Option<u64>,
    },
}
