// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sortlab command-line interface.
//!
//! With no subcommand, sortlab runs the interactive session. `run` takes the
//! same answers as flags, `compare` sorts one sequence with every method, and
//! `methods` lists the method names.

pub mod display;

use clap::{Args, Parser, Subcommand};
use sortlab::SortMethod;

#[derive(Parser)]
#[command(
    name = "sortlab",
    about = "Step-counting classic sorting algorithms",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sort one shuffled sequence, prompting for anything not given as a flag
    Run(RunArgs),

    /// Sort copies of one shuffled sequence with every method
    Compare {
        /// Number of elements (values 1..=SIZE)
        #[arg(short, long)]
        size: usize,

        /// Shuffle seed (defaults to the system clock)
        #[arg(long)]
        seed: Option<u64>,

        /// Print the reports as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the available sorting methods
    Methods,
}

#[derive(Args, Default)]
pub struct RunArgs {
    /// Number of elements (values 1..=SIZE)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Sorting method: bubble, selection, insertion, merge or quick (any case)
    #[arg(short, long, value_parser = parse_method)]
    pub method: Option<SortMethod>,

    /// Shuffle seed (defaults to the system clock)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the sort report as JSON after the session
    #[arg(long)]
    pub json: bool,
}

fn parse_method(s: &str) -> Result<SortMethod, String> {
    s.parse::<SortMethod>().map_err(|e| e.to_string())
}
