// Host tooling crate: unwrap/expect/panic are acceptable outside embedded code.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
// Host-only table generation: indices and sizes come from fixed 5x7 glyphs.
#![allow(
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap
)]
#![allow(missing_docs)]

mod check;
mod doc;
mod fontgen;
mod test;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "ODROID-GO display development tasks", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the display stack builds for host and no_std targets
    Check,
    /// Run all tests (unit, integration, and doc)
    Test {
        /// Run only unit tests
        #[arg(long)]
        unit: bool,
        /// Run only integration tests
        #[arg(long)]
        integration: bool,
    },
    /// Build and optionally open documentation
    Doc {
        /// Open documentation in browser
        #[arg(long)]
        open: bool,
        /// Include private items
        #[arg(long)]
        private: bool,
    },
    /// Regenerate the builtin font tables from the classic glyphs
    Fontgen {
        /// Fail if a checked-in table differs instead of rewriting it
        #[arg(long)]
        check: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check => check::run(),
        Commands::Test { unit, integration } => test::run(unit, integration),
        Commands::Doc { open, private } => doc::run(open, private),
        Commands::Fontgen { check } => fontgen::run(check),
    }
}
