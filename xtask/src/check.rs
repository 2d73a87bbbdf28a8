use anyhow::{Context, Result};
use colored::Colorize;
use std::process::Command;
use std::time::Instant;

/// A cargo invocation run by `xtask check`.
struct Step {
    label: &'static str,
    args: &'static [&'static str],
    /// A failing step aborts the run; advisory steps only warn.
    fatal: bool,
}

/// The Xtensa target needs the esp toolchain fork, so no_std compatibility
/// is checked on a stock bare-metal target instead.
const STEPS: &[Step] = &[
    Step {
        label: "display crate (host)",
        args: &["check", "-p", "display", "--all-targets"],
        fatal: true,
    },
    Step {
        label: "display crate (jpeg + tracing)",
        args: &["check", "-p", "display", "--features", "jpeg,tracing,std"],
        fatal: true,
    },
    Step {
        label: "display crate (no_std)",
        args: &["check", "-p", "display", "--target", "thumbv7em-none-eabihf", "--features", "defmt"],
        fatal: true,
    },
    Step {
        label: "platform crate (no_std)",
        args: &["check", "-p", "platform", "--target", "thumbv7em-none-eabihf", "--no-default-features"],
        fatal: true,
    },
    Step {
        label: "clippy lints",
        args: &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
        fatal: false,
    },
    Step {
        label: "code formatting",
        args: &["fmt", "--all", "--check"],
        fatal: false,
    },
];

pub fn run() -> Result<()> {
    println!();
    println!("{}", "🔍 Checking display stack...".cyan().bold());
    println!();

    let total_start = Instant::now();

    for step in STEPS {
        println!("{}", format!("  Checking {}...", step.label).cyan());
        let start = Instant::now();

        let output = Command::new("cargo")
            .args(step.args)
            .output()
            .with_context(|| format!("Failed to run cargo for {}", step.label))?;

        if output.status.success() {
            println!(
                "{}",
                format!("  ✓ {} passed in {:.2}s", step.label, start.elapsed().as_secs_f64()).green()
            );
        } else if step.fatal {
            eprintln!("{}", format!("  ✗ {} failed", step.label).red().bold());
            eprintln!();
            eprintln!("{}", String::from_utf8_lossy(&output.stderr));
            anyhow::bail!("{} failed", step.label);
        } else {
            eprintln!("{}", format!("  ⚠ {} reported issues", step.label).yellow().bold());
            eprintln!();
            eprintln!("{}", String::from_utf8_lossy(&output.stderr));
        }
        println!();
    }

    println!(
        "{}",
        format!("✓ All checks completed in {:.2}s", total_start.elapsed().as_secs_f64())
            .green()
            .bold()
    );
    println!();

    Ok(())
}
