//! gatesim: command-line front end for the cycle-based gate-level simulator.
//!
//! Provides `gatesim run` to simulate a JSON netlist against a vector file and
//! `gatesim check` to report structural problems without simulating.

#![warn(missing_docs)]

mod check;
mod pipeline;
mod run;

use std::io::IsTerminal;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// gatesim: a 3-valued, cycle-based gate-level logic simulator.
#[derive(Parser, Debug)]
#[command(name = "gatesim", version, about = "Gate-level logic simulator")]
pub struct Cli {
    /// Suppress all output except errors and simulation results.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print netlist and run statistics.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Control colored diagnostics.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a `gatesim.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Simulate a netlist against a file of input vectors.
    Run(RunArgs),
    /// Check a netlist for structural problems.
    Check(CheckArgs),
}

/// Arguments for the `gatesim run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// JSON netlist file.
    pub netlist: String,

    /// Vector file, one vector per line.
    pub vectors: String,

    /// Override the combinational pass budget per vector.
    #[arg(long)]
    pub max_passes: Option<u32>,

    /// Fail on non-convergence and on malformed registers.
    #[arg(long)]
    pub strict: bool,

    /// Write output lines to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for the `gatesim check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// JSON netlist file.
    pub netlist: String,

    /// Output format for the summary.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Exit with status 1 if any warning is reported.
    #[arg(long)]
    pub deny_warnings: bool,
}

/// When diagnostics on stderr get ANSI colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Only when stderr is a terminal.
    Auto,
    /// Always.
    Always,
    /// Never.
    Never,
}

impl ColorChoice {
    fn enabled(self) -> bool {
        match self {
            ColorChoice::Auto => std::io::stderr().is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

/// Summary output format for `gatesim check`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable lines.
    Text,
    /// A JSON object.
    Json,
}

/// The global flags every subcommand sees, with `--color` already resolved.
pub struct GlobalArgs {
    /// Only errors and simulation results are printed.
    pub quiet: bool,
    /// Netlist and run statistics are printed to stderr.
    pub verbose: bool,
    /// Diagnostics are colored.
    pub color: bool,
    /// Explicit `gatesim.toml` path.
    pub config: Option<String>,
}

fn main() {
    let Cli {
        quiet,
        verbose,
        color,
        config,
        command,
    } = Cli::parse();
    let global = GlobalArgs {
        quiet,
        verbose,
        color: color.enabled(),
        config,
    };

    let code = match &command {
        Command::Run(args) => run::run(args, &global),
        Command::Check(args) => check::run(args, &global),
    }
    .unwrap_or_else(|e| {
        eprintln!("error: {e}");
        1
    });
    process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_run_basic() {
        let cli = Cli::parse_from(["gatesim", "run", "design.json", "stim.vec"]);
        match cli.command {
            Command::Run(ref args) => {
                assert_eq!(args.netlist, "design.json");
                assert_eq!(args.vectors, "stim.vec");
                assert!(args.max_passes.is_none());
                assert!(!args.strict);
                assert!(args.output.is_none());
            }
            _ => panic!("expected Run command"),
        }
    }

    #[test]
    fn parse_run_with_options() {
        let cli = Cli::parse_from([
            "gatesim",
            "run",
            "design.json",
            "stim.vec",
            "--max-passes",
            "250",
            "--strict",
            "-o",
            "out.txt",
        ]);
        match cli.command {
            Command::Run(ref args) => {
                assert_eq!(args.max_passes, Some(250));
                assert!(args.strict);
                assert_eq!(args.output.as_deref(), Some("out.txt"));
            }
            _ => panic!("expected Run command"),
        }
    }

    #[test]
    fn parse_run_requires_both_files() {
        assert!(Cli::try_parse_from(["gatesim", "run", "design.json"]).is_err());
    }

    #[test]
    fn parse_check_default() {
        let cli = Cli::parse_from(["gatesim", "check", "design.json"]);
        match cli.command {
            Command::Check(ref args) => {
                assert_eq!(args.netlist, "design.json");
                assert_eq!(args.format, ReportFormat::Text);
                assert!(!args.deny_warnings);
            }
            _ => panic!("expected Check command"),
        }
    }

    #[test]
    fn parse_check_json() {
        let cli = Cli::parse_from([
            "gatesim",
            "check",
            "design.json",
            "--format",
            "json",
            "--deny-warnings",
        ]);
        match cli.command {
            Command::Check(ref args) => {
                assert_eq!(args.format, ReportFormat::Json);
                assert!(args.deny_warnings);
            }
            _ => panic!("expected Check command"),
        }
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::parse_from(["gatesim", "--quiet", "--color", "never", "check", "n.json"]);
        assert!(cli.quiet);
        assert!(!cli.verbose);
        assert!(!cli.color.enabled());
        assert!(ColorChoice::Always.enabled());
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["gatesim", "check", "n.json", "--verbose"]);
        assert!(cli.verbose);
        assert_eq!(cli.color, ColorChoice::Auto);
    }

    #[test]
    fn parse_config_path() {
        let cli = Cli::parse_from(["gatesim", "--config", "/etc/gatesim.toml", "check", "n.json"]);
        assert_eq!(cli.config.as_deref(), Some("/etc/gatesim.toml"));
    }
}
