//! `gatesim run`: simulate a netlist against a vector file.
//!
//! Output lines go to stdout (or `--output`), one per vector. Diagnostics and
//! status lines go to stderr, so the output stays machine-readable.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use gatesim_config::{GatesimConfig, MalformedRegisterPolicy, NonConvergencePolicy};
use gatesim_diagnostics::DiagnosticSink;
use gatesim_sim::{load_vectors, simulate, write_outputs};

use crate::pipeline::{load_netlist, load_run_config, render_diagnostics};
use crate::{GlobalArgs, RunArgs};

/// Runs the `gatesim run` command.
///
/// Returns exit code 0 when every vector was simulated, 1 when the run was
/// stopped by a simulation error.
pub fn run(args: &RunArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = apply_overrides(load_run_config(global)?, args);

    let netlist = load_netlist(&args.netlist)?;
    let vectors = load_vectors(Path::new(&args.vectors))
        .map_err(|e| format!("{}: {e}", args.vectors))?;

    if global.verbose {
        eprintln!(
            "   Loaded {}: {} nets, {} elements",
            args.netlist,
            netlist.net_count(),
            netlist.element_count()
        );
        eprintln!(
            "   {} primary inputs, {} primary outputs, {} vectors",
            netlist.primary_inputs().len(),
            netlist.primary_outputs().len(),
            vectors.len()
        );
    }

    let sink = DiagnosticSink::new();
    let result = match simulate(&netlist, &vectors, &config, &sink) {
        Ok(result) => result,
        Err(e) => {
            sink.emit(e.to_diagnostic());
            render_diagnostics(&sink, global);
            return Ok(1);
        }
    };

    match &args.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_outputs(&mut writer, &result.outputs)?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_outputs(&mut writer, &result.outputs)?;
        }
    }

    render_diagnostics(&sink, global);

    if !global.quiet {
        let stats = &result.stats;
        eprintln!(
            "   Simulated {} vectors in {} passes",
            stats.vectors, stats.total_passes
        );
        if global.verbose {
            eprintln!(
                "   Longest settle: {} passes; {} vectors did not settle",
                stats.max_passes_in_vector, stats.unconverged_vectors
            );
        }
        if let Some(path) = &args.output {
            eprintln!("   Output: {path}");
        }
    }

    Ok(0)
}

/// Applies `--max-passes` and `--strict` on top of the loaded configuration.
fn apply_overrides(mut config: GatesimConfig, args: &RunArgs) -> GatesimConfig {
    if let Some(max) = args.max_passes {
        config.simulation.max_passes = max;
    }
    if args.strict {
        config.simulation.on_nonconvergence = NonConvergencePolicy::Error;
        config.simulation.malformed_registers = MalformedRegisterPolicy::Reject;
    }
    config
}
