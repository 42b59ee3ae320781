//! Shared plumbing for the subcommands: configuration lookup, input loading,
//! and diagnostic rendering.

use std::path::Path;

use gatesim_config::GatesimConfig;
use gatesim_diagnostics::{DiagnosticRenderer, DiagnosticSink, TerminalRenderer};
use gatesim_netlist::Netlist;

use crate::GlobalArgs;

/// Loads the configuration for this invocation.
///
/// `--config` names a file that must exist; without it, `gatesim.toml` in the
/// current directory is used if present and defaults apply otherwise.
pub fn load_run_config(global: &GlobalArgs) -> Result<GatesimConfig, Box<dyn std::error::Error>> {
    match &global.config {
        Some(path) => Ok(gatesim_config::load_config_file(Path::new(path))?),
        None => Ok(gatesim_config::load_config(&std::env::current_dir()?)?),
    }
}

/// Reads a JSON netlist, naming the file in any error.
pub fn load_netlist(path: &str) -> Result<Netlist, Box<dyn std::error::Error>> {
    gatesim_netlist::load_netlist(Path::new(path)).map_err(|e| format!("{path}: {e}").into())
}

/// Renders every accumulated diagnostic to stderr.
///
/// In quiet mode only errors are shown. Returns the number rendered.
pub fn render_diagnostics(sink: &DiagnosticSink, global: &GlobalArgs) -> usize {
    let renderer = TerminalRenderer::new(global.color);
    let mut rendered = 0;
    for diag in sink.diagnostics() {
        if global.quiet && !diag.severity.is_error() {
            continue;
        }
        eprint!("{}", renderer.render(&diag));
        rendered += 1;
    }
    rendered
}
