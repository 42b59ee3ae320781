//! `gatesim check`: report a netlist's shape and structural problems.

use gatesim_diagnostics::DiagnosticSink;
use gatesim_sim::{check_netlist, NetlistSummary};

use crate::pipeline::{load_netlist, load_run_config, render_diagnostics};
use crate::{CheckArgs, GlobalArgs, ReportFormat};

/// Runs the `gatesim check` command.
///
/// Prints the summary to stdout and warnings to stderr. Returns exit code 1
/// only when `--deny-warnings` is set and a warning was reported.
pub fn run(args: &CheckArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = load_run_config(global)?;
    let netlist = load_netlist(&args.netlist)?;

    let sink = DiagnosticSink::new();
    let summary = check_netlist(&netlist, &config.check, &sink);

    match args.format {
        ReportFormat::Text => print!("{}", summary_text(&summary)),
        ReportFormat::Json => println!("{}", summary_json(&summary)),
    }
    render_diagnostics(&sink, global);

    let warnings = sink.warning_count();
    if !global.quiet {
        eprintln!("   Checked {}: {warnings} warnings", args.netlist);
    }

    if args.deny_warnings && warnings > 0 {
        Ok(1)
    } else {
        Ok(0)
    }
}

fn summary_text(s: &NetlistSummary) -> String {
    format!(
        "nets:                 {}\n\
         elements:             {}\n\
         primary inputs:       {}\n\
         primary outputs:      {}\n\
         registers:            {}\n\
         malformed registers:  {}\n\
         feedback loops:       {}\n\
         arity issues:         {}\n",
        s.nets,
        s.elements,
        s.primary_inputs,
        s.primary_outputs,
        s.registers,
        s.malformed_registers,
        s.combinational_cycles,
        s.arity_issues,
    )
}

fn summary_json(s: &NetlistSummary) -> String {
    let value = serde_json::json!({
        "nets": s.nets,
        "elements": s.elements,
        "primary_inputs": s.primary_inputs,
        "primary_outputs": s.primary_outputs,
        "registers": s.registers,
        "malformed_registers": s.malformed_registers,
        "combinational_cycles": s.combinational_cycles,
        "arity_issues": s.arity_issues,
    });
    serde_json::to_string_pretty(&value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const LOOPY: &str = r#"{
        "nets": ["a", "l0", "l1"],
        "elements": [
            { "name": "inv", "kind": "NOT", "inputs": ["l1"], "outputs": ["l0"] },
            { "name": "gate", "kind": "AND", "inputs": ["l0", "a"], "outputs": ["l1"] }
        ]
    }"#;

    fn setup(dir: &Path) -> GlobalArgs {
        fs::write(dir.join("loopy.json"), LOOPY).unwrap();
        let config = dir.join("gatesim.toml");
        fs::write(&config, "").unwrap();
        GlobalArgs {
            quiet: true,
            verbose: false,
            color: false,
            config: Some(config.display().to_string()),
        }
    }

    fn check_args(dir: &Path, deny_warnings: bool) -> CheckArgs {
        CheckArgs {
            netlist: dir.join("loopy.json").display().to_string(),
            format: ReportFormat::Json,
            deny_warnings,
        }
    }

    #[test]
    fn warnings_do_not_fail_by_default() {
        let tmp = TempDir::new().unwrap();
        let global = setup(tmp.path());
        assert_eq!(run(&check_args(tmp.path(), false), &global).unwrap(), 0);
    }

    #[test]
    fn deny_warnings_fails_on_feedback_loop() {
        let tmp = TempDir::new().unwrap();
        let global = setup(tmp.path());
        assert_eq!(run(&check_args(tmp.path(), true), &global).unwrap(), 1);
    }

    #[test]
    fn summary_formats() {
        let summary = NetlistSummary {
            nets: 3,
            elements: 2,
            primary_inputs: 1,
            primary_outputs: 0,
            registers: 0,
            malformed_registers: 0,
            combinational_cycles: 1,
            arity_issues: 0,
        };
        let text = summary_text(&summary);
        assert!(text.starts_with("nets:                 3\n"));
        assert!(text.contains("feedback loops:       1\n"));

        let json: serde_json::Value = serde_json::from_str(&summary_json(&summary)).unwrap();
        assert_eq!(json["combinational_cycles"], 1);
        assert_eq!(json["primary_inputs"], 1);
    }
}
