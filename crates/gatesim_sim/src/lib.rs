//! Cycle-based, 3-valued gate-level simulator.
//!
//! Every net holds `0`, `1`, or `X`. Each input vector is one clock cycle in
//! which registers latch, the vector drives the primary inputs, combinational
//! logic is settled by repeated in-place passes, registers capture, and the
//! primary outputs are read back.
//!
//! # Usage
//!
//! ```ignore
//! use gatesim_sim::{simulate, parse_vectors, format_outputs};
//!
//! let vectors = parse_vectors("1;1\n0;X\n")?;
//! let result = simulate(&netlist, &vectors, &config, &sink)?;
//! for line in &result.outputs {
//!     println!("{}", format_outputs(line));
//! }
//! ```
//!
//! # Modules
//!
//! - `codes`: diagnostic codes for checks and runs
//! - `error`: simulation error types
//! - `eval`: gate evaluators and their registry
//! - `state`: current/next value storage
//! - `settle`: the convergence engine
//! - `registers`: DFF latch and capture
//! - `simulator`: the per-vector cycle driver
//! - `check`: structural checks before simulating
//! - `vectors`: input vector parsing
//! - `output`: output line formatting

#![warn(missing_docs)]

pub mod check;
pub mod codes;
pub mod error;
pub mod eval;
pub mod output;
pub mod registers;
pub mod settle;
pub mod simulator;
pub mod state;
pub mod vectors;

use gatesim_common::Logic;
use gatesim_config::GatesimConfig;
use gatesim_diagnostics::DiagnosticSink;
use gatesim_netlist::Netlist;

pub use check::{check_netlist, NetlistSummary};
pub use error::SimError;
pub use eval::{AndGate, EvaluatorRegistry, GateEvaluator, NotGate, OrGate};
pub use output::{format_outputs, write_outputs, OUTPUT_SEPARATOR};
pub use registers::{RegisterStage, RegisterTap};
pub use settle::{settle, CombPlan, Convergence};
pub use simulator::{CycleReport, SimResult, SimStats, Simulator};
pub use state::StateStore;
pub use vectors::{load_vectors, parse_vectors};

/// High-level entry point: checks `netlist` and runs `vectors` through it
/// with the built-in gate evaluators.
///
/// Structural warnings and run warnings are emitted into `sink`.
pub fn simulate(
    netlist: &Netlist,
    vectors: &[Vec<Logic>],
    config: &GatesimConfig,
    sink: &DiagnosticSink,
) -> Result<SimResult, SimError> {
    let registry = EvaluatorRegistry::with_builtins();
    simulate_with(netlist, &registry, vectors, config, sink)
}

/// Like [`simulate`], with a caller-supplied evaluator registry.
pub fn simulate_with(
    netlist: &Netlist,
    registry: &EvaluatorRegistry,
    vectors: &[Vec<Logic>],
    config: &GatesimConfig,
    sink: &DiagnosticSink,
) -> Result<SimResult, SimError> {
    // A rejected register fails here, before check_netlist reports it as W302.
    let mut sim = Simulator::new(netlist, registry, &config.simulation)?;
    check_netlist(netlist, &config.check, sink);
    sim.run(vectors, sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatesim_common::Logic::{One, X, Zero};
    use gatesim_netlist::{ElementKind, NetlistBuilder};

    #[test]
    fn simulate_counter_bit() {
        // d = OR(NOT(q), set); `q` is exported although it feeds the inverter.
        let mut b = NetlistBuilder::new();
        let clk = b.add_net("clk").unwrap();
        let set = b.add_net("set").unwrap();
        let q = b.add_net("q").unwrap();
        let nq = b.add_net("nq").unwrap();
        let d = b.add_net("d").unwrap();
        b.add_element("inv", ElementKind::Not, &[q], &[nq]).unwrap();
        b.add_element("mux", ElementKind::Or, &[nq, set], &[d]).unwrap();
        b.add_element("ff", ElementKind::Dff, &[clk, d], &[q]).unwrap();
        b.mark_output(q).unwrap();
        let netlist = b.build();

        let vectors = vec![
            vec![Zero, One],
            vec![Zero, Zero],
            vec![Zero, Zero],
            vec![Zero, Zero],
        ];
        let sink = DiagnosticSink::new();
        let result = simulate(&netlist, &vectors, &GatesimConfig::default(), &sink).unwrap();
        assert_eq!(
            result.outputs,
            vec![vec![X], vec![One], vec![Zero], vec![One]]
        );
        assert!(sink.diagnostics().is_empty());
    }

    #[test]
    fn simulate_reports_structural_warnings_once() {
        let mut b = NetlistBuilder::new();
        let d = b.add_net("d").unwrap();
        let q = b.add_net("q").unwrap();
        b.add_element("ff", ElementKind::Dff, &[d], &[q]).unwrap();
        let netlist = b.build();

        let sink = DiagnosticSink::new();
        simulate(&netlist, &[vec![One], vec![Zero]], &GatesimConfig::default(), &sink).unwrap();
        assert_eq!(sink.warning_count(), 1);
        assert_eq!(sink.diagnostics()[0].code, codes::MALFORMED_REGISTER);
    }

    #[test]
    fn rejected_register_is_not_also_a_warning() {
        let mut b = NetlistBuilder::new();
        let d = b.add_net("d").unwrap();
        let q = b.add_net("q").unwrap();
        b.add_element("ff", ElementKind::Dff, &[d], &[q]).unwrap();
        let netlist = b.build();

        let mut config = GatesimConfig::default();
        config.simulation.malformed_registers = gatesim_config::MalformedRegisterPolicy::Reject;
        let sink = DiagnosticSink::new();
        let err = simulate(&netlist, &[vec![One]], &config, &sink).unwrap_err();
        assert!(matches!(err, SimError::MalformedRegister { ref element } if element == "ff"));
        assert!(sink.with_code(codes::MALFORMED_REGISTER).is_empty());
        assert_eq!(sink.warning_count(), 0);
    }
}
