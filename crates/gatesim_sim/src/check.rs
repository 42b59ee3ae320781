//! Structural checks run before simulation.
//!
//! None of these stop a run by themselves. They flag the netlist shapes that
//! make simulation results hard to trust: registers that will be ignored,
//! gates with pin counts that do not fit their kind, and combinational
//! feedback loops that may keep a vector from settling.

use gatesim_config::CheckConfig;
use gatesim_diagnostics::{Diagnostic, DiagnosticSink};
use gatesim_netlist::{ArityProblem, ElementId, Netlist};

use crate::codes;

/// Structural figures for a netlist.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NetlistSummary {
    /// Number of nets.
    pub nets: usize,
    /// Number of elements, registers included.
    pub elements: usize,
    /// Number of primary inputs (values per vector).
    pub primary_inputs: usize,
    /// Number of primary outputs (values per output line).
    pub primary_outputs: usize,
    /// Number of `DFF` elements, malformed ones included.
    pub registers: usize,
    /// Registers that will be left out of latch and capture.
    pub malformed_registers: usize,
    /// Combinational feedback loops found, if that check ran.
    pub combinational_cycles: usize,
    /// Gates with unfitting pin counts, if that check ran.
    pub arity_issues: usize,
}

/// Inspects `netlist`, emitting a warning for each problem found.
///
/// Malformed registers are always reported (`W302`). Feedback loops (`W304`)
/// and arity problems (`W305`) are reported when enabled in `config`.
pub fn check_netlist(
    netlist: &Netlist,
    config: &CheckConfig,
    sink: &DiagnosticSink,
) -> NetlistSummary {
    let mut summary = NetlistSummary {
        nets: netlist.net_count(),
        elements: netlist.element_count(),
        primary_inputs: netlist.primary_inputs().len(),
        primary_outputs: netlist.primary_outputs().len(),
        registers: netlist.registers().count(),
        ..NetlistSummary::default()
    };

    let malformed = netlist.malformed_registers();
    summary.malformed_registers = malformed.len();
    for id in malformed {
        let element = netlist.element(id);
        sink.emit(
            Diagnostic::warning(
                codes::MALFORMED_REGISTER,
                "register is missing its data input or output and will be ignored",
            )
            .with_subject(element_subject(netlist, id))
            .with_note(format!(
                "it has {} inputs and {} outputs; a DFF needs a clock, a data input, and an output",
                element.inputs.len(),
                element.outputs.len()
            )),
        );
    }

    if config.arity {
        let issues = netlist.arity_issues();
        summary.arity_issues = issues.len();
        for issue in issues {
            let kind = netlist.element(issue.element).kind.name();
            let message = match issue.problem {
                ArityProblem::NotInputCount(n) => {
                    format!("NOT gate has {n} inputs; only the first is read")
                }
                ArityProblem::NoInputs => {
                    format!("{kind} gate has no inputs and drives a constant")
                }
                ArityProblem::NoOutputs => format!("{kind} gate drives no net"),
            };
            sink.emit(
                Diagnostic::warning(codes::GATE_ARITY, message)
                    .with_subject(element_subject(netlist, issue.element)),
            );
        }
    }

    if config.combinational_cycles {
        let cycles = netlist.combinational_cycles();
        summary.combinational_cycles = cycles.len();
        for cycle in cycles {
            let names: Vec<&str> = cycle.iter().map(|&e| netlist.element_name(e)).collect();
            sink.emit(
                Diagnostic::warning(
                    codes::COMBINATIONAL_CYCLE,
                    format!(
                        "combinational feedback loop through {} elements",
                        cycle.len()
                    ),
                )
                .with_subject(element_subject(netlist, cycle[0]))
                .with_note(format!("loop members: {}", names.join(", ")))
                .with_help("vectors may fail to settle; cut the loop with a DFF"),
            );
        }
    }

    summary
}

fn element_subject(netlist: &Netlist, id: ElementId) -> String {
    format!("element '{}'", netlist.element_name(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatesim_netlist::{ElementKind, NetlistBuilder};

    fn clean() -> Netlist {
        let mut b = NetlistBuilder::new();
        let clk = b.add_net("clk").unwrap();
        let a = b.add_net("a").unwrap();
        let na = b.add_net("na").unwrap();
        let q = b.add_net("q").unwrap();
        b.add_element("inv", ElementKind::Not, &[a], &[na]).unwrap();
        b.add_element("ff", ElementKind::Dff, &[clk, na], &[q]).unwrap();
        b.build()
    }

    #[test]
    fn clean_netlist_is_quiet() {
        let sink = DiagnosticSink::new();
        let summary = check_netlist(&clean(), &CheckConfig::default(), &sink);
        assert!(sink.diagnostics().is_empty());
        assert_eq!(
            summary,
            NetlistSummary {
                nets: 4,
                elements: 2,
                primary_inputs: 2,
                primary_outputs: 1,
                registers: 1,
                malformed_registers: 0,
                combinational_cycles: 0,
                arity_issues: 0,
            }
        );
    }

    fn troubled() -> Netlist {
        let mut b = NetlistBuilder::new();
        let a = b.add_net("a").unwrap();
        let l0 = b.add_net("l0").unwrap();
        let l1 = b.add_net("l1").unwrap();
        let q = b.add_net("q").unwrap();
        b.add_element("loop_a", ElementKind::Not, &[l1], &[l0]).unwrap();
        b.add_element("loop_b", ElementKind::And, &[l0, a], &[l1]).unwrap();
        b.add_element("ff_bad", ElementKind::Dff, &[a], &[q]).unwrap();
        b.add_element("sink_or", ElementKind::Or, &[a], &[]).unwrap();
        b.build()
    }

    #[test]
    fn problems_are_reported() {
        let sink = DiagnosticSink::new();
        let summary = check_netlist(&troubled(), &CheckConfig::default(), &sink);
        assert_eq!(summary.malformed_registers, 1);
        assert_eq!(summary.combinational_cycles, 1);
        assert_eq!(summary.arity_issues, 1);

        let diags = sink.take_all();
        let seen: Vec<String> = diags.iter().map(|d| d.code.to_string()).collect();
        assert_eq!(seen, vec!["W302", "W305", "W304"]);
        assert_eq!(diags[0].subject.as_deref(), Some("element 'ff_bad'"));
        assert_eq!(diags[2].notes, vec!["loop members: loop_a, loop_b".to_string()]);
    }

    #[test]
    fn optional_checks_can_be_disabled() {
        let sink = DiagnosticSink::new();
        let config = CheckConfig {
            combinational_cycles: false,
            arity: false,
        };
        let summary = check_netlist(&troubled(), &config, &sink);
        assert_eq!(summary.combinational_cycles, 0);
        assert_eq!(summary.arity_issues, 0);
        let diags = sink.take_all();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, codes::MALFORMED_REGISTER);
    }
}
