//! Convergence engine for combinational logic.
//!
//! Each pass walks the combinational elements in declaration order, reads
//! their inputs from the current values, and writes the result to every
//! output net in place, so later elements in the same pass already see the
//! new values. Passes repeat until one changes nothing or the pass budget is
//! spent. Running out of budget is not an error here; the caller decides what
//! a [`Convergence`] with `converged == false` means.

use gatesim_common::Logic;
use gatesim_netlist::{ElementId, Netlist};

use crate::error::SimError;
use crate::eval::{EvaluatorRegistry, GateEvaluator};
use crate::state::StateStore;

/// One combinational element and the evaluator resolved for it.
#[derive(Clone, Copy)]
struct CombStep<'r> {
    element: ElementId,
    evaluator: Option<&'r dyn GateEvaluator>,
}

/// The combinational elements of a netlist in declaration order, with their
/// evaluators looked up once.
///
/// Elements whose kind has no evaluator are kept in place; they fail with
/// [`SimError::UnsupportedGateKind`] the first time a pass reaches them.
#[derive(Clone)]
pub struct CombPlan<'r> {
    steps: Vec<CombStep<'r>>,
}

impl<'r> CombPlan<'r> {
    /// Resolves every combinational element of `netlist` against `registry`.
    pub fn new(netlist: &Netlist, registry: &'r EvaluatorRegistry) -> Self {
        let steps = netlist
            .combinational_elements()
            .map(|e| CombStep {
                element: e.id,
                evaluator: registry.get(&e.kind),
            })
            .collect();
        Self { steps }
    }

    /// Number of combinational elements.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if the netlist has no combinational elements.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Elements with no registered evaluator, in declaration order.
    pub fn unsupported(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.steps
            .iter()
            .filter(|s| s.evaluator.is_none())
            .map(|s| s.element)
    }

    /// Evaluation order as element IDs.
    pub fn order(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.steps.iter().map(|s| s.element)
    }
}

/// Outcome of settling one vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Convergence {
    /// Passes executed, including the final quiet one.
    pub passes: u32,
    /// `true` if the last pass changed no net.
    pub converged: bool,
    /// Nets that changed during the last pass; zero when converged.
    pub unsettled: usize,
}

/// Runs evaluation passes over `plan` until quiescent or `max_passes` is hit.
///
/// At least one pass always runs. A `max_passes` of zero is treated as one.
pub fn settle(
    netlist: &Netlist,
    plan: &CombPlan<'_>,
    state: &mut StateStore,
    max_passes: u32,
) -> Result<Convergence, SimError> {
    let budget = max_passes.max(1);
    let mut inputs: Vec<Logic> = Vec::new();
    let mut passes = 0;

    loop {
        passes += 1;
        let mut changed = 0usize;

        for step in &plan.steps {
            let element = netlist.element(step.element);
            let Some(evaluator) = step.evaluator else {
                return Err(SimError::UnsupportedGateKind {
                    element: netlist.element_name(element.id).to_string(),
                    kind: element.kind.name().to_string(),
                });
            };

            inputs.clear();
            inputs.extend(element.inputs.iter().map(|&n| state.current(n)));
            let value = evaluator.evaluate(&inputs);

            for &out in &element.outputs {
                if state.set_current(out, value) {
                    changed += 1;
                }
            }
        }

        if changed == 0 {
            return Ok(Convergence {
                passes,
                converged: true,
                unsettled: 0,
            });
        }
        if passes >= budget {
            return Ok(Convergence {
                passes,
                converged: false,
                unsettled: changed,
            });
        }
    }
}
