//! Cycle driver.
//!
//! One input vector is one clock cycle:
//!
//! 1. latch every register (`current[Q] <- next[Q]`),
//! 2. drive the primary inputs from the vector in net order,
//! 3. settle combinational logic,
//! 4. capture every register (`next[Q] <- current[D]`),
//! 5. read the primary outputs in net order.
//!
//! State carries over from one vector to the next; nothing is reset between
//! cycles.

use gatesim_common::Logic;
use gatesim_config::{MalformedRegisterPolicy, NonConvergencePolicy, SimulationConfig};
use gatesim_diagnostics::{Diagnostic, DiagnosticSink};
use gatesim_netlist::{NetId, Netlist};

use crate::codes;
use crate::error::SimError;
use crate::eval::EvaluatorRegistry;
use crate::registers::RegisterStage;
use crate::settle::{settle, CombPlan, Convergence};
use crate::state::StateStore;

/// What one cycle produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CycleReport {
    /// Primary-output values in net order.
    pub outputs: Vec<Logic>,
    /// How combinational settling went.
    pub convergence: Convergence,
    /// Vector values beyond the primary-input count, which were ignored.
    pub surplus_inputs: usize,
}

/// Aggregate figures for a whole run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Vectors simulated.
    pub vectors: usize,
    /// Combinational passes summed over all vectors.
    pub total_passes: u64,
    /// The largest pass count of any single vector.
    pub max_passes_in_vector: u32,
    /// Vectors whose logic did not settle within the budget.
    pub unconverged_vectors: usize,
}

/// Result of running a sequence of vectors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimResult {
    /// One output line per vector, in input order.
    pub outputs: Vec<Vec<Logic>>,
    /// Run statistics.
    pub stats: SimStats,
}

/// Simulates a netlist one vector at a time.
pub struct Simulator<'a> {
    netlist: &'a Netlist,
    plan: CombPlan<'a>,
    registers: RegisterStage,
    state: StateStore,
    primary_inputs: Vec<NetId>,
    primary_outputs: Vec<NetId>,
    config: SimulationConfig,
    cycle: usize,
}

impl<'a> Simulator<'a> {
    /// Prepares a simulator with every net at `X`.
    ///
    /// Fails if the pass budget is zero, or if a register is malformed and
    /// the configuration rejects malformed registers. Unsupported gate kinds
    /// are not reported here; they fail the first cycle that reaches them.
    pub fn new(
        netlist: &'a Netlist,
        registry: &'a EvaluatorRegistry,
        config: &SimulationConfig,
    ) -> Result<Self, SimError> {
        if config.max_passes == 0 {
            return Err(SimError::ZeroPassBudget);
        }

        let registers = RegisterStage::new(netlist);
        if config.malformed_registers == MalformedRegisterPolicy::Reject {
            if let Some(&bad) = registers.skipped().first() {
                return Err(SimError::MalformedRegister {
                    element: netlist.element_name(bad).to_string(),
                });
            }
        }

        Ok(Self {
            netlist,
            plan: CombPlan::new(netlist, registry),
            registers,
            state: StateStore::new(netlist.net_count()),
            primary_inputs: netlist.primary_inputs(),
            primary_outputs: netlist.primary_outputs(),
            config: config.clone(),
            cycle: 0,
        })
    }

    /// Primary-input nets in the order vector values are assigned to them.
    pub fn primary_inputs(&self) -> &[NetId] {
        &self.primary_inputs
    }

    /// Primary-output nets in the order their values are reported.
    pub fn primary_outputs(&self) -> &[NetId] {
        &self.primary_outputs
    }

    /// Number of cycles simulated so far.
    pub fn cycle(&self) -> usize {
        self.cycle
    }

    /// The net values as of the last completed cycle.
    pub fn state(&self) -> &StateStore {
        &self.state
    }

    /// Returns every net to `X` and the cycle counter to zero.
    pub fn reset(&mut self) {
        self.state.reset();
        self.cycle = 0;
    }

    /// Simulates one clock cycle with `vector` on the primary inputs.
    ///
    /// A vector shorter than the primary-input list is rejected before any
    /// state changes. Extra values are ignored and counted in the report.
    pub fn step(&mut self, vector: &[Logic]) -> Result<CycleReport, SimError> {
        let expected = self.primary_inputs.len();
        if vector.len() < expected {
            return Err(SimError::VectorLengthMismatch {
                vector: self.cycle,
                expected,
                found: vector.len(),
            });
        }

        self.registers.latch(&mut self.state);
        for (&net, &value) in self.primary_inputs.iter().zip(vector) {
            self.state.set_current(net, value);
        }
        let convergence = settle(
            self.netlist,
            &self.plan,
            &mut self.state,
            self.config.max_passes,
        )?;
        self.registers.capture(&mut self.state);

        let outputs = self
            .primary_outputs
            .iter()
            .map(|&net| self.state.current(net))
            .collect();
        self.cycle += 1;

        Ok(CycleReport {
            outputs,
            convergence,
            surplus_inputs: vector.len() - expected,
        })
    }

    /// Runs every vector in order, collecting one output line per vector.
    ///
    /// Non-convergence is handled per the configured policy: a `W301`
    /// warning, silence, or a [`SimError::NoConvergence`] that stops the run.
    /// Surplus vector values produce a `W303` warning.
    pub fn run(
        &mut self,
        vectors: &[Vec<Logic>],
        sink: &DiagnosticSink,
    ) -> Result<SimResult, SimError> {
        let mut result = SimResult::default();

        for vector in vectors {
            let index = self.cycle;
            let report = self.step(vector)?;
            let conv = report.convergence;

            result.stats.vectors += 1;
            result.stats.total_passes += u64::from(conv.passes);
            result.stats.max_passes_in_vector = result.stats.max_passes_in_vector.max(conv.passes);

            if !conv.converged {
                result.stats.unconverged_vectors += 1;
                match self.config.on_nonconvergence {
                    NonConvergencePolicy::Warn => sink.emit(
                        Diagnostic::warning(
                            codes::NON_CONVERGENCE,
                            format!(
                                "combinational logic did not settle within {} passes",
                                conv.passes
                            ),
                        )
                        .with_subject(format!("vector {index}"))
                        .with_note(format!(
                            "{} nets were still changing; their last values are reported",
                            conv.unsettled
                        ))
                        .with_help("break combinational feedback loops with a register"),
                    ),
                    NonConvergencePolicy::Ignore => {}
                    NonConvergencePolicy::Error => {
                        return Err(SimError::NoConvergence {
                            vector: index,
                            passes: conv.passes,
                            unsettled: conv.unsettled,
                        });
                    }
                }
            }

            if report.surplus_inputs > 0 {
                sink.emit(
                    Diagnostic::warning(
                        codes::SURPLUS_VECTOR_VALUES,
                        format!(
                            "{} values supplied for {} primary inputs; the extra {} are ignored",
                            vector.len(),
                            self.primary_inputs.len(),
                            report.surplus_inputs
                        ),
                    )
                    .with_subject(format!("vector {index}")),
                );
            }

            result.outputs.push(report.outputs);
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatesim_common::Logic::{One, Zero, X};
    use gatesim_netlist::{ElementKind, NetlistBuilder};

    fn and2() -> Netlist {
        let mut b = NetlistBuilder::new();
        let a = b.add_net("a").unwrap();
        let bn = b.add_net("b").unwrap();
        let y = b.add_net("y").unwrap();
        b.add_element("g", ElementKind::And, &[a, bn], &[y]).unwrap();
        b.build()
    }

    /// `q` registers `d`; `clk` is an input that is never read.
    fn dff() -> Netlist {
        let mut b = NetlistBuilder::new();
        let clk = b.add_net("clk").unwrap();
        let d = b.add_net("d").unwrap();
        let q = b.add_net("q").unwrap();
        b.add_element("ff", ElementKind::Dff, &[clk, d], &[q]).unwrap();
        b.build()
    }

    #[test]
    fn and_gate_per_vector() {
        let netlist = and2();
        let registry = EvaluatorRegistry::with_builtins();
        let mut sim = Simulator::new(&netlist, &registry, &SimulationConfig::default()).unwrap();
        assert_eq!(sim.step(&[One, One]).unwrap().outputs, vec![One]);
        assert_eq!(sim.step(&[Zero, X]).unwrap().outputs, vec![Zero]);
        assert_eq!(sim.step(&[One, X]).unwrap().outputs, vec![X]);
        assert_eq!(sim.cycle(), 3);
    }

    #[test]
    fn register_delays_by_one_cycle() {
        let netlist = dff();
        let registry = EvaluatorRegistry::with_builtins();
        let mut sim = Simulator::new(&netlist, &registry, &SimulationConfig::default()).unwrap();
        let sink = DiagnosticSink::new();
        let vectors = vec![vec![Zero, One], vec![Zero, Zero], vec![Zero, X]];
        let result = sim.run(&vectors, &sink).unwrap();
        assert_eq!(result.outputs, vec![vec![X], vec![One], vec![Zero]]);
        assert_eq!(result.stats.vectors, 3);
        assert_eq!(result.stats.unconverged_vectors, 0);
        assert!(sink.diagnostics().is_empty());
    }

    #[test]
    fn short_vector_is_rejected_without_touching_state() {
        let netlist = dff();
        let registry = EvaluatorRegistry::with_builtins();
        let mut sim = Simulator::new(&netlist, &registry, &SimulationConfig::default()).unwrap();
        sim.step(&[Zero, One]).unwrap();
        let before = sim.state().current_values().to_vec();

        let err = sim.step(&[One]).unwrap_err();
        match err {
            SimError::VectorLengthMismatch {
                vector,
                expected,
                found,
            } => {
                assert_eq!((vector, expected, found), (1, 2, 1));
            }
            other => panic!("expected VectorLengthMismatch, got {other:?}"),
        }
        assert_eq!(sim.state().current_values(), &before[..]);
        assert_eq!(sim.cycle(), 1);
    }

    #[test]
    fn surplus_values_are_ignored_with_warning() {
        let netlist = and2();
        let registry = EvaluatorRegistry::with_builtins();
        let mut sim = Simulator::new(&netlist, &registry, &SimulationConfig::default()).unwrap();
        let sink = DiagnosticSink::new();
        let result = sim.run(&[vec![One, One, Zero]], &sink).unwrap();
        assert_eq!(result.outputs, vec![vec![One]]);
        let diags = sink.take_all();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, codes::SURPLUS_VECTOR_VALUES);
        assert_eq!(diags[0].subject.as_deref(), Some("vector 0"));
    }

    #[test]
    fn zero_budget_is_rejected() {
        let netlist = and2();
        let registry = EvaluatorRegistry::with_builtins();
        let config = SimulationConfig {
            max_passes: 0,
            ..SimulationConfig::default()
        };
        assert!(matches!(
            Simulator::new(&netlist, &registry, &config),
            Err(SimError::ZeroPassBudget)
        ));
    }

    fn malformed_dff() -> Netlist {
        let mut b = NetlistBuilder::new();
        let d = b.add_net("d").unwrap();
        let q = b.add_net("q").unwrap();
        b.add_element("ff_bad", ElementKind::Dff, &[d], &[q]).unwrap();
        b.build()
    }

    #[test]
    fn malformed_register_skipped_by_default() {
        let netlist = malformed_dff();
        let registry = EvaluatorRegistry::with_builtins();
        let mut sim = Simulator::new(&netlist, &registry, &SimulationConfig::default()).unwrap();
        // `q` is driven by the register, so only `d` is an input.
        assert_eq!(sim.primary_inputs().len(), 1);
        assert_eq!(sim.step(&[One]).unwrap().outputs, vec![X]);
        assert_eq!(sim.step(&[One]).unwrap().outputs, vec![X]);
    }

    #[test]
    fn malformed_register_rejected_by_policy() {
        let netlist = malformed_dff();
        let registry = EvaluatorRegistry::with_builtins();
        let config = SimulationConfig {
            malformed_registers: MalformedRegisterPolicy::Reject,
            ..SimulationConfig::default()
        };
        match Simulator::new(&netlist, &registry, &config) {
            Err(SimError::MalformedRegister { element }) => assert_eq!(element, "ff_bad"),
            Err(other) => panic!("expected MalformedRegister, got {other:?}"),
            Ok(_) => panic!("expected MalformedRegister, got a simulator"),
        }
    }

    /// A lone inverter feeding itself through `n`, with `y` observing it.
    fn self_inverter() -> Netlist {
        let mut b = NetlistBuilder::new();
        let n = b.add_net("n").unwrap();
        let y = b.add_net("y").unwrap();
        let a = b.add_net("a").unwrap();
        b.add_element("inv", ElementKind::Not, &[n], &[n]).unwrap();
        b.add_element("buf", ElementKind::Or, &[n, a], &[y]).unwrap();
        b.build()
    }

    #[test]
    fn unknown_feedback_settles_immediately() {
        let netlist = self_inverter();
        let registry = EvaluatorRegistry::with_builtins();
        let mut sim = Simulator::new(&netlist, &registry, &SimulationConfig::default()).unwrap();
        let report = sim.step(&[Zero]).unwrap();
        assert!(report.convergence.converged);
        assert_eq!(report.outputs, vec![X]);
    }

    /// An inverter whose output loops back through `AND(_, kick)`: `kick = 0`
    /// holds the loop at 0, `kick = 1` lets it oscillate.
    fn kickable_loop() -> Netlist {
        let mut b = NetlistBuilder::new();
        let kick = b.add_net("kick").unwrap();
        let r0 = b.add_net("r0").unwrap();
        let r1 = b.add_net("r1").unwrap();
        let y = b.add_net("y").unwrap();
        b.add_element("inv", ElementKind::Not, &[r0], &[r1]).unwrap();
        b.add_element("gate", ElementKind::And, &[r1, kick], &[r0]).unwrap();
        b.add_element("tap", ElementKind::Or, &[r0, r0], &[y]).unwrap();
        b.build()
    }

    #[test]
    fn non_convergence_warns_by_default() {
        let netlist = kickable_loop();
        let registry = EvaluatorRegistry::with_builtins();
        let mut sim = Simulator::new(&netlist, &registry, &SimulationConfig::default()).unwrap();
        let sink = DiagnosticSink::new();
        let result = sim.run(&[vec![Zero], vec![One]], &sink).unwrap();

        assert_eq!(result.stats.unconverged_vectors, 1);
        assert_eq!(result.stats.max_passes_in_vector, 100);
        assert_eq!(result.outputs.len(), 2);
        assert!(result.outputs[1][0].is_known());

        let diags = sink.take_all();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, codes::NON_CONVERGENCE);
        assert_eq!(diags[0].subject.as_deref(), Some("vector 1"));
    }

    #[test]
    fn non_convergence_is_silent_when_ignored() {
        let netlist = kickable_loop();
        let registry = EvaluatorRegistry::with_builtins();
        let config = SimulationConfig {
            on_nonconvergence: NonConvergencePolicy::Ignore,
            ..SimulationConfig::default()
        };
        let mut sim = Simulator::new(&netlist, &registry, &config).unwrap();
        let sink = DiagnosticSink::new();
        let result = sim.run(&[vec![Zero], vec![One]], &sink).unwrap();
        assert_eq!(result.stats.unconverged_vectors, 1);
        assert!(sink.diagnostics().is_empty());
    }

    #[test]
    fn non_convergence_fails_under_error_policy() {
        let netlist = kickable_loop();
        let registry = EvaluatorRegistry::with_builtins();
        let config = SimulationConfig {
            max_passes: 10,
            on_nonconvergence: NonConvergencePolicy::Error,
            ..SimulationConfig::default()
        };
        let mut sim = Simulator::new(&netlist, &registry, &config).unwrap();
        let sink = DiagnosticSink::new();
        let err = sim.run(&[vec![Zero], vec![One]], &sink).unwrap_err();
        assert!(matches!(
            err,
            SimError::NoConvergence {
                vector: 1,
                passes: 10,
                ..
            }
        ));
    }

    #[test]
    fn reset_returns_to_unknown() {
        let netlist = dff();
        let registry = EvaluatorRegistry::with_builtins();
        let mut sim = Simulator::new(&netlist, &registry, &SimulationConfig::default()).unwrap();
        sim.step(&[Zero, One]).unwrap();
        sim.reset();
        assert_eq!(sim.cycle(), 0);
        assert_eq!(sim.step(&[Zero, Zero]).unwrap().outputs, vec![X]);
    }

    #[test]
    fn netlist_without_inputs_accepts_empty_vectors() {
        let mut b = NetlistBuilder::new();
        let y = b.add_net("y").unwrap();
        b.add_element("k", ElementKind::And, &[], &[y]).unwrap();
        let netlist = b.build();
        let registry = EvaluatorRegistry::with_builtins();
        let mut sim = Simulator::new(&netlist, &registry, &SimulationConfig::default()).unwrap();
        assert_eq!(sim.step(&[]).unwrap().outputs, vec![One]);
    }
}
