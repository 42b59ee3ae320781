//! Structural queries over a netlist.
//!
//! These answer the questions the simulator needs at construction time
//! (primary inputs and outputs, registers, combinational elements) and the
//! ones a caller needs to trust the result: malformed registers, gates with a
//! nonsensical pin count, and combinational feedback loops that may keep the
//! convergence engine from settling.

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::element::{Element, ElementKind};
use crate::ids::{ElementId, NetId};
use crate::netlist::Netlist;

/// A gate whose pin count does not fit its kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArityIssue {
    /// The offending element.
    pub element: ElementId,
    /// What is wrong with it.
    pub problem: ArityProblem,
}

/// The specific pin-count problem of an [`ArityIssue`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArityProblem {
    /// A `NOT` with other than exactly one input; the count is attached.
    NotInputCount(usize),
    /// An `AND` or `OR` with no inputs.
    NoInputs,
    /// A combinational element that drives nothing.
    NoOutputs,
}

impl Netlist {
    /// Nets without a driver, in ascending ID order.
    pub fn primary_inputs(&self) -> Vec<NetId> {
        self.nets()
            .filter(|n| n.is_primary_input())
            .map(|n| n.id)
            .collect()
    }

    /// Nets with no consumers or a leading external sink, in ascending ID order.
    pub fn primary_outputs(&self) -> Vec<NetId> {
        self.nets()
            .filter(|n| n.is_primary_output())
            .map(|n| n.id)
            .collect()
    }

    /// All `DFF` elements in declaration order, well-formed or not.
    pub fn registers(&self) -> impl Iterator<Item = &Element> {
        self.elements().filter(|e| e.is_register())
    }

    /// All non-register elements in declaration order.
    pub fn combinational_elements(&self) -> impl Iterator<Item = &Element> {
        self.elements().filter(|e| !e.is_register())
    }

    /// Registers with fewer than two inputs or no output.
    pub fn malformed_registers(&self) -> Vec<ElementId> {
        self.registers()
            .filter(|e| e.register_taps().is_none())
            .map(|e| e.id)
            .collect()
    }

    /// Combinational elements whose pin counts do not fit their kind.
    pub fn arity_issues(&self) -> Vec<ArityIssue> {
        let mut issues = Vec::new();
        for element in self.combinational_elements() {
            let problem = match element.kind {
                ElementKind::Not if element.inputs.len() != 1 => {
                    Some(ArityProblem::NotInputCount(element.inputs.len()))
                }
                ElementKind::And | ElementKind::Or if element.inputs.is_empty() => {
                    Some(ArityProblem::NoInputs)
                }
                _ if element.outputs.is_empty() => Some(ArityProblem::NoOutputs),
                _ => None,
            };
            if let Some(problem) = problem {
                issues.push(ArityIssue {
                    element: element.id,
                    problem,
                });
            }
        }
        issues
    }

    /// Groups of combinational elements that form feedback loops.
    ///
    /// Registers cut the graph, so a loop through a `DFF` is not reported.
    /// Each group is sorted by element ID and the groups are ordered by their
    /// first member, so the result is deterministic.
    pub fn combinational_cycles(&self) -> Vec<Vec<ElementId>> {
        let mut graph: DiGraph<ElementId, NetId> = DiGraph::new();
        let mut nodes: Vec<Option<NodeIndex>> = vec![None; self.element_count()];
        for element in self.combinational_elements() {
            nodes[element.id.as_raw() as usize] = Some(graph.add_node(element.id));
        }

        for element in self.combinational_elements() {
            let Some(from) = nodes[element.id.as_raw() as usize] else {
                continue;
            };
            for &net in &element.outputs {
                for consumer in self.net(net).consumers() {
                    if let Some(to) = nodes[consumer.as_raw() as usize] {
                        graph.add_edge(from, to, net);
                    }
                }
            }
        }

        let mut cycles: Vec<Vec<ElementId>> = tarjan_scc(&graph)
            .into_iter()
            .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
            .map(|scc| {
                let mut members: Vec<ElementId> = scc.into_iter().map(|n| graph[n]).collect();
                members.sort_unstable();
                members
            })
            .collect();
        cycles.sort_unstable_by_key(|c| c[0]);
        cycles
    }
}
