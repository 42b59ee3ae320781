//! Gate evaluation: the [`GateEvaluator`] trait, the built-in gates, and the
//! registry the convergence engine resolves element kinds against.
//!
//! The built-in rules extend 2-valued logic conservatively with `X`. For
//! `AND` a `0` input decides the result before any `X` is looked at, and for
//! `OR` a `1` does. The check order is part of the semantics: `AND(0, X)` is
//! `0`, not `X`.

use std::collections::HashMap;

use gatesim_common::Logic;
use gatesim_netlist::ElementKind;

/// Evaluates one combinational gate kind.
///
/// Implementations must be pure: the result depends only on `inputs`.
pub trait GateEvaluator: Send + Sync {
    /// The upper-case kind name this evaluator is registered under.
    fn kind_name(&self) -> &str;

    /// Computes the gate output from its input values in pin order.
    fn evaluate(&self, inputs: &[Logic]) -> Logic;
}

/// Inverter. Reads only the first input; with no inputs the output is `X`.
pub struct NotGate;

impl GateEvaluator for NotGate {
    fn kind_name(&self) -> &str {
        "NOT"
    }

    fn evaluate(&self, inputs: &[Logic]) -> Logic {
        inputs.first().map_or(Logic::X, |&a| !a)
    }
}

/// N-input AND: any `0` gives `0`, else any `X` gives `X`, else `1`.
pub struct AndGate;

impl GateEvaluator for AndGate {
    fn kind_name(&self) -> &str {
        "AND"
    }

    fn evaluate(&self, inputs: &[Logic]) -> Logic {
        if inputs.contains(&Logic::Zero) {
            Logic::Zero
        } else if inputs.contains(&Logic::X) {
            Logic::X
        } else {
            Logic::One
        }
    }
}

/// N-input OR: any `1` gives `1`, else any `X` gives `X`, else `0`.
pub struct OrGate;

impl GateEvaluator for OrGate {
    fn kind_name(&self) -> &str {
        "OR"
    }

    fn evaluate(&self, inputs: &[Logic]) -> Logic {
        if inputs.contains(&Logic::One) {
            Logic::One
        } else if inputs.contains(&Logic::X) {
            Logic::X
        } else {
            Logic::Zero
        }
    }
}

/// Maps kind names to evaluators.
///
/// New gate kinds are added with [`register`](Self::register); the engine
/// never matches on kinds itself, so an unsupported kind is simply a lookup
/// miss.
pub struct EvaluatorRegistry {
    evaluators: HashMap<String, Box<dyn GateEvaluator>>,
}

impl EvaluatorRegistry {
    /// Creates a registry with no evaluators.
    pub fn new() -> Self {
        Self {
            evaluators: HashMap::new(),
        }
    }

    /// Creates a registry holding `NOT`, `AND`, and `OR`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(NotGate));
        registry.register(Box::new(AndGate));
        registry.register(Box::new(OrGate));
        registry
    }

    /// Registers an evaluator under its [`kind_name`](GateEvaluator::kind_name),
    /// returning the one it replaces.
    ///
    /// The name is upper-cased to match [`ElementKind::name`].
    pub fn register(&mut self, evaluator: Box<dyn GateEvaluator>) -> Option<Box<dyn GateEvaluator>> {
        let name = evaluator.kind_name().to_ascii_uppercase();
        self.evaluators.insert(name, evaluator)
    }

    /// Looks up the evaluator for a kind.
    ///
    /// Always `None` for `DFF`, which the register stage handles.
    pub fn get(&self, kind: &ElementKind) -> Option<&dyn GateEvaluator> {
        if kind.is_register() {
            return None;
        }
        self.evaluators.get(kind.name()).map(|e| e.as_ref())
    }

    /// Returns the registered kind names, sorted.
    pub fn kind_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.evaluators.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for EvaluatorRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
