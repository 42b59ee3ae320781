//! Elements (gates and registers) and their kinds.

use crate::ids::{ElementId, NetId};
use gatesim_common::Ident;
use std::fmt;

/// The kind of an element.
///
/// `Dff` is the only sequential kind and is handled by the register stage.
/// Every other kind is combinational and is evaluated by whatever evaluator is
/// registered under its [`name`](ElementKind::name); kinds without one are
/// unsupported at simulation time.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum ElementKind {
    /// Inverter.
    Not,
    /// N-input AND.
    And,
    /// N-input OR.
    Or,
    /// D flip-flop: `inputs[0]` is the clock, `inputs[1]` is D, `outputs[0]` is Q.
    Dff,
    /// Any other kind, stored upper-cased.
    Other(String),
}

impl ElementKind {
    /// Parses a kind name. Matching is case-insensitive.
    pub fn parse(name: &str) -> Self {
        let upper = name.trim().to_ascii_uppercase();
        match upper.as_str() {
            "NOT" => ElementKind::Not,
            "AND" => ElementKind::And,
            "OR" => ElementKind::Or,
            "DFF" => ElementKind::Dff,
            _ => ElementKind::Other(upper),
        }
    }

    /// Returns the canonical upper-case name of this kind.
    pub fn name(&self) -> &str {
        match self {
            ElementKind::Not => "NOT",
            ElementKind::And => "AND",
            ElementKind::Or => "OR",
            ElementKind::Dff => "DFF",
            ElementKind::Other(name) => name,
        }
    }

    /// Returns `true` for [`ElementKind::Dff`].
    pub fn is_register(&self) -> bool {
        matches!(self, ElementKind::Dff)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A gate or register with ordered input and output nets.
#[derive(Clone, Debug)]
pub struct Element {
    /// This element's ID (declaration order).
    pub id: ElementId,
    /// Interned element name.
    pub name: Ident,
    /// What the element computes.
    pub kind: ElementKind,
    /// Input nets in pin order.
    pub inputs: Vec<NetId>,
    /// Output nets in pin order.
    pub outputs: Vec<NetId>,
}

impl Element {
    /// Returns `true` if this element is a register.
    pub fn is_register(&self) -> bool {
        self.kind.is_register()
    }

    /// For a well-formed register, returns `(D, Q)`.
    ///
    /// Returns `None` for non-registers and for registers with fewer than two
    /// inputs or no output.
    pub fn register_taps(&self) -> Option<(NetId, NetId)> {
        if !self.is_register() {
            return None;
        }
        match (self.inputs.get(1), self.outputs.first()) {
            (Some(&d), Some(&q)) => Some((d, q)),
            _ => None,
        }
    }
}
