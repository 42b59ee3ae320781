//! Simulation error types.
//!
//! All errors that can occur during simulator construction or while running
//! vectors are represented as variants of [`SimError`].

use std::io;

use gatesim_diagnostics::{Diagnostic, DiagnosticCode};

use crate::codes;

/// Errors that can occur during simulation setup or execution.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// A combinational element has a kind with no registered evaluator.
    #[error("unsupported gate kind '{kind}' on element '{element}'")]
    UnsupportedGateKind {
        /// Name of the element being evaluated.
        element: String,
        /// Its kind name.
        kind: String,
    },

    /// A vector supplies fewer values than there are primary inputs.
    #[error("vector {vector} has {found} values but the netlist has {expected} primary inputs")]
    VectorLengthMismatch {
        /// Zero-based index of the offending vector.
        vector: usize,
        /// Number of primary inputs.
        expected: usize,
        /// Number of values supplied.
        found: usize,
    },

    /// Combinational logic did not settle and the policy is to fail.
    #[error("vector {vector} did not settle after {passes} passes ({unsettled} nets still changing)")]
    NoConvergence {
        /// Zero-based index of the vector.
        vector: usize,
        /// Passes executed.
        passes: u32,
        /// Nets that changed in the final pass.
        unsettled: usize,
    },

    /// A register violates the DFF shape and the policy is to reject it.
    #[error("register '{element}' needs a clock input, a data input, and an output")]
    MalformedRegister {
        /// Name of the register.
        element: String,
    },

    /// The convergence pass budget is zero.
    #[error("the convergence pass budget must be at least 1")]
    ZeroPassBudget,

    /// A vector file contains a token that is not a logic value.
    #[error("line {line}: invalid logic value '{token}' (expected 0, 1, or X)")]
    VectorParse {
        /// One-based line number.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// An I/O error occurred while reading vectors or writing outputs.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl SimError {
    /// Returns the diagnostic code used when reporting this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            SimError::UnsupportedGateKind { .. } => codes::UNSUPPORTED_GATE_KIND,
            SimError::VectorLengthMismatch { .. } => codes::VECTOR_LENGTH_MISMATCH,
            SimError::NoConvergence { .. } => codes::NO_CONVERGENCE,
            SimError::MalformedRegister { .. } => codes::MALFORMED_REGISTER_REJECTED,
            SimError::ZeroPassBudget
            | SimError::VectorParse { .. }
            | SimError::Io(_) => codes::RUN_ABORTED,
        }
    }

    /// Converts this error into an error-severity diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code(), self.to_string());
        match self {
            SimError::UnsupportedGateKind { element, .. } => diag
                .with_subject(format!("element '{element}'"))
                .with_help("register an evaluator for this kind or remove the element"),
            SimError::VectorLengthMismatch { vector, .. } => {
                diag.with_subject(format!("vector {vector}"))
            }
            SimError::NoConvergence { vector, .. } => diag
                .with_subject(format!("vector {vector}"))
                .with_help("break combinational feedback loops with a register"),
            SimError::MalformedRegister { element } => {
                diag.with_subject(format!("element '{element}'"))
            }
            _ => diag,
        }
    }
}
