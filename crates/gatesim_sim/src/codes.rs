//! Diagnostic codes emitted by netlist checks and simulation runs.

use gatesim_diagnostics::{Category, DiagnosticCode};

/// A vector's combinational logic did not settle within the pass budget.
pub const NON_CONVERGENCE: DiagnosticCode = DiagnosticCode::new(Category::Warning, 301);
/// A DFF with fewer than two inputs or no output; it is never latched or captured.
pub const MALFORMED_REGISTER: DiagnosticCode = DiagnosticCode::new(Category::Warning, 302);
/// A vector supplied more values than there are primary inputs.
pub const SURPLUS_VECTOR_VALUES: DiagnosticCode = DiagnosticCode::new(Category::Warning, 303);
/// Combinational elements form a feedback loop not cut by a register.
pub const COMBINATIONAL_CYCLE: DiagnosticCode = DiagnosticCode::new(Category::Warning, 304);
/// A gate's pin count does not fit its kind.
pub const GATE_ARITY: DiagnosticCode = DiagnosticCode::new(Category::Warning, 305);

/// No evaluator is registered for a combinational element's kind.
pub const UNSUPPORTED_GATE_KIND: DiagnosticCode = DiagnosticCode::new(Category::Error, 301);
/// A vector is shorter than the primary-input list.
pub const VECTOR_LENGTH_MISMATCH: DiagnosticCode = DiagnosticCode::new(Category::Error, 302);
/// Non-convergence under the `error` policy.
pub const NO_CONVERGENCE: DiagnosticCode = DiagnosticCode::new(Category::Error, 303);
/// Malformed register under the `reject` policy.
pub const MALFORMED_REGISTER_REJECTED: DiagnosticCode = DiagnosticCode::new(Category::Error, 304);
/// Any other failure that stops a run (bad input files, I/O).
pub const RUN_ABORTED: DiagnosticCode = DiagnosticCode::new(Category::Error, 399);
