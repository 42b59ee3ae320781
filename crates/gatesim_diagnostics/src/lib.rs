//! Structured diagnostics for netlist checks and simulation runs.
//!
//! This crate provides [`Diagnostic`] messages with severity levels, codes,
//! notes, and help text. The thread-safe [`DiagnosticSink`] accumulates
//! diagnostics while a netlist is checked or simulated, and
//! [`DiagnosticRenderer`] implementations format them for the terminal.

#![warn(missing_docs)]

pub mod code;
pub mod diagnostic;
pub mod renderer;
pub mod severity;
pub mod sink;

pub use code::{Category, DiagnosticCode};
pub use diagnostic::Diagnostic;
pub use renderer::{DiagnosticRenderer, TerminalRenderer};
pub use severity::Severity;
pub use sink::DiagnosticSink;
