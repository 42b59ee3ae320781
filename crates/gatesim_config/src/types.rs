//! Configuration types deserialized from `gatesim.toml`.

use serde::Deserialize;

/// Pass budget used when the configuration does not set one.
pub const DEFAULT_MAX_PASSES: u32 = 100;

/// The top-level configuration parsed from `gatesim.toml`.
///
/// Every section is optional; an empty file yields [`GatesimConfig::default`].
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatesimConfig {
    /// Simulation engine settings.
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Structural checks run before simulating.
    #[serde(default)]
    pub check: CheckConfig,
}

/// Settings for the cycle-based simulation engine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Maximum number of combinational passes per vector.
    pub max_passes: u32,
    /// What to do when a vector's combinational logic does not settle.
    pub on_nonconvergence: NonConvergencePolicy,
    /// What to do with registers that violate the DFF shape.
    pub malformed_registers: MalformedRegisterPolicy,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_passes: DEFAULT_MAX_PASSES,
            on_nonconvergence: NonConvergencePolicy::default(),
            malformed_registers: MalformedRegisterPolicy::default(),
        }
    }
}

/// Reaction to a vector that exhausts its pass budget without settling.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NonConvergencePolicy {
    /// Keep the unsettled values and emit a warning diagnostic.
    #[default]
    Warn,
    /// Keep the unsettled values silently.
    Ignore,
    /// Abort the run.
    Error,
}

/// Reaction to a DFF with fewer than two inputs or no output.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedRegisterPolicy {
    /// Leave the register out of latch and capture, and warn.
    #[default]
    Skip,
    /// Refuse to simulate the netlist.
    Reject,
}

/// Structural checks performed before simulation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckConfig {
    /// Report combinational feedback loops (cycles not cut by a register).
    pub combinational_cycles: bool,
    /// Report gates whose input or output count does not fit their kind.
    pub arity: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            combinational_cycles: true,
            arity: true,
        }
    }
}
