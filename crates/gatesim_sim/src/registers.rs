//! Register stage: latch and capture for `DFF` elements.
//!
//! A cycle starts by latching (`current[Q] <- next[Q]`) and ends by capturing
//! (`next[Q] <- current[D]`) once combinational logic has settled. The clock
//! pin is never read: every vector is one clock edge. Registers without a D
//! input or a Q output are left out of both phases.

use gatesim_netlist::{ElementId, NetId, Netlist};

use crate::state::StateStore;

/// The D and Q nets of one well-formed register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegisterTap {
    /// The register element.
    pub element: ElementId,
    /// Data input (`inputs[1]`).
    pub d: NetId,
    /// Output (`outputs[0]`).
    pub q: NetId,
}

/// All well-formed registers of a netlist, in declaration order.
#[derive(Clone, Debug, Default)]
pub struct RegisterStage {
    taps: Vec<RegisterTap>,
    skipped: Vec<ElementId>,
}

impl RegisterStage {
    /// Collects the registers of `netlist`, setting malformed ones aside.
    pub fn new(netlist: &Netlist) -> Self {
        let mut stage = Self::default();
        for element in netlist.registers() {
            match element.register_taps() {
                Some((d, q)) => stage.taps.push(RegisterTap {
                    element: element.id,
                    d,
                    q,
                }),
                None => stage.skipped.push(element.id),
            }
        }
        stage
    }

    /// Registers that take part in latch and capture.
    pub fn taps(&self) -> &[RegisterTap] {
        &self.taps
    }

    /// Malformed registers that are ignored.
    pub fn skipped(&self) -> &[ElementId] {
        &self.skipped
    }

    /// Copies each register's pending value onto its output.
    pub fn latch(&self, state: &mut StateStore) {
        for tap in &self.taps {
            let value = state.next(tap.q);
            state.set_current(tap.q, value);
        }
    }

    /// Records each register's settled data input as its next output.
    pub fn capture(&self, state: &mut StateStore) {
        for tap in &self.taps {
            let value = state.current(tap.d);
            state.set_next(tap.q, value);
        }
    }
}
