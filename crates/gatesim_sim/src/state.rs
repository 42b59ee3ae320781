//! Per-net value storage.
//!
//! Every net carries two values. `current` is the value seen by combinational
//! evaluation and reported on outputs; `next` is the register-captured value
//! waiting to be latched into `current` at the start of the following cycle.
//! Both start at `X`.

use gatesim_common::Logic;
use gatesim_netlist::{ArenaId, NetId};

/// Current and next values for every net, indexed by [`NetId`].
#[derive(Clone, Debug)]
pub struct StateStore {
    current: Vec<Logic>,
    next: Vec<Logic>,
}

impl StateStore {
    /// Creates a store for `net_count` nets, all `X`.
    pub fn new(net_count: usize) -> Self {
        Self {
            current: vec![Logic::X; net_count],
            next: vec![Logic::X; net_count],
        }
    }

    /// Number of nets tracked.
    pub fn len(&self) -> usize {
        self.current.len()
    }

    /// Returns `true` if the store tracks no nets.
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// The current value of `net`.
    pub fn current(&self, net: NetId) -> Logic {
        self.current[net.index()]
    }

    /// Sets the current value of `net`, returning `true` if it changed.
    pub fn set_current(&mut self, net: NetId, value: Logic) -> bool {
        let slot = &mut self.current[net.index()];
        let changed = *slot != value;
        *slot = value;
        changed
    }

    /// The pending next value of `net`.
    pub fn next(&self, net: NetId) -> Logic {
        self.next[net.index()]
    }

    /// Sets the pending next value of `net`.
    pub fn set_next(&mut self, net: NetId, value: Logic) {
        self.next[net.index()] = value;
    }

    /// All current values in net ID order.
    pub fn current_values(&self) -> &[Logic] {
        &self.current
    }

    /// Resets every current and next value to `X`.
    pub fn reset(&mut self) {
        self.current.fill(Logic::X);
        self.next.fill(Logic::X);
    }
}
