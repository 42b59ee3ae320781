//! Nets: wires with at most one driver and an ordered consumer list.

use crate::ids::{ElementId, NetId};
use gatesim_common::Ident;

/// A wire in the netlist.
///
/// A net without a driver is a primary input. A net whose consumer list is
/// empty, or whose first entry is `None`, is a primary output. The `None`
/// entry is how an explicitly exported net that also feeds gates is marked.
#[derive(Clone, Debug)]
pub struct Net {
    /// This net's ID (declaration order).
    pub id: NetId,
    /// Interned net name.
    pub name: Ident,
    /// The element driving this net, if any.
    pub driver: Option<ElementId>,
    /// Consuming elements in connection order; `None` marks an external sink.
    pub sinks: Vec<Option<ElementId>>,
}

impl Net {
    /// Creates an unconnected net.
    pub fn new(id: NetId, name: Ident) -> Self {
        Self {
            id,
            name,
            driver: None,
            sinks: Vec::new(),
        }
    }

    /// Returns `true` if no element drives this net.
    pub fn is_primary_input(&self) -> bool {
        self.driver.is_none()
    }

    /// Returns `true` if this net has no consumers or its first consumer is absent.
    pub fn is_primary_output(&self) -> bool {
        matches!(self.sinks.first(), None | Some(None))
    }

    /// Iterates over the elements reading this net, skipping external sinks.
    pub fn consumers(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.sinks.iter().filter_map(|s| *s)
    }
}
