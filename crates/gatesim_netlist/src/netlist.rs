//! The netlist graph and its builder.

use std::collections::HashMap;

use gatesim_common::{Ident, Interner};

use crate::arena::Arena;
use crate::element::{Element, ElementKind};
use crate::error::NetlistError;
use crate::ids::{ElementId, NetId};
use crate::net::Net;

/// An immutable gate-level netlist.
///
/// Construct with [`NetlistBuilder`] or load from JSON via
/// [`load_netlist`](crate::load_netlist). Once built, the graph is only read:
/// the simulator borrows it for the whole run.
#[derive(Debug)]
pub struct Netlist {
    interner: Interner,
    nets: Arena<NetId, Net>,
    elements: Arena<ElementId, Element>,
    net_names: HashMap<Ident, NetId>,
    element_names: HashMap<Ident, ElementId>,
}

impl Netlist {
    /// Returns the net with the given ID.
    ///
    /// # Panics
    ///
    /// Panics if the ID does not belong to this netlist.
    pub fn net(&self, id: NetId) -> &Net {
        self.nets.get(id)
    }

    /// Returns the element with the given ID.
    ///
    /// # Panics
    ///
    /// Panics if the ID does not belong to this netlist.
    pub fn element(&self, id: ElementId) -> &Element {
        self.elements.get(id)
    }

    /// Iterates over all nets in ascending ID order.
    pub fn nets(&self) -> impl Iterator<Item = &Net> {
        self.nets.values()
    }

    /// Iterates over all elements in declaration order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }

    /// Returns the number of nets.
    pub fn net_count(&self) -> usize {
        self.nets.len()
    }

    /// Returns the number of elements.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Returns the name of a net.
    pub fn net_name(&self, id: NetId) -> &str {
        self.interner.resolve(self.net(id).name)
    }

    /// Returns the name of an element.
    pub fn element_name(&self, id: ElementId) -> &str {
        self.interner.resolve(self.element(id).name)
    }

    /// Looks up a net by name.
    pub fn find_net(&self, name: &str) -> Option<NetId> {
        let ident = self.interner.lookup(name)?;
        self.net_names.get(&ident).copied()
    }

    /// Looks up an element by name.
    pub fn find_element(&self, name: &str) -> Option<ElementId> {
        let ident = self.interner.lookup(name)?;
        self.element_names.get(&ident).copied()
    }

    /// Returns the interner holding this netlist's names.
    pub fn interner(&self) -> &Interner {
        &self.interner
    }
}

/// Incremental constructor for a [`Netlist`].
///
/// Nets receive IDs in the order they are added. Every mutation validates its
/// arguments first, so a failed call leaves the builder unchanged.
///
/// ```ignore
/// let mut b = NetlistBuilder::new();
/// let a = b.add_net("a")?;
/// let y = b.add_net("y")?;
/// b.add_element("inv", ElementKind::Not, &[a], &[y])?;
/// let netlist = b.build();
/// ```
#[derive(Debug, Default)]
pub struct NetlistBuilder {
    interner: Interner,
    nets: Arena<NetId, Net>,
    elements: Arena<ElementId, Element>,
    net_names: HashMap<Ident, NetId>,
    element_names: HashMap<Ident, ElementId>,
}

impl NetlistBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a new, unconnected net.
    pub fn add_net(&mut self, name: &str) -> Result<NetId, NetlistError> {
        let ident = self.interner.intern(name);
        if self.net_names.contains_key(&ident) {
            return Err(NetlistError::DuplicateNet(name.to_string()));
        }
        let id = self.nets.alloc(Net::new(self.nets.next_id(), ident));
        self.net_names.insert(ident, id);
        Ok(id)
    }

    /// Returns the ID of a previously declared net.
    pub fn net_id(&self, name: &str) -> Option<NetId> {
        let ident = self.interner.lookup(name)?;
        self.net_names.get(&ident).copied()
    }

    /// Adds an element reading `inputs` and driving `outputs`.
    ///
    /// The element is appended to every input net's consumer list and becomes
    /// the driver of every output net. Fails if a net is unknown or already
    /// driven.
    pub fn add_element(
        &mut self,
        name: &str,
        kind: ElementKind,
        inputs: &[NetId],
        outputs: &[NetId],
    ) -> Result<ElementId, NetlistError> {
        let ident = self.interner.intern(name);
        if self.element_names.contains_key(&ident) {
            return Err(NetlistError::DuplicateElement(name.to_string()));
        }
        for &net in inputs.iter().chain(outputs) {
            if !self.nets.contains(net) {
                return Err(NetlistError::NetOutOfRange(net.as_raw()));
            }
        }
        for &net in outputs {
            if let Some(first) = self.nets[net].driver {
                return Err(NetlistError::MultipleDrivers {
                    net: self.interner.resolve(self.nets[net].name).to_string(),
                    first: self
                        .interner
                        .resolve(self.elements[first].name)
                        .to_string(),
                    second: name.to_string(),
                });
            }
        }

        let id = self.elements.next_id();
        for &net in inputs {
            self.nets.get_mut(net).sinks.push(Some(id));
        }
        for &net in outputs {
            self.nets.get_mut(net).driver = Some(id);
        }
        self.elements.alloc(Element {
            id,
            name: ident,
            kind,
            inputs: inputs.to_vec(),
            outputs: outputs.to_vec(),
        });
        self.element_names.insert(ident, id);
        Ok(id)
    }

    /// Exports a net as a primary output even if elements consume it.
    ///
    /// Places an external-sink marker at the front of the consumer list.
    /// Marking the same net twice has no further effect.
    pub fn mark_output(&mut self, net: NetId) -> Result<(), NetlistError> {
        if !self.nets.contains(net) {
            return Err(NetlistError::NetOutOfRange(net.as_raw()));
        }
        let sinks = &mut self.nets.get_mut(net).sinks;
        if sinks.first() != Some(&None) {
            sinks.insert(0, None);
        }
        Ok(())
    }

    /// Finishes construction.
    pub fn build(self) -> Netlist {
        Netlist {
            interner: self.interner,
            nets: self.nets,
            elements: self.elements,
            net_names: self.net_names,
            element_names: self.element_names,
        }
    }
}
