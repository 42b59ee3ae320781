//! Gate-level netlist graph for the gatesim simulator.
//!
//! A [`Netlist`] is a read-only graph of [`Net`]s (wires) and [`Element`]s
//! (gates and registers), both stored densely and addressed by [`NetId`] and
//! [`ElementId`]. Net ids follow declaration order, which is also the order in
//! which the simulator consumes primary inputs and emits primary outputs.
//!
//! # Modules
//!
//! - `arena`: dense ID-indexed storage
//! - `ids`: `NetId` and `ElementId`
//! - `element`: element kinds and gate records
//! - `net`: wires with driver and consumer lists
//! - `netlist`: the graph and its builder
//! - `interchange`: serde JSON document for netlists
//! - `analysis`: structural queries (primary I/O, registers, feedback loops)

#![warn(missing_docs)]

pub mod analysis;
pub mod arena;
pub mod element;
pub mod error;
pub mod ids;
pub mod interchange;
pub mod net;
pub mod netlist;

pub use analysis::{ArityIssue, ArityProblem};
pub use arena::{Arena, ArenaId};
pub use element::{Element, ElementKind};
pub use error::NetlistError;
pub use ids::{ElementId, NetId};
pub use interchange::{load_netlist, parse_netlist_json, ElementDoc, NetlistDoc};
pub use net::Net;
pub use netlist::{Netlist, NetlistBuilder};
