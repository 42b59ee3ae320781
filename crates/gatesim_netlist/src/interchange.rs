//! JSON interchange document for netlists.
//!
//! The document lists net names (their order fixes net IDs), the nets exported
//! as primary outputs, and the elements in declaration order:
//!
//! ```json
//! {
//!   "nets": ["a", "b", "y"],
//!   "outputs": ["y"],
//!   "elements": [
//!     { "name": "g0", "kind": "AND", "inputs": ["a", "b"], "outputs": ["y"] }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::element::ElementKind;
use crate::error::NetlistError;
use crate::ids::NetId;
use crate::netlist::{Netlist, NetlistBuilder};

/// Serializable description of a whole netlist.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetlistDoc {
    /// Net names in ID order.
    pub nets: Vec<String>,
    /// Nets exported as primary outputs even if they feed elements.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<String>,
    /// Elements in declaration order.
    #[serde(default)]
    pub elements: Vec<ElementDoc>,
}

/// Serializable description of one element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElementDoc {
    /// Unique element name.
    pub name: String,
    /// Kind name, e.g. `"AND"` or `"DFF"`.
    pub kind: String,
    /// Input net names in pin order.
    #[serde(default)]
    pub inputs: Vec<String>,
    /// Output net names in pin order.
    #[serde(default)]
    pub outputs: Vec<String>,
}

impl NetlistDoc {
    /// Parses a document from JSON text.
    pub fn from_json(text: &str) -> Result<Self, NetlistError> {
        serde_json::from_str(text).map_err(|e| NetlistError::Parse(e.to_string()))
    }

    /// Renders the document as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> String {
        // Plain strings and vectors always serialize.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Builds a [`Netlist`] from this document.
    pub fn into_netlist(self) -> Result<Netlist, NetlistError> {
        let mut builder = NetlistBuilder::new();
        for name in &self.nets {
            builder.add_net(name)?;
        }

        for element in &self.elements {
            let context = format!("element '{}'", element.name);
            let inputs = resolve_nets(&builder, &element.inputs, &context)?;
            let outputs = resolve_nets(&builder, &element.outputs, &context)?;
            builder.add_element(
                &element.name,
                ElementKind::parse(&element.kind),
                &inputs,
                &outputs,
            )?;
        }

        let outputs = resolve_nets(&builder, &self.outputs, "the output list")?;
        for net in outputs {
            builder.mark_output(net)?;
        }

        Ok(builder.build())
    }

    /// Describes an existing netlist.
    ///
    /// Nets carrying an external-sink marker are listed under `outputs`.
    pub fn from_netlist(netlist: &Netlist) -> Self {
        let nets = netlist
            .nets()
            .map(|n| netlist.net_name(n.id).to_string())
            .collect();
        let outputs = netlist
            .nets()
            .filter(|n| n.sinks.first() == Some(&None))
            .map(|n| netlist.net_name(n.id).to_string())
            .collect();
        let elements = netlist
            .elements()
            .map(|e| ElementDoc {
                name: netlist.element_name(e.id).to_string(),
                kind: e.kind.name().to_string(),
                inputs: e
                    .inputs
                    .iter()
                    .map(|&n| netlist.net_name(n).to_string())
                    .collect(),
                outputs: e
                    .outputs
                    .iter()
                    .map(|&n| netlist.net_name(n).to_string())
                    .collect(),
            })
            .collect();
        Self {
            nets,
            outputs,
            elements,
        }
    }
}

fn resolve_nets(
    builder: &NetlistBuilder,
    names: &[String],
    context: &str,
) -> Result<Vec<NetId>, NetlistError> {
    names
        .iter()
        .map(|name| {
            builder.net_id(name).ok_or_else(|| NetlistError::UnknownNet {
                net: name.clone(),
                context: context.to_string(),
            })
        })
        .collect()
}

/// Parses a netlist from JSON text.
pub fn parse_netlist_json(text: &str) -> Result<Netlist, NetlistError> {
    NetlistDoc::from_json(text)?.into_netlist()
}

/// Reads and parses a JSON netlist file.
pub fn load_netlist(path: &Path) -> Result<Netlist, NetlistError> {
    let text = std::fs::read_to_string(path)?;
    parse_netlist_json(&text)
}
