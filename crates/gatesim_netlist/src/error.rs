//! Errors raised while building or loading a netlist.

/// Errors that can occur while constructing a [`Netlist`](crate::Netlist).
#[derive(Debug, thiserror::Error)]
pub enum NetlistError {
    /// The netlist file could not be read.
    #[error("failed to read netlist: {0}")]
    Io(#[from] std::io::Error),

    /// The interchange document is not valid JSON or has the wrong shape.
    #[error("failed to parse netlist: {0}")]
    Parse(String),

    /// Two nets share a name.
    #[error("duplicate net '{0}'")]
    DuplicateNet(String),

    /// Two elements share a name.
    #[error("duplicate element '{0}'")]
    DuplicateElement(String),

    /// An element or output list references a net name that was never declared.
    #[error("unknown net '{net}' referenced by {context}")]
    UnknownNet {
        /// The undeclared net name.
        net: String,
        /// Where the reference appeared.
        context: String,
    },

    /// A net ID does not belong to the netlist under construction.
    #[error("net id {0} is out of range")]
    NetOutOfRange(u32),

    /// A net would be driven by more than one element.
    #[error("net '{net}' is driven by both '{first}' and '{second}'")]
    MultipleDrivers {
        /// The contested net.
        net: String,
        /// The element already driving it.
        first: String,
        /// The element that tried to drive it as well.
        second: String,
    },
}
