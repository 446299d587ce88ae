//! Node identity used in collector logs.
//!
//! Example log addr: 0x7f3a5c012340  =>  NodeId("0x7f3a5c012340")
//!
//! The address is kept verbatim: two spellings of the same pointer are two
//! different nodes. We derive ordering so it can be used in BTreeSet/Map.

use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn new(addr: impl Into<String>) -> Self {
        Self(addr.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(addr: &str) -> Self {
        Self::new(addr)
    }
}
