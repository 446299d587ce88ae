//! Explain why objects in a cycle collector graph dump are still alive.
//!
//! Pipeline: parse the log ([`log`]), collapse and reverse the graph
//! ([`graph`]), search back from a target to its roots ([`roots`]), and
//! optionally fold descriptor chains before drawing ([`merge`], [`render`]).

pub mod diagnostics;
pub mod graph;
pub mod log;
pub mod merge;
pub mod render;
pub mod roots;

pub type Result<T> = anyhow::Result<T>;
