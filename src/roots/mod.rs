//! Finding the roots that keep an object alive.

pub mod search;
pub mod select;

pub use search::{
    Hop, RootFinder, RootSearch, RootingPath, SearchOptions, SearchOutcome, find_rooting_paths,
};
pub use select::{TargetSpec, select_targets};
