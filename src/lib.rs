pub use crate::bipartite::*;
pub use crate::config::*;
pub use crate::edge::*;
pub use crate::error::{Error, Result};
pub use crate::graph::*;
pub use crate::report::*;
pub use crate::select::*;

pub mod bipartite;
pub mod config;
pub mod edge;
pub mod error;
pub mod graph;
pub mod logger;
pub mod report;
pub mod select;
