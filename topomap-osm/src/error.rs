//! Error type used by the crate.

use thiserror::Error;
use topomap_types::error::TopomapTypesError;

/// Error enum.
#[derive(Debug, Error)]
pub enum TopomapOsmError {
    /// Invalid geometry was produced from the input.
    #[error("invalid geometry: {0}")]
    Geometry(#[from] TopomapTypesError),
    /// The projection could not project the position of a node.
    #[error("failed to project position of node {node_id}")]
    Projection {
        /// Id of the node.
        node_id: i64,
    },
    /// A way was created with less than two nodes.
    #[error("way {way_id} has {count} nodes, but at least 2 are required")]
    WayTooShort {
        /// Id of the way.
        way_id: i64,
        /// Number of nodes given.
        count: usize,
    },
    /// Transformer configuration could not be read.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
