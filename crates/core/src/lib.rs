pub mod config;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod model;

pub use config::DiscoveryConfig;
pub use discovery::discover_nodes;
pub use discovery::identifier::{split_node_identifier, SplitIdentifier};
pub use discovery::walker::discover_files;
pub use error::{NodescopeError, Result};
pub use model::{DiscoveredUri, DiscoveryResult, Version};
