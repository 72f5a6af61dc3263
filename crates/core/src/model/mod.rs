pub mod discovery;
pub mod version;

pub use discovery::{DiscoveredUri, DiscoveryResult};
pub use version::Version;
