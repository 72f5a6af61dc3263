use serde::{Deserialize, Serialize};
use std::fmt;

/// Version of a discovered node, totally ordered by (major, minor).
///
/// A node file without a version suffix carries the default `(0, 0)`;
/// the engine does not distinguish an explicit `_0_0` suffix from an
/// absent one.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl Version {
    pub fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// True for the unversioned value `(0, 0)`.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
