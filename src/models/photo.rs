//! Location photo model

use serde::{Deserialize, Serialize};

/// A representative photo for the selected location
///
/// Replaced on each successful fetch or periodic refresh; not cleared between
/// city switches until the next fetch resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    /// Provider-assigned photo identifier
    pub id: String,
    /// Image URL
    pub url: String,
}
