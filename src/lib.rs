//! Normalize heterogeneous proxy configuration exports into canonical
//! URI subscription links.
//!
//! Two source dialects are understood: JSON "outbound" descriptors
//! (V2Ray/Xray/sing-box family) and YAML proxy lists (Clash family).
//! Both are parsed into a generic attribute tree, normalized into one
//! canonical record per node, deduplicated by physical identity, and
//! serialized back out as protocol URIs.

pub mod error;
pub mod fetch;
pub mod generator;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod utils;

// Re-export the main proxy types for easier access
pub use models::{IdentityKey, ProxyNode, ProxyType};
