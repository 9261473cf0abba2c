pub mod proxy;

pub use proxy::{IdentityKey, ProxyNode, ProxyType, RealityOpts, Transport};
