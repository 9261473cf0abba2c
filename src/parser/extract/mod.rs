//! Per-protocol extractors.
//!
//! Each extractor reads one attribute tree and returns either a complete
//! canonical record or nothing. A missing mandatory field is the
//! expected "not applicable" path, never an error: the node is skipped
//! and processing continues. Dispatch is a closed match over
//! [`ProxyType`].

pub mod hysteria;
pub mod shadowsocks;
pub mod trojan;
pub mod tuic;
pub mod vless;
pub mod vmess;

use log::debug;

use crate::models::{ProxyNode, ProxyType};
use crate::parser::dialect::{RawNode, SourceDialect};
use crate::parser::fields::pick_str;

/// Extract the canonical record for one raw node, or nothing when the
/// node is unusable.
pub fn extract_node(raw: &RawNode) -> Option<ProxyNode> {
    if raw.dialect == SourceDialect::Hysteria2Single {
        return hysteria::extract_hysteria2_single(&raw.attrs);
    }

    let tag = pick_str(&raw.attrs, &["protocol", "type"])?;
    let proxy_type = ProxyType::from_tag(&tag)?;

    // Hysteria v1 entries in Clash lists are excluded as a matter of
    // policy, no matter how complete their fields are.
    if proxy_type == ProxyType::Hysteria && raw.dialect == SourceDialect::ClashProxies {
        debug!("dropping clash hysteria v1 node");
        return None;
    }

    match proxy_type {
        ProxyType::Vless => vless::extract_vless(&raw.attrs),
        ProxyType::VMess => vmess::extract_vmess(&raw.attrs),
        ProxyType::Shadowsocks => shadowsocks::extract_shadowsocks(&raw.attrs),
        ProxyType::Trojan => trojan::extract_trojan(&raw.attrs),
        ProxyType::Hysteria => hysteria::extract_hysteria(&raw.attrs),
        ProxyType::Hysteria2 => hysteria::extract_hysteria2(&raw.attrs),
        ProxyType::Tuic => tuic::extract_tuic(&raw.attrs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clash_hysteria_v1_is_always_dropped() {
        let raw = RawNode {
            dialect: SourceDialect::ClashProxies,
            attrs: json!({
                "type": "hysteria",
                "server": "1.2.3.4",
                "port": 443,
                "auth-str": "complete",
                "sni": "example.com"
            }),
        };
        assert!(extract_node(&raw).is_none());
    }

    #[test]
    fn test_outbound_hysteria_v1_survives() {
        let raw = RawNode {
            dialect: SourceDialect::Outbounds,
            attrs: json!({
                "protocol": "hysteria",
                "server": "1.2.3.4",
                "port": 443,
                "auth-str": "complete"
            }),
        };
        let node = extract_node(&raw).unwrap();
        assert_eq!(node.proxy_type, ProxyType::Hysteria);
        assert_eq!(node.credential, "complete");
    }

    #[test]
    fn test_unknown_protocol_contributes_nothing() {
        let raw = RawNode {
            dialect: SourceDialect::ClashProxies,
            attrs: json!({"type": "wireguard", "server": "1.2.3.4", "port": 51820}),
        };
        assert!(extract_node(&raw).is_none());
    }
}
