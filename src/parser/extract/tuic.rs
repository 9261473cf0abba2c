//! TUIC extraction. Both the uuid and the password are mandatory; the
//! link credential is `uuid:password`, matching the URI userinfo. The
//! tuning parameters get protocol defaults when a feed omits them.

use serde_json::Value;

use crate::models::{ProxyNode, ProxyType};
use crate::parser::fields::{self, pick_bool, pick_list_joined, pick_port, pick_str};
use crate::utils::string::cut_at_whitespace;

pub fn extract_tuic(attrs: &Value) -> Option<ProxyNode> {
    let uuid = pick_str(attrs, &["uuid", "settings.uuid"])?;
    let uuid = cut_at_whitespace(&uuid).to_string();
    if uuid.is_empty() {
        return None;
    }
    let password = pick_str(attrs, &["password", "settings.password"])?;
    let server = pick_str(attrs, fields::SERVER)?;
    let port = pick_port(attrs, fields::PORT)?;

    let mut node = ProxyNode::new(ProxyType::Tuic, server, port, format!("{uuid}:{password}"));
    node.sni = pick_str(attrs, fields::SNI);
    node.allow_insecure = pick_bool(attrs, fields::INSECURE);
    node.alpn = Some(pick_list_joined(attrs, fields::ALPN).unwrap_or_else(|| "h3".to_string()));
    node.congestion_control = Some(
        pick_str(attrs, &["congestion_control", "congestion-controller", "congestion-control"])
            .unwrap_or_else(|| "bbr".to_string()),
    );
    node.udp_relay_mode = Some(
        pick_str(attrs, &["udp_relay_mode", "udp-relay-mode"])
            .unwrap_or_else(|| "native".to_string()),
    );
    Some(node)
}
