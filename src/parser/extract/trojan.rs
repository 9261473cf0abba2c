//! Trojan extraction.

use serde_json::Value;

use crate::models::{ProxyNode, ProxyType};
use crate::parser::fields::{self, pick_bool, pick_port, pick_str};

pub fn extract_trojan(attrs: &Value) -> Option<ProxyNode> {
    let password = pick_str(attrs, &["password", "settings.servers.0.password"])?;
    let server = pick_str(attrs, fields::SERVER)?;
    let port = pick_port(attrs, fields::PORT)?;

    let mut node = ProxyNode::new(ProxyType::Trojan, server, port, password);
    node.sni = pick_str(attrs, fields::SNI);
    node.allow_insecure = pick_bool(attrs, fields::INSECURE);
    Some(node)
}
