//! Shadowsocks extraction. The link credential is the base64 of
//! `method:password`, computed here so identity comparison and encoding
//! share one string.

use serde_json::Value;

use crate::models::{ProxyNode, ProxyType};
use crate::parser::fields::{self, pick_port, pick_str};
use crate::utils::base64::base64_encode;

pub fn extract_shadowsocks(attrs: &Value) -> Option<ProxyNode> {
    let method = pick_str(attrs, &["method", "cipher", "settings.servers.0.method"])?;
    let password = pick_str(attrs, &["password", "settings.servers.0.password"])?;
    let server = pick_str(attrs, fields::SERVER)?;
    let port = pick_port(attrs, fields::PORT)?;

    let credential = base64_encode(&format!("{method}:{password}"));
    Some(ProxyNode::new(ProxyType::Shadowsocks, server, port, credential))
}
