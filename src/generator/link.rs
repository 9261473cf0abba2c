//! Canonical URI encoding per protocol.
//!
//! The emitted strings are the system's only externally stable wire
//! contract: consuming client applications parse them directly, so each
//! protocol follows its grammar exactly, with ordered query parameters
//! and the omit-if-empty rule for optional fields.

use serde::Serialize;

use crate::models::{ProxyNode, ProxyType};
use crate::utils::base64::base64_encode;
use crate::utils::url::url_encode;

/// Compact VMess descriptor; the whole object travels base64-encoded as
/// the link payload, so there is no query string.
#[derive(Serialize)]
struct VmessDescriptor<'a> {
    v: &'static str,
    ps: &'a str,
    add: &'a str,
    port: String,
    id: &'a str,
    aid: &'static str,
    net: &'static str,
    #[serde(rename = "type")]
    header_type: &'static str,
    tls: &'static str,
}

/// Wrap bare IPv6 literals in brackets for the URI authority.
pub fn fix_address(addr: &str) -> String {
    if addr.contains(':') && !addr.starts_with('[') {
        format!("[{addr}]")
    } else {
        addr.to_string()
    }
}

/// Ordered query assembly with the omit-if-empty rule.
#[derive(Default)]
struct QueryBuilder {
    pairs: Vec<(String, String)>,
}

impl QueryBuilder {
    fn new() -> Self {
        QueryBuilder::default()
    }

    fn push(&mut self, key: &str, value: &str) {
        if !value.is_empty() {
            self.pairs.push((key.to_string(), value.to_string()));
        }
    }

    fn push_opt(&mut self, key: &str, value: Option<&String>) {
        if let Some(v) = value {
            self.push(key, v);
        }
    }

    fn push_flag(&mut self, key: &str, flag: bool) {
        if flag {
            self.push(key, "1");
        }
    }

    fn build(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", url_encode(k), url_encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Serialize one canonical record into its protocol's URI grammar.
/// Total over any well-formed record.
pub fn encode_link(node: &ProxyNode, label: &str) -> String {
    match node.proxy_type {
        ProxyType::Vless => encode_vless(node, label),
        ProxyType::VMess => encode_vmess(node, label),
        ProxyType::Shadowsocks => encode_shadowsocks(node, label),
        ProxyType::Trojan => encode_trojan(node, label),
        ProxyType::Hysteria => encode_hysteria(node, label),
        ProxyType::Hysteria2 => encode_hysteria2(node, label),
        ProxyType::Tuic => encode_tuic(node, label),
    }
}

fn encode_vless(node: &ProxyNode, label: &str) -> String {
    let mut q = QueryBuilder::new();
    q.push("encryption", "none");
    let security = if node.transport.security.is_empty() {
        "none"
    } else {
        node.transport.security.as_str()
    };
    q.push("security", security);
    let network = if node.transport.network.is_empty() {
        "tcp"
    } else {
        node.transport.network.as_str()
    };
    q.push("type", network);
    q.push_opt("flow", node.flow.as_ref());
    q.push_opt("sni", node.sni.as_ref());
    q.push_opt("fp", node.fingerprint.as_ref());
    if let Some(reality) = &node.reality {
        q.push_opt("pbk", reality.public_key.as_ref());
        q.push_opt("sid", reality.short_id.as_ref());
        q.push_opt("spx", reality.spider_x.as_ref());
    }
    q.push_opt("path", node.transport.path.as_ref());
    q.push_opt("mode", node.transport.mode.as_ref());
    q.push_opt("serviceName", node.transport.service_name.as_ref());

    format!(
        "vless://{}@{}:{}?{}#{}",
        node.credential,
        fix_address(&node.server),
        node.port,
        q.build(),
        url_encode(label)
    )
}

fn encode_vmess(node: &ProxyNode, label: &str) -> String {
    let descriptor = VmessDescriptor {
        v: "2",
        ps: label,
        add: &node.server,
        port: node.port.to_string(),
        id: &node.credential,
        aid: "0",
        net: "tcp",
        header_type: "none",
        tls: if node.transport.security == "tls" {
            "tls"
        } else {
            ""
        },
    };
    match serde_json::to_string(&descriptor) {
        Ok(json) => format!("vmess://{}", base64_encode(&json)),
        Err(_) => String::new(),
    }
}

fn encode_shadowsocks(node: &ProxyNode, label: &str) -> String {
    format!(
        "ss://{}@{}:{}#{}",
        node.credential,
        fix_address(&node.server),
        node.port,
        url_encode(label)
    )
}

fn encode_trojan(node: &ProxyNode, label: &str) -> String {
    let mut q = QueryBuilder::new();
    q.push_opt("sni", node.sni.as_ref());
    q.push_flag("allowInsecure", node.allow_insecure);

    let mut uri = format!(
        "trojan://{}@{}:{}",
        node.credential,
        fix_address(&node.server),
        node.port
    );
    append_query(&mut uri, &q);
    uri.push('#');
    uri.push_str(&url_encode(label));
    uri
}

fn encode_hysteria(node: &ProxyNode, label: &str) -> String {
    let mut q = QueryBuilder::new();
    q.push("auth", &node.credential);
    q.push_opt("sni", node.sni.as_ref());
    q.push_flag("insecure", node.allow_insecure);
    q.push_opt("alpn", node.alpn.as_ref());

    format!(
        "hysteria://{}:{}?{}#{}",
        fix_address(&node.server),
        node.port,
        q.build(),
        url_encode(label)
    )
}

fn encode_hysteria2(node: &ProxyNode, label: &str) -> String {
    let mut q = QueryBuilder::new();
    q.push_opt("sni", node.sni.as_ref());
    q.push_flag("insecure", node.allow_insecure);

    let mut uri = format!(
        "hysteria2://{}@{}:{}",
        node.credential,
        fix_address(&node.server),
        node.port
    );
    append_query(&mut uri, &q);
    uri.push('#');
    uri.push_str(&url_encode(label));
    uri
}

fn encode_tuic(node: &ProxyNode, label: &str) -> String {
    let mut q = QueryBuilder::new();
    q.push_opt("sni", node.sni.as_ref());
    q.push_opt("alpn", node.alpn.as_ref());
    q.push_flag("insecure", node.allow_insecure);
    q.push_opt("congestion_control", node.congestion_control.as_ref());
    q.push_opt("udp_relay_mode", node.udp_relay_mode.as_ref());

    let mut uri = format!(
        "tuic://{}@{}:{}",
        node.credential,
        fix_address(&node.server),
        node.port
    );
    append_query(&mut uri, &q);
    uri.push('#');
    uri.push_str(&url_encode(label));
    uri
}

fn append_query(uri: &mut String, q: &QueryBuilder) {
    let query = q.build();
    if !query.is_empty() {
        uri.push('?');
        uri.push_str(&query);
    }
}
