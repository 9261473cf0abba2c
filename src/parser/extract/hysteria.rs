//! Hysteria v1 and Hysteria2 extraction, including the single-object
//! Hysteria2 client config dialect with its compound endpoint field.

use serde_json::Value;

use crate::models::{ProxyNode, ProxyType};
use crate::parser::fields::{self, pick_bool, pick_list_joined, pick_port, pick_str};

pub fn extract_hysteria(attrs: &Value) -> Option<ProxyNode> {
    let auth = pick_str(attrs, &["auth-str", "auth_str", "auth"])?;
    let server = pick_str(attrs, fields::SERVER)?;
    let port = pick_port(attrs, fields::PORT)?;

    let mut node = ProxyNode::new(ProxyType::Hysteria, server, port, auth);
    node.sni = pick_str(attrs, fields::SNI);
    node.allow_insecure = pick_bool(attrs, fields::INSECURE);
    node.alpn = pick_list_joined(attrs, fields::ALPN);
    Some(node)
}

pub fn extract_hysteria2(attrs: &Value) -> Option<ProxyNode> {
    let auth = pick_str(attrs, &["auth", "password", "auth-str"])?;
    let server = pick_str(attrs, fields::SERVER)?;
    let port = pick_port(attrs, fields::PORT)?;

    let mut node = ProxyNode::new(ProxyType::Hysteria2, server, port, auth);
    node.sni = pick_str(attrs, fields::SNI);
    node.allow_insecure = pick_bool(attrs, fields::INSECURE);
    Some(node)
}

/// Single-object Hysteria2 client config. `server` is a compound
/// `host:port[,port2-port3,...]` endpoint; extra port ranges cannot be
/// represented in a link and are dropped.
pub fn extract_hysteria2_single(attrs: &Value) -> Option<ProxyNode> {
    let auth = pick_str(attrs, &["auth"])?;
    let endpoint = pick_str(attrs, &["server"])?;
    let (server, port) = split_endpoint(&endpoint)?;

    let mut node = ProxyNode::new(ProxyType::Hysteria2, server, port, auth);
    node.sni = pick_str(attrs, &["tls.sni", "sni"]);
    node.allow_insecure = pick_bool(attrs, &["tls.insecure", "insecure"]);
    Some(node)
}

/// Take the part before the first comma, then split host from port on
/// the last colon so IPv6 literals survive.
fn split_endpoint(endpoint: &str) -> Option<(String, u16)> {
    let first = endpoint.split(',').next().unwrap_or(endpoint);
    let (host, port) = first.rsplit_once(':')?;
    if host.is_empty() {
        return None;
    }
    let port = port.parse::<u16>().ok().filter(|p| *p > 0)?;
    Some((host.to_string(), port))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hysteria_v1_auth_aliases_and_alpn() {
        let attrs = json!({
            "auth-str": "token",
            "server": "h.example",
            "port": 36712,
            "alpn": ["hysteria", "h3"],
            "skip-cert-verify": true
        });
        let node = extract_hysteria(&attrs).unwrap();
        assert_eq!(node.credential, "token");
        assert_eq!(node.alpn.as_deref(), Some("hysteria,h3"));
        assert!(node.allow_insecure);

        let attrs = json!({"auth": "token", "server": "h.example", "port": 36712});
        assert!(extract_hysteria(&attrs).is_some());
    }

    #[test]
    fn test_hysteria2_list_dialect() {
        let attrs = json!({
            "type": "hysteria2",
            "password": "pw",
            "server": "h2.example",
            "port": 443,
            "sni": "h2.example"
        });
        let node = extract_hysteria2(&attrs).unwrap();
        assert_eq!(node.credential, "pw");
        assert_eq!(node.sni.as_deref(), Some("h2.example"));
    }

    #[test]
    fn test_single_object_compound_endpoint() {
        let attrs = json!({
            "auth": "secret",
            "server": "h2.example:443,30000-40000,50000",
            "tls": {"sni": "h2.example", "insecure": true}
        });
        let node = extract_hysteria2_single(&attrs).unwrap();
        assert_eq!(node.server, "h2.example");
        assert_eq!(node.port, 443);
        assert_eq!(node.sni.as_deref(), Some("h2.example"));
        assert!(node.allow_insecure);
    }

    #[test]
    fn test_single_object_ipv6_endpoint() {
        let attrs = json!({"auth": "a", "server": "2001:db8::1:443"});
        let node = extract_hysteria2_single(&attrs).unwrap();
        assert_eq!(node.server, "2001:db8::1");
        assert_eq!(node.port, 443);
    }

    #[test]
    fn test_split_endpoint_rejects_garbage() {
        assert!(split_endpoint("no-port").is_none());
        assert!(split_endpoint(":443").is_none());
        assert!(split_endpoint("host:notaport").is_none());
        assert!(split_endpoint("host:0").is_none());
    }
}
