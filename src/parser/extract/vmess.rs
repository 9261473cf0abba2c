//! VMess extraction. Only the uuid, endpoint, and TLS toggle matter:
//! the whole configuration travels inside the base64 descriptor built
//! at encode time.

use serde_json::Value;

use crate::models::{ProxyNode, ProxyType};
use crate::parser::fields::{self, pick_bool, pick_port, pick_str};
use crate::utils::string::cut_at_whitespace;

pub fn extract_vmess(attrs: &Value) -> Option<ProxyNode> {
    let uuid = pick_str(attrs, fields::VNEXT_UUID)?;
    let uuid = cut_at_whitespace(&uuid).to_string();
    if uuid.is_empty() {
        return None;
    }
    let server = pick_str(attrs, fields::VNEXT_SERVER)?;
    let port = pick_port(attrs, fields::VNEXT_PORT)?;

    let mut node = ProxyNode::new(ProxyType::VMess, server, port, uuid);
    if tls_enabled(attrs) {
        node.transport.security = "tls".to_string();
    }
    Some(node)
}

fn tls_enabled(attrs: &Value) -> bool {
    pick_bool(attrs, &["tls.enabled", "tls"])
        || pick_str(attrs, &["streamSettings.security", "security"]).as_deref() == Some("tls")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_basic_vmess() {
        let attrs = json!({"uuid": "id-1", "server": "5.6.7.8", "port": 10086, "tls": true});
        let node = extract_vmess(&attrs).unwrap();
        assert_eq!(node.credential, "id-1");
        assert_eq!(node.transport.security, "tls");
    }

    #[test]
    fn test_vmess_without_tls() {
        let attrs = json!({"uuid": "id-1", "server": "5.6.7.8", "port": 10086});
        let node = extract_vmess(&attrs).unwrap();
        assert!(node.transport.security.is_empty());
    }

    #[test]
    fn test_vmess_requires_uuid() {
        let attrs = json!({"server": "5.6.7.8", "port": 10086});
        assert!(extract_vmess(&attrs).is_none());
    }
}
