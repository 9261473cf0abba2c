//! Source dialect detection and attribute-tree parsing.
//!
//! Detection runs in priority order: a top-level `outbounds` list is the
//! multi-node JSON dialect; top-level `auth` plus `server` with no
//! `outbounds` is a single Hysteria2 client config; a top-level `proxies`
//! list is the YAML proxy-list dialect. Everything else is unusable.

use serde_json::Value;

/// The structurally distinct source formats a feed can arrive in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceDialect {
    /// Multi-node JSON with a top-level `outbounds` list.
    Outbounds,
    /// A single Hysteria2 client config object.
    Hysteria2Single,
    /// YAML with a top-level `proxies` list.
    ClashProxies,
}

/// One proxy node's raw configuration plus the dialect it came from.
#[derive(Debug, Clone)]
pub struct RawNode {
    pub dialect: SourceDialect,
    pub attrs: Value,
}

/// Parse one raw body into attribute-tree nodes.
///
/// Never raises to the caller: unrecognized or malformed input yields an
/// empty list, a normal outcome when processing arbitrary third-party
/// feeds.
pub fn parse_document(body: &str) -> Vec<RawNode> {
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        if let Some(outbounds) = json.get("outbounds").and_then(Value::as_array) {
            return outbounds
                .iter()
                .cloned()
                .map(|attrs| RawNode {
                    dialect: SourceDialect::Outbounds,
                    attrs,
                })
                .collect();
        }
        if json.get("auth").is_some() && json.get("server").is_some() {
            return vec![RawNode {
                dialect: SourceDialect::Hysteria2Single,
                attrs: json,
            }];
        }
    }

    if let Ok(yaml) = serde_yaml::from_str::<serde_yaml::Value>(body) {
        if let Some(proxies) = yaml.get("proxies").and_then(|v| v.as_sequence()) {
            let mut nodes = Vec::new();
            for proxy in proxies {
                // Non-string mapping keys cannot cross into the JSON
                // value model; such entries are skipped.
                if let Ok(attrs) = serde_json::to_value(proxy) {
                    nodes.push(RawNode {
                        dialect: SourceDialect::ClashProxies,
                        attrs,
                    });
                }
            }
            return nodes;
        }
    }

    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_outbounds() {
        let body = r#"{"outbounds": [{"protocol": "vless"}, {"protocol": "trojan"}]}"#;
        let nodes = parse_document(body);
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].dialect, SourceDialect::Outbounds);
    }

    #[test]
    fn test_detect_hysteria2_single() {
        let body = r#"{"auth": "secret", "server": "example.com:443"}"#;
        let nodes = parse_document(body);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].dialect, SourceDialect::Hysteria2Single);
    }

    #[test]
    fn test_outbounds_takes_priority_over_auth_server() {
        let body = r#"{"auth": "x", "server": "y", "outbounds": [{"protocol": "vmess"}]}"#;
        let nodes = parse_document(body);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].dialect, SourceDialect::Outbounds);
    }

    #[test]
    fn test_detect_clash_proxies() {
        let body = "proxies:\n  - type: trojan\n    server: 1.2.3.4\n    port: 443\n";
        let nodes = parse_document(body);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].dialect, SourceDialect::ClashProxies);
        assert_eq!(nodes[0].attrs["type"], "trojan");
    }

    #[test]
    fn test_malformed_input_yields_empty() {
        assert!(parse_document("{not json").is_empty());
        assert!(parse_document("just some text\nwith lines").is_empty());
        assert!(parse_document("").is_empty());
        // Well-formed but not a recognized dialect.
        assert!(parse_document(r#"{"inbounds": []}"#).is_empty());
    }
}
