//! Ordered alias-path resolution over attribute trees.
//!
//! Source dialects spell the same canonical field many ways: camelCase
//! versus snake_case versus kebab-case, nested under `settings.vnext`
//! versus flat at the top level. Each canonical field owns one ordered
//! list of dotted accessor paths, evaluated top-to-bottom over the
//! attribute tree; the first path resolving to a non-empty value wins.
//! Keeping the lists here makes the alias resolution auditable in one
//! place and testable without any extractor involved.

use serde_json::Value;

/// Generic server address.
pub const SERVER: &[&str] = &["server", "address", "settings.servers.0.address"];

/// Generic server port.
pub const PORT: &[&str] = &["port", "server_port", "settings.servers.0.port"];

/// VLESS/VMess server address; the nested vnext shape is tried first.
pub const VNEXT_SERVER: &[&str] = &["settings.vnext.0.address", "server", "address"];

/// VLESS/VMess server port.
pub const VNEXT_PORT: &[&str] = &["settings.vnext.0.port", "port", "server_port"];

/// VLESS/VMess user id.
pub const VNEXT_UUID: &[&str] = &["settings.vnext.0.users.0.id", "uuid", "id"];

pub const FLOW: &[&str] = &["settings.vnext.0.users.0.flow", "flow"];

/// Declared stream transport type.
pub const NETWORK: &[&str] = &["streamSettings.network", "network", "transport.type"];

pub const VLESS_SNI: &[&str] = &[
    "streamSettings.realitySettings.serverName",
    "streamSettings.realitySettings.server_name",
    "tls.reality.serverName",
    "tls.reality.server_name",
    "tls.server_name",
    "servername",
    "sni",
];

pub const VLESS_PUBLIC_KEY: &[&str] = &[
    "streamSettings.realitySettings.publicKey",
    "streamSettings.realitySettings.public_key",
    "tls.reality.publicKey",
    "tls.reality.public_key",
    "reality-opts.public-key",
];

pub const VLESS_SHORT_ID: &[&str] = &[
    "streamSettings.realitySettings.shortId",
    "streamSettings.realitySettings.short_id",
    "tls.reality.shortId",
    "tls.reality.short_id",
    "reality-opts.short-id",
];

pub const VLESS_FINGERPRINT: &[&str] = &[
    "streamSettings.realitySettings.fingerprint",
    "tls.reality.fingerprint",
    "tls.utls.fingerprint",
    "client-fingerprint",
];

pub const VLESS_SPIDER_X: &[&str] = &[
    "streamSettings.realitySettings.spiderX",
    "tls.reality.spiderX",
];

/// Plain TLS server name used by the non-VLESS protocols.
pub const SNI: &[&str] = &["sni", "servername", "tls.server_name"];

pub const INSECURE: &[&str] = &["skip-cert-verify", "insecure", "allowInsecure", "tls.insecure"];

pub const ALPN: &[&str] = &["alpn", "tls.alpn"];

/// Walk one dotted path. Numeric segments index into arrays.
pub fn lookup<'a>(node: &'a Value, path: &str) -> Option<&'a Value> {
    let mut cur = node;
    for seg in path.split('.') {
        cur = match cur {
            Value::Object(map) => map.get(seg)?,
            Value::Array(arr) => arr.get(seg.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(cur)
}

/// First path yielding a non-empty string; numbers are stringified.
pub fn pick_str<S: AsRef<str>>(node: &Value, paths: &[S]) -> Option<String> {
    for path in paths {
        if let Some(v) = lookup(node, path.as_ref()) {
            match v {
                Value::String(s) if !s.is_empty() => return Some(s.clone()),
                Value::Number(n) => return Some(n.to_string()),
                _ => {}
            }
        }
    }
    None
}

/// First path yielding a usable port, in numeric or string form.
pub fn pick_port(node: &Value, paths: &[&str]) -> Option<u16> {
    for path in paths {
        if let Some(v) = lookup(node, path) {
            match v {
                Value::Number(n) => {
                    if let Some(p) = n.as_u64() {
                        if p > 0 && p <= u16::MAX as u64 {
                            return Some(p as u16);
                        }
                    }
                }
                Value::String(s) => {
                    if let Ok(p) = s.parse::<u16>() {
                        if p > 0 {
                            return Some(p);
                        }
                    }
                }
                _ => {}
            }
        }
    }
    None
}

/// First path yielding a flag. Accepts booleans, `1`, and the string
/// forms `"1"`/`"true"`. Unlike the string and port pickers, the first
/// *present* value wins even when false: an explicit `false` is a
/// meaningful setting, not an empty value to fall through.
pub fn pick_bool(node: &Value, paths: &[&str]) -> bool {
    for path in paths {
        if let Some(v) = lookup(node, path) {
            match v {
                Value::Bool(b) => return *b,
                Value::Number(n) => return n.as_i64() == Some(1),
                Value::String(s) => return s == "1" || s.eq_ignore_ascii_case("true"),
                _ => {}
            }
        }
    }
    false
}

/// Comma-join a list value, or pass a scalar string through.
pub fn pick_list_joined(node: &Value, paths: &[&str]) -> Option<String> {
    for path in paths {
        if let Some(v) = lookup(node, path) {
            match v {
                Value::Array(items) => {
                    let joined = items
                        .iter()
                        .filter_map(|i| i.as_str())
                        .collect::<Vec<_>>()
                        .join(",");
                    if !joined.is_empty() {
                        return Some(joined);
                    }
                }
                Value::String(s) if !s.is_empty() => return Some(s.clone()),
                _ => {}
            }
        }
    }
    None
}
