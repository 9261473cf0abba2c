//! VLESS extraction.
//!
//! Two mutually exclusive structural shapes occur in the wild: the
//! nested `settings.vnext[0].users[0].id` form and the flat
//! `uuid`/`server`/`server_port` form. The ordered alias tables in
//! [`fields`] try the nested shape first and fall back to the flat one.

use serde_json::Value;

use crate::models::{ProxyNode, ProxyType, RealityOpts};
use crate::parser::fields::{self, lookup, pick_bool, pick_port, pick_str};
use crate::utils::string::cut_at_whitespace;

pub fn extract_vless(attrs: &Value) -> Option<ProxyNode> {
    let uuid = pick_str(attrs, fields::VNEXT_UUID)?;
    let uuid = cut_at_whitespace(&uuid).to_string();
    if uuid.is_empty() {
        return None;
    }
    let server = pick_str(attrs, fields::VNEXT_SERVER)?;
    let port = pick_port(attrs, fields::VNEXT_PORT)?;

    let network = pick_str(attrs, fields::NETWORK).unwrap_or_else(|| "tcp".to_string());
    let security = resolve_security(attrs);

    let mut node = ProxyNode::new(ProxyType::Vless, server, port, uuid);
    node.transport.network = network.clone();
    node.transport.security = security.clone();

    match network.as_str() {
        "ws" => {
            node.transport.path = transport_param(attrs, "ws", &["path"]);
        }
        "xhttp" => {
            node.transport.path = transport_param(attrs, "xhttp", &["path"]);
            node.transport.mode = transport_param(attrs, "xhttp", &["mode"]);
        }
        "grpc" => {
            node.transport.service_name = transport_param(
                attrs,
                "grpc",
                &["serviceName", "service_name", "grpc-service-name"],
            );
        }
        _ => {}
    }

    node.sni = pick_str(attrs, fields::VLESS_SNI);
    node.fingerprint = pick_str(attrs, fields::VLESS_FINGERPRINT);

    if security == "reality" {
        if node.fingerprint.is_none() {
            // Reality handshakes need a TLS fingerprint; chrome is the
            // conventional default when a feed omits it.
            node.fingerprint = Some("chrome".to_string());
        }
        node.reality = Some(RealityOpts {
            public_key: pick_str(attrs, fields::VLESS_PUBLIC_KEY),
            short_id: pick_str(attrs, fields::VLESS_SHORT_ID),
            spider_x: pick_str(attrs, fields::VLESS_SPIDER_X),
        });
    }

    // Vision-style flow does not ride on xhttp streams; suppress it there.
    if network != "xhttp" {
        node.flow = pick_str(attrs, fields::FLOW);
    }

    Some(node)
}

/// An explicit `security` string wins; otherwise Reality material or a
/// truthy TLS block decides.
fn resolve_security(attrs: &Value) -> String {
    if let Some(s) = pick_str(attrs, &["streamSettings.security", "security"]) {
        return s;
    }
    if lookup(attrs, "tls.reality.enabled")
        .and_then(Value::as_bool)
        .unwrap_or(false)
        || lookup(attrs, "reality-opts").is_some_and(|v| !v.is_null())
        || pick_str(attrs, fields::VLESS_PUBLIC_KEY).is_some()
    {
        return "reality".to_string();
    }
    if pick_bool(attrs, &["tls.enabled", "tls"]) {
        return "tls".to_string();
    }
    "none".to_string()
}

/// Transport parameters live under a settings block named after the
/// network type (`ws` -> `wsSettings`), with the Clash `-opts` spelling
/// and a bare `transport` object as fallbacks.
fn transport_param(attrs: &Value, network: &str, keys: &[&str]) -> Option<String> {
    for key in keys {
        let paths = [
            format!("streamSettings.{network}Settings.{key}"),
            format!("{network}Settings.{key}"),
            format!("{network}-opts.{key}"),
            format!("transport.{key}"),
        ];
        if let Some(v) = pick_str(attrs, &paths) {
            return Some(v);
        }
    }
    None
}
