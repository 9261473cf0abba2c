//! Canonical proxy record definitions
//!
//! Contains the dialect-independent data structures every extractor
//! produces and the link encoder consumes.

/// Represents the type of a proxy.
/// This is the canonical enum used for protocol dispatch across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProxyType {
    Vless,
    VMess,
    Shadowsocks,
    Trojan,
    Hysteria,
    Hysteria2,
    Tuic,
}

impl ProxyType {
    /// Stable lowercase name, used for pool file names.
    pub fn as_str(self) -> &'static str {
        match self {
            ProxyType::Vless => "vless",
            ProxyType::VMess => "vmess",
            ProxyType::Shadowsocks => "shadowsocks",
            ProxyType::Trojan => "trojan",
            ProxyType::Hysteria => "hysteria",
            ProxyType::Hysteria2 => "hysteria2",
            ProxyType::Tuic => "tuic",
        }
    }

    /// Map a declared protocol tag, in any dialect's spelling, onto the enum.
    pub fn from_tag(tag: &str) -> Option<ProxyType> {
        match tag.to_lowercase().as_str() {
            "vless" => Some(ProxyType::Vless),
            "vmess" => Some(ProxyType::VMess),
            "ss" | "shadowsocks" => Some(ProxyType::Shadowsocks),
            "trojan" => Some(ProxyType::Trojan),
            "hysteria" | "hy" => Some(ProxyType::Hysteria),
            "hysteria2" | "hy2" => Some(ProxyType::Hysteria2),
            "tuic" => Some(ProxyType::Tuic),
            _ => None,
        }
    }

    pub const ALL: [ProxyType; 7] = [
        ProxyType::Vless,
        ProxyType::VMess,
        ProxyType::Shadowsocks,
        ProxyType::Trojan,
        ProxyType::Hysteria,
        ProxyType::Hysteria2,
        ProxyType::Tuic,
    ];
}

/// Stream transport riding under the proxy protocol.
#[derive(Debug, Clone, Default)]
pub struct Transport {
    /// tcp / ws / grpc / xhttp
    pub network: String,
    /// none / tls / reality
    pub security: String,
    pub path: Option<String>,
    pub mode: Option<String>,
    pub service_name: Option<String>,
}

/// Reality camouflage parameters.
#[derive(Debug, Clone, Default)]
pub struct RealityOpts {
    pub public_key: Option<String>,
    pub short_id: Option<String>,
    pub spider_x: Option<String>,
}

/// Dialect-independent record for one proxy node. Built once by an
/// extractor, never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ProxyNode {
    pub proxy_type: ProxyType,
    pub server: String,
    pub port: u16,
    /// Credential exactly as the link carries it: uuid, password, auth
    /// string, `base64(method:password)` for Shadowsocks, `uuid:password`
    /// for TUIC.
    pub credential: String,
    pub transport: Transport,
    pub reality: Option<RealityOpts>,
    pub flow: Option<String>,
    pub sni: Option<String>,
    pub fingerprint: Option<String>,
    pub allow_insecure: bool,
    /// Comma-joined ALPN list.
    pub alpn: Option<String>,
    pub congestion_control: Option<String>,
    pub udp_relay_mode: Option<String>,
}

impl ProxyNode {
    pub fn new(proxy_type: ProxyType, server: String, port: u16, credential: String) -> Self {
        ProxyNode {
            proxy_type,
            server,
            port,
            credential,
            transport: Transport::default(),
            reality: None,
            flow: None,
            sni: None,
            fingerprint: None,
            allow_insecure: false,
            alpn: None,
            congestion_control: None,
            udp_relay_mode: None,
        }
    }

    /// The physical identity of the node. Two nodes with equal keys are
    /// the same endpoint no matter which source list they came from.
    pub fn identity(&self) -> IdentityKey {
        IdentityKey {
            proxy_type: self.proxy_type,
            server: self.server.clone(),
            port: self.port,
            credential: self.credential.clone(),
        }
    }
}

/// `(protocol, address, port, credential)` tuple used to detect duplicate
/// nodes across overlapping source lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityKey {
    pub proxy_type: ProxyType,
    pub server: String,
    pub port: u16,
    pub credential: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_normalization() {
        assert_eq!(ProxyType::from_tag("SS"), Some(ProxyType::Shadowsocks));
        assert_eq!(ProxyType::from_tag("hy2"), Some(ProxyType::Hysteria2));
        assert_eq!(ProxyType::from_tag("Hysteria2"), Some(ProxyType::Hysteria2));
        assert_eq!(ProxyType::from_tag("wireguard"), None);
    }

    #[test]
    fn test_identity_equality() {
        let a = ProxyNode::new(ProxyType::Trojan, "1.2.3.4".into(), 443, "pw".into());
        let mut b = ProxyNode::new(ProxyType::Trojan, "1.2.3.4".into(), 443, "pw".into());
        b.sni = Some("irrelevant.example".into());
        assert_eq!(a.identity(), b.identity());

        let c = ProxyNode::new(ProxyType::Trojan, "1.2.3.4".into(), 444, "pw".into());
        assert_ne!(a.identity(), c.identity());
    }
}
