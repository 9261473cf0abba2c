//! Deduplication, labeling, and output fan-out.
//!
//! One pass over the validated record stream feeds two independent
//! sinks: per-protocol pool files for inspection and one merged
//! subscription file in aggregation order.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::generator::link::encode_link;
use crate::models::{IdentityKey, ProxyNode, ProxyType};

/// Run-scoped set of seen identity keys. The first source to supply a
/// node wins; later repeats are dropped silently.
#[derive(Default)]
pub struct Deduplicator {
    seen: HashSet<IdentityKey>,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the node is new and should be kept.
    pub fn admit(&mut self, node: &ProxyNode) -> bool {
        self.seen.insert(node.identity())
    }
}

/// One finished link with its sequential label.
#[derive(Debug, Clone)]
pub struct EncodedLink {
    pub proxy_type: ProxyType,
    pub label: String,
    pub uri: String,
}

/// Assigns deterministic `<prefix>-NNN` labels and encodes admitted
/// nodes in first-occurrence order across all processed sources.
pub struct Aggregator {
    prefix: String,
    dedup: Deduplicator,
    links: Vec<EncodedLink>,
}

impl Aggregator {
    pub fn new(prefix: &str) -> Self {
        Aggregator {
            prefix: if prefix.is_empty() {
                "Node".to_string()
            } else {
                prefix.to_string()
            },
            dedup: Deduplicator::new(),
            links: Vec::new(),
        }
    }

    /// Admit one candidate record. Duplicates are normal, not errors.
    pub fn push(&mut self, node: &ProxyNode) {
        if !self.dedup.admit(node) {
            debug!(
                "duplicate {} node {}:{} dropped",
                node.proxy_type.as_str(),
                node.server,
                node.port
            );
            return;
        }
        let label = format!("{}-{:03}", self.prefix, self.links.len() + 1);
        let uri = encode_link(node, &label);
        if uri.is_empty() {
            return;
        }
        self.links.push(EncodedLink {
            proxy_type: node.proxy_type,
            label,
            uri,
        });
    }

    pub fn links(&self) -> &[EncodedLink] {
        &self.links
    }

    pub fn into_links(self) -> Vec<EncodedLink> {
        self.links
    }

    /// Write per-protocol pool files plus the merged subscription file.
    /// The merged file is always produced, even when empty, so
    /// downstream consumers never see a missing artifact.
    pub fn write_outputs(&self, outdir: &Path) -> std::io::Result<()> {
        fs::create_dir_all(outdir)?;

        for proxy_type in ProxyType::ALL {
            let pool: Vec<&str> = self
                .links
                .iter()
                .filter(|l| l.proxy_type == proxy_type)
                .map(|l| l.uri.as_str())
                .collect();
            if pool.is_empty() {
                continue;
            }
            let path = outdir.join(format!("{}.txt", proxy_type.as_str()));
            write_lines(&path, &pool)?;
            info!("wrote {} {} links to {}", pool.len(), proxy_type.as_str(), path.display());
        }

        let merged: Vec<&str> = self.links.iter().map(|l| l.uri.as_str()).collect();
        let merged_path = outdir.join("merged.txt");
        write_lines(&merged_path, &merged)?;
        info!("wrote {} links to {}", merged.len(), merged_path.display());
        Ok(())
    }
}

fn write_lines(path: &Path, lines: &[&str]) -> std::io::Result<()> {
    let mut out = String::new();
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    fs::write(path, out)
}
