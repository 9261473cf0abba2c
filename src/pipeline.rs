//! End-to-end run: source list, fetched bodies, parsed nodes, canonical
//! records, deduplicated and labeled links on disk.
//!
//! Processing is single-threaded and sequential. A timeout or parse
//! failure on one source is isolated; the run always completes and
//! writes whatever records were successfully collected.

use std::path::Path;

use log::{info, warn};

use crate::fetch::load_source;
use crate::generator::aggregate::{Aggregator, EncodedLink};
use crate::parser::dialect::parse_document;
use crate::parser::extract::extract_node;

/// Parse a newline-delimited source list. Comment lines starting with
/// `#` and blank lines are ignored.
pub fn parse_source_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Convert already-fetched bodies in order. Exposed separately so the
/// conversion core stays testable without any I/O.
pub fn convert_bodies(bodies: &[&str], prefix: &str) -> Vec<EncodedLink> {
    let mut aggregator = Aggregator::new(prefix);
    for body in bodies {
        for raw in parse_document(body) {
            if let Some(node) = extract_node(&raw) {
                aggregator.push(&node);
            }
        }
    }
    aggregator.into_links()
}

/// Process every source in order and write the output files. A failed
/// fetch or an unusable body skips that source only; no error here is
/// fatal except failure to write the outputs themselves.
pub fn run(
    sources: &[String],
    prefix: &str,
    timeout_secs: Option<u64>,
    outdir: &Path,
) -> std::io::Result<()> {
    let mut aggregator = Aggregator::new(prefix);

    for source in sources {
        let body = match load_source(source, timeout_secs) {
            Ok(body) => body,
            Err(e) => {
                warn!("skipping source {source}: {e}");
                continue;
            }
        };

        let raw_nodes = parse_document(&body);
        if raw_nodes.is_empty() {
            warn!("no usable nodes in {source}");
            continue;
        }

        let before = aggregator.links().len();
        for raw in &raw_nodes {
            if let Some(node) = extract_node(raw) {
                aggregator.push(&node);
            }
        }
        info!(
            "{source}: kept {} of {} nodes",
            aggregator.links().len() - before,
            raw_nodes.len()
        );
    }

    aggregator.write_outputs(outdir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source_list_skips_comments_and_blanks() {
        let content = "# header\nhttps://a.example/sub\n\n  # indented comment\nhttps://b.example/sub  \n";
        assert_eq!(
            parse_source_list(content),
            vec!["https://a.example/sub", "https://b.example/sub"]
        );
    }
}
