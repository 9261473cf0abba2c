use std::fs;

use sublink::pipeline::{parse_source_list, run};

#[cfg(test)]
mod output_tests {
    use super::*;

    #[test]
    fn test_run_writes_pools_and_merged_file() {
        let dir = tempfile::tempdir().unwrap();

        let outbounds = dir.path().join("outbounds.json");
        fs::write(
            &outbounds,
            r#"{"outbounds": [
                {"type": "trojan", "password": "pw", "server": "1.2.3.4", "port": 443},
                {"type": "vless", "uuid": "u", "server": "5.6.7.8", "port": 443}
            ]}"#,
        )
        .unwrap();

        let clash = dir.path().join("clash.yaml");
        fs::write(
            &clash,
            "proxies:\n  - type: trojan\n    password: pw2\n    server: 9.9.9.9\n    port: 443\n",
        )
        .unwrap();

        let sources = vec![
            outbounds.to_string_lossy().into_owned(),
            clash.to_string_lossy().into_owned(),
        ];
        let outdir = dir.path().join("out");
        run(&sources, "Node", None, &outdir).unwrap();

        let merged = fs::read_to_string(outdir.join("merged.txt")).unwrap();
        let lines: Vec<&str> = merged.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("trojan://pw@1.2.3.4:443"));
        assert!(lines[1].starts_with("vless://u@5.6.7.8:443"));
        assert!(lines[2].starts_with("trojan://pw2@9.9.9.9:443"));

        let trojan_pool = fs::read_to_string(outdir.join("trojan.txt")).unwrap();
        assert_eq!(trojan_pool.lines().count(), 2);
        let vless_pool = fs::read_to_string(outdir.join("vless.txt")).unwrap();
        assert_eq!(vless_pool.lines().count(), 1);

        // No pool file for protocols that produced nothing.
        assert!(!outdir.join("tuic.txt").exists());
    }

    #[test]
    fn test_failed_source_does_not_abort_the_run() {
        let dir = tempfile::tempdir().unwrap();

        let good = dir.path().join("good.json");
        fs::write(
            &good,
            r#"{"outbounds": [{"type": "trojan", "password": "pw", "server": "ok.example", "port": 443}]}"#,
        )
        .unwrap();

        let sources = vec![
            dir.path().join("missing.json").to_string_lossy().into_owned(),
            good.to_string_lossy().into_owned(),
        ];
        let outdir = dir.path().join("out");
        run(&sources, "Node", None, &outdir).unwrap();

        let merged = fs::read_to_string(outdir.join("merged.txt")).unwrap();
        assert_eq!(merged.lines().count(), 1);
        assert!(merged.contains("ok.example"));
    }

    #[test]
    fn test_empty_source_list_still_writes_empty_merged_file() {
        let dir = tempfile::tempdir().unwrap();
        let outdir = dir.path().join("out");
        run(&[], "Node", None, &outdir).unwrap();

        let merged = fs::read_to_string(outdir.join("merged.txt")).unwrap();
        assert!(merged.is_empty());
    }

    #[test]
    fn test_source_list_parsing() {
        let list = "# comment\nhttps://a.example/sub\n\nlocal/path.yaml\n";
        assert_eq!(
            parse_source_list(list),
            vec!["https://a.example/sub", "local/path.yaml"]
        );
    }
}
