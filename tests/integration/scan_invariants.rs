//! Invariants every scanner must hold: pruning, caps, and bounded ranges

use std::fs;

use excavate::scan::{search_repo_patterns, ScanConfig, ScanDomain};

use super::helpers::*;

#[test]
fn test_no_domain_reports_pruned_directories() {
    let temp_dir = sample_repo();
    let config = ScanConfig::new(temp_dir.path());

    for domain in ScanDomain::ALL {
        let report = domain.run(&config).to_string();
        for pruned in ["node_modules", "/dist/", "/.git/", "/build/", "Hidden"] {
            assert!(
                !report.contains(pruned),
                "{domain} reported content under {pruned}: {report}"
            );
        }
    }
}

#[test]
fn test_every_domain_finds_its_evidence() {
    let temp_dir = sample_repo();
    let config = ScanConfig::new(temp_dir.path());

    let db = ScanDomain::DbSchema.run(&config).to_string();
    assert!(db.contains("user.ts"));

    let endpoints = ScanDomain::Endpoints.run(&config).to_string();
    assert!(endpoints.contains("https://api.example.com/users"));

    let validators = ScanDomain::Validators.run(&config).to_string();
    assert!(validators.contains("signup.ts"));

    let routes = ScanDomain::UiRoutes.run(&config).to_string();
    assert!(routes.contains("next_route_file"));
    assert!(routes.contains("app/dashboard/page.tsx"));

    let visual = ScanDomain::VisualIdentity.run(&config).to_string();
    assert!(visual.contains("theme.css"));

    let contracts = ScanDomain::ApiContracts.run(&config).to_string();
    assert!(contracts.contains("/users/{id}"));
}

#[test]
fn test_max_files_caps_distinct_paths() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    for i in 0..10 {
        write_file(temp_dir.path(), &format!("src/m{i}.ts"), "export const a = 1;\n");
    }
    let config = ScanConfig::new(temp_dir.path()).with_max_files(3);

    let report = search_repo_patterns(&config, &["export const"]);
    let mut paths: Vec<&str> = report.matches.iter().map(|m| m.path.as_str()).collect();
    paths.dedup();
    assert_eq!(paths.len(), 3);
}

#[test]
fn test_max_matches_per_file_is_respected() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let body: String = (0..20).map(|i| format!("export const v{i} = {i};\n")).collect();
    write_file(temp_dir.path(), "a.ts", &body);
    write_file(temp_dir.path(), "b.ts", "export const only = 1;\n");
    let config = ScanConfig::new(temp_dir.path()).with_max_matches_per_file(4);

    let report = search_repo_patterns(&config, &["export const"]);
    let in_a = report.matches.iter().filter(|m| m.path.ends_with("a.ts")).count();
    let in_b = report.matches.iter().filter(|m| m.path.ends_with("b.ts")).count();
    assert_eq!(in_a, 4);
    assert_eq!(in_b, 1);
}

#[test]
fn test_context_window_stays_inside_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    write_file(temp_dir.path(), "short.ts", "export const a = 1;\nlet b;\nexport const c = 3;");
    let config = ScanConfig::new(temp_dir.path()).with_context_lines(10);

    let report = search_repo_patterns(&config, &["export const"]);
    assert_eq!(report.matches.len(), 2);
    for m in &report.matches {
        assert_eq!(m.line_start, 1);
        assert_eq!(m.line_end, 3);
        assert!(m.code_snippet.starts_with("export const a"));
    }
}

#[test]
fn test_scans_are_deterministic() {
    let temp_dir = sample_repo();
    let config = ScanConfig::new(temp_dir.path());

    for domain in ScanDomain::ALL {
        assert_eq!(domain.run(&config), domain.run(&config), "{domain} is not deterministic");
    }
}

#[test]
fn test_binary_and_oversized_files_are_skipped() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let mut binary = b"export const a = 1;\n".to_vec();
    binary.push(0);
    fs::write(temp_dir.path().join("blob.ts"), binary).unwrap();
    write_file(temp_dir.path(), "big.ts", &"export const a = 1;\n".repeat(100));
    write_file(temp_dir.path(), "ok.ts", "export const a = 1;\n");
    let config = ScanConfig::new(temp_dir.path()).with_max_file_bytes(200);

    let report = search_repo_patterns(&config, &["export const"]);
    assert_eq!(report.matches.len(), 1);
    assert!(report.matches[0].path.ends_with("ok.ts"));
}
