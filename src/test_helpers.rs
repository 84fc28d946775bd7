//! Shared test utilities for the showcase test suite.
//!
//! Builders for minimal project records and catalogs, plus a fixture loader
//! that copies `fixtures/content/` into a temp directory.

use std::path::Path;
use tempfile::TempDir;

use crate::catalog::Catalog;
use crate::types::ProjectRecord;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    for entry in std::fs::read_dir(&fixtures).unwrap() {
        let entry = entry.unwrap();
        std::fs::copy(entry.path(), tmp.path().join(entry.file_name())).unwrap();
    }
    tmp
}

// =========================================================================
// Record builders
// =========================================================================

/// A record with only the required fields filled in.
pub fn project(id: u32, title: &str, project_type: &str) -> ProjectRecord {
    ProjectRecord {
        id,
        title: title.to_string(),
        project_type: project_type.to_string(),
        year: "2025".to_string(),
        description: format!("{title} summary"),
        full_description: format!("{title} in depth"),
        main_image: format!("/projects/{id}.png"),
        technologies: vec!["Rust".to_string()],
        features: vec![],
        contribution: None,
        sub_images: vec![],
        pdf_reports: vec![],
        live_link: None,
        github_link: None,
    }
}

/// Catalog of the given `(title, type)` pairs with ids counting from 1.
pub fn catalog_of(entries: &[(&str, &str)]) -> Catalog {
    let records = entries
        .iter()
        .enumerate()
        .map(|(i, (title, ty))| project(i as u32 + 1, title, ty))
        .collect();
    Catalog::new(records).unwrap()
}

/// Three web projects: A, B, C.
pub fn abc_catalog() -> Catalog {
    catalog_of(&[
        ("A", "Web Application"),
        ("B", "Web Application"),
        ("C", "Web Application"),
    ])
}

/// Titles of a slice of records, for compact assertions.
pub fn titles<'a>(records: &[&'a ProjectRecord]) -> Vec<&'a str> {
    records.iter().map(|r| r.title.as_str()).collect()
}
