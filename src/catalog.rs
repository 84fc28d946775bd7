//! Catalog store: the ordered, immutable list of portfolio projects.
//!
//! ## File Format
//!
//! The catalog lives in `catalog.toml` at the content root, one
//! `[[projects]]` table per project. Table order is display order.
//!
//! ```toml
//! [[projects]]
//! id = 1
//! title = "ChurchMS"
//! type = "Web Application"
//! year = "2025"
//! description = "Church Management System"
//! full_description = "A full-stack **Church Management System** ..."
//! main_image = "/projects/main_image.png"
//! technologies = ["Next.js", "Laravel", "MySQL"]
//! features = ["Member management"]
//!
//! [[projects.sub_images]]
//! url = "/projects/sub_owner_image1.png"
//! caption = "Admin Dashboard"
//! ```
//!
//! ## Validation
//!
//! - Ids must be unique.
//! - A catalog loaded from disk must contain at least one project. An empty
//!   [`Catalog`] built in code is still valid; the controller treats it as
//!   "nothing to feature".

use crate::types::ProjectRecord;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const CATALOG_FILE: &str = "catalog.toml";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Duplicate project id {0}")]
    DuplicateId(u32),
    #[error("Catalog has no projects: {0}")]
    Empty(String),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    projects: Vec<ProjectRecord>,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    projects: Vec<ProjectRecord>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(projects: Vec<ProjectRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for project in &projects {
            if !seen.insert(project.id) {
                return Err(CatalogError::DuplicateId(project.id));
            }
        }
        Ok(Self { projects })
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ProjectRecord> {
        self.projects.get(index)
    }

    pub fn find(&self, id: u32) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.find(id).is_some()
    }
}

/// Parse catalog TOML text. `origin` names the source in error messages.
pub fn parse_catalog(content: &str, origin: &str) -> Result<Catalog, CatalogError> {
    let file: CatalogFile = toml::from_str(content)?;
    if file.projects.is_empty() {
        return Err(CatalogError::Empty(origin.to_string()));
    }
    Catalog::new(file.projects)
}

/// Load `catalog.toml` from the content root.
pub fn load_catalog(root: &Path) -> Result<Catalog, CatalogError> {
    let path = root.join(CATALOG_FILE);
    let content = fs::read_to_string(&path)?;
    parse_catalog(&content, &path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{project, setup_fixtures};
    use tempfile::TempDir;

    #[test]
    fn new_preserves_order() {
        let catalog = Catalog::new(vec![
            project(3, "C", "Web Application"),
            project(1, "A", "Web Application"),
        ])
        .unwrap();
        let ids: Vec<u32> = catalog.projects().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn duplicate_id_rejected() {
        let result = Catalog::new(vec![
            project(1, "A", "Web Application"),
            project(1, "B", "Desktop Application"),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(1))));
    }

    #[test]
    fn empty_catalog_allowed_in_code() {
        let catalog = Catalog::new(vec![]).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.get(0).is_none());
    }

    #[test]
    fn find_by_id() {
        let catalog = Catalog::new(vec![
            project(10, "Ten", "Web Application"),
            project(20, "Twenty", "Web Application"),
        ])
        .unwrap();
        assert_eq!(catalog.find(20).unwrap().title, "Twenty");
        assert!(catalog.contains(10));
        assert!(!catalog.contains(30));
    }

    #[test]
    fn parse_empty_file_is_error() {
        let result = parse_catalog("", "inline");
        assert!(matches!(result, Err(CatalogError::Empty(_))));
    }

    #[test]
    fn parse_invalid_toml_is_error() {
        let result = parse_catalog("[[projects]\nid = ", "inline");
        assert!(matches!(result, Err(CatalogError::Toml(_))));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        assert!(matches!(load_catalog(tmp.path()), Err(CatalogError::Io(_))));
    }

    #[test]
    fn load_fixture_catalog() {
        let tmp = setup_fixtures();
        let catalog = load_catalog(tmp.path()).unwrap();

        assert_eq!(catalog.len(), 3);
        let churchms = catalog.get(0).unwrap();
        assert_eq!(churchms.title, "ChurchMS");
        assert_eq!(churchms.sub_images.len(), 3);
        assert_eq!(churchms.pdf_reports.len(), 2);
        assert_eq!(
            churchms.contribution.as_ref().map(|c| c.role.as_str()),
            Some("Full-stack Developer")
        );
        assert_eq!(catalog.get(1).unwrap().project_type, "Desktop Application");
    }
}
