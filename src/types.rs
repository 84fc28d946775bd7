//! Project records shared by every layer of the showcase.
//!
//! Records are loaded once from `catalog.toml` and never change afterwards.
//! Optional sections (contribution, screenshots, reports, links) are modelled
//! as `Option` or empty `Vec`; whether to show them is a render decision.

use serde::{Deserialize, Serialize};

/// One portfolio project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectRecord {
    /// Unique across the catalog.
    pub id: u32,
    pub title: String,
    /// Free-form label such as "Web Application". See [`crate::filter::category_of`].
    #[serde(rename = "type")]
    pub project_type: String,
    pub year: String,
    /// One-line summary shown on the carousel and grid cards.
    pub description: String,
    /// Long-form Markdown shown in the detail modal.
    pub full_description: String,
    pub main_image: String,
    /// Display order matters.
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contribution: Option<Contribution>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_images: Vec<SubImage>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pdf_reports: Vec<PdfReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contribution {
    pub role: String,
    pub team: String,
}

/// A screenshot shown in the detail modal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubImage {
    pub url: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PdfReport {
    pub name: String,
    pub url: String,
}

/// An image shown full size in the lightbox overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightboxImage {
    pub src: String,
    pub alt: String,
}

impl LightboxImage {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

impl ProjectRecord {
    /// Images the detail modal can open in the lightbox, in display order.
    ///
    /// The main image comes first with the project title as alt text,
    /// followed by each screenshot captioned by its own caption.
    pub fn lightbox_targets(&self) -> Vec<LightboxImage> {
        std::iter::once(LightboxImage::new(&self.main_image, &self.title))
            .chain(
                self.sub_images
                    .iter()
                    .map(|img| LightboxImage::new(&img.url, &img.caption)),
            )
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::project;

    #[test]
    fn lightbox_targets_start_with_main_image() {
        let mut record = project(7, "ChurchMS", "Web Application");
        record.sub_images = vec![SubImage {
            url: "/projects/admin.png".to_string(),
            caption: "Admin Dashboard".to_string(),
        }];

        let targets = record.lightbox_targets();
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].src, record.main_image);
        assert_eq!(targets[0].alt, "ChurchMS");
        assert_eq!(targets[1], LightboxImage::new("/projects/admin.png", "Admin Dashboard"));
    }

    #[test]
    fn optional_sections_default_when_absent() {
        let toml = r#"
id = 1
title = "Faculty Scheduling System"
type = "Desktop Application"
year = "2025"
description = "Scheduling"
full_description = "Long"
main_image = "/projects/main.png"
"#;
        let record: ProjectRecord = toml::from_str(toml).unwrap();
        assert_eq!(record.project_type, "Desktop Application");
        assert!(record.technologies.is_empty());
        assert!(record.contribution.is_none());
        assert!(record.sub_images.is_empty());
        assert!(record.pdf_reports.is_empty());
        assert!(record.live_link.is_none());
    }

    #[test]
    fn unknown_field_rejected() {
        let toml = r#"
id = 1
title = "X"
type = "Web Application"
year = "2025"
description = "d"
full_description = "f"
main_image = "/m.png"
mainImage = "/typo.png"
"#;
        assert!(toml::from_str::<ProjectRecord>(toml).is_err());
    }
}
