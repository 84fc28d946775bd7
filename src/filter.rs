//! Category derivation, grid filtering, and featured-index arithmetic.
//!
//! Everything here is a pure function of its inputs. The grid is filtered by
//! a presentation-level [`Category`] derived from each record's free-form
//! `type` label; the featured carousel ignores the filter and always cycles
//! over the full catalog.

use crate::types::ProjectRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Presentation bucket a project is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Web Development")]
    WebDevelopment,
    #[serde(rename = "Desktop Application")]
    DesktopApplication,
    #[serde(rename = "Mobile Application")]
    MobileApplication,
}

impl Category {
    /// Every category, in filter-bar order.
    pub const ALL: [Category; 3] = [
        Category::WebDevelopment,
        Category::DesktopApplication,
        Category::MobileApplication,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::WebDevelopment => "Web Development",
            Category::DesktopApplication => "Desktop Application",
            Category::MobileApplication => "Mobile Application",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The grid filter: everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum TypeFilter {
    #[default]
    All,
    Category(Category),
}

impl TypeFilter {
    /// All filter choices, "All" first.
    pub fn choices() -> impl Iterator<Item = TypeFilter> {
        std::iter::once(TypeFilter::All).chain(Category::ALL.into_iter().map(TypeFilter::Category))
    }

    pub fn label(self) -> &'static str {
        match self {
            TypeFilter::All => "All",
            TypeFilter::Category(category) => category.label(),
        }
    }

    pub fn matches(self, record: &ProjectRecord) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Category(category) => category_of(record) == category,
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown filter '{0}' (expected All, Web Development, Desktop Application or Mobile Application)")]
pub struct ParseFilterError(pub String);

impl FromStr for TypeFilter {
    type Err = ParseFilterError;

    /// Labels are matched case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        TypeFilter::choices()
            .find(|choice| choice.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseFilterError(s.to_string()))
    }
}

impl From<TypeFilter> for String {
    fn from(filter: TypeFilter) -> Self {
        filter.label().to_string()
    }
}

impl TryFrom<String> for TypeFilter {
    type Error = ParseFilterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Bucket a record by substring match on its `type` label.
///
/// "desktop" is checked before "mobile"; anything else, SaaS platforms and
/// plain web apps included, is Web Development.
pub fn category_of(record: &ProjectRecord) -> Category {
    category_of_type(&record.project_type)
}

pub fn category_of_type(project_type: &str) -> Category {
    let lowered = project_type.to_lowercase();
    if lowered.contains("desktop") {
        Category::DesktopApplication
    } else if lowered.contains("mobile") {
        Category::MobileApplication
    } else {
        Category::WebDevelopment
    }
}

/// Records passing `filter`, in catalog order.
pub fn filtered_catalog(catalog: &[ProjectRecord], filter: TypeFilter) -> Vec<&ProjectRecord> {
    catalog.iter().filter(|record| filter.matches(record)).collect()
}

/// `(current + 1) mod len`. Returns `current` for an empty catalog.
pub fn next_featured_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return current;
    }
    (current + 1) % len
}

/// `(current - 1 + len) mod len`. Returns `current` for an empty catalog.
pub fn prev_featured_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return current;
    }
    (current % len + len - 1) % len
}

/// Technology badges for a grid card: the first `max` entries plus the count
/// hidden behind a "+N" badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardBadges<'a> {
    pub shown: &'a [String],
    pub hidden: usize,
}

pub fn card_badges(record: &ProjectRecord, max: usize) -> CardBadges<'_> {
    let shown = &record.technologies[..record.technologies.len().min(max)];
    CardBadges {
        shown,
        hidden: record.technologies.len() - shown.len(),
    }
}
