//! CLI output formatting.
//!
//! Every entity leads with a positional index and title; details follow on
//! indented context lines:
//!
//! ```text
//! Projects
//! 001 ChurchMS (Web Application, 2025)
//!     Category: Web Development
//!     Technologies: Next.js, Laravel, MySQL, RESTful API
//!     Screenshots: 3
//!     Reports: 2
//!
//! Categories
//!     All: 3
//!     Web Development: 2
//!     Desktop Application: 1
//!     Mobile Application: 0
//! ```
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::catalog::Catalog;
use crate::filter::{TypeFilter, category_of};
use crate::render::Snapshot;
use crate::view::{Grid, ShowcaseView};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

// ============================================================================
// check
// ============================================================================

pub fn format_catalog_output(catalog: &Catalog) -> Vec<String> {
    let mut lines = vec!["Projects".to_string()];

    for (i, project) in catalog.projects().iter().enumerate() {
        lines.push(format!(
            "{} {} ({}, {})",
            format_index(i + 1),
            project.title,
            project.project_type,
            project.year
        ));
        let ctx = indent(1);
        lines.push(format!("{ctx}Category: {}", category_of(project)));
        lines.push(format!("{ctx}{}", truncate(&project.description, 60)));
        if !project.technologies.is_empty() {
            lines.push(format!(
                "{ctx}Technologies: {}",
                project.technologies.join(", ")
            ));
        }
        if !project.sub_images.is_empty() {
            lines.push(format!("{ctx}Screenshots: {}", project.sub_images.len()));
        }
        if !project.pdf_reports.is_empty() {
            lines.push(format!("{ctx}Reports: {}", project.pdf_reports.len()));
        }
    }

    lines.push(String::new());
    lines.push("Categories".to_string());
    for filter in TypeFilter::choices() {
        let count = catalog.projects().iter().filter(|p| filter.matches(p)).count();
        lines.push(format!("{}{}: {}", indent(1), filter, count));
    }
    lines
}

pub fn print_catalog_output(catalog: &Catalog) {
    for line in format_catalog_output(catalog) {
        println!("{}", line);
    }
}

// ============================================================================
// play
// ============================================================================

/// One line per carousel position: `→ 002/003 Faculty Scheduling System`.
pub fn format_featured_line(view: &ShowcaseView<'_>) -> String {
    match view.featured {
        Some(slide) => format!(
            "→ {}/{} {}",
            format_index(slide.index + 1),
            format_index(slide.total),
            slide.record.title
        ),
        None => "→ (no projects)".to_string(),
    }
}

// ============================================================================
// render
// ============================================================================

pub fn format_render_output(view: &ShowcaseView<'_>, snapshot: &Snapshot) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format_featured_line(view));

    let active = view
        .filters
        .iter()
        .find(|tab| tab.active)
        .map(|tab| tab.filter)
        .unwrap_or_default();
    match &view.grid {
        Grid::Cards(cards) => lines.push(format!("Grid [{}]: {} projects", active, cards.len())),
        Grid::Empty(_) => lines.push(format!("Grid [{}]: no results", active)),
    }

    if let Some(detail) = view.detail {
        lines.push(format!("Detail: {}", detail.title));
    }
    if let Some(image) = view.lightbox {
        lines.push(format!("{}Lightbox: {} ({})", indent(1), image.alt, image.src));
    }

    lines.push(format!("Page → {}", snapshot.page.display()));
    lines.push(format!("State → {}", snapshot.state.display()));
    lines
}

pub fn print_render_output(view: &ShowcaseView<'_>, snapshot: &Snapshot) {
    for line in format_render_output(view, snapshot) {
        println!("{}", line);
    }
}
