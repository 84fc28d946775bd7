//! HTML rendering of the showcase.
//!
//! The render layer is a pure function from a [`ShowcaseView`] and the config
//! to [`Markup`]. Interactive controls carry `data-action` attributes naming
//! the controller event they trigger, so a page shell can wire clicks back
//! to [`crate::controller::ShowcaseController`]:
//!
//! | `data-action`    | Event                                   |
//! |------------------|-----------------------------------------|
//! | `prev` / `next`  | carousel arrows                         |
//! | `jump`           | dot indicator (`data-index`)            |
//! | `set-filter`     | filter tab (`data-filter`)              |
//! | `open-detail`    | "View Case Study" or grid card (`data-project`) |
//! | `close-detail`   | modal close button and backdrop         |
//! | `open-lightbox`  | modal images (`data-src`, `data-alt`)   |
//! | `close-lightbox` | lightbox close button and backdrop      |
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating
//! with automatic escaping. Long descriptions are Markdown, converted with
//! `pulldown-cmark`.
//!
//! Catalog content is trusted. Titles, labels and links go through maud's
//! escaping, but raw HTML inside `full_description` passes through the
//! Markdown conversion unchanged and is spliced in as-is.

use crate::catalog::Catalog;
use crate::config::{self, GridConfig, ShowcaseConfig};
use crate::filter::{self, category_of};
use crate::state::ShowcaseState;
use crate::types::{LightboxImage, ProjectRecord};
use crate::view::{Dot, FeaturedSlide, FilterTab, Grid, ShowcaseView};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");

/// Files written by [`write_snapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub page: PathBuf,
    pub state: PathBuf,
}

/// Write `index.html` and `state.json` for `state` into `output_dir`.
pub fn write_snapshot(
    catalog: &Catalog,
    state: &ShowcaseState,
    config: &ShowcaseConfig,
    output_dir: &Path,
) -> Result<Snapshot, RenderError> {
    fs::create_dir_all(output_dir)?;

    let view = ShowcaseView::project(catalog, state);
    let page = output_dir.join("index.html");
    fs::write(&page, render_page(&view, config).into_string())?;

    let state_path = output_dir.join("state.json");
    fs::write(&state_path, serde_json::to_string_pretty(state)?)?;

    Ok(Snapshot {
        page,
        state: state_path,
    })
}

/// Stylesheet: config colors followed by the static base styles.
pub fn stylesheet(config: &ShowcaseConfig) -> String {
    format!("{}\n\n{}", config::generate_color_css(&config.colors), CSS_STATIC)
}

// ============================================================================
// Page
// ============================================================================

pub fn render_page(view: &ShowcaseView<'_>, config: &ShowcaseConfig) -> Markup {
    let modal_open = view.detail.is_some();
    let content = html! {
        main.showcase {
            header.showcase-header {
                h1 { (config.site.heading) }
            }
            (featured_carousel(view.featured, &view.dots))
            (filter_bar(&view.filters))
            (project_grid(&view.grid, &config.grid))
        }
        @if let Some(record) = view.detail {
            (detail_modal(record))
        }
        @if let Some(image) = view.lightbox {
            (lightbox(image))
        }
    };
    base_document(
        &config.site.title,
        &stylesheet(config),
        modal_open.then_some("modal-open"),
        content,
    )
}

fn base_document(title: &str, css: &str, body_class: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body class=[body_class] {
                (content)
            }
        }
    }
}

// ============================================================================
// Carousel
// ============================================================================

fn featured_carousel(featured: Option<FeaturedSlide<'_>>, dots: &[Dot]) -> Markup {
    html! {
        section.carousel aria-roledescription="carousel" {
            @match featured {
                Some(slide) => {
                    article.slide data-index=(slide.index) {
                        div.slide-image {
                            img src=(slide.record.main_image) alt=(slide.record.title);
                            (type_badges(slide.record))
                        }
                        div.slide-body {
                            h2 { (slide.record.title) }
                            p.slide-description { (slide.record.description) }
                            (tech_list(&slide.record.technologies))
                            button.primary data-action="open-detail" data-project=(slide.record.id) {
                                "View Case Study"
                            }
                        }
                    }
                    button.carousel-arrow.prev data-action="prev" aria-label="Previous project" { "‹" }
                    button.carousel-arrow.next data-action="next" aria-label="Next project" { "›" }
                    div.dots {
                        @for dot in dots {
                            button.dot.active[dot.active]
                                data-action="jump"
                                data-index=(dot.index)
                                aria-label={ "Show project " (dot.index + 1) } {}
                        }
                    }
                }
                None => {
                    p.carousel-empty { "No projects to feature yet." }
                }
            }
        }
    }
}

fn type_badges(record: &ProjectRecord) -> Markup {
    html! {
        div.badges {
            span.badge.type-badge { (record.project_type) }
            span.badge.year-badge { (record.year) }
        }
    }
}

fn tech_list(technologies: &[String]) -> Markup {
    html! {
        ul.tech-list {
            @for tech in technologies {
                li.tech { (tech) }
            }
        }
    }
}

// ============================================================================
// Filter bar and grid
// ============================================================================

fn filter_bar(tabs: &[FilterTab]) -> Markup {
    html! {
        nav.filter-bar {
            @for tab in tabs {
                button.filter-tab.active[tab.active]
                    data-action="set-filter"
                    data-filter=(tab.filter.label())
                    aria-pressed=(if tab.active { "true" } else { "false" }) {
                    (tab.filter.label())
                    " "
                    span.filter-count { "(" (tab.count) ")" }
                }
            }
        }
    }
}

fn project_grid(grid: &Grid<'_>, settings: &GridConfig) -> Markup {
    html! {
        section.project-grid {
            @match grid {
                Grid::Cards(cards) => {
                    @for record in cards {
                        (project_card(record, settings.max_card_technologies))
                    }
                }
                Grid::Empty(filter) => {
                    p.grid-empty data-filter=(filter.label()) { (settings.empty_message) }
                }
            }
        }
    }
}

fn project_card(record: &ProjectRecord, max_technologies: usize) -> Markup {
    let badges = filter::card_badges(record, max_technologies);
    html! {
        article.card
            data-action="open-detail"
            data-project=(record.id)
            data-category=(category_of(record).label()) {
            div.card-image {
                img src=(record.main_image) alt=(record.title) loading="lazy";
                (type_badges(record))
                h3.card-title { (record.title) }
            }
            div.card-body {
                p.card-description { (record.description) }
                ul.tech-list {
                    @for tech in badges.shown {
                        li.tech { (tech) }
                    }
                    @if badges.hidden > 0 {
                        li.tech.tech-more { "+" (badges.hidden) }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Detail modal and lightbox
// ============================================================================

fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut body_html = String::new();
    md_html::push_html(&mut body_html, parser);
    body_html
}

fn detail_modal(record: &ProjectRecord) -> Markup {
    html! {
        div.modal role="dialog" aria-modal="true" aria-labelledby="modal-title" {
            div.modal-backdrop data-action="close-detail" {}
            div.modal-content {
                button.modal-close data-action="close-detail" aria-label="Close" { "×" }
                div.modal-hero data-action="open-lightbox" data-src=(record.main_image) data-alt=(record.title) {
                    img src=(record.main_image) alt=(record.title);
                    (type_badges(record))
                }
                h2 #modal-title { (record.title) }
                div.full-description {
                    (PreEscaped(markdown_to_html(&record.full_description)))
                }
                @if let Some(contribution) = &record.contribution {
                    section.contribution {
                        h3 { "My Contribution" }
                        p { strong { "Role: " } (contribution.role) }
                        p { strong { "Team: " } (contribution.team) }
                    }
                }
                @if !record.technologies.is_empty() {
                    section.technologies {
                        h3 { "Technologies Used" }
                        (tech_list(&record.technologies))
                    }
                }
                @if !record.features.is_empty() {
                    section.features {
                        h3 { "Key Features" }
                        ul {
                            @for feature in &record.features {
                                li { (feature) }
                            }
                        }
                    }
                }
                @if !record.sub_images.is_empty() {
                    section.screenshots {
                        h3 { "Screenshots" }
                        div.screenshot-grid {
                            @for shot in &record.sub_images {
                                figure.screenshot data-action="open-lightbox" data-src=(shot.url) data-alt=(shot.caption) {
                                    img src=(shot.url) alt=(shot.caption) loading="lazy";
                                    figcaption { (shot.caption) }
                                }
                            }
                        }
                    }
                }
                @if !record.pdf_reports.is_empty() {
                    section.reports {
                        h3 { "Reports & Documentation" }
                        @for pdf in &record.pdf_reports {
                            a.report href=(pdf.url) target="_blank" rel="noopener noreferrer" { (pdf.name) }
                        }
                    }
                }
                @if record.live_link.is_some() || record.github_link.is_some() {
                    div.links {
                        @if let Some(url) = &record.live_link {
                            a.primary href=(url) target="_blank" rel="noopener noreferrer" { "View Live Site" }
                        }
                        @if let Some(url) = &record.github_link {
                            a.secondary href=(url) target="_blank" rel="noopener noreferrer" { "View on GitHub" }
                        }
                    }
                }
            }
        }
    }
}

fn lightbox(image: &LightboxImage) -> Markup {
    html! {
        div.lightbox role="dialog" aria-modal="true" {
            div.lightbox-backdrop data-action="close-lightbox" {}
            button.lightbox-close data-action="close-lightbox" aria-label="Close image" { "×" }
            figure.lightbox-frame {
                img src=(image.src) alt=(image.alt);
                figcaption { (image.alt) }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
