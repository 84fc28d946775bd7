//! # Folio Showcase
//!
//! The project showcase of a portfolio site: an auto-advancing featured
//! carousel, a category-filterable project grid, a detail modal, and an
//! image lightbox nested inside the modal.
//!
//! # Architecture: One-Way Data Flow
//!
//! ```text
//! catalog.toml → Catalog → filter → ShowcaseState ──view──▶ ShowcaseView ──render──▶ HTML
//!                                         ▲
//!                          clicks, ticks ─┘  (ShowcaseController)
//! ```
//!
//! - The **catalog** is loaded once and never changes.
//! - The **filter** layer is pure: categories, filtered lists, index wrap-around.
//! - The **controller** owns one [`state::ShowcaseState`] value and replaces
//!   it whole on every event. Timer ticks arrive on a channel and are applied
//!   on the owning thread, so a click and a tick never interleave.
//! - The **view** and **render** layers are pure projections of that state.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Project records and lightbox images |
//! | [`catalog`] | Ordered project store, `catalog.toml` loading and validation |
//! | [`filter`] | Category derivation, grid filtering, featured-index arithmetic |
//! | [`state`] | Showcase state value and its event transitions |
//! | [`view`] | Render contract derived from catalog + state |
//! | [`ticker`] | Cancellable auto-advance timer |
//! | [`controller`] | Owns state and timer; exposes the event contract |
//! | [`render`] | Maud HTML rendering and snapshot output |
//! | [`config`] | `config.toml` loading, merging, validation, CSS variables |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## The Carousel Ignores the Filter
//!
//! The featured carousel always cycles over the full catalog. Filtering only
//! narrows the grid below it, so exploring categories never yanks the hero
//! slide around.
//!
//! ## Manual Navigation Leaves the Timer Alone
//!
//! Next, prev and dot clicks set the index without touching the timer
//! schedule, so an auto-advance can follow shortly after a manual one. Set
//! `carousel.restart_on_navigate = true` to restart the interval instead.
//!
//! ## Selection by Id
//!
//! The open project is stored as its id rather than a copy of the record, so
//! the state stays small, serializable, and can only name catalog entries.

pub mod catalog;
pub mod config;
pub mod controller;
pub mod filter;
pub mod output;
pub mod render;
pub mod state;
pub mod ticker;
pub mod types;
pub mod view;

#[cfg(test)]
pub(crate) mod test_helpers;
