//! Showcase state and its transitions.
//!
//! [`ShowcaseState`] is a plain value. Every event produces a new state via
//! [`ShowcaseState::apply`]; the controller swaps it in whole, so a transition
//! is never observed half-done.
//!
//! ## Invariants
//!
//! - `featured_index` indexes the catalog whenever the catalog is non-empty.
//! - `selected_project` only names ids present in the catalog.
//! - `lightbox_image` is `Some` only while `selected_project` is `Some`.
//! - Filter changes touch nothing but `type_filter`.

use crate::catalog::Catalog;
use crate::filter::{TypeFilter, next_featured_index, prev_featured_index};
use crate::types::LightboxImage;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowcaseState {
    pub featured_index: usize,
    pub type_filter: TypeFilter,
    /// Id of the project open in the detail modal.
    pub selected_project: Option<u32>,
    /// Image open in the lightbox, nested inside the detail modal.
    pub lightbox_image: Option<LightboxImage>,
}

/// Everything that can change the showcase state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowcaseEvent {
    /// Auto-advance timer fired.
    Tick,
    Next,
    Prev,
    /// Dot indicator clicked.
    Jump(usize),
    SetFilter(TypeFilter),
    /// "View Case Study" on the featured slide, or a grid card click.
    OpenDetail(u32),
    /// Close control or backdrop of the detail modal.
    CloseDetail,
    OpenLightbox(LightboxImage),
    /// Close control or backdrop of the lightbox.
    CloseLightbox,
}

impl ShowcaseEvent {
    /// Whether the user moved the carousel by hand.
    pub fn is_manual_navigation(&self) -> bool {
        matches!(
            self,
            ShowcaseEvent::Next | ShowcaseEvent::Prev | ShowcaseEvent::Jump(_)
        )
    }
}

impl ShowcaseState {
    /// Compute the state that follows `event`.
    ///
    /// Events that cannot apply (navigation on an empty catalog, an
    /// out-of-range jump, an unknown project id, a lightbox with no open
    /// detail) leave the state as it is.
    pub fn apply(&self, event: &ShowcaseEvent, catalog: &Catalog) -> ShowcaseState {
        let len = catalog.len();
        let mut next = self.clone();
        match event {
            ShowcaseEvent::Tick | ShowcaseEvent::Next => {
                next.featured_index = next_featured_index(self.featured_index, len);
            }
            ShowcaseEvent::Prev => {
                next.featured_index = prev_featured_index(self.featured_index, len);
            }
            ShowcaseEvent::Jump(index) => {
                if *index < len {
                    next.featured_index = *index;
                }
            }
            ShowcaseEvent::SetFilter(filter) => {
                next.type_filter = *filter;
            }
            ShowcaseEvent::OpenDetail(id) => {
                if catalog.contains(*id) {
                    if self.selected_project != Some(*id) {
                        next.lightbox_image = None;
                    }
                    next.selected_project = Some(*id);
                }
            }
            ShowcaseEvent::CloseDetail => {
                next.selected_project = None;
                next.lightbox_image = None;
            }
            ShowcaseEvent::OpenLightbox(image) => {
                if self.selected_project.is_some_and(|id| catalog.contains(id)) {
                    next.lightbox_image = Some(image.clone());
                }
            }
            ShowcaseEvent::CloseLightbox => {
                next.lightbox_image = None;
            }
        }
        next
    }

    /// Bring a state from outside (e.g. a saved `state.json`) back within
    /// the invariants for `catalog`.
    pub fn normalized(mut self, catalog: &Catalog) -> ShowcaseState {
        self.featured_index = match catalog.len() {
            0 => 0,
            len => self.featured_index % len,
        };
        if self.selected_project.is_some_and(|id| !catalog.contains(id)) {
            self.selected_project = None;
        }
        if self.selected_project.is_none() {
            self.lightbox_image = None;
        }
        self
    }

    /// Whether the detail modal is open.
    pub fn detail_open(&self) -> bool {
        self.selected_project.is_some()
    }

    pub fn lightbox_open(&self) -> bool {
        self.lightbox_image.is_some()
    }
}
