//! Showcase view controller.
//!
//! Owns the catalog, the current [`ShowcaseState`], and the auto-advance
//! timer. All mutation goes through `&mut self` on the owning thread: UI
//! events call the event methods directly, timer ticks queue up in a
//! single-slot channel and are applied by [`ShowcaseController::pump`] or
//! [`ShowcaseController::wait_for_tick`]. Each transition replaces the state
//! value in one assignment.
//!
//! ## Lifecycle
//!
//! ```text
//! new()  ──start()──▶  running  ──shutdown() / drop──▶  torn down
//! ```
//!
//! After teardown the timer is joined and the tick receiver is gone, so no
//! tick can reach the state any more. UI events still apply; the controller
//! only stops advancing on its own.

use crate::catalog::Catalog;
use crate::config::CarouselConfig;
use crate::filter::TypeFilter;
use crate::state::{ShowcaseEvent, ShowcaseState};
use crate::ticker::{AutoAdvance, Tick, tick_channel};
use crate::types::LightboxImage;
use crate::view::ShowcaseView;
use log::debug;
use std::sync::mpsc::Receiver;
use std::time::Duration;

pub struct ShowcaseController {
    catalog: Catalog,
    state: ShowcaseState,
    carousel: CarouselConfig,
    timer: Option<AutoAdvance>,
    ticks: Option<Receiver<Tick>>,
}

impl ShowcaseController {
    /// Create an idle controller. Call [`start`](Self::start) to begin auto-advance.
    pub fn new(catalog: Catalog, carousel: CarouselConfig) -> Self {
        Self::with_state(catalog, carousel, ShowcaseState::default())
    }

    /// Create an idle controller resuming from `state`.
    ///
    /// The state is normalized against `catalog` first: the featured index
    /// wraps into range, and a selection the catalog does not contain is
    /// dropped together with its lightbox.
    pub fn with_state(catalog: Catalog, carousel: CarouselConfig, state: ShowcaseState) -> Self {
        let state = state.normalized(&catalog);
        Self {
            catalog,
            state,
            carousel,
            timer: None,
            ticks: None,
        }
    }

    /// Register the auto-advance timer. Does nothing if it is already running.
    pub fn start(&mut self) {
        if self.timer.is_some() {
            return;
        }
        let (tx, rx) = tick_channel();
        self.timer = Some(AutoAdvance::start(self.carousel.interval(), tx));
        self.ticks = Some(rx);
    }

    /// Cancel the timer and discard any pending tick. Idempotent.
    pub fn shutdown(&mut self) {
        if let Some(mut timer) = self.timer.take() {
            timer.cancel();
        }
        self.ticks = None;
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &ShowcaseState {
        &self.state
    }

    /// Render contract for the current state.
    pub fn view(&self) -> ShowcaseView<'_> {
        ShowcaseView::project(&self.catalog, &self.state)
    }

    // =========================================================================
    // Event contract
    // =========================================================================

    /// Apply one event.
    pub fn dispatch(&mut self, event: ShowcaseEvent) {
        let next = self.state.apply(&event, &self.catalog);
        if next != self.state {
            debug!("{event:?}: {:?} -> {:?}", self.state, next);
        }
        self.state = next;

        if event.is_manual_navigation()
            && self.carousel.restart_on_navigate
            && let Some(timer) = &self.timer
        {
            timer.restart();
        }
    }

    pub fn next(&mut self) {
        self.dispatch(ShowcaseEvent::Next);
    }

    pub fn prev(&mut self) {
        self.dispatch(ShowcaseEvent::Prev);
    }

    pub fn jump(&mut self, index: usize) {
        self.dispatch(ShowcaseEvent::Jump(index));
    }

    pub fn set_filter(&mut self, filter: TypeFilter) {
        self.dispatch(ShowcaseEvent::SetFilter(filter));
    }

    pub fn open_detail(&mut self, id: u32) {
        self.dispatch(ShowcaseEvent::OpenDetail(id));
    }

    /// Open the detail modal for the featured project ("View Case Study").
    pub fn open_featured(&mut self) {
        if let Some(id) = self.catalog.get(self.state.featured_index).map(|p| p.id) {
            self.open_detail(id);
        }
    }

    pub fn close_detail(&mut self) {
        self.dispatch(ShowcaseEvent::CloseDetail);
    }

    pub fn open_lightbox(&mut self, src: impl Into<String>, alt: impl Into<String>) {
        self.dispatch(ShowcaseEvent::OpenLightbox(LightboxImage::new(src, alt)));
    }

    pub fn close_lightbox(&mut self) {
        self.dispatch(ShowcaseEvent::CloseLightbox);
    }

    // =========================================================================
    // Timer ticks
    // =========================================================================

    /// Apply the pending tick, if any. Returns the number of ticks applied.
    pub fn pump(&mut self) -> usize {
        let pending = match &self.ticks {
            Some(ticks) => ticks.try_iter().count(),
            None => 0,
        };
        for _ in 0..pending {
            self.dispatch(ShowcaseEvent::Tick);
        }
        pending
    }

    /// Block up to `timeout` for the next tick and apply it.
    ///
    /// Returns `false` on timeout or when the timer is not running.
    pub fn wait_for_tick(&mut self, timeout: Duration) -> bool {
        let received = match &self.ticks {
            Some(ticks) => ticks.recv_timeout(timeout).is_ok(),
            None => false,
        };
        if received {
            self.dispatch(ShowcaseEvent::Tick);
        }
        received
    }
}

impl Drop for ShowcaseController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
