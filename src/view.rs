//! Render contract: what the page should show for a given state.
//!
//! [`ShowcaseView::project`] is a pure projection from catalog and state. It
//! answers four questions for the render layer: which record is featured,
//! which records fill the grid, whether the detail modal is open (and for
//! which record), and whether the lightbox is open (and with which image).

use crate::catalog::Catalog;
use crate::filter::{TypeFilter, filtered_catalog};
use crate::state::ShowcaseState;
use crate::types::{LightboxImage, ProjectRecord};

#[derive(Debug, Clone, PartialEq)]
pub struct ShowcaseView<'a> {
    /// `None` only for an empty catalog.
    pub featured: Option<FeaturedSlide<'a>>,
    /// One dot per catalog entry.
    pub dots: Vec<Dot>,
    pub filters: Vec<FilterTab>,
    pub grid: Grid<'a>,
    pub detail: Option<&'a ProjectRecord>,
    /// Only ever `Some` alongside `detail`.
    pub lightbox: Option<&'a LightboxImage>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeaturedSlide<'a> {
    pub record: &'a ProjectRecord,
    pub index: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dot {
    pub index: usize,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterTab {
    pub filter: TypeFilter,
    pub active: bool,
    /// Records this filter would show.
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Grid<'a> {
    Cards(Vec<&'a ProjectRecord>),
    /// The active filter matched nothing.
    Empty(TypeFilter),
}

impl<'a> Grid<'a> {
    pub fn cards(&self) -> &[&'a ProjectRecord] {
        match self {
            Grid::Cards(cards) => cards,
            Grid::Empty(_) => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Grid::Empty(_))
    }
}

impl<'a> ShowcaseView<'a> {
    pub fn project(catalog: &'a Catalog, state: &'a ShowcaseState) -> Self {
        let projects = catalog.projects();

        let featured = catalog.get(state.featured_index).map(|record| FeaturedSlide {
            record,
            index: state.featured_index,
            total: projects.len(),
        });

        let dots = (0..projects.len())
            .map(|index| Dot {
                index,
                active: index == state.featured_index,
            })
            .collect();

        let filters = TypeFilter::choices()
            .map(|filter| FilterTab {
                filter,
                active: filter == state.type_filter,
                count: projects.iter().filter(|r| filter.matches(r)).count(),
            })
            .collect();

        let cards = filtered_catalog(projects, state.type_filter);
        let grid = if cards.is_empty() {
            Grid::Empty(state.type_filter)
        } else {
            Grid::Cards(cards)
        };

        let detail = state.selected_project.and_then(|id| catalog.find(id));
        let lightbox = detail.and(state.lightbox_image.as_ref());

        Self {
            featured,
            dots,
            filters,
            grid,
            detail,
            lightbox,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Category;
    use crate::test_helpers::{abc_catalog, catalog_of, titles};

    #[test]
    fn featured_follows_index() {
        let catalog = abc_catalog();
        let state = ShowcaseState {
            featured_index: 1,
            ..ShowcaseState::default()
        };
        let view = ShowcaseView::project(&catalog, &state);
        let featured = view.featured.unwrap();
        assert_eq!(featured.record.title, "B");
        assert_eq!(featured.index, 1);
        assert_eq!(featured.total, 3);
    }

    #[test]
    fn exactly_one_active_dot() {
        let catalog = abc_catalog();
        let state = ShowcaseState {
            featured_index: 2,
            ..ShowcaseState::default()
        };
        let view = ShowcaseView::project(&catalog, &state);
        assert_eq!(view.dots.len(), 3);
        let active: Vec<usize> = view.dots.iter().filter(|d| d.active).map(|d| d.index).collect();
        assert_eq!(active, vec![2]);
    }

    #[test]
    fn empty_catalog_has_no_featured() {
        let catalog = Catalog::default();
        let state = ShowcaseState::default();
        let view = ShowcaseView::project(&catalog, &state);
        assert!(view.featured.is_none());
        assert!(view.dots.is_empty());
        assert!(view.grid.is_empty());
    }

    #[test]
    fn unmatched_filter_gives_empty_grid_but_keeps_featured() {
        let catalog = catalog_of(&[("A", "Web Application"), ("B", "Desktop Application")]);
        let filter = TypeFilter::Category(Category::MobileApplication);
        let state = ShowcaseState {
            featured_index: 1,
            type_filter: filter,
            ..ShowcaseState::default()
        };
        let view = ShowcaseView::project(&catalog, &state);
        assert_eq!(view.grid, Grid::Empty(filter));
        assert!(view.grid.cards().is_empty());
        assert_eq!(view.featured.unwrap().record.title, "B");
    }

    #[test]
    fn grid_follows_filter() {
        let catalog = catalog_of(&[
            ("A", "Web Application"),
            ("B", "Desktop Application"),
            ("C", "Web Application"),
        ]);
        let state = ShowcaseState {
            type_filter: TypeFilter::Category(Category::WebDevelopment),
            ..ShowcaseState::default()
        };
        let view = ShowcaseView::project(&catalog, &state);
        assert_eq!(titles(view.grid.cards()), vec!["A", "C"]);
    }

    #[test]
    fn filter_tabs_report_counts() {
        let catalog = catalog_of(&[
            ("A", "Web Application"),
            ("B", "Desktop Application"),
            ("C", "SaaS platform"),
        ]);
        let state = ShowcaseState::default();
        let view = ShowcaseView::project(&catalog, &state);
        let counts: Vec<(&str, usize, bool)> = view
            .filters
            .iter()
            .map(|t| (t.filter.label(), t.count, t.active))
            .collect();
        assert_eq!(
            counts,
            vec![
                ("All", 3, true),
                ("Web Development", 2, false),
                ("Desktop Application", 1, false),
                ("Mobile Application", 0, false),
            ]
        );
    }

    #[test]
    fn detail_and_lightbox_resolve() {
        let catalog = abc_catalog();
        let state = ShowcaseState {
            selected_project: Some(3),
            lightbox_image: Some(LightboxImage::new("/projects/3.png", "C")),
            ..ShowcaseState::default()
        };
        let view = ShowcaseView::project(&catalog, &state);
        assert_eq!(view.detail.unwrap().title, "C");
        assert_eq!(view.lightbox.unwrap().alt, "C");
    }

    #[test]
    fn detail_survives_filter_that_hides_it() {
        let catalog = catalog_of(&[("A", "Web Application"), ("B", "Desktop Application")]);
        let state = ShowcaseState {
            type_filter: TypeFilter::Category(Category::WebDevelopment),
            selected_project: Some(2),
            ..ShowcaseState::default()
        };
        let view = ShowcaseView::project(&catalog, &state);
        assert_eq!(titles(view.grid.cards()), vec!["A"]);
        assert_eq!(view.detail.unwrap().title, "B");
    }
}
