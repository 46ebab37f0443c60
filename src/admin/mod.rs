//! Enhancements for the back-office manifest grid.
//!
//! The grid is modelled as plain data ([`AdminPage`], [`AdminTable`]) so every enhancement
//! is a pure transformation that can run in any host. Hosts call
//! [`AdminEnhancer::table_rendered`] after each data refresh; every step is idempotent, so
//! calling it repeatedly on the same page is harmless.

pub mod columns;
pub mod error;
pub mod filters;
pub mod highlight;
pub mod reset;
pub mod table;

use dioxus_logger::tracing;

pub use columns::{ColumnResizer, KeyValueStore, MemoryStorage};
pub use error::AdminError;
pub use filters::{Dropdown, FilterGroup, FilterLink, FilterRelocator};
pub use highlight::{highlight_duplicates, HighlightSummary};
pub use reset::{ResetButton, ResetInjector, SubmitButton};
pub use table::{AdminTable, Cell, HeaderCell, Marker, Row};

/// Everything the enhancer needs to know about one rendered admin page.
#[derive(Clone, Debug, Default)]
pub struct AdminPage {
    /// Path of the page, used to key persisted column widths
    pub path: String,
    /// Full current URL, used by the reset control
    pub url: String,
    pub table: AdminTable,
    pub filter_groups: Vec<FilterGroup>,
    pub submit_button: Option<SubmitButton>,
}

/// What a single `table_rendered` pass changed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderReport {
    pub highlight: Option<HighlightSummary>,
    pub resizers_installed: usize,
    pub widths_restored: usize,
    pub filters_moved: bool,
    pub reset_injected: bool,
}

/// Applies every grid enhancement, keeping the once-only state between renders.
pub struct AdminEnhancer<S: KeyValueStore> {
    store: S,
    relocator: FilterRelocator,
    injector: ResetInjector,
    dropdowns: Vec<Dropdown>,
    reset_button: Option<ResetButton>,
}

impl<S: KeyValueStore> AdminEnhancer<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            relocator: FilterRelocator::default(),
            injector: ResetInjector::default(),
            dropdowns: Vec::new(),
            reset_button: None,
        }
    }

    /// Re-render hook; call after the grid's rows were replaced.
    pub fn table_rendered(&mut self, page: &mut AdminPage) -> RenderReport {
        let mut report = RenderReport {
            highlight: highlight_duplicates(&mut page.table),
            ..Default::default()
        };

        let resizer = ColumnResizer::new(&page.path);
        report.resizers_installed = resizer.install(&mut page.table);
        report.widths_restored = match resizer.restore(&mut page.table, &self.store) {
            Ok(restored) => restored,
            Err(e) => {
                tracing::warn!("Failed to restore column widths for {}: {}", page.path, e);
                0
            }
        };

        if let Some(dropdowns) = self.relocator.relocate(&page.filter_groups) {
            self.dropdowns = dropdowns;
            report.filters_moved = true;
        }

        if let Some(button) = self.injector.inject(page.submit_button.as_ref()) {
            self.reset_button = Some(button);
            report.reset_injected = true;
        }

        report
    }

    /// Drag a column's resize handle and persist the result.
    ///
    /// Returns whether the new width was applied.
    pub fn drag_column(
        &mut self,
        page: &mut AdminPage,
        index: usize,
        start_width: f64,
        delta: f64,
    ) -> Result<bool, AdminError> {
        let resizer = ColumnResizer::new(&page.path);

        if !resizer.drag(&mut page.table, index, start_width, delta) {
            return Ok(false);
        }

        resizer.save(&page.table, &mut self.store)?;

        Ok(true)
    }

    /// Dropdowns produced by the filter relocator, empty until filters were moved.
    pub fn dropdowns(&self) -> &[Dropdown] {
        &self.dropdowns
    }

    pub fn reset_button(&self) -> Option<&ResetButton> {
        self.reset_button.as_ref()
    }

    /// Where activating the reset control on `page` leads, once it was injected.
    pub fn reset_target(&self, page: &AdminPage) -> Option<Result<String, AdminError>> {
        self.reset_button
            .as_ref()
            .map(|button| button.activate(&page.url))
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
