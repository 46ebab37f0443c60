//! Duplicate container and observation highlighting.

use std::collections::HashMap;

use dioxus_logger::tracing;

use crate::admin::table::{AdminTable, Marker};

/// Observations at least this long mark the row.
pub const MIN_OBSERVATION_LENGTH: usize = 5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HighlightSummary {
    pub duplicates: usize,
    pub observations: usize,
}

/// Mark container cells that repeat within the grid or whose row carries observations.
///
/// Previous markers are cleared first. Observation length is only consulted when the grid
/// has an `observatii` column. Returns `None` when there is no `container` column.
pub fn highlight_duplicates(table: &mut AdminTable) -> Option<HighlightSummary> {
    let Some(container_index) = table.column("container") else {
        tracing::debug!(
            "Container column not found, headers: {:?}",
            table.headers.iter().map(|h| h.normalized()).collect::<Vec<_>>()
        );
        return None;
    };
    let has_observations_column = table.column("observatii").is_some();

    let mut counts: HashMap<String, usize> = HashMap::new();
    for row in &table.rows {
        if let Some(cell) = row.cells.get(container_index) {
            let value = cell.text.trim();
            if !value.is_empty() {
                *counts.entry(value.to_string()).or_default() += 1;
            }
        }
    }

    let mut summary = HighlightSummary::default();

    for row in &mut table.rows {
        let has_observations = has_observations_column
            && row
                .observation_length
                .is_some_and(|length| length >= MIN_OBSERVATION_LENGTH);

        let Some(cell) = row.cells.get_mut(container_index) else {
            continue;
        };
        cell.marker = None;

        let count = counts.get(cell.text.trim()).copied().unwrap_or(0);

        if has_observations {
            cell.marker = Some(Marker::Observations);
            summary.observations += 1;
        } else if count > 1 {
            cell.marker = Some(Marker::Duplicate { count });
            summary.duplicates += 1;
        }
    }

    Some(summary)
}
