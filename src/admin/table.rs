//! Host-independent model of the admin result grid.

/// Collapse runs of whitespace into single spaces and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeaderCell {
    pub text: String,
    /// The leading action-checkbox column
    pub is_checkbox: bool,
    /// Width applied as width, min-width and max-width, e.g. `"150px"`
    pub width: Option<String>,
    /// Tooltip, set to the column name once a resize handle is installed
    pub title: Option<String>,
    pub has_resizer: bool,
}

impl HeaderCell {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Default::default()
        }
    }

    pub fn checkbox() -> Self {
        Self {
            is_checkbox: true,
            ..Default::default()
        }
    }

    /// Header text as a reader would match it: whitespace collapsed, lower-cased.
    pub fn normalized(&self) -> String {
        collapse_whitespace(&self.text).to_lowercase()
    }
}

/// Highlight applied to a container cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Marker {
    /// The row carries observations; takes priority over duplicates
    Observations,
    /// The container value occurs `count` times in the grid
    Duplicate { count: usize },
}

impl Marker {
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Observations => "has-observations",
            Self::Duplicate { .. } => "duplicate-container",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            Self::Observations => "#f8d7da",
            Self::Duplicate { .. } => "#fff3cd",
        }
    }

    pub fn title(&self) -> String {
        match self {
            Self::Observations => "Container cu observații".to_string(),
            Self::Duplicate { count } => format!("Container duplicat (apare de {count} ori)"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cell {
    pub text: String,
    pub marker: Option<Marker>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    pub cells: Vec<Cell>,
    /// Length of the row's observations text, when the grid annotates it
    pub observation_length: Option<usize>,
}

impl Row {
    pub fn new(cells: Vec<&str>) -> Self {
        Self {
            cells: cells
                .into_iter()
                .map(|text| Cell {
                    text: text.to_string(),
                    marker: None,
                })
                .collect(),
            observation_length: None,
        }
    }

    pub fn with_observations(mut self, length: usize) -> Self {
        self.observation_length = Some(length);
        self
    }
}

/// The grid: headers plus data rows.
///
/// Row cells are aligned with the headers that follow the checkbox column, so a header at
/// index `i` maps to cell `i - 1` when the first header is the checkbox.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminTable {
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<Row>,
}

impl AdminTable {
    pub fn new(headers: Vec<HeaderCell>, rows: Vec<Row>) -> Self {
        Self { headers, rows }
    }

    pub fn checkbox_offset(&self) -> usize {
        match self.headers.first() {
            Some(header) if header.is_checkbox => 1,
            _ => 0,
        }
    }

    /// Cell index of the first header whose normalized text is exactly `name`.
    pub fn column(&self, name: &str) -> Option<usize> {
        let offset = self.checkbox_offset();

        self.headers
            .iter()
            .enumerate()
            .skip(offset)
            .find(|(_, header)| header.normalized() == name)
            .map(|(index, _)| index - offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_lookup_skips_checkbox_offset() {
        let table = AdminTable::new(
            vec![
                HeaderCell::checkbox(),
                HeaderCell::new("Model  container"),
                HeaderCell::new("\n  Container \n"),
            ],
            Vec::new(),
        );

        assert_eq!(table.column("container"), Some(1));
        assert_eq!(table.column("model container"), Some(0));
        assert_eq!(table.column("observatii"), None);
    }

    #[test]
    fn duplicate_title_includes_count() {
        assert_eq!(
            Marker::Duplicate { count: 3 }.title(),
            "Container duplicat (apare de 3 ori)"
        );
    }
}
