//! Moves sidebar filter groups above the grid as dropdowns.

use crate::admin::table::collapse_whitespace;

#[derive(Clone, Debug, PartialEq)]
pub struct FilterLink {
    pub text: String,
    pub url: String,
    pub selected: bool,
}

impl FilterLink {
    pub fn new(text: &str, url: &str, selected: bool) -> Self {
        Self {
            text: text.to_string(),
            url: url.to_string(),
            selected,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FilterGroup {
    pub title: String,
    pub links: Vec<FilterLink>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DropdownOption {
    pub text: String,
    pub url: String,
}

/// A filter group rendered as a select control.
///
/// Index 0 is the placeholder option carrying the group title; link options follow.
#[derive(Clone, Debug, PartialEq)]
pub struct Dropdown {
    pub title: String,
    pub options: Vec<DropdownOption>,
    pub selected: usize,
}

impl Dropdown {
    fn from_group(group: &FilterGroup) -> Self {
        let mut selected = 0;
        let options = group
            .links
            .iter()
            .enumerate()
            .map(|(index, link)| {
                if link.selected {
                    selected = index + 1;
                }

                DropdownOption {
                    text: collapse_whitespace(&link.text),
                    url: link.url.clone(),
                }
            })
            .collect();

        Self {
            title: group.title.clone(),
            options,
            selected,
        }
    }

    /// Choose the option at `index`; returns the URL to navigate to.
    ///
    /// The placeholder and out-of-range indexes navigate nowhere.
    pub fn select(&mut self, index: usize) -> Option<&str> {
        if index == 0 {
            self.selected = 0;
            return None;
        }

        let option = self.options.get(index - 1)?;
        self.selected = index;

        Some(option.url.as_str())
    }

    /// Text of every option, placeholder first.
    pub fn labels(&self) -> Vec<&str> {
        std::iter::once(self.title.as_str())
            .chain(self.options.iter().map(|o| o.text.as_str()))
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct FilterRelocator {
    moved: bool,
}

impl FilterRelocator {
    /// Convert the groups into dropdowns, at most once.
    ///
    /// Groups without links are skipped; when nothing remains no dropdowns are produced and
    /// a later call may still move them.
    pub fn relocate(&mut self, groups: &[FilterGroup]) -> Option<Vec<Dropdown>> {
        if self.moved {
            return None;
        }

        let dropdowns: Vec<Dropdown> = groups
            .iter()
            .filter(|group| !group.links.is_empty())
            .map(Dropdown::from_group)
            .collect();

        if dropdowns.is_empty() {
            return None;
        }

        self.moved = true;
        Some(dropdowns)
    }

    pub fn is_moved(&self) -> bool {
        self.moved
    }
}
