use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ErrorDto {
    /// The error message
    pub detail: String,
}

/// A generic `{detail}` acknowledgement
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DetailDto {
    pub detail: String,
}

/// One page of a paginated listing
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct Page<T> {
    /// Total number of items across every page
    pub count: u64,
    /// Link to the next page, absent on the last one
    pub next: Option<String>,
    /// Link to the previous page, absent on the first one
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// A list endpoint response, either paginated or a bare array.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Page(Page<T>),
    Bare(Vec<T>),
}

impl<T> Listing<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Page(page) => page.results,
            Self::Bare(items) => items,
        }
    }

    pub fn items_mut(&mut self) -> &mut [T] {
        match self {
            Self::Page(page) => &mut page.results,
            Self::Bare(items) => items,
        }
    }

    /// Whether the backend announced a further page
    pub fn has_next(&self) -> bool {
        matches!(self, Self::Page(page) if page.next.is_some())
    }

    /// Total number of items the backend reported, or the length of a bare array.
    pub fn count(&self) -> u64 {
        match self {
            Self::Page(page) => page.count,
            Self::Bare(items) => items.len() as u64,
        }
    }
}
