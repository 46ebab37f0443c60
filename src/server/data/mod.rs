//! Data access layer repositories.
//!
//! Repositories wrap sea-orm queries per table and return `DbErr` untouched; services
//! decide what a failure means. [`query::QueryHelper`] covers the few statements that are
//! clearer as raw SQL.

pub mod lookup;
pub mod manifest;
pub mod query;
pub mod user;
pub mod year;

use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ColumnTrait, Condition,
};

/// Case-insensitive substring match on `column`.
pub(crate) fn icontains<C: ColumnTrait>(column: C, needle: &str) -> Condition {
    let pattern = format!("%{}%", needle.trim().to_uppercase());

    Condition::all().add(upper(column).like(pattern))
}

/// Case-insensitive equality on `column`.
pub(crate) fn iexact<C: ColumnTrait>(column: C, value: &str) -> Condition {
    Condition::all().add(upper(column).eq(value.to_uppercase()))
}

fn upper<C: ColumnTrait>(column: C) -> Expr {
    Expr::expr(Func::upper(Expr::col((column.entity_name(), column))))
}

/// Item count and page count for a listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageInfo {
    pub count: u64,
    pub num_pages: u64,
}

impl PageInfo {
    pub fn new(count: u64, page_size: u64) -> Self {
        let page_size = Ord::max(page_size, 1);

        Self {
            count,
            num_pages: count.div_ceil(page_size),
        }
    }

    /// Whether `page` (one-based) can be served. The first page always exists.
    pub fn contains(&self, page: u64) -> bool {
        page >= 1 && (page == 1 || page <= self.num_pages)
    }
}
