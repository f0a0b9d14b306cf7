//! Filter predicate engine.
//!
//! Reduces a catalog to the items matching every active criterion. Each
//! criterion is either inactive ([`Criterion::All`]) or pins one value;
//! active criteria compose with AND.
//!
//! - Category matches by exact string equality.
//! - Status matches case-insensitively: the filter buttons say `"Upcoming"`,
//!   the content files say `"upcoming"`. Both parse to the same [`Status`].
//! - Items without a status (gallery entries, videos) never match an active
//!   status criterion.
//!
//! [`apply`] preserves catalog order and is idempotent. An empty result is a
//! valid state, rendered as "no matches" with a reset link.

use crate::catalog::{Catalog, CatalogItem};
use crate::slug::{self, slugify};
use crate::types::{Status, UnknownStatus};
use thiserror::Error;

/// Label of the inactive criterion, as shown on filter buttons.
pub const ALL_LABEL: &str = "All";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    #[error(transparent)]
    UnknownStatus(#[from] UnknownStatus),
}

/// One filterable field: inactive, or pinned to a single value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Criterion<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Criterion<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Criterion::All)
    }

    /// Whether `value` passes. `None` only passes an inactive criterion.
    pub fn admits(&self, value: Option<&T>) -> bool {
        match self {
            Criterion::All => true,
            Criterion::Only(wanted) => value == Some(wanted),
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Criterion::All => None,
            Criterion::Only(v) => Some(v),
        }
    }
}

impl Criterion<String> {
    /// `"All"` (any case) is inactive; any other label pins the category.
    pub fn category(label: &str) -> Self {
        if label.eq_ignore_ascii_case(ALL_LABEL) {
            Criterion::All
        } else {
            Criterion::Only(label.to_string())
        }
    }

    /// Like [`Criterion::category`], but resolved against `catalog`: a label
    /// or its URL slug (`theatre-play`) both pin the declared label. Input
    /// naming no category is pinned verbatim and matches nothing.
    pub fn category_in<T: CatalogItem>(catalog: &Catalog<T>, input: &str) -> Self {
        match Self::category(input) {
            Criterion::All => Criterion::All,
            Criterion::Only(raw) => Criterion::Only(
                catalog
                    .category_for_slug(&slugify(&raw))
                    .map_or(raw, str::to_string),
            ),
        }
    }

    pub fn label(&self) -> &str {
        self.value().map(String::as_str).unwrap_or(ALL_LABEL)
    }

    pub fn slug(&self) -> String {
        self.value()
            .map(|c| slugify(c))
            .unwrap_or_else(|| slug::ALL.to_string())
    }
}

impl Criterion<Status> {
    /// `"All"` (any case) is inactive; otherwise the label must name a status.
    pub fn status(label: &str) -> Result<Self, FilterError> {
        if label.eq_ignore_ascii_case(ALL_LABEL) {
            Ok(Criterion::All)
        } else {
            Ok(Criterion::Only(label.parse()?))
        }
    }

    pub fn label(&self) -> &'static str {
        self.value().map(Status::label).unwrap_or(ALL_LABEL)
    }

    pub fn slug(&self) -> &'static str {
        self.value().map(Status::as_str).unwrap_or(slug::ALL)
    }
}

/// The full filter state of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Criteria {
    pub category: Criterion<String>,
    pub status: Criterion<Status>,
}

impl Criteria {
    /// Every criterion inactive.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: Criterion<String>) -> Self {
        self.category = category;
        self
    }

    pub fn with_status(mut self, status: Criterion<Status>) -> Self {
        self.status = status;
        self
    }

    pub fn is_all(&self) -> bool {
        self.category.is_all() && self.status.is_all()
    }

    /// The one-click reset behind the "no matches" message.
    pub fn reset(&mut self) {
        *self = Self::all();
    }

    pub fn matches<T: CatalogItem>(&self, item: &T) -> bool {
        let category_ok = match &self.category {
            Criterion::All => true,
            Criterion::Only(wanted) => wanted == item.category(),
        };
        category_ok && self.status.admits(item.status().as_ref())
    }

    /// Every filter state a listing can be in: `All` plus each category,
    /// crossed with `All` plus each status. The all-inactive state comes
    /// first.
    pub fn combinations(categories: &[String], statuses: &[Status]) -> Vec<Criteria> {
        let category_states: Vec<Criterion<String>> = std::iter::once(Criterion::All)
            .chain(categories.iter().cloned().map(Criterion::Only))
            .collect();
        let status_states: Vec<Criterion<Status>> = std::iter::once(Criterion::All)
            .chain(statuses.iter().copied().map(Criterion::Only))
            .collect();

        let mut out = Vec::with_capacity(category_states.len() * status_states.len());
        for category in &category_states {
            for status in &status_states {
                out.push(Criteria {
                    category: category.clone(),
                    status: status.clone(),
                });
            }
        }
        out
    }
}

/// The ordered subsequence of `items` matching every active criterion.
pub fn apply<'a, T: CatalogItem>(items: &'a [T], criteria: &Criteria) -> Vec<&'a T> {
    items.iter().filter(|item| criteria.matches(*item)).collect()
}

/// Category filter buttons: `All` followed by the catalog's category set.
pub fn category_options(categories: &[String]) -> Vec<Criterion<String>> {
    std::iter::once(Criterion::All)
        .chain(categories.iter().cloned().map(Criterion::Only))
        .collect()
}

/// Status filter buttons: `All, Upcoming, Ongoing, Past`.
pub fn status_options() -> Vec<Criterion<Status>> {
    std::iter::once(Criterion::All)
        .chain(Status::ALL.into_iter().map(Criterion::Only))
        .collect()
}
