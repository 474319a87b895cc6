//! Catalog aggregation.
//!
//! The primary source (the store's own backend) and the external source are
//! fetched concurrently and each failure is handled on its own: a failed
//! primary is replaced by the built-in list, a failed external source
//! contributes nothing. Neither outcome affects the other.

use crate::source::{builtin_books, BookSource};
use shelf_commerce::{Book, Catalog};
use std::fmt;
use tracing::{info, warn};

/// Where the first part of the catalog came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryOrigin {
    /// The backend answered with at least one book.
    Backend,
    /// The backend failed; the built-in list was used.
    Fallback,
}

impl fmt::Display for PrimaryOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimaryOrigin::Backend => f.write_str("backend"),
            PrimaryOrigin::Fallback => f.write_str("fallback"),
        }
    }
}

/// Summary of one aggregation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateReport {
    /// Origin of the primary books.
    pub primary: PrimaryOrigin,
    /// Number of primary books.
    pub primary_count: usize,
    /// Number of external books merged after them.
    pub external_count: usize,
    /// How far external ids were shifted to clear the primary ids.
    pub external_id_shift: i64,
}

/// Merges the primary and external sources into one catalog.
pub struct Aggregator {
    primary: Box<dyn BookSource>,
    external: Box<dyn BookSource>,
    fallback: Vec<Book>,
}

impl Aggregator {
    /// Create an aggregator using the built-in fallback list.
    pub fn new(primary: impl BookSource + 'static, external: impl BookSource + 'static) -> Self {
        Self {
            primary: Box::new(primary),
            external: Box::new(external),
            fallback: builtin_books(),
        }
    }

    /// Replace the fallback list.
    pub fn with_fallback(mut self, fallback: Vec<Book>) -> Self {
        self.fallback = fallback;
        self
    }

    /// Fetch both sources once and build the catalog.
    pub async fn load(&self) -> (Catalog, AggregateReport) {
        let (primary, external) = futures::join!(self.primary.fetch(), self.external.fetch());

        let (primary_books, origin) = match primary {
            Ok(books) => (books, PrimaryOrigin::Backend),
            Err(e) => {
                warn!(
                    source = self.primary.name(),
                    error = %e,
                    "Using built-in books because the backend is unavailable"
                );
                (self.fallback.clone(), PrimaryOrigin::Fallback)
            }
        };

        let external_books = external.unwrap_or_else(|e| {
            warn!(source = self.external.name(), error = %e, "Skipping external books");
            Vec::new()
        });

        let primary = Catalog::new(primary_books);
        let (external_books, shift) = clear_id_range(&primary, external_books);
        let report = AggregateReport {
            primary: origin,
            primary_count: primary.len(),
            external_count: external_books.len(),
            external_id_shift: shift,
        };
        let catalog = primary.concat(external_books);

        info!(
            primary = %report.primary,
            primary_count = report.primary_count,
            external_count = report.external_count,
            total = catalog.len(),
            "Catalog loaded"
        );
        (catalog, report)
    }
}

/// Shift `external` ids up so they all sit above the largest primary id.
///
/// Returns the shifted books and the shift applied (zero when the reserved
/// range is already clear). Books whose shifted id would overflow `i64` are
/// dropped.
fn clear_id_range(primary: &Catalog, external: Vec<Book>) -> (Vec<Book>, i64) {
    let (Some(primary_max), Some(external_min)) =
        (primary.max_id(), external.iter().map(|b| b.id).min())
    else {
        return (external, 0);
    };

    if primary_max < external_min {
        return (external, 0);
    }

    let Some(shift) = primary_max
        .get()
        .checked_sub(external_min.get())
        .and_then(|gap| gap.checked_add(1))
    else {
        warn!(
            primary_max = primary_max.get(),
            dropped = external.len(),
            "No id range left above the primary catalog; dropping external books"
        );
        return (Vec::new(), 0);
    };

    warn!(
        shift,
        primary_max = primary_max.get(),
        "External ids overlap the primary catalog; shifting"
    );
    let shifted = external
        .into_iter()
        .filter_map(|mut book| match book.id.checked_offset(shift) {
            Some(id) => {
                book.id = id;
                Some(book)
            }
            None => {
                warn!(book_id = %book.id, shift, "Dropping external book with no free id");
                None
            }
        })
        .collect();
    (shifted, shift)
}
