//! Read-only queries over a [`Collection`]: slug lookup plus the related,
//! adjacent and featured selections that blog and case-study pages share.
//!
//! Every query keeps collection order; nothing is resorted at read time.

use crate::error::{Result, SiteError};
use crate::store::Collection;
use crate::types::ContentRecord;
use serde::Serialize;

/// Neighbours of a record in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Adjacent<'a, T> {
    pub previous: Option<&'a T>,
    pub next: Option<&'a T>,
}

impl<T: ContentRecord> Collection<T> {
    /// Look up a record by id. Unknown ids yield [`SiteError::NotFound`],
    /// which callers turn into a "not found" page.
    pub fn find_by_id(&self, id: &str) -> Result<&T> {
        self.position(id)
            .map(|pos| &self.all()[pos])
            .ok_or_else(|| SiteError::NotFound {
                kind: T::KIND,
                id: id.to_string(),
            })
    }

    /// Records sharing `record`'s category, never `record` itself, at most
    /// `limit` of them.
    pub fn find_related<'a>(&'a self, record: &T, limit: usize) -> Vec<&'a T> {
        self.all()
            .iter()
            .filter(|r| r.category() == record.category() && r.id() != record.id())
            .take(limit)
            .collect()
    }

    /// Immediate predecessor and successor of `id`. An unknown id has
    /// neither.
    pub fn find_adjacent(&self, id: &str) -> Adjacent<'_, T> {
        let Some(pos) = self.position(id) else {
            return Adjacent {
                previous: None,
                next: None,
            };
        };
        let items = self.all();
        Adjacent {
            previous: pos.checked_sub(1).map(|p| &items[p]),
            next: items.get(pos + 1),
        }
    }

    pub fn find_featured(&self, limit: usize) -> Vec<&T> {
        self.all()
            .iter()
            .filter(|r| r.featured())
            .take(limit)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
