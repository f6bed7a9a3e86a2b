//! Derivation of the visible list from the authoritative list.

use crate::types::{StatusFilter, TodoItem, TodoStatus};

/// Items of `items` that pass `filter`, in their original order.
///
/// Pure: the result depends only on the two arguments.
pub fn derive_visible(items: &[TodoItem], filter: StatusFilter) -> Vec<&TodoItem> {
    items.iter().filter(|item| filter.matches(item.status)).collect()
}

/// Per-status totals for the filter tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: usize,
    pub completed: usize,
}

impl StatusCounts {
    pub fn of(items: &[TodoItem]) -> Self {
        items.iter().fold(Self::default(), |mut counts, item| {
            match item.status {
                TodoStatus::Pending => counts.pending += 1,
                TodoStatus::Completed => counts.completed += 1,
            }
            counts
        })
    }

    pub fn for_filter(&self, filter: StatusFilter) -> usize {
        match filter {
            StatusFilter::All => self.pending + self.completed,
            StatusFilter::Pending => self.pending,
            StatusFilter::Completed => self.completed,
        }
    }
}
