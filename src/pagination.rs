//! Pagination and stable sorting over derived record lists.
//!
//! Sorting is numeric on the selected key with explicit stability: ties keep
//! their original order (`sort_by` is a stable sort, and the comparator falls
//! back to `Ordering::Equal` for non-comparable floats). Requesting the same
//! page with the same sort twice yields identical output.

use std::cmp::Ordering;

use crate::types::{EventKind, TransactionEvent};

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// 1-based page request.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }
}

/// Number of pages needed for `len` items; an empty list still has one page.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if len == 0 || page_size == 0 {
        return 1;
    }
    len / page_size + usize::from(len % page_size != 0)
}

/// Stable-sorts by a numeric key and returns the requested page as a copy.
pub fn sort_and_page<T, F>(
    items: &[T],
    key: F,
    direction: SortDirection,
    request: PageRequest,
) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> f64,
{
    let mut ordered: Vec<T> = items.to_vec();
    ordered.sort_by(|a, b| {
        let cmp = key(a).partial_cmp(&key(b)).unwrap_or(Ordering::Equal);
        match direction {
            SortDirection::Ascending => cmp,
            SortDirection::Descending => cmp.reverse(),
        }
    });

    let start = (request.page - 1).saturating_mul(request.page_size);
    ordered
        .into_iter()
        .skip(start)
        .take(request.page_size)
        .collect()
}

/// Transaction-list type filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TxnFilter {
    #[default]
    All,
    Swaps,
    Adds,
    Removes,
}

impl TxnFilter {
    fn matches(&self, kind: EventKind) -> bool {
        match self {
            TxnFilter::All => true,
            TxnFilter::Swaps => kind == EventKind::Swap,
            TxnFilter::Adds => kind == EventKind::Add,
            TxnFilter::Removes => kind == EventKind::Remove,
        }
    }
}

/// Sortable columns of the transaction table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxnSortField {
    ValueUsd,
    Amount0,
    Amount1,
    Timestamp,
}

impl TxnSortField {
    fn key(&self, event: &TransactionEvent) -> f64 {
        match self {
            TxnSortField::ValueUsd => event.amount_usd,
            TxnSortField::Amount0 => event.token0_amount,
            TxnSortField::Amount1 => event.token1_amount,
            TxnSortField::Timestamp => event.timestamp as f64,
        }
    }
}

/// Filters, sorts and pages a transaction list in one pass.
pub fn transaction_page(
    events: &[TransactionEvent],
    filter: TxnFilter,
    sort_field: TxnSortField,
    direction: SortDirection,
    request: PageRequest,
) -> Vec<TransactionEvent> {
    let filtered: Vec<TransactionEvent> = events
        .iter()
        .filter(|e| filter.matches(e.kind))
        .cloned()
        .collect();
    sort_and_page(&filtered, |e| sort_field.key(e), direction, request)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(hash: &str, kind: EventKind, usd: f64, ts: u64) -> TransactionEvent {
        TransactionEvent {
            hash: hash.into(),
            timestamp: ts,
            kind,
            token0_symbol: "A".into(),
            token1_symbol: "B".into(),
            token0_amount: 1.0,
            token1_amount: 2.0,
            amount_usd: usd,
            account: "0xuser".into(),
        }
    }

    #[test]
    fn page_count_matches_original_formula() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(9, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(25, 10), 3);
    }

    #[test]
    fn sorts_descending_and_pages() {
        let items: Vec<TransactionEvent> = (0..25)
            .map(|i| event(&format!("0x{i}"), EventKind::Swap, i as f64, i))
            .collect();
        let page2 = sort_and_page(
            &items,
            |e| e.amount_usd,
            SortDirection::Descending,
            PageRequest::new(2, 10),
        );
        assert_eq!(page2.len(), 10);
        assert_eq!(page2[0].amount_usd, 14.0);
        assert_eq!(page2[9].amount_usd, 5.0);
    }

    #[test]
    fn ties_keep_original_order() {
        let items = vec![
            event("0x1", EventKind::Swap, 5.0, 1),
            event("0x2", EventKind::Swap, 5.0, 2),
            event("0x3", EventKind::Swap, 5.0, 3),
        ];
        let page = sort_and_page(
            &items,
            |e| e.amount_usd,
            SortDirection::Ascending,
            PageRequest::default(),
        );
        let hashes: Vec<&str> = page.iter().map(|e| e.hash.as_str()).collect();
        assert_eq!(hashes, vec!["0x1", "0x2", "0x3"]);
    }

    #[test]
    fn pagination_is_idempotent() {
        let items: Vec<TransactionEvent> = (0..40)
            .map(|i| event(&format!("0x{i}"), EventKind::Swap, (i % 7) as f64, i))
            .collect();
        let request = PageRequest::new(3, 10);
        let a = sort_and_page(&items, |e| e.amount_usd, SortDirection::Descending, request);
        let b = sort_and_page(&items, |e| e.amount_usd, SortDirection::Descending, request);
        let ha: Vec<&str> = a.iter().map(|e| e.hash.as_str()).collect();
        let hb: Vec<&str> = b.iter().map(|e| e.hash.as_str()).collect();
        assert_eq!(ha, hb);
    }

    #[test]
    fn filter_selects_event_kind() {
        let items = vec![
            event("0x1", EventKind::Swap, 1.0, 1),
            event("0x2", EventKind::Add, 2.0, 2),
            event("0x3", EventKind::Remove, 3.0, 3),
        ];
        let adds = transaction_page(
            &items,
            TxnFilter::Adds,
            TxnSortField::Timestamp,
            SortDirection::Descending,
            PageRequest::default(),
        );
        assert_eq!(adds.len(), 1);
        assert_eq!(adds[0].hash, "0x2");
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let items = vec![event("0x1", EventKind::Swap, 1.0, 1)];
        let page = sort_and_page(
            &items,
            |e| e.amount_usd,
            SortDirection::Ascending,
            PageRequest::new(5, 10),
        );
        assert!(page.is_empty());
    }
}
