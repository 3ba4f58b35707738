//! Page math
//!
//! Slicing is clipped to the data, never panicking: an out-of-range page
//! yields an empty slice. An empty result set still counts as one page so
//! the indicator can show "Page 1 of 1".

/// Total number of pages, minimum 1.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size).max(1)
}

/// The slice of `items` visible on the given 1-based page.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}
