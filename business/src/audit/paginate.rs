/// Rows per page on the audit page.
pub const PAGE_SIZE: usize = 10;

/// The `current_page` (1-based) slice of `items`, clipped to the available length.
///
/// Page 0 is treated as page 1; a page past the end is empty.
pub fn paginate<T>(items: &[T], current_page: usize, page_size: usize) -> &[T] {
    let start = current_page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// `ceil(len / page_size)`; zero for an empty list.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}
