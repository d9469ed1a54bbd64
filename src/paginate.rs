use crate::error::PaginateError;
use std::fmt::Display;

/// Return the 1-based page `page_number` of `source`, `page_size` items per page.
///
/// The source is materialized exactly once, so a lazily-computed iterator is
/// never evaluated twice. An empty source short-circuits to an empty page
/// before `page_number`/`page_size` are validated; for a non-empty source both
/// must be at least 1. A page past the end is empty, not an error.
pub fn get_page<I>(
    source: I,
    page_number: usize,
    page_size: usize,
) -> Result<Vec<I::Item>, PaginateError>
where
    I: IntoIterator,
{
    let items: Vec<I::Item> = source.into_iter().collect();
    page_of(items, page_number, page_size)
}

/// Number of pages `source` occupies at `page_size` items per page.
///
/// `ceil(count / page_size)`; an empty source takes 0 pages. Unlike
/// [`get_page`], `page_size` is validated even for an empty source: the
/// division is nonsensical at size 0 regardless of the count.
pub fn get_page_total<I>(source: I, page_size: usize) -> Result<usize, PaginateError>
where
    I: IntoIterator,
{
    if page_size == 0 {
        return Err(PaginateError::invalid_argument(
            "page size must be greater than zero",
        ));
    }
    let count = source.into_iter().count();
    Ok(count.div_ceil(page_size))
}

/// [`get_page`] over a source whose items can fail to produce.
///
/// Materialization stops at the first `Err` item; the failure is re-signaled
/// as [`PaginateError::InvalidArgument`] carrying the cause's description, and
/// no partial page is returned.
pub fn try_get_page<I, T, E>(
    source: I,
    page_number: usize,
    page_size: usize,
) -> Result<Vec<T>, PaginateError>
where
    I: IntoIterator<Item = Result<T, E>>,
    E: Display,
{
    let items: Vec<T> = source
        .into_iter()
        .collect::<Result<_, E>>()
        .map_err(PaginateError::wrap)?;
    page_of(items, page_number, page_size)
}

/// [`get_page_total`] over a source whose items can fail to produce.
pub fn try_get_page_total<I, T, E>(source: I, page_size: usize) -> Result<usize, PaginateError>
where
    I: IntoIterator<Item = Result<T, E>>,
    E: Display,
{
    if page_size == 0 {
        return Err(PaginateError::invalid_argument(
            "page size must be greater than zero",
        ));
    }
    let mut count = 0usize;
    for item in source {
        item.map_err(PaginateError::wrap)?;
        count += 1;
    }
    Ok(count.div_ceil(page_size))
}

fn page_of<T>(
    items: Vec<T>,
    page_number: usize,
    page_size: usize,
) -> Result<Vec<T>, PaginateError> {
    if items.is_empty() {
        // Documented edge case: an empty collection pages to an empty page
        // even when the page arguments are invalid.
        return Ok(Vec::new());
    }

    if page_number == 0 || page_size == 0 {
        return Err(PaginateError::invalid_argument(
            "page number and page size must be greater than zero",
        ));
    }

    // A skip that overflows usize is past any real collection.
    let Some(skip) = (page_number - 1).checked_mul(page_size) else {
        return Ok(Vec::new());
    };
    if skip >= items.len() {
        return Ok(Vec::new());
    }

    Ok(items.into_iter().skip(skip).take(page_size).collect())
}
