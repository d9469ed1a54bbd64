//! In-memory pagination over arbitrary sequences.
//!
//! Two stateless operations form the core: [`get_page`] slices out the
//! 1-based page of a collection, and [`get_page_total`] counts how many pages
//! the collection needs at a given page size. [`Pager`] layers page metadata
//! (totals, prev/next neighbors) and whole-collection chunking on top.

pub mod error;
pub mod pager;
pub mod paginate;

pub use error::PaginateError;
pub use pager::{PageInfo, PageRequest, Pager};
pub use paginate::{get_page, get_page_total, try_get_page, try_get_page_total};
