//! Pagination utilities for ClickUp API responses.
//!
//! ClickUp uses two schemes. Task-shaped endpoints take a 0-indexed `page`
//! and report `last_page`; comment, chat and doc endpoints hand back a cursor
//! for the next request. Both are turned into lazy streams that issue one
//! request whenever the items of the previous page run out.

use std::future::Future;

use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};
use serde::Serialize;

use crate::error::{ClickUpError, Result};

/// Page size ClickUp uses for task listings.
pub const TASK_PAGE_SIZE: usize = 100;

/// Maximum pages to fetch (safety limit).
pub const MAX_PAGES: u32 = 1000;

/// A page of results from a page-numbered endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(bound = "T: Serialize")]
pub struct Page<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Page number (0-indexed).
    pub page: u32,
    /// Whether there are more pages.
    pub has_more: bool,
}

impl<T> Page<T> {
    /// Create a page from items and the API's `last_page` flag.
    ///
    /// When the API omits `last_page`, a full page is taken to mean more
    /// results may follow.
    #[must_use]
    pub fn new(items: Vec<T>, page: u32, last_page: Option<bool>, page_size: usize) -> Self {
        let has_more = match last_page {
            Some(last) => !last,
            None => items.len() >= page_size,
        };
        Self {
            items,
            page,
            has_more,
        }
    }

    /// Map the items to a different type.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            has_more: self.has_more,
        }
    }

    /// Returns true if this page has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns an iterator over the items in this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// A page of results from a cursor-based endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(bound = "T: Serialize, C: Serialize")]
pub struct CursorPage<T, C = String> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Cursor for the following page, `None` on the last page.
    pub next_cursor: Option<C>,
}

impl<T, C> CursorPage<T, C> {
    /// Create a cursor page.
    #[must_use]
    pub fn new(items: Vec<T>, next_cursor: Option<C>) -> Self {
        Self { items, next_cursor }
    }

    /// Whether another page can be requested.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.next_cursor.is_some()
    }

    /// Returns true if this page has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T, C> IntoIterator for CursorPage<T, C> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Lazily walk a page-numbered endpoint, starting at page 0.
///
/// `fetch` is called with each page number in turn. The stream ends after a
/// page reports no more results, after an empty page, or when the safety
/// limit is hit. An error is yielded once and then ends the stream.
pub fn paginate_pages<'a, T, F, Fut>(fetch: F) -> BoxStream<'a, Result<T>>
where
    T: Send + 'a,
    F: FnMut(u32) -> Fut + Send + 'a,
    Fut: Future<Output = Result<Page<T>>> + Send + 'a,
{
    stream::try_unfold((fetch, Some(0u32)), |(mut fetch, next)| async move {
        let Some(page_number) = next else {
            return Ok(None);
        };

        let page = fetch(page_number).await?;
        let next = if page.has_more && !page.items.is_empty() {
            if page_number + 1 >= MAX_PAGES {
                tracing::warn!(
                    "Reached pagination limit of {} pages, stopping",
                    MAX_PAGES
                );
                None
            } else {
                Some(page_number + 1)
            }
        } else {
            None
        };

        Ok::<_, ClickUpError>(Some((page.items, (fetch, next))))
    })
    .map_ok(|items| stream::iter(items.into_iter().map(Ok::<T, ClickUpError>)))
    .try_flatten()
    .boxed()
}

/// Lazily walk a cursor-based endpoint.
///
/// `fetch` receives `None` for the first page and the previous page's
/// `next_cursor` afterwards. The stream ends when no cursor is returned, when
/// the same cursor comes back twice, or when the safety limit is hit.
pub fn paginate_cursor<'a, T, C, F, Fut>(fetch: F) -> BoxStream<'a, Result<T>>
where
    T: Send + 'a,
    C: Clone + PartialEq + Send + 'a,
    F: FnMut(Option<C>) -> Fut + Send + 'a,
    Fut: Future<Output = Result<CursorPage<T, C>>> + Send + 'a,
{
    struct State<F, C> {
        fetch: F,
        cursor: Option<C>,
        done: bool,
        pages: u32,
    }

    let initial = State {
        fetch,
        cursor: None,
        done: false,
        pages: 0,
    };

    stream::try_unfold(initial, |mut state| async move {
        if state.done {
            return Ok(None);
        }

        let page = (state.fetch)(state.cursor.clone()).await?;
        state.pages += 1;

        match page.next_cursor {
            Some(next) if state.cursor.as_ref() != Some(&next) && !page.items.is_empty() => {
                if state.pages >= MAX_PAGES {
                    tracing::warn!(
                        "Reached pagination limit of {} pages, stopping",
                        MAX_PAGES
                    );
                    state.done = true;
                } else {
                    state.cursor = Some(next);
                }
            }
            _ => state.done = true,
        }

        Ok::<_, ClickUpError>(Some((page.items, state)))
    })
    .map_ok(|items| stream::iter(items.into_iter().map(Ok::<T, ClickUpError>)))
    .try_flatten()
    .boxed()
}

/// Drain a paginated stream into a vector, stopping at the first error.
pub async fn collect_all<T>(stream: BoxStream<'_, Result<T>>) -> Result<Vec<T>> {
    stream.try_collect().await
}
