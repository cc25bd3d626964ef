//! Cursor pagination driver.
//!
//! Drains a [`PagedQuery`] into a single map. Only a complete map or an
//! error ever leaves this module.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use super::queries::{Page, PagedQuery};
use super::GraphQlTransport;
use crate::error::{DiscoError, DiscoResult};

#[derive(Debug, PartialEq, Eq)]
enum PageState {
    Fetching(Option<String>),
    Done,
}

/// Fetch every page of `query` and merge the pairs. Duplicate logins keep
/// the last value seen; empty logins are dropped.
pub async fn drain<T, Q>(transport: &T, query: &Q) -> DiscoResult<HashMap<String, String>>
where
    T: GraphQlTransport + ?Sized,
    Q: PagedQuery + Sync,
{
    let mut result = HashMap::new();
    let mut cursor: Option<String> = None;
    let mut pages = 0usize;

    loop {
        debug!(query = query.name(), cursor = ?cursor, "requesting page");
        let body = transport.execute(&query.request(cursor.as_deref())).await?;
        let page = query.decode(&body)?;
        pages += 1;

        let next = next_state(cursor.as_deref(), &page, &body)?;
        let edges = page.entries.len();
        for (login, value) in page.entries {
            if login.is_empty() {
                warn!(query = query.name(), "skipping edge with empty login");
                continue;
            }
            result.insert(login, value);
        }
        debug!(query = query.name(), edges, total = result.len(), "page merged");

        match next {
            PageState::Fetching(c) => cursor = c,
            PageState::Done => break,
        }
    }

    info!(query = query.name(), pages, total = result.len(), "fetch complete");
    Ok(result)
}

fn next_state(sent: Option<&str>, page: &Page, body: &str) -> DiscoResult<PageState> {
    if !page.has_next_page {
        return Ok(PageState::Done);
    }
    match page.end_cursor.as_deref() {
        None => Err(DiscoError::malformed(
            "hasNextPage is true but endCursor is missing",
            body,
        )),
        Some(next) if Some(next) == sent => Err(DiscoError::malformed(
            format!("pagination cursor {next} did not advance"),
            body,
        )),
        Some(next) => Ok(PageState::Fetching(Some(next.to_string()))),
    }
}
