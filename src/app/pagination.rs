//! Walking every page of a listing endpoint.

use tracing::debug;

use crate::domain::{ApiError, MAX_PAGE, MAX_PAGE_SIZE, Order, Pagination};

/// Fetch pages of [`MAX_PAGE_SIZE`] entries, starting at page 1, until a
/// page comes back shorter than that, and concatenate them.
///
/// The first error aborts the walk and is returned as is.
///
/// ```
/// use std::sync::Arc;
/// use blockfrost_client::app::collect_all_pages;
/// use blockfrost_client::domain::PoolService;
/// use blockfrost_client::test_utils::{MockTransport, mock_client};
///
/// let client = mock_client(Arc::new(MockTransport::new().with_response(200, r#"["pool1a"]"#)));
/// let pools = collect_all_pages(None, |page| client.pools(&page))?;
/// assert_eq!(pools, vec!["pool1a".to_string()]);
/// # Ok::<(), blockfrost_client::domain::ApiError>(())
/// ```
pub fn collect_all_pages<T, F>(order: Option<Order>, mut fetch: F) -> Result<Vec<T>, ApiError>
where
    F: FnMut(Pagination) -> Result<Vec<T>, ApiError>,
{
    let mut all = Vec::new();
    for page in 1..=MAX_PAGE {
        let params = Pagination {
            order,
            ..Pagination::page(page)
        };
        let batch = fetch(params)?;
        let len = batch.len();
        all.extend(batch);

        if len < MAX_PAGE_SIZE as usize {
            debug!(pages = page, total = all.len(), "Collected all pages");
            break;
        }
    }
    Ok(all)
}
