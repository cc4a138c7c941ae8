//! Page-by-page collection

use std::future::Future;

/// Page size of `GET /zones`, which accepts 5 to 50
pub const ZONES_PER_PAGE: u32 = 50;

/// Page size of `GET /zones/{zone_id}/dns_records`
pub const RECORDS_PER_PAGE: u32 = 100;

/// Fetch pages 1, 2, ... until the first empty one, concatenating them
///
/// An error on any page discards what was collected so far.
pub async fn collect_pages<T, E, F, Fut>(mut fetch: F) -> Result<Vec<T>, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Vec<T>, E>>,
{
    let mut all = Vec::new();
    let mut page = 1;
    loop {
        let items = fetch(page).await?;
        if items.is_empty() {
            return Ok(all);
        }
        all.extend(items);
        page += 1;
    }
}
