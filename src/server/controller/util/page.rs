use axum::http::Uri;
use url::form_urlencoded;

use crate::{
    model::{api::Page, manifest::ManifestEntryDto},
    server::service::manifest::ManifestResults,
};

/// Link to `page` of the listing at `uri`, keeping every other query parameter.
///
/// The first page is addressed without a `page` parameter.
pub fn page_link(uri: &Uri, page: u64) -> String {
    let params = form_urlencoded::parse(uri.query().unwrap_or_default().as_bytes())
        .into_owned()
        .filter(|(key, _)| key != "page");

    let mut query = form_urlencoded::Serializer::new(String::new());
    query.extend_pairs(params);
    if page > 1 {
        query.append_pair("page", &page.to_string());
    }
    let query = query.finish();

    if query.is_empty() {
        uri.path().to_string()
    } else {
        format!("{}?{}", uri.path(), query)
    }
}

/// Wrap service results in the `{count, next, previous, results}` envelope
pub fn into_page(results: ManifestResults, uri: &Uri) -> Page<ManifestEntryDto> {
    let ManifestResults {
        items,
        count,
        page,
        num_pages,
    } = results;

    Page {
        count,
        next: (page < num_pages).then(|| page_link(uri, page + 1)),
        previous: (page > 1).then(|| page_link(uri, page - 1)),
        results: items,
    }
}
