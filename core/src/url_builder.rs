//! Joins the configured base URL with an optional resource id.

/// Build the upstream URL for the collection (`id == None`) or for a single
/// resource.
///
/// Without an id a single trailing slash is removed, so `build(base, None)`
/// is the same whether or not `base` ends in `/`. With an id the base gets
/// exactly one separating slash. The id is not escaped.
pub fn build(base_url: &str, id: Option<&str>) -> String {
    match id {
        None => base_url.strip_suffix('/').unwrap_or(base_url).to_string(),
        Some(id) if base_url.ends_with('/') => format!("{base_url}{id}"),
        Some(id) => format!("{base_url}/{id}"),
    }
}
