//! Resource URI construction.
//!
//! A single free function shared by both builder variants; path segments are
//! joined with exactly one slash regardless of how the base URL is written.

/// Build the URI for a resource, optionally scoped to one entity.
pub fn build_uri(base_url: &str, resource: &str, id: Option<&str>) -> String {
    let base = base_url.trim_end_matches('/');
    match id {
        Some(id) => format!("{base}/{resource}/{id}"),
        None => format!("{base}/{resource}"),
    }
}
