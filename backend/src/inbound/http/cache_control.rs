//! Shared cache-control policies for HTTP handlers.

/// Store contents change under clients' feet; every read must revalidate.
pub const NO_CACHE: &str = "no-cache";

/// Build the cache-control header tuple for resource reads.
pub const fn no_cache_header() -> (&'static str, &'static str) {
    ("Cache-Control", NO_CACHE)
}
