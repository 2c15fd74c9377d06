//! Facet table builders.
//!
//! Each builder maps an optional content list to view rows. `None` in means
//! `None` out: the section is omitted. An empty list stays an empty list, so
//! the section still renders its shell.

mod catalog;
mod details;
mod payment;
mod related;

pub use catalog::*;
pub use details::*;
pub use payment::*;
pub use related::*;

/// Map a facet list, preserving absence.
fn build_facet<'a, R, V>(
    facet: &str,
    source: Option<&'a [R]>,
    map: impl Fn(&'a R) -> V,
) -> Option<Vec<V>> {
    match source {
        Some(items) => Some(items.iter().map(map).collect()),
        None => {
            tracing::debug!(facet, "facet absent, section omitted");
            None
        }
    }
}
