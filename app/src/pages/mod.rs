//! Top-level pages, one per [`Route`](lmcgtfy_core::Route) variant.

pub mod index;
pub mod not_found;
pub mod show_query;

pub use index::Index;
pub use not_found::NotFound;
pub use show_query::ShowQuery;
