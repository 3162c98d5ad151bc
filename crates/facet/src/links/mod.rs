//! Navigation link generators.
//!
//! * [`view_switch`] - the facet/entity switch bar shown in details and
//!   associate facets
//! * [`QuickLinks`] - per-row shortcuts in search results

mod quick_links;
pub mod view_switch;

pub use quick_links::QuickLinks;
