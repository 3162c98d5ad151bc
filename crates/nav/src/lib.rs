//! Navigation state for entity facet views.
//!
//! Navigation intent lives in a flat string-keyed [`Fragment`], scoped per
//! entity by key prefix (`user-facet`, `user-pkey`, ...). [`NavStore`] is the
//! only writer: [`NavStore::publish`] merges a [`NavPatch`] into the fragment
//! and enqueues a [`NavEvent`] on the navigation bus.
//!
//! # Architecture
//!
//! ```text
//! link activation ─┐
//! back / forward  ─┼──► NavStore::publish ──► NavEvent ──► session loop
//! bookmark replace ┘
//! ```
//!
//! [`Route`] is the typed view of one entity's slice of the fragment.

mod facet;
mod fragment;
mod patch;
mod route;
mod store;

pub use facet::{Facet, StateKey};
pub use fragment::Fragment;
pub use patch::NavPatch;
pub use route::Route;
pub use store::{NavCause, NavEvent, NavReceiver, NavSender, NavStore, channel};
