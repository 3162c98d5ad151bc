//! Facet routing engine.
//!
//! Renders one entity as one of three facets (search, details, associate),
//! with the choice and its parameters read from the navigation fragment.
//!
//! * [`ChangeDetector`] - decides whether a navigation event requires a rebuild
//! * [`Dispatcher`] - clears a [`Container`] and builds the requested facet
//! * [`links`] - view-switch bar and search-row quick links
//! * [`Session`] - owns the stores and drives the event loop
//!
//! Rendering of the facets themselves is external; see [`render`].

mod container;
mod detect;
mod dispatch;
mod error;
pub mod links;
pub mod render;
mod session;

pub use container::{
	Cell, Container, Control, ControlHandler, ControlKind, Link, LinkHandler, LinkList, LoadTicket,
	Node, Panel, Row,
};
pub use detect::{ChangeDetector, Decision};
pub use dispatch::Dispatcher;
pub use error::{QuickLinkError, SessionError};
pub use links::QuickLinks;
pub use render::{
	AddDialog, AssociationFacet, AssociationList, Column, DetailsFacet, Record, Renderers,
	SearchFacet,
};
pub use session::{Rebuild, Session};
