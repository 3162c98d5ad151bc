//! Single-consumer navigation loop.
//!
//! A [`Session`] owns the navigation store, the change detector, the
//! dispatcher and one [`Container`] per attached entity. Every navigation
//! event is run through the detector for each container; containers whose
//! state changed are rebuilt by the dispatcher.
//!
//! ```text
//! NavStore::publish ──► NavEvent ──► Session::pump ──► ChangeDetector ──► Dispatcher
//!        ▲                                                                    │
//!        └────────────────────── link / control activation ◄──────────────────┘
//! ```
//!
//! Publishes made while an event is being handled are queued behind it and
//! handled by a later iteration, never interleaved.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use vista_entity::Registry;
use vista_nav::{Fragment, NavEvent, NavPatch, NavReceiver, NavStore, Route};

use crate::container::{Container, ControlKind};
use crate::detect::{ChangeDetector, Decision};
use crate::dispatch::Dispatcher;
use crate::error::SessionError;
use crate::render::Renderers;

/// A container rebuilt while handling one navigation event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rebuild {
	pub entity: String,
	pub revision: u64,
	pub decision: Decision,
	pub route: Route,
}

/// Owns all per-session navigation state.
pub struct Session {
	nav: NavStore,
	events: NavReceiver,
	detector: ChangeDetector,
	dispatcher: Dispatcher,
	views: Vec<Container>,
}

impl Session {
	pub fn new(registry: Arc<Registry>, renderers: Renderers) -> Self {
		Self::with_fragment(registry, renderers, Fragment::new())
	}

	/// Starts a session from an existing fragment (bookmark, deep link).
	pub fn with_fragment(registry: Arc<Registry>, renderers: Renderers, fragment: Fragment) -> Self {
		let (nav, events) = NavStore::with_fragment(fragment);
		Self {
			nav,
			events,
			detector: ChangeDetector::new(),
			dispatcher: Dispatcher::new(registry, renderers),
			views: Vec::new(),
		}
	}

	/// Adds a container for `entity` and queues an initial navigation event
	/// so it is built on the next [`Session::pump`].
	pub fn attach(&mut self, entity: &str) -> Result<(), SessionError> {
		if !self.dispatcher.registry().contains(entity) {
			return Err(SessionError::UnknownEntity(entity.to_string()));
		}
		if self.container(entity).is_some() {
			return Err(SessionError::AlreadyAttached(entity.to_string()));
		}
		self.views.push(Container::new(entity));
		self.nav.notify();
		Ok(())
	}

	pub fn nav(&self) -> &NavStore {
		&self.nav
	}

	pub fn nav_mut(&mut self) -> &mut NavStore {
		&mut self.nav
	}

	pub fn detector(&self) -> &ChangeDetector {
		&self.detector
	}

	pub fn registry(&self) -> &Arc<Registry> {
		self.dispatcher.registry()
	}

	pub fn publish(&mut self, patch: NavPatch) -> u64 {
		self.nav.publish(patch)
	}

	pub fn container(&self, entity: &str) -> Option<&Container> {
		self.views.iter().find(|c| c.entity() == entity)
	}

	/// Mutable container access for renderers completing a load.
	pub fn container_mut(&mut self, entity: &str) -> Option<&mut Container> {
		self.views.iter_mut().find(|c| c.entity() == entity)
	}

	pub fn containers(&self) -> impl Iterator<Item = &Container> {
		self.views.iter()
	}

	/// Activates link `id` in `entity`'s container.
	pub fn activate_link(&mut self, entity: &str, id: &str) -> Result<(), SessionError> {
		let container = self
			.container(entity)
			.ok_or_else(|| SessionError::NotAttached(entity.to_string()))?;
		let link = container
			.link(id)
			.cloned()
			.ok_or_else(|| SessionError::UnknownLink {
				entity: entity.to_string(),
				id: id.to_string(),
			})?;
		tracing::debug!(entity, id, "Activating link");
		link.activate(&mut self.nav);
		Ok(())
	}

	/// Activates the `kind` control in `entity`'s container.
	pub fn activate_control(&self, entity: &str, kind: ControlKind) -> Result<(), SessionError> {
		let container = self
			.container(entity)
			.ok_or_else(|| SessionError::NotAttached(entity.to_string()))?;
		let control = container
			.control(kind)
			.ok_or_else(|| SessionError::UnknownControl {
				entity: entity.to_string(),
				kind,
			})?;
		control.activate();
		Ok(())
	}

	pub fn back(&mut self) -> bool {
		self.nav.back()
	}

	pub fn forward(&mut self) -> bool {
		self.nav.forward()
	}

	/// Handles every queued navigation event in order.
	///
	/// Events raised while handling are handled in the same call. Returns the
	/// containers rebuilt, in order.
	pub fn pump(&mut self) -> Vec<Rebuild> {
		let mut rebuilds = Vec::new();
		while let Ok(event) = self.events.try_recv() {
			rebuilds.extend(self.handle(&event));
		}
		rebuilds
	}

	/// Handles navigation events as they arrive until `cancel` fires.
	pub async fn run(&mut self, cancel: CancellationToken) {
		loop {
			let event = tokio::select! {
				biased;
				_ = cancel.cancelled() => None,
				event = self.events.recv() => event,
			};
			let Some(event) = event else {
				break;
			};
			self.handle(&event);
		}
		tracing::debug!("Navigation loop stopped");
	}

	fn handle(&mut self, event: &NavEvent) -> Vec<Rebuild> {
		let mut rebuilds = Vec::new();
		for container in &mut self.views {
			let entity = container.entity().to_string();
			let decision = self.detector.observe(&entity, self.nav.fragment());
			if !decision.needs_rebuild() {
				tracing::trace!(
					entity = %entity,
					revision = event.revision,
					"Navigation event irrelevant; keeping facet"
				);
				continue;
			}
			tracing::debug!(entity = %entity, revision = event.revision, ?decision, "Rebuilding facet");
			let route = self.dispatcher.dispatch(container, &self.nav);
			rebuilds.push(Rebuild {
				entity,
				revision: event.revision,
				decision,
				route,
			});
		}
		rebuilds
	}
}
