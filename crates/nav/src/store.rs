//! The navigation state store and its event bus.

use tokio::sync::mpsc;

use crate::facet::StateKey;
use crate::fragment::Fragment;
use crate::patch::NavPatch;

/// Channel sender for navigation events.
pub type NavSender = mpsc::UnboundedSender<NavEvent>;

/// Channel receiver for the session loop.
pub type NavReceiver = mpsc::UnboundedReceiver<NavEvent>;

/// Creates a new navigation event channel pair.
pub fn channel() -> (NavSender, NavReceiver) {
	mpsc::unbounded_channel()
}

/// Upper bound on retained history entries; the oldest entries are dropped.
const MAX_HISTORY: usize = 256;

/// What raised a navigation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCause {
	/// A [`NavPatch`] was published.
	Publish,
	/// A whole fragment was installed (bookmark, pasted URL).
	Replace,
	/// History moved one entry back.
	Back,
	/// History moved one entry forward.
	Forward,
	/// Explicit re-notification without a state change (initial load).
	Notify,
}

/// A fragment change notification.
///
/// Raised for every publish, including ones that change nothing; consumers
/// decide for themselves whether the event is relevant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEvent {
	/// Store revision after the change.
	pub revision: u64,
	/// Fragment keys whose value changed, sorted.
	pub changed: Vec<String>,
	pub cause: NavCause,
}

/// Owns the fragment and is its only writer.
#[derive(Debug)]
pub struct NavStore {
	current: Fragment,
	history: Vec<Fragment>,
	/// Index into `history` of the entry matching `current`.
	cursor: usize,
	revision: u64,
	events: NavSender,
}

impl NavStore {
	/// Creates a store with an empty fragment.
	pub fn new() -> (Self, NavReceiver) {
		Self::with_fragment(Fragment::new())
	}

	/// Creates a store starting from an existing fragment.
	pub fn with_fragment(fragment: Fragment) -> (Self, NavReceiver) {
		let (tx, rx) = channel();
		let store = Self {
			history: vec![fragment.clone()],
			current: fragment,
			cursor: 0,
			revision: 0,
			events: tx,
		};
		(store, rx)
	}

	pub fn read(&self, key: &str) -> Option<&str> {
		self.current.get(key)
	}

	pub fn read_scoped(&self, entity: &str, key: StateKey) -> Option<&str> {
		self.current.get_scoped(entity, key)
	}

	pub fn fragment(&self) -> &Fragment {
		&self.current
	}

	pub fn revision(&self) -> u64 {
		self.revision
	}

	/// Merges `patch` into the fragment and raises a navigation event.
	///
	/// Returns the revision carried by the raised event.
	pub fn publish(&mut self, patch: NavPatch) -> u64 {
		let mut changed: Vec<String> = patch
			.iter()
			.filter_map(|(key, value)| self.current.set(key, value).then(|| key.to_string()))
			.collect();
		changed.sort();

		if !changed.is_empty() {
			self.push_history();
		}
		tracing::trace!(fragment = %self.current, ?changed, "Published navigation state");
		self.raise(changed, NavCause::Publish)
	}

	/// Replaces the whole fragment and raises a navigation event.
	pub fn replace(&mut self, fragment: Fragment) -> u64 {
		let changed = fragment.diff(&self.current);
		self.current = fragment;
		if !changed.is_empty() {
			self.push_history();
		}
		self.raise(changed, NavCause::Replace)
	}

	/// Raises a navigation event without changing state.
	pub fn notify(&mut self) -> u64 {
		self.raise(Vec::new(), NavCause::Notify)
	}

	/// Restores the previous history entry. Returns false at the oldest entry.
	pub fn back(&mut self) -> bool {
		if self.cursor == 0 {
			return false;
		}
		self.cursor -= 1;
		self.restore(NavCause::Back);
		true
	}

	/// Restores the next history entry. Returns false at the newest entry.
	pub fn forward(&mut self) -> bool {
		if self.cursor + 1 >= self.history.len() {
			return false;
		}
		self.cursor += 1;
		self.restore(NavCause::Forward);
		true
	}

	pub fn can_go_back(&self) -> bool {
		self.cursor > 0
	}

	pub fn can_go_forward(&self) -> bool {
		self.cursor + 1 < self.history.len()
	}

	fn restore(&mut self, cause: NavCause) {
		let target = self.history[self.cursor].clone();
		let changed = target.diff(&self.current);
		self.current = target;
		self.raise(changed, cause);
	}

	fn push_history(&mut self) {
		self.history.truncate(self.cursor + 1);
		self.history.push(self.current.clone());
		if self.history.len() > MAX_HISTORY {
			let excess = self.history.len() - MAX_HISTORY;
			self.history.drain(..excess);
		}
		self.cursor = self.history.len() - 1;
	}

	fn raise(&mut self, changed: Vec<String>, cause: NavCause) -> u64 {
		self.revision += 1;
		let event = NavEvent {
			revision: self.revision,
			changed,
			cause,
		};
		if self.events.send(event).is_err() {
			tracing::trace!(revision = self.revision, "Navigation bus closed; event dropped");
		}
		self.revision
	}
}

#[cfg(test)]
mod tests;
