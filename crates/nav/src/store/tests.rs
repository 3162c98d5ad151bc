use pretty_assertions::assert_eq;

use super::*;

fn drain(rx: &mut NavReceiver) -> Vec<NavEvent> {
	let mut events = Vec::new();
	while let Ok(event) = rx.try_recv() {
		events.push(event);
	}
	events
}

#[test]
fn publish_merges_and_keeps_unspecified_keys() {
	let (mut store, _rx) = NavStore::with_fragment(Fragment::parse("user-filter=adm&group-facet=details"));
	store.publish(
		NavPatch::new()
			.set("user-facet", "details")
			.set("user-pkey", "admin"),
	);

	assert_eq!(store.read("user-facet"), Some("details"));
	assert_eq!(store.read("user-pkey"), Some("admin"));
	assert_eq!(store.read("user-filter"), Some("adm"));
	assert_eq!(store.read_scoped("group", StateKey::Facet), Some("details"));
}

#[test]
fn empty_value_clears_key() {
	let (mut store, _rx) = NavStore::with_fragment(Fragment::parse("user-enroll=group"));
	store.publish(NavPatch::new().clear("user", StateKey::Enroll));
	assert_eq!(store.read("user-enroll"), None);
}

#[test]
fn every_publish_raises_one_event_in_order() {
	let (mut store, mut rx) = NavStore::new();
	store.publish(NavPatch::new().set("a", "1"));
	store.publish(NavPatch::new().set("a", "1"));
	store.publish(NavPatch::new().set("a", "2").set("b", "3"));

	let events = drain(&mut rx);
	assert_eq!(events.len(), 3);
	assert_eq!(
		events.iter().map(|e| e.revision).collect::<Vec<_>>(),
		vec![1, 2, 3]
	);
	assert_eq!(events[0].changed, vec!["a"]);
	assert!(events[1].changed.is_empty(), "unchanged publish still notifies");
	assert_eq!(events[2].changed, vec!["a", "b"]);
	assert!(events.iter().all(|e| e.cause == NavCause::Publish));
}

#[test]
fn reads_do_not_raise_events() {
	let (store, mut rx) = NavStore::with_fragment(Fragment::parse("a=1"));
	let _ = store.read("a");
	let _ = store.read("missing");
	assert!(drain(&mut rx).is_empty());
	assert_eq!(store.revision(), 0);
}

#[test]
fn back_and_forward_walk_history() {
	let (mut store, mut rx) = NavStore::new();
	store.publish(NavPatch::new().set("user-facet", "details"));
	store.publish(NavPatch::new().set("user-pkey", "admin"));
	drain(&mut rx);

	assert!(store.back());
	assert_eq!(store.read("user-pkey"), None);
	assert_eq!(store.read("user-facet"), Some("details"));

	assert!(store.back());
	assert!(store.fragment().is_empty());
	assert!(!store.back(), "oldest entry reached");

	assert!(store.forward());
	assert!(store.forward());
	assert_eq!(store.read("user-pkey"), Some("admin"));
	assert!(!store.forward(), "newest entry reached");

	let causes: Vec<_> = drain(&mut rx).into_iter().map(|e| e.cause).collect();
	assert_eq!(
		causes,
		vec![NavCause::Back, NavCause::Back, NavCause::Forward, NavCause::Forward]
	);
}

#[test]
fn publishing_after_back_drops_forward_entries() {
	let (mut store, _rx) = NavStore::new();
	store.publish(NavPatch::new().set("a", "1"));
	store.publish(NavPatch::new().set("a", "2"));
	assert!(store.back());
	store.publish(NavPatch::new().set("a", "3"));

	assert!(!store.can_go_forward());
	assert!(store.back());
	assert_eq!(store.read("a"), Some("1"));
}

#[test]
fn unchanged_publish_does_not_grow_history() {
	let (mut store, _rx) = NavStore::new();
	store.publish(NavPatch::new().set("a", "1"));
	store.publish(NavPatch::new().set("a", "1"));
	assert!(store.back());
	assert!(!store.can_go_back());
}

#[test]
fn replace_reports_diff() {
	let (mut store, mut rx) = NavStore::with_fragment(Fragment::parse("a=1&b=2"));
	store.replace(Fragment::parse("a=1&c=3"));

	let events = drain(&mut rx);
	assert_eq!(events.len(), 1);
	assert_eq!(events[0].cause, NavCause::Replace);
	assert_eq!(events[0].changed, vec!["b", "c"]);
	assert_eq!(store.read("b"), None);
}

#[test]
fn notify_raises_event_without_change() {
	let (mut store, mut rx) = NavStore::new();
	assert_eq!(store.notify(), 1);
	let events = drain(&mut rx);
	assert_eq!(events[0].cause, NavCause::Notify);
	assert!(events[0].changed.is_empty());
}

#[test]
fn closed_bus_does_not_fail_publish() {
	let (mut store, rx) = NavStore::new();
	drop(rx);
	assert_eq!(store.publish(NavPatch::new().set("a", "1")), 1);
	assert_eq!(store.read("a"), Some("1"));
}

#[tokio::test]
async fn events_are_received_asynchronously() {
	let (mut store, mut rx) = NavStore::new();
	store.publish(NavPatch::new().set("a", "1"));
	let event = rx.recv().await.unwrap();
	assert_eq!(event.revision, 1);
}
