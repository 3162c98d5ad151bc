use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

fn apply(fragment: &mut Fragment, patch: &NavPatch) {
	for (key, value) in patch.iter() {
		fragment.set(key, value);
	}
}

#[test]
fn empty_fragment_is_unfiltered_search() {
	assert_eq!(
		Route::decode("user", &Fragment::new()),
		Route::Search { filter: None }
	);
}

#[rstest]
#[case("user-facet=search&user-filter=adm", Route::Search { filter: Some("adm".into()) })]
#[case("user-filter=adm", Route::Search { filter: Some("adm".into()) })]
#[case("user-facet=details&user-pkey=admin", Route::Details { pkey: Some("admin".into()) })]
#[case("user-facet=details", Route::Details { pkey: None })]
#[case(
	"user-facet=associate&user-pkey=admin&user-enroll=group",
	Route::Associate { pkey: "admin".into(), enroll: "group".into() }
)]
#[case("user-facet=associate", Route::Associate { pkey: String::new(), enroll: String::new() })]
#[case("user-facet=bogus&user-pkey=admin", Route::Unknown("bogus".into()))]
fn decode_reads_only_active_facet(#[case] text: &str, #[case] expected: Route) {
	assert_eq!(Route::decode("user", &Fragment::parse(text)), expected);
}

#[test]
fn stale_keys_of_other_facets_are_ignored() {
	let fragment = Fragment::parse("user-facet=search&user-pkey=admin&user-enroll=group");
	assert_eq!(
		Route::decode("user", &fragment),
		Route::Search { filter: None }
	);
}

#[test]
fn other_entities_do_not_leak() {
	let fragment = Fragment::parse("group-facet=details&group-pkey=admins");
	assert_eq!(
		Route::decode("user", &fragment),
		Route::Search { filter: None }
	);
}

#[test]
fn encode_then_decode_restores_route() {
	let routes = [
		Route::Search { filter: Some("a b".into()) },
		Route::Details { pkey: Some("admin".into()) },
		Route::Associate {
			pkey: "admin".into(),
			enroll: "group".into(),
		},
	];
	for route in routes {
		let mut fragment = Fragment::parse("user-filter=old&user-pkey=old");
		apply(&mut fragment, &route.encode("user"));
		assert_eq!(Route::decode("user", &fragment), route);
	}
}

#[test]
fn encoding_absent_filter_clears_stale_value() {
	let mut fragment = Fragment::parse("user-facet=details&user-filter=old");
	apply(&mut fragment, &Route::Search { filter: None }.encode("user"));
	assert_eq!(fragment.get("user-filter"), None);
	assert_eq!(fragment.get("user-facet"), Some("search"));
}

#[test]
fn facet_name_preserves_unknown_value() {
	assert_eq!(Route::Unknown("weird".into()).facet_name(), "weird");
	assert_eq!(Route::Details { pkey: None }.facet_name(), "details");
	assert_eq!(Route::default().facet(), Some(Facet::Search));
}
