use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

fn observe(detector: &mut ChangeDetector, fragment: &str) -> Decision {
	detector.observe("user", &Fragment::parse(fragment))
}

#[test]
fn first_observation_is_a_facet_switch() {
	let mut detector = ChangeDetector::new();
	assert_eq!(observe(&mut detector, ""), Decision::FacetSwitch);
	assert_eq!(detector.cached("user", StateKey::Facet), Some("search"));
}

#[test]
fn identical_event_is_unchanged() {
	let mut detector = ChangeDetector::new();
	observe(&mut detector, "");
	assert_eq!(observe(&mut detector, ""), Decision::Unchanged);
}

#[rstest]
#[case("search", "filter", StateKey::Filter)]
#[case("details", "pkey", StateKey::Pkey)]
#[case("associate", "enroll", StateKey::Enroll)]
fn secondary_change_rebuilds_once(#[case] facet: &str, #[case] key: &str, #[case] expected: StateKey) {
	let mut detector = ChangeDetector::new();
	let first = format!("user-facet={facet}&user-{key}=one");
	let second = format!("user-facet={facet}&user-{key}=two");

	assert_eq!(observe(&mut detector, &first), Decision::FacetSwitch);
	assert_eq!(observe(&mut detector, &first), Decision::Unchanged);
	assert_eq!(observe(&mut detector, &second), Decision::ParamChange(expected));
	assert_eq!(observe(&mut detector, &second), Decision::Unchanged);
}

#[test]
fn associate_ignores_pkey_only_change() {
	let mut detector = ChangeDetector::new();
	observe(&mut detector, "user-facet=associate&user-enroll=group&user-pkey=admin");
	assert_eq!(
		observe(&mut detector, "user-facet=associate&user-enroll=group&user-pkey=guest"),
		Decision::Unchanged
	);
}

#[test]
fn parameters_of_inactive_facets_are_ignored() {
	let mut detector = ChangeDetector::new();
	observe(&mut detector, "user-facet=details&user-pkey=admin");
	assert_eq!(
		observe(&mut detector, "user-facet=details&user-pkey=admin&user-filter=x&user-enroll=group"),
		Decision::Unchanged
	);
}

#[test]
fn clearing_a_parameter_is_a_change() {
	let mut detector = ChangeDetector::new();
	observe(&mut detector, "user-filter=adm");
	assert_eq!(
		observe(&mut detector, ""),
		Decision::ParamChange(StateKey::Filter)
	);
}

#[test]
fn unknown_facet_rebuilds_once_then_stays_quiet() {
	let mut detector = ChangeDetector::new();
	assert_eq!(observe(&mut detector, "user-facet=bogus"), Decision::FacetSwitch);
	assert_eq!(
		observe(&mut detector, "user-facet=bogus&user-pkey=x"),
		Decision::Unchanged
	);
	assert_eq!(observe(&mut detector, ""), Decision::FacetSwitch);
}

#[test]
fn entities_are_cached_independently() {
	let mut detector = ChangeDetector::new();
	let fragment = Fragment::parse("user-facet=details&user-pkey=admin");

	assert_eq!(detector.observe("user", &fragment), Decision::FacetSwitch);
	assert_eq!(detector.observe("group", &fragment), Decision::FacetSwitch);
	assert_eq!(detector.cached("group", StateKey::Facet), Some("search"));

	let fragment = Fragment::parse("user-facet=details&user-pkey=admin&group-filter=adm");
	assert_eq!(detector.observe("user", &fragment), Decision::Unchanged);
	assert_eq!(
		detector.observe("group", &fragment),
		Decision::ParamChange(StateKey::Filter)
	);
}

#[test]
fn returning_to_a_facet_compares_against_fresh_value() {
	let mut detector = ChangeDetector::new();
	observe(&mut detector, "user-facet=details&user-pkey=admin");
	observe(&mut detector, "user-facet=search&user-pkey=admin");
	assert_eq!(
		observe(&mut detector, "user-facet=details&user-pkey=guest"),
		Decision::FacetSwitch
	);
	assert_eq!(detector.cached("user", StateKey::Pkey), Some("guest"));
}

#[test]
fn facet_switch_seeds_secondary_value() {
	let mut detector = ChangeDetector::new();
	observe(&mut detector, "");
	assert_eq!(
		observe(&mut detector, "user-facet=details&user-pkey=admin"),
		Decision::FacetSwitch
	);
	assert_eq!(detector.cached("user", StateKey::Pkey), Some("admin"));
	assert_eq!(
		observe(&mut detector, "user-facet=details&user-pkey=admin"),
		Decision::Unchanged
	);
}
