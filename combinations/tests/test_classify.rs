//! Integration tests exercising the bundled catalog end to end through
//! [`Engine`], covering the engine's structural properties (role-vector
//! shape, permutation invariance, catalog priority, More-template
//! scaling, short-circuit on a single bad component) and a sample of
//! named strategies.

use combinations::{parse_line, Engine};

fn lines(rows: &[&str]) -> Vec<combinations::Component> {
    rows.iter().map(|r| parse_line(r)).collect()
}

#[test]
fn default_catalog_has_the_documented_shape() {
    let engine = Engine::with_default_catalog();
    assert!(engine.catalog().len() >= 60);
}

#[test]
fn role_vector_is_a_permutation_of_one_based_positions() {
    let engine = Engine::with_default_catalog();
    let components = lines(&["F 1 2010-03-01", "F -1 2010-03-01"]);
    let (name, roles) = engine.classify(&components);
    assert_eq!(name, "Inter commodity spread");
    let mut sorted = roles.clone();
    sorted.sort();
    assert_eq!(sorted, vec![1, 2]);
}

#[test]
fn future_butterfly_is_permutation_invariant() {
    let engine = Engine::with_default_catalog();
    // legs: ratio 1 / -2 / 1 across three ascending-dated futures, fed in
    // shuffled order.
    let shuffled = lines(&[
        "F -2 2010-06-01",
        "F 1 2010-09-01",
        "F 1 2010-03-01",
    ]);
    let (name, roles) = engine.classify(&shuffled);
    assert_eq!(name, "Future butterfly");
    // component 0 (the -2 leg, middle date) must have played role 2.
    assert_eq!(roles[0], 2);
    let mut sorted = roles.clone();
    sorted.sort();
    assert_eq!(sorted, vec![1, 2, 3]);

    let reversed = lines(&[
        "F 1 2010-03-01",
        "F 1 2010-09-01",
        "F -2 2010-06-01",
    ]);
    assert_eq!(engine.classify(&reversed).0, "Future butterfly");
}

#[test]
fn bundle_is_two_packs_concatenated_and_pack_wins_on_exactly_four() {
    let engine = Engine::with_default_catalog();
    let one_group = lines(&[
        "F 1 2010-03-01",
        "F 1 2010-06-01",
        "F 1 2010-09-01",
        "F 1 2010-12-01",
    ]);
    assert_eq!(engine.classify(&one_group).0, "Pack");

    let two_groups = lines(&[
        "F 1 2010-03-01",
        "F 1 2010-06-01",
        "F 1 2010-09-01",
        "F 1 2010-12-01",
        "F 1 2011-03-01",
        "F 1 2011-06-01",
        "F 1 2011-09-01",
        "F 1 2011-12-01",
    ]);
    assert_eq!(engine.classify(&two_groups).0, "Bundle");
}

#[test]
fn options_strip_scales_to_a_large_input_and_breaks_on_one_bad_ratio() {
    let engine = Engine::with_default_catalog();
    // All calls, no puts: every other Call/Put Fixed template rejects in
    // O(1) on the component count, and "Straddle strip" (the one Multiple
    // template whose leg types could otherwise match) needs a Put leg
    // that is never present, so only "Options strip" (More, O(n)) is a
    // candidate for the full pass.
    let mut rows: Vec<String> = (0..65536)
        .map(|i| format!("C 1 2000 2010-03-{:02}", 1 + (i % 27)))
        .collect();
    let components: Vec<_> = rows.iter().map(|s| parse_line(s)).collect();
    let (name, roles) = engine.classify(&components);
    assert_eq!(name, "Options strip");
    assert_eq!(roles.len(), 65536);

    rows[42] = "C 2 2000 2010-03-01".to_string();
    let broken: Vec<_> = rows.iter().map(|s| parse_line(s)).collect();
    let (name, roles) = engine.classify(&broken);
    assert_eq!(name, "Unclassified");
    assert!(roles.is_empty());
}

#[test]
fn straddle_strip_jumps_matches_mixed_unit_period_offsets() {
    let engine = Engine::with_default_catalog();
    let components = lines(&[
        "C 1 2000 2010-03-01",
        "P 1 2000 2010-03-01",
        "C 1 2000 2010-03-03", // +2d
        "P 1 2000 2010-04-01", // +1m
        "C 1 2000 2010-05-01", // +2m
        "P 1 2000 2010-04-30", // +60d
        "C 1 2000 2010-12-01", // +3q
        "P 1 2000 2013-03-01", // +3y
    ]);
    let (name, _) = engine.classify(&components);
    assert_eq!(name, "Straddle strip jumps");
}

#[test]
fn straddle_strip_jumps_anchors_across_a_leap_year() {
    let engine = Engine::with_default_catalog();
    let components = lines(&[
        "C 1 2000 1999-12-31",
        "P 1 2000 1999-12-31",
        "C 1 2000 2000-01-02", // +2d
        "P 1 2000 2000-01-31", // +1m
        "C 1 2000 2000-03-02", // +2m
        "P 1 2000 2000-02-29", // +60d, the leap-day wrap
        "C 1 2000 2000-12-01", // +3q
        "P 1 2000 2002-12-31", // +3y
    ]);
    let (name, _) = engine.classify(&components);
    assert_eq!(name, "Straddle strip jumps");
}

#[test]
fn a_single_day_perturbation_falls_back_to_options_strip() {
    let engine = Engine::with_default_catalog();
    let components = lines(&[
        "C 1 2000 1999-12-31",
        "P 1 2000 1999-12-31",
        "C 1 2000 2000-01-02",
        "P 1 2000 2000-01-31",
        "C 1 2000 2000-03-02",
        "P 1 2000 2000-03-01", // perturbed: should be 2000-02-29
        "C 1 2000 2000-12-01",
        "P 1 2000 2002-12-31",
    ]);
    let (name, _) = engine.classify(&components);
    assert_eq!(name, "Options strip");
}

#[test]
fn box_is_permutation_invariant() {
    let engine = Engine::with_default_catalog();
    let direct = lines(&[
        "C 1 2000 2010-03-01",
        "P -1 2000 2010-03-01",
        "P 1 2100 2010-03-01",
        "C -1 2100 2010-03-01",
    ]);
    assert_eq!(engine.classify(&direct).0, "Box");

    let reverse = lines(&[
        "C -1 2100 2010-03-01",
        "P 1 2100 2010-03-01",
        "P -1 2000 2010-03-01",
        "C 1 2000 2010-03-01",
    ]);
    assert_eq!(engine.classify(&reverse).0, "Box");

    let shuffled = lines(&[
        "P 1 2100 2010-03-01",
        "C 1 2000 2010-03-01",
        "C -1 2100 2010-03-01",
        "P -1 2000 2010-03-01",
    ]);
    assert_eq!(engine.classify(&shuffled).0, "Box");
}

#[test]
fn lone_future_has_no_implicit_match() {
    let engine = Engine::with_default_catalog();
    // A single future satisfies no bundled template — there is no More
    // future template to fall back on, unlike the options side.
    let lone_future = lines(&["F 1 2010-03-01"]);
    assert_eq!(engine.classify(&lone_future).0, "Unclassified");
}

#[test]
fn unknown_component_never_satisfies_a_typed_leg() {
    let engine = Engine::with_default_catalog();
    let components = vec![parse_line("garbage line"), parse_line("F -1 2010-03-01")];
    let (name, roles) = engine.classify(&components);
    assert_eq!(name, "Unclassified");
    assert!(roles.is_empty());
}

#[test]
fn empty_components_are_unclassified() {
    let engine = Engine::with_default_catalog();
    assert_eq!(engine.classify(&[]).0, "Unclassified");
}

#[test]
fn straddle_matches_a_plain_same_strike_same_expiration_pair() {
    let engine = Engine::with_default_catalog();
    let components = lines(&["P 1 2000 2010-03-01", "C 1 2000 2010-03-01"]);
    assert_eq!(engine.classify(&components).0, "Straddle");
}

#[test]
fn call_spread_requires_ascending_strikes_same_expiration() {
    let engine = Engine::with_default_catalog();
    let components = lines(&["C 1 2000 2010-03-01", "C -1 2100 2010-03-01"]);
    assert_eq!(engine.classify(&components).0, "Call spread");
}

#[test]
fn strip_requires_six_futures_at_the_same_expiration() {
    let engine = Engine::with_default_catalog();
    let components = lines(&[
        "F 1 2010-03-01",
        "F 1 2010-03-01",
        "F 1 2010-03-01",
        "F 1 2010-03-01",
        "F 1 2010-03-01",
        "F 1 2010-03-01",
    ]);
    assert_eq!(engine.classify(&components).0, "Strip");
}

#[test]
fn iron_butterfly_shares_the_body_strike_between_put_and_call() {
    let engine = Engine::with_default_catalog();
    let components = lines(&[
        "P -1 2000 2010-03-01",
        "P 1 2100 2010-03-01",
        "C 1 2100 2010-03-01",
        "C -1 2200 2010-03-01",
    ]);
    assert_eq!(engine.classify(&components).0, "Iron butterfly");
}
