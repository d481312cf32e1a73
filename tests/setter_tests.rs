#![cfg(feature = "optics")]
//! Scenario tests for setters over nested data.

use std::collections::{BTreeSet, HashMap, HashSet};

use focal::key_path;
use focal::optics::{
    EnumPath, OutOfBounds, Setter, each, filtering, first, index, map_key, member, ok_case, prop,
    second, some, update_key_if_present,
};
use rstest::rstest;

#[derive(Clone, PartialEq, Debug)]
struct Food {
    name: String,
}

#[derive(Clone, PartialEq, Debug)]
struct Location {
    name: String,
}

#[derive(Clone, PartialEq, Debug)]
struct User {
    name: String,
    location: Location,
    favorite_foods: Vec<Food>,
}

fn blob() -> User {
    User {
        name: "Blob".to_string(),
        location: Location {
            name: "Brooklyn".to_string(),
        },
        favorite_foods: vec![
            Food {
                name: "Tacos".to_string(),
            },
            Food {
                name: "Nachos".to_string(),
            },
        ],
    }
}

#[rstest]
fn test_nested_field_update() {
    let location_name = prop(key_path!(User, location)).compose(prop(key_path!(Location, name)));
    let moved = location_name.set(blob(), "Los Angeles".to_string());
    assert_eq!(moved.location.name, "Los Angeles");
    assert_eq!(moved.name, "Blob");
    assert_eq!(moved.favorite_foods, blob().favorite_foods);
}

#[rstest]
fn test_update_every_food_name() {
    let food_names = prop(key_path!(User, favorite_foods))
        .compose(each())
        .compose(prop(key_path!(Food, name)));
    let updated = food_names.modify(blob(), |name| format!("Nice {name}"));
    let names: Vec<&str> = updated.favorite_foods.iter().map(|food| food.name.as_str()).collect();
    assert_eq!(names, vec!["Nice Tacos", "Nice Nachos"]);
}

#[rstest]
fn test_modify_in_place_every_food_name() {
    let food_names = prop(key_path!(User, favorite_foods))
        .compose(each())
        .compose(prop(key_path!(Food, name)));
    let mutated = food_names.modify_in_place(blob(), |name: &mut String| name.push_str(" Supreme"));
    let mapped = food_names.modify(blob(), |name| format!("{name} Supreme"));
    assert_eq!(mutated, mapped);
    assert_eq!(mutated.favorite_foods[1].name, "Nachos Supreme");
}

#[rstest]
#[case(Ok(vec![1, 2]), Ok(vec![1, 2, 0]))]
#[case(Err("offline".to_string()), Err("offline".to_string()))]
fn test_modify_in_place_through_enum_path(
    #[case] response: Result<Vec<i32>, String>,
    #[case] expected: Result<Vec<i32>, String>,
) {
    let body = ok_case::<Vec<i32>, String>().as_setter();
    assert_eq!(body.modify_in_place(response, |values: &mut Vec<i32>| values.push(0)), expected);
}

#[rstest]
fn test_update_returns_reusable_function() {
    let mut shout = prop(key_path!(User, name)).update(|name: String| name.to_uppercase());
    let users = vec![blob(), blob()];
    let shouted: Vec<User> = users.into_iter().map(&mut shout).collect();
    assert!(shouted.iter().all(|user| user.name == "BLOB"));
}

#[rstest]
fn test_filter_favorite_foods() {
    let favorite_foods = prop(key_path!(User, favorite_foods));
    let updated = favorite_foods.modify(blob(), filtering(|food: &Food| food.name.starts_with('T')));
    assert_eq!(updated.favorite_foods.len(), 1);
    assert_eq!(updated.favorite_foods[0].name, "Tacos");
}

#[rstest]
fn test_filter_present_values() {
    let values = vec![Some(1), None, Some(2), None, Some(3)];
    let mut present = Vec::new();
    let incremented = each().compose(some()).modify(values, |value: i32| {
        present.push(value);
        value + 1
    });
    assert_eq!(present, vec![1, 2, 3]);
    assert_eq!(incremented, vec![Some(2), None, Some(3), None, Some(4)]);
}

#[rstest]
#[case(vec![1, 2, 3], 1, vec![1, 20, 3])]
#[case(vec![1, 2, 3], 3, vec![1, 2, 3])]
#[case(Vec::new(), 0, Vec::new())]
fn test_index_setter(#[case] values: Vec<i32>, #[case] position: usize, #[case] expected: Vec<i32>) {
    assert_eq!(index(position).modify(values, |value| value * 10), expected);
}

#[rstest]
fn test_index_try_modify_reports_bounds() {
    let error: OutOfBounds<Vec<i32>> = index(5)
        .try_modify(vec![1, 2], |value: i32| value + 1)
        .unwrap_err();
    assert_eq!(error.index, 5);
    assert_eq!(error.length, 2);
    assert_eq!(error.to_string(), "index 5 is out of bounds for a sequence of length 2");
    assert_eq!(error.into_source(), vec![1, 2]);
}

#[rstest]
fn test_tuple_slots() {
    let pair = (1, "one".to_string());
    let bumped = first().modify(pair, |value: i32| value + 1);
    let renamed = second().set(bumped, "two".to_string());
    assert_eq!(renamed, (2, "two".to_string()));
}

#[rstest]
fn test_tuple_slot_through_each() {
    let pairs = vec![(1, 'a'), (2, 'b')];
    let updated = each().compose(first()).modify(pairs, |value: i32| value * 100);
    assert_eq!(updated, vec![(100, 'a'), (200, 'b')]);
}

#[rstest]
fn test_dictionary_key_updates() {
    let dictionary = HashMap::from([(1, "A".to_string()), (2, "B".to_string())]);

    let appended = map_key(1).modify(dictionary.clone(), |current: Option<String>| {
        current.map(|value| value + "!")
    });
    assert_eq!(appended.get(&1).map(String::as_str), Some("A!"));

    let inserted = map_key(3).set(dictionary.clone(), Some("C".to_string()));
    assert_eq!(inserted.len(), 3);

    let removed = map_key(2).set(dictionary.clone(), None);
    assert_eq!(removed, HashMap::from([(1, "A".to_string())]));

    let untouched = update_key_if_present(9).modify(dictionary.clone(), |value: String| value + "?");
    assert_eq!(untouched, dictionary);
}

#[rstest]
fn test_dictionary_upsert() {
    let counts: HashMap<&str, i32> = HashMap::from([("tacos", 2)]);
    let counter = map_key("nachos");
    let counted = counter.upsert(counts, |count: Option<i32>| count.unwrap_or(0) + 1);
    assert_eq!(counted.get("nachos"), Some(&1));
    assert_eq!(counted.get("tacos"), Some(&2));
}

#[rstest]
fn test_set_membership_toggles() {
    let set = HashSet::from([1, 2, 3, 4]);
    let without_two = member(2).set(set, false);
    let with_five = member(5).set(without_two, true);
    assert_eq!(with_five, HashSet::from([1, 3, 4, 5]));
}

#[rstest]
fn test_set_membership_through_field() {
    #[derive(Clone, PartialEq, Debug)]
    struct Settings {
        flags: BTreeSet<&'static str>,
    }

    let verbose = prop(key_path!(Settings, flags)).compose(member("verbose"));
    let settings = Settings {
        flags: BTreeSet::from(["color"]),
    };
    let enabled = verbose.set(settings, true);
    assert_eq!(enabled.flags, BTreeSet::from(["color", "verbose"]));
}

#[rstest]
fn test_enum_case_setter_inside_collection() {
    let responses: Vec<Result<u16, String>> = vec![Ok(200), Err("timeout".to_string()), Ok(404)];
    let bumped = each().compose(ok_case().as_setter()).modify(responses, |code: u16| code + 1);
    assert_eq!(bumped, vec![Ok(201), Err("timeout".to_string()), Ok(405)]);
}
