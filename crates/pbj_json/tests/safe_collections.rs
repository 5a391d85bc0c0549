//! The marshal mode is switched on before any marshaling in this binary.

mod common;

use std::sync::Once;

use common::{MockInnerPbStruct, MockPbList, MockPbStruct, populated};

static INIT: Once = Once::new();

fn setup() {
    INIT.call_once(|| pbj_json::configure(true));
}

fn empty_slices() -> MockPbStruct {
    MockPbStruct {
        int64_slice: Some(Vec::new()),
        struct_slice: Some(Vec::new()),
        ..MockPbStruct::default()
    }
}

#[test]
fn empty_slices_are_written() {
    setup();
    assert_eq!(
        pbj_json::marshal_safe_collections(&empty_slices()).unwrap(),
        br#"{"int64_slice":[],"struct_slice":[]}"#
    );
}

#[test]
fn standard_marshal_ignores_the_mode() {
    setup();
    assert_eq!(pbj_json::marshal(&empty_slices()).unwrap(), b"{}");
}

#[test]
fn absent_slices_and_nested_stay_omitted() {
    setup();
    assert_eq!(pbj_json::marshal_safe_collections(&MockPbStruct::default()).unwrap(), b"{}");

    let value = MockPbStruct {
        struct2: Some(Box::new(MockInnerPbStruct::default())),
        ..MockPbStruct::default()
    };
    assert_eq!(pbj_json::marshal_safe_collections(&value).unwrap(), br#"{"struct2":{}}"#);
}

#[test]
fn populated_output_is_unchanged() {
    setup();
    let value = populated();
    assert_eq!(
        pbj_json::marshal_safe_collections(&value).unwrap(),
        serde_json::to_vec(&value).unwrap()
    );
}

#[test]
fn later_configure_is_ignored() {
    setup();
    pbj_json::configure(false);
    pbj_json::configure(false);

    assert!(pbj_json::is_configured());
    assert!(pbj_json::emit_empty_collections());
    assert_eq!(
        pbj_json::marshal_safe_collections(&empty_slices()).unwrap(),
        br#"{"int64_slice":[],"struct_slice":[]}"#
    );
}

#[test]
fn writer_and_pretty() {
    setup();
    let mut out = Vec::new();
    pbj_json::marshal_safe_collections_to_writer(&mut out, &empty_slices()).unwrap();
    assert_eq!(out, br#"{"int64_slice":[],"struct_slice":[]}"#);

    let pretty = pbj_json::marshal_safe_collections_pretty(&empty_slices()).unwrap();
    assert_eq!(
        String::from_utf8(pretty).unwrap(),
        "{\n  \"int64_slice\": [],\n  \"struct_slice\": []\n}"
    );
}

#[test]
fn always_present_lists_are_written_empty() {
    setup();
    let value = MockPbList::default();

    assert_eq!(
        pbj_json::marshal_safe_collections(&value).unwrap(),
        br#"{"int64_slice":[],"struct_slice":[]}"#
    );
    assert_eq!(pbj_json::marshal(&value).unwrap(), b"{}");
}
