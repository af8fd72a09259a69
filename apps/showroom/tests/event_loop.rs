//! End-to-end runs of the event loop over in-memory input.

use std::io::Cursor;

use serde_json::Value;
use sunpower_catalog::{CategoryFilter, ProductCategory};
use sunpower_showroom::shell::serve;
use sunpower_showroom::state::{ConfigState, ManagedState};

fn run(state: &ManagedState, lines: &[&str]) -> Vec<Value> {
    let input = Cursor::new(lines.join("\n"));
    let mut output = Vec::new();
    serve(input, &mut output, state).unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn browse_switchgear_and_open_details() {
    let state = ManagedState::default();
    let responses = run(
        &state,
        &[
            r#"{"command":"selectCategory","categoryId":"mv-switchgear"}"#,
            r#"{"command":"nextProduct"}"#,
            r#"{"command":"openDetails"}"#,
            r#"{"command":"selectCategory","categoryId":"drives-automation"}"#,
            r#"{"command":"closeDetails"}"#,
        ],
    );
    assert_eq!(responses.len(), 5);

    let first = &responses[0]["ok"]["catalog"];
    assert_eq!(first["activeCategory"], "mv-switchgear");
    assert_eq!(first["products"].as_array().unwrap().len(), 5);
    assert_eq!(first["activeProduct"]["id"], 10);

    let opened = &responses[2]["ok"]["catalog"]["modal"];
    assert_eq!(opened["isOpen"], true);
    assert_eq!(opened["product"]["id"], 11);

    // Category change resets the carousel but leaves the modal alone.
    let switched = &responses[3]["ok"]["catalog"];
    assert_eq!(switched["activeIndex"], 0);
    assert_eq!(switched["activeProduct"]["id"], 15);
    assert_eq!(switched["modal"]["product"]["id"], 11);

    let closed = &responses[4]["ok"]["catalog"]["modal"];
    assert_eq!(closed["isOpen"], false);
    assert!(closed["product"].is_null());
}

#[test]
fn errors_do_not_stop_the_loop() {
    let state = ManagedState::default();
    let responses = run(
        &state,
        &[
            "this is not json",
            r#"{"command":"selectCategory","categoryId":"solar"}"#,
            r#"{"command":"selectProduct","productId":999}"#,
            r#"{"command":"jumpTo","index":2}"#,
        ],
    );
    assert_eq!(responses.len(), 4);
    assert_eq!(responses[0]["error"]["code"], "INVALID_EVENT");
    assert_eq!(responses[1]["error"]["code"], "INVALID_CATEGORY");
    assert_eq!(responses[2]["error"]["code"], "NOT_FOUND");
    assert_eq!(responses[3]["ok"]["catalog"]["activeIndex"], 2);
    assert_eq!(responses[3]["ok"]["catalog"]["activeCategory"], "all");
}

#[test]
fn faq_and_config_round_trip() {
    let config = ConfigState {
        site_name: "Sun PowerTech Indore".to_string(),
        faq_open_first: false,
        ..ConfigState::default()
    };
    let state = ManagedState::from_config(config);
    let responses = run(
        &state,
        &[
            r#"{"command":"getConfig"}"#,
            r#"{"command":"toggleFaq","index":3}"#,
            r#"{"command":"toggleFaq","index":9}"#,
        ],
    );

    assert_eq!(responses[0]["ok"]["siteName"], "Sun PowerTech Indore");
    assert_eq!(responses[1]["ok"]["faq"]["openIndex"], 3);
    assert_eq!(responses[1]["ok"]["faq"]["items"][3]["isOpen"], true);
    assert_eq!(responses[2]["error"]["code"], "INDEX_OUT_OF_RANGE");
}

#[test]
fn peer_tiles_follow_config() {
    let config = ConfigState {
        initial_category: CategoryFilter::Only(ProductCategory::PowerTransfer),
        peer_tile_limit: 2,
        ..ConfigState::default()
    };
    let state = ManagedState::from_config(config);
    let responses = run(&state, &[r#"{"command":"getView"}"#]);

    let catalog = &responses[0]["ok"]["catalog"];
    assert_eq!(catalog["activeCategory"], "power-transfer");
    assert_eq!(catalog["counterLabel"], "1 of 5 products");
    let peers: Vec<u64> = catalog["peerTiles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|tile| tile["id"].as_u64().unwrap())
        .collect();
    assert_eq!(peers, vec![2, 3]);
}

#[test]
fn non_utf8_line_is_answered_and_skipped() {
    let state = ManagedState::default();
    let mut input = b"{\"command\":\"getView\"}\n".to_vec();
    input.extend_from_slice(b"{\"command\":\"next\xffProduct\"}\n");
    input.extend_from_slice(b"{\"command\":\"nextProduct\"}\n");
    let mut output = Vec::new();

    serve(Cursor::new(input), &mut output, &state).unwrap();

    let responses: Vec<Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(responses.len(), 3);
    assert_eq!(responses[1]["error"]["code"], "INVALID_EVENT");
    assert_eq!(responses[2]["ok"]["catalog"]["activeProduct"]["id"], 2);
}

#[test]
fn projects_are_served_on_request() {
    let state = ManagedState::default();
    let responses = run(&state, &[r#"{"command":"getProjects"}"#]);

    let projects = &responses[0]["ok"];
    assert_eq!(projects["completedWorks"].as_array().unwrap().len(), 6);
    assert_eq!(projects["completedWorks"][3]["client"], "Central India Pvt Ltd");
    assert_eq!(projects["milestones"][0]["year"], 2015);
    assert_eq!(projects["milestones"][0]["side"], "left");
    assert_eq!(projects["ongoingProjects"][5]["title"], "Gohad Water Supply Scheme");
}
