use nfd_api::types::{
    ActivityRecord, AnalyticRecords, AuctionAndPrice, Category, Event, Record, SaleType, State,
    Totals, Valid, Version,
};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_full_record() {
    let json = load_fixture("record.json");
    let record: Record = serde_json::from_str(&json).unwrap();
    assert_eq!(record.name, "alice.algo");
    assert_eq!(record.app_id, Some(763725839));
    assert_eq!(record.asa_id, Some(763725934));
    assert_eq!(record.category.as_deref(), Some("premium"));
    assert_eq!(record.category_kind(), Some(Category::Premium));
    assert_eq!(record.sale_type_kind(), Some(SaleType::BuyItNow));
    assert_eq!(record.state_kind(), Some(State::ForSale));
    assert_eq!(record.sell_amount, Some(5_000_000_000));
    assert_eq!(record.match_check.as_deref(), Some("1f3a9b2c"));
    assert_eq!(record.ca_algo.len(), 1);
    assert!(record.unverified_ca_algo.is_empty());
    assert_eq!(record.meta_tags, vec!["5_letters", "pristine"]);

    let props = record.properties.as_ref().unwrap();
    assert_eq!(props.internal.get("commission1").map(String::as_str), Some("50"));
    assert_eq!(props.user_defined.get("bio").map(String::as_str), Some("hello"));
    assert_eq!(props.verified.get("twitter").map(String::as_str), Some("alice"));

    assert_eq!(
        record.time_changed.unwrap().to_rfc3339(),
        "2023-03-14T09:26:53+00:00"
    );
}

#[test]
fn deserialize_tiny_records_with_missing_fields() {
    let json = load_fixture("records_tiny.json");
    let records: Vec<Record> = serde_json::from_str(&json).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].state_kind(), Some(State::Owned));
    assert!(records[0].properties.is_none());
    assert!(records[0].tags.is_empty());

    assert_eq!(records[1].name, "bob.algo");
    assert_eq!(records[1].app_id, None);
    assert_eq!(records[1].state_kind(), Some(State::Reserved));
}

#[test]
fn deserialize_activity() {
    let json = load_fixture("activity.json");
    let activity: Vec<ActivityRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(activity.len(), 1);
    assert_eq!(activity[0].block, Some(28974211));
    assert_eq!(activity[0].cache_control.as_deref(), Some("max-age=60"));
    assert_eq!(activity[0].changes.len(), 2);
    assert_eq!(activity[0].changes["u.bio"], "hello");
    assert_eq!(activity[0].etag.as_deref(), Some("W/\"8a-1\""));
}

#[test]
fn deserialize_analytics() {
    let json = load_fixture("analytics.json");
    let records: AnalyticRecords = serde_json::from_str(&json).unwrap();
    assert_eq!(records.total, 417);
    assert_eq!(records.results.len(), 2);

    let sale = &records.results[0];
    assert_eq!(sale.price, 125_000_000);
    assert_eq!(sale.data.event_kind(), Some(Event::Sold));
    assert_eq!(sale.data.category_kind(), Some(Category::Curated));
    assert_eq!(sale.data.group_id.as_deref(), Some("abc="));
    assert_eq!(sale.data.buyer.as_deref(), Some("BUYERADDRESS"));

    let mint = &records.results[1];
    assert_eq!(mint.data.event_kind(), Some(Event::Minted));
    assert!(mint.data.buyer.is_none());
    assert!(mint.data.meta_tags.is_empty());
}

#[test]
fn deserialize_auctions() {
    let json = load_fixture("auctions.json");
    let auctions: Vec<AuctionAndPrice> = serde_json::from_str(&json).unwrap();
    assert_eq!(auctions.len(), 1);
    let auction = &auctions[0];
    assert_eq!(auction.auction_info.name, "zed.algo");
    assert_eq!(auction.auction_info.current_price, Some(640_000_000));
    assert_eq!(auction.auction_info.floor_price, Some(100_000_000));
    assert_eq!(auction.change_per_minute, Some(625_000));
    assert_eq!(auction.total_minutes, Some(1440));
}

#[test]
fn deserialize_totals_version_valid() {
    let totals: Totals = serde_json::from_str(&load_fixture("totals.json")).unwrap();
    assert_eq!(totals.for_sale, Some(5321));
    assert_eq!(totals.minted_totals.as_ref().unwrap().lifetime, 312000);
    assert_eq!(totals.unique_owners, Some(61000));

    let version: Version = serde_json::from_str(&load_fixture("version.json")).unwrap();
    assert_eq!(version.app, "nfd-api");
    assert_eq!(version.version, "2.14.3");

    let valid: Valid = serde_json::from_str(&load_fixture("valid.json")).unwrap();
    assert!(!valid.is_valid);
    assert!(valid.message.contains("not an NFD"));
}

#[test]
fn deserialize_blank_tokens_as_unset() {
    let json = r#"{"name": "x.algo", "saleType": "", "category": "", "state": ""}"#;
    let record: Record = serde_json::from_str(json).unwrap();
    assert_eq!(record.sale_type, None);
    assert_eq!(record.category, None);
    assert_eq!(record.state, None);
}

#[test]
fn deserialize_unknown_tokens_keeps_the_page() {
    let json = r#"[
        {"name": "a.algo", "state": "owned"},
        {"name": "b.algo", "state": "expired", "category": "legendary"}
    ]"#;
    let records: Vec<Record> = serde_json::from_str(json).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].state_kind(), Some(State::Owned));
    assert_eq!(records[1].state.as_deref(), Some("expired"));
    assert_eq!(records[1].state_kind(), None);
    assert_eq!(records[1].category_kind(), None);
}

#[test]
fn deserialize_unknown_analytics_event() {
    let json = r#"{
        "results": [
            {"data": {"name": "a.algo", "event": "offerAccepted", "saleType": ""}, "price": 1},
            {"data": {"name": "b.algo", "event": "sold", "category": ""}, "price": 2}
        ],
        "total": 2
    }"#;
    let records: AnalyticRecords = serde_json::from_str(json).unwrap();
    assert_eq!(records.results.len(), 2);
    assert_eq!(records.results[0].data.event.as_deref(), Some("offerAccepted"));
    assert_eq!(records.results[0].data.event_kind(), None);
    assert_eq!(records.results[0].data.sale_type, None);
    assert_eq!(records.results[1].data.event_kind(), Some(Event::Sold));
    assert_eq!(records.results[1].data.category, None);
}

#[test]
fn deserialize_missing_name_returns_error() {
    let json = r#"{"appID": 1}"#;
    assert!(serde_json::from_str::<Record>(json).is_err());
}
