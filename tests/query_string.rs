mod common;

use common::{market, titles};
use rstest::rstest;
use shared::schemas::Pagination;
use vehicle_market::features::{
    listings::models::Category,
    schemas::ListingQuery,
    search::{
        pipeline,
        query_string::{from_query_string, to_query_string},
        range::Interval,
    },
};

#[rstest]
#[case("")]
#[case("q=golf")]
#[case("category=buy&priceMin=12000&priceMax=16000")]
#[case("fuel=diesel&fuel=petrol&transmission=manual&bodyType=suv&traction=awd&currency=USD")]
#[case("yearMin=2010&yearMax=2100&horsePowerMin=150&horsePowerMax=2000&sortYear=asc")]
#[case("lat=41.2995&lng=69.2401&radius=50&page=2&pageSize=5")]
fn test_generated_strings_are_stable(#[case] raw: &str) {
    let encoded = to_query_string(&from_query_string(raw).unwrap());
    assert_eq!(encoded, raw);
    assert_eq!(to_query_string(&from_query_string(&encoded).unwrap()), encoded);
}

#[test]
fn test_defaults_do_not_pollute_the_url() {
    let noisy = "priceMin=0&priceMax=1000000&page=1&pageSize=20&q=&brand=";
    assert_eq!(to_query_string(&from_query_string(noisy).unwrap()), "");
}

#[test]
fn test_keys_come_out_in_canonical_order() {
    let shuffled = "page=3&sortPrice=desc&fuel=diesel&q=golf&category=sell&priceMax=20000";
    assert_eq!(
        to_query_string(&from_query_string(shuffled).unwrap()),
        "q=golf&category=sell&fuel=diesel&priceMin=0&priceMax=20000&sortPrice=desc&page=3"
    );
}

#[test]
fn test_text_is_percent_encoded() {
    let mut query = ListingQuery::default();
    query.search_params.q = "w124 & co".to_string();
    query.search_params.filters.brand = "Mercedes-Benz".to_string();

    let encoded = to_query_string(&query);
    assert_eq!(encoded, "q=w124+%26+co&brand=Mercedes-Benz");
    assert_eq!(from_query_string(&encoded).unwrap(), query);
}

#[test]
fn test_bookmark_reproduces_the_search() {
    let records = market();
    let mut query = ListingQuery::default();
    query.search_params.category = Some(Category::Sell);
    query.search_params.filters.price_range = Interval::new(10_000.0, 20_000.0);

    let bookmark = to_query_string(&query);
    let restored = from_query_string(&bookmark).unwrap();

    let original = pipeline::run(&records, &query.search_params, &query.pagination);
    let replayed = pipeline::run(&records, &restored.search_params, &restored.pagination);

    assert_eq!(original, replayed);
    assert_eq!(titles(&replayed.items), vec!["Golf VII"]);
    assert_eq!(restored.pagination, Pagination::default());
}

#[test]
fn test_padded_text_and_open_ranges_replay_the_same_page() {
    let records = market();
    let mut query = ListingQuery::default();
    query.search_params.filters.brand = " Volkswagen ".to_string();
    query.search_params.filters.fuel = vec![" diesel".to_string()];
    query.search_params.filters.price_range = Interval::new(10_000.0, f64::INFINITY);

    let restored = from_query_string(&to_query_string(&query)).unwrap();

    let original = pipeline::run(&records, &query.search_params, &query.pagination);
    let replayed = pipeline::run(&records, &restored.search_params, &restored.pagination);

    assert_eq!(titles(&original.items), vec!["Golf VII"]);
    assert_eq!(original, replayed);
}
