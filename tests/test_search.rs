//! Free-text listing search tests.

mod common;

use figure_market::models::ListingType;

use common::listing;

#[test]
fn closed_up_query_finds_japanese_listing_through_aliases() {
    let market = common::market();
    let hits = market
        .search()
        .search("chainsawman", &common::sample_listings(), 10);

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].listing_id, "m-006");
    assert_eq!(hits[0].matched_term, "チェンソーマン");
    assert_eq!(hits[0].score, 0.8);
}

#[test]
fn direct_hits_outrank_alias_hits_and_cheaper_wins_ties() {
    let market = common::market();
    let hits = market
        .search()
        .search("後藤ひとり", &common::sample_listings(), 3);

    let ids: Vec<&str> = hits.iter().map(|h| h.listing_id.as_str()).collect();
    assert_eq!(ids, vec!["m-004", "m-003", "m-002"]);
    assert!(hits.iter().all(|h| h.score == 1.0));
}

#[test]
fn requested_type_boosts_matching_listings_and_demotes_merch() {
    let market = common::market();
    let listings = vec![
        listing("merch", "ぼっち・ざ・ろっく アクリルスタンド", 800),
        listing("nendo", "ねんどろいど 後藤ひとり ぼっち・ざ・ろっく", 4000),
        listing("figma", "figma ぼっち", 6500),
    ];
    let hits = market.search().search("nendoroid bocchi", &listings, 10);

    let ranked: Vec<(&str, f64)> = hits
        .iter()
        .map(|h| (h.listing_id.as_str(), h.score))
        .collect();
    assert_eq!(ranked, vec![("nendo", 1.1), ("figma", 0.6), ("merch", 0.3)]);
    assert_eq!(hits[0].listing_type, ListingType::Nendoroid);
    assert_eq!(hits[2].listing_type, ListingType::Merch);
}

#[test]
fn unrelated_listings_are_not_returned() {
    let market = common::market();
    let hits = market
        .search()
        .search("genshin", &common::sample_listings(), 10);
    assert!(hits.is_empty());
}

#[test]
fn blank_query_returns_nothing() {
    let market = common::market();
    assert!(market
        .search()
        .search("   ", &common::sample_listings(), 10)
        .is_empty());
}

#[test]
fn limit_truncates_results() {
    let market = common::market();
    let hits = market
        .search()
        .search("後藤ひとり", &common::sample_listings(), 1);
    assert_eq!(hits.len(), 1);
}
