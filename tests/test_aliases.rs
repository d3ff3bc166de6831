//! Alias expansion tests.

mod common;

use std::collections::HashSet;

use figure_market::matching::{AliasEntry, AliasTable};

#[test]
fn closed_up_franchise_name_expands_through_space_insensitive_lookup() {
    let market = common::market();
    let expanded = market.expand_aliases("chainsawman");

    assert_eq!(expanded[0], "chainsawman");
    assert!(expanded.contains(&"chainsaw man".to_string()));
    assert!(expanded.contains(&"チェンソーマン".to_string()));
}

#[test]
fn direct_key_lookup_is_case_insensitive() {
    let market = common::market();
    let expanded = market.expand_aliases("Bocchi the Rock");

    assert_eq!(expanded[0], "Bocchi the Rock");
    assert!(expanded.contains(&"ぼっち・ざ・ろっく".to_string()));
    assert!(expanded.contains(&"ぼざろ".to_string()));
}

#[test]
fn reverse_lookup_adds_owning_key_and_siblings() {
    let market = common::market();
    let expanded = market.expand_aliases("後藤ひとり");

    assert!(expanded.contains(&"hitori gotoh".to_string()));
    assert!(expanded.contains(&"ぼっちちゃん".to_string()));
}

#[test]
fn unknown_query_expands_to_itself_trimmed() {
    let market = common::market();
    assert_eq!(market.expand_aliases("  obscure thing "), vec!["obscure thing"]);
    assert_eq!(market.expand_aliases(""), vec![""]);
}

#[test]
fn expansion_always_contains_trimmed_query() {
    let market = common::market();
    for q in ["fgo", " miku ", "Touhou", "nothing here", "ブルアカ", "re:zero"] {
        let expanded = market.expand_aliases(q);
        assert!(expanded.contains(&q.trim().to_string()), "missing {q:?}");
    }
}

#[test]
fn expansion_has_no_duplicates() {
    let market = common::market();
    let expanded = market.expand_aliases("bocchi");
    let unique: HashSet<&String> = expanded.iter().collect();
    assert_eq!(unique.len(), expanded.len());
}

#[test]
fn expansion_order_is_stable() {
    let market = common::market();
    assert_eq!(
        market.expand_aliases("hatsune miku"),
        market.expand_aliases("hatsune miku")
    );
}

#[test]
fn custom_table_keys_are_lowercased() {
    let table = AliasTable::new(vec![AliasEntry::new("Frieren", &["フリーレン"])]);
    assert_eq!(table.entries()[0].key, "frieren");
    assert_eq!(
        table.expand("FRIEREN"),
        vec!["FRIEREN", "フリーレン", "frieren"]
    );
}
