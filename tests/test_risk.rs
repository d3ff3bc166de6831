//! Listing risk heuristics.

mod common;

use figure_market::models::{Listing, RiskLevel};

use common::listing;

fn flags_for(l: &Listing) -> (RiskLevel, Vec<String>) {
    let market = common::market();
    let assessment = market.risk().assess(l);
    (assessment.level, assessment.flags)
}

#[test]
fn clean_listing_is_low_risk() {
    let (level, flags) = flags_for(&listing("r-1", "ねんどろいど 後藤ひとり", 5000));
    assert_eq!(level, RiskLevel::Low);
    assert!(flags.is_empty());
}

#[test]
fn missing_or_blank_condition_is_flagged() {
    let (level, flags) = flags_for(&Listing::new("r-1", "ねんどろいど 後藤ひとり", 5000));
    assert_eq!(level, RiskLevel::Medium);
    assert_eq!(flags, vec!["condition not stated".to_string()]);

    let blank = Listing::new("r-2", "ねんどろいど 後藤ひとり", 5000).with_condition("  ");
    assert_eq!(flags_for(&blank).1, vec!["condition not stated".to_string()]);
}

#[test]
fn price_extremes_are_flagged_with_strict_bounds() {
    assert_eq!(
        flags_for(&listing("r-1", "figma", 999)).1,
        vec!["suspiciously cheap".to_string()]
    );
    assert!(flags_for(&listing("r-2", "figma", 1000)).1.is_empty());
    assert!(flags_for(&listing("r-3", "figma", 50000)).1.is_empty());
    assert_eq!(
        flags_for(&listing("r-4", "figma", 50001)).1,
        vec!["verify premium price".to_string()]
    );
}

#[test]
fn junk_and_bootleg_force_high_risk() {
    let (junk, junk_flags) = flags_for(&listing("r-1", "ねんどろいど ジャンク品", 3000));
    assert_eq!(junk, RiskLevel::High);
    assert!(junk_flags.contains(&"junk or damaged".to_string()));

    let (bootleg, bootleg_flags) = flags_for(&listing("r-2", "ねんどろいど 海外版", 3000));
    assert_eq!(bootleg, RiskLevel::High);
    assert!(bootleg_flags.contains(&"possible bootleg".to_string()));
}

#[test]
fn bundles_and_loose_items_are_medium_risk() {
    let (level, flags) = flags_for(&listing("r-1", "ねんどろいど まとめ売り 箱なし", 8000));
    assert_eq!(level, RiskLevel::Medium);
    assert_eq!(
        flags,
        vec!["bundle or lot".to_string(), "parts only or no box".to_string()]
    );
}

#[test]
fn keyword_matching_ignores_case() {
    let (level, _) = flags_for(&listing("r-1", "Nendoroid JUNK", 3000));
    assert_eq!(level, RiskLevel::High);
}

#[test]
fn zero_price_is_still_assessed() {
    let (level, flags) = flags_for(&listing("r-1", "ねんどろいど", 0));
    assert_eq!(level, RiskLevel::Medium);
    assert_eq!(flags, vec!["suspiciously cheap".to_string()]);
}
