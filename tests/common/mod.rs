//! Shared fixtures for the figure-market integration tests.
//!
//! Provides a logger guard, a default-configured market, a small catalog of
//! products and listings, and a temp-file writer for config documents.

#![allow(dead_code)]

use std::io::Write;
use std::sync::Once;

use figure_market::models::{Listing, Product, ProductCategory};
use figure_market::FigureMarket;
use tempfile::NamedTempFile;

static INIT: Once = Once::new();

/// Install `env_logger` once per test binary.
pub fn init_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// A market running on the built-in tables.
pub fn market() -> FigureMarket {
    init_logging();
    FigureMarket::builder().build().unwrap()
}

/// Write a JSON config document to a temp file the caller must keep alive.
pub fn write_config(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// -- Products ---------------------------------------------------------------

pub fn hitori_nendoroid() -> Product {
    Product::new("nendo-hitori", "Nendoroid Hitori Gotoh")
        .with_name_ja("後藤ひとり")
        .with_category(ProductCategory::Nendoroid)
}

pub fn hitori_figma() -> Product {
    Product::new("figma-hitori", "figma Hitori Gotoh")
        .with_name_ja("後藤ひとり")
        .with_category(ProductCategory::Figma)
}

pub fn hitori_swimsuit() -> Product {
    Product::new("nendo-hitori-swim", "Nendoroid Hitori Gotoh: Swimsuit Ver.")
        .with_name_ja("後藤ひとり 水着Ver.")
        .with_category(ProductCategory::Nendoroid)
}

pub fn saber_formal() -> Product {
    Product::new(
        "nendo-saber-formal",
        "Nendoroid Saber/Artoria Pendragon: Heroic Spirit Formal Dress Ver.",
    )
    .with_name_ja("ねんどろいど セイバー 英霊正装Ver.")
    .with_category(ProductCategory::Nendoroid)
}

pub fn artoria_scale() -> Product {
    Product::new("scale-artoria", "1/7 Scale Artoria Pendragon")
        .with_name_ja("アルトリア・ペンドラゴン")
        .with_category(ProductCategory::Scale17)
}

pub fn catalog() -> Vec<Product> {
    vec![
        hitori_nendoroid(),
        hitori_figma(),
        hitori_swimsuit(),
        saber_formal(),
        artoria_scale(),
    ]
}

// -- Listings ---------------------------------------------------------------

pub fn listing(id: &str, name: &str, price: i64) -> Listing {
    Listing::new(id, name, price).with_condition("未使用に近い")
}

pub fn sample_listings() -> Vec<Listing> {
    vec![
        listing("m-001", "ねんどろいど 後藤ひとり", 5000),
        listing("m-002", "ねんどろいど 後藤ひとり ぼっち・ざ・ろっく", 4000),
        listing("m-003", "ねんどろいど 後藤ひとり 水着", 3000),
        listing("m-004", "後藤ひとり アクリルキーホルダー", 500),
        listing("m-005", "figma 後藤ひとり", 7000),
        listing("m-006", "チェンソーマン デンジ フィギュア", 2500),
        listing("m-007", "アルトリア・ペンドラゴン 1/7 スケールフィギュア", 18000),
    ]
}
