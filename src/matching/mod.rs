//! Entity resolution between catalog products and marketplace listings.
//!
//! Each module provides either a pure function or a lightweight struct that
//! borrows the shared [`MarketConfig`](crate::config::MarketConfig), so the
//! static tables are injected rather than read from globals.

pub mod aliases;
pub mod classifier;
pub mod identity;
pub mod normalize;
pub mod resolver;
pub mod risk;
pub mod scorer;
pub mod search;
pub mod versions;

pub use aliases::{AliasEntry, AliasTable};
pub use classifier::{Compatibility, KeywordTables, ProductTypeClassifier, TypeDetection};
pub use normalize::normalize;
pub use resolver::ListingResolver;
pub use risk::{RiskAssessor, RiskConfig};
pub use scorer::{MatchConfig, MatchMode, MatchScorer, PreparedProduct, ScoringProfile};
pub use search::ListingSearch;
pub use versions::{VersionPattern, VersionPatterns, VersionRequirement};
