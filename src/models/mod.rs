pub mod cost;
pub mod listing;
pub mod matching;
pub mod product;

pub use cost::*;
pub use listing::*;
pub use matching::*;
pub use product::*;
