// Core logic exports
pub mod keywords;
pub mod planner;

pub use keywords::{derive_keywords, genre_hints, search_query};
pub use planner::Planner;
