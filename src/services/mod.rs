pub mod catalog;
pub mod engine;
pub mod recommendations;
pub mod similarity;
pub mod title_index;
pub mod title_search;
pub mod vectorizer;

pub use engine::Engine;
