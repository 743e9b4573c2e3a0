pub mod engine;
pub mod sources;
pub mod suggest;

pub use engine::get_activity_feed;
pub use suggest::suggest_follows;
