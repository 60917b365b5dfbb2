pub mod classify;
pub mod state;

pub use classify::{classify, normalize_header, seed_mapping, synonyms};
pub use state::MappingState;
