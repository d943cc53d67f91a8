pub mod input;
pub mod results;

pub use input::InputState;
pub use results::{SearchOutcome, SearchResultState, SearchSnapshot};
