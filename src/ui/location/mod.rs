mod intent;
mod reducer;
mod state;

pub use intent::LocationIntent;
pub use reducer::LocationReducer;
pub use state::{LocationState, Pane};
