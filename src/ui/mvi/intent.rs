/// Marker trait for intents: user actions (key presses) and system events
/// (fetch results, loop transitions) that reducers consume.
pub trait Intent: Send + 'static {}
