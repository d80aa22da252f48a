/// Marker trait for view state.
///
/// `Default` gives the state before anything has loaded; `Clone` and
/// `PartialEq` let callers snapshot and compare.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
