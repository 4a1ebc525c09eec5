/// Marker trait for reducer-owned state.
///
/// `Default` gives owners an empty state to start from or swap in while the
/// reducer runs;
/// `PartialEq` lets tests and hosts detect whether an intent changed anything.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
