/// Marker trait for messages a reducer consumes.
///
/// Intents are delivered in arrival order on the UI thread:
/// - pointer gestures (drag start / move / release)
/// - animation frames and completion reports
/// - replacement of caller-owned data
pub trait Intent: Send + 'static {}
