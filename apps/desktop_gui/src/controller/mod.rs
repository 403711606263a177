//! Controller layer: backend events, the reducer that folds them into the
//! screen state, and queueing of requests for the worker.

pub mod events;
pub mod orchestration;
pub mod reducer;
