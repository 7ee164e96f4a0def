//! Application module
//!
//! - Actions: what can happen
//! - State: what is true right now
//! - Reducer: `(State, Action) -> State`
//!
//! The calculator engine lives inside the state and is only touched by
//! the reducer.

pub mod actions;
pub mod event;
pub mod reducer;
pub mod state;

pub use actions::Action;
pub use reducer::reduce;
pub use state::{AppState, StatusBarState, UiConfig};
