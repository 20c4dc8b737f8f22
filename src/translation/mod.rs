pub mod poll;
pub mod state;

pub use poll::{await_translation, PollPolicy};
