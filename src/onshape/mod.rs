pub mod client;
pub mod types;

pub use client::OnshapeClient;
pub use types::TranslationStatus;
