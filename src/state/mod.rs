/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - Revocable image handles (handle.rs)
/// - The photo collection, viewer cursor and screen routing (session.rs)

pub mod data;
pub mod handle;
pub mod session;

pub use data::{PhotoId, PhotoRecord, ViewState};
pub use handle::ImageHandle;
pub use session::Session;
