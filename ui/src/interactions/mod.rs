//! User interactions that leave the page: favoriting, picking a turnus and
//! fetching its timeline image.
//!
//! Components never talk to the endpoints directly. They dispatch a typed
//! [`Interaction`] on the shared [`InteractionBus`]; the app registers one
//! handler per interaction kind.

pub mod api;
pub mod bus;

pub use api::{numeric_prefix, ApiError, ApiStatus, SelectOutcome, TimelineImage, TurnusApi};
pub use bus::{Interaction, InteractionBus, RemoveFavorite, SelectShift, ShowTimeline, ToggleFavorite};
