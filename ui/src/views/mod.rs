mod colors;
mod favorites;
mod home;
mod turnusliste;

pub use colors::Colors;
pub use favorites::Favorites;
pub use home::Home;
pub use turnusliste::{Turnusliste, TURNUSLISTE_ROUTE};
