pub mod commands;
pub mod episode;
pub mod feed;
pub mod player;
pub mod store;

pub use commands::{PlayerCommand, PlayerSnapshot};
pub use episode::Episode;
pub use player::PlayerState;
pub use store::{PlayerStore, Subscription};
