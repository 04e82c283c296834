pub mod episodes;
pub mod playback;

pub use episodes::EpisodeListState;
pub use playback::PlaybackState;
