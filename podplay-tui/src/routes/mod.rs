pub mod episodes;
pub mod log;
pub mod playback;
