//! Speech playback adapters

mod noop;
mod rodio;

pub use self::rodio::RodioPlayer;
pub use noop::NoOpPlayer;

use crate::application::ports::AudioPlayer;

/// Create a player based on whether audio output is wanted
pub fn create_player(enabled: bool) -> Box<dyn AudioPlayer> {
    if enabled {
        Box::new(RodioPlayer::new())
    } else {
        Box::new(NoOpPlayer::new())
    }
}
