//! Configuration domain module

mod app_config;

pub use app_config::{
    AppConfig, DEFAULT_AUDIO_MODEL, DEFAULT_TEXT_MODEL, DEFAULT_TTS_MODEL, DEFAULT_VOICE,
};
