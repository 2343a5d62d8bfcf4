//! Gemini API adapter

mod client;
mod wire;

pub use client::{GeminiClient, GeminiModels, API_BASE_URL};
