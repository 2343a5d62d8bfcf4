//! LingoLens - cultural translation of slang and idioms
//!
//! This crate sends a phrase (typed text or a short audio clip) to Google
//! Gemini and returns a structured explanation: literal meaning, scripts,
//! cultural nuance, an equivalent expression in the target language and an
//! intensity rating. Results are kept in a short local history and can be
//! read aloud.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Result schema, languages, history log and the session state machine
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (Gemini, storage, rodio, clipboard)
//! - **CLI**: Command-line interface, argument parsing and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
