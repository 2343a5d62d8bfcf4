//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::translation::SupportedLanguage;
use crate::infrastructure::GeminiModels;

/// LingoLens - cultural translation of slang and idioms
#[derive(Parser, Debug)]
#[command(name = "lingo-lens")]
#[command(version)]
#[command(about = "Explain slang, idioms and colloquial speech using Google Gemini")]
#[command(long_about = None)]
pub struct Cli {
    /// Phrase to analyze
    #[arg(value_name = "TEXT", conflicts_with = "audio")]
    pub text: Option<String>,

    /// Audio clip to analyze instead of text
    #[arg(short = 'a', long, value_name = "FILE")]
    pub audio: Option<PathBuf>,

    /// Target language, by name or slug (see `lingo-lens languages`)
    #[arg(short = 't', long, value_name = "LANG")]
    pub target: Option<String>,

    /// Speak the result aloud
    #[arg(short = 's', long)]
    pub speak: bool,

    /// Copy the result to clipboard
    #[arg(short = 'c', long)]
    pub clipboard: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse or clear past results
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
    /// List supported target languages
    Languages,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// History action subcommands
#[derive(Subcommand, Debug)]
pub enum HistoryAction {
    /// List stored results, newest first
    List,
    /// Show one stored result
    Show {
        /// Item id or a unique prefix of it
        id: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete all stored results
    Clear,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Parsed options for one analysis
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    pub text: Option<String>,
    pub audio: Option<PathBuf>,
    pub target: SupportedLanguage,
    pub speak: bool,
    pub clipboard: bool,
    pub json: bool,
    pub models: GeminiModels,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "api_key",
    "target_language",
    "text_model",
    "audio_model",
    "tts_model",
    "voice",
    "speak",
    "clipboard",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
