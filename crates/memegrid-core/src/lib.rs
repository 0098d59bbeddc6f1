//! # Memegrid Core Library
//!
//! Everything behind the Epic Memes screen that does not touch a terminal:
//! fetching the meme list, decoding it, and the presenter state the UI draws.
//!
//! ## Modules
//!
//! - `fetch`: the single HTTP GET and the `MemeSource` seam
//! - `models`: meme records and the schema-checked decoder
//! - `presenter`: Loading / Loaded / DetailShown / Failed state machine
//! - `settings`: endpoint and theme configuration
//! - `theme`: UI theming system

pub mod error;
pub mod fetch;
pub mod models;
pub mod presenter;
pub mod settings;
pub mod theme;

pub use error::{DecodeError, FetchError, LoadError, SettingsError};
pub use fetch::{load_memes, HttpFetcher, MemeSource, DEFAULT_ENDPOINT};
pub use models::{decode, MemeRecord};
pub use presenter::{Phase, Presenter, UiState};
