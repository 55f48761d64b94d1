//! # nowstars-engine: PokerNow to PokerStars hand-history conversion
//!
//! Replays the JSON event log exported by PokerNow and renders each hand as a
//! PokerStars-style text transcript that desktop trackers can import.
//!
//! ## Core Modules
//!
//! - [`model`] - Serde types for the exported session document
//! - [`format`] - Money, timestamp and card formatting
//! - [`seats`] - Dense seat renumbering
//! - [`events`] - Type-code decoding and blind hoisting
//! - [`replay`] - Per-hand replay state and the event reducer
//! - [`summary`] - The `*** SUMMARY ***` section
//! - [`hand_id`] - Numeric hand numbers for the header line
//! - [`converter`] - Per-hand rendering and the session driver
//! - [`errors`] - Error types for conversion
//!
//! ## Quick Start
//!
//! ```rust
//! use nowstars_engine::converter::{convert_session, ConverterConfig};
//! use nowstars_engine::model::Session;
//!
//! let doc = r#"{"gameId": "demo", "hands": []}"#;
//! let session = Session::from_json(doc).unwrap();
//! let blocks = convert_session(&session, &ConverterConfig::with_hero("me")).unwrap();
//! assert!(blocks.is_empty());
//! ```

pub mod converter;
pub mod errors;
pub mod events;
pub mod format;
pub mod hand_id;
pub mod model;
pub mod replay;
pub mod seats;
pub mod summary;

pub use converter::{convert_session, render_hand, ConverterConfig};
pub use errors::ConvertError;
pub use model::Session;
