//! Toy constructed-language generator modeled loosely on Truku.
//!
//! This crate walks a player through three layers of a made-up language:
//! - Phonology: a sound inventory producing random syllables and words
//! - Morphology: named prefix/suffix rules applied to words
//! - Syntax: word-order templates assembling sentences and questions
//!
//! The [`session`] module sequences these layers into an interactive game
//! over any [`io::Console`].

/// Language layers: sound inventory, affix rules, sentence template, vocabulary.
pub mod model;

/// Interactive session state machine and its stages.
pub mod session;

/// Console abstraction (terminal and scripted).
pub mod io;

/// Session settings.
pub mod config;

/// Crate error type.
pub mod error;

pub use config::GameConfig;
pub use error::{Error, Result};
pub use session::{Session, SessionContext, SessionReport};
