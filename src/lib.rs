//! # grue - a small turn-based text adventure engine
//!
//! `grue` loads a world of rooms and objects from a JSON document and lets a
//! single player explore it with terse commands (`N`, `GET TORCH`,
//! `USE KEY CHEST`). The core is synchronous and front-end agnostic: it
//! narrates through an [`adventure::OutputSink`] and publishes
//! [`adventure::PlayerEvent`]s that a presentation layer can render however
//! it likes.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use grue::adventure::{load_game_from_json, StdoutOutput};
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut session = load_game_from_json("data/world.json")?.into_session(StdoutOutput)?;
//!     session.start();
//!     session.invoke("LOOK");
//!     session.dispatch("NORTH");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`adventure`] - world model, player state machine, verb table and handlers
//! - [`console`] - async line-oriented front end used by the `grue` binary
//! - [`config`] - TOML configuration
//! - [`logutil`] - log sanitising helpers
//!
//! ## Architecture
//!
//! ```text
//! raw line ─► tokenizer ─► CommandContext ─► CommandTable ─► handler
//!                                                              │
//!                         OutputSink ◄── narration ◄───────────┤
//!                         PlayerEvent ◄── World / Player ◄─────┘
//! ```

pub mod adventure;
pub mod config;
pub mod console;
pub mod logutil;
