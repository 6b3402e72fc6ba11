//! PixiGPT client: builder, request executor and per-resource operations.
//!
//! Implementation details are split into submodules under `src/client/`; the
//! public surface is re-exported here.

pub mod assistants;
pub mod builder;
pub mod chat;
pub mod core;
mod execution;
pub mod messages;
pub mod moderation;
mod policy;
pub mod runs;
pub mod threads;
pub mod vision;

pub use self::builder::ClientBuilder;
pub use self::core::Client;
pub use self::runs::PollOptions;
