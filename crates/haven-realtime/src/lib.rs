//! # haven-realtime
//!
//! In-process live push for HavenMart: a connection registry keyed by user
//! id, per-connection outbound channels, and the [`LiveChannel`]
//! implementation consumed by the notification dispatcher.
//!
//! The registry is an explicit injected collaborator rather than module
//! state, so tests fake it and a multi-node deployment can swap in a real
//! pub/sub channel.
//!
//! [`LiveChannel`]: haven_core::traits::LiveChannel

pub mod message;
pub mod registry;

pub use message::OutboundMessage;
pub use registry::{ConnectionHandle, LiveConnectionRegistry};
