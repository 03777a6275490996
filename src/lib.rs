//! Typed endpoint catalogue for the Riot Games public API.
//!
//! Each resource type (`MatchV5`, `LeagueV4`, ...) turns its arguments into a
//! relative URL and hands a [`Query`] to the [`Dispatcher`] supplied at
//! construction. Transport, signing and rate limiting belong to the
//! dispatcher.

pub mod api;
pub mod catalogue;
pub mod config;
pub mod error;
pub mod routing;

pub use api::client::RiotApi;
pub use api::endpoint::Endpoint;
pub use api::params::*;
pub use api::query::{Dispatcher, Query};
pub use error::AppError;
pub use routing::{Platform, Region, Shard};
