pub mod client;
pub mod endpoint;
pub mod endpoints;
pub mod params;
pub mod query;
