//! Domain modules organized by bounded context.
//!
//! - **catalog**: descriptor table, lookup index, and search
//! - **tools**: the transformation tools and their MCP glue
//! - **resources**: catalog views exposed as MCP resources
//! - **feedback**: the external mail-relay boundary
//! - **telemetry**: fire-and-forget usage events

pub mod catalog;
pub mod feedback;
pub mod resources;
pub mod telemetry;
pub mod tools;
