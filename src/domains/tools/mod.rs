//! Tools domain module.
//!
//! Every tool implements the same transformation contract: a pure,
//! synchronous function from input text (plus a fixed set of typed
//! options) to either output text or a `TransformError`. The MCP glue
//! around each tool renders whichever comes back, verbatim.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations, one file per tool,
//!   grouped by catalog category
//! - `router.rs` - Dynamic ToolRouter builder for STDIO/TCP transport
//! - `registry.rs` - Central tool registry and HTTP dispatch
//! - `error.rs` - The transformation error taxonomy
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/<category>/`
//! 2. Define params, a pure `transform` core, `execute()`, and `http_handler()`
//! 3. Export it in the category's `mod.rs` and `definitions/mod.rs`
//! 4. Add a route in `router.rs` and a dispatch arm in `registry.rs`
//! 5. Add a descriptor to the catalog table so it is listed and searchable

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::{TransformError, TransformResult};
pub use registry::ToolRegistry;
pub use router::build_tool_router;
