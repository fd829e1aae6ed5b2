//! Schema definitions for the apiref documentation pipeline.
//!
//! This crate contains the data structures shared across the pipeline:
//! the typedoc reflection tree as emitted by the TypeScript documentation
//! generator (the input wire format), and the flattened `Entry` records
//! produced for the rendering layer (the output format).
//!
//! The schemas are designed to be:
//! - **Liberal on input**: the generator's JSON is accepted as-is,
//!   including absent optional fields and unknown extra fields
//! - **Strict on output**: entries are a closed, tagged shape the
//!   frontend can switch on exhaustively
//! - **Shared**: TypeScript bindings are generated from these types so
//!   the docs frontend and this pipeline cannot drift

mod entry;
#[cfg(test)]
mod testutil;
mod typedoc;

#[doc(inline)]
pub use entry::*;
#[doc(inline)]
pub use typedoc::*;
