//! Shared test utilities for ukr-bible integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Fixtures are small hand-written corpora; anything that
//! must live on disk goes through a `tempfile` directory.

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
