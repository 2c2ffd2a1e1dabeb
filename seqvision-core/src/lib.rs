//! Shared primitives and traits for the SeqVision sequence toolkit.
//!
//! `seqvision-core` provides the foundation the other SeqVision crates build on:
//!
//! - **Error types** — [`SeqVisionError`] and [`Result`] for structured error handling
//! - **Traits** — [`Sequence`], [`Scored`], [`Annotated`], [`Summarizable`]
//! - **File layout** — [`FileLayout`] resolving file names against input/output directories

pub mod error;
pub mod layout;
pub mod traits;

pub use error::{Result, SeqVisionError};
pub use layout::FileLayout;
pub use traits::*;
