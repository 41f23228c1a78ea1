#![forbid(unsafe_code)]

//! Pattern-based hyphenation using Frank Liang's algorithm.
//!
//! Finds legal break points inside words and renders text with a configurable
//! break symbol inserted. Deterministic: same patterns + same word → same
//! break points, always.
//!
//! # Architecture
//!
//! ```text
//! patterns text → PatternStore (parse, sort once)
//! exceptions text → ExceptionTable (word → explicit mask)
//! word → pad with markers → sorted-cursor match → max level per gap
//!      → odd levels = break allowed → margin correction → render
//! text → letter runs + verbatim separators → per-word hyphenation
//! ```
//!
//! The engine is an immutable value: [`Hyphenator::build`] consumes the raw
//! pattern/exception text once, and every operation afterwards is a pure
//! function. Share it freely across threads; per-call scratch lives on the
//! stack.
//!
//! Loading pattern text from files or embedded language tables is the job of
//! the `softbreak-patterns` crate; this crate only sees the two strings.

pub mod error;
pub mod exceptions;
pub mod hyphenator;
mod levels;
mod mask;
pub mod pattern;

pub use error::BuildError;
pub use exceptions::ExceptionTable;
pub use hyphenator::{Hyphenator, Options};
pub use pattern::{Pattern, PatternStore};
