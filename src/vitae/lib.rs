//! # Vitae
//!
//! A personal resume card for the terminal: one hard-coded record,
//! rendered as styled, boxed text.
//!
//! The layering is deliberately small and one-directional:
//!
//! ```text
//! data (the record) ──▶ render (section formatters) ──▶ marquee (frame)
//!                                                            │
//!                                                       main (stdout)
//! ```
//!
//! The library never touches stdout, stderr, or the exit code; that is
//! the binary's job. Everything from [`render`] inward is a pure
//! function over the record it is given, so any fixture can stand in
//! for the real data in tests.
//!
//! ## Module Overview
//!
//! - [`model`]: the record types (`Resume`, `Contact`, entries)
//! - [`data`]: the one hard-coded record
//! - [`render`]: one pure formatter per section, plus `render_resume`
//! - [`styles`]: the named style palette (`VITAE_THEME`)
//! - [`error`]: the error type and `Result` alias

pub mod data;
pub mod error;
pub mod model;
pub mod render;
pub mod styles;
