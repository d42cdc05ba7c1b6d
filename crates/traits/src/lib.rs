//! Core traits for the kitbag utility crates.
//!
//! This crate provides the foundational traits that the kitbag implementations
//! conform to. It is `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`Checksum`] | Streaming checksum computation | runtime-configured CRC |
//! | [`IdGenerator`] | ID allocation and bookkeeping | sequential allocator |
//! | [`IdHolder`] | Values bound to an allocated ID | RAII ID tickets |
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

mod checksum;
mod ident;

pub use checksum::Checksum;
pub use ident::{IdGenerator, IdHolder};
