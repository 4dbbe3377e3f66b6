//! ContaLeve Core - Shared value types and form masks.
//!
//! This crate provides the validation and formatting layer used across all
//! ContaLeve components:
//! - `admin` - Internal administration panel
//! - `cli` - Command-line tools for support staff and batch cleanup
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! database access, no HTTP clients. This keeps it lightweight and allows it
//! to be called on every keystroke of a form field.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for Brazilian tax documents (CPF, CNPJ),
//!   postal codes, phone numbers, and monetary amounts
//! - [`form`] - Keystroke-level input masks for form fields

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod form;
pub mod types;

pub use types::*;
