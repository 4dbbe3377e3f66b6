//! Integration tests for ContaLeve.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p conta-leve-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `documents` - Tax document lifecycle (parse, format, re-parse, serde)
//! - `amounts` - Monetary amount round trips
//! - `form_masks` - Keystroke simulations over the form masks
//!
//! The suite exercises the public API only, the way the admin panel and the
//! CLI consume it. No network, no database.
