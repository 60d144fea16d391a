// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`export`]: Export settings ([`ExportFormat`](export::ExportFormat),
//!   [`Resolution`](export::Resolution), [`Compression`](export::Compression))

pub mod export;
