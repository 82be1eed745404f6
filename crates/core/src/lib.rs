//! Core library for plantly
//!
//! This crate implements the **Functional Core** of the plantly service,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`plantly_core`** (this crate): Pure transformation functions with zero I/O
//! - **`plantly`**: HTTP server, outbound HTTP calls and CLI (the Imperative Shell)
//!
//! Every function here takes plain data (bytes, JSON text, HTML text) and
//! returns plain data, so it can be tested with fixture strings and no mocking.
//!
//! # Module Organization
//!
//! - [`plant_id`]: Plant.id request building and response parsing
//! - [`care`]: Care-note extraction from encyclopedia article HTML
//! - [`identify`]: Assembly of the payloads returned to callers
//! - [`error`]: Failures raised by the transformations above
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use plantly_core::care::{extract_care_notes, CareNotes};
//!
//! let html = "<p>Keep the soil moist. Native to Brazil.</p>";
//! let notes = extract_care_notes(html);
//!
//! assert_eq!(notes, CareNotes::Found(vec!["Keep the soil moist".to_string()]));
//! ```

pub mod care;
pub mod error;
pub mod identify;
pub mod plant_id;

pub use error::CoreError;
