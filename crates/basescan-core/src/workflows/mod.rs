//! # Workflows Module
//!
//! This module provides the high-level entry points that orchestrate a complete
//! base-pair analysis in basescan.
//!
//! ## Overview
//!
//! Workflows are the top-level API of the library. They validate the search
//! configuration, drive candidate enumeration, base matching, and criteria
//! evaluation, and log recoverable per-candidate conditions without failing the
//! overall run.
//!
//! ## Architecture
//!
//! - **Pair Search Workflow** ([`pairs`]) - The complete base-pair identification
//!   pipeline, from structure to accepted residue pairs.

pub mod pairs;
