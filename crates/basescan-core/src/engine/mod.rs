//! # Engine Module
//!
//! This module implements the analysis engine for base-pair identification,
//! providing the computational stages between a raw structure and the final
//! list of accepted pairs.
//!
//! ## Overview
//!
//! The engine decomposes the DSSR classification into three stages. Candidate
//! enumeration finds residue pairs whose sugar anchors fall inside a distance
//! band. Base matching superimposes the standard base templates onto observed
//! residues and derives their reference frames, substituting the fitted
//! template when a residue is incomplete. The criteria stage applies the five
//! sequential geometric tests, including the stacking-exclusion and
//! hydrogen-bond plausibility sub-checks.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Search cutoffs and matching thresholds
//! - **Candidate Enumeration** ([`candidates`]) - Anchor selection and proximity search
//! - **Base Matching** ([`frames`]) - Template superposition and reference frames
//! - **Pairing Criteria** ([`criteria`]) - The sequential acceptance tests
//! - **Error Handling** ([`error`]) - Engine-level error types

pub mod candidates;
pub mod config;
pub mod criteria;
pub mod error;
pub mod frames;
