//! # Core Module
//!
//! This module provides the fundamental building blocks for nucleic acid structure
//! analysis in basescan, serving as the computational foundation of the library.
//!
//! ## Overview
//!
//! The core module implements the data structures and pure geometric algorithms
//! required for base-pair identification. It provides a complete framework for
//! representing structures as immutable atom snapshots, describing the five
//! canonical bases in standard coordinates, and answering the geometric questions
//! the analysis engine asks of them.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules that handle different
//! aspects of structural analysis:
//!
//! - **Molecular Representation** ([`models`]) - Flat, ordered atom collections with
//!   residue/chain identity
//! - **Standard Base Library** ([`bases`]) - Immutable reference geometry for the five
//!   canonical bases, including ring centers and hydrogen-bond masks
//! - **Spatial Indexing** ([`spatial`]) - Cell-grid proximity queries over point sets
//! - **Rigid Superposition** ([`superposition`]) - Least-squares fitting of one point
//!   set onto another
//! - **Hydrogen Bonds** ([`hbond`]) - Geometric donor/hydrogen/acceptor detection
//! - **Utilities** ([`utils`]) - Distance/angle helpers, name tables, and residue
//!   filter predicates

pub mod bases;
pub mod hbond;
pub mod models;
pub mod spatial;
pub mod superposition;
pub mod utils;
