//! # fir-core
//!
//! Core types and pure client-side procedures for FIR Desk.
//!
//! This crate provides the foundational types shared across all FIR Desk crates:
//! - Entity structs mirroring the FIR Intelligence API resources
//! - Status enums for documents, analysis jobs, and chat messages
//! - Folder hierarchy resolution (breadcrumb paths, browser listings)
//! - Library snapshots with an explicit mutation merge contract
//! - Dashboard statistics computed from a snapshot
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod hierarchy;
pub mod library;
pub mod requests;
pub mod stats;

pub use errors::CoreError;
