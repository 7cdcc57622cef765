//! core
//!
//! Core domain types, schemas, and network loading for forkroute.
//!
//! # Modules
//!
//! - [`types`] - Strong types: StationName, TrainColor
//! - [`network`] - Station network model and JSON loading
//! - [`vocabulary`] - Station and color vocabularies of a network
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - Schemas are strict and self-describing
//! - A loaded network is read-only

pub mod config;
pub mod network;
pub mod types;
pub mod vocabulary;
