// Plantclip - Power plant satellite tile exporter
// Copyright (c) 2025 Plantclip Contributors
// Licensed under the MIT License

//! # Plantclip - Power Plant Satellite Tile Exporter
//!
//! Plantclip cuts a small square of satellite imagery around each power plant
//! in an eGRID plant sheet and hands the clip to the Earth Engine REST API as
//! a GeoTIFF export task.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Reading** plant coordinates from `.xlsx`/`.csv` plant tables
//! - **Building** Earth Engine expressions (NAIP mosaic, pan-sharpened Landsat 8)
//! - **Submitting** one export task per plant without waiting on it
//! - **Reporting** `<id>:<source>` per started task and `-1` per skipped ID
//!
//! ## Architecture
//!
//! Plantclip follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (mosaics, export tasks, the export loop)
//! - [`adapters`] - External integrations (Earth Engine, spreadsheets)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use plantclip::adapters::earthengine::EarthEngineClient;
//! use plantclip::adapters::spreadsheet::PlantTable;
//! use plantclip::config::load_config;
//! use plantclip::core::export::{ExportSettings, Exporter};
//! use plantclip::domain::ImageSource;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("plantclip.toml")?;
//!
//!     let client = EarthEngineClient::initialize(config.earthengine.clone())?;
//!     let table = PlantTable::open(&config.plants)?;
//!     let exporter = Exporter::new(
//!         Arc::new(table),
//!         Arc::new(client),
//!         ExportSettings::from_config(&config.export),
//!     );
//!
//!     let summary = exporter
//!         .run(config.export.id_range()?, ImageSource::Naip)
//!         .await?;
//!
//!     println!("Started {} export tasks", summary.submitted);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Plantclip uses the [`domain::PlantClipError`] type for all errors. Lookup
//! failures for a single plant are a separate [`domain::LookupError`]; the
//! exporter reports them and moves on.
//!
//! ```rust,no_run
//! use plantclip::domain::PlantClipError;
//!
//! fn example() -> Result<(), PlantClipError> {
//!     let config = plantclip::config::load_config("plantclip.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Plantclip uses structured logging with the `tracing` crate. Console logs go
//! to stderr so stdout carries only progress lines and the summary.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
