//! Earth Engine integration
//!
//! - [`expression`] - computation graph wire format and typed builders
//! - [`models`] - export request and operation models
//! - [`service`] - the [`ImageryService`] trait
//! - [`client`] - HTTP implementation
//! - [`dry_run`] - offline implementation

pub mod client;
pub mod dry_run;
pub mod expression;
pub mod models;
pub mod service;

pub use client::EarthEngineClient;
pub use dry_run::DryRunService;
pub use expression::{Expression, Geometry, Image, ImageCollection, ValueNode};
pub use models::{ExportImageRequest, Operation};
pub use service::ImageryService;
