//! Status command implementation
//!
//! This module implements the `status` command, which fetches one export
//! operation by name and prints its state. The `export` command never waits
//! on tasks, so this is where completion can be checked.

use crate::adapters::earthengine::models::Operation;
use crate::adapters::earthengine::{EarthEngineClient, ImageryService};
use crate::config::load_config;
use clap::Args;

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Operation name (`projects/<project>/operations/<id>`) or bare ID
    pub operation: String,
}

impl StatusArgs {
    /// Execute the status command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(operation = %self.operation, "Checking export status");

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let client = match EarthEngineClient::initialize(config.earthengine) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to initialize Earth Engine client");
                println!("   Error: {e}");
                return Ok(4); // Connection error exit code
            }
        };

        let operation = match client.get_operation(&self.operation).await {
            Ok(op) => op,
            Err(e) => {
                println!("❌ Failed to fetch operation {}", self.operation);
                println!("   Error: {e}");
                return Ok(5); // Fatal error exit code
            }
        };

        print_operation(&operation);

        Ok(status_exit_code(&operation))
    }
}

fn print_operation(operation: &Operation) {
    println!("📊 Export Status");
    println!();
    println!("  Operation: {}", operation.name);
    println!("  State: {}", operation.state());
    println!("  Done: {}", operation.done);

    if let Some(metadata) = &operation.metadata {
        if let Some(description) = &metadata.description {
            println!("  Description: {description}");
        }
        if let Some(progress) = metadata.progress {
            println!("  Progress: {:.0}%", progress * 100.0);
        }
        if let Some(updated) = &metadata.update_time {
            println!("  Updated: {updated}");
        }
        for uri in &metadata.destination_uris {
            println!("  Output: {uri}");
        }
    }

    if let Some(error) = &operation.error {
        println!("  Error ({}): {}", error.code, error.message);
    }
    println!();
}

/// 0 while running or after success, 1 when the task failed
fn status_exit_code(operation: &Operation) -> i32 {
    if operation.done && !operation.succeeded() {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::earthengine::models::Status;

    fn operation(done: bool, error: Option<Status>) -> Operation {
        Operation {
            name: "projects/p/operations/ABC".to_string(),
            done,
            metadata: None,
            error,
        }
    }

    #[test]
    fn test_status_exit_codes() {
        assert_eq!(status_exit_code(&operation(false, None)), 0);
        assert_eq!(status_exit_code(&operation(true, None)), 0);
        assert_eq!(
            status_exit_code(&operation(
                true,
                Some(Status {
                    code: 3,
                    message: "Export too large".to_string()
                })
            )),
            1
        );
    }

    #[tokio::test]
    async fn test_status_missing_config() {
        let args = StatusArgs {
            operation: "ABC".to_string(),
        };
        assert_eq!(args.execute("/nonexistent/plantclip.toml").await.unwrap(), 2);
    }
}
