//! CLI command implementations
//!
//! One module per subcommand. Each `execute` returns the process exit code.

pub mod export;
pub mod init;
pub mod status;
pub mod validate;
