//! Seasonpack - Entry Point
//!
//! Invoked without arguments from the pack root; regenerates the whole
//! output tree in a single synchronous pass.

use seasonpack::core::config::GeneratorConfig;
use seasonpack::core::error::Result;
use seasonpack::pipeline::Generator;

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("seasonpack=info")
        .init();

    tracing::info!("Seasonpack generator starting...");

    Generator::new(GeneratorConfig::default()).run()
}
