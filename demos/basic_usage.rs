// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the configuration store.
//!
//! This example demonstrates:
//! - Reading built-in defaults through the process-wide accessors
//! - Setting typed values and the fixed-type rule
//! - Exporting the store as JSON text
//! - Importing JSON text, including a rejected document
//!
//! To run this example:
//! ```bash
//! RUST_LOG=debug cargo run --example basic_usage
//! ```

use propcfg::prelude::*;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== Configuration Store: Basic Usage ===\n");

    println!("--- Example 1: Defaults ---");
    for key in ConfigKey::ALL {
        println!("  {:<38} {}", key.as_str(), key.description());
    }
    println!(
        "CRITICAL_SPLINES_ENABLED = {}",
        propcfg::get_bool(ConfigKey::CriticalSplinesEnabled)?
    );

    println!("\n--- Example 2: Typed Setters ---");
    propcfg::set_double(ConfigKey::MaximumTableDirectorySizeInGb, 4.0)?;
    println!(
        "MAXIMUM_TABLE_DIRECTORY_SIZE_IN_GB = {}",
        propcfg::get_double(ConfigKey::MaximumTableDirectorySizeInGb)?
    );
    match propcfg::set_string(ConfigKey::MaximumTableDirectorySizeInGb, "4") {
        Ok(()) => println!("✗ cross-type write unexpectedly accepted"),
        Err(e) => println!("✓ cross-type write rejected: {}", e),
    }

    println!("\n--- Example 3: JSON Export ---");
    let pretty = Configuration::new().with_codec(JsonCodec::new().pretty(true));
    pretty.load_json(&propcfg::as_json()?)?;
    println!("{}", pretty.as_json_text()?);

    println!("\n--- Example 4: JSON Import ---");
    propcfg::load_json_text(r#"{"CRITICAL_SPLINES_ENABLED": false, "SAVE_RAW_TABLES": true}"#)?;
    println!(
        "CRITICAL_SPLINES_ENABLED = {}, SAVE_RAW_TABLES = {}",
        propcfg::get_bool(ConfigKey::CriticalSplinesEnabled)?,
        propcfg::get_bool(ConfigKey::SaveRawTables)?
    );

    match propcfg::load_json_text(r#"{"SAVE_RAW_TABLES": false, "NO_SUCH_KEY": 1}"#) {
        Ok(()) => println!("✗ document with unknown key unexpectedly accepted"),
        Err(e) => println!("✓ document rejected: {}", e),
    }
    println!(
        "SAVE_RAW_TABLES is still {}",
        propcfg::get_bool(ConfigKey::SaveRawTables)?
    );

    Ok(())
}
