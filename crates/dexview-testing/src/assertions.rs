//! Custom assertions for dexview-specific validation.
//!
//! Provides high-level assertions that make tests more readable:
//! - Record id sequences
//! - Duplicate detection after incremental loading
//! - JSON snapshot structure checks for CLI output

use anyhow::{Context, Result};
use dexview_types::Record;
use serde_json::Value;
use std::collections::HashSet;

/// Assert that `records` carry exactly `expected` ids, in order.
pub fn assert_record_ids(records: &[Record], expected: &[u32]) -> Result<()> {
    let ids: Vec<u32> = records.iter().map(|r| r.id).collect();
    if ids != expected {
        anyhow::bail!("Expected record ids {:?}, got {:?}", expected, ids);
    }
    Ok(())
}

/// Assert that no record id appears twice.
pub fn assert_no_duplicates(records: &[Record]) -> Result<()> {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.id) {
            anyhow::bail!("Record {} ({}) appears more than once", record.id, record.name);
        }
    }
    Ok(())
}

/// Assert that JSON output contains expected number of records.
pub fn assert_json_record_count(json: &Value, expected: usize) -> Result<()> {
    let records = json["records"]
        .as_array()
        .context("Expected 'records' array in JSON")?;

    if records.len() != expected {
        anyhow::bail!("Expected {} records, got {}", expected, records.len());
    }

    Ok(())
}

/// Assert that JSON output reports the given view mode.
pub fn assert_json_mode(json: &Value, expected: &str) -> Result<()> {
    let mode = json["mode"].as_str().context("Expected 'mode' string in JSON")?;
    if mode != expected {
        anyhow::bail!("Expected mode {}, got {}", expected, mode);
    }
    Ok(())
}
