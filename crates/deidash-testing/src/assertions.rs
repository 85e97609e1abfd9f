//! Assertions over the JSON result envelope (`badge`, `content`,
//! `suggestions`) printed with `--format json`.

use anyhow::{Context, Result, bail};
use serde_json::Value;

/// Assert `content.metrics.contract_count`.
pub fn assert_contract_count(json: &Value, expected: u64) -> Result<()> {
    let count = json["content"]["metrics"]["contract_count"]
        .as_u64()
        .context("Expected 'content.metrics.contract_count' in JSON")?;

    if count != expected {
        bail!("Expected {} contracts, got {}", expected, count);
    }

    Ok(())
}

/// Award ids of `content.rows` (table) or `content.cards` (feed), in order.
pub fn award_ids(json: &Value) -> Result<Vec<String>> {
    let items = json["content"]["rows"]
        .as_array()
        .or_else(|| json["content"]["cards"].as_array())
        .context("Expected 'content.rows' or 'content.cards' array in JSON")?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item["award_id"]
                .as_str()
                .map(String::from)
                .with_context(|| format!("Item {} missing award_id", i))
        })
        .collect()
}

/// Assert the badge level (`success`, `info`, `warning`, `error`).
pub fn assert_badge_level(json: &Value, expected: &str) -> Result<()> {
    let level = json["badge"]["level"]
        .as_str()
        .context("Expected 'badge.level' in JSON")?;

    if level != expected {
        bail!("Expected badge level {}, got {}", expected, level);
    }

    Ok(())
}
