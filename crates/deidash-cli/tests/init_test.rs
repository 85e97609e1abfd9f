use anyhow::Result;
use deidash_testing::{CsvFixture, TestWorld};
use std::fs;

#[test]
fn test_init_writes_config_once() -> Result<()> {
    let world = TestWorld::new().with_dataset(&CsvFixture::standard());
    let config_path = world.data_dir().join("config.toml");

    let result = world.run(&["init"])?;
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("Configuration written"));
    assert!(config_path.exists());

    let config = fs::read_to_string(&config_path)?;
    assert!(config.contains("dataset = \"dei_contracts_master.csv\""));
    assert!(config.contains("sample_size = 5"));

    let result = world.run(&["init"])?;
    assert!(result.success());
    assert!(result.stdout().contains("Configuration already exists"));
    assert!(result.stdout().contains("deidash init --force"));

    Ok(())
}

#[test]
fn test_init_force_records_dataset() -> Result<()> {
    let world = TestWorld::new();
    world.write_file("exports/awards.csv", &CsvFixture::standard().to_csv())?;

    world.run(&["init"])?;
    let json = world.run_json(&["--dataset", "exports/awards.csv", "init", "--force"])?;
    assert_eq!(json["badge"]["level"], "success");
    assert_eq!(json["content"]["dataset_exists"], true);

    let config = fs::read_to_string(world.data_dir().join("config.toml"))?;
    assert!(config.contains("exports/awards.csv"));

    // The configured dataset is used without the flag
    let json = world.run_json(&["summary"])?;
    assert_eq!(json["content"]["metrics"]["contract_count"], 6);

    Ok(())
}

#[test]
fn test_guidance_without_command() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&[])?;
    assert!(result.success());
    assert!(result.stdout().contains("deidash init --dataset <CSV>"));
    assert!(result.stdout().contains("(not found)"));

    Ok(())
}

#[test]
fn test_options_lists_filter_values() -> Result<()> {
    let world = TestWorld::new().with_dataset(&CsvFixture::standard());

    let json = world.run_json(&["options"])?;
    let content = &json["content"];
    assert_eq!(content["total_rows"], 6);
    assert_eq!(content["date_bounds"]["min"], "2024-01-05");
    assert_eq!(content["date_bounds"]["max"], "2024-03-28");
    assert_eq!(
        content["agencies"],
        serde_json::json!([
            "All",
            "Department of Education",
            "Department of Justice",
            "Environmental Protection Agency",
            "National Science Foundation"
        ])
    );
    assert_eq!(
        content["size_categories"],
        serde_json::json!([
            "All",
            "Large ($1M - $10M)",
            "Major (> $10M)",
            "Medium ($100K - $1M)",
            "Micro (< $10K)",
            "Small ($10K - $100K)"
        ])
    );
    assert_eq!(content["themes"][1]["label"], "Race Equity");
    assert_eq!(content["themes"][1]["column"], "theme_race_equity");

    Ok(())
}
