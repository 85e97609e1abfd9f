use deidash_ingest::{AgencyCatalog, LoadError, load_table, read_table, write_csv};
use deidash_types::SizeCategory;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

const HEADER: &str = "award_id,recipient_name,awarding_agency_name,award_amount,action_date,contract_start_date,contract_end_date,award_description";

fn sample_path() -> &'static Path {
    Path::new("tests/samples/contracts_small.csv")
}

fn load_str(csv: &str) -> Result<deidash_types::ContractTable, LoadError> {
    read_table(csv.as_bytes(), &AgencyCatalog::builtin())
}

#[test]
fn test_load_sample_normalizes_every_row() -> anyhow::Result<()> {
    let table = load_table(sample_path(), &AgencyCatalog::builtin())?;

    assert_eq!(table.len(), 5);
    assert_eq!(table.schema().labels(), vec!["Gender", "Race Equity", "Disability"]);

    let first = &table.records()[0];
    assert_eq!(first.award_amount, 9_999.99);
    assert_eq!(first.award_size_category, SizeCategory::Micro);
    assert_eq!(first.raw_agency_name, "National Science Foundation (NSF)");
    assert_eq!(first.awarding_agency_name, "National Science Foundation");
    assert_eq!(first.contract_duration_days, 364);

    let second = &table.records()[1];
    assert_eq!(second.award_size_category, SizeCategory::Small);
    assert_eq!(second.action_date.format("%H:%M").to_string(), "09:30");

    assert_eq!(table.records()[3].award_size_category, SizeCategory::Major);
    assert_eq!(table.records()[4].award_size_category, SizeCategory::Large);
    Ok(())
}

#[test]
fn test_negative_duration_is_kept() -> anyhow::Result<()> {
    let table = load_table(sample_path(), &AgencyCatalog::builtin())?;
    let reversed = &table.records()[3];

    assert!(reversed.contract_end_date < reversed.contract_start_date);
    assert_eq!(reversed.contract_duration_days, -31);
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_table(Path::new("does/not/exist.csv"), &AgencyCatalog::builtin()).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("does/not/exist.csv"));
}

#[test]
fn test_non_numeric_amount_fails_whole_load() {
    let csv = format!(
        "{HEADER}\nA,R,Agency,$100,2023-01-01,2023-01-01,2023-02-01,ok\nB,R,Agency,12abc,2023-01-01,2023-01-01,2023-02-01,bad\n"
    );

    match load_str(&csv) {
        Err(LoadError::InvalidAmount { row, value }) => {
            assert_eq!(row, 2);
            assert_eq!(value, "12abc");
        }
        other => panic!("expected InvalidAmount, got {:?}", other),
    }
}

#[test]
fn test_malformed_date_fails_whole_load() {
    let csv = format!("{HEADER}\nA,R,Agency,100,2023-01-01,someday,2023-02-01,desc\n");

    match load_str(&csv) {
        Err(LoadError::InvalidDate { row, column, .. }) => {
            assert_eq!(row, 1);
            assert_eq!(column, "contract_start_date");
        }
        other => panic!("expected InvalidDate, got {:?}", other),
    }
}

#[test]
fn test_missing_required_column() {
    let csv = "award_id,recipient_name\nA,R\n";
    assert!(matches!(load_str(csv), Err(LoadError::MissingColumn(c)) if c == "awarding_agency_name"));
}

#[test]
fn test_theme_columns_with_the_same_label_fail() {
    let csv = format!(
        "{HEADER},theme_race_equity,theme_Race_Equity\nA,R,Agency,100,2023-01-01,2023-01-01,2023-02-01,desc,true,false\n"
    );

    match load_str(&csv) {
        Err(LoadError::DuplicateThemeLabel { label, second, .. }) => {
            assert_eq!(label, "Race Equity");
            assert_eq!(second, "theme_Race_Equity");
        }
        other => panic!("expected DuplicateThemeLabel, got {:?}", other),
    }
}

#[test]
fn test_ragged_row_is_csv_error() {
    let csv = format!("{HEADER}\nA,R,Agency,100\n");
    assert!(matches!(load_str(&csv), Err(LoadError::Csv(_))));
}

#[test]
fn test_invalid_theme_flag() {
    let csv = format!("{HEADER},theme_gender\nA,R,Agency,100,2023-01-01,2023-01-01,2023-02-01,desc,perhaps\n");

    match load_str(&csv) {
        Err(LoadError::InvalidFlag { column, value, .. }) => {
            assert_eq!(column, "theme_gender");
            assert_eq!(value, "perhaps");
        }
        other => panic!("expected InvalidFlag, got {:?}", other),
    }
}

#[test]
fn test_existing_derived_columns_are_not_overwritten() -> anyhow::Result<()> {
    let csv = format!(
        "{HEADER},contract_duration_days,award_size_category\n\
         A,R,Agency,5,2023-01-01,2023-01-01,2023-02-01,desc,999,Major (> $10M)\n\
         B,R,Agency,5,2023-01-01,2023-01-01,2023-02-01,desc,,\n"
    );
    let table = load_str(&csv)?;

    assert_eq!(table.records()[0].contract_duration_days, 999);
    assert_eq!(table.records()[0].award_size_category, SizeCategory::Major);
    assert_eq!(table.records()[1].contract_duration_days, 31);
    assert_eq!(table.records()[1].award_size_category, SizeCategory::Micro);
    Ok(())
}

#[test]
fn test_unknown_size_label_fails() {
    let csv = format!(
        "{HEADER},award_size_category\nA,R,Agency,5,2023-01-01,2023-01-01,2023-02-01,desc,Gigantic\n"
    );
    assert!(matches!(
        load_str(&csv),
        Err(LoadError::InvalidSizeCategory { row: 1, .. })
    ));
}

#[test]
fn test_configured_aliases_merge_agencies() -> anyhow::Result<()> {
    let csv = format!(
        "{HEADER}\n\
         1,R1,Dept X,100,2023-01-01,2023-01-01,2023-02-01,a\n\
         2,R2,Dept X (X),200,2023-01-02,2023-01-01,2023-02-01,b\n\
         3,R3,Dept X,300,2023-01-03,2023-01-01,2023-02-01,c\n"
    );
    let catalog = AgencyCatalog::builtin().with_aliases([("Dept X (X)", "Dept X")])?;
    let table = read_table(csv.as_bytes(), &catalog)?;

    assert_eq!(table.agencies(), vec!["Dept X"]);
    assert_eq!(table.records()[1].raw_agency_name, "Dept X (X)");
    Ok(())
}

#[test]
fn test_export_reloads_to_same_table() -> anyhow::Result<()> {
    let table = load_table(sample_path(), &AgencyCatalog::builtin())?;

    let mut file = NamedTempFile::new()?;
    let written = write_csv(&mut file, table.schema(), table.records())?;
    file.flush()?;
    assert_eq!(written, 5);

    let reloaded = load_table(file.path(), &AgencyCatalog::builtin())?;
    assert_eq!(reloaded.schema(), table.schema());
    assert_eq!(reloaded.records(), table.records().iter().map(|r| {
        let mut r = r.clone();
        r.raw_agency_name = r.awarding_agency_name.clone();
        r.award_amount = (r.award_amount * 100.0).round() / 100.0;
        r
    }).collect::<Vec<_>>().as_slice());
    Ok(())
}
