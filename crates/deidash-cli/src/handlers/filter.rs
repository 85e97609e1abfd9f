use anyhow::{Result, bail};
use chrono::NaiveDate;
use deidash_engine::{DateRange, FilterSelection, Selection};
use deidash_ingest::AgencyCatalog;
use deidash_types::{ContractTable, SizeCategory};

use crate::args::FilterArgs;

const ALL: &str = "all";

/// Turn command-line filters into a selection against `table`.
///
/// Omitted dates default to the table's bounds. Only an explicit
/// `--from`/`--to` pair can be rejected as reversed. Agencies are canonicalised
/// through `catalog`; an agency absent from the data is still a valid
/// predicate and simply matches nothing.
pub fn resolve_selection(
    args: &FilterArgs,
    table: &ContractTable,
    catalog: &AgencyCatalog,
) -> Result<FilterSelection> {
    let mut selection = FilterSelection::for_table(table);

    let bounds = table.date_bounds();
    selection.date_range = match (args.from, args.to) {
        (Some(from), Some(to)) => {
            if from > to {
                bail!("--from {} is after --to {}", from, to);
            }
            Some(DateRange::new(from, to))
        }
        // One-sided ranges outside the data are empty, not reversed
        (Some(from), None) => {
            let to = bounds.map_or(NaiveDate::MAX, |b| b.max.max(from));
            Some(DateRange::new(from, to))
        }
        (None, Some(to)) => {
            let from = bounds.map_or(NaiveDate::MIN, |b| b.min.min(to));
            Some(DateRange::new(from, to))
        }
        (None, None) => bounds.map(DateRange::from),
    };

    if let Some(agency) = args.agency.as_deref().map(str::trim).filter(|a| !is_all(a)) {
        selection.agency = Selection::Only(catalog.canonicalize(agency).to_string());
    }

    if let Some(size) = args.size.as_deref().filter(|s| !is_all(s)) {
        let Some(category) = SizeCategory::parse(size) else {
            let keys: Vec<&str> = SizeCategory::ALL.iter().map(|c| c.key()).collect();
            bail!(
                "Unknown size '{}'. Expected 'All' or one of: {}",
                size,
                keys.join(", ")
            );
        };
        selection.size = Selection::Only(category);
    }

    let schema = table.schema();
    for name in &args.themes {
        let Some(id) = schema.resolve(name) else {
            tracing::warn!(theme = %name, "rejected unknown theme");
            let labels = schema.labels();
            if labels.is_empty() {
                bail!("Unknown theme '{}'. The dataset has no theme columns", name);
            }
            bail!(
                "Unknown theme '{}'. Available themes: {}",
                name,
                labels.join(", ")
            );
        };
        if !selection.themes.contains(&id) {
            selection.themes.push(id);
        }
    }

    tracing::debug!(?selection, "resolved filters");
    Ok(selection)
}

fn is_all(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case(ALL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use deidash_ingest::read_table;

    const CSV: &str = "\
award_id,recipient_name,awarding_agency_name,award_amount,action_date,contract_start_date,contract_end_date,award_description,theme_gender,theme_race_equity
1,R1,Department of Justice (DOJ),5000,2023-01-15,2023-01-01,2023-02-01,a,true,false
2,R2,National Science Foundation,50000,2023-03-10,2023-01-01,2023-02-01,b,false,true
";

    fn table() -> ContractTable {
        read_table(CSV.as_bytes(), &AgencyCatalog::builtin()).unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_defaults_span_the_table() {
        let table = table();
        let selection = resolve_selection(&FilterArgs::default(), &table, &AgencyCatalog::builtin())
            .unwrap();

        assert_eq!(
            selection.date_range,
            Some(DateRange::new(day(2023, 1, 15), day(2023, 3, 10)))
        );
        assert!(selection.agency.is_all());
        assert!(selection.size.is_all());
        assert!(selection.themes.is_empty());
    }

    #[test]
    fn test_synonyms_and_labels_are_resolved() {
        let table = table();
        let args = FilterArgs {
            agency: Some("Department of Justice (DOJ)".to_string()),
            size: Some("SMALL".to_string()),
            themes: vec!["Race Equity".to_string(), "theme_race_equity".to_string()],
            ..FilterArgs::default()
        };
        let selection = resolve_selection(&args, &table, &AgencyCatalog::builtin()).unwrap();

        assert_eq!(
            selection.agency,
            Selection::Only("Department of Justice".to_string())
        );
        assert_eq!(selection.size, Selection::Only(SizeCategory::Small));
        assert_eq!(selection.themes.len(), 1);
    }

    #[test]
    fn test_all_is_case_insensitive() {
        let table = table();
        let args = FilterArgs {
            agency: Some("ALL".to_string()),
            size: Some("All".to_string()),
            ..FilterArgs::default()
        };
        let selection = resolve_selection(&args, &table, &AgencyCatalog::builtin()).unwrap();
        assert!(selection.agency.is_all());
        assert!(selection.size.is_all());
    }

    #[test]
    fn test_invalid_inputs_are_rejected() {
        let table = table();
        let catalog = AgencyCatalog::builtin();

        let reversed = FilterArgs {
            from: Some(day(2023, 3, 1)),
            to: Some(day(2023, 2, 1)),
            ..FilterArgs::default()
        };
        assert!(resolve_selection(&reversed, &table, &catalog).is_err());

        let size = FilterArgs {
            size: Some("huge".to_string()),
            ..FilterArgs::default()
        };
        assert!(resolve_selection(&size, &table, &catalog).is_err());

        let theme = FilterArgs {
            themes: vec!["Veterans".to_string()],
            ..FilterArgs::default()
        };
        let message = resolve_selection(&theme, &table, &catalog)
            .unwrap_err()
            .to_string();
        assert!(message.contains("Gender, Race Equity"));
    }

    #[test]
    fn test_one_sided_range_past_the_data_is_empty() {
        let table = table();
        let catalog = AgencyCatalog::builtin();

        let late = FilterArgs {
            from: Some(day(2030, 1, 1)),
            ..FilterArgs::default()
        };
        let selection = resolve_selection(&late, &table, &catalog).unwrap();
        assert_eq!(
            selection.date_range,
            Some(DateRange::new(day(2030, 1, 1), day(2030, 1, 1)))
        );
        assert!(selection.apply(&table).is_empty());

        let early = FilterArgs {
            to: Some(day(2000, 1, 1)),
            ..FilterArgs::default()
        };
        let selection = resolve_selection(&early, &table, &catalog).unwrap();
        assert_eq!(
            selection.date_range,
            Some(DateRange::new(day(2000, 1, 1), day(2000, 1, 1)))
        );
        assert!(selection.apply(&table).is_empty());
    }

    #[test]
    fn test_one_sided_range_inside_the_data_keeps_table_bound() {
        let table = table();
        let args = FilterArgs {
            from: Some(day(2023, 2, 1)),
            ..FilterArgs::default()
        };
        let selection = resolve_selection(&args, &table, &AgencyCatalog::builtin()).unwrap();
        assert_eq!(
            selection.date_range,
            Some(DateRange::new(day(2023, 2, 1), day(2023, 3, 10)))
        );
        assert_eq!(selection.apply(&table).len(), 1);
    }
}
