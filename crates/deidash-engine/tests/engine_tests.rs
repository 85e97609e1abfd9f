use chrono::NaiveDate;
use deidash_engine::{
    DateRange, FilterSelection, SnapshotOptions, SortDirection, SortKey, TableQuery,
    build_snapshot, compute_metrics, monthly_timeline, query_table, sample_rows,
    theme_distribution, top_agencies,
};
use deidash_ingest::{AgencyCatalog, read_table};
use deidash_types::{ContractTable, SizeCategory};
use rand::SeedableRng;
use rand::rngs::StdRng;

const CONTRACTS: &str = "\
award_id,recipient_name,awarding_agency_name,award_amount,action_date,contract_start_date,contract_end_date,award_description,theme_gender,theme_race_equity,theme_disability
A1,Alpha Org,National Science Foundation (NSF),\"$5,000\",2023-01-10,2023-01-10,2023-06-10,Mentoring,True,False,False
A2,Beta LLC,Department of Education,\"$50,000\",2023-01-25,2023-02-01,2023-12-31,Curriculum,False,True,False
A3,Alpha Org,Department of Justice (DOJ),\"$500,000\",2023-02-14 10:15:00,2023-03-01,2024-03-01,Assessment,True,False,True
A4,Gamma Co,National Science Foundation,\"$2,000,000\",2023-02-28,2023-03-01,2025-03-01,Lab access,False,False,True
A5,Delta Inc,Environmental Protection Agency (EPA),\"$20,000,000\",2023-04-02,2023-05-01,2026-05-01,Community grants,False,False,False
A6,Beta LLC,Department of Education (ED),\"$75,000\",2023-04-30,2023-05-01,2023-11-30,Teacher training,False,True,False
";

fn table() -> ContractTable {
    read_table(CONTRACTS.as_bytes(), &AgencyCatalog::builtin()).unwrap()
}

fn ids<'a>(rows: impl IntoIterator<Item = &'a deidash_types::ContractRecord>) -> Vec<&'a str> {
    rows.into_iter().map(|r| r.award_id.as_str()).collect()
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_pass_through_selection_returns_full_table_in_order() {
    let table = table();
    let view = FilterSelection::for_table(&table).apply(&table);

    assert_eq!(ids(view.iter()), vec!["A1", "A2", "A3", "A4", "A5", "A6"]);
}

#[test]
fn test_date_range_compares_calendar_days() {
    let table = table();
    let selection = FilterSelection::for_table(&table)
        .with_date_range(DateRange::new(day(2023, 2, 14), day(2023, 2, 28)));

    assert_eq!(ids(selection.apply(&table).iter()), vec!["A3", "A4"]);
}

#[test]
fn test_theme_selection_is_or_within_and_across() {
    let table = table();
    let schema = table.schema();
    let gender = schema.resolve("Gender").unwrap();
    let race = schema.resolve("theme_race_equity").unwrap();
    let disability = schema.resolve("disability").unwrap();

    let gender_only = FilterSelection::for_table(&table).with_theme(gender);
    assert_eq!(ids(gender_only.apply(&table).iter()), vec!["A1", "A3"]);

    let gender_or_race = gender_only.clone().with_theme(race);
    assert_eq!(ids(gender_or_race.apply(&table).iter()), vec!["A1", "A2", "A3", "A6"]);

    // A1 has gender but not disability
    let disability_only = FilterSelection::for_table(&table).with_theme(disability);
    assert!(!ids(disability_only.apply(&table).iter()).contains(&"A1"));

    let narrowed = gender_or_race.with_agency("Department of Education");
    assert_eq!(ids(narrowed.apply(&table).iter()), vec!["A2", "A6"]);
}

#[test]
fn test_size_and_agency_predicates() {
    let table = table();

    let major = FilterSelection::for_table(&table).with_size(SizeCategory::Major);
    assert_eq!(ids(major.apply(&table).iter()), vec!["A5"]);

    let nsf = FilterSelection::for_table(&table).with_agency("National Science Foundation");
    assert_eq!(ids(nsf.apply(&table).iter()), vec!["A1", "A4"]);

    let unknown = FilterSelection::for_table(&table).with_agency("Department of Nothing");
    assert!(unknown.apply(&table).is_empty());
}

#[test]
fn test_metrics_over_filtered_view() {
    let table = table();
    let view = FilterSelection::for_table(&table).apply(&table);
    let metrics = compute_metrics(&view);

    assert_eq!(metrics.contract_count, 6);
    assert_eq!(metrics.total_award_amount, 22_630_000.0);
    assert_eq!(metrics.unique_recipients, 4);
}

#[test]
fn test_theme_distribution_counts_each_flag() {
    let table = table();
    let view = FilterSelection::for_table(&table).apply(&table);
    let counts: Vec<(String, usize)> = theme_distribution(&view)
        .into_iter()
        .map(|t| (t.label, t.count))
        .collect();

    assert_eq!(
        counts,
        vec![
            ("Gender".to_string(), 2),
            ("Race Equity".to_string(), 2),
            ("Disability".to_string(), 2),
        ]
    );
}

#[test]
fn test_top_agencies_are_ascending_and_bounded_by_total() {
    let table = table();
    let view = FilterSelection::for_table(&table).apply(&table);
    let total = compute_metrics(&view).total_award_amount;

    let all = top_agencies(&view, 10);
    let names: Vec<&str> = all.iter().map(|a| a.agency.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Department of Education",
            "Department of Justice",
            "National Science Foundation",
            "Environmental Protection Agency",
        ]
    );
    let summed: f64 = all.iter().map(|a| a.total_award_amount).sum();
    assert_eq!(summed, total);

    let top_two = top_agencies(&view, 2);
    assert_eq!(top_two.len(), 2);
    assert_eq!(top_two[1].agency, "Environmental Protection Agency");
    assert!(top_two.iter().map(|a| a.total_award_amount).sum::<f64>() < total);
}

#[test]
fn test_top_agency_ties_break_by_name() {
    let csv = "\
award_id,recipient_name,awarding_agency_name,award_amount,action_date,contract_start_date,contract_end_date,award_description
1,R,Zeta Agency,100,2023-01-01,2023-01-01,2023-01-02,x
2,R,Alpha Agency,100,2023-01-01,2023-01-01,2023-01-02,x
";
    let table = read_table(csv.as_bytes(), &AgencyCatalog::builtin()).unwrap();
    let view = FilterSelection::for_table(&table).apply(&table);
    let names: Vec<String> = top_agencies(&view, 10).into_iter().map(|a| a.agency).collect();

    assert_eq!(names, vec!["Alpha Agency", "Zeta Agency"]);
}

#[test]
fn test_monthly_timeline_sums_match_metrics() {
    let table = table();
    let view = FilterSelection::for_table(&table).apply(&table);
    let timeline = monthly_timeline(&view);
    let metrics = compute_metrics(&view);

    let months: Vec<&str> = timeline.iter().map(|p| p.month.as_str()).collect();
    assert_eq!(months, vec!["2023-01", "2023-02", "2023-04"]);
    assert_eq!(
        timeline.iter().map(|p| p.contract_count).sum::<usize>(),
        metrics.contract_count
    );
    assert_eq!(
        timeline.iter().map(|p| p.total_award_amount).sum::<f64>(),
        metrics.total_award_amount
    );
}

#[test]
fn test_empty_date_range_yields_zero_snapshot() {
    let table = table();
    let selection = FilterSelection::for_table(&table)
        .with_date_range(DateRange::new(day(2030, 1, 1), day(2030, 12, 31)));
    let snapshot = build_snapshot(&table, &selection, SnapshotOptions::default());

    assert!(snapshot.is_empty());
    assert_eq!(snapshot.metrics.total_award_amount, 0.0);
    assert_eq!(snapshot.metrics.unique_recipients, 0);
    assert!(snapshot.top_agencies.is_empty());
    assert!(snapshot.timeline.is_empty());
    assert!(snapshot.themes.iter().all(|t| t.count == 0));
}

#[test]
fn test_aliased_agencies_merge_into_one_bar() -> anyhow::Result<()> {
    let csv = "\
award_id,recipient_name,awarding_agency_name,award_amount,action_date,contract_start_date,contract_end_date,award_description
1,R1,Dept X,100,2023-01-01,2023-01-01,2023-02-01,a
2,R2,Dept X (X),200,2023-01-02,2023-01-01,2023-02-01,b
3,R3,Dept X,300,2023-01-03,2023-01-01,2023-02-01,c
";
    let catalog = AgencyCatalog::builtin().with_aliases([("Dept X (X)", "Dept X")])?;
    let table = read_table(csv.as_bytes(), &catalog)?;

    let selection = FilterSelection::for_table(&table).with_agency("Dept X");
    let view = selection.apply(&table);
    assert_eq!(view.len(), 3);

    let bars = top_agencies(&view, 10);
    assert_eq!(bars.len(), 1);
    assert_eq!(bars[0].agency, "Dept X");
    assert_eq!(bars[0].total_award_amount, 600.0);
    Ok(())
}

#[test]
fn test_table_defaults_to_newest_first_and_pages() {
    let table = table();
    let view = FilterSelection::for_table(&table).apply(&table);

    let query = TableQuery {
        page_size: 4,
        ..TableQuery::default()
    };
    let first = query_table(&view, &query);
    assert_eq!(ids(first.rows.iter().copied()), vec!["A6", "A5", "A4", "A3"]);
    assert_eq!(first.total_rows, 6);
    assert_eq!(first.total_pages, 2);

    let second = query_table(&view, &TableQuery { page: 2, ..query });
    assert_eq!(ids(second.rows.iter().copied()), vec!["A2", "A1"]);

    let beyond = query_table(&view, &TableQuery { page: 9, ..query });
    assert!(beyond.rows.is_empty());
    assert_eq!(beyond.total_rows, 6);
    assert_eq!(beyond.total_pages, 2);
}

#[test]
fn test_table_sort_is_stable_for_equal_keys() {
    let table = table();
    let view = FilterSelection::for_table(&table).apply(&table);

    let by_recipient = TableQuery {
        sort: SortKey::Recipient,
        direction: SortDirection::Ascending,
        ..TableQuery::default()
    };
    let page = query_table(&view, &by_recipient);
    assert_eq!(ids(page.rows.iter().copied()), vec!["A1", "A3", "A2", "A6", "A5", "A4"]);

    let descending = TableQuery {
        direction: SortDirection::Descending,
        ..by_recipient
    };
    let page = query_table(&view, &descending);
    assert_eq!(ids(page.rows.iter().copied()), vec!["A4", "A5", "A2", "A6", "A1", "A3"]);
}

#[test]
fn test_sample_is_distinct_and_bounded() {
    let table = table();
    let view = FilterSelection::for_table(&table).apply(&table);
    let mut rng = StdRng::seed_from_u64(7);

    let five = sample_rows(&view, 5, &mut rng);
    let mut picked = ids(five.iter().copied());
    assert_eq!(picked.len(), 5);
    picked.sort();
    picked.dedup();
    assert_eq!(picked.len(), 5);

    let all = sample_rows(&view, 50, &mut rng);
    assert_eq!(all.len(), 6);

    let empty = FilterSelection::for_table(&table)
        .with_agency("Nobody")
        .apply(&table);
    assert!(sample_rows(&empty, 5, &mut rng).is_empty());
}

#[test]
fn test_seeded_sample_is_repeatable() {
    let table = table();
    let view = FilterSelection::for_table(&table).apply(&table);

    let first = sample_rows(&view, 3, &mut StdRng::seed_from_u64(42));
    let second = sample_rows(&view, 3, &mut StdRng::seed_from_u64(42));
    assert_eq!(ids(first.iter().copied()), ids(second.iter().copied()));
}

#[test]
fn test_snapshot_serializes_for_json_output() {
    let table = table();
    let selection = FilterSelection::for_table(&table).with_size(SizeCategory::Small);
    let snapshot = build_snapshot(&table, &selection, SnapshotOptions::default());

    insta::assert_json_snapshot!(snapshot.metrics, @r###"
    {
      "contract_count": 2,
      "total_award_amount": 125000.0,
      "unique_recipients": 1
    }
    "###);
}
