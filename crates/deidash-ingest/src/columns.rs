use csv::StringRecord;
use deidash_types::{LoadError, LoadResult, ThemeSchema};

pub const REQUIRED_COLUMNS: [&str; 8] = [
    "award_id",
    "recipient_name",
    "awarding_agency_name",
    "award_amount",
    "action_date",
    "contract_start_date",
    "contract_end_date",
    "award_description",
];

/// Columns that are derived when absent
pub const OPTIONAL_COLUMNS: [&str; 2] = ["contract_duration_days", "award_size_category"];

/// Header positions of every column the normalizer reads.
#[derive(Debug)]
pub(crate) struct ColumnLayout {
    pub award_id: usize,
    pub recipient_name: usize,
    pub awarding_agency_name: usize,
    pub award_amount: usize,
    pub action_date: usize,
    pub contract_start_date: usize,
    pub contract_end_date: usize,
    pub award_description: usize,
    pub contract_duration_days: Option<usize>,
    pub award_size_category: Option<usize>,
    /// Header position of each schema theme, in schema order
    pub themes: Vec<usize>,
    pub schema: ThemeSchema,
}

impl ColumnLayout {
    pub fn resolve(headers: &StringRecord) -> LoadResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &str| find(name).ok_or_else(|| LoadError::MissingColumn(name.to_string()));

        let schema = ThemeSchema::from_headers(headers.iter())?;
        let themes = schema
            .fields()
            .iter()
            .map(|field| require(&field.column))
            .collect::<LoadResult<Vec<_>>>()?;

        Ok(Self {
            award_id: require(REQUIRED_COLUMNS[0])?,
            recipient_name: require(REQUIRED_COLUMNS[1])?,
            awarding_agency_name: require(REQUIRED_COLUMNS[2])?,
            award_amount: require(REQUIRED_COLUMNS[3])?,
            action_date: require(REQUIRED_COLUMNS[4])?,
            contract_start_date: require(REQUIRED_COLUMNS[5])?,
            contract_end_date: require(REQUIRED_COLUMNS[6])?,
            award_description: require(REQUIRED_COLUMNS[7])?,
            contract_duration_days: find(OPTIONAL_COLUMNS[0]),
            award_size_category: find(OPTIONAL_COLUMNS[1]),
            themes,
            schema,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> StringRecord {
        StringRecord::from(names.to_vec())
    }

    #[test]
    fn test_resolve_is_order_independent() {
        let mut names: Vec<&str> = REQUIRED_COLUMNS.iter().rev().copied().collect();
        names.push("theme_gender");
        let layout = ColumnLayout::resolve(&headers(&names)).unwrap();

        assert_eq!(layout.award_id, 7);
        assert_eq!(layout.award_description, 0);
        assert_eq!(layout.themes, vec![8]);
        assert_eq!(layout.contract_duration_days, None);
    }

    #[test]
    fn test_missing_required_column() {
        let names: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|c| *c != "award_amount")
            .collect();

        match ColumnLayout::resolve(&headers(&names)) {
            Err(LoadError::MissingColumn(column)) => assert_eq!(column, "award_amount"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_optional_columns_are_picked_up() {
        let mut names = REQUIRED_COLUMNS.to_vec();
        names.extend(OPTIONAL_COLUMNS);
        let layout = ColumnLayout::resolve(&headers(&names)).unwrap();

        assert_eq!(layout.contract_duration_days, Some(8));
        assert_eq!(layout.award_size_category, Some(9));
        assert!(layout.schema.is_empty());
    }
}
