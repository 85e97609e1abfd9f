//! Contract CSV fixtures.
//!
//! Rows carry only the fields tests tend to vary; the rest get fixed
//! defaults so a fixture stays readable.

const BASE_COLUMNS: [&str; 8] = [
    "award_id",
    "recipient_name",
    "awarding_agency_name",
    "award_amount",
    "action_date",
    "contract_start_date",
    "contract_end_date",
    "award_description",
];

/// One contract row.
#[derive(Debug, Clone)]
pub struct ContractRow {
    pub award_id: String,
    pub recipient: String,
    pub agency: String,
    pub amount: String,
    pub action_date: String,
    pub description: String,
    /// Theme columns set to `true`; all others are `false`
    pub themes: Vec<String>,
}

impl ContractRow {
    pub fn new(award_id: &str, agency: &str, amount: &str, action_date: &str) -> Self {
        Self {
            award_id: award_id.to_string(),
            recipient: format!("Recipient {}", award_id),
            agency: agency.to_string(),
            amount: amount.to_string(),
            action_date: action_date.to_string(),
            description: format!("Award {}", award_id),
            themes: Vec::new(),
        }
    }

    pub fn recipient(mut self, recipient: &str) -> Self {
        self.recipient = recipient.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn theme(mut self, column: &str) -> Self {
        self.themes.push(column.to_string());
        self
    }
}

/// Builder for a dataset file in the layout the loader expects.
///
/// # Example
/// ```
/// use deidash_testing::{ContractRow, CsvFixture};
///
/// let csv = CsvFixture::new(&["theme_gender"])
///     .row(ContractRow::new("A1", "National Science Foundation", "5000", "2024-01-05").theme("theme_gender"))
///     .to_csv();
/// assert!(csv.starts_with("award_id,"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CsvFixture {
    theme_columns: Vec<String>,
    rows: Vec<ContractRow>,
}

impl CsvFixture {
    pub fn new(theme_columns: &[&str]) -> Self {
        Self {
            theme_columns: theme_columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn row(mut self, row: ContractRow) -> Self {
        self.rows.push(row);
        self
    }

    /// Six contracts over four agencies, two themes and three size buckets
    pub fn standard() -> Self {
        Self::new(&["theme_gender", "theme_race_equity"])
            .row(
                ContractRow::new("A1", "National Science Foundation", "5000", "2024-01-05")
                    .recipient("Acme Research")
                    .theme("theme_gender"),
            )
            .row(
                ContractRow::new("A2", "Department of Education", "120000", "2024-01-20")
                    .recipient("Bright Schools")
                    .theme("theme_race_equity"),
            )
            .row(
                ContractRow::new("A3", "Department of Justice (DOJ)", "2500000", "2024-02-11")
                    .recipient("Civic Partners")
                    .theme("theme_gender")
                    .theme("theme_race_equity"),
            )
            .row(
                ContractRow::new("A4", "Environmental Protection Agency", "$45,000", "2024-03-02")
                    .recipient("Acme Research"),
            )
            .row(
                ContractRow::new("A5", "Department of Education", "20000000", "2024-03-15")
                    .recipient("Delta Learning")
                    .theme("theme_gender"),
            )
            .row(
                ContractRow::new("A6", "National Science Foundation", "5000", "2024-03-28")
                    .recipient("Echo Labs")
                    .theme("theme_race_equity"),
            )
    }

    pub fn to_csv(&self) -> String {
        let mut header: Vec<String> = BASE_COLUMNS.iter().map(|c| c.to_string()).collect();
        header.extend(self.theme_columns.iter().cloned());

        let mut out = header.join(",");
        out.push('\n');

        for row in &self.rows {
            let mut fields = vec![
                quote(&row.award_id),
                quote(&row.recipient),
                quote(&row.agency),
                quote(&row.amount),
                quote(&row.action_date),
                "2024-01-01".to_string(),
                "2024-12-31".to_string(),
                quote(&row.description),
            ];
            fields.extend(
                self.theme_columns
                    .iter()
                    .map(|column| row.themes.contains(column).to_string()),
            );
            out.push_str(&fields.join(","));
            out.push('\n');
        }

        out
    }
}

fn quote(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
