// Database records and filtering.
// Parses the CSV text and applies case-insensitive substring criteria.

use csv::ReaderBuilder;

use crate::error::{Result, SearchError};

/// Columns the search criteria and `--print` selector may reference.
/// The database carries other columns too; they round-trip untouched.
pub const SEARCH_FIELDS: [&str; 4] = ["TITLE", "STORE", "CODENAME", "UMU_ID"];

/// One database row, fields in header order.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// Value of the named field, if the row has it.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    /// All fields in header order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

/// Substring queries, one per searchable column.
/// Absent or empty queries impose no constraint.
#[derive(Debug, Clone, Default)]
pub struct Criteria {
    pub title: Option<String>,
    pub store: Option<String>,
    pub codename: Option<String>,
    pub umu_id: Option<String>,
}

impl Criteria {
    fn queries(&self) -> [(&'static str, Option<&str>); 4] {
        [
            ("TITLE", self.title.as_deref()),
            ("STORE", self.store.as_deref()),
            ("CODENAME", self.codename.as_deref()),
            ("UMU_ID", self.umu_id.as_deref()),
        ]
    }

    /// Whether the record satisfies every non-empty query.
    /// Fails when a queried column is missing from the record.
    fn matches(&self, record: &Record) -> Result<bool> {
        for (field, query) in self.queries() {
            let Some(query) = query else { continue };
            if query.is_empty() {
                continue;
            }

            let value = record
                .get(field)
                .ok_or_else(|| SearchError::MissingField(field.to_string()))?;
            if !value.to_lowercase().contains(&query.to_lowercase()) {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Parse the CSV text and return the rows matching `criteria`, in input order.
///
/// Rows whose arity differs from the header are fatal for the whole call, as
/// is a query against a column the header does not carry.
pub fn filter(text: &str, criteria: &Criteria) -> Result<Vec<Record>> {
    let mut reader = ReaderBuilder::new().from_reader(text.as_bytes());
    let header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut matches = Vec::new();
    for row in reader.records() {
        let row = row?;
        let record = Record {
            fields: header
                .iter()
                .cloned()
                .zip(row.iter().map(str::to_string))
                .collect(),
        };
        if criteria.matches(&record)? {
            matches.push(record);
        }
    }

    Ok(matches)
}

/// Case-insensitively resolve `input` against the canonical field names,
/// returning the canonically-cased name.
pub fn normalize_field<'a>(input: &str, valid_fields: &[&'a str]) -> Option<&'a str> {
    valid_fields
        .iter()
        .find(|name| name.eq_ignore_ascii_case(input))
        .copied()
}
