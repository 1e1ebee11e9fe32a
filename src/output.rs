// Result presentation.
// Renders match listings, or a single field value for scripted callers.

use std::io::{self, Write};

use crate::database::Record;

/// Print `records` to `out`, honoring the optional single-field selector.
///
/// The selector only isolates a field when exactly one record matched;
/// plural matches warn and fall through to the full listing.
pub fn present(
    out: &mut impl Write,
    records: &[Record],
    print_field: Option<&str>,
) -> io::Result<()> {
    if records.is_empty() {
        return writeln!(out, "No matches found.");
    }

    match print_field {
        Some(field) if records.len() == 1 => {
            writeln!(out, "{}", records[0].get(field).unwrap_or("Field not found"))
        }
        Some(field) => {
            writeln!(
                out,
                "Found {} matches. Cannot print '{}' as multiple results were found.",
                records.len(),
                field
            )?;
            writeln!(out, "Displaying all results instead:")?;
            writeln!(out)?;
            list_records(out, records)
        }
        None => {
            writeln!(out, "Found {} match(es):", records.len())?;
            writeln!(out)?;
            list_records(out, records)
        }
    }
}

fn list_records(out: &mut impl Write, records: &[Record]) -> io::Result<()> {
    for (i, record) in records.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, record.get("TITLE").unwrap_or_default())?;
        for (name, value) in record.fields() {
            writeln!(out, "   {}: {}", name, value)?;
        }
        writeln!(out, "{}", "-".repeat(40))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{Criteria, filter};

    const SAMPLE: &str = "\
TITLE,STORE,CODENAME,UMU_ID
Age of Wonders 4,gog,blobfish,umu-397540
Chess Ultra,egs,rook,umu-100001";

    fn rendered(records: &[Record], print_field: Option<&str>) -> String {
        let mut out = Vec::new();
        present(&mut out, records, print_field).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_no_matches_message() {
        assert_eq!(rendered(&[], None), "No matches found.\n");
        assert_eq!(rendered(&[], Some("UMU_ID")), "No matches found.\n");
    }

    #[test]
    fn test_single_match_prints_field_value_only() {
        let criteria = Criteria {
            store: Some("gog".to_string()),
            ..Default::default()
        };
        let records = filter(SAMPLE, &criteria).unwrap();

        assert_eq!(rendered(&records, Some("UMU_ID")), "umu-397540\n");
    }

    #[test]
    fn test_single_match_with_unknown_field() {
        let criteria = Criteria {
            store: Some("gog".to_string()),
            ..Default::default()
        };
        let records = filter(SAMPLE, &criteria).unwrap();

        assert_eq!(rendered(&records, Some("PUBLISHER")), "Field not found\n");
    }

    #[test]
    fn test_plural_matches_warn_and_list() {
        let records = filter(SAMPLE, &Criteria::default()).unwrap();
        let output = rendered(&records, Some("UMU_ID"));

        assert!(output.starts_with(
            "Found 2 matches. Cannot print 'UMU_ID' as multiple results were found.\n"
        ));
        assert!(output.contains("Displaying all results instead:"));
        assert!(output.contains("1. Age of Wonders 4"));
        assert!(output.contains("2. Chess Ultra"));
    }

    #[test]
    fn test_listing_shows_every_field() {
        let records = filter(SAMPLE, &Criteria::default()).unwrap();
        let output = rendered(&records, None);

        assert!(output.starts_with("Found 2 match(es):\n\n"));
        assert!(output.contains("1. Age of Wonders 4"));
        assert!(output.contains("   TITLE: Age of Wonders 4"));
        assert!(output.contains("   STORE: gog"));
        assert!(output.contains("   CODENAME: blobfish"));
        assert!(output.contains("   UMU_ID: umu-397540"));
        assert!(output.contains(&"-".repeat(40)));
    }
}
