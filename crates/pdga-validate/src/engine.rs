use pdga_model::{RecordSchema, Row, RowFailure, ValidationOutcome};
use tracing::{debug, info};

/// Constructs a record from every row, keeping failed rows alongside their errors.
///
/// A failing row never stops the batch. Rows are moved into the outcome
/// unchanged, so a failure carries exactly the content that was rejected.
pub fn validate_rows<T: RecordSchema>(rows: Vec<Row>) -> ValidationOutcome<T> {
    let mut outcome = ValidationOutcome::default();
    for row in rows {
        match T::construct(&row) {
            Ok(record) => outcome.records.push(record),
            Err(error) => {
                debug!(
                    row = row.index,
                    key = row.label(T::LABEL_FIELDS).as_deref().unwrap_or("-"),
                    %error,
                    "row rejected"
                );
                outcome.failures.push(RowFailure { row, error });
            }
        }
    }
    info!(
        kind = %T::KIND,
        records = outcome.accepted(),
        errors = outcome.rejected(),
        "validation complete"
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdga_model::{CellValue, CompanyRecord};

    #[test]
    fn empty_batch_is_clean() {
        let outcome = validate_rows::<CompanyRecord>(Vec::new());
        assert!(outcome.is_clean());
        assert_eq!(outcome.total(), 0);
    }

    #[test]
    fn keeps_input_order() {
        let rows = ["A", "B", "C"]
            .iter()
            .enumerate()
            .map(|(index, name)| Row::from_pairs(index, [("company_name", CellValue::text(*name))]))
            .collect();
        let outcome = validate_rows::<CompanyRecord>(rows);
        let names: Vec<&str> = outcome
            .records
            .iter()
            .map(|company| company.company_name.as_str())
            .collect();
        assert_eq!(names, ["A", "B", "C"]);
    }
}
