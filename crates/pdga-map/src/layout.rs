//! Provider export layouts.
//!
//! The PDGA exports are not self-describing: canonical names are assigned by
//! position after known extraneous columns are dropped by header.

use pdga_model::RecordKind;

/// Column layout of one provider export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLayout {
    pub kind: RecordKind,
    /// Provider headers removed before positional renaming. Absent ones are ignored.
    pub drop_columns: &'static [&'static str],
    /// Canonical field names in provider column order.
    pub fields: &'static [&'static str],
}

pub const DISC_LAYOUT: SourceLayout = SourceLayout {
    kind: RecordKind::Disc,
    drop_columns: &["Class", "Max Weight Vint (gr)", "Last Year Production"],
    fields: &[
        "manufacturer",
        "name",
        "weight_max",
        "diameter",
        "height",
        "rim_depth",
        "rim_diameter_inside",
        "rim_thickness",
        "rim_ratio",
        "rim_config",
        "flex",
        "cert",
        "approved",
    ],
};

/// Provider order: Company Name, Status, Approved Equipment, Contact, Phone,
/// Address, City, State, Country, ZIP, Website.
pub const COMPANY_LAYOUT: SourceLayout = SourceLayout {
    kind: RecordKind::Company,
    drop_columns: &[],
    fields: &[
        "company_name",
        "is_active",
        "equipment",
        "contact_name",
        "phone",
        "address",
        "city",
        "state",
        "country",
        "postal_code",
        "website",
    ],
};

impl SourceLayout {
    pub fn for_kind(kind: RecordKind) -> &'static SourceLayout {
        match kind {
            RecordKind::Disc => &DISC_LAYOUT,
            RecordKind::Company => &COMPANY_LAYOUT,
        }
    }

    pub fn width(&self) -> usize {
        self.fields.len()
    }

    pub fn drops(&self, header: &str) -> bool {
        let header = normalize_header(header);
        self.drop_columns.iter().any(|drop| *drop == header)
    }
}

/// Trims whitespace and a leading byte-order mark.
pub fn normalize_header(raw: &str) -> &str {
    raw.trim().trim_start_matches('\u{feff}').trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdga_model::{CompanyRecord, DiscRecord, RecordSchema};

    #[test]
    fn layout_fields_exist_in_schema() {
        for field in DISC_LAYOUT.fields {
            assert!(DiscRecord::field(field).is_some(), "{field}");
        }
        for field in COMPANY_LAYOUT.fields {
            assert!(CompanyRecord::field(field).is_some(), "{field}");
        }
    }

    #[test]
    fn drops_match_trimmed_headers() {
        assert!(DISC_LAYOUT.drops(" Class "));
        assert!(DISC_LAYOUT.drops("\u{feff}Class"));
        assert!(!DISC_LAYOUT.drops("Classification"));
        assert!(!COMPANY_LAYOUT.drops("Class"));
    }
}
