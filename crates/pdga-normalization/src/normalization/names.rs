//! Company name canonicalization.

/// Known provider spellings and their canonical form. Matching is exact.
pub const COMPANY_NAME_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("Destiny/Dynamic Discs", "Destiny-Dynamic Discs"),
    ("RPM Discs/Disc Golf Aotearoa", "RPM Discs-Disc Golf Aotearoa"),
    ("Innova-Champion Discs", "Innova Champion Discs"),
    ("Westside Golf Discs", "Westside Discs"),
];

/// Returns the canonical spelling when `name` is a known variant.
pub fn canonical_company_name(name: &str) -> Option<&'static str> {
    COMPANY_NAME_SUBSTITUTIONS
        .iter()
        .find(|(variant, _)| *variant == name)
        .map(|(_, canonical)| *canonical)
}
