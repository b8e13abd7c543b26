use chrono::NaiveDate;
use pdga_model::{CellValue, CompanyRecord, DiscRecord, Row};
use pdga_normalization::{
    COMPANY_NAME_SUBSTITUTIONS, MissingValuePolicy, NormalizationOptions, normalize_rows,
    parse_source_date,
};
use proptest::prelude::*;

fn cell_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("N/A".to_string()),
        Just("Active".to_string()),
        Just("inactive".to_string()),
        Just("2019-12-31 08:30:00".to_string()),
        Just("facebook.com/page".to_string()),
        Just(" WWW.Example.com ".to_string()),
        "-?[0-9]{1,3}(\\.[0-9]{1,2})?",
        "[ a-zA-Z./:-]{0,20}",
        prop::sample::select(COMPANY_NAME_SUBSTITUTIONS).prop_map(|(raw, _)| raw.to_string()),
    ]
}

fn disc_row() -> impl Strategy<Value = Row> {
    prop::collection::vec(cell_strategy(), 6).prop_map(|cells| {
        let fields = ["manufacturer", "name", "weight_max", "speed", "approved", "cert"];
        Row::from_pairs(0, fields.into_iter().zip(cells).map(|(f, v)| (f, CellValue::text(v))))
    })
}

fn company_row() -> impl Strategy<Value = Row> {
    prop::collection::vec(cell_strategy(), 4).prop_map(|cells| {
        let fields = ["company_name", "is_active", "website", "city"];
        Row::from_pairs(0, fields.into_iter().zip(cells).map(|(f, v)| (f, CellValue::text(v))))
    })
}

fn policy() -> impl Strategy<Value = NormalizationOptions> {
    (any::<bool>(), any::<bool>()).prop_map(|(zero_fill, route)| {
        let policy = if zero_fill {
            MissingValuePolicy::ZeroFill
        } else {
            MissingValuePolicy::Unknown
        };
        NormalizationOptions::new()
            .with_missing_values(policy)
            .with_social_routing(route)
    })
}

proptest! {
    #[test]
    fn disc_normalization_is_idempotent(row in disc_row(), options in policy()) {
        let once = normalize_rows::<DiscRecord>(vec![row], &options).rows;
        let twice = normalize_rows::<DiscRecord>(once.clone(), &options).rows;
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn company_normalization_is_idempotent(row in company_row(), options in policy()) {
        let once = normalize_rows::<CompanyRecord>(vec![row], &options).rows;
        let twice = normalize_rows::<CompanyRecord>(once.clone(), &options).rows;
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn dates_round_trip(days in 0i64..60_000, seconds in 0u32..86_400) {
        let date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + chrono::Duration::days(days);
        prop_assert_eq!(parse_source_date(&date.format("%Y-%m-%d").to_string()), Some(date));

        let timestamp = date.and_hms_opt(seconds / 3600, (seconds / 60) % 60, seconds % 60).unwrap();
        prop_assert_eq!(
            parse_source_date(&timestamp.format("%Y-%m-%d %H:%M:%S").to_string()),
            Some(date)
        );
    }
}
