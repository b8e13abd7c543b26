//! End-to-end tests for the pipeline module.

use std::fs;

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use tempfile::TempDir;

use pdga_cli::pipeline::{process_csv, run_pipeline};
use pdga_model::{CompanyRecord, DiscRecord, SocialPlatform};
use pdga_normalization::{MissingValuePolicy, NormalizationOptions};

fn test_df(columns: Vec<(&str, Vec<&str>)>) -> DataFrame {
    let cols: Vec<Column> = columns
        .into_iter()
        .map(|(name, values)| {
            Series::new(
                name.into(),
                values.iter().copied().map(String::from).collect::<Vec<_>>(),
            )
            .into_column()
        })
        .collect();
    DataFrame::new(cols).unwrap()
}

fn company_df(names: Vec<&str>, statuses: Vec<&str>, websites: Vec<&str>) -> DataFrame {
    let filler = vec![""; names.len()];
    test_df(vec![
        ("Company Name", names),
        ("Status", statuses),
        ("Approved Equipment", filler.clone()),
        ("Contact", filler.clone()),
        ("Phone", filler.clone()),
        ("Address", filler.clone()),
        ("City", filler.clone()),
        ("State", filler.clone()),
        ("Country", filler.clone()),
        ("ZIP", filler),
        ("Website", websites),
    ])
}

#[test]
fn companies_run_end_to_end() {
    let df = company_df(
        vec!["Innova-Champion Discs", "", "Westside Golf Discs"],
        vec!["Active", "Active", "Pending"],
        vec![" WWW.Innovadiscs.com ", "example.com", "facebook.com/westside"],
    );
    let result =
        run_pipeline::<CompanyRecord>(&df, &NormalizationOptions::default(), None).unwrap();
    let outcome = result.outcome;

    assert_eq!(outcome.accepted(), 1);
    let innova = &outcome.records[0];
    assert_eq!(innova.company_name, "Innova Champion Discs");
    assert!(innova.is_active);
    assert_eq!(
        innova.website.as_ref().map(|url| url.host_str().unwrap_or_default()),
        Some("www.innovadiscs.com")
    );

    // Row 1 lacks a name; row 2 has an unrecognized status.
    assert_eq!(outcome.rejected(), 2);
    assert!(outcome.failures[0].error.mentions("company_name"));
    assert!(outcome.failures[1].error.mentions("is_active"));
    assert_eq!(result.report.names_substituted, 2);
    assert_eq!(result.report.social_websites, 1);
}

#[test]
fn social_website_is_flagged_on_the_record() {
    let df = company_df(vec!["Westside Discs"], vec!["inactive"], vec!["facebook.com/westside"]);
    let result =
        run_pipeline::<CompanyRecord>(&df, &NormalizationOptions::default(), None).unwrap();
    let company = &result.outcome.records[0];
    assert!(!company.is_active);
    assert_eq!(company.website_platform, Some(SocialPlatform::Facebook));
}

#[test]
fn layout_mismatch_is_fatal() {
    let df = test_df(vec![("Company Name", vec!["A"]), ("Website", vec!["a.com"])]);
    let error =
        run_pipeline::<CompanyRecord>(&df, &NormalizationOptions::default(), None).unwrap_err();
    assert!(format!("{error:#}").contains("layout mismatch"));
}

const DISC_HEADER: &str = "Manufacturer / Distributor,Disc Model,Max Weight (gr),Diameter (cm),\
Height (cm),Rim Depth (cm),Inside Rim Diameter (cm),Rim Thickness (cm),Rim Depth / Diameter Ratio (%),\
Rim Configuration,Flexibility (kg),Class,Max Weight Vint (gr),Last Year Production,Certification Number,Approved Date";

#[test]
fn disc_csv_runs_end_to_end() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("discs.csv");
    let body = format!(
        "{DISC_HEADER}\n\
         Innova-Champion Discs,Destroyer,175.1,21.1,1.4,1.2,17.3,2.2,5.7,40.5,7.03,Super Class,,,1234-A,2007-03-01\n\
         Discraft,Buzzz,180.2,21.7,2.0,1.5,18.6,1.5,6.9,,8.2,Super Class,,,,2003-01-15 00:00:00\n\
         Gateway,Wizard,N/A,21.1,2.0,1.6,17.9,1.6,7.6,,,Super Class,,,,2001-08-20\n"
    );
    fs::write(&path, body).unwrap();

    let result = process_csv::<DiscRecord>(&path, &NormalizationOptions::default(), None).unwrap();
    let outcome = result.outcome;
    assert_eq!(outcome.accepted(), 2);
    assert_eq!(outcome.records[0].manufacturer, "Innova Champion Discs");
    assert_eq!(outcome.records[0].cert.as_deref(), Some("1234-A"));
    assert_eq!(outcome.records[1].rim_config, Some(0.0));
    assert_eq!(outcome.records[1].approved.to_string(), "2003-01-15");

    assert_eq!(outcome.rejected(), 1);
    let failure = &outcome.failures[0];
    assert_eq!(failure.row.index, 2);
    assert!(failure.error.mentions("weight_max"));

    let unknown = NormalizationOptions::new().with_missing_values(MissingValuePolicy::Unknown);
    let result = process_csv::<DiscRecord>(&path, &unknown, None).unwrap();
    assert_eq!(result.outcome.records[1].rim_config, None);
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let error = process_csv::<DiscRecord>(
        &dir.path().join("absent.csv"),
        &NormalizationOptions::default(),
        None,
    )
    .unwrap_err();
    assert!(format!("{error:#}").contains("absent.csv"));
}
