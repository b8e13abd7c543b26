use std::io::Write;

use pdga_ingest::{frame_to_rows, read_csv_frame};
use pdga_model::CellValue;
use tempfile::NamedTempFile;

const DISC_EXPORT: &str = "Manufacturer / Distributor,Disc Model,Max Weight (gr),Approved Date\n\
Innova-Champion Discs,Destroyer,175.1,2007-03-01\n\
\"Destiny/Dynamic Discs\",\"Escape, Lucid\",,2013-11-20\n";

#[test]
fn reads_quoted_export_into_rows() {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(DISC_EXPORT.as_bytes()).expect("write csv");

    let df = read_csv_frame(file.path()).expect("read csv");
    assert_eq!(df.width(), 4);

    let rows = frame_to_rows(&df).expect("rows");
    assert_eq!(rows.len(), 2);

    let second = &rows[1];
    assert_eq!(second.index, 1);
    assert_eq!(
        second.get("Disc Model"),
        Some(&CellValue::Text("Escape, Lucid".to_string()))
    );
    assert_eq!(second.get("Max Weight (gr)"), Some(&CellValue::Missing));
    assert_eq!(
        rows[0].get("Manufacturer / Distributor"),
        Some(&CellValue::Text("Innova-Champion Discs".to_string()))
    );
}
