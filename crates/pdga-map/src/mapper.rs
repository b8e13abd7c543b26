use polars::prelude::*;
use tracing::{debug, info};

use crate::error::{MapError, Result};
use crate::layout::SourceLayout;

/// Renames the provider columns of `df` to canonical field names.
///
/// Extraneous columns named in the layout are dropped first; the remaining
/// columns are renamed strictly by position. A width mismatch fails the whole
/// batch rather than producing shifted columns.
pub fn map_columns(df: &DataFrame, layout: &SourceLayout) -> Result<DataFrame> {
    let mut kept: Vec<&Column> = Vec::with_capacity(df.width());
    for column in df.get_columns() {
        if layout.drops(column.name().as_str()) {
            debug!(column = %column.name(), "dropping extraneous column");
        } else {
            kept.push(column);
        }
    }

    if kept.len() != layout.width() {
        return Err(MapError::SchemaLayoutMismatch {
            layout: layout.kind,
            expected: layout.width(),
            found: kept.len(),
            columns: kept
                .iter()
                .map(|column| column.name().to_string())
                .collect(),
        });
    }

    let renamed: Vec<Column> = kept
        .into_iter()
        .zip(layout.fields)
        .map(|(column, field)| column.clone().with_name((*field).into()))
        .collect();

    let mapped = DataFrame::new(renamed)?;
    info!(
        layout = %layout.kind,
        rows = mapped.height(),
        columns = mapped.width(),
        dropped = df.width() - mapped.width(),
        "mapped export columns"
    );
    Ok(mapped)
}
