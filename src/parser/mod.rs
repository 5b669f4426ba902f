pub mod fields;
pub mod rows;
pub mod title;

use tracing::debug;

use crate::model::{GameRecord, Listing};
use rows::RowScanner;

/// Title → rows → records for one saved listing page.
pub fn extract_listing(doc: &str) -> Listing {
    let title = title::extract_title(doc);
    let mut records = Vec::new();

    for row in RowScanner::new(doc, title.cursor) {
        match GameRecord::from_values(&row.id, &row.title, &row.values) {
            Some(record) => records.push(record),
            None => debug!(
                id = %row.id,
                values = row.values.len(),
                "skipping row with too few data-sort values"
            ),
        }
    }

    debug!(listing = %title.name, records = records.len(), "extracted listing");
    Listing {
        name: title.name,
        records,
    }
}
