//! Business listing rows extracted from the search API

/// Value written to the phone column when the listing carries no phone number
pub const PHONE_FALLBACK: &str = "N/A";

/// Spreadsheet column headers, in output order
pub const COLUMNS: [&str; 5] = ["name", "address", "phone", "latitude", "longitude"];

/// One business listing, normalized for export
///
/// Only `phone` is always present; every other field is `None` when the
/// upstream item lacked it or carried an unusable value.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Default for ResultRow {
    fn default() -> Self {
        Self {
            name: None,
            address: None,
            phone: PHONE_FALLBACK.to_string(),
            latitude: None,
            longitude: None,
        }
    }
}

impl ResultRow {
    /// True when the row carries no phone number of its own
    pub fn has_fallback_phone(&self) -> bool {
        self.phone == PHONE_FALLBACK
    }
}

/// Ordered listings, in the order the API returned them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    rows: Vec<ResultRow>,
}

impl ResultSet {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResultRow> {
        self.rows.iter()
    }
}

impl From<Vec<ResultRow>> for ResultSet {
    fn from(rows: Vec<ResultRow>) -> Self {
        Self { rows }
    }
}

impl FromIterator<ResultRow> for ResultSet {
    fn from_iter<I: IntoIterator<Item = ResultRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
