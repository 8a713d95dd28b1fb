use super::{line_item::LineItem, rate_table::RateTable};

#[derive(Debug, Clone, PartialEq, Eq, Hash, serde_derive::Serialize, serde_derive::Deserialize)]
pub struct ManifestId(pub String);

/// One saved billing document: an ordered run of priced line items plus the
/// rate table used to price them. `total_amount` and `item_count` are
/// recomputed from the items on every save or load; a stored value is never
/// trusted over the recomputation.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub id: ManifestId,
    /// Uniqueness across the working set is the caller's concern.
    pub manifest_number: String,
    /// Display date, primarily `DD/MM/YYYY`.
    pub manifest_date: String,
    pub items: Vec<LineItem>,
    pub rates: RateTable,
    pub total_amount: f64,
    pub item_count: usize,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    pub folder_id: Option<String>,
}
