#[derive(Debug, Clone, Copy, PartialEq, Eq, serde_derive::Serialize, serde_derive::Deserialize)]
pub enum ItemType {
    Parcel,
    Document,
}

impl Default for ItemType {
    fn default() -> Self {
        ItemType::Parcel
    }
}

/// One billable entity on a manifest.
///
/// The computed fields (`rate`, `amount`, `breakdown`) are a pure function of
/// `(item_type, weight, is_manual_rate, rate-if-manual, RateTable)` and are
/// re-derived in full on every edit; they never carry stale values from a
/// previous pricing mode.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: String,
    /// 1-based display order, dense; re-sequenced on deletion.
    pub sequence_number: u32,
    /// Serial / AWB number.
    pub reference_code: String,
    pub description: String,
    pub item_type: ItemType,
    /// Raw weight in kg; meaningful only for parcels. Billing rounds it up
    /// to the next whole kilogram.
    pub weight: f64,
    /// When set, pricing uses `rate` verbatim and bypasses slab computation.
    pub is_manual_rate: bool,
    pub rate: f64,
    pub amount: f64,
    /// Human-readable trace of how `amount` was derived.
    pub breakdown: String,
}
