/// Aggregate view of one manifest's priced line items, partitioned into
/// documents, light parcels (rounded weight <= 10kg) and heavy parcels
/// (rounded weight > 10kg). Derived on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Default, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestSummary {
    pub document_count: u32,
    pub document_total: f64,

    pub parcel_count: u32,
    pub light_parcel_count: u32,
    pub heavy_parcel_count: u32,
    /// Sum of rounded weights of light parcels.
    pub light_parcel_weight: f64,
    /// Rounded weight of each heavy parcel, in manifest order (not sorted).
    pub heavy_weights: Vec<f64>,
    pub heavy_parcel_weight: f64,
    /// Sum of `ceil(weight)` over all parcels.
    pub total_billable_weight: f64,

    pub tier1_weight: f64,
    pub tier2_weight: f64,
    pub tier3_weight: f64,
    pub tier1_total: f64,
    pub tier2_total: f64,
    pub tier3_total: f64,

    /// Tier sub-totals plus document total. Equals the sum of the items'
    /// `amount` fields for a correctly priced manifest.
    pub total_amount: f64,
}
