/// Per-kg rates for the three parcel weight slabs plus the flat per-document
/// rate. A manifest carries the `RateTable` it was priced with; historical
/// charges are always recomputed from that snapshot, never from a "current"
/// global rate, unless the caller explicitly substitutes one.
#[derive(Debug, Clone, Copy, PartialEq, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateTable {
    pub slab1_rate: f64,
    pub slab2_rate: f64,
    pub slab3_rate: f64,
    pub document_rate: f64,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            slab1_rate: 3.0,
            slab2_rate: 2.0,
            slab3_rate: 1.0,
            document_rate: 5.0,
        }
    }
}
