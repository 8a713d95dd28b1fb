use super::manifest::ManifestId;

/// Sparse, per-manifest corrections applied when building a consolidated
/// statement. Each field independently falls back to the computed
/// `ManifestSummary` value when absent. Overrides never mutate the
/// underlying manifest; they exist only in the consolidated view.
#[derive(Debug, Clone, PartialEq, Default, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsolidatedOverride {
    pub date: Option<String>,
    pub manifest_number: Option<String>,
    pub light_count: Option<u32>,
    pub heavy_count: Option<u32>,
    pub document_count: Option<u32>,
    pub light_weight: Option<f64>,
    /// Heavy parcel weights as entered, e.g. `"15+20+30"`.
    pub heavy_detail: Option<String>,
}

/// One manifest's contribution to a consolidated statement, after override
/// resolution and tier re-derivation.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidatedStatementLine {
    pub manifest_id: ManifestId,
    pub date: String,
    pub manifest_number: String,

    pub light_count: u32,
    pub heavy_count: u32,
    pub document_count: u32,

    pub light_weight: f64,
    pub heavy_weights: Vec<f64>,
    pub heavy_total: f64,
    pub total_weight: f64,

    pub tier1_weight: f64,
    pub tier2_weight: f64,
    pub tier3_weight: f64,
    pub tier1_total: f64,
    pub tier2_total: f64,
    pub tier3_total: f64,
    pub document_total: f64,
    pub line_total: f64,
}

/// Field-wise grand totals over all statement lines.
#[derive(Debug, Clone, PartialEq, Default, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementTotals {
    pub light_count: u32,
    pub heavy_count: u32,
    pub document_count: u32,
    pub light_weight: f64,
    pub heavy_total: f64,
    pub total_weight: f64,
    pub tier1_weight: f64,
    pub tier2_weight: f64,
    pub tier3_weight: f64,
    pub tier1_total: f64,
    pub tier2_total: f64,
    pub tier3_total: f64,
    pub document_total: f64,
    pub grand_total: f64,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct ConsolidatedStatement {
    /// Ordered by resolved date ascending; ties keep input order.
    pub lines: Vec<ConsolidatedStatementLine>,
    pub totals: StatementTotals,
}

/// Header fields for the rendered statement report.
#[derive(Debug, Clone, Default, serde_derive::Serialize, serde_derive::Deserialize)]
pub struct ReportMeta {
    pub month: String,
    pub agency: String,
    pub area: String,
}
