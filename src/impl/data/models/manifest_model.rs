use uuid::Uuid;

use crate::entities::{ItemType, LineItem, Manifest, ManifestId, RateTable};

/// Intake shape for one raw line-item record, as found in exported manifest
/// JSON or in the extraction collaborator's output. Every field is optional;
/// defaults are applied exactly once, here, so the strongly-typed entities
/// never see partial records.
#[derive(Debug, Default, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct LineItemModel {
    pub id: Option<String>,
    pub sl_no: Option<u32>,
    pub serial_no: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub item_type: Option<ItemType>,
    pub weight: Option<f64>,
    pub is_manual_rate: Option<bool>,
    pub rate: Option<f64>,
}

impl LineItemModel {
    /// `position` is the record's 0-based position in the import, used for
    /// the default sequence number. Computed fields are left zeroed; the
    /// caller reprices.
    pub(crate) fn into_line_item(self, position: usize) -> LineItem {
        LineItem {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            sequence_number: self.sl_no.unwrap_or(position as u32 + 1),
            reference_code: self.serial_no.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            item_type: self.item_type.unwrap_or_default(),
            weight: self.weight.unwrap_or(0.0),
            is_manual_rate: self.is_manual_rate.unwrap_or(false),
            rate: self.rate.unwrap_or(0.0),
            amount: 0.0,
            breakdown: String::new(),
        }
    }
}

/// Rate table as serialized by the original export (`parcelSlab1Rate`, ...).
/// Missing rates fall back to the shipped defaults.
#[derive(Debug, Clone, Copy, Default, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct RateTableModel {
    pub parcel_slab1_rate: Option<f64>,
    pub parcel_slab2_rate: Option<f64>,
    pub parcel_slab3_rate: Option<f64>,
    pub document_rate: Option<f64>,
}

impl Into<RateTable> for RateTableModel {
    fn into(self) -> RateTable {
        let defaults = RateTable::default();
        RateTable {
            slab1_rate: self.parcel_slab1_rate.unwrap_or(defaults.slab1_rate),
            slab2_rate: self.parcel_slab2_rate.unwrap_or(defaults.slab2_rate),
            slab3_rate: self.parcel_slab3_rate.unwrap_or(defaults.slab3_rate),
            document_rate: self.document_rate.unwrap_or(defaults.document_rate),
        }
    }
}

/// Intake shape for an exported manifest. `rows` is the one required field:
/// a record without an array of items has no billable content and is
/// rejected as a structural error (by serde, before this struct exists).
/// Stored `totalAmount` / `itemCount` are deliberately not modeled; they are
/// recomputed on load.
#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ManifestModel {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub manifest_no: String,
    #[serde(default)]
    pub manifest_date: String,
    pub rows: Vec<LineItemModel>,
    #[serde(default)]
    pub config: Option<RateTableModel>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub folder_id: Option<String>,
}

impl ManifestModel {
    /// `fallback_rates` is used when the import carries no rate table of its
    /// own (e.g. extraction output). Always an explicit parameter; the
    /// engine never reads ambient global configuration.
    pub(crate) fn into_manifest(self, fallback_rates: &RateTable) -> Manifest {
        let rates = self
            .config
            .map(Into::into)
            .unwrap_or_else(|| *fallback_rates);
        let items = self
            .rows
            .into_iter()
            .enumerate()
            .map(|(position, row)| row.into_line_item(position))
            .collect();
        Manifest {
            id: ManifestId(self.id.unwrap_or_else(|| Uuid::new_v4().to_string())),
            manifest_number: self.manifest_no,
            manifest_date: self.manifest_date,
            items,
            rates,
            total_amount: 0.0,
            item_count: 0,
            created_at: self.created_at,
            folder_id: self.folder_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_line_item_fields_are_defaulted() {
        let model: LineItemModel = serde_json::from_str(r#"{"description": "Box"}"#).unwrap();
        let item = model.into_line_item(2);
        assert_eq!(item.sequence_number, 3);
        assert_eq!(item.item_type, ItemType::Parcel);
        assert_eq!(item.weight, 0.0);
        assert!(!item.is_manual_rate);
        assert!(!item.id.is_empty());
    }

    #[test]
    fn manifest_without_config_uses_the_fallback_rates() {
        let model: ManifestModel =
            serde_json::from_str(r#"{"manifestNo": "MF-1", "rows": []}"#).unwrap();
        let fallback = RateTable {
            slab1_rate: 9.0,
            ..RateTable::default()
        };
        let manifest = model.into_manifest(&fallback);
        assert_eq!(manifest.rates.slab1_rate, 9.0);
    }

    #[test]
    fn manifest_without_rows_is_a_structural_error() {
        assert!(serde_json::from_str::<ManifestModel>(r#"{"manifestNo": "MF-1"}"#).is_err());
    }
}
