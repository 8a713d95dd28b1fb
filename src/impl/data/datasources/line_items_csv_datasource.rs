use std::{fs, str::FromStr as _};

use uuid::Uuid;

use crate::{
    data::models::{
        billable_weight_model::BillableWeightModel, item_type_model::ItemTypeModel,
    },
    entities::LineItem,
    errors::BillingError,
};

/// Parses tabular line-item imports. Column order matches the manifest
/// export: Sl.No, Serial/AWB, Description, Type, Weight(kg); any trailing
/// computed columns (breakdown, amount) are ignored and recomputed.
pub(crate) trait LineItemsCsvDatasource {
    fn from_string(&self, s: &str) -> Result<Vec<LineItem>, BillingError>;

    fn from_file<P>(&self, path: P) -> Result<Vec<LineItem>, BillingError>
    where
        P: AsRef<std::path::Path>;
}

pub(crate) struct LineItemsCsvDatasourceImpl;

impl LineItemsCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl LineItemsCsvDatasource for LineItemsCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<LineItem>, BillingError> {
        csv::Reader::from_reader(s.as_bytes())
            .records()
            .enumerate()
            .map(|(i, r)| {
                r.map_err(BillingError::from).and_then(|r| {
                    // Extract from CSV record.
                    let raw_sl_no = r.get(0).unwrap_or("");
                    let raw_serial = r.get(1).unwrap_or("");
                    let raw_description = r.get(2).unwrap_or("");
                    let raw_type = r.get(3).unwrap_or("");
                    let raw_weight = r.get(4).unwrap_or("");

                    // Parse.
                    let sequence_number = raw_sl_no.trim().parse::<u32>().unwrap_or(i as u32 + 1);
                    let item_type: ItemTypeModel = ItemTypeModel::from_str(raw_type)?;
                    let weight: BillableWeightModel = BillableWeightModel::from_str(raw_weight)?;

                    // Build (unpriced; the caller reprices).
                    Ok(LineItem {
                        id: Uuid::new_v4().to_string(),
                        sequence_number,
                        reference_code: raw_serial.to_string(),
                        description: raw_description.to_string(),
                        item_type: item_type.into(),
                        weight: weight.into(),
                        is_manual_rate: false,
                        rate: 0.0,
                        amount: 0.0,
                        breakdown: String::new(),
                    })
                })
            })
            .collect()
    }

    fn from_file<P>(&self, path: P) -> Result<Vec<LineItem>, BillingError>
    where
        P: AsRef<std::path::Path>,
    {
        let contents = fs::read_to_string(&path).map_err(|e| BillingError::Read {
            path: path.as_ref().display().to_string(),
            source: e,
        })?;
        self.from_string(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ItemType;

    #[test]
    fn parses_exported_columns() {
        let csv = "Sl.No,Serial/AWB,Description,Type,Weight(kg)\n\
                   1,AWB-1001,Spare parts,Parcel,6.2\n\
                   2,AWB-1002,Contract,Document,\n";
        let items = LineItemsCsvDatasourceImpl::new().from_string(csv).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].reference_code, "AWB-1001");
        assert_eq!(items[0].weight, 6.2);
        assert_eq!(items[1].item_type, ItemType::Document);
        assert_eq!(items[1].weight, 0.0);
    }

    #[test]
    fn missing_sl_no_defaults_to_position() {
        let csv = "Sl.No,Serial/AWB,Description,Type,Weight(kg)\n,AWB-1,Box,Parcel,3\n";
        let items = LineItemsCsvDatasourceImpl::new().from_string(csv).unwrap();
        assert_eq!(items[0].sequence_number, 1);
    }

    #[test]
    fn bad_type_cell_is_rejected() {
        let csv = "Sl.No,Serial/AWB,Description,Type,Weight(kg)\n1,AWB-1,Box,Crate,3\n";
        assert!(LineItemsCsvDatasourceImpl::new().from_string(csv).is_err());
    }
}
