use std::str::FromStr;

use crate::{entities::ItemType, errors::BillingError};

/// Item type cell as it appears in tabular imports ("Parcel" / "Document").
/// An empty cell defaults to Parcel; anything else unrecognized is a
/// structural error, rejected before the record enters the engine.
#[derive(Debug)]
pub(crate) struct ItemTypeModel(pub ItemType);

impl FromStr for ItemTypeModel {
    type Err = BillingError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(ItemTypeModel(ItemType::default()));
        }
        ron::from_str(trimmed)
            .map(ItemTypeModel)
            .map_err(|_| BillingError::InvalidItemType {
                value: trimmed.to_string(),
            })
    }
}

impl Into<ItemType> for ItemTypeModel {
    fn into(self) -> ItemType {
        self.0
    }
}
