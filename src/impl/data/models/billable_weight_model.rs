use std::str::FromStr;

use crate::errors::BillingError;

/// Weight cell from tabular imports. An empty cell defaults to zero (the
/// extraction collaborator omits weights for documents); non-numeric text is
/// a structural error. Negative or non-finite values are let through here
/// and sanitized by the line item calculator's leniency policy.
#[derive(Debug)]
pub(crate) struct BillableWeightModel(pub f64);

impl FromStr for BillableWeightModel {
    type Err = BillingError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(BillableWeightModel(0.0));
        }
        trimmed
            .parse::<f64>()
            .map(BillableWeightModel)
            .map_err(|_| BillingError::InvalidWeight {
                value: trimmed.to_string(),
            })
    }
}

impl Into<f64> for BillableWeightModel {
    fn into(self) -> f64 {
        self.0
    }
}
