use crate::entities::RateTable;

/// Upper bound of the first slab. Also the light/heavy classification
/// threshold: a heavy parcel (rounded weight above this) always consumes its
/// full first-slab allowance, which the consolidated statement builder relies
/// on when re-deriving tier-1 weight from aggregates. Keep the two coupled.
pub const TIER1_CAP_KG: f64 = 10.0;
/// Upper bound of the second slab.
pub const TIER2_CAP_KG: f64 = 100.0;

/// Decomposition of one parcel's billable weight across the three slabs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlabSplit {
    pub tier1_weight: f64,
    pub tier2_weight: f64,
    pub tier3_weight: f64,
    pub amount: f64,
}

/// Prices one parcel under the three-tier slab model.
///
/// The weight is rounded up to the next whole kilogram before any slab logic
/// runs. Expects a non-negative, finite weight; rejecting anything else is
/// the caller's responsibility (see the line item calculator).
pub fn price_parcel(weight: f64, rates: &RateTable) -> SlabSplit {
    let billable = weight.ceil();
    let tier1_weight = billable.min(TIER1_CAP_KG);
    let tier2_weight = (billable - TIER1_CAP_KG)
        .max(0.0)
        .min(TIER2_CAP_KG - TIER1_CAP_KG);
    let tier3_weight = (billable - TIER2_CAP_KG).max(0.0);
    SlabSplit {
        tier1_weight,
        tier2_weight,
        tier3_weight,
        amount: tier1_weight * rates.slab1_rate
            + tier2_weight * rates.slab2_rate
            + tier3_weight * rates.slab3_rate,
    }
}
