use uuid::Uuid;

use crate::{
    domain::logic::slab::price_parcel,
    entities::{ItemType, LineItem, Manifest, RateTable},
};

/// Weights coming from interactive editing or document extraction can be
/// negative or non-finite. Pricing substitutes zero so the computation always
/// produces a renderable, internally consistent result. Deliberate leniency
/// policy, not a silent bug: the editor must stay usable on partial input.
fn sanitize_weight(weight: f64) -> f64 {
    if weight.is_finite() && weight >= 0.0 {
        weight
    } else {
        0.0
    }
}

/// Derives `rate`, `amount` and `breakdown` for one line item. All other
/// fields pass through unchanged. Toggling `is_manual_rate` re-runs this in
/// full, so no value from the previous pricing mode survives.
pub fn price_line_item(item: LineItem, rates: &RateTable) -> LineItem {
    match item.item_type {
        ItemType::Document => LineItem {
            rate: rates.document_rate,
            amount: rates.document_rate,
            breakdown: format!("Doc: 1 * {} = {}", rates.document_rate, rates.document_rate),
            ..item
        },
        ItemType::Parcel if item.is_manual_rate => LineItem {
            amount: item.rate,
            breakdown: format!("Manual rate: {}", item.rate),
            ..item
        },
        ItemType::Parcel => {
            let weight = sanitize_weight(item.weight);
            let billable = weight.ceil();
            let split = price_parcel(weight, rates);

            let mut parts = Vec::new();
            if split.tier1_weight > 0.0 {
                parts.push(format!(
                    "S1: {}kg * {} = {}",
                    split.tier1_weight,
                    rates.slab1_rate,
                    split.tier1_weight * rates.slab1_rate
                ));
            }
            if split.tier2_weight > 0.0 {
                parts.push(format!(
                    "S2: {}kg * {} = {}",
                    split.tier2_weight,
                    rates.slab2_rate,
                    split.tier2_weight * rates.slab2_rate
                ));
            }
            if split.tier3_weight > 0.0 {
                parts.push(format!(
                    "S3: {}kg * {} = {}",
                    split.tier3_weight,
                    rates.slab3_rate,
                    split.tier3_weight * rates.slab3_rate
                ));
            }
            let mut breakdown = if parts.is_empty() {
                format!("S1: 0kg * {} = 0", rates.slab1_rate)
            } else {
                parts.join(" + ")
            };
            if billable != weight {
                breakdown.push_str(&format!(" ({}kg rounded to {}kg)", weight, billable));
            }

            LineItem {
                weight,
                rate: split.amount / billable.max(1.0),
                amount: split.amount,
                breakdown,
                ..item
            }
        }
    }
}

/// Reprices every item against the manifest's own rate table and recomputes
/// `total_amount` / `item_count`. Run on save and on load of an exported
/// manifest; stored computed values are never trusted.
pub fn reprice_manifest(mut manifest: Manifest) -> Manifest {
    let rates = manifest.rates;
    manifest.items = manifest
        .items
        .into_iter()
        .map(|item| price_line_item(item, &rates))
        .collect();
    manifest.total_amount = manifest.items.iter().map(|item| item.amount).sum();
    manifest.item_count = manifest.items.len();
    manifest
}

/// Restores a dense 1-based display order after a deletion.
pub fn resequence_items(items: Vec<LineItem>) -> Vec<LineItem> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| LineItem {
            sequence_number: index as u32 + 1,
            ..item
        })
        .collect()
}

/// A blank parcel row, to be priced immediately by the caller.
pub fn blank_line_item(sequence_number: u32) -> LineItem {
    LineItem {
        id: Uuid::new_v4().to_string(),
        sequence_number,
        reference_code: String::new(),
        description: String::new(),
        item_type: ItemType::Parcel,
        weight: 0.0,
        is_manual_rate: false,
        rate: 0.0,
        amount: 0.0,
        breakdown: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rates() -> RateTable {
        RateTable::default()
    }

    fn parcel(weight: f64) -> LineItem {
        LineItem {
            weight,
            ..blank_line_item(1)
        }
    }

    #[test]
    fn document_gets_the_flat_rate() {
        let item = LineItem {
            item_type: ItemType::Document,
            weight: 42.0,
            ..blank_line_item(1)
        };
        let priced = price_line_item(item, &rates());
        assert_eq!(priced.amount, 5.0);
        assert_eq!(priced.rate, 5.0);
        assert!(priced.breakdown.starts_with("Doc:"));
    }

    #[test]
    fn parcel_is_slab_priced() {
        let priced = price_line_item(parcel(55.0), &rates());
        assert_eq!(priced.amount, 120.0);
        assert_eq!(priced.breakdown, "S1: 10kg * 3 = 30 + S2: 45kg * 2 = 90");
    }

    #[test]
    fn rounding_is_traced_in_the_breakdown() {
        let priced = price_line_item(parcel(6.2), &rates());
        assert_eq!(priced.amount, 21.0);
        assert!(priced.breakdown.contains("6.2kg rounded to 7kg"));
    }

    #[test]
    fn manual_rate_bypasses_slabs() {
        let item = LineItem {
            is_manual_rate: true,
            rate: 99.5,
            weight: 55.0,
            ..blank_line_item(1)
        };
        let priced = price_line_item(item, &rates());
        assert_eq!(priced.amount, 99.5);
        assert!(priced.breakdown.starts_with("Manual rate"));
    }

    #[test]
    fn toggling_manual_rate_recomputes_fully() {
        let manual = LineItem {
            is_manual_rate: true,
            rate: 99.5,
            weight: 55.0,
            ..blank_line_item(1)
        };
        let priced_manual = price_line_item(manual, &rates());
        let back_to_auto = LineItem {
            is_manual_rate: false,
            ..priced_manual
        };
        let repriced = price_line_item(back_to_auto, &rates());
        assert_eq!(repriced.amount, 120.0);
        assert_eq!(repriced.breakdown, "S1: 10kg * 3 = 30 + S2: 45kg * 2 = 90");
    }

    #[test]
    fn repricing_is_idempotent() {
        let once = price_line_item(parcel(55.0), &rates());
        let twice = price_line_item(once.clone(), &rates());
        assert_eq!(once, twice);
    }

    #[test]
    fn bad_weights_price_as_zero() {
        for weight in [-3.0, f64::NAN, f64::INFINITY] {
            let priced = price_line_item(parcel(weight), &rates());
            assert_eq!(priced.amount, 0.0, "weight {weight}");
            assert_eq!(priced.weight, 0.0);
        }
    }

    #[test]
    fn resequencing_is_dense_and_one_based() {
        let items = vec![
            LineItem { sequence_number: 1, ..blank_line_item(1) },
            LineItem { sequence_number: 3, ..blank_line_item(3) },
            LineItem { sequence_number: 4, ..blank_line_item(4) },
        ];
        let resequenced = resequence_items(items);
        let numbers: Vec<u32> = resequenced.iter().map(|i| i.sequence_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }
}
