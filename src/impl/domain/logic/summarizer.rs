use crate::{
    domain::logic::slab::{price_parcel, TIER1_CAP_KG},
    entities::{ItemType, LineItem, ManifestSummary, RateTable},
};

/// Reduces a manifest's priced line items into per-tier and light/heavy
/// aggregates, in a single pass. Parcels are re-run through the slab
/// calculator (rather than trusting their stored amounts), so the summary is
/// consistent with the pricing path by construction.
pub fn summarize(items: &[LineItem], rates: &RateTable) -> ManifestSummary {
    let mut summary = ManifestSummary::default();

    for item in items {
        match item.item_type {
            ItemType::Document => {
                summary.document_count += 1;
                summary.document_total += item.amount;
            }
            ItemType::Parcel => {
                summary.parcel_count += 1;
                let rounded = item.weight.ceil();
                summary.total_billable_weight += rounded;
                if rounded > TIER1_CAP_KG {
                    summary.heavy_parcel_count += 1;
                    summary.heavy_weights.push(rounded);
                    summary.heavy_parcel_weight += rounded;
                } else {
                    summary.light_parcel_count += 1;
                    summary.light_parcel_weight += rounded;
                }
                let split = price_parcel(item.weight, rates);
                summary.tier1_weight += split.tier1_weight;
                summary.tier2_weight += split.tier2_weight;
                summary.tier3_weight += split.tier3_weight;
                summary.tier1_total += split.tier1_weight * rates.slab1_rate;
                summary.tier2_total += split.tier2_weight * rates.slab2_rate;
                summary.tier3_total += split.tier3_weight * rates.slab3_rate;
            }
        }
    }

    summary.total_amount =
        summary.tier1_total + summary.tier2_total + summary.tier3_total + summary.document_total;
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::logic::line_pricer::{blank_line_item, price_line_item};

    fn rates() -> RateTable {
        RateTable::default()
    }

    fn priced_parcel(weight: f64) -> LineItem {
        price_line_item(
            LineItem {
                weight,
                ..blank_line_item(1)
            },
            &rates(),
        )
    }

    fn priced_document() -> LineItem {
        price_line_item(
            LineItem {
                item_type: ItemType::Document,
                ..blank_line_item(1)
            },
            &rates(),
        )
    }

    #[test]
    fn light_and_heavy_parcels_partition_by_rounded_weight() {
        let items = vec![priced_parcel(8.0), priced_parcel(9.5), priced_parcel(55.0)];
        let summary = summarize(&items, &rates());
        // 9.5 rounds to 10, still light.
        assert_eq!(summary.light_parcel_count, 2);
        assert_eq!(summary.heavy_parcel_count, 1);
        assert_eq!(summary.light_parcel_weight, 18.0);
        assert_eq!(summary.heavy_weights, vec![55.0]);
    }

    #[test]
    fn tier_weights_and_total_for_mixed_manifest() {
        let items = vec![priced_parcel(8.0), priced_parcel(55.0)];
        let summary = summarize(&items, &rates());
        assert_eq!(summary.tier1_weight, 18.0);
        assert_eq!(summary.tier2_weight, 45.0);
        assert_eq!(summary.tier3_weight, 0.0);
        assert_eq!(summary.total_amount, 144.0);
    }

    #[test]
    fn summary_total_equals_sum_of_item_amounts() {
        let items = vec![
            priced_parcel(8.0),
            priced_parcel(55.0),
            priced_parcel(120.0),
            priced_document(),
            priced_document(),
        ];
        let summary = summarize(&items, &rates());
        let item_sum: f64 = items.iter().map(|item| item.amount).sum();
        assert_eq!(summary.total_amount, item_sum);
    }

    #[test]
    fn heavy_weights_keep_manifest_order() {
        let items = vec![priced_parcel(55.0), priced_parcel(12.0), priced_parcel(30.0)];
        let summary = summarize(&items, &rates());
        assert_eq!(summary.heavy_weights, vec![55.0, 12.0, 30.0]);
    }

    #[test]
    fn empty_manifest_summarizes_to_zero() {
        let summary = summarize(&[], &rates());
        assert_eq!(summary, ManifestSummary::default());
    }
}
