use std::collections::HashMap;

use chrono::NaiveDate;

use crate::{
    domain::logic::{
        slab::{price_parcel, TIER1_CAP_KG},
        summarizer::summarize,
        utils::{parse_heavy_detail, parse_statement_date},
    },
    entities::{
        ConsolidatedOverride, ConsolidatedStatement, ConsolidatedStatementLine, Manifest,
        ManifestId, StatementTotals,
    },
};

/// Merges many manifests plus a sparse override map into one consolidated
/// statement. Manifests absent from the map resolve purely from their
/// computed summaries; each override field falls back independently. The
/// underlying manifests are never mutated.
pub fn build_statement(
    manifests: &[Manifest],
    overrides: &HashMap<ManifestId, ConsolidatedOverride>,
) -> ConsolidatedStatement {
    let mut lines: Vec<ConsolidatedStatementLine> = manifests
        .iter()
        .map(|manifest| resolve_line(manifest, overrides.get(&manifest.id)))
        .collect();

    // Resolved date ascending; unparseable dates last. Stable, so ties keep
    // input order.
    lines.sort_by_key(|line| parse_statement_date(&line.date).unwrap_or(NaiveDate::MAX));

    let totals = fold_totals(&lines);
    ConsolidatedStatement { lines, totals }
}

fn resolve_line(
    manifest: &Manifest,
    overrides: Option<&ConsolidatedOverride>,
) -> ConsolidatedStatementLine {
    let computed = summarize(&manifest.items, &manifest.rates);
    let none = ConsolidatedOverride::default();
    let overrides = overrides.unwrap_or(&none);
    let rates = &manifest.rates;

    let date = overrides
        .date
        .clone()
        .unwrap_or_else(|| manifest.manifest_date.clone());
    let manifest_number = overrides
        .manifest_number
        .clone()
        .unwrap_or_else(|| manifest.manifest_number.clone());
    let light_count = overrides.light_count.unwrap_or(computed.light_parcel_count);
    let document_count = overrides
        .document_count
        .unwrap_or(computed.document_count);
    let light_weight = overrides
        .light_weight
        .unwrap_or(computed.light_parcel_weight);

    let heavy_weights = match &overrides.heavy_detail {
        Some(detail) => parse_heavy_detail(detail),
        None => computed.heavy_weights.clone(),
    };
    // An explicit count wins; otherwise an overridden detail list implies its
    // own count. The user can edit either without the two silently
    // disagreeing unless they choose to.
    let heavy_count = overrides.heavy_count.unwrap_or(if overrides.heavy_detail.is_some() {
        heavy_weights.len() as u32
    } else {
        computed.heavy_parcel_count
    });

    let heavy_total: f64 = heavy_weights.iter().sum();

    // Every heavy parcel has, by the >10kg classification, already consumed
    // its full first slab, so tier 1 needs no per-parcel re-derivation.
    let tier1_weight = light_weight + heavy_count as f64 * TIER1_CAP_KG;

    // Tiers 2 and 3 depend on each parcel's own weight; re-run each resolved
    // heavy weight through the slab calculator and sum.
    let mut tier2_weight = 0.0;
    let mut tier3_weight = 0.0;
    let mut tier2_total = 0.0;
    let mut tier3_total = 0.0;
    for weight in &heavy_weights {
        let split = price_parcel(*weight, rates);
        tier2_weight += split.tier2_weight;
        tier3_weight += split.tier3_weight;
        tier2_total += split.tier2_weight * rates.slab2_rate;
        tier3_total += split.tier3_weight * rates.slab3_rate;
    }

    let tier1_total = tier1_weight * rates.slab1_rate;
    let document_total = document_count as f64 * rates.document_rate;
    let line_total = tier1_total + tier2_total + tier3_total + document_total;

    ConsolidatedStatementLine {
        manifest_id: manifest.id.clone(),
        date,
        manifest_number,
        light_count,
        heavy_count,
        document_count,
        light_weight,
        heavy_total,
        total_weight: light_weight + heavy_total,
        heavy_weights,
        tier1_weight,
        tier2_weight,
        tier3_weight,
        tier1_total,
        tier2_total,
        tier3_total,
        document_total,
        line_total,
    }
}

/// Grand totals as an independent fold over the resolved lines, so tests can
/// cross-check them against the per-line values.
fn fold_totals(lines: &[ConsolidatedStatementLine]) -> StatementTotals {
    let mut totals = lines.iter().fold(StatementTotals::default(), |mut acc, line| {
        acc.light_count += line.light_count;
        acc.heavy_count += line.heavy_count;
        acc.document_count += line.document_count;
        acc.light_weight += line.light_weight;
        acc.heavy_total += line.heavy_total;
        acc.tier1_weight += line.tier1_weight;
        acc.tier2_weight += line.tier2_weight;
        acc.tier3_weight += line.tier3_weight;
        acc.tier1_total += line.tier1_total;
        acc.tier2_total += line.tier2_total;
        acc.tier3_total += line.tier3_total;
        acc.document_total += line.document_total;
        acc.grand_total += line.line_total;
        acc
    });
    // Light weight may have been overridden, so the grand total weight is
    // re-derived from the resolved components rather than summed separately.
    totals.total_weight = totals.light_weight + totals.heavy_total;
    totals
}
