use std::collections::HashMap;

use courier_manifest_billing::{
    entities::{ConsolidatedOverride, ManifestId, RateTable, ReportMeta},
    util::CourierBillingUtil,
};

const MANIFEST_A: &str = r#"{
    "id": "m-a",
    "manifestNo": "MF-101",
    "manifestDate": "15/03/2024",
    "rows": [
        {"slNo": 1, "serialNo": "AWB-1", "description": "Spares", "type": "Parcel", "weight": 8.0},
        {"slNo": 2, "serialNo": "AWB-2", "description": "Machinery", "type": "Parcel", "weight": 55.0},
        {"slNo": 3, "serialNo": "AWB-3", "description": "Contract", "type": "Document"}
    ],
    "config": {"parcelSlab1Rate": 3, "parcelSlab2Rate": 2, "parcelSlab3Rate": 1, "documentRate": 5},
    "totalAmount": 0,
    "itemCount": 3
}"#;

// No id, no config: gets a generated id and the caller's fallback rates.
const MANIFEST_B: &str = r#"{
    "manifestNo": "MF-102",
    "manifestDate": "01/03/2024",
    "rows": [
        {"serialNo": "AWB-9", "type": "Parcel", "weight": 120.0}
    ]
}"#;

#[tokio::test]
async fn statement_over_two_manifests_without_overrides() {
    let util = CourierBillingUtil::new();
    let (manifests, statement, report) = util
        .statement_from_strings(
            &[MANIFEST_A.to_string(), MANIFEST_B.to_string()],
            &RateTable::default(),
            &HashMap::new(),
            &ReportMeta::default(),
        )
        .await
        .unwrap();

    assert_eq!(manifests.len(), 2);
    // Manifest A repriced from its own rates: 8*3 + (10*3 + 45*2) + 5.
    let a = manifests.iter().find(|m| m.id.0 == "m-a").unwrap();
    assert_eq!(a.total_amount, 149.0);

    // Ordered by date: MF-102 (01/03) before MF-101 (15/03).
    assert_eq!(statement.lines[0].manifest_number, "MF-102");
    assert_eq!(statement.lines[1].manifest_number, "MF-101");

    // Manifest B from fallback rates: 10*3 + 90*2 + 20*1 = 230.
    assert_eq!(statement.lines[0].line_total, 230.0);
    assert_eq!(statement.lines[1].line_total, 149.0);
    assert_eq!(statement.totals.grand_total, 379.0);

    assert!(report.contains("MF-101"));
    assert!(report.contains("Grand total:"));
}

#[tokio::test]
async fn overrides_apply_per_field_without_touching_manifests() {
    let util = CourierBillingUtil::new();
    let overrides = HashMap::from([(
        ManifestId("m-a".to_string()),
        ConsolidatedOverride {
            heavy_detail: Some("20+30".to_string()),
            ..Default::default()
        },
    )]);
    let (manifests, statement, _) = util
        .statement_from_strings(
            &[MANIFEST_A.to_string()],
            &RateTable::default(),
            &overrides,
            &ReportMeta::default(),
        )
        .await
        .unwrap();

    let line = &statement.lines[0];
    assert_eq!(line.heavy_count, 2);
    assert_eq!(line.heavy_weights, vec![20.0, 30.0]);
    // tier1 = light 8 + 2*10; tier2 from 20 and 30 individually.
    assert_eq!(line.tier1_weight, 28.0);
    assert_eq!(line.tier2_weight, 30.0);
    assert_eq!(line.line_total, 28.0 * 3.0 + 30.0 * 2.0 + 5.0);

    // The stored manifest is untouched by the consolidated view.
    assert_eq!(manifests[0].total_amount, 149.0);
}

#[tokio::test]
async fn csv_import_builds_a_priced_manifest() {
    let util = CourierBillingUtil::new();
    let csv = "Sl.No,Serial/AWB,Description,Type,Weight(kg)\n\
               1,AWB-1,Spares,Parcel,7\n\
               2,AWB-2,Contract,Document,\n";
    let manifest = util
        .manifest_from_csv_string(csv, "MF-201", "02/03/2024", &RateTable::default())
        .unwrap();

    assert_eq!(manifest.item_count, 2);
    assert_eq!(manifest.items[0].amount, 21.0);
    assert_eq!(manifest.items[1].amount, 5.0);
    assert_eq!(manifest.total_amount, 26.0);
    assert!(!manifest.items[0].breakdown.is_empty());
}

#[tokio::test]
async fn statement_builds_from_manifest_files() {
    let dir = std::env::temp_dir().join("courier-manifest-billing-test");
    tokio::fs::create_dir_all(&dir).await.unwrap();
    let path_a = dir.join("manifest_a.json");
    let path_b = dir.join("manifest_b.json");
    tokio::fs::write(&path_a, MANIFEST_A).await.unwrap();
    tokio::fs::write(&path_b, MANIFEST_B).await.unwrap();

    let util = CourierBillingUtil::new();
    let (manifests, statement, _) = util
        .statement_from_files(
            &[path_a, path_b],
            &RateTable::default(),
            &HashMap::new(),
            &ReportMeta::default(),
        )
        .await
        .unwrap();

    assert_eq!(manifests.len(), 2);
    assert_eq!(statement.totals.grand_total, 379.0);
}

#[tokio::test]
async fn structurally_invalid_manifest_is_rejected() {
    let util = CourierBillingUtil::new();
    let result = util
        .statement_from_strings(
            &[r#"{"manifestNo": "MF-1"}"#.to_string()],
            &RateTable::default(),
            &HashMap::new(),
            &ReportMeta::default(),
        )
        .await;
    assert!(result.is_err());
}
