use std::collections::HashMap;

use crate::entities::{ConsolidatedStatement, ConsolidatedStatementLine, ReportMeta};

use super::utils::{format_amount, replace_placeholders};

const HEADER_TEMPLATE: &str = "\
CONSOLIDATED BILLING STATEMENT
Month: {{Month}} | Agency: {{Agency}} | Area: {{Area}}
";

/// Renders a consolidated statement as a plain-text report. Structured data
/// export (CSV, spreadsheets, paginated documents) belongs to downstream
/// collaborators; this is the crate's own display form.
pub(crate) struct StatementPrinter;

impl StatementPrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn print_statement(
        &self,
        statement: &ConsolidatedStatement,
        meta: &ReportMeta,
    ) -> String {
        let mut output = String::new();

        let placeholders = HashMap::from([
            ("Month".to_string(), meta.month.clone()),
            ("Agency".to_string(), meta.agency.clone()),
            ("Area".to_string(), meta.area.clone()),
        ]);
        output.push_str(&replace_placeholders(HEADER_TEMPLATE, &placeholders));
        output.push('\n');

        output.push_str(
            "--- Manifests ----------------------------------------------------------------\n\n",
        );
        for line in &statement.lines {
            self.print_line(&mut output, line);
        }

        output.push_str(
            "--- Totals -------------------------------------------------------------------\n\n",
        );
        let totals = &statement.totals;
        output.push_str(&format!(
            "p: {}  P: {}  D: {}\n",
            totals.light_count, totals.heavy_count, totals.document_count
        ));
        output.push_str(&format!(
            "Weight: {}kg light + {}kg heavy = {}kg\n",
            totals.light_weight, totals.heavy_total, totals.total_weight
        ));
        output.push_str(&format!(
            "S1: {}  S2: {}  S3: {}  Doc: {}\n",
            format_amount(totals.tier1_total),
            format_amount(totals.tier2_total),
            format_amount(totals.tier3_total),
            format_amount(totals.document_total),
        ));
        output.push_str(&format!(
            "Grand total: {}\n",
            format_amount(totals.grand_total)
        ));

        output
    }

    fn print_line(&self, output: &mut String, line: &ConsolidatedStatementLine) {
        output.push_str(&format!("{} {}\n", line.date, line.manifest_number));
        output.push_str(&format!(
            "    p: {}  P: {}  D: {}\n",
            line.light_count, line.heavy_count, line.document_count
        ));
        output.push_str(&format!(
            "    Weight: {}kg light + {}kg heavy = {}kg\n",
            line.light_weight, line.heavy_total, line.total_weight
        ));
        if !line.heavy_weights.is_empty() {
            let detail = line
                .heavy_weights
                .iter()
                .map(|w| w.to_string())
                .collect::<Vec<_>>()
                .join("+");
            for wrapped in textwrap::wrap(&format!("P detail: {}", detail), 74) {
                output.push_str(&format!("    {}\n", wrapped));
            }
        }

        let mut slabs = Vec::new();
        if line.tier1_weight > 0.0 {
            slabs.push(format!(
                "S1: {}kg = {}",
                line.tier1_weight,
                format_amount(line.tier1_total)
            ));
        }
        if line.tier2_weight > 0.0 {
            slabs.push(format!(
                "S2: {}kg = {}",
                line.tier2_weight,
                format_amount(line.tier2_total)
            ));
        }
        if line.tier3_weight > 0.0 {
            slabs.push(format!(
                "S3: {}kg = {}",
                line.tier3_weight,
                format_amount(line.tier3_total)
            ));
        }
        if line.document_count > 0 {
            slabs.push(format!(
                "Doc: {} = {}",
                line.document_count,
                format_amount(line.document_total)
            ));
        }
        if !slabs.is_empty() {
            for wrapped in textwrap::wrap(&slabs.join("  "), 74) {
                output.push_str(&format!("    {}\n", wrapped));
            }
        }
        output.push_str(&format!(
            "    {:>8} {}\n",
            "Total:",
            format_amount(line.line_total)
        ));
        output.push('\n');
    }
}
