use std::collections::HashMap;

use crate::{
    domain::usecases::process_usecase::{ProcessUsecase as _, ProcessUsecaseImpl},
    entities::{
        ConsolidatedOverride, ConsolidatedStatement, Manifest, ManifestId, RateTable, ReportMeta,
    },
    errors::BillingError,
    presentation::statement_printer::StatementPrinter,
};

/// Rendered plain-text form of a consolidated statement.
pub type Report = String;

/// Facade over the billing engine: loads exported manifests, reprices them,
/// builds the consolidated statement, and renders the report.
pub struct CourierBillingUtil {
    process_usecase: ProcessUsecaseImpl,
    printer: StatementPrinter,
}

impl CourierBillingUtil {
    pub fn new() -> Self {
        Self {
            process_usecase: ProcessUsecaseImpl::new(),
            printer: StatementPrinter::new(),
        }
    }

    pub async fn statement_from_strings(
        &self,
        manifest_jsons: &[String],
        fallback_rates: &RateTable,
        overrides: &HashMap<ManifestId, ConsolidatedOverride>,
        report_meta: &ReportMeta,
    ) -> Result<(Vec<Manifest>, ConsolidatedStatement, Report), BillingError> {
        let (manifests, statement) = self
            .process_usecase
            .statement_from_strings(manifest_jsons, fallback_rates, overrides)
            .await?;
        let report = self.printer.print_statement(&statement, report_meta);
        Ok((manifests, statement, report))
    }

    pub async fn statement_from_files<P>(
        &self,
        paths: &[P],
        fallback_rates: &RateTable,
        overrides: &HashMap<ManifestId, ConsolidatedOverride>,
        report_meta: &ReportMeta,
    ) -> Result<(Vec<Manifest>, ConsolidatedStatement, Report), BillingError>
    where
        P: AsRef<std::path::Path> + Send + Sync,
    {
        let (manifests, statement) = self
            .process_usecase
            .statement_from_files(paths, fallback_rates, overrides)
            .await?;
        let report = self.printer.print_statement(&statement, report_meta);
        Ok((manifests, statement, report))
    }

    /// Builds and prices a new manifest from tabular line-item input
    /// (columns as the manifest CSV export).
    pub fn manifest_from_csv_string(
        &self,
        csv: &str,
        manifest_number: &str,
        manifest_date: &str,
        rates: &RateTable,
    ) -> Result<Manifest, BillingError> {
        self.process_usecase
            .manifest_from_csv_string(csv, manifest_number, manifest_date, rates)
    }
}

impl Default for CourierBillingUtil {
    fn default() -> Self {
        Self::new()
    }
}
