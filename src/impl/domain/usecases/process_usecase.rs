use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    data::repositories::manifests_repository_impl::ManifestsRepositoryImpl,
    domain::{
        logic::{line_pricer::reprice_manifest, statement_builder::build_statement},
        repositories::manifests_repository::ManifestsRepository,
    },
    entities::{
        ConsolidatedOverride, ConsolidatedStatement, Manifest, ManifestId, RateTable,
    },
    errors::BillingError,
};

#[async_trait]
pub trait ProcessUsecase: Send + Sync {
    /// Loads exported-manifest JSON strings, reprices them, and builds the
    /// consolidated statement. `fallback_rates` applies to any manifest that
    /// carries no rate table of its own.
    async fn statement_from_strings(
        &self,
        manifest_jsons: &[String],
        fallback_rates: &RateTable,
        overrides: &HashMap<ManifestId, ConsolidatedOverride>,
    ) -> Result<(Vec<Manifest>, ConsolidatedStatement), BillingError>;

    async fn statement_from_files<P>(
        &self,
        paths: &[P],
        fallback_rates: &RateTable,
        overrides: &HashMap<ManifestId, ConsolidatedOverride>,
    ) -> Result<(Vec<Manifest>, ConsolidatedStatement), BillingError>
    where
        P: AsRef<std::path::Path> + Send + Sync;

    /// Assembles and prices a new manifest from tabular line-item input.
    fn manifest_from_csv_string(
        &self,
        csv: &str,
        manifest_number: &str,
        manifest_date: &str,
        rates: &RateTable,
    ) -> Result<Manifest, BillingError>;
}

pub(crate) struct ProcessUsecaseImpl<
    R1 = ManifestsRepositoryImpl, // Default.
> where
    R1: ManifestsRepository,
{
    manifests_repository: R1,
}

#[async_trait]
impl<R1> ProcessUsecase for ProcessUsecaseImpl<R1>
where
    R1: ManifestsRepository,
{
    async fn statement_from_strings(
        &self,
        manifest_jsons: &[String],
        fallback_rates: &RateTable,
        overrides: &HashMap<ManifestId, ConsolidatedOverride>,
    ) -> Result<(Vec<Manifest>, ConsolidatedStatement), BillingError> {
        let manifests = self
            .manifests_repository
            .manifests_from_strings(manifest_jsons, fallback_rates)?;
        let statement = build_statement(&manifests, overrides);
        Ok((manifests, statement))
    }

    async fn statement_from_files<P>(
        &self,
        paths: &[P],
        fallback_rates: &RateTable,
        overrides: &HashMap<ManifestId, ConsolidatedOverride>,
    ) -> Result<(Vec<Manifest>, ConsolidatedStatement), BillingError>
    where
        P: AsRef<std::path::Path> + Send + Sync,
    {
        let manifests = self
            .manifests_repository
            .manifests_from_files(paths, fallback_rates)
            .await?;
        let statement = build_statement(&manifests, overrides);
        Ok((manifests, statement))
    }

    fn manifest_from_csv_string(
        &self,
        csv: &str,
        manifest_number: &str,
        manifest_date: &str,
        rates: &RateTable,
    ) -> Result<Manifest, BillingError> {
        let items = self.manifests_repository.line_items_from_csv_string(csv)?;
        Ok(reprice_manifest(Manifest {
            id: ManifestId(Uuid::new_v4().to_string()),
            manifest_number: manifest_number.to_string(),
            manifest_date: manifest_date.to_string(),
            items,
            rates: *rates,
            total_amount: 0.0,
            item_count: 0,
            created_at: chrono::Utc::now().timestamp_millis(),
            folder_id: None,
        }))
    }
}

impl ProcessUsecaseImpl {
    pub(crate) fn new() -> Self {
        ProcessUsecaseImpl {
            manifests_repository: ManifestsRepositoryImpl::new(),
        }
    }
}
