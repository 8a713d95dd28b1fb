use async_trait::async_trait;
use futures::future::try_join_all;

use crate::{
    data::datasources::{
        line_items_csv_datasource::{LineItemsCsvDatasource, LineItemsCsvDatasourceImpl},
        manifest_json_datasource::{ManifestJsonDatasource, ManifestJsonDatasourceImpl},
    },
    domain::repositories::manifests_repository::ManifestsRepository,
    entities::{LineItem, Manifest, RateTable},
    errors::BillingError,
};

pub(crate) struct ManifestsRepositoryImpl<
    DS1 = ManifestJsonDatasourceImpl, // Default.
    DS2 = LineItemsCsvDatasourceImpl, // Default.
> where
    DS1: ManifestJsonDatasource,
    DS2: LineItemsCsvDatasource,
{
    manifest_json_datasource: DS1,
    line_items_csv_datasource: DS2,
}

#[async_trait]
impl<DS1, DS2> ManifestsRepository for ManifestsRepositoryImpl<DS1, DS2>
where
    DS1: ManifestJsonDatasource + Send + Sync,
    DS2: LineItemsCsvDatasource + Send + Sync,
{
    fn manifests_from_strings(
        &self,
        manifest_jsons: &[String],
        fallback_rates: &RateTable,
    ) -> Result<Vec<Manifest>, BillingError> {
        manifest_jsons
            .iter()
            .map(|json| self.manifest_json_datasource.from_string(json, fallback_rates))
            .collect()
    }

    async fn manifests_from_files<P>(
        &self,
        paths: &[P],
        fallback_rates: &RateTable,
    ) -> Result<Vec<Manifest>, BillingError>
    where
        P: AsRef<std::path::Path> + Send + Sync,
    {
        let contents = try_join_all(paths.iter().map(|path| async move {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|e| BillingError::Read {
                    path: path.as_ref().display().to_string(),
                    source: e,
                })
        }))
        .await?;
        contents
            .iter()
            .map(|json| self.manifest_json_datasource.from_string(json, fallback_rates))
            .collect()
    }

    fn line_items_from_csv_string(&self, csv: &str) -> Result<Vec<LineItem>, BillingError> {
        self.line_items_csv_datasource.from_string(csv)
    }
}

impl ManifestsRepositoryImpl {
    pub(crate) fn new() -> Self {
        ManifestsRepositoryImpl {
            manifest_json_datasource: ManifestJsonDatasourceImpl::new(),
            line_items_csv_datasource: LineItemsCsvDatasourceImpl::new(),
        }
    }
}
