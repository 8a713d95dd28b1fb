use std::fs;

use crate::{
    data::models::manifest_model::ManifestModel,
    domain::logic::line_pricer::reprice_manifest,
    entities::{Manifest, RateTable},
    errors::BillingError,
};

/// Deserializes a previously exported manifest. The manifest is repriced
/// against its own stored rate table (or `fallback_rates` when it carries
/// none) on the way in, so stored amounts and totals are never trusted.
pub(crate) trait ManifestJsonDatasource {
    fn from_string(&self, s: &str, fallback_rates: &RateTable) -> Result<Manifest, BillingError>;

    fn from_file<P>(&self, path: P, fallback_rates: &RateTable) -> Result<Manifest, BillingError>
    where
        P: AsRef<std::path::Path>;
}

pub(crate) struct ManifestJsonDatasourceImpl;

impl ManifestJsonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl ManifestJsonDatasource for ManifestJsonDatasourceImpl {
    fn from_string(&self, s: &str, fallback_rates: &RateTable) -> Result<Manifest, BillingError> {
        let model: ManifestModel = serde_json::from_str(s)?;
        Ok(reprice_manifest(model.into_manifest(fallback_rates)))
    }

    fn from_file<P>(&self, path: P, fallback_rates: &RateTable) -> Result<Manifest, BillingError>
    where
        P: AsRef<std::path::Path>,
    {
        let contents = fs::read_to_string(&path).map_err(|e| BillingError::Read {
            path: path.as_ref().display().to_string(),
            source: e,
        })?;
        self.from_string(&contents, fallback_rates)
    }
}
