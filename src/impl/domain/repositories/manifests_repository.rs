use async_trait::async_trait;

use crate::{
    entities::{LineItem, Manifest, RateTable},
    errors::BillingError,
};

/// Boundary through which manifests and raw line items enter the engine.
/// Structural validation happens behind this trait; the pricing logic only
/// ever sees fully-formed entities.
#[async_trait]
pub(crate) trait ManifestsRepository: Send + Sync {
    fn manifests_from_strings(
        &self,
        manifest_jsons: &[String],
        fallback_rates: &RateTable,
    ) -> Result<Vec<Manifest>, BillingError>;

    async fn manifests_from_files<P>(
        &self,
        paths: &[P],
        fallback_rates: &RateTable,
    ) -> Result<Vec<Manifest>, BillingError>
    where
        P: AsRef<std::path::Path> + Send + Sync;

    fn line_items_from_csv_string(&self, csv: &str) -> Result<Vec<LineItem>, BillingError>;
}
