use serde::{Deserialize, Serialize};

use crate::core::{ArrangementRecord, AxisDomain};
use crate::error::{AxisError, AxisResult};

use super::{AxisEngine, AxisEngineConfig};

pub const ARRANGEMENT_CATALOG_JSON_SCHEMA_V1: u32 = 1;

/// Declarative arrangement catalog, finest band first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArrangementCatalog {
    pub arrangements: Vec<ArrangementRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrangementCatalogJsonContractV1 {
    pub schema_version: u32,
    pub arrangements: Vec<ArrangementRecord>,
}

impl ArrangementCatalog {
    #[must_use]
    pub fn new(arrangements: Vec<ArrangementRecord>) -> Self {
        Self { arrangements }
    }

    pub fn to_json_contract_v1_pretty(&self) -> AxisResult<String> {
        let payload = ArrangementCatalogJsonContractV1 {
            schema_version: ARRANGEMENT_CATALOG_JSON_SCHEMA_V1,
            arrangements: self.arrangements.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            AxisError::InvalidData(format!("failed to serialize catalog contract v1: {e}"))
        })
    }

    /// Accepts either a bare array of records or a versioned contract.
    pub fn from_json_compat_str(input: &str) -> AxisResult<Self> {
        if let Ok(catalog) = serde_json::from_str::<ArrangementCatalog>(input) {
            return Ok(catalog);
        }
        let payload: ArrangementCatalogJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            AxisError::InvalidData(format!("failed to parse catalog json payload: {e}"))
        })?;
        if payload.schema_version != ARRANGEMENT_CATALOG_JSON_SCHEMA_V1 {
            return Err(AxisError::InvalidData(format!(
                "unsupported catalog schema version: {}",
                payload.schema_version
            )));
        }
        Ok(Self::new(payload.arrangements))
    }
}

impl<D: AxisDomain> AxisEngine<D> {
    /// Creates an engine from a JSON catalog (bare or versioned).
    pub fn from_catalog_json(
        domain: D,
        config: AxisEngineConfig,
        input: &str,
    ) -> AxisResult<Self> {
        let catalog = ArrangementCatalog::from_json_compat_str(input)?;
        Self::with_arrangement_records(domain, config, &catalog.arrangements)
    }

    pub fn arrangement_catalog_json_contract_v1_pretty(&self) -> AxisResult<String> {
        ArrangementCatalog::new(self.arrangements.to_records()).to_json_contract_v1_pretty()
    }
}
