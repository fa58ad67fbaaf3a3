//! Dashboard DTOs

use domain_fees::category::Program;
use domain_fees::DashboardFilter;
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub program: Option<String>,
    pub batch: Option<String>,
    pub search: Option<String>,
}

impl DashboardQuery {
    pub fn into_filter(self) -> Result<DashboardFilter, ApiError> {
        let program = self
            .program
            .map(|p| p.parse::<Program>())
            .transpose()
            .map_err(ApiError::from)?;
        Ok(DashboardFilter {
            program,
            academic_batch: self.batch,
            search: self.search,
        })
    }
}
