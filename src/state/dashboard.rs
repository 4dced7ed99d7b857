//! Admin dashboard aggregates.

use crate::net::api::ApiError;
use crate::net::types::DashboardSummary;

#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub summary: Option<DashboardSummary>,
    pub loading: bool,
    pub error: Option<String>,
}

impl DashboardState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn apply(&mut self, result: Result<DashboardSummary, ApiError>) {
        self.loading = false;
        match result {
            Ok(summary) => {
                self.summary = Some(summary);
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }
}
