use crate::wire::HealthRes;

/// Simple health service used by the REST API
///
/// Produces a standardised liveness report. The caller supplies the number of records the
/// store currently exposes so the report also shows whether the collection loaded.
#[derive(Clone)]
pub struct HealthService;

impl HealthService {
    /// Builds a health report without creating an instance.
    ///
    /// # Arguments
    /// * `medicines` - Number of medicine documents currently visible.
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health(medicines: u64) -> HealthRes {
        let message = if medicines == 0 {
            "MedQuery is alive (collection is empty)".into()
        } else {
            "MedQuery is alive".into()
        };
        HealthRes {
            ok: true,
            message,
            medicines,
        }
    }
}
