//! Handlers for the personal information request workflow

pub mod request_code;
pub mod status;
pub mod submit;
pub mod verify_code;

use std::sync::Arc;

use pir_core::domain::clock::Clock;
use pir_core::repositories::SessionStore;
use pir_core::services::mfa::{MfaService, SmsServiceTrait};
use pir_core::services::submission::SubmissionService;

pub use request_code::request_mfa_code;
pub use status::request_status;
pub use submit::submit;
pub use verify_code::verify_mfa_code;

/// Application state that holds the shared services
pub struct AppState<S, N, K>
where
    S: SessionStore,
    N: SmsServiceTrait,
    K: Clock,
{
    pub mfa_service: Arc<MfaService<S, N, K>>,
    pub submission_service: Arc<SubmissionService<S, K>>,
}
