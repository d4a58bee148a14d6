//! Domain entities

pub mod mfa_session;
pub mod personal_info;
pub mod pi_request;

pub use mfa_session::MfaSession;
pub use personal_info::PersonalInfo;
pub use pi_request::{DeliveryMethod, PiRequest, RequestStatus, RequestType};
