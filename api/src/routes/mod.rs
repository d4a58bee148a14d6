//! HTTP route handlers

pub mod pi_request;
