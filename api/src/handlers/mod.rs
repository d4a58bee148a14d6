//! Request handler support

pub mod error;
