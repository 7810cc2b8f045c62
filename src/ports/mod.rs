//! Port traits decoupling the domain from concrete adapters.

pub mod data_port;
pub mod report_port;
