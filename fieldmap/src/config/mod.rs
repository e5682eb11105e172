mod configuration_error;
mod criteria_config;

pub use configuration_error::ConfigurationError;
pub use criteria_config::CriteriaConfig;
