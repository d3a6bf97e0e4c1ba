use actix_cors::Cors;

use crate::config::Config;

/// Any origin, method and header may call the API.
pub fn cors(config: &Config) -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .max_age(config.cors_max_age_secs)
}
