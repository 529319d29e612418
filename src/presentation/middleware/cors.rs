//! CORS Middleware Configuration
//!
//! Allows the local dev servers and the named deployment origin.

use tower_http::cors::{Any, CorsLayer};

use crate::config::CorsSettings;

/// Create CORS layer from settings
pub fn create_cors_layer(settings: &CorsSettings) -> CorsLayer {
    let origins: Vec<_> = settings
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
            .max_age(std::time::Duration::from_secs(3600))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_layer_builds_from_configured_origins() {
        let settings = CorsSettings {
            allowed_origins: vec![
                "http://localhost:4200".to_string(),
                "https://charsheet.example.com".to_string(),
            ],
        };

        // Should not panic on valid origins
        let _ = create_cors_layer(&settings);
    }

    #[test]
    fn test_cors_layer_falls_back_to_any_on_empty_list() {
        let settings = CorsSettings {
            allowed_origins: vec![],
        };

        let _ = create_cors_layer(&settings);
    }
}
