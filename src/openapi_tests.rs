#[cfg(test)]
mod tests {
    use crate::schemas::ApiDoc;
    use utoipa::OpenApi;

    #[test]
    fn test_openapi_schema_generation() {
        let openapi = ApiDoc::openapi();

        assert!(openapi.components.is_some());
        let components = openapi.components.as_ref().unwrap();

        for schema in [
            "ErrorResponse",
            "HealthResponse",
            "TemperaturePoint",
            "TemperatureSeries",
            "TemperatureStatistics",
            "ForecastPoint",
            "TemperatureForecast",
            "DashboardSnapshot",
        ] {
            assert!(components.schemas.contains_key(schema), "missing schema {schema}");
        }

        let json_result = serde_json::to_string(&openapi);
        assert!(json_result.is_ok());
    }

    #[test]
    fn test_health_response_schema_structure() {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.as_ref().unwrap();
        let health_response_schema = components.schemas.get("HealthResponse").unwrap();

        if let utoipa::openapi::RefOr::T(utoipa::openapi::schema::Schema::Object(obj)) = health_response_schema {
            let properties = &obj.properties;
            assert!(properties.contains_key("status"));
            assert!(properties.contains_key("version"));
            assert!(properties.contains_key("active_sessions"));
        } else {
            panic!("HealthResponse should be an object schema");
        }
    }

    #[test]
    fn test_forecast_schema_structure() {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.as_ref().unwrap();
        let forecast_schema = components.schemas.get("TemperatureForecast").unwrap();

        if let utoipa::openapi::RefOr::T(utoipa::openapi::schema::Schema::Object(obj)) = forecast_schema {
            let properties = &obj.properties;
            for field in ["slope", "intercept", "horizon", "points"] {
                assert!(properties.contains_key(field), "missing field {field}");
            }
        } else {
            panic!("TemperatureForecast should be an object schema");
        }
    }

    #[test]
    fn test_openapi_paths_cover_dashboard_endpoints() {
        let openapi = ApiDoc::openapi();

        for path in [
            "/health",
            "/api/v1/series",
            "/api/v1/series/recent",
            "/api/v1/statistics",
            "/api/v1/forecast",
            "/api/v1/dashboard",
        ] {
            let item = openapi.paths.paths.get(path).unwrap_or_else(|| panic!("missing {path}"));
            assert!(item.operations.contains_key(&utoipa::openapi::PathItemType::Get));
        }

        let session = openapi.paths.paths.get("/api/v1/session").unwrap();
        assert!(session.operations.contains_key(&utoipa::openapi::PathItemType::Delete));
    }

    #[test]
    fn test_data_endpoints_document_server_errors() {
        let openapi = ApiDoc::openapi();
        let forecast = openapi.paths.paths.get("/api/v1/forecast").unwrap();
        let get = forecast.operations.get(&utoipa::openapi::PathItemType::Get).unwrap();

        assert!(get.responses.responses.contains_key("200"));
        assert!(get.responses.responses.contains_key("500"));
    }

    #[test]
    fn test_all_error_responses_reference_correct_schema() {
        let openapi = ApiDoc::openapi();
        let openapi_json = serde_json::to_string(&openapi).unwrap();

        assert!(!openapi_json.contains("crate.schemas.ErrorResponse"));
        assert!(!openapi_json.contains("crate::schemas::ErrorResponse"));
        assert!(openapi_json.contains("ErrorResponse"));
    }

    #[test]
    fn test_server_errors_point_at_registered_error_schema() {
        let openapi = serde_json::to_value(ApiDoc::openapi()).unwrap();
        assert!(openapi["components"]["schemas"]["ErrorResponse"].is_object());

        for path in [
            "/health",
            "/api/v1/series",
            "/api/v1/series/recent",
            "/api/v1/statistics",
            "/api/v1/forecast",
            "/api/v1/dashboard",
        ] {
            let reference = &openapi["paths"][path]["get"]["responses"]["500"]["content"]
                ["application/json"]["schema"]["$ref"];
            assert_eq!(
                reference, "#/components/schemas/ErrorResponse",
                "unexpected 500 schema for {path}"
            );
        }
    }
}
