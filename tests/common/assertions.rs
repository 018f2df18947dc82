//! Custom assertion macros and utilities
//!
//! Provides assertion macros for the JSON error bodies and frames the
//! server produces.

/// Assert that a result is ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $message:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $message, e),
        }
    };
}

/// Assert that a response has the given status and the JSON error body
#[macro_export]
macro_rules! assert_error_response {
    ($response:expr, $status:expr) => {{
        let response = $response;
        assert_eq!(response.status_code(), $status);
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["status"], serde_json::json!($status.as_u16()));
        assert!(body["error"].is_string(), "Expected an error message in {}", body);
    }};
}

/// Assert that a JSON frame has the given `type`
#[macro_export]
macro_rules! assert_frame_type {
    ($frame:expr, $kind:expr) => {{
        let frame = &$frame;
        assert_eq!(
            frame["type"].as_str(),
            Some($kind),
            "Expected a '{}' frame, got {}",
            $kind,
            frame
        );
    }};
}
