use serde::Deserialize;

/// Error body returned by PostgREST on a failed request.
#[derive(Deserialize, Debug)]
pub struct PostgrestError {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

impl PostgrestError {
    /// Best human-readable message from a raw error body.
    pub fn describe(body: &str) -> String {
        match serde_json::from_str::<PostgrestError>(body) {
            Ok(err) => match (err.code, err.details) {
                (Some(code), Some(details)) => format!("{} [{code}]: {details}", err.message),
                (Some(code), None) => format!("{} [{code}]", err.message),
                (None, Some(details)) => format!("{}: {details}", err.message),
                (None, None) => err.message,
            },
            Err(_) if body.trim().is_empty() => "Unknown API error".to_string(),
            Err(_) => body.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_structured_error() {
        let body = r#"{"message":"relation does not exist","code":"42P01","details":null,"hint":null}"#;
        assert_eq!(PostgrestError::describe(body), "relation does not exist [42P01]");
    }

    #[test]
    fn falls_back_to_raw_body() {
        assert_eq!(PostgrestError::describe(" bad gateway "), "bad gateway");
        assert_eq!(PostgrestError::describe(""), "Unknown API error");
    }
}
