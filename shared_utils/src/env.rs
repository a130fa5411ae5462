use thiserror::Error;

/// An environment variable required by the application is not set.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Missing environment variable: {0}")]
pub struct MissingEnvVarError(pub String);

/// Reads an environment variable, returning a structured error if it's missing.
///
/// A variable that is set but empty (or only whitespace) counts as missing,
/// since deployment tooling commonly exports blank placeholders.
///
/// # Arguments
/// * `name` - The name of the environment variable to read.
pub fn get_env_var(name: &str) -> Result<String, MissingEnvVarError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(MissingEnvVarError(name.to_string())),
    }
}

/// Reads an environment variable, substituting `fallback` when it is missing.
pub fn get_env_var_or(name: &str, fallback: &str) -> String {
    get_env_var(name).unwrap_or_else(|_| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_reports_its_name() {
        let err = get_env_var("SHARED_UTILS_SURELY_UNSET_VAR").unwrap_err();
        assert_eq!(err, MissingEnvVarError("SHARED_UTILS_SURELY_UNSET_VAR".into()));
        assert_eq!(
            err.to_string(),
            "Missing environment variable: SHARED_UTILS_SURELY_UNSET_VAR"
        );
    }

    #[test]
    fn fallback_used_when_unset() {
        assert_eq!(
            get_env_var_or("SHARED_UTILS_SURELY_UNSET_VAR", "placeholder"),
            "placeholder"
        );
    }
}
