//! Environment variable and home directory expansion for config strings.

use crate::ConfigError;

/// Expand `~`, `${VAR}` and `${VAR:-default}` in a config value.
///
/// An unset variable without a default is an error naming the field.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::full(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_value_unchanged() {
        assert_eq!(expand_env("catalog.json", "catalog.path").unwrap(), "catalog.json");
    }

    #[test]
    fn test_default_used_when_unset() {
        let value = expand_env("${MONSIZE_TEST_UNSET_DIR:-.monsize}/state", "state.dir").unwrap();
        assert_eq!(value, ".monsize/state");
    }

    #[test]
    fn test_unset_without_default_is_error() {
        let err = expand_env("${MONSIZE_TEST_UNSET_CATALOG}", "catalog.path").unwrap_err();
        match err {
            ConfigError::EnvVar { field, message } => {
                assert_eq!(field, "catalog.path");
                assert_eq!(message, "${MONSIZE_TEST_UNSET_CATALOG} not set");
            }
            other => panic!("expected EnvVar error, got {other:?}"),
        }
    }
}
