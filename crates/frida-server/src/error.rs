use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {env_var}")]
    MissingEnvVar { env_var: String },

    #[error(transparent)]
    Other(#[from] config::ConfigError),
}

/// Map a missing config field to the environment variable a user would set.
/// Only the provider fields lack builder defaults, so bare field names come
/// from that table.
pub fn to_env_var(field: &str) -> String {
    match field {
        "api_key" | "host" | "model" => format!("FRIDA_PROVIDER__{}", field.to_uppercase()),
        _ => format!("FRIDA_{}", field.replace('.', "__").to_uppercase()),
    }
}
