// =============================================================================
// Aarohan Web - Error Types
// =============================================================================
// Table of Contents:
// 1. Graphics Errors
// 2. Configuration Errors
// =============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;

// -----------------------------------------------------------------------------
// 1. Graphics Errors
// -----------------------------------------------------------------------------

/// Failures while setting up a decorative drawing surface.
///
/// None of these reach the user: the surface swaps in its static fallback.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphicsError {
    #[error("No window object available")]
    NoWindow,

    #[error("Rendering context unavailable")]
    ContextUnavailable,

    #[error("Shader compile error: {0}")]
    ShaderCompile(String),

    #[error("Program link error: {0}")]
    ProgramLink(String),

    #[error("Could not allocate {0}")]
    Allocation(&'static str),

    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for GraphicsError {
    fn from(value: JsValue) -> Self {
        GraphicsError::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}

// -----------------------------------------------------------------------------
// 2. Configuration Errors
// -----------------------------------------------------------------------------

/// Embedded site configuration could not be used.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(String),

    #[error("Invalid config field `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
