use serde::Deserialize;

/// Body of `GET /api/v1/key`.
#[derive(Debug, Clone, Deserialize)]
pub struct KeyResponse {
    pub data: KeyData,
}

/// Key details reported by OpenRouter. Only `usage` is required.
#[derive(Debug, Clone, Deserialize)]
pub struct KeyData {
    pub usage: f64,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub limit: Option<f64>,
    #[serde(default)]
    pub limit_remaining: Option<f64>,
    #[serde(default)]
    pub is_free_tier: Option<bool>,
}

/// Formats usage as `$X.XX used today.`
#[must_use]
pub fn format_usage_line(usage: f64) -> String {
    format!("${usage:.2} used today.")
}
