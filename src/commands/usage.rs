use crate::config::ResolvedConfig;
use crate::error::UsageError;
use crate::services::openrouter::OpenRouterClient;
use crate::types::format_usage_line;
use std::io::Write;

/// Looks up the usage of the configured key and prints it to stdout.
///
/// # Errors
/// Returns an error if the request fails or the response has no `data.usage`.
pub async fn check_and_print_usage(config: &ResolvedConfig) -> Result<(), UsageError> {
    let client = OpenRouterClient::new(config)?;
    check_usage_to(&client, &mut std::io::stdout()).await
}

/// Fetches usage with `client` and writes the single summary line to `out`.
///
/// Nothing is written unless the lookup succeeds.
///
/// # Errors
/// Returns an error if the lookup fails or `out` cannot be written.
pub async fn check_usage_to<W: Write>(
    client: &OpenRouterClient,
    out: &mut W,
) -> Result<(), UsageError> {
    let key = client.fetch_key().await?;
    tracing::debug!(
        usage = key.usage,
        limit = ?key.limit,
        label = ?key.label,
        "Fetched key usage"
    );
    writeln!(out, "{}", format_usage_line(key.usage))?;
    out.flush()?;
    Ok(())
}
