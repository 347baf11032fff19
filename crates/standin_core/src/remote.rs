//! Fetching text through an [`ApiClient`].

use crate::contract::ApiClient;
use crate::errors::{ContractViolation, FetchError};

/// Lowest and highest status codes an HTTP-shaped API may return.
const STATUS_RANGE: std::ops::RangeInclusive<u16> = 100..=599;

/// Fetch the body text for `query`.
///
/// ## Errors
/// - [`FetchError::Upstream`] when the client itself fails; the client error is kept as the source.
/// - [`FetchError::Contract`] when the status code is not an HTTP status at all.
/// - [`FetchError::Rejected`] for any valid non-2xx status.
pub fn fetch_text<C: ApiClient + ?Sized>(client: &C, query: &str) -> Result<String, FetchError> {
    let response = client.get_data(query).map_err(|source| FetchError::Upstream {
        query: query.to_string(),
        source,
    })?;

    if !STATUS_RANGE.contains(&response.status_code) {
        return Err(ContractViolation::new(
            "ApiClient",
            format!("status {} is not an HTTP status", response.status_code),
        )
        .into());
    }

    if !response.is_success() {
        return Err(FetchError::Rejected {
            query: query.to_string(),
            status: response.status_code,
        });
    }

    Ok(response.text)
}
