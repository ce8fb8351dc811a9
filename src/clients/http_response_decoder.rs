//! Interpreting an [`HttpRawResponse`] as a typed [`HttpResponse`].

use std::collections::HashMap;

use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

use crate::clients::empty_decoder::EmptyDecoder;
use crate::clients::errors::HttpError;
use crate::clients::http_response::{HttpRawResponse, HttpResponse, ResponseFormat};

/// Body decoded when a JSON response carries no bytes.
const EMPTY_JSON_OBJECT: &[u8] = b"{}";

/// Turns raw transport results into typed responses.
///
/// Checks run in a fixed order: a transport error is returned unchanged,
/// a missing status or URL is [`HttpError::MalformedResponse`], a status of
/// 400 or above is [`HttpError::Status`] without looking at the body, and
/// only then is the body decoded according to the [`ResponseFormat`].
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpResponseDecoder;

impl HttpResponseDecoder {
    /// Creates a new decoder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Decodes `raw` into an `HttpResponse<R>`.
    ///
    /// # Errors
    ///
    /// - [`HttpError::Transport`] if the exchange failed
    /// - [`HttpError::MalformedResponse`] if status or URL are missing
    /// - [`HttpError::Status`] for status codes of 400 and above
    /// - [`HttpError::FormatMismatch`] if `format` is
    ///   [`ResponseFormat::Empty`] and `R` requires data
    /// - [`HttpError::Decode`] if the JSON body does not match `R`
    pub fn decode<R>(
        &self,
        raw: HttpRawResponse,
        format: ResponseFormat,
    ) -> Result<HttpResponse<R>, HttpError>
    where
        R: DeserializeOwned,
    {
        let HttpRawResponse {
            status,
            url,
            headers,
            body,
            error,
        } = raw;

        if let Some(error) = error {
            return Err(HttpError::Transport(error));
        }
        let (Some(status), Some(url)) = (status, url) else {
            return Err(HttpError::MalformedResponse);
        };
        if status >= 400 {
            return Err(HttpError::Status { code: status });
        }

        let body = match format {
            ResponseFormat::Empty => EmptyDecoder::new().decode::<R>()?,
            ResponseFormat::Json => {
                let bytes = match body.as_deref() {
                    Some(bytes) if !bytes.is_empty() => bytes,
                    _ => EMPTY_JSON_OBJECT,
                };
                serde_json::from_slice(bytes)?
            }
        };

        Ok(HttpResponse {
            status,
            url,
            body,
            headers: Self::text_headers(&headers),
        })
    }

    /// Copies headers whose values are valid text; repeated names are joined
    /// with `", "`.
    fn text_headers(headers: &HeaderMap) -> HashMap<String, String> {
        let mut result: HashMap<String, String> = HashMap::with_capacity(headers.keys_len());
        for (name, value) in headers {
            let Ok(text) = std::str::from_utf8(value.as_bytes()) else {
                tracing::warn!(header = %name, "Dropping response header with non-text value");
                continue;
            };
            result
                .entry(name.as_str().to_string())
                .and_modify(|existing| {
                    existing.push_str(", ");
                    existing.push_str(text);
                })
                .or_insert_with(|| text.to_string());
        }
        result
    }
}
