//! Request URL assembly
//!
//! Pure and deterministic: the whole payload travels base64-encoded in a
//! single `data` query parameter.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use shared::{RemoteLinkParts, TrackingPayload};
use url::Url;

use crate::error::{LaunchError, LaunchResult};

/// Name of the query parameter carrying the encoded payload
pub const DATA_PARAM: &str = "data";

/// Encode the canonical query string of `payload`
pub fn encode_payload(payload: &TrackingPayload) -> String {
    STANDARD.encode(payload.to_query_string().as_bytes())
}

/// Build `https://{host}{path}?data={encoded}`
///
/// Fails unless the parsed URL still targets exactly `parts.host`; the URL
/// parser would otherwise promote the path to a host when the host is empty.
pub fn build_request_url(parts: &RemoteLinkParts, payload: &TrackingPayload) -> LaunchResult<Url> {
    let encoded = encode_payload(payload);
    let raw = format!("https://{}{}?{}={}", parts.host, parts.path, DATA_PARAM, encoded);

    let url = Url::parse(&raw).map_err(|e| LaunchError::AssemblyFailed {
        reason: format!("{raw}: {e}"),
    })?;

    if !targets_host(&url, &parts.host) {
        return Err(LaunchError::AssemblyFailed {
            reason: format!("{raw}: host {:?} not preserved", parts.host),
        });
    }
    Ok(url)
}

/// Host comparison ignoring ASCII case and an explicit port
fn targets_host(url: &Url, host: &str) -> bool {
    let expected = host.split(':').next().unwrap_or_default();
    !expected.is_empty()
        && url
            .host_str()
            .is_some_and(|actual| actual.eq_ignore_ascii_case(expected))
}

/// Recover the canonical query string from an assembled URL
///
/// Reads the raw query rather than form-decoding it, since `+` is part of the
/// base64 alphabet.
pub fn decode_request_data(url: &Url) -> Option<String> {
    let prefix = format!("{DATA_PARAM}=");
    let encoded = url
        .query()?
        .split('&')
        .find_map(|pair| pair.strip_prefix(prefix.as_str()))?;

    let bytes = STANDARD.decode(encoded).ok()?;
    String::from_utf8(bytes).ok()
}
