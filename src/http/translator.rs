//! Request translation.
//!
//! # Responsibilities
//! - Convert a generic request into an engine-native request
//! - Strip Accept-Encoding (the engine negotiates encodings itself)
//! - Inject proxy headers from the envoy URL plus the original destination
//! - Buffer and attach the request body as an upload
//!
//! # Design Decisions
//! - Header injection only happens for URLs the envoy scheme check accepts;
//!   everything else translates as a plain request
//! - Duplicate header names coexist in the engine's multimap; injection
//!   appends, it never overwrites caller headers
//! - Bodies are buffered in full before upload; no streaming pass-through

use std::sync::Arc;

use ::http::header::ACCEPT_ENCODING;
use thiserror::Error;
use uuid::Uuid;

use crate::engine::capability::{Engine, EngineRequest, TransferCallback};
use crate::envoy::parser::{is_envoy_url, proxy_headers};
use crate::http::executor::TransferExecutor;
use crate::http::request::GenericRequest;

/// Header carrying the full pre-proxy request URL.
pub const URL_ORIG: &str = "Url-Orig";
/// Header carrying the pre-proxy host.
pub const HOST_ORIG: &str = "Host-Orig";

/// Errors from request translation.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// No engine has been initialized yet.
    #[error("no engine available to translate the request")]
    EngineUnavailable,

    /// The request body could not be buffered.
    #[error("failed to buffer request body: {0}")]
    Body(#[from] std::io::Error),
}

/// Translate a generic request into an engine-native request.
///
/// The original request URL is passed to the engine unchanged; routing
/// through the proxy is the engine's business. What this adds on top of a
/// verbatim copy: the Accept-Encoding strip, the envoy header injection
/// with `Url-Orig`/`Host-Orig`, and the buffered upload body bound to the
/// executor.
pub fn translate(
    request: &dyn GenericRequest,
    engine: &dyn Engine,
    envoy_url: Option<&str>,
    executor: &Arc<dyn TransferExecutor>,
    callback: Arc<dyn TransferCallback>,
) -> Result<Box<dyn EngineRequest>, TranslateError> {
    let request_id = Uuid::new_v4();
    let url = request.url().as_str();

    tracing::debug!(
        request_id = %request_id,
        method = %request.method(),
        url = %url,
        "translating request"
    );

    let mut builder = engine.new_request(url, callback, executor.clone());
    builder.set_method(request.method().as_str());

    // HeaderMap keeps names lowercased, so this match is case-insensitive
    // no matter how the caller spelled the header.
    for (name, value) in request.headers().iter() {
        if name == &ACCEPT_ENCODING {
            continue;
        }
        match value.to_str() {
            Ok(value) => builder.add_header(name.as_str(), value),
            Err(_) => {
                tracing::warn!(
                    request_id = %request_id,
                    header = %name,
                    "skipping header with non-UTF-8 value"
                );
            }
        }
    }

    match envoy_url.filter(|candidate| is_envoy_url(candidate)) {
        Some(envoy) => {
            let injected = proxy_headers(envoy);
            tracing::debug!(
                request_id = %request_id,
                count = injected.len(),
                "injecting proxy headers from envoy url"
            );
            for (name, value) in &injected {
                builder.add_header(name, value);
            }
            builder.add_header(URL_ORIG, url);
            builder.add_header(HOST_ORIG, request.url().host_str().unwrap_or(""));
        }
        None => {
            tracing::debug!(request_id = %request_id, "no envoy url to inject headers from");
        }
    }

    if let Some(body) = request.body() {
        if let Some(content_type) = body.content_type() {
            builder.add_header("Content-Type", content_type);
        }
        let mut buffer = Vec::new();
        body.write_to(&mut buffer)?;
        builder.set_upload(buffer, executor.clone());
    }

    Ok(builder.build())
}
