//! Prioritized source chains with a total fallback
//!
//! A chain tries its URLs strictly in order, one request at a time. Each
//! response goes through a validator; transport failures and rejected
//! responses are logged and demoted to "try the next source". Only when every
//! source has failed does the caller see an error, and [`SourceChain::resolve_or_else`]
//! turns even that into a fallback value.

use crate::error::ResolveError;
use crate::fetch::Fetcher;
use serde::Serialize;

/// Where a resolved value came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Origin {
    /// Accepted response from a remote source
    Remote { url: String },
    /// Embedded chapter records
    Dataset,
    /// Hand-transcribed verses
    Curated,
    /// Synthesized placeholder verses
    Placeholder,
}

impl Origin {
    pub fn is_remote(&self) -> bool {
        matches!(self, Origin::Remote { .. })
    }
}

/// A value together with its provenance
#[derive(Debug)]
pub struct Resolved<T> {
    pub value: T,
    pub origin: Origin,
    /// Why the remote sources were not used, for offline values
    pub cause: Option<ResolveError>,
}

impl<T> Resolved<T> {
    pub fn remote(value: T, url: impl Into<String>) -> Self {
        Self {
            value,
            origin: Origin::Remote { url: url.into() },
            cause: None,
        }
    }

    pub fn offline(value: T, origin: Origin, cause: ResolveError) -> Self {
        Self {
            value,
            origin,
            cause: Some(cause),
        }
    }

    /// Transform the value, keeping provenance
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolved<U> {
        Resolved {
            value: f(self.value),
            origin: self.origin,
            cause: self.cause,
        }
    }
}

/// An ordered list of remote sources for one kind of content
pub struct SourceChain<'a> {
    name: String,
    urls: Vec<String>,
    fetcher: &'a dyn Fetcher,
}

impl<'a> SourceChain<'a> {
    pub fn new(name: impl Into<String>, fetcher: &'a dyn Fetcher, urls: Vec<String>) -> Self {
        Self {
            name: name.into(),
            urls,
            fetcher,
        }
    }

    /// Return the first response the validator accepts
    ///
    /// The validator turns a JSON body into the wanted value or explains why it
    /// is unacceptable; the explanation becomes a `MalformedResponse`.
    pub async fn first_valid<T, V>(&self, validate: V) -> Result<Resolved<T>, ResolveError>
    where
        V: Fn(serde_json::Value) -> Result<T, String>,
    {
        let mut last_error = None;

        for url in &self.urls {
            tracing::debug!("Trying {} source: {}", self.name, url);

            match self.fetcher.get_json(url).await {
                Ok(body) => match validate(body) {
                    Ok(value) => {
                        tracing::info!("Resolved {} from {}", self.name, url);
                        return Ok(Resolved::remote(value, url.clone()));
                    }
                    Err(reason) => {
                        tracing::warn!("Rejected {} response from {}: {}", self.name, url, reason);
                        last_error = Some(ResolveError::MalformedResponse {
                            url: url.clone(),
                            reason,
                        });
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to fetch {} from {}: {}", self.name, url, e);
                    last_error = Some(e);
                }
            }
        }

        Err(ResolveError::ExhaustedFallback {
            chain: self.name.clone(),
            last: last_error.map(Box::new),
        })
    }

    /// Like [`first_valid`](Self::first_valid), but a fully exhausted chain is
    /// handed to `fallback`, so this never fails
    pub async fn resolve_or_else<T, V, F>(&self, validate: V, fallback: F) -> Resolved<T>
    where
        V: Fn(serde_json::Value) -> Result<T, String>,
        F: FnOnce(ResolveError) -> Resolved<T>,
    {
        match self.first_valid(validate).await {
            Ok(resolved) => resolved,
            Err(e) => {
                tracing::info!("Using offline {} ({})", self.name, e);
                fallback(e)
            }
        }
    }
}
