//! Postal-code (CEP) masking and a best-effort address lookup.
//!
//! The lookup follows the ViaCEP layout: `GET {endpoint}/{cep}/json/`
//! answers either the address fields or `{"erro": true}`. One attempt per
//! call, no retry. Every failure is logged and collapsed into `None`.

use crate::core::document::{apply_mask, only_digits};
use crate::domain::model::Address;
use crate::domain::ports::AddressProvider;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

pub const DEFAULT_CEP_ENDPOINT: &str = "https://viacep.com.br/ws";

const CEP_MASK: &[(usize, &str)] = &[(5, "-")];

/// Progressive `NNNNN-NNN`, capped at 8 digits.
pub fn format_cep(input: &str) -> String {
    let mut digits = only_digits(input);
    digits.truncate(8);
    apply_mask(&digits, CEP_MASK)
}

#[derive(Debug, Deserialize)]
struct ViaCepResponse {
    #[serde(default)]
    erro: Option<serde_json::Value>,
    cep: Option<String>,
    #[serde(default)]
    logradouro: String,
    #[serde(default)]
    complemento: String,
    #[serde(default)]
    bairro: String,
    #[serde(default)]
    localidade: String,
    #[serde(default)]
    uf: String,
    ibge: Option<String>,
    ddd: Option<String>,
}

impl ViaCepResponse {
    // The service has sent both `true` and `"true"` over time.
    fn is_not_found(&self) -> bool {
        match &self.erro {
            Some(serde_json::Value::Bool(flag)) => *flag,
            Some(serde_json::Value::String(flag)) => flag == "true",
            _ => false,
        }
    }
}

/// Clears the flag on drop, including when the lookup future is cancelled.
struct LoadingGuard<'a>(&'a AtomicBool);

impl<'a> LoadingGuard<'a> {
    fn raise(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

pub struct CepLookup {
    client: Client,
    endpoint: String,
    loading: AtomicBool,
}

impl CepLookup {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            loading: AtomicBool::new(false),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// True while a request is in flight. Concurrent lookups share the
    /// flag, so the first one to finish clears it.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    pub async fn lookup(&self, cep: &str) -> Option<Address> {
        let digits = only_digits(cep);
        if digits.len() != 8 {
            tracing::debug!("Skipping lookup for '{}': expected 8 digits", cep);
            return None;
        }

        let url = format!("{}/{}/json/", self.endpoint, digits);
        let outcome = {
            let _loading = LoadingGuard::raise(&self.loading);
            self.fetch(&url).await
        };

        match outcome {
            Ok(Some(address)) => {
                tracing::debug!("Resolved CEP {} to {}/{}", digits, address.city, address.state);
                Some(address)
            }
            Ok(None) => {
                tracing::info!("CEP {} not found", digits);
                None
            }
            Err(e) => {
                tracing::error!("CEP lookup for {} failed: {}", digits, e);
                None
            }
        }
    }

    async fn fetch(&self, url: &str) -> Result<Option<Address>> {
        tracing::debug!("Making CEP request to: {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body: ViaCepResponse = response.json().await?;

        if body.is_not_found() {
            return Ok(None);
        }

        let Some(cep) = body.cep else {
            tracing::warn!("CEP response from {} carried no 'cep' field", url);
            return Ok(None);
        };

        Ok(Some(Address {
            cep: format_cep(&cep),
            street: body.logradouro,
            complement: body.complemento,
            neighborhood: body.bairro,
            city: body.localidade,
            state: body.uf,
            ibge: body.ibge.filter(|v| !v.is_empty()),
            ddd: body.ddd.filter(|v| !v.is_empty()),
        }))
    }
}

#[async_trait]
impl AddressProvider for CepLookup {
    async fn lookup(&self, cep: &str) -> Option<Address> {
        CepLookup::lookup(self, cep).await
    }
}
