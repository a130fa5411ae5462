use async_trait::async_trait;
use reqwest::{Client, Response, header};
use secrecy::ExposeSecret;
use snafu::ResultExt;
use tracing::{debug, info};

use crate::{
    config::BackendConfig,
    models::{customer::CustomerRow, registration::InsertPayload},
    providers::{
        ApiSnafu, ClientBuildSnafu, CustomerBackend, InvalidAccessKeySnafu, ProviderError,
        ProviderInitError, ReqwestSnafu, supabase::response::PostgrestError,
    },
};

const REST_PATH: &str = "rest/v1";

pub struct SupabaseBackend {
    client: Client,
    table_url: String,
}

impl SupabaseBackend {
    /// Creates a backend for the table named in `config`.
    ///
    /// The access key is sent both as `apikey` and as a bearer token, which
    /// is what the hosted REST gateway expects for anonymous clients.
    pub fn new(config: &BackendConfig) -> Result<Self, ProviderInitError> {
        let key = config.access_key.expose_secret();

        let mut apikey = header::HeaderValue::from_str(key).context(InvalidAccessKeySnafu)?;
        apikey.set_sensitive(true);
        let mut bearer =
            header::HeaderValue::from_str(&format!("Bearer {key}")).context(InvalidAccessKeySnafu)?;
        bearer.set_sensitive(true);

        let mut headers = header::HeaderMap::new();
        headers.insert("apikey", apikey);
        headers.insert(header::AUTHORIZATION, bearer);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .build()
            .context(ClientBuildSnafu)?;

        Ok(Self {
            client,
            table_url: table_url(&config.endpoint_url, &config.table),
        })
    }

    pub fn table_url(&self) -> &str {
        &self.table_url
    }
}

fn table_url(endpoint: &str, table: &str) -> String {
    format!("{}/{REST_PATH}/{table}", endpoint.trim_end_matches('/'))
}

async fn ensure_success(response: Response) -> Result<Response, ProviderError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    ApiSnafu {
        status: status.as_u16(),
        message: PostgrestError::describe(&body),
    }
    .fail()
}

#[async_trait]
impl CustomerBackend for SupabaseBackend {
    async fn fetch_all(&self) -> Result<Vec<CustomerRow>, ProviderError> {
        debug!(url = %self.table_url, "fetching customers");
        let response = self
            .client
            .get(&self.table_url)
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await
            .context(ReqwestSnafu)?;

        let rows = ensure_success(response)
            .await?
            .json::<Vec<CustomerRow>>()
            .await
            .context(ReqwestSnafu)?;
        info!(rows = rows.len(), "fetched customers from backend");
        Ok(rows)
    }

    async fn insert(&self, payload: &InsertPayload) -> Result<(), ProviderError> {
        debug!(url = %self.table_url, company = %payload.company_name, "inserting customer");
        let response = self
            .client
            .post(&self.table_url)
            .header("Prefer", "return=minimal")
            .json(&[payload])
            .send()
            .await
            .context(ReqwestSnafu)?;

        ensure_success(response).await?;
        info!(company = %payload.company_name, "customer persisted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    #[test]
    fn table_url_joins_endpoint_and_table() {
        assert_eq!(
            table_url("https://abc.supabase.co/", "vpp_customers"),
            "https://abc.supabase.co/rest/v1/vpp_customers"
        );
    }

    #[test]
    fn placeholder_config_builds() {
        let backend = SupabaseBackend::new(&BackendConfig::default()).unwrap();
        assert_eq!(
            backend.table_url(),
            "https://placeholder.supabase.co/rest/v1/vpp_customers"
        );
    }

    #[test]
    fn access_key_with_newline_is_rejected() {
        let config = BackendConfig {
            access_key: SecretString::from("bad\nkey"),
            ..BackendConfig::default()
        };
        assert!(matches!(
            SupabaseBackend::new(&config),
            Err(ProviderInitError::InvalidAccessKey { .. })
        ));
    }
}
