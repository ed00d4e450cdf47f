use std::env;

// ============================================================================
// Application Configuration
// ============================================================================
//
// All configuration is read from the process environment once at startup and
// injected into the server's construction. Request handlers never touch
// ambient global state.
//
// ============================================================================

const DEFAULT_API_VERSION: &str = "2024-01";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Shopify store domain, e.g. `my-shop.myshopify.com`
    pub store_host: String,
    /// Admin API access token, sent as `X-Shopify-Access-Token`
    pub access_token: String,
    /// Admin API version segment of the orders URL
    pub api_version: String,
    pub bind_addr: String,
    pub port: u16,
}

impl AppConfig {
    /// Read configuration from the environment.
    ///
    /// Missing credentials are not fatal: the server still starts and order
    /// submissions fail upstream (typically 401). A warning is logged so the
    /// failure mode is diagnosable.
    pub fn from_env() -> Self {
        let store_host = env::var("SHOPIFY_STORE").unwrap_or_default();
        let access_token = env::var("SHOPIFY_ACCESS_TOKEN").unwrap_or_default();

        if store_host.is_empty() || access_token.is_empty() {
            tracing::warn!(
                store_host_set = !store_host.is_empty(),
                access_token_set = !access_token.is_empty(),
                "Shopify credentials incomplete; order submissions will be rejected upstream"
            );
        }

        let api_version =
            env::var("SHOPIFY_API_VERSION").unwrap_or_else(|_| DEFAULT_API_VERSION.to_string());
        let bind_addr = env::var("HOST").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            store_host,
            access_token,
            api_version,
            bind_addr,
            port,
        }
    }

    /// Fully-resolved order-creation endpoint URL.
    pub fn orders_url(&self) -> String {
        format!(
            "https://{}/admin/api/{}/orders.json",
            self.store_host, self.api_version
        )
    }
}
