use std::collections::BTreeMap;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use poem::Request;
use poem_openapi::SecurityScheme;
use serde::Deserialize;
use sha2::Sha256;

use business::domain::shared::value_objects::{ShopDomain, TenantContext};

use crate::config::shopify_config::ShopifyConfig;

type HmacSha256 = Hmac<Sha256>;

/// Maximum age of a signed app proxy request, in seconds.
const PROXY_MAX_AGE_SECS: i64 = 300;

/// Claims of a Shopify session token.
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct SessionClaims {
    iss: String,
    dest: String,
    aud: String,
    sub: Option<String>,
    exp: u64,
    nbf: u64,
}

/// Context of a request forwarded by the Shopify app proxy.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyContext {
    pub tenant: TenantContext,
    pub logged_in_customer_id: Option<String>,
}

fn verify_session_token(token: &str, config: &ShopifyConfig) -> Result<TenantContext, String> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_audience(&[&config.api_key]);
    validation.set_required_spec_claims(&["exp", "nbf", "aud"]);
    validation.validate_nbf = true;
    validation.leeway = 5;

    let token_data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(config.api_secret.as_bytes()),
        &validation,
    )
    .map_err(|e| format!("auth.token_validation_failed: {e}"))?;

    let shop = ShopDomain::from_url(&token_data.claims.dest).ok_or("auth.invalid_dest")?;
    let issuer_shop = ShopDomain::from_url(&token_data.claims.iss).ok_or("auth.invalid_iss")?;
    if issuer_shop != shop {
        return Err("auth.issuer_mismatch".to_string());
    }

    Ok(TenantContext::new(shop))
}

/// Verifies an app proxy query string: every parameter except `signature`,
/// sorted by key, concatenated as `key=value` with no separator (repeated keys
/// join their values with `,`), signed with HMAC-SHA256 in hex. The signed
/// `timestamp` must be within `PROXY_MAX_AGE_SECS` of `now`.
fn verify_proxy_query(query: &str, secret: &str, now: i64) -> Result<ProxyContext, String> {
    let mut signature = None;
    let mut params: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        if key == "signature" {
            signature = Some(value.into_owned());
        } else {
            params
                .entry(key.into_owned())
                .or_default()
                .push(value.into_owned());
        }
    }

    let signature = signature.ok_or("auth.missing_signature")?;
    let expected = hex::decode(signature).map_err(|_| "auth.malformed_signature")?;
    let message: String = params
        .iter()
        .map(|(key, values)| format!("{}={}", key, values.join(",")))
        .collect();

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| format!("auth.invalid_secret: {e}"))?;
    mac.update(message.as_bytes());
    mac.verify_slice(&expected)
        .map_err(|_| "auth.invalid_signature")?;

    let timestamp = params
        .get("timestamp")
        .and_then(|values| values.first())
        .and_then(|ts| ts.parse::<i64>().ok())
        .ok_or("auth.missing_timestamp")?;
    if (now - timestamp).abs() > PROXY_MAX_AGE_SECS {
        return Err("auth.expired_signature".to_string());
    }

    let shop = params
        .get("shop")
        .and_then(|values| values.first())
        .ok_or("auth.missing_shop")?;
    let logged_in_customer_id = params
        .get("logged_in_customer_id")
        .and_then(|values| values.first())
        .filter(|id| !id.is_empty())
        .cloned();

    Ok(ProxyContext {
        tenant: TenantContext::new(ShopDomain::new(shop.as_str())),
        logged_in_customer_id,
    })
}

/// Verifies the base64 `X-Shopify-Hmac-Sha256` header of a webhook delivery.
pub fn verify_webhook(body: &[u8], hmac_header: &str, secret: &str) -> Result<(), String> {
    let expected = STANDARD
        .decode(hmac_header.trim())
        .map_err(|_| "auth.malformed_hmac")?;

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| format!("auth.invalid_secret: {e}"))?;
    mac.update(body);
    mac.verify_slice(&expected)
        .map_err(|_| "auth.invalid_hmac".to_string())
}

/// Shopify session token (App Bridge) authentication
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "session_token_checker")]
pub struct ShopifySessionBearer(pub TenantContext);

async fn session_token_checker(
    req: &Request,
    bearer: poem_openapi::auth::Bearer,
) -> Option<TenantContext> {
    let config = req.data::<ShopifyConfig>()?;

    match verify_session_token(&bearer.token, config) {
        Ok(tenant) => Some(tenant),
        Err(e) => {
            tracing::warn!("Shopify session auth failed: {e}");
            None
        }
    }
}

/// Shopify app proxy signature authentication
#[derive(SecurityScheme)]
#[oai(
    ty = "api_key",
    key_name = "signature",
    key_in = "query",
    checker = "app_proxy_checker"
)]
pub struct AppProxySignature(pub ProxyContext);

async fn app_proxy_checker(
    req: &Request,
    _signature: poem_openapi::auth::ApiKey,
) -> Option<ProxyContext> {
    let config = req.data::<ShopifyConfig>()?;
    let query = req.uri().query().unwrap_or_default();

    match verify_proxy_query(query, &config.api_secret, chrono::Utc::now().timestamp()) {
        Ok(context) => Some(context),
        Err(e) => {
            tracing::warn!("App proxy auth failed: {e}");
            None
        }
    }
}
