use std::env;
use std::str::FromStr;

/// Deployment environment. Gates dev-only redirect schemes and the
/// rate-limit cap (spec §6 `ENVIRONMENT`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" => Ok(Environment::Production),
            "staging" => Ok(Environment::Staging),
            "development" | "" => Ok(Environment::Development),
            other => Err(anyhow::anyhow!("unknown ENVIRONMENT value: {other}")),
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Development
    }
}

/// Client id/secret pair shared by the three non-Apple providers.
#[derive(Clone)]
pub struct OAuthClientCredentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Apple signs its own client secret per request rather than issuing a
/// static one, so it needs the raw signing material instead (spec §4.7
/// step 3).
#[derive(Clone)]
pub struct AppleCredentials {
    pub client_id: String,
    pub team_id: String,
    pub key_id: String,
    pub private_key_pem: String,
}

/// Per-provider credentials, each independently optional — a provider with
/// no credentials configured answers `GET /oauth/<provider>` with
/// `oauth_not_configured` rather than failing startup (spec §4.7 step 1).
#[derive(Clone, Default)]
pub struct OAuthProvidersConfig {
    pub google: Option<OAuthClientCredentials>,
    pub facebook: Option<OAuthClientCredentials>,
    pub apple: Option<AppleCredentials>,
    pub microsoft: Option<OAuthClientCredentials>,
}

impl OAuthProvidersConfig {
    fn load() -> anyhow::Result<Self> {
        Ok(Self {
            google: optional_client_credentials("GOOGLE_CLIENT_ID", "GOOGLE_CLIENT_SECRET"),
            facebook: optional_client_credentials("FACEBOOK_CLIENT_ID", "FACEBOOK_CLIENT_SECRET"),
            microsoft: optional_client_credentials("MICROSOFT_CLIENT_ID", "MICROSOFT_CLIENT_SECRET"),
            apple: optional_apple_credentials()?,
        })
    }
}

fn optional_client_credentials(id_key: &str, secret_key: &str) -> Option<OAuthClientCredentials> {
    let client_id = env::var(id_key).ok()?;
    let client_secret = env::var(secret_key).ok()?;
    Some(OAuthClientCredentials { client_id, client_secret })
}

fn optional_apple_credentials() -> anyhow::Result<Option<AppleCredentials>> {
    let (client_id, team_id, key_id) =
        match (env::var("APPLE_CLIENT_ID").ok(), env::var("APPLE_TEAM_ID").ok(), env::var("APPLE_KEY_ID").ok()) {
            (Some(c), Some(t), Some(k)) => (c, t, k),
            _ => return Ok(None),
        };
    let Some(raw_key) = env::var("APPLE_PRIVATE_KEY").ok() else { return Ok(None) };
    let private_key_pem = decode_base64_pem(&raw_key)?;
    Ok(Some(AppleCredentials { client_id, team_id, key_id, private_key_pem }))
}

/// Process-wide configuration, loaded once at startup from the environment
/// (spec §6 "Required configuration"). `.env` is loaded first via dotenvy
/// so local development doesn't need exported shell variables.
#[derive(Clone)]
pub struct AppConfig {
    pub environment: Environment,
    /// Bare host (no scheme), e.g. `auth.centerpiece.shop`. Used as the
    /// refresh cookie's `Domain=` attribute and to build callback URLs.
    /// Use [`AppConfig::auth_origin`] wherever a full origin is needed.
    pub auth_domain: String,
    pub database_url: String,
    pub access_token_ttl_seconds: i64,
    pub refresh_token_ttl_days: i64,
    pub auth_code_ttl_seconds: i64,
    pub jwt_private_key_pem: String,
    pub jwt_public_key_pem: String,
    pub jwt_kid: String,
    pub email_from: String,
    pub email_from_name: String,
    pub oauth: OAuthProvidersConfig,
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT").unwrap_or_default().parse()?;

        Ok(Self {
            environment,
            auth_domain: required("AUTH_DOMAIN")?,
            database_url: required("DATABASE_URL")?,
            access_token_ttl_seconds: optional_i64("ACCESS_TOKEN_TTL_SECONDS", 900)?,
            refresh_token_ttl_days: optional_i64("REFRESH_TOKEN_TTL_DAYS", 30)?,
            auth_code_ttl_seconds: optional_i64("AUTH_CODE_TTL_SECONDS", 60)?,
            jwt_private_key_pem: decode_base64_pem(&required("JWT_PRIVATE_KEY")?)?,
            jwt_public_key_pem: decode_base64_pem(&required("JWT_PUBLIC_KEY")?)?,
            jwt_kid: env::var("JWT_KID").unwrap_or_else(|_| "auth-es256-1".to_string()),
            email_from: required("EMAIL_FROM")?,
            email_from_name: env::var("EMAIL_FROM_NAME").unwrap_or_else(|_| "Centerpiece".to_string()),
            oauth: OAuthProvidersConfig::load()?,
        })
    }

    /// Rate-limit cap for the 15-minute window: 10 in production, 200
    /// otherwise (spec §4.9).
    pub fn rate_limit_cap(&self) -> u32 {
        if self.environment.is_production() { 10 } else { 200 }
    }

    /// This service's own callback URL for a given provider — what gets
    /// sent as `redirect_uri` in the authorization request (spec §4.7 step 4).
    pub fn oauth_callback_url(&self, provider: &str) -> String {
        format!("{}/oauth/{}/callback", self.auth_origin(), provider)
    }

    /// This service's public origin (scheme + host), e.g.
    /// `https://auth.centerpiece.shop`. Used as the JWT `iss` claim and
    /// anywhere else a fully-qualified URL is needed (spec §6).
    pub fn auth_origin(&self) -> String {
        format!("https://{}", self.auth_domain)
    }
}

fn required(key: &str) -> anyhow::Result<String> {
    env::var(key).map_err(|_| anyhow::anyhow!("missing required environment variable: {key}"))
}

fn optional_i64(key: &str, default: i64) -> anyhow::Result<i64> {
    match env::var(key) {
        Ok(value) => value.parse().map_err(|_| anyhow::anyhow!("{key} must be an integer")),
        Err(_) => Ok(default),
    }
}

fn decode_base64_pem(value: &str) -> anyhow::Result<String> {
    use base64::Engine;
    let decoded = base64::engine::general_purpose::STANDARD.decode(value.trim())?;
    Ok(String::from_utf8(decoded)?)
}
