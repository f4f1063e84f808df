use crate::{Client, ClientError, ClientResult};

use admin_core::{AdminUser, Credentials, RecordId};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `POST /login` response body.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct LoginResponse {
    #[serde(default)]
    pub admin_id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

impl LoginResponse {
    /// Split into token and user, failing when the token is missing or blank
    /// or the admin id is missing or not positive.
    #[track_caller]
    pub fn into_session(self) -> ClientResult<(String, AdminUser)> {
        let token = self.token.filter(|t| !t.trim().is_empty());
        match (token, self.admin_id) {
            (Some(token), Some(admin_id)) if admin_id > 0 => Ok((
                token,
                AdminUser {
                    id: RecordId(admin_id),
                    name: self.name.unwrap_or_default(),
                    email: self.email.unwrap_or_default(),
                },
            )),
            _ => Err(ClientError::auth("Invalid login response")),
        }
    }
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct ValidateTokenRequest<'a> {
    token: &'a str,
}

pub(crate) async fn login(client: &Client, credentials: &Credentials) -> ClientResult<LoginResponse> {
    let request = LoginRequest {
        email: credentials.email.trim(),
        password: &credentials.password,
    };
    let body = client.post("/login", &request).await?;
    if body.is_null() {
        return Err(ClientError::auth("Invalid login response"));
    }
    Ok(serde_json::from_value(body)?)
}

pub(crate) async fn validate_token(client: &Client, token: &str) -> ClientResult<bool> {
    let body = client
        .post("/validate-token", &ValidateTokenRequest { token })
        .await?;
    Ok(body.get("valid").and_then(Value::as_bool).unwrap_or(false))
}
