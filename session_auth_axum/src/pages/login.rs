use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    response::{Html, IntoResponse, Redirect, Response},
};

use session_auth::{CoordinationError, login_core};

use crate::config::HOME_URL;
use crate::error::IntoResponseError;
use crate::state::AppState;
use crate::views::{View, render};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Submitted login form. Absent fields count as empty, which the credential
/// check then rejects. A repeated field keeps its first value.
#[derive(Debug, Default, PartialEq, Eq)]
pub(super) struct LoginForm {
    username: String,
    password: String,
}

impl LoginForm {
    /// Decode a urlencoded request body.
    ///
    /// Every pair is decoded, including ones the login form does not use, so a
    /// broken escape anywhere rejects the whole body.
    fn from_request(headers: &HeaderMap, body: &[u8]) -> Result<Self, String> {
        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        let mime = content_type.split(';').next().unwrap_or_default().trim();
        if !mime.eq_ignore_ascii_case(FORM_CONTENT_TYPE) {
            return Err(format!("Expected `Content-Type: {FORM_CONTENT_TYPE}`"));
        }

        let body =
            std::str::from_utf8(body).map_err(|_| "Form body is not valid UTF-8".to_string())?;

        let mut username = None;
        let mut password = None;
        for pair in body.split('&').filter(|pair| !pair.is_empty()) {
            if pair.contains(';') {
                return Err("Invalid semicolon separator in form".to_string());
            }
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_component(key)?;
            let value = decode_component(value)?;
            match key.as_str() {
                "username" if username.is_none() => username = Some(value),
                "password" if password.is_none() => password = Some(value),
                _ => {}
            }
        }

        Ok(Self {
            username: username.unwrap_or_default(),
            password: password.unwrap_or_default(),
        })
    }
}

/// Percent-decode one form component. `+` stands for a space and every `%`
/// must be followed by two hex digits.
fn decode_component(raw: &str) -> Result<String, String> {
    let mut rest = raw;
    while let Some(idx) = rest.find('%') {
        let is_escape = rest
            .get(idx + 1..idx + 3)
            .is_some_and(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()));
        if !is_escape {
            return Err("Invalid percent escape in form".to_string());
        }
        rest = &rest[idx + 3..];
    }

    urlencoding::decode(&raw.replace('+', " "))
        .map(|decoded| decoded.into_owned())
        .map_err(|_| "Form field is not valid UTF-8".to_string())
}

pub(super) async fn login() -> Result<Html<String>, (StatusCode, String)> {
    render(View::Login)
}

/// Checks the form credentials, opens a session and redirects home.
///
/// An undecodable body is rejected before the credentials are looked at.
pub(super) async fn post_login(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, (StatusCode, String)> {
    let form = LoginForm::from_request(&headers, &body)
        .map_err(|detail| CoordinationError::MalformedRequest(detail).log())
        .into_response_error()?;

    let headers = login_core(
        &form.username,
        &form.password,
        state.verifier.as_ref(),
        &state.store,
        state.rng.as_ref(),
    )
    .await
    .into_response_error()?;

    Ok((headers, Redirect::to(HOME_URL)).into_response())
}
