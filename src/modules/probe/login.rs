use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
struct LoginProbeRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// The login endpoint answers with one of three JSON shapes. Untagged
/// deserialization tries them in declaration order, so the most specific
/// shape comes first.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LoginProbeOutcome {
    VerificationRequired {
        #[serde(rename = "requiresVerification")]
        requires_verification: bool,
        #[serde(rename = "userId")]
        user_id: String,
        email: String,
    },
    Success {
        user: serde_json::Value,
    },
    Failure {
        message: String,
    },
}

/// Fire a single login attempt and report which shape came back.
///
/// Deliberately no retry and no status-code check: the endpoint answers
/// failed logins with a JSON body as well, so the body shape alone decides
/// what the operator sees.
pub async fn probe(
    base_url: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<LoginProbeOutcome> {
    let url = format!("{}/auth/login", base_url.trim_end_matches('/'));

    let response = reqwest::Client::new()
        .post(&url)
        .json(&LoginProbeRequest { email, password })
        .send()
        .await
        .with_context(|| format!("POST {} failed", url))?;

    response
        .json::<LoginProbeOutcome>()
        .await
        .context("login endpoint returned an unrecognized body")
}

pub fn render_outcome(outcome: &LoginProbeOutcome) -> String {
    match outcome {
        LoginProbeOutcome::VerificationRequired {
            requires_verification,
            user_id,
            email,
        } => format!(
            "Login pending verification (requiresVerification: {})\n  userId: {}\n  email: {}",
            requires_verification, user_id, email
        ),
        LoginProbeOutcome::Success { user } => {
            let pretty =
                serde_json::to_string_pretty(user).unwrap_or_else(|_| user.to_string());
            format!("Login succeeded, user:\n{}", pretty)
        }
        LoginProbeOutcome::Failure { message } => format!("Login failed: {}", message),
    }
}
