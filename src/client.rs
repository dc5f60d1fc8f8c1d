use anyhow::Result;
use reqwest::{Client, header};
use tracing::{debug, warn};

use crate::config::ProbeConfig;
use crate::types::{LoginOutcome, LoginRequest, ProbeReport, extract_token};

/// Resource paths probed after a successful login, in order
pub const PROBE_PATHS: [&str; 2] = ["/crowdfundings", "/products"];

const OK_STATUS: u16 = 200;
const CREATED_STATUS: u16 = 201;

/// Transcript of one full smoke run: the login outcome plus one entry per
/// probe attempted. A rejected login leaves `probes` empty.
#[derive(Debug)]
pub struct SmokeRun {
    pub login: LoginOutcome,
    pub probes: Vec<(&'static str, Result<ProbeReport>)>,
}

pub struct KeepcomClient {
    http: Client,
    base_url: String,
    credentials: LoginRequest,
    login_preview: usize,
    probe_preview: usize,
}

impl KeepcomClient {
    pub fn new(config: &ProbeConfig) -> Result<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credentials: LoginRequest {
                username: config.username.clone(),
                password: config.password.clone(),
            },
            login_preview: config.login_preview,
            probe_preview: config.probe_preview,
        })
    }

    /// POST the credentials to `/auth/login` and classify the result.
    ///
    /// Only transport failures surface as errors; any HTTP status maps to a
    /// `LoginOutcome` variant. A 200/201 body without an `access_token`
    /// yields `Authenticated { token: None, .. }`.
    pub async fn login(&self) -> Result<LoginOutcome> {
        let url = format!("{}/auth/login", self.base_url);
        debug!(%url, username = %self.credentials.username, "sending login request");

        let response = self.http.post(&url).json(&self.credentials).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        let body_preview = preview(&body, self.login_preview);

        if status == OK_STATUS || status == CREATED_STATUS {
            let token = extract_token(&body);
            debug!(status, token_present = token.is_some(), "login accepted");
            Ok(LoginOutcome::Authenticated {
                status,
                token,
                body_preview,
            })
        } else {
            debug!(status, "login rejected");
            Ok(LoginOutcome::Rejected {
                status,
                body_preview,
            })
        }
    }

    /// GET one resource path with a bearer Authorization header.
    ///
    /// An absent token still sends the header, with an empty credential.
    /// No status is asserted; whatever comes back goes in the report.
    pub async fn probe(&self, path: &str, token: Option<&str>) -> Result<ProbeReport> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "sending probe request");

        let response = self
            .http
            .get(&url)
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", token.unwrap_or("")),
            )
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(ProbeReport {
            path: path.to_string(),
            status,
            body_preview: preview(&body, self.probe_preview),
        })
    }

    /// Run the full smoke sequence: login, gate on the outcome, then both
    /// probes. The probes are independent; a failed first probe does not
    /// stop the second.
    pub async fn run(&self) -> Result<SmokeRun> {
        let login = self.login().await?;

        let token = match &login {
            LoginOutcome::Rejected { .. } => {
                return Ok(SmokeRun {
                    login,
                    probes: Vec::new(),
                });
            }
            LoginOutcome::Authenticated { token, .. } => {
                if token.is_none() {
                    warn!(
                        "login succeeded but response had no access_token, probing with a blank token"
                    );
                }
                token.clone()
            }
        };

        let mut probes = Vec::with_capacity(PROBE_PATHS.len());
        for path in PROBE_PATHS {
            probes.push((path, self.probe(path, token.as_deref()).await));
        }

        Ok(SmokeRun { login, probes })
    }
}

/// First `limit` characters of `body`, or the whole body when shorter.
/// Cuts on character boundaries so multi-byte text never panics.
fn preview(body: &str, limit: usize) -> String {
    match body.char_indices().nth(limit) {
        Some((idx, _)) => body[..idx].to_string(),
        None => body.to_string(),
    }
}
