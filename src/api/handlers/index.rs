use axum::{extract::State, response::Html};
use std::sync::Arc;

use super::status::SERVICE_NAME;
use crate::api::AppState;
use crate::config::{Config, defaults};

const STYLE: &str = r#"
      body { font-family: Arial, sans-serif; margin: 40px; background: #f5f5f5; }
      .container { max-width: 800px; margin: 0 auto; background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
      h1 { color: #333; border-bottom: 2px solid #007acc; padding-bottom: 10px; }
      .status { background: #e8f5e8; padding: 15px; border-radius: 5px; margin: 20px 0; }
      .info { background: #e8f4fd; padding: 15px; border-radius: 5px; margin: 20px 0; }
      .service { margin: 10px 0; padding: 10px; background: #f8f9fa; border-left: 4px solid #007acc; }
      a { color: #007acc; text-decoration: none; }
      a:hover { text-decoration: underline; }
"#;

const SERVICES: &str = r#"
      <h2>📧 Email Services</h2>

      <div class="service">
        <strong>IMAP Server:</strong> Port 143 (993 for SSL)<br>
        <em>For reading emails</em>
      </div>

      <div class="service">
        <strong>POP3 Server:</strong> Port 110 (995 for SSL)<br>
        <em>For downloading emails</em>
      </div>

      <div class="service">
        <strong>SMTP Server:</strong> Port 25, 587<br>
        <em>For sending emails</em>
      </div>

      <div class="service">
        <strong>Webmail Interface:</strong> <a href="http://localhost:3000" target="_blank">Port 3000</a><br>
        <em>Web-based email client</em>
      </div>

      <h2>🔗 API Endpoints</h2>
      <ul>
        <li><a href="/health">/health</a> - Health check</li>
        <li><a href="/status">/status</a> - Service status</li>
      </ul>

      <div class="info">
        <strong>📚 Documentation:</strong> <a href="https://github.com/zone-eu/wildduck-dockerized" target="_blank">GitHub Repository</a>
      </div>
"#;

/// GET /
///
/// Static landing page describing the mail suite.
pub async fn index_page(State(state): State<Arc<AppState>>) -> Html<String> {
    tracing::debug!("/ rendering landing page");
    Html(render_page(&state.config))
}

pub(crate) fn render_page(config: &Config) -> String {
    let domain = escape_html(config.domain_or(defaults::NOT_CONFIGURED));
    let hostname = escape_html(config.hostname_or(defaults::NOT_CONFIGURED));
    let environment = escape_html(&config.environment);

    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>{SERVICE_NAME}</title>
    <style>{STYLE}    </style>
  </head>
  <body>
    <div class="container">
      <h1>🦆 {SERVICE_NAME}</h1>

      <div class="status">
        <strong>✅ Service Status:</strong> Running on Railway
      </div>

      <div class="info">
        <strong>🌐 Domain:</strong> {domain}<br>
        <strong>🏠 Hostname:</strong> {hostname}<br>
        <strong>🔧 Environment:</strong> {environment}
      </div>
{SERVICES}    </div>
  </body>
</html>
"#
    )
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
