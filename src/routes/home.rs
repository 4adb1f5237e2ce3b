//! Status page handler.
//!
//! Renders a single self-contained HTML page identifying the instance that
//! served the request. The page is what a deploy is verified against: seeing
//! the expected hostname confirms traffic reached the freshly provisioned
//! instance.

use axum::{extract::State, response::Html};
use tracing::instrument;

use crate::state::AppState;

/// Inline stylesheet for the gradient-background card layout.
const PAGE_STYLE: &str = "\
        body {
          font-family: Arial, sans-serif;
          max-width: 800px;
          margin: 50px auto;
          padding: 20px;
          background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
          color: white;
        }
        .container {
          background: rgba(255,255,255,0.1);
          padding: 30px;
          border-radius: 10px;
          backdrop-filter: blur(10px);
        }
        h1 { margin-top: 0; }
        .info {
          background: rgba(0,0,0,0.2);
          padding: 15px;
          border-radius: 5px;
          margin: 10px 0;
        }";

/// Status page handler.
#[instrument(name = "home::index", skip(state))]
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_page(&state.hostname))
}

/// Render the status page for the given hostname.
///
/// The hostname is inserted as literal text without HTML escaping. It is
/// operator-controlled (set by the OS/image, not by request input), so this
/// is a documented limitation rather than an injection surface.
fn render_page(hostname: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <title>AWS DevOps Demo</title>
  <style>
{style}
  </style>
</head>
<body>
  <div class="container">
    <h1>🚀 AWS CI/CD Pipeline Demo</h1>
    <div class="info">
      <strong>Instance:</strong> {hostname}
    </div>
    <div class="info">
      <strong>Status:</strong> Running
    </div>
    <div class="info">
      <strong>Deployed via:</strong> GitHub Actions + Terraform
    </div>
    <p>This app is automatically deployed to AWS using Infrastructure as Code.</p>
  </div>
</body>
</html>"#,
        style = PAGE_STYLE,
        hostname = hostname
    )
}
