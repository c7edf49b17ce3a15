use serde_json::json;

use crate::config::VapiCredentials;

const HEAD_END: &str = "</head>";

/// Builds the `<script>` block that defines `window.VAPI_CONFIG`.
///
/// Values are JSON-encoded and every `</` is written as `<\/`, so neither
/// quotes nor a closing tag inside a value can break out of the script.
pub fn vapi_config_script(credentials: &VapiCredentials) -> String {
    let config = json!({
        "assistantId": credentials.assistant_id,
        "publicKey": credentials.public_key,
    });
    let literal = config.to_string().replace("</", "<\\/");
    format!(
        "  <!-- Vapi configuration injected at the edge (keys are not in source) -->\n  <script>window.VAPI_CONFIG = {};</script>\n",
        literal
    )
}

/// Inserts the config script before the first `</head>`. Pages without a
/// head end marker come back unchanged.
pub fn inject_vapi_config(html: &str, credentials: &VapiCredentials) -> String {
    if !html.contains(HEAD_END) {
        tracing::warn!("alex.html has no </head>, serving it without Vapi config");
        return html.to_string();
    }
    let replacement = format!("{}{}", vapi_config_script(credentials), HEAD_END);
    html.replacen(HEAD_END, &replacement, 1)
}
