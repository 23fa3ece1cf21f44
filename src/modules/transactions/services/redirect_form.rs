use crate::modules::transactions::models::PayfastValues;

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render an HTML page that auto-submits `values` to `action_url`
///
/// Empty values are omitted, matching what the signature covers.
pub fn render_redirect_form(action_url: &str, values: &PayfastValues) -> String {
    let inputs: String = values
        .fields()
        .filter(|(_, value)| !value.is_empty())
        .map(|(name, value)| {
            format!(
                "    <input type=\"hidden\" name=\"{}\" value=\"{}\"/>\n",
                name,
                escape_html(value)
            )
        })
        .collect();

    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html>\n",
            "<body onload=\"document.forms[0].submit()\">\n",
            "<form method=\"post\" action=\"{action}\">\n",
            "{inputs}",
            "    <noscript><button type=\"submit\">Continue to PayFast</button></noscript>\n",
            "</form>\n",
            "</body>\n",
            "</html>\n"
        ),
        action = escape_html(action_url),
        inputs = inputs
    )
}
