//! Interstitial page module
//!
//! Renders the "leaving this app" confirmation document shown before a user
//! is forwarded to an external destination.

use crate::http::escape::escape_html;

/// Render the confirmation document for a destination
///
/// Both the destination and the source label are escaped here before
/// embedding. Validation is the caller's job: the destination must already
/// have passed the scheme-prefix check, since this function will happily
/// render whatever it is given.
pub fn render(destination: &str, source_label: &str) -> String {
    let safe_destination = escape_html(destination);
    let safe_source_label = escape_html(source_label);

    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>Continue</title>
    <style>
      body {{
        margin: 0;
        min-height: 100vh;
      }}

      main {{
        width: min(640px, calc(100vw - 32px));
        margin: 40px auto;
        padding: 16px;
      }}

      .destination {{
        margin: 12px 0;
        overflow-wrap: anywhere;
      }}

      .actions {{
        display: flex;
        gap: 10px;
      }}
    </style>
  </head>
  <body>
    <main>
      <h1>Leaving this app</h1>
      <p>Source: {safe_source_label}</p>
      <p>Destination:</p>
      <p class="destination">{safe_destination}</p>
      <div class="actions">
        <a href="{safe_destination}" rel="noopener noreferrer">Continue</a>
        <a href="/">Cancel</a>
      </div>
    </main>
  </body>
</html>"#
    )
}
