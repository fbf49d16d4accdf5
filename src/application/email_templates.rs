use url::Url;

const BRAND_NAME: &str = "StoryTime";

fn origin_label(app_origin: &str) -> String {
    Url::parse(app_origin)
        .ok()
        .and_then(|url| url.host_str().map(|host| host.to_string()))
        .unwrap_or_else(|| app_origin.to_string())
}

/// Escapes user-supplied values before they are interpolated into HTML.
fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
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

pub fn welcome_email(app_origin: &str, name: &str) -> (String, String) {
    let subject = format!("Welcome to {} Waitlist!", BRAND_NAME);
    let headline = "You're on the list!";
    let lead = format!(
        "Hi <strong>{}</strong>, thanks for joining the {} waitlist.",
        escape_html(name),
        BRAND_NAME
    );
    let body = "<p style=\"margin:12px 0 0;color:#374151;\">We'll email you as soon as early access opens up. No action is needed on your side.</p>";
    let reason = "you signed up for the waitlist";

    let html = wrap_email(app_origin, headline, &lead, body, reason);
    (subject, html)
}

pub fn contact_confirmation_email(app_origin: &str, name: &str) -> (String, String) {
    let subject = "We received your message".to_string();
    let headline = "Thanks for reaching out";
    let lead = format!(
        "Hi <strong>{}</strong>, your message has made it to the {} team.",
        escape_html(name),
        BRAND_NAME
    );
    let body = "<p style=\"margin:12px 0 0;color:#374151;\">We read everything that comes in and will get back to you if a reply is needed.</p>";
    let reason = "you submitted the contact form";

    let html = wrap_email(app_origin, headline, &lead, body, reason);
    (subject, html)
}

pub fn contact_notification_email(
    app_origin: &str,
    name: &str,
    email: &str,
    message: &str,
) -> (String, String) {
    let subject = format!("New contact form message from {}", name);
    let headline = "New contact form submission";
    let lead = format!(
        "<strong>{}</strong> &lt;{}&gt; sent a message through the contact form.",
        escape_html(name),
        escape_html(email)
    );
    let body = format!(
        r#"<blockquote style="margin:12px 0 0;padding:12px;background:#f3f4f6;border-radius:8px;color:#374151;white-space:pre-wrap;">{}</blockquote>"#,
        escape_html(message)
    );
    let reason = "someone used the contact form on your site";

    let html = wrap_email(app_origin, headline, &lead, &body, reason);
    (subject, html)
}

pub fn wrap_email(
    app_origin: &str,
    headline: &str,
    lead: &str,
    body_html: &str,
    reason: &str,
) -> String {
    let origin = origin_label(app_origin);
    let reason_label = "Why you got this email";
    let ignore_line = "If you didn't request this, you can safely ignore it.";
    let sent_by = "Sent by";

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <body style="background:#f8fafc;margin:0;padding:24px;font-family:Arial,Helvetica,sans-serif;">
    <div style="max-width:560px;margin:0 auto;background:#ffffff;border:1px solid #e5e7eb;border-radius:12px;padding:24px;box-shadow:0 8px 30px rgba(0,0,0,0.04);">
      <div style="font-size:12px;letter-spacing:0.08em;text-transform:uppercase;color:#6b7280;">{brand} - {origin}</div>
      <h1 style="margin:12px 0 8px;font-size:22px;color:#111827;">{headline}</h1>
      <p style="margin:0 0 12px;font-size:15px;color:#111827;line-height:1.6;">{lead}</p>
      {body_html}
      <div style="margin-top:20px;padding-top:16px;border-top:1px solid #e5e7eb;">
        <p style="margin:0 0 6px;font-size:13px;color:#4b5563;">{reason_label}: {reason}.</p>
        <p style="margin:0;font-size:13px;color:#4b5563;">{ignore_line}</p>
      </div>
      <p style="margin:14px 0 4px;font-size:12px;color:#9ca3af;">{sent_by} {brand} - {origin}</p>
    </div>
  </body>
</html>
"#,
        brand = BRAND_NAME,
        origin = origin,
        headline = headline,
        lead = lead,
        body_html = body_html,
        reason = reason,
        reason_label = reason_label,
        ignore_line = ignore_line,
        sent_by = sent_by,
    )
}
