use zenith_core::html::escape;

const STYLES: &str = r#"
  body { margin: 0; background: #05070d; color: #e5e7eb; font-family: Arial, sans-serif; }
  main { max-width: 64rem; margin: 0 auto; padding: 5rem 1rem; }
  h1, h2 { color: #39ff14; }
  .meta { color: #9ca3af; font-size: 0.875rem; margin-bottom: 1.5rem; }
  .hero { width: 100%; height: 20rem; object-fit: cover; border-radius: 1rem; border: 1px solid rgba(255,255,255,0.1); margin-bottom: 2.5rem; }
  .section { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; align-items: center; margin: 2.5rem 0; }
  .section img { width: 100%; height: 18rem; object-fit: cover; border-radius: 1rem; border: 1px solid rgba(255,255,255,0.1); }
  .narrative { color: #d1d5db; line-height: 1.7; white-space: pre-line; }
  .cta { margin-top: 3rem; text-align: center; }
  .btn-neon { display: inline-block; padding: 0.75rem 1.5rem; border: 1px solid #39ff14; color: #39ff14; border-radius: 9999px; text-decoration: none; }
  .cards { display: grid; grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr)); gap: 1.5rem; }
  .card { border: 1px solid rgba(255,255,255,0.1); border-radius: 1rem; overflow: hidden; color: inherit; text-decoration: none; }
  .card img { width: 100%; height: 10rem; object-fit: cover; }
  .card div { padding: 1rem; }
"#;

/// Wrap `body` in a full HTML document. `body` must already be escaped.
pub fn document(title: &str, description: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{title}</title>
  <meta name="description" content="{description}" />
  <style>{STYLES}</style>
</head>
<body>
<main>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
        description = escape(description),
    )
}

pub fn not_found() -> String {
    document(
        "Page not found",
        "The page you are looking for does not exist.",
        r#"<h1>Page not found</h1>
<p class="narrative">The case study you are looking for does not exist.</p>
<div class="cta"><a href="/portfolio" class="btn-neon">Back to Portfolio</a></div>"#,
    )
}
