// Shared test helpers: mock site content and configuration.

use std::path::Path;

use httptest::{matchers::*, responders::*, Expectation, Server};

use site_recon::Config;

/// A small WordPress-flavoured page exercising most classifiers.
#[allow(dead_code)] // Used by other test files
pub const SAMPLE_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Corner Bakery</title>
  <meta name="generator" content="WordPress 6.4.2">
  <link rel="stylesheet" href="/wp-content/themes/bakery/style.css">
  <script src="/wp-includes/js/jquery/jquery.min.js"></script>
  <script src="https://www.googletagmanager.com/gtm.js?id=GTM-XXXX"></script>
  <script>var xhr = new XMLHttpRequest(); xhr.open('GET', '/wp-content/api');</script>
</head>
<body>
  <center>Fresh bread daily</center>
  <p>Visit our shop for cakes and pastries.</p>
  <form action="/login">
    <input type="text" name="username">
    <input type="password" name="password">
    <button type="submit">Sign in</button>
  </form>
</body>
</html>"#;

pub const SAMPLE_SITEMAP: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url><loc>https://bakery.example/</loc></url>
  <url><loc>https://bakery.example/menu</loc></url>
  <url><loc>https://bakery.example/contact</loc></url>
</urlset>"#;

/// Serves `SAMPLE_PAGE` at `/` and `SAMPLE_SITEMAP` at `/sitemap.xml`, once each.
#[allow(dead_code)] // Used by other test files
pub fn serve_sample_site(server: &Server) {
    server.expect(
        Expectation::matching(request::method_path("GET", "/")).respond_with(
            status_code(200)
                .append_header("Content-Type", "text/html; charset=utf-8")
                .append_header("Server", "nginx")
                .append_header("X-Powered-By", "PHP/8.2.1")
                .append_header("Set-Cookie", "session=abc; Path=/")
                .body(SAMPLE_PAGE),
        ),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/sitemap.xml")).respond_with(
            status_code(200)
                .append_header("Content-Type", "application/xml")
                .body(SAMPLE_SITEMAP),
        ),
    );
}

/// Config writing into `dir` with a short timeout.
#[allow(dead_code)] // Used by other test files
pub fn test_config(dir: &Path) -> Config {
    Config {
        output_dir: dir.to_path_buf(),
        timeout_seconds: 10,
        ..Default::default()
    }
}

/// A local port with nothing listening on it.
#[allow(dead_code)] // Used by other test files
pub fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    port
}
