//! HTTP header name constants.
//!
//! Headers read from the page response, either reported verbatim or fed into
//! classifiers.

/// Server header (identifies server software, input to cloud detection)
pub const HEADER_SERVER: &str = "server";
/// Proxy-Authorization header
pub const HEADER_PROXY_AUTHORIZATION: &str = "proxy-authorization";
/// X-Powered-By header (server-side framework)
pub const HEADER_X_POWERED_BY: &str = "x-powered-by";
/// Via header (proxies and gateways)
pub const HEADER_VIA: &str = "via";
/// WWW-Authenticate header (auth required)
pub const HEADER_WWW_AUTHENTICATE: &str = "www-authenticate";
/// Set-Cookie header (cookie counting)
pub const HEADER_SET_COOKIE: &str = "set-cookie";
