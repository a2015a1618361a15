//! Built-in fingerprint ruleset.
//!
//! A compact, curated subset of the community Wappalyzer rules covering the
//! technologies most often seen on the public web. Category names follow the
//! builtwith naming (`web-servers`, `cdn`, `cms`, ...).

use super::models::Technology;

pub fn builtin_technologies() -> Vec<Technology> {
    vec![
        // web-servers
        Technology::new("Nginx", "web-servers").header("server", r"(?i)nginx"),
        Technology::new("OpenResty", "web-servers")
            .header("server", r"(?i)openresty")
            .implies("Nginx"),
        Technology::new("Apache HTTP Server", "web-servers").header("server", r"(?i)apache"),
        Technology::new("Microsoft IIS", "web-servers").header("server", "Microsoft-IIS"),
        Technology::new("LiteSpeed", "web-servers").header("server", r"(?i)litespeed"),
        Technology::new("Caddy", "web-servers").header("server", r"^Caddy$"),
        // cdn
        Technology::new("Cloudflare", "cdn")
            .header("server", r"(?i)cloudflare")
            .header("cf-ray", ""),
        Technology::new("Amazon CloudFront", "cdn")
            .header("via", r"(?i)cloudfront")
            .header("x-amz-cf-id", ""),
        Technology::new("Fastly", "cdn")
            .header("x-fastly-request-id", "")
            .header("x-served-by", r"^cache-"),
        Technology::new("Akamai", "cdn").header("x-akamai-transformed", ""),
        Technology::new("jsDelivr", "cdn").script(r"cdn\.jsdelivr\.net"),
        Technology::new("cdnjs", "cdn").script(r"cdnjs\.cloudflare\.com"),
        // programming-languages
        Technology::new("PHP", "programming-languages")
            .header("x-powered-by", r"(?i)php")
            .cookie("PHPSESSID", ""),
        Technology::new("Java", "programming-languages").cookie("JSESSIONID", ""),
        Technology::new("Node.js", "programming-languages"),
        Technology::new("Ruby", "programming-languages"),
        Technology::new("Python", "programming-languages"),
        // web-frameworks
        Technology::new("ASP.NET", "web-frameworks")
            .header("x-powered-by", r"^ASP\.NET")
            .header("x-aspnet-version", "")
            .cookie("ASP.NET_SessionId", ""),
        Technology::new("Express", "web-frameworks")
            .header("x-powered-by", r"^Express$")
            .implies("Node.js"),
        Technology::new("Laravel", "web-frameworks")
            .cookie("laravel_session", "")
            .implies("PHP"),
        Technology::new("Django", "web-frameworks")
            .cookie("django_language", "")
            .html(r"csrfmiddlewaretoken")
            .implies("Python"),
        Technology::new("Ruby on Rails", "web-frameworks")
            .meta("csrf-param", r"^authenticity_token$")
            .header("x-runtime", r"^[\d.]+$")
            .implies("Ruby"),
        Technology::new("Next.js", "web-frameworks")
            .header("x-powered-by", r"^Next\.js")
            .script(r"/_next/static/")
            .implies("React"),
        Technology::new("Nuxt.js", "web-frameworks")
            .script(r"/_nuxt/")
            .implies("Vue.js"),
        // javascript-frameworks
        Technology::new("React", "javascript-frameworks")
            .html("data-reactroot")
            .script(r"react(?:-dom)?(?:\.production)?(?:\.min)?\.js"),
        Technology::new("Vue.js", "javascript-frameworks")
            .html(r"data-v-[0-9a-f]{8}")
            .script(r"vue(?:\.runtime)?(?:\.min)?\.js"),
        Technology::new("Angular", "javascript-frameworks").html(r#"ng-version=""#),
        Technology::new("AngularJS", "javascript-frameworks")
            .html("ng-app")
            .script(r"angular(?:\.min)?\.js"),
        // javascript-libraries
        Technology::new("jQuery", "javascript-libraries").script(r"jquery(?:[-.][\d.]+)?(?:\.min)?\.js"),
        Technology::new("Lodash", "javascript-libraries").script(r"lodash(?:\.min)?\.js"),
        // ui-frameworks
        Technology::new("Bootstrap", "ui-frameworks")
            .script(r"bootstrap(?:\.bundle)?(?:\.min)?\.js")
            .html(r"bootstrap(?:\.min)?\.css"),
        Technology::new("Tailwind CSS", "ui-frameworks").html(r"tailwind(?:\.min)?\.css"),
        // cms
        Technology::new("WordPress", "cms")
            .meta("generator", r"^WordPress")
            .html("/wp-content/")
            .script("/wp-includes/")
            .implies("PHP"),
        Technology::new("Drupal", "cms")
            .meta("generator", r"^Drupal")
            .header("x-drupal-cache", "")
            .header("x-generator", r"^Drupal")
            .implies("PHP"),
        Technology::new("Joomla", "cms")
            .meta("generator", "Joomla")
            .implies("PHP"),
        Technology::new("Ghost", "cms").meta("generator", r"^Ghost"),
        Technology::new("Wix", "cms")
            .meta("generator", "Wix.com")
            .header("x-wix-request-id", ""),
        Technology::new("Squarespace", "cms").html("static1.squarespace.com"),
        Technology::new("Hugo", "cms").meta("generator", r"^Hugo"),
        Technology::new("TYPO3", "cms")
            .meta("generator", "TYPO3")
            .implies("PHP"),
        // ecommerce
        Technology::new("Shopify", "ecommerce")
            .header("x-shopid", "")
            .script("cdn.shopify.com"),
        Technology::new("WooCommerce", "ecommerce")
            .html("woocommerce")
            .implies("WordPress"),
        Technology::new("Magento", "ecommerce")
            .cookie("X-Magento-Vary", "")
            .html("Mage.Cookies")
            .implies("PHP"),
        Technology::new("BigCommerce", "ecommerce").script("bigcommerce.com"),
        Technology::new("PrestaShop", "ecommerce")
            .meta("generator", "PrestaShop")
            .implies("PHP"),
        // analytics
        Technology::new("Google Analytics", "analytics")
            .script(r"google-analytics\.com/(?:ga|urchin|analytics)\.js")
            .script(r"googletagmanager\.com/gtag/js"),
        Technology::new("Hotjar", "analytics").script("static.hotjar.com"),
        Technology::new("Matomo", "analytics").script(r"(?:matomo|piwik)\.js"),
        // tag-managers
        Technology::new("Google Tag Manager", "tag-managers")
            .script(r"googletagmanager\.com/gtm\.js")
            .html("googletagmanager.com/ns.html"),
        // font-scripts
        Technology::new("Google Font API", "font-scripts").html("fonts.googleapis.com"),
        Technology::new("Font Awesome", "font-scripts").html(r"font-?awesome"),
    ]
}
