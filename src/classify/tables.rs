//! Lookup tables consumed by the classifiers.
//!
//! `SignatureTables::default()` carries the built-in vocabulary. The tables are
//! plain immutable data handed to every classifier by reference, so tests can
//! run a classifier against a reduced or synthetic table.

use crate::fingerprint::Marker;

/// Platform name to markers; the platform is detected when any marker matches.
const CMS_SIGNATURES: &[(&str, &[&str])] = &[
    ("WordPress", &["wp-content", "wp-includes"]),
    ("Joomla", &["Joomla!"]),
    ("Drupal", &["Drupal"]),
    ("Shopify", &["shopify.com"]),
    ("Magento", &["Magento"]),
    ("Squarespace", &["squarespace.com"]),
    ("Wix", &["wix.com"]),
    ("Blogger", &["blogger.com"]),
    ("PrestaShop", &["PrestaShop"]),
    ("TYPO3", &["TYPO3"]),
    ("Bitrix", &["bitrix"]),
    ("OpenCart", &["OpenCart"]),
    ("Weebly", &["weebly.com"]),
    ("Jimdo", &["jimdo.com"]),
    ("BigCommerce", &["bigcommerce"]),
    ("vBulletin", &["vBulletin"]),
    ("WooCommerce", &["woocommerce"]),
    ("Zen Cart", &["zen-cart"]),
    ("Ghost", &["ghost.org"]),
    ("ExpressionEngine", &["ExpressionEngine", "exp:"]),
    ("SilverStripe", &["SilverStripe"]),
    ("Textpattern", &["textpattern"]),
    ("Movable Type", &["Movable Type", "mt-static"]),
    ("Concrete5", &["concrete5"]),
    ("MODX", &["MODX"]),
    ("XenForo", &["XenForo"]),
    ("Umbraco", &["umbraco"]),
    ("Duda", &["duda.co"]),
];

/// Ordered: the first provider whose substrings match the `Server` header wins.
const CLOUD_PROVIDERS: &[(&str, &[&str])] = &[
    ("Amazon Web Services (AWS)", &["aws", "amazon"]),
    ("Cloudflare", &["cloudflare"]),
    ("Google Cloud", &["gws", "google"]),
    ("Microsoft Azure", &["microsoft", "azure", "windows-azure"]),
    ("Oracle Cloud", &["oracle", "oraclecloud"]),
    ("Amazon CloudFront", &["cloudfront"]),
    ("IBM Cloud", &["ibm", "ibmcloud"]),
    ("Alibaba Cloud", &["alibaba", "aliyun"]),
    ("DigitalOcean", &["digitalocean"]),
    ("Heroku", &["heroku"]),
    ("Rackspace", &["rackspace"]),
    ("Akamai", &["akamai"]),
];

const DEPRECATED_TAGS: &[&str] = &[
    "applet", "basefont", "center", "dir", "font", "frame", "frameset", "noframes", "isindex",
    "strike", "u", "bgsound", "big", "blink", "marquee", "spacer", "tt", "xmp", "acronym", "menu",
];

const DEPRECATED_SCRIPT_APIS: &[&str] = &[
    "document.write",
    "alert",
    "escape",
    "unescape",
    "eval",
    "captureEvents",
    "releaseEvents",
    "getYear",
    "setYear",
    "sync",
    "atob",
    "btoa",
    "showModalDialog",
];

const LOGIN_INDICATORS: &[&str] = &["login", "sign in", "sign up", "username", "password"];

const CONTENT_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "E-commerce",
        &["shop", "purchase", "cart", "ecommerce", "store", "checkout"],
    ),
    (
        "Blog/News",
        &["blog", "article", "post", "news", "write-up", "editorial", "commentary"],
    ),
    (
        "Corporate/Business",
        &[
            "contact", "about us", "services", "corporate", "business", "company",
            "professional", "client",
        ],
    ),
    (
        "Educational/Institutional",
        &[
            "course", "academy", "education", "research", "curriculum", "syllabus",
            "institute", "university", "school",
        ],
    ),
    (
        "Entertainment",
        &[
            "entertainment", "movie", "music", "game", "celebrity", "show", "performance",
            "theatre",
        ],
    ),
    (
        "Technology",
        &[
            "tech", "gadget", "software", "hardware", "device", "computer", "programming",
            "development",
        ],
    ),
    (
        "Health and Wellness",
        &[
            "health", "wellness", "medical", "fitness", "nutrition", "exercise", "yoga",
            "meditation",
        ],
    ),
    (
        "Non-profit/Charity",
        &[
            "non-profit", "charity", "donate", "volunteer", "cause", "fundraise", "ngo",
            "nonprofit",
        ],
    ),
    (
        "Personal/Portfolio",
        &[
            "portfolio", "personal", "resume", "cv", "bio", "hobby", "my work", "projects",
        ],
    ),
    (
        "Forums/Community",
        &["forum", "discussion", "community", "thread", "board", "member", "topic"],
    ),
];

/// Category reported when no keyword matches.
pub const DEFAULT_CONTENT_CATEGORY: &str = "General Information";

const TRACKED_INPUT_TYPES: &[&str] = &["text", "password", "submit", "checkbox", "radio"];

/// Substring marking an inline script as issuing AJAX requests.
const AJAX_MARKER: &str = "XMLHttpRequest";

/// A label with the evidence that selects it.
#[derive(Debug, Clone)]
pub struct PlatformSignature {
    pub name: String,
    pub markers: Vec<Marker>,
}

/// A label with lower-case keywords (substring match).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    pub name: String,
    pub keywords: Vec<String>,
}

/// Every lookup table used by the classifiers.
#[derive(Debug, Clone)]
pub struct SignatureTables {
    pub cms_platforms: Vec<PlatformSignature>,
    /// Ordered; first match wins
    pub cloud_providers: Vec<KeywordSet>,
    pub deprecated_tags: Vec<String>,
    pub deprecated_script_apis: Vec<String>,
    pub login_indicators: Vec<String>,
    pub content_categories: Vec<KeywordSet>,
    pub default_content_category: String,
    pub tracked_input_types: Vec<String>,
    pub ajax_marker: String,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn keyword_sets(table: &[(&str, &[&str])]) -> Vec<KeywordSet> {
    table
        .iter()
        .map(|(name, keywords)| KeywordSet {
            name: name.to_string(),
            keywords: owned(keywords),
        })
        .collect()
}

impl Default for SignatureTables {
    fn default() -> Self {
        Self {
            cms_platforms: CMS_SIGNATURES
                .iter()
                .map(|(name, markers)| PlatformSignature {
                    name: name.to_string(),
                    markers: markers.iter().map(|m| Marker::new(m)).collect(),
                })
                .collect(),
            cloud_providers: keyword_sets(CLOUD_PROVIDERS),
            deprecated_tags: owned(DEPRECATED_TAGS),
            deprecated_script_apis: owned(DEPRECATED_SCRIPT_APIS),
            login_indicators: owned(LOGIN_INDICATORS),
            content_categories: keyword_sets(CONTENT_CATEGORIES),
            default_content_category: DEFAULT_CONTENT_CATEGORY.to_string(),
            tracked_input_types: owned(TRACKED_INPUT_TYPES),
            ajax_marker: AJAX_MARKER.to_string(),
        }
    }
}
