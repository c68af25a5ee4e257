//! Static lookup tables used by the syntax checks and the simulated
//! registry. Loaded once, never mutated.

/// Substrings associated with free hosting platforms, throwaway TLDs and
/// other low-trust URL tokens. A hit anywhere in the URL is treated as a
/// suspicious-token match; a hit in the host marks the domain as hosted on
/// a free platform.
pub const SUSPICIOUS_TOKENS: &[&str] = &[
    "freewebhostmost.com",
    "000webhost.com",
    "x10hosting.com",
    "weebly.com",
    "vercel.app",
    "netlify.com",
    ".monster",
    ".top",
    ".pro",
    "-com",
    "com.",
    ".solutions",
    ".playtest",
    "communmutty",
    "comunutty",
    ".vip",
    ".ww",
    "fsthosting",
    ".tw",
    ".de",
    ".legal",
    ".kg",
    ".n1",
    ".store",
    "firebaseapp",
    ".bond",
    ".br",
    "bj",
    "hstn",
    ".asp",
    ".gd",
    ".r2",
    ".mx",
    ".fr",
    "gcbt",
    "comcom",
    "-sale",
    ".leia",
    ".beta",
    ".cn",
    ".ca",
    "=phi",
    ".web",
    ".center",
    ".centre",
    ".shop",
    "m.s",
    "com-info",
    "-lg",
    "cp.",
    "hn.pn",
    ".run",
    ".es",
    ".click",
    "-binance",
    ".webflow",
    ".jp",
    "-cdn",
    ".cdn",
    ".sso",
    "-sso",
    ".msde",
    "-fi",
    ".p7ah",
    "net-",
    "-net",
    ".ubpages",
    "i.m",
    ".pagemaker",
    "_uc",
    ".gy",
    "/d/e/",
    "/gmx",
    ".p",
    "aspmx.",
    ".aspmx",
    "m.",
    ".m",
    ".vpn",
    "vpn.",
    ".cfd",
    "-cse.",
    "/accueil",
    ".intttc",
    ".p250w",
    ".work",
    ".im",
    ".community",
    "-bless.",
    ".ys7z",
    ".doom",
    "-lala.",
    ".bless",
    "-steam.",
    ".concord",
    "-bonus",
    ".wall",
    "0steam.",
    ".com.co",
    "ycc.com",
    ",wp",
    "/przyciski",
    "/fr/",
    ".devr",
    "-iossa.",
    "-luigi-",
    "-luigi",
    ".luigi",
    ".lma",
    ".nz",
    "device.",
    "/for",
    "yee.",
    "-usa.",
    "/ncp/",
    ".dk",
    ".md",
    ".pp-al",
    ".my",
    ".ro",
    ".it",
    ".firebaseapp",
    "-io",
    "app.",
    "-nft",
    "-gpt-",
    ".log",
    ".dog",
    "swhm.",
    ".swhm",
    ".ac1360",
    "token.",
    "sea.",
    ".gbjslyhr",
    ".help",
    "-be.",
    "-seguro.",
    "-suspenso.",
    ".3ds-",
    ".portal",
    ".account",
    ".admin",
    ".ru",
    "ftp.",
];

/// Characters that should never appear in a well-formed URL.
pub const INVALID_URL_CHARS: &[char] = &[
    '<', '>', '"', '{', '}', '|', '\\', '^', '[', ']', '`', ' ',
];

/// Characters that are legal in URLs but rare outside of obfuscation
/// attempts.
pub const SUSPICIOUS_CHARS: &[char] = &[
    ' ', '<', '>', '_', '$', '^', '*', '{', '}', '[', ']', '|', '"', '`',
];

pub const DNS_PROVIDERS: &[&str] = &[
    "ns1.cloudflare.com",
    "ns2.cloudflare.com",
    "ns1.google.com",
    "ns2.google.com",
    "ns1.amazon.com",
    "ns2.amazon.com",
    "ns1.godaddy.com",
    "ns2.godaddy.com",
];

pub const TLS_CIPHER_SUITES: &[&str] = &[
    "TLS_AES_128_GCM_SHA256",
    "TLS_AES_256_GCM_SHA384",
    "TLS_CHACHA20_POLY1305_SHA256",
    "ECDHE-ECDSA-AES128-GCM-SHA256",
    "ECDHE-RSA-AES128-GCM-SHA256",
    "ECDHE-ECDSA-AES256-GCM-SHA384",
    "ECDHE-RSA-AES256-GCM-SHA384",
];

pub const REGISTRARS: &[&str] = &[
    "GoDaddy.com, LLC",
    "Namecheap, Inc.",
    "Amazon Registrar, Inc.",
    "Google LLC",
    "Cloudflare, Inc.",
];

pub const CERT_ISSUERS: &[&str] = &[
    "Let's Encrypt Authority X3",
    "DigiCert SHA2 Secure Server CA",
    "Cloudflare Inc ECC CA-3",
    "Amazon",
];

pub const FIREWALL_VENDORS: &[&str] = &["Cloudflare", "AWS WAF", "Sucuri", "Imperva"];

pub const WEB_SERVERS: &[&str] = &[
    "Apache/2.4.41",
    "nginx/1.18.0",
    "Microsoft-IIS/10.0",
    "LiteSpeed/5.4.1",
];

pub const POWERED_BY: &[&str] = &["PHP/7.4.3", "PHP/8.0.13", "PHP/8.1.2", "Not Detected"];

pub const SERVER_COUNTRIES: &[&str] = &[
    "United States",
    "Russia",
    "China",
    "Netherlands",
    "Germany",
    "France",
    "United Kingdom",
    "Canada",
];

pub const COMMON_PORTS: &[u16] = &[21, 22, 25, 53, 80, 443, 3306, 8080, 8443];
