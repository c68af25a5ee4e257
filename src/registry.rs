//! Simulated registry data.
//!
//! Everything a real analyzer would fetch from the network (WHOIS, DNS,
//! TLS, geolocation, port scans) is generated here with a pseudo-random
//! source instead. The provider is injected into the analyzer so that the
//! evaluation itself stays a pure function of the URL plus the provider's
//! output, and tests can seed the generator for reproducible reports.

use crate::lists::{
    CERT_ISSUERS, COMMON_PORTS, DNS_PROVIDERS, FIREWALL_VENDORS, POWERED_BY, REGISTRARS,
    SERVER_COUNTRIES, TLS_CIPHER_SUITES, WEB_SERVERS,
};
use chrono::{Duration, Months, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Domains younger than this many days fall in the "newly created" bucket
/// the generator uses for suspicious-looking hosts.
const YOUNG_DOMAIN_CEILING: u32 = 180;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhoisInfo {
    pub registrar: String,
    pub registrant_name: String,
    pub registrant_organization: String,
    pub creation_date: String,
    pub expiry_date: String,
    pub domain_age: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfo {
    pub web_server: String,
    pub powered_by: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirewallInfo {
    pub detected: bool,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TlsHandshake {
    pub protocol: String,
    pub status: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectHop {
    pub from: String,
    pub to: String,
    pub status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonFootprint {
    pub co2_per_visit: String,
    pub cleaner_than: String,
    pub rating: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerStatus {
    pub status: String,
    pub uptime: String,
    pub response_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpSecurity {
    pub hsts: bool,
    pub content_security_policy: bool,
    pub x_frame_options: bool,
    pub x_xss_protection: bool,
    pub referrer_policy: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SslCertificateDetails {
    pub valid: bool,
    pub issuer: String,
    pub valid_from: String,
    pub valid_to: String,
    pub days_remaining: i64,
}

/// Display-only panels attached to a report. None of these fields feed
/// the verdict; domain age is the single generated value that does, and
/// it travels separately through [`RegistryDataProvider::domain_age_days`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalDetails {
    pub ip_address: String,
    pub server_location: String,
    pub ssl_certificate: String,
    pub server_header: String,
    pub x_powered_by_header: String,
    pub number_of_redirects: u32,
    pub whois_info: WhoisInfo,
    pub dnssec: String,
    pub dns_servers: Vec<String>,
    pub server_info: ServerInfo,
    pub firewall: FirewallInfo,
    pub tls_handshake: TlsHandshake,
    pub tls_cipher_suites: Vec<String>,
    pub http_headers: BTreeMap<String, String>,
    pub redirect_details: Vec<RedirectHop>,
    pub carbon_footprint: CarbonFootprint,
    pub server_status: ServerStatus,
    pub open_ports: Vec<u16>,
    pub http_security: HttpSecurity,
    pub ssl_certificate_details: SslCertificateDetails,
}

/// Source of registry-style data about a host. The analyzer owns one of
/// these; swapping the implementation swaps where the "network" facts
/// come from without touching the evaluation logic.
pub trait RegistryDataProvider {
    /// Reported age of the domain in days, or `None` when the registry
    /// has no answer. An unavailable age forces a phishing verdict.
    fn domain_age_days(&mut self, host: &str) -> Option<u32>;

    /// Display-only technical detail panels for the host.
    fn technical_details(&mut self, host: &str, uses_https: bool) -> TechnicalDetails;
}

/// Pseudo-random registry. Ages are skewed so that hosts carrying
/// phishing-flavored keywords or throwaway TLDs look young, while
/// mainstream TLDs look established, matching what a casual WHOIS sample
/// of each population would show.
#[derive(Debug, Clone)]
pub struct SimulatedRegistry {
    rng: StdRng,
}

impl Default for SimulatedRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedRegistry {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible generator for tests and the `--seed` CLI flag.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn generate_domain_age(&mut self, host: &str) -> u32 {
        if host.contains("free")
            || host.contains("login")
            || host.contains("secure")
            || host.ends_with(".xyz")
            || host.ends_with(".info")
        {
            return self.rng.gen_range(0..YOUNG_DOMAIN_CEILING);
        }

        if host.ends_with(".com")
            || host.ends_with(".org")
            || host.ends_with(".net")
            || host.ends_with(".gov")
        {
            return YOUNG_DOMAIN_CEILING + self.rng.gen_range(0..1000);
        }

        self.rng.gen_range(0..500)
    }

    fn pick(&mut self, options: &[&str]) -> String {
        options
            .choose(&mut self.rng)
            .copied()
            .unwrap_or_default()
            .to_string()
    }

    fn ip_address(&mut self) -> String {
        format!(
            "{}.{}.{}.{}",
            self.rng.gen_range(0..256),
            self.rng.gen_range(0..256),
            self.rng.gen_range(0..256),
            self.rng.gen_range(0..256)
        )
    }

    fn dns_servers(&mut self) -> Vec<String> {
        let count = self.rng.gen_range(2..=3);
        (0..count).map(|_| self.pick(DNS_PROVIDERS)).collect()
    }

    fn server_info(&mut self) -> ServerInfo {
        ServerInfo {
            web_server: self.pick(WEB_SERVERS),
            powered_by: self.pick(POWERED_BY),
        }
    }

    fn firewall(&mut self) -> FirewallInfo {
        let detected = self.rng.gen_bool(0.7);
        FirewallInfo {
            name: if detected {
                self.pick(FIREWALL_VENDORS)
            } else {
                "None Detected".to_string()
            },
            detected,
        }
    }

    fn tls_handshake(&mut self) -> TlsHandshake {
        let time = 100 + 50 * self.rng.gen_range(0..6);
        TlsHandshake {
            protocol: self.pick(&["TLSv1.2", "TLSv1.3"]),
            status: self.pick(&["Successful", "Failed", "Timeout"]),
            time: format!("{}ms", time),
        }
    }

    fn cipher_suites(&mut self) -> Vec<String> {
        let count = self.rng.gen_range(2..=4);
        (0..count).map(|_| self.pick(TLS_CIPHER_SUITES)).collect()
    }

    fn http_headers(&mut self, server: &ServerInfo) -> BTreeMap<String, String> {
        let mut headers = BTreeMap::new();
        headers.insert("Server".to_string(), server.web_server.clone());
        headers.insert("X-Powered-By".to_string(), server.powered_by.clone());
        headers.insert(
            "Content-Type".to_string(),
            "text/html; charset=UTF-8".to_string(),
        );
        headers.insert(
            "Content-Encoding".to_string(),
            if self.rng.gen_bool(0.5) { "gzip" } else { "none" }.to_string(),
        );
        headers.insert(
            "Cache-Control".to_string(),
            "max-age=3600, public".to_string(),
        );
        headers.insert(
            "X-Frame-Options".to_string(),
            if self.rng.gen_bool(0.5) {
                "SAMEORIGIN"
            } else {
                "DENY"
            }
            .to_string(),
        );
        headers.insert("X-XSS-Protection".to_string(), "1; mode=block".to_string());
        headers.insert("X-Content-Type-Options".to_string(), "nosniff".to_string());
        headers.insert(
            "Strict-Transport-Security".to_string(),
            if self.rng.gen_bool(0.3) {
                "max-age=31536000; includeSubDomains"
            } else {
                "not set"
            }
            .to_string(),
        );
        headers
    }

    fn redirects(&mut self) -> Vec<RedirectHop> {
        let count = self.rng.gen_range(0..3);
        (0..count)
            .map(|i| RedirectHop {
                from: format!(
                    "http{}://example{}.com",
                    if self.rng.gen_bool(0.5) { "s" } else { "" },
                    i
                ),
                to: format!(
                    "http{}://example{}.com",
                    if self.rng.gen_bool(0.3) { "s" } else { "" },
                    i + 1
                ),
                status_code: *[301u16, 302, 307].choose(&mut self.rng).unwrap_or(&301),
            })
            .collect()
    }

    fn carbon_footprint(&mut self) -> CarbonFootprint {
        let co2 = 0.1 * self.rng.gen_range(1..=10) as f64;
        let rating = if co2 < 0.5 {
            "A"
        } else if co2 < 0.8 {
            "B"
        } else {
            "C"
        };
        CarbonFootprint {
            co2_per_visit: format!("{:.2}g", co2),
            cleaner_than: format!("{}%", self.rng.gen_range(0..100)),
            rating: rating.to_string(),
        }
    }

    fn server_status(&mut self) -> ServerStatus {
        ServerStatus {
            status: if self.rng.gen_bool(0.9) {
                "Online"
            } else {
                "Offline"
            }
            .to_string(),
            uptime: format!(
                "{}%",
                ["99.9", "99.99", "99.999", "100"]
                    .choose(&mut self.rng)
                    .unwrap_or(&"99.9")
            ),
            response_time: format!("{}ms", 100 + self.rng.gen_range(0..900)),
        }
    }

    fn open_ports(&mut self) -> Vec<u16> {
        let count = self.rng.gen_range(1..=4);
        let mut ports = vec![if self.rng.gen_bool(0.5) { 80 } else { 443 }];

        while ports.len() < count {
            let port = *COMMON_PORTS.choose(&mut self.rng).unwrap_or(&80);
            if !ports.contains(&port) {
                ports.push(port);
            }
        }

        ports.sort_unstable();
        ports
    }

    fn whois_info(&mut self, host: &str) -> WhoisInfo {
        let age = self.generate_domain_age(host);
        let today = Utc::now().date_naive();
        let creation = today - Duration::days(age as i64);
        let expiry = add_years(creation, self.rng.gen_range(1..=5));

        WhoisInfo {
            registrar: self.pick(REGISTRARS),
            registrant_name: self.privacy_shielded("John Doe"),
            registrant_organization: self.privacy_shielded("Example Organization"),
            creation_date: creation.format("%Y-%m-%d").to_string(),
            expiry_date: expiry.format("%Y-%m-%d").to_string(),
            domain_age: format!("{} days", age),
        }
    }

    fn privacy_shielded(&mut self, fallback: &str) -> String {
        if self.rng.gen_bool(0.5) {
            "Privacy Protected".to_string()
        } else {
            fallback.to_string()
        }
    }

    fn http_security(&mut self) -> HttpSecurity {
        HttpSecurity {
            hsts: self.rng.gen_bool(0.4),
            content_security_policy: self.rng.gen_bool(0.3),
            x_frame_options: self.rng.gen_bool(0.5),
            x_xss_protection: self.rng.gen_bool(0.5),
            referrer_policy: self.rng.gen_bool(0.4),
        }
    }

    fn ssl_certificate(&mut self, uses_https: bool) -> SslCertificateDetails {
        if !uses_https {
            return SslCertificateDetails {
                valid: false,
                issuer: "N/A".to_string(),
                valid_from: "N/A".to_string(),
                valid_to: "N/A".to_string(),
                days_remaining: 0,
            };
        }

        let today = Utc::now().date_naive();
        let valid_from = today - Duration::days(self.rng.gen_range(0..90));
        let valid_to = valid_from + Duration::days(90 + self.rng.gen_range(0..275));

        SslCertificateDetails {
            valid: true,
            issuer: self.pick(CERT_ISSUERS),
            valid_from: valid_from.format("%Y-%m-%d").to_string(),
            valid_to: valid_to.format("%Y-%m-%d").to_string(),
            days_remaining: (valid_to - today).num_days(),
        }
    }
}

fn add_years(date: NaiveDate, years: u32) -> NaiveDate {
    date.checked_add_months(Months::new(12 * years))
        .unwrap_or(date)
}

impl RegistryDataProvider for SimulatedRegistry {
    fn domain_age_days(&mut self, host: &str) -> Option<u32> {
        Some(self.generate_domain_age(host))
    }

    fn technical_details(&mut self, host: &str, uses_https: bool) -> TechnicalDetails {
        let server_info = self.server_info();
        let http_headers = self.http_headers(&server_info);

        TechnicalDetails {
            ip_address: self.ip_address(),
            server_location: self.pick(SERVER_COUNTRIES),
            ssl_certificate: if uses_https { "Valid" } else { "Invalid" }.to_string(),
            server_header: server_info.web_server.clone(),
            x_powered_by_header: server_info.powered_by.clone(),
            number_of_redirects: self.rng.gen_range(0..3),
            whois_info: self.whois_info(host),
            dnssec: self.pick(&["Enabled", "Disabled", "Not Configured"]),
            dns_servers: self.dns_servers(),
            server_info,
            firewall: self.firewall(),
            tls_handshake: self.tls_handshake(),
            tls_cipher_suites: self.cipher_suites(),
            http_headers,
            redirect_details: self.redirects(),
            carbon_footprint: self.carbon_footprint(),
            server_status: self.server_status(),
            open_ports: self.open_ports(),
            http_security: self.http_security(),
            ssl_certificate_details: self.ssl_certificate(uses_https),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_registry_is_reproducible() {
        let mut a = SimulatedRegistry::seeded(7);
        let mut b = SimulatedRegistry::seeded(7);

        assert_eq!(
            a.domain_age_days("example.com"),
            b.domain_age_days("example.com")
        );
        assert_eq!(
            a.technical_details("example.com", true),
            b.technical_details("example.com", true)
        );
    }

    #[test]
    fn test_suspicious_hosts_look_young() {
        let mut registry = SimulatedRegistry::seeded(1);
        for _ in 0..50 {
            let age = registry.generate_domain_age("login-secure.xyz");
            assert!(age < YOUNG_DOMAIN_CEILING);
        }
    }

    #[test]
    fn test_mainstream_tlds_look_established() {
        let mut registry = SimulatedRegistry::seeded(2);
        for _ in 0..50 {
            let age = registry.generate_domain_age("example.org");
            assert!(age >= YOUNG_DOMAIN_CEILING);
        }
    }

    #[test]
    fn test_certificate_invalid_without_https() {
        let mut registry = SimulatedRegistry::seeded(3);
        let cert = registry.ssl_certificate(false);

        assert!(!cert.valid);
        assert_eq!(cert.issuer, "N/A");
        assert_eq!(cert.days_remaining, 0);
    }

    #[test]
    fn test_certificate_valid_with_https() {
        let mut registry = SimulatedRegistry::seeded(4);
        let cert = registry.ssl_certificate(true);

        assert!(cert.valid);
        assert!(cert.days_remaining >= 0);
        assert_ne!(cert.issuer, "N/A");
    }

    #[test]
    fn test_open_ports_are_sorted_and_plausible() {
        let mut registry = SimulatedRegistry::seeded(5);
        for _ in 0..20 {
            let ports = registry.open_ports();
            assert!(!ports.is_empty() && ports.len() <= 4);
            assert!(ports.windows(2).all(|w| w[0] < w[1]));
            assert!(ports.contains(&80) || ports.contains(&443));
        }
    }

    #[test]
    fn test_details_serialize_with_original_field_names() {
        let mut registry = SimulatedRegistry::seeded(6);
        let details = registry.technical_details("example.com", true);
        let json = serde_json::to_value(&details).expect("serializable");

        assert!(json.get("ipAddress").is_some());
        assert!(json.get("whoisInfo").is_some());
        assert!(json.get("tlsCipherSuites").is_some());
        assert!(json.get("carbonFootprint").is_some());
    }
}
