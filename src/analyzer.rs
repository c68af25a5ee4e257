//! The evaluation pass: normalize the URL, run the syntax checks, pull
//! registry data from the injected provider, aggregate, decide.

use crate::config::Config;
use crate::indicators::SyntaxChecks;
use crate::registry::{RegistryDataProvider, SimulatedRegistry};
use crate::report::{Findings, UrlReport, Verdict};

/// Shown to callers whenever the input cannot be parsed down to a host.
/// This is the analyzer's only failure mode.
const ANALYSIS_ERROR: &str = "Failed to analyze URL";

pub struct UrlAnalyzer<P> {
    checks: SyntaxChecks,
    provider: P,
    config: Config,
}

impl UrlAnalyzer<SimulatedRegistry> {
    pub fn new(config: Config) -> Self {
        Self::with_provider(SimulatedRegistry::new(), config)
    }

    /// Analyzer whose simulated registry data is reproducible.
    pub fn seeded(seed: u64, config: Config) -> Self {
        Self::with_provider(SimulatedRegistry::seeded(seed), config)
    }
}

impl Default for UrlAnalyzer<SimulatedRegistry> {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<P: RegistryDataProvider> UrlAnalyzer<P> {
    pub fn with_provider(provider: P, config: Config) -> Self {
        Self {
            checks: SyntaxChecks::new(&config.extra_suspicious_tokens),
            provider,
            config,
        }
    }

    /// Evaluate one URL. Total: parse failures come back as an
    /// `AnalysisFailed` report rather than an error.
    pub fn analyze(&mut self, raw_url: &str) -> UrlReport {
        let normalized = normalize_scheme(raw_url);

        let host = match extract_host(&normalized) {
            Some(host) => host.to_string(),
            None => {
                log::debug!("no host in {:?}", raw_url);
                return UrlReport::failed(raw_url, ANALYSIS_ERROR);
            }
        };

        let has_invalid_characters = self.checks.has_invalid_characters(&normalized);
        let has_suspicious_characters = self.checks.has_suspicious_characters(&normalized);
        let number_of_subdomains = SyntaxChecks::subdomain_count(&host);
        let has_too_many_subdomains = SyntaxChecks::has_too_many_subdomains(&host);
        let has_ip_address_in_url = self.checks.is_ip_literal(&host);
        let uses_https = normalized.starts_with("https");

        let domain_age_days = self.provider.domain_age_days(&host);
        let is_newly_created_domain = domain_age_days
            .map(|age| age < self.config.newly_created_threshold_days)
            .unwrap_or(false);
        let is_free_hosting_platform = self.checks.first_token_match(&host).is_some();

        let risk_indicator_count = [
            has_invalid_characters,
            has_suspicious_characters,
            has_too_many_subdomains,
            has_ip_address_in_url,
            !uses_https,
            is_newly_created_domain,
            is_free_hosting_platform,
        ]
        .iter()
        .filter(|&&triggered| triggered)
        .count() as u32;

        let url_token_hit = self.checks.first_token_match(&normalized);
        let verdict = if risk_indicator_count >= self.config.phishing_indicator_threshold
            || url_token_hit.is_some()
            || domain_age_days.is_none()
        {
            Verdict::Phishing
        } else {
            Verdict::NotPhishing
        };

        log::debug!(
            "{}: {} indicators triggered, verdict {:?}",
            host,
            risk_indicator_count,
            verdict
        );
        if let Some(token) = url_token_hit {
            log::debug!("{}: suspicious token {:?}", host, token);
        }

        let details = self.provider.technical_details(&host, uses_https);

        UrlReport {
            url: raw_url.to_string(),
            verdict,
            error: None,
            findings: Some(Findings {
                has_invalid_characters,
                has_suspicious_characters,
                number_of_subdomains,
                has_too_many_subdomains,
                has_ip_address_in_url,
                uses_https,
                domain_age_days,
                is_newly_created_domain,
                is_free_hosting_platform,
                risk_indicator_count,
                risk_percentage: Findings::risk_percentage(risk_indicator_count),
            }),
            details: Some(details),
        }
    }
}

/// Scheme-less input is treated as HTTPS, matching how a browser address
/// bar would complete it.
fn normalize_scheme(raw_url: &str) -> String {
    if raw_url.starts_with("http://") || raw_url.starts_with("https://") {
        raw_url.to_string()
    } else {
        format!("https://{}", raw_url)
    }
}

/// Pull the authority's host out of the URL by hand: the text between
/// `://` and the first `/`, `?` or `#`, minus any userinfo and port.
/// The host comes back exactly as written in the input, so dotted-quad
/// lookalikes like `999.999.999.999` or `192.168.1` hit the IP-literal
/// regex without being canonicalized or range-checked first.
fn extract_host(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once("://")?;
    let authority = rest.split(|c| c == '/' || c == '?' || c == '#').next()?;
    let host_port = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host)| host);
    let host = host_port.split(':').next()?;
    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}
