//! Report model and text rendering.
//!
//! `UrlReport` is the only thing the analyzer hands out. Field names
//! serialize in camelCase so the JSON output matches the record shape the
//! original web frontend consumed.

use crate::registry::TechnicalDetails;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of heuristic indicators that feed the aggregate percentage.
pub const TOTAL_INDICATORS: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Phishing,
    NotPhishing,
    AnalysisFailed,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Verdict::Phishing => "Phishing attack detected",
            Verdict::NotPhishing => "No phishing attack detected",
            Verdict::AnalysisFailed => "Analysis failed",
        };
        write!(f, "{}", text)
    }
}

/// The seven boolean heuristics plus their derived aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Findings {
    pub has_invalid_characters: bool,
    pub has_suspicious_characters: bool,
    pub number_of_subdomains: u32,
    pub has_too_many_subdomains: bool,
    pub has_ip_address_in_url: bool,
    pub uses_https: bool,
    pub domain_age_days: Option<u32>,
    pub is_newly_created_domain: bool,
    pub is_free_hosting_platform: bool,
    pub risk_indicator_count: u32,
    pub risk_percentage: u8,
}

impl Findings {
    /// Percentage of triggered indicators, rounded to the nearest whole
    /// percent and clamped to [0, 100].
    pub fn risk_percentage(triggered: u32) -> u8 {
        let pct = (100.0 * triggered as f64 / TOTAL_INDICATORS as f64).round();
        pct.clamp(0.0, 100.0) as u8
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlReport {
    pub url: String,
    pub verdict: Verdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub findings: Option<Findings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<TechnicalDetails>,
}

impl UrlReport {
    /// Failure record: no indicators are asserted either way, only the
    /// error text and the failed verdict are carried.
    pub fn failed(url: &str, error: impl Into<String>) -> Self {
        Self {
            url: url.to_string(),
            verdict: Verdict::AnalysisFailed,
            error: Some(error.into()),
            findings: None,
            details: None,
        }
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn score_bar(percentage: u8) -> String {
    let filled = (percentage as usize * 20) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(20 - filled))
}

/// Render a report the way the web frontend laid it out: verdict banner,
/// score bar, one pass/fail row per indicator, then the technical detail
/// panels. Absent values render as "Unknown" rather than being dropped.
pub fn render_text(report: &UrlReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("URL: {}\n", report.url));
    out.push_str(&format!("Verdict: {}\n", report.verdict));

    if let Some(error) = &report.error {
        out.push_str(&format!("Error: {}\n", error));
        return out;
    }

    let findings = match &report.findings {
        Some(findings) => findings,
        None => {
            out.push_str("Findings: Unknown\n");
            return out;
        }
    };

    out.push_str(&format!(
        "Risk: {} {}% ({} of {} indicators)\n",
        score_bar(findings.risk_percentage),
        findings.risk_percentage,
        findings.risk_indicator_count,
        TOTAL_INDICATORS,
    ));

    out.push_str("Indicators:\n");
    out.push_str(&format!(
        "  invalid characters:      {}\n",
        yes_no(findings.has_invalid_characters)
    ));
    out.push_str(&format!(
        "  suspicious characters:   {}\n",
        yes_no(findings.has_suspicious_characters)
    ));
    out.push_str(&format!(
        "  subdomains:              {} (too many: {})\n",
        findings.number_of_subdomains,
        yes_no(findings.has_too_many_subdomains)
    ));
    out.push_str(&format!(
        "  IP-literal host:         {}\n",
        yes_no(findings.has_ip_address_in_url)
    ));
    out.push_str(&format!(
        "  uses HTTPS:              {}\n",
        yes_no(findings.uses_https)
    ));
    let age = findings
        .domain_age_days
        .map(|d| format!("{} days", d))
        .unwrap_or_else(|| "Unknown".to_string());
    out.push_str(&format!(
        "  domain age:              {} (newly created: {})\n",
        age,
        yes_no(findings.is_newly_created_domain)
    ));
    out.push_str(&format!(
        "  free hosting platform:   {}\n",
        yes_no(findings.is_free_hosting_platform)
    ));

    if let Some(details) = &report.details {
        render_details(&mut out, details);
    }

    out
}

fn render_details(out: &mut String, details: &TechnicalDetails) {
    out.push_str("Server:\n");
    out.push_str(&format!("  IP address:       {}\n", details.ip_address));
    out.push_str(&format!("  location:         {}\n", details.server_location));
    out.push_str(&format!(
        "  web server:       {}\n",
        details.server_info.web_server
    ));
    out.push_str(&format!(
        "  powered by:       {}\n",
        details.server_info.powered_by
    ));
    out.push_str(&format!(
        "  status:           {} (uptime {}, response {})\n",
        details.server_status.status,
        details.server_status.uptime,
        details.server_status.response_time
    ));
    out.push_str(&format!(
        "  open ports:       {}\n",
        details
            .open_ports
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    ));
    out.push_str(&format!(
        "  firewall:         {}\n",
        if details.firewall.detected {
            details.firewall.name.as_str()
        } else {
            "None Detected"
        }
    ));

    out.push_str("Security:\n");
    out.push_str(&format!(
        "  SSL certificate:  {}\n",
        details.ssl_certificate
    ));
    let cert = &details.ssl_certificate_details;
    if cert.valid {
        out.push_str(&format!(
            "  issuer:           {} ({} to {}, {} days remaining)\n",
            cert.issuer, cert.valid_from, cert.valid_to, cert.days_remaining
        ));
    }
    out.push_str(&format!(
        "  TLS handshake:    {} {} in {}\n",
        details.tls_handshake.protocol, details.tls_handshake.status, details.tls_handshake.time
    ));
    out.push_str(&format!(
        "  cipher suites:    {}\n",
        details.tls_cipher_suites.join(", ")
    ));

    out.push_str("DNS:\n");
    out.push_str(&format!("  DNSSEC:           {}\n", details.dnssec));
    out.push_str(&format!(
        "  servers:          {}\n",
        details.dns_servers.join(", ")
    ));

    out.push_str("WHOIS:\n");
    let whois = &details.whois_info;
    out.push_str(&format!("  registrar:        {}\n", whois.registrar));
    out.push_str(&format!("  registrant:       {}\n", whois.registrant_name));
    out.push_str(&format!("  created:          {}\n", whois.creation_date));
    out.push_str(&format!("  expires:          {}\n", whois.expiry_date));

    out.push_str("Misc:\n");
    out.push_str(&format!(
        "  redirects:        {}\n",
        details.number_of_redirects
    ));
    for hop in &details.redirect_details {
        out.push_str(&format!(
            "    {} -> {} ({})\n",
            hop.from, hop.to, hop.status_code
        ));
    }
    out.push_str(&format!(
        "  carbon footprint: {} per visit, cleaner than {} (rating {})\n",
        details.carbon_footprint.co2_per_visit,
        details.carbon_footprint.cleaner_than,
        details.carbon_footprint.rating
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_percentage_rounding() {
        assert_eq!(Findings::risk_percentage(0), 0);
        assert_eq!(Findings::risk_percentage(1), 14);
        assert_eq!(Findings::risk_percentage(2), 29);
        assert_eq!(Findings::risk_percentage(3), 43);
        assert_eq!(Findings::risk_percentage(4), 57);
        assert_eq!(Findings::risk_percentage(5), 71);
        assert_eq!(Findings::risk_percentage(6), 86);
        assert_eq!(Findings::risk_percentage(7), 100);
    }

    #[test]
    fn test_risk_percentage_is_clamped() {
        assert_eq!(Findings::risk_percentage(9), 100);
    }

    #[test]
    fn test_failed_report_renders_error_only() {
        let report = UrlReport::failed("not a url", "Failed to analyze URL");
        let text = render_text(&report);

        assert!(text.contains("Analysis failed"));
        assert!(text.contains("Failed to analyze URL"));
        assert!(!text.contains("Indicators:"));
    }

    #[test]
    fn test_failed_report_omits_findings_in_json() {
        let report = UrlReport::failed("", "Failed to analyze URL");
        let json = serde_json::to_value(&report).expect("serializable");

        assert_eq!(json["verdict"], "AnalysisFailed");
        assert!(json.get("findings").is_none());
        assert!(json.get("details").is_none());
    }

    #[test]
    fn test_unknown_domain_age_renders_as_unknown() {
        let findings = Findings {
            has_invalid_characters: false,
            has_suspicious_characters: false,
            number_of_subdomains: 0,
            has_too_many_subdomains: false,
            has_ip_address_in_url: false,
            uses_https: true,
            domain_age_days: None,
            is_newly_created_domain: false,
            is_free_hosting_platform: false,
            risk_indicator_count: 0,
            risk_percentage: 0,
        };
        let report = UrlReport {
            url: "https://example.org".to_string(),
            verdict: Verdict::Phishing,
            error: None,
            findings: Some(findings),
            details: None,
        };

        assert!(render_text(&report).contains("domain age:              Unknown"));
    }
}
