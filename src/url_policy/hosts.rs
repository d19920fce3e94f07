//! Built-in deny list of internal infrastructure targets.

/// Cloud metadata and link-local endpoints that retrieval must never reach,
/// regardless of how the URL was produced (caller input or redirect).
const DENIED_HOSTS: &[&str] = &[
    // Instance metadata addresses (AWS, Azure, GCP, Oracle, Alibaba).
    "169.254.169.254",
    "[fd00:ec2::254]",
    "100.100.100.200",
    "192.0.0.192",
    // Provider metadata hostnames.
    "metadata.google.internal",
    "metadata.goog",
    "metadata.azure.internal",
];

/// True if `host` matches a denied infrastructure target.
pub fn is_denied_host(host: &str) -> bool {
    DENIED_HOSTS.iter().any(|d| d.eq_ignore_ascii_case(host))
}
