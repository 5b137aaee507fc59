/// Public suffixes that span two labels. A domain directly under one of these
/// needs one more dot than usual before it counts as a sub-domain.
pub const LONG_TLDS: [&str; 4] = ["co.jp", "co.uk", "or.us", "k12.or.us"];

/// Whether the domain ends in one of the [`LONG_TLDS`], such as ".co.uk".
///
/// Matching is an exact, case-sensitive suffix check on `"." + tld`.
pub fn has_long_tld(domain: &str) -> bool {
    LONG_TLDS.iter().any(|tld| {
        domain
            .strip_suffix(tld)
            .is_some_and(|rest| rest.ends_with('.'))
    })
}

/// Whether the domain already names a sub-domain, so no "www" variant
/// should be requested for it.
///
/// "abc.co.uk" has two dots but is a bare domain under a long TLD, the same
/// depth as "abc.com" with one.
pub fn is_deepest_subdomain(domain: &str) -> bool {
    let dots = domain.matches('.').count();
    if has_long_tld(domain) {
        dots > 2
    } else {
        dots > 1
    }
}
