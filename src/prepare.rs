use tracing::{debug, trace};

use crate::domain::{has_long_tld, is_deepest_subdomain};
use crate::stats::{PrepareStats, PreparedNames};

/// Turns user-supplied domains into the names to put on a certificate request.
///
/// Entries are trimmed, blanks and repeats are dropped, and every bare domain
/// gets its "www." variant right after it. A wildcard such as "*.example.com"
/// removes every other entry ending in ".example.com", since a certificate
/// cannot name both. If "example.com" itself is wanted next to the wildcard,
/// both must be given.
///
/// Accepts anything iterable over strings. An absent list is just an empty
/// iterator, e.g. `Option<Vec<String>>` flattened.
///
/// ```
/// use certnames::prepare_domain_names;
///
/// let names = prepare_domain_names(["abc.com", "*.abc.com", "www.abc.com"]);
/// assert_eq!(names, vec!["abc.com", "*.abc.com"]);
/// ```
pub fn prepare_domain_names<I>(domains: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    prepare_with_stats(domains).names
}

/// Same as [`prepare_domain_names`], also reporting what was added and dropped.
pub fn prepare_with_stats<I>(domains: I) -> PreparedNames
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let domains = domains.into_iter();
    let mut made: Vec<String> = Vec::with_capacity(domains.size_hint().0 * 2);
    let mut stats = PrepareStats::default();
    // Wildcard tails whose sub-domains get pruned once every entry is seen.
    let mut remove: Vec<String> = Vec::new();

    for raw in domains {
        stats.input_entries += 1;

        let d = raw.as_ref().trim();
        if d.is_empty() {
            stats.blank_skipped += 1;
            continue;
        }

        if contains(&made, d) {
            trace!(action = "skip", component = "prepare", domain = d, "Duplicate domain");
            stats.duplicates_skipped += 1;
            continue;
        }

        made.push(d.to_string());

        if is_deepest_subdomain(d) {
            if let Some(tail) = d.strip_prefix('*') {
                debug!(
                    action = "wildcard",
                    component = "prepare",
                    domain = d,
                    long_tld = has_long_tld(d),
                    "Wildcard will prune sub-domains ending in its tail"
                );
                stats.wildcards += 1;
                remove.push(tail.to_string());
            }
            continue;
        }

        let www = format!("www.{d}");
        if !contains(&made, &www) {
            made.push(www);
            stats.www_added += 1;
        }
    }

    // Wildcards and the names they cover can arrive in any order.
    for suffix in &remove {
        let before = made.len();
        made = remove_suffixed(made, suffix);
        let pruned = before - made.len();
        if pruned > 0 {
            debug!(action = "prune", component = "prepare", suffix = %suffix, pruned, "Pruned names covered by wildcard");
        }
        stats.pruned += pruned;
    }

    PreparedNames { names: made, stats }
}

pub(crate) fn contains(names: &[String], name: &str) -> bool {
    names.iter().any(|n| n == name)
}

/// Drops every name ending in `suffix` except the wildcard `"*" + suffix`.
pub(crate) fn remove_suffixed(mut names: Vec<String>, suffix: &str) -> Vec<String> {
    names.retain(|n| {
        !n.ends_with(suffix) || n.strip_prefix('*').is_some_and(|rest| rest == suffix)
    });
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_contains() {
        let names = strings(&["abc.com", "www.abc.com"]);
        assert!(contains(&names, "abc.com"));
        assert!(contains(&names, "www.abc.com"));
        assert!(!contains(&names, "abc.co"));
        assert!(!contains(&[], "abc.com"));
    }

    #[test]
    fn test_remove_suffixed_keeps_wildcard() {
        let names = strings(&["abc.com", "*.abc.com", "www.abc.com", "mail.abc.com"]);
        assert_eq!(
            remove_suffixed(names, ".abc.com"),
            strings(&["abc.com", "*.abc.com"])
        );
    }

    #[test]
    fn test_remove_suffixed_no_match() {
        let names = strings(&["abc.io", "www.abc.io"]);
        assert_eq!(remove_suffixed(names.clone(), ".abc.com"), names);
    }

    #[test]
    fn test_remove_suffixed_preserves_order() {
        let names = strings(&["a.x.com", "keep.org", "*.x.com", "b.x.com", "also.net"]);
        assert_eq!(
            remove_suffixed(names, ".x.com"),
            strings(&["keep.org", "*.x.com", "also.net"])
        );
    }

    #[test]
    fn test_stats_counts() {
        let prepared = prepare_with_stats([
            " abc.com ",
            "",
            "abc.com",
            "*.abc.com",
            "www.abc.com",
            "xyz.co.uk",
        ]);

        assert_eq!(
            prepared.names,
            strings(&["abc.com", "*.abc.com", "xyz.co.uk", "www.xyz.co.uk"])
        );
        assert_eq!(
            prepared.stats,
            PrepareStats {
                input_entries: 6,
                blank_skipped: 1,
                duplicates_skipped: 2,
                www_added: 2,
                wildcards: 1,
                pruned: 1,
            }
        );
    }

    #[test]
    fn test_wildcard_without_depth_is_plain() {
        // "*.com" is too shallow to count as a wildcard sub-domain.
        assert_eq!(prepare_domain_names(["*.com"]), strings(&["*.com", "www.*.com"]));
    }

    #[test]
    fn test_absent_input() {
        assert!(prepare_domain_names(None::<Vec<String>>.into_iter().flatten()).is_empty());
        assert_eq!(prepare_with_stats(Vec::<String>::new()).stats, PrepareStats::default());
    }
}
