// src/github/link.rs
// =============================================================================
// Parses RFC 8288 `Link` headers, which GitHub uses for pagination:
//
//   Link: <https://api.github.com/user/1/repos?page=2>; rel="next",
//         <https://api.github.com/user/1/repos?page=5>; rel="last"
//
// The header may be repeated, and each value may hold several
// comma-separated entries. Everything here is pure string handling so it
// can be tested without a network.
//
// Rust concepts:
// - Iterators: split / filter_map / flat_map do the parsing without loops
// - let-else: bail out of a branch when a pattern doesn't match
// =============================================================================

/// One `<url>; rel="..."` entry from a Link header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub url: String,
    /// The raw `rel` parameter (may list several space-separated relations)
    pub rel: String,
}

impl Link {
    /// True if `relation` is one of this link's relation types
    pub fn has_rel(&self, relation: &str) -> bool {
        self.rel
            .split_whitespace()
            .any(|r| r.eq_ignore_ascii_case(relation))
    }
}

// Parses a single Link header value into its entries
//
// Entries without a `<url>` part are skipped. Parameter names are
// case-insensitive and values may or may not be quoted.
pub fn parse_links(value: &str) -> Vec<Link> {
    value.split(',').filter_map(parse_entry).collect()
}

fn parse_entry(entry: &str) -> Option<Link> {
    let mut parts = entry.split(';');

    // First part is the target, wrapped in angle brackets
    let target = parts.next()?.trim();
    let url = target.strip_prefix('<')?.strip_suffix('>')?.trim();
    if url.is_empty() {
        return None;
    }

    // The rest are key=value parameters; we only care about rel
    let mut rel = String::new();
    for param in parts {
        let Some((key, value)) = param.split_once('=') else {
            continue;
        };
        if key.trim().eq_ignore_ascii_case("rel") {
            rel = value.trim().trim_matches('"').trim().to_string();
        }
    }

    Some(Link {
        url: url.to_string(),
        rel,
    })
}

// Finds the first link with the given relation across all header values
//
// Example:
//   find_rel(["<https://x/?page=2>; rel=\"next\""], "next") -> Some("https://x/?page=2")
pub fn find_rel<'a, I>(values: I, relation: &str) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    values
        .into_iter()
        .flat_map(parse_links)
        .find(|link| link.has_rel(relation))
        .map(|link| link.url)
}
