/// A single whitespace-delimited directive from an SPF-style TXT record.
///
/// Only the three directives that carry netblock information are recognised;
/// everything else (`v=spf1`, `?all`, JSON framing around the record) is
/// `Other` and gets skipped by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpfToken<'a> {
    Ip4(&'a str),
    Ip6(&'a str),
    Include(&'a str),
    Other(&'a str),
}

const IP4_PREFIX: &str = "ip4:";
const IP6_PREFIX: &str = "ip6:";
const INCLUDE_PREFIX: &str = "include:";

impl<'a> SpfToken<'a> {
    pub fn parse(token: &'a str) -> Self {
        if let Some(cidr) = token.strip_prefix(IP4_PREFIX) {
            Self::Ip4(cidr)
        } else if let Some(cidr) = token.strip_prefix(IP6_PREFIX) {
            Self::Ip6(cidr)
        } else if let Some(name) = token.strip_prefix(INCLUDE_PREFIX) {
            Self::Include(name)
        } else {
            Self::Other(token)
        }
    }
}

/// Splits a raw record body on whitespace and classifies every token.
pub fn tokenize(record: &str) -> impl Iterator<Item = SpfToken<'_>> {
    record.split_whitespace().map(SpfToken::parse)
}
