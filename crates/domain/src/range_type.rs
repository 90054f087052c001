use crate::DomainError;
use std::fmt;
use std::str::FromStr;

/// Where the netblocks of a range type come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeSource {
    /// SPF-style TXT record whose `include:` targets list the netblocks.
    Dns(&'static str),
    /// Fixed IPv4 list.
    Static(&'static [&'static str]),
}

/// Category name selecting which netblock list to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RangeType {
    /// https://cloud.google.com/compute/docs/faq#where_can_i_find_product_name_short_ip_ranges
    #[default]
    CloudNetblocks,
    /// https://support.google.com/a/answer/33786
    GoogleNetblocks,
    /// https://cloud.google.com/vpc/docs/configure-private-google-access-hybrid
    RestrictedGoogleapis,
    /// https://cloud.google.com/dns/zones/#creating-forwarding-zones
    DnsForwarders,
    /// https://cloud.google.com/iap/docs/using-tcp-forwarding
    IapForwarders,
    /// https://cloud.google.com/load-balancing/docs/health-checks#fw-rule
    HealthCheckers,
    /// https://cloud.google.com/load-balancing/docs/health-checks#fw-netlbs
    LegacyHealthCheckers,
}

const CLOUD_NETBLOCKS_DNS: &str = "_cloud-netblocks.googleusercontent.com";
const GOOGLE_NETBLOCKS_DNS: &str = "_spf.google.com";

const RESTRICTED_GOOGLEAPIS: &[&str] = &["199.36.153.4/30"];
const DNS_FORWARDERS: &[&str] = &["35.199.192.0/19"];
const IAP_FORWARDERS: &[&str] = &["35.235.240.0/20"];
const HEALTH_CHECKERS: &[&str] = &["35.191.0.0/16", "130.211.0.0/22"];
const LEGACY_HEALTH_CHECKERS: &[&str] = &["35.191.0.0/16", "209.85.152.0/22", "209.85.204.0/22"];

impl RangeType {
    pub const ALL: [RangeType; 7] = [
        Self::CloudNetblocks,
        Self::GoogleNetblocks,
        Self::RestrictedGoogleapis,
        Self::DnsForwarders,
        Self::IapForwarders,
        Self::HealthCheckers,
        Self::LegacyHealthCheckers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CloudNetblocks => "cloud-netblocks",
            Self::GoogleNetblocks => "google-netblocks",
            Self::RestrictedGoogleapis => "restricted-googleapis",
            Self::DnsForwarders => "dns-forwarders",
            Self::IapForwarders => "iap-forwarders",
            Self::HealthCheckers => "health-checkers",
            Self::LegacyHealthCheckers => "legacy-health-checkers",
        }
    }

    pub fn source(&self) -> RangeSource {
        match self {
            Self::CloudNetblocks => RangeSource::Dns(CLOUD_NETBLOCKS_DNS),
            Self::GoogleNetblocks => RangeSource::Dns(GOOGLE_NETBLOCKS_DNS),
            Self::RestrictedGoogleapis => RangeSource::Static(RESTRICTED_GOOGLEAPIS),
            Self::DnsForwarders => RangeSource::Static(DNS_FORWARDERS),
            Self::IapForwarders => RangeSource::Static(IAP_FORWARDERS),
            Self::HealthCheckers => RangeSource::Static(HEALTH_CHECKERS),
            Self::LegacyHealthCheckers => RangeSource::Static(LEGACY_HEALTH_CHECKERS),
        }
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self.source(), RangeSource::Dns(_))
    }
}

impl FromStr for RangeType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rt| rt.as_str() == s)
            .ok_or_else(|| DomainError::UnknownRangeType(s.to_string()))
    }
}

impl fmt::Display for RangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
