use std::fmt;

use serde::{Deserialize, Serialize};

/// Social-media platforms recognized in company website columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Facebook,
    Twitter,
    Instagram,
    Youtube,
    Linkedin,
}

/// Registrable domains mapped to their platform. Subdomains match too.
pub const SOCIAL_DOMAINS: &[(&str, SocialPlatform)] = &[
    ("facebook.com", SocialPlatform::Facebook),
    ("twitter.com", SocialPlatform::Twitter),
    ("instagram.com", SocialPlatform::Instagram),
    ("youtube.com", SocialPlatform::Youtube),
    ("linkedin.com", SocialPlatform::Linkedin),
];

impl SocialPlatform {
    /// Looks up the platform that owns `host` (`www.facebook.com` → Facebook).
    pub fn from_host(host: &str) -> Option<Self> {
        let host = host.trim_end_matches('.').to_ascii_lowercase();
        SOCIAL_DOMAINS
            .iter()
            .find(|(domain, _)| {
                host == *domain
                    || host
                        .strip_suffix(domain)
                        .is_some_and(|prefix| prefix.ends_with('.'))
            })
            .map(|(_, platform)| *platform)
    }

    /// Dedicated company field for this platform, if the schema has one.
    pub fn company_field(self) -> Option<&'static str> {
        match self {
            SocialPlatform::Facebook => Some("facebook"),
            SocialPlatform::Twitter => Some("twitter"),
            SocialPlatform::Instagram => Some("instagram"),
            SocialPlatform::Youtube => Some("youtube"),
            SocialPlatform::Linkedin => None,
        }
    }

    /// Parses the lowercase name produced by [`SocialPlatform::as_str`].
    pub fn from_name(name: &str) -> Option<Self> {
        SOCIAL_DOMAINS
            .iter()
            .map(|(_, platform)| *platform)
            .find(|platform| platform.as_str().eq_ignore_ascii_case(name.trim()))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SocialPlatform::Facebook => "facebook",
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::Youtube => "youtube",
            SocialPlatform::Linkedin => "linkedin",
        }
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
