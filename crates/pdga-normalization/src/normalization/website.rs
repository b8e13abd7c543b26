//! Website canonicalization for the company directory.

use pdga_model::SocialPlatform;
use url::Url;

/// Result of cleaning one website cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebsiteCleanup {
    Accepted(String),
    /// The website is a social-media profile; kept as-is and flagged.
    Social {
        url: String,
        platform: SocialPlatform,
    },
    Rejected {
        reason: String,
    },
}

impl WebsiteCleanup {
    pub fn url(&self) -> Option<&str> {
        match self {
            WebsiteCleanup::Accepted(url) | WebsiteCleanup::Social { url, .. } => Some(url),
            WebsiteCleanup::Rejected { .. } => None,
        }
    }
}

/// Canonicalizes a provider website value.
///
/// Whitespace is removed, the value lowercased and forced onto `https`. The
/// cleaned string is returned rather than the parsed URL's serialization so
/// that no trailing slash is introduced.
pub fn canonicalize_website(raw: &str) -> WebsiteCleanup {
    let cleaned: String = raw
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    if cleaned.is_empty() {
        return WebsiteCleanup::Rejected {
            reason: "empty".to_string(),
        };
    }

    let cleaned = if let Some(rest) = cleaned.strip_prefix("http://") {
        format!("https://{rest}")
    } else if has_scheme(&cleaned) {
        cleaned
    } else {
        format!("https://{cleaned}")
    };

    let host = match Url::parse(&cleaned) {
        Ok(url) => url.host_str().unwrap_or_default().to_string(),
        Err(error) => {
            return WebsiteCleanup::Rejected {
                reason: error.to_string(),
            };
        }
    };
    if host.is_empty() {
        return WebsiteCleanup::Rejected {
            reason: "no host".to_string(),
        };
    }

    match SocialPlatform::from_host(&host) {
        Some(platform) => WebsiteCleanup::Social {
            url: cleaned,
            platform,
        },
        None => WebsiteCleanup::Accepted(cleaned),
    }
}

/// True when `value` starts with `scheme://`; a `://` later in the value does not count.
fn has_scheme(value: &str) -> bool {
    let Some((scheme, _)) = value.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|first| first.is_ascii_alphabetic())
        && chars.all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '+' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_whitespace_and_adds_scheme() {
        assert_eq!(
            canonicalize_website(" WWW.Example.com "),
            WebsiteCleanup::Accepted("https://www.example.com".to_string())
        );
        assert_eq!(
            canonicalize_website("www.disc craft.com/about"),
            WebsiteCleanup::Accepted("https://www.disccraft.com/about".to_string())
        );
    }

    #[test]
    fn embedded_urls_do_not_count_as_a_scheme() {
        assert_eq!(
            canonicalize_website("www.example.com/?ref=http://partner.com"),
            WebsiteCleanup::Accepted("https://www.example.com/?ref=http://partner.com".to_string())
        );
        assert_eq!(
            canonicalize_website("shop.example.com/go?to=https://x.org"),
            WebsiteCleanup::Accepted("https://shop.example.com/go?to=https://x.org".to_string())
        );
        assert!(has_scheme("ftp://example.com"));
        assert!(!has_scheme("example.com/a://b"));
        assert!(!has_scheme("://example.com"));
    }

    #[test]
    fn upgrades_plain_http() {
        assert_eq!(
            canonicalize_website("HTTP://innovadiscs.com"),
            WebsiteCleanup::Accepted("https://innovadiscs.com".to_string())
        );
        assert_eq!(
            canonicalize_website("https://innovadiscs.com"),
            WebsiteCleanup::Accepted("https://innovadiscs.com".to_string())
        );
    }

    #[test]
    fn flags_social_profiles() {
        assert_eq!(
            canonicalize_website("facebook.com/mycompany"),
            WebsiteCleanup::Social {
                url: "https://facebook.com/mycompany".to_string(),
                platform: SocialPlatform::Facebook,
            }
        );
        assert_eq!(
            canonicalize_website("http://www.LinkedIn.com/company/x"),
            WebsiteCleanup::Social {
                url: "https://www.linkedin.com/company/x".to_string(),
                platform: SocialPlatform::Linkedin,
            }
        );
    }

    #[test]
    fn lookalike_domains_are_not_social() {
        assert_eq!(
            canonicalize_website("notfacebook.com"),
            WebsiteCleanup::Accepted("https://notfacebook.com".to_string())
        );
    }

    #[test]
    fn hostless_values_are_rejected() {
        assert!(matches!(
            canonicalize_website("https://"),
            WebsiteCleanup::Rejected { .. }
        ));
        assert!(matches!(
            canonicalize_website("   "),
            WebsiteCleanup::Rejected { .. }
        ));
    }

    #[test]
    fn canonical_output_is_stable() {
        let first = canonicalize_website("Example.com/Shop");
        let again = canonicalize_website(first.url().unwrap());
        assert_eq!(first, again);
    }
}
