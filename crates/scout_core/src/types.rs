use serde::{Deserialize, Serialize};
use url::Url;

use crate::{Error, Result};

/// The user-supplied competitor identifier, normalized to a domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitorQuery {
    /// The identifier exactly as the user typed it.
    pub raw: String,
    /// Best-effort domain derived from the identifier ("Stripe" -> "stripe.com").
    pub domain: String,
}

impl CompetitorQuery {
    pub fn parse(input: &str) -> Result<Self> {
        let raw = input.trim();
        if raw.is_empty() {
            return Err(Error::Query("identifier must not be empty".to_string()));
        }

        let domain = if raw.starts_with("http://") || raw.starts_with("https://") {
            let url = Url::parse(raw)
                .map_err(|e| Error::Query(format!("could not parse URL '{}': {}", raw, e)))?;
            url.host_str()
                .ok_or_else(|| Error::Query(format!("URL '{}' has no host", raw)))?
                .to_string()
        } else {
            let candidate = raw.replace(' ', "").to_lowercase();
            if candidate.contains('.') {
                candidate
            } else {
                format!("{}.com", candidate)
            }
        };

        Ok(Self {
            raw: raw.to_string(),
            domain,
        })
    }

    pub fn website_url(&self) -> String {
        format!("https://{}", self.domain)
    }
}

/// One external data origin consulted during a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceKind {
    Website,
    News,
    Social,
}

impl SourceKind {
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::Website => "WEBSITE",
            SourceKind::News => "NEWS",
            SourceKind::Social => "SOCIAL",
        }
    }
}

/// Raw text from one source, or an explicit marker that the source
/// could not be retrieved. Absence is ordinary data, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceText {
    Available(String),
    Unavailable,
}

impl SourceText {
    pub fn is_available(&self) -> bool {
        matches!(self, SourceText::Available(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            SourceText::Available(text) => Some(text),
            SourceText::Unavailable => None,
        }
    }
}

/// Everything the fetch stage managed to retrieve for one query.
/// Produced once, consumed once by extraction, then dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSourceBundle {
    pub query: CompetitorQuery,
    pub website: SourceText,
    pub news: SourceText,
    pub social: SourceText,
}

impl RawSourceBundle {
    pub fn source(&self, kind: SourceKind) -> &SourceText {
        match kind {
            SourceKind::Website => &self.website,
            SourceKind::News => &self.news,
            SourceKind::Social => &self.social,
        }
    }

    /// True when every slot failed, i.e. the fetch produced nothing at all.
    pub fn is_empty(&self) -> bool {
        !self.website.is_available() && !self.news.is_available() && !self.social.is_available()
    }
}

/// The structured analysis result. This is the exact JSON schema the
/// extraction model must return: `null` / `[]` mean "no evidence found"
/// and flow through to the report as explicit markers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitorRecord {
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub pricing: Option<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub social_presence: Option<String>,
    #[serde(default)]
    pub recent_news: Option<String>,
    #[serde(default)]
    pub competitive_angle: Option<String>,
    #[serde(default = "chrono::Utc::now", skip_deserializing)]
    pub analyzed_at: chrono::DateTime<chrono::Utc>,
}

impl CompetitorRecord {
    pub fn empty() -> Self {
        Self {
            overview: None,
            pricing: None,
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            social_presence: None,
            recent_news: None,
            competitive_angle: None,
            analyzed_at: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_company_name() {
        let query = CompetitorQuery::parse("Stripe").unwrap();
        assert_eq!(query.raw, "Stripe");
        assert_eq!(query.domain, "stripe.com");
        assert_eq!(query.website_url(), "https://stripe.com");
    }

    #[test]
    fn test_parse_name_with_spaces() {
        let query = CompetitorQuery::parse("Acme Widgets").unwrap();
        assert_eq!(query.domain, "acmewidgets.com");
    }

    #[test]
    fn test_parse_domain() {
        let query = CompetitorQuery::parse("stripe.com").unwrap();
        assert_eq!(query.domain, "stripe.com");
    }

    #[test]
    fn test_parse_url() {
        let query = CompetitorQuery::parse("https://stripe.com/pricing").unwrap();
        assert_eq!(query.domain, "stripe.com");
    }

    #[test]
    fn test_parse_empty_is_rejected() {
        assert!(CompetitorQuery::parse("   ").is_err());
    }

    #[test]
    fn test_bundle_is_empty() {
        let query = CompetitorQuery::parse("acme").unwrap();
        let bundle = RawSourceBundle {
            query: query.clone(),
            website: SourceText::Unavailable,
            news: SourceText::Unavailable,
            social: SourceText::Unavailable,
        };
        assert!(bundle.is_empty());

        let bundle = RawSourceBundle {
            query,
            website: SourceText::Available("text".to_string()),
            news: SourceText::Unavailable,
            social: SourceText::Unavailable,
        };
        assert!(!bundle.is_empty());
    }

    #[test]
    fn test_record_decodes_with_missing_fields() {
        let record: CompetitorRecord =
            serde_json::from_str(r#"{"overview": "A payments company"}"#).unwrap();
        assert_eq!(record.overview.as_deref(), Some("A payments company"));
        assert!(record.pricing.is_none());
        assert!(record.strengths.is_empty());
    }

    #[test]
    fn test_record_rejects_wrong_shape() {
        // strengths must be an array of strings, not a scalar
        let result = serde_json::from_str::<CompetitorRecord>(r#"{"strengths": "fast"}"#);
        assert!(result.is_err());
    }
}
