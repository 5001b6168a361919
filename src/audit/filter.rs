//! Organization name filtering
//!
//! A filter is either `/all`, an exact name, or a name with a single `*`
//! wildcard at the start, the end, or somewhere in the middle. Matching is
//! case-sensitive and there is no escape for a literal `*`.

use std::fmt;

use serde::Serialize;

use crate::client::OrganizationRecord;
use crate::error::FilterError;

/// Filter keyword selecting every organization
pub const ALL_ORGANIZATIONS: &str = "/all";

/// A parsed organization name filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrgFilter {
    /// `/all`
    All,
    /// No wildcard
    Exact(String),
    /// `Acme*`
    Prefix(String),
    /// `*Corp`
    Suffix(String),
    /// `Ac*rp`
    Infix { prefix: String, suffix: String },
}

impl OrgFilter {
    /// Parse a user-supplied filter string.
    pub fn parse(filter: &str) -> Result<Self, FilterError> {
        if filter.is_empty() {
            return Err(FilterError::Empty);
        }
        if filter == ALL_ORGANIZATIONS {
            return Ok(OrgFilter::All);
        }

        match filter.matches('*').count() {
            0 => Ok(OrgFilter::Exact(filter.to_string())),
            1 => {
                let (prefix, suffix) = filter.split_once('*').unwrap_or((filter, ""));
                Ok(if prefix.is_empty() {
                    OrgFilter::Suffix(suffix.to_string())
                } else if suffix.is_empty() {
                    OrgFilter::Prefix(prefix.to_string())
                } else {
                    OrgFilter::Infix {
                        prefix: prefix.to_string(),
                        suffix: suffix.to_string(),
                    }
                })
            }
            _ => Err(FilterError::TooManyWildcards(filter.to_string())),
        }
    }

    /// Whether `name` is selected by this filter.
    ///
    /// Infix spans may overlap on short names: `ab*ba` matches `aba`.
    pub fn matches(&self, name: &str) -> bool {
        match self {
            OrgFilter::All => true,
            OrgFilter::Exact(exact) => name == exact,
            OrgFilter::Prefix(prefix) => name.starts_with(prefix.as_str()),
            OrgFilter::Suffix(suffix) => name.ends_with(suffix.as_str()),
            OrgFilter::Infix { prefix, suffix } => {
                name.starts_with(prefix.as_str()) && name.ends_with(suffix.as_str())
            }
        }
    }
}

impl fmt::Display for OrgFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrgFilter::All => f.write_str(ALL_ORGANIZATIONS),
            OrgFilter::Exact(exact) => f.write_str(exact),
            OrgFilter::Prefix(prefix) => write!(f, "{}*", prefix),
            OrgFilter::Suffix(suffix) => write!(f, "*{}", suffix),
            OrgFilter::Infix { prefix, suffix } => write!(f, "{}*{}", prefix, suffix),
        }
    }
}

/// Match a raw filter string against a name.
///
/// Invalid filters match nothing.
#[allow(dead_code)]
pub fn matches(filter: &str, name: &str) -> bool {
    OrgFilter::parse(filter)
        .map(|f| f.matches(name))
        .unwrap_or(false)
}

/// An organization selected by a filter, with its display position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
    /// 1-based position after sorting the matched set by name
    pub ordinal: usize,
}

/// Select the organizations matching `filter`, sorted by name, numbered from 1.
pub fn select_organizations(filter: &OrgFilter, orgs: &[OrganizationRecord]) -> Vec<Organization> {
    let mut matched: Vec<&OrganizationRecord> =
        orgs.iter().filter(|org| filter.matches(&org.name)).collect();
    matched.sort_by(|a, b| a.name.cmp(&b.name));

    matched
        .into_iter()
        .enumerate()
        .map(|(idx, org)| Organization {
            id: org.id.clone(),
            name: org.name.clone(),
            ordinal: idx + 1,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::OrganizationBuilder;

    fn orgs(names: &[&str]) -> Vec<OrganizationRecord> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| OrganizationBuilder::new(i.to_string()).name(*n).build())
            .collect()
    }

    #[test]
    fn test_parse_modes() {
        assert_eq!(OrgFilter::parse("/all").unwrap(), OrgFilter::All);
        assert_eq!(
            OrgFilter::parse("Acme").unwrap(),
            OrgFilter::Exact("Acme".to_string())
        );
        assert_eq!(
            OrgFilter::parse("Calla*").unwrap(),
            OrgFilter::Prefix("Calla".to_string())
        );
        assert_eq!(
            OrgFilter::parse("*Corp").unwrap(),
            OrgFilter::Suffix("Corp".to_string())
        );
        assert_eq!(
            OrgFilter::parse("Ac*rp").unwrap(),
            OrgFilter::Infix {
                prefix: "Ac".to_string(),
                suffix: "rp".to_string()
            }
        );
    }

    #[test]
    fn test_parse_rejects_bad_filters() {
        assert_eq!(OrgFilter::parse(""), Err(FilterError::Empty));
        assert_eq!(
            OrgFilter::parse("a*b*c"),
            Err(FilterError::TooManyWildcards("a*b*c".to_string()))
        );
    }

    #[test]
    fn test_exact_requires_equality() {
        let filter = OrgFilter::parse("Acme").unwrap();
        assert!(filter.matches("Acme"));
        assert!(!filter.matches("acme"));
        assert!(!filter.matches("Acme Corp"));
        assert!(!filter.matches("The Acme"));
    }

    #[test]
    fn test_leading_wildcard_is_suffix_match() {
        let filter = OrgFilter::parse("*Corp").unwrap();
        assert!(filter.matches("Acme Corp"));
        assert!(filter.matches("Corp"));
        assert!(!filter.matches("Corporate"));
    }

    #[test]
    fn test_trailing_wildcard_is_prefix_match() {
        let filter = OrgFilter::parse("Calla*").unwrap();
        assert!(filter.matches("Callaway"));
        assert!(filter.matches("Calla"));
        assert!(!filter.matches("The Callaway"));
    }

    #[test]
    fn test_infix_wildcard() {
        let filter = OrgFilter::parse("North*Retail").unwrap();
        assert!(filter.matches("North East Retail"));
        assert!(filter.matches("NorthRetail"));
        assert!(!filter.matches("North East Wholesale"));
        assert!(!filter.matches("South East Retail"));
    }

    #[test]
    fn test_infix_spans_may_overlap() {
        let filter = OrgFilter::parse("ab*ba").unwrap();
        assert!(filter.matches("aba"));
        assert!(filter.matches("abba"));
        assert!(!filter.matches("ab"));
    }

    #[test]
    fn test_lone_wildcard_matches_everything() {
        let filter = OrgFilter::parse("*").unwrap();
        assert!(filter.matches(""));
        assert!(filter.matches("anything"));
    }

    #[test]
    fn test_display_round_trips() {
        for raw in ["/all", "Acme", "Calla*", "*Corp", "Ac*rp"] {
            assert_eq!(OrgFilter::parse(raw).unwrap().to_string(), raw);
        }
    }

    #[test]
    fn test_matches_helper() {
        assert!(matches("Calla*", "Callaway"));
        assert!(!matches("a*b*", "ab"));
    }

    #[test]
    fn test_select_all_sorts_and_numbers() {
        let records = orgs(&["Zeta", "Alpha", "Mu"]);
        let selected = select_organizations(&OrgFilter::All, &records);

        let names: Vec<&str> = selected.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Mu", "Zeta"]);

        let ordinals: Vec<usize> = selected.iter().map(|o| o.ordinal).collect();
        assert_eq!(ordinals, vec![1, 2, 3]);
        assert_eq!(selected[0].id, "1");
    }

    #[test]
    fn test_select_filtered_ordinals_are_contiguous() {
        let records = orgs(&["Acme West", "Globex", "Acme East", "Initech"]);
        let selected = select_organizations(&OrgFilter::parse("Acme*").unwrap(), &records);

        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].name, "Acme East");
        assert_eq!(selected[0].ordinal, 1);
        assert_eq!(selected[1].name, "Acme West");
        assert_eq!(selected[1].ordinal, 2);
    }

    #[test]
    fn test_select_no_match_is_empty() {
        let records = orgs(&["Globex"]);
        let selected = select_organizations(&OrgFilter::parse("Acme").unwrap(), &records);
        assert!(selected.is_empty());
    }
}
