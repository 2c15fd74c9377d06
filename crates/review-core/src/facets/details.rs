//! Major-details column: residency, language options, licensing and text lists.

use serde::Serialize;

use super::build_facet;
use crate::record::{non_empty, Country, LanguageOption, MediaItem, Term, TextItem};

/// Country names shortened in the residency line.
const COUNTRY_SHORT_NAMES: [(&str, &str); 1] = [("United Kingdom", "UK")];

/// "Residents from …" line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResidencyLine {
    pub country: String,
    pub flag: Option<String>,
}

impl ResidencyLine {
    pub fn text(&self) -> String {
        format!("Residents from {}", self.country)
    }
}

impl From<&Country> for ResidencyLine {
    fn from(country: &Country) -> Self {
        let name = COUNTRY_SHORT_NAMES
            .iter()
            .find(|(long, _)| *long == country.name)
            .map(|(_, short)| short.to_string())
            .unwrap_or_else(|| country.name.clone());

        Self {
            country: name,
            flag: country
                .terms
                .as_ref()
                .and_then(|t| t.country_image.as_ref())
                .and_then(MediaItem::url)
                .map(str::to_string),
        }
    }
}

/// One supported language with its optional flag icon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageOptionRow {
    pub description: String,
    pub icon: Option<String>,
}

impl From<&LanguageOption> for LanguageOptionRow {
    fn from(option: &LanguageOption) -> Self {
        let language = option.language.as_ref();
        let description = non_empty(option.option_description.as_deref())
            .or_else(|| language.map(|l| l.name.as_str()))
            .unwrap_or_default()
            .to_string();

        Self {
            description,
            icon: language
                .and_then(|l| l.terms.as_ref())
                .and_then(|t| t.language_icon.as_ref())
                .and_then(MediaItem::url)
                .map(str::to_string),
        }
    }
}

/// Residency line, `None` when the review names no country.
pub fn build_residency(country: Option<&Country>) -> Option<ResidencyLine> {
    country
        .filter(|c| !c.name.trim().is_empty())
        .map(ResidencyLine::from)
}

/// Language option rows, `None` when the review lists none.
pub fn build_language_options(options: Option<&[LanguageOption]>) -> Option<Vec<LanguageOptionRow>> {
    build_facet("language_options", options, LanguageOptionRow::from)
}

/// Licensing authority names, `None` when the review lists none.
pub fn build_licensing(authorities: Option<&[Term]>) -> Option<Vec<String>> {
    build_facet("licensing_authority", authorities, |term| term.name.clone())
}

/// Plain text of a `{ text }` repeater, `None` when absent.
pub fn build_text_items(facet: &str, items: Option<&[TextItem]>) -> Option<Vec<String>> {
    build_facet(facet, items, |item| item.text.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{CountryTerms, LanguageTerm, LanguageTerms, MediaItem};

    #[test]
    fn test_uk_is_shortened() {
        let uk = Country {
            name: "United Kingdom".to_string(),
            terms: Some(CountryTerms {
                country_image: Some(MediaItem::new("https://cdn.test/uk.png")),
            }),
        };

        let line = build_residency(Some(&uk)).unwrap();
        assert_eq!(line.text(), "Residents from UK");
        assert_eq!(line.flag.as_deref(), Some("https://cdn.test/uk.png"));
    }

    #[test]
    fn test_other_country_kept() {
        let malta = Country {
            name: "Malta".to_string(),
            terms: None,
        };
        let line = build_residency(Some(&malta)).unwrap();
        assert_eq!(line.country, "Malta");
        assert_eq!(line.flag, None);

        assert_eq!(build_residency(None), None);
        assert_eq!(build_residency(Some(&Country::default())), None);
    }

    #[test]
    fn test_language_option_rows() {
        let options = vec![
            LanguageOption {
                option_description: Some("Website & support".to_string()),
                language: Some(LanguageTerm {
                    name: "English".to_string(),
                    terms: Some(LanguageTerms {
                        language_icon: Some(MediaItem::new("https://cdn.test/en.png")),
                    }),
                }),
            },
            LanguageOption {
                option_description: None,
                language: Some(LanguageTerm {
                    name: "German".to_string(),
                    terms: None,
                }),
            },
        ];

        let rows = build_language_options(Some(&options)).unwrap();
        assert_eq!(rows[0].description, "Website & support");
        assert_eq!(rows[0].icon.as_deref(), Some("https://cdn.test/en.png"));
        assert_eq!(rows[1].description, "German");
        assert_eq!(rows[1].icon, None);
    }

    #[test]
    fn test_licensing_and_text_items() {
        let authorities = vec![Term::new("Malta Gaming Authority", "mga")];
        assert_eq!(
            build_licensing(Some(&authorities)),
            Some(vec!["Malta Gaming Authority".to_string()])
        );
        assert_eq!(build_licensing(None), None);

        let pros = vec![TextItem {
            text: "Fast payouts".to_string(),
        }];
        assert_eq!(
            build_text_items("pros", Some(&pros)),
            Some(vec!["Fast payouts".to_string()])
        );
        assert_eq!(build_text_items("cons", Some(&[])), Some(Vec::new()));
    }
}
