use std::{collections::HashMap, convert::Infallible};

use axum::{
    RequestPartsExt,
    extract::{FromRequestParts, Query},
    http::{header, request::Parts},
};

pub const DEFAULT_LANGUAGE: &str = "en";
pub const SUPPORTED_LANGUAGES: [&str; 3] = ["en", "hi", "mr"];

/// Languages the visitor accepts, best first, restricted to the locales we
/// ship. A `?lang=` query parameter wins over `Accept-Language`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UserLanguage(Vec<String>);

impl UserLanguage {
    pub fn parse(accept_language: &str) -> Self {
        let mut weighted = accept_language
            .split(',')
            .filter_map(|entry| {
                let mut parts = entry.trim().split(';');
                let tag = parts.next()?.trim();
                let quality = match parts.find_map(|p| p.trim().strip_prefix("q=")) {
                    Some(q) => q.trim().parse::<f32>().ok()?,
                    None => 1.0,
                };

                let primary = tag.split('-').next()?.to_ascii_lowercase();
                SUPPORTED_LANGUAGES
                    .contains(&primary.as_str())
                    .then_some((primary, quality))
            })
            .filter(|(_, quality)| *quality > 0.0)
            .collect::<Vec<_>>();

        weighted.sort_by(|a, b| b.1.total_cmp(&a.1));

        let mut languages: Vec<String> = vec![];
        for (language, _) in weighted {
            if !languages.contains(&language) {
                languages.push(language);
            }
        }

        Self(languages)
    }

    pub fn preferred_languages(&self) -> &[String] {
        &self.0
    }

    pub fn preferred(&self) -> &str {
        self.0
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_LANGUAGE)
    }
}

impl<S: Send + Sync> FromRequestParts<S> for UserLanguage {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let mut language = parts
            .headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok())
            .map(UserLanguage::parse)
            .unwrap_or_default();

        let lang = parts
            .extract::<Query<HashMap<String, String>>>()
            .await
            .ok()
            .and_then(|Query(mut query)| query.remove("lang"))
            .filter(|lang| SUPPORTED_LANGUAGES.contains(&lang.as_str()));

        if let Some(lang) = lang {
            language.0.retain(|l| l != &lang);
            language.0.insert(0, lang);
        }

        Ok(language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_by_quality() {
        let language = UserLanguage::parse("en-US;q=0.5, hi-IN, mr;q=0.8");

        assert_eq!(language.preferred_languages(), ["hi", "mr", "en"]);
        assert_eq!(language.preferred(), "hi");
    }

    #[test]
    fn test_drops_unsupported_and_duplicates() {
        let language = UserLanguage::parse("fr-FR, en-GB;q=0.9, en;q=0.7, de;q=0.5");

        assert_eq!(language.preferred_languages(), ["en"]);
    }

    #[test]
    fn test_defaults_to_english() {
        assert_eq!(UserLanguage::parse("").preferred(), "en");
        assert_eq!(UserLanguage::parse("*").preferred(), "en");
        assert_eq!(UserLanguage::parse("hi;q=0").preferred(), "en");
    }
}
