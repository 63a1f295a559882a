//! Metadata resolution.
//!
//! Each recognized field resolves frontmatter-first: a non-empty
//! frontmatter value wins outright, otherwise the field's environment
//! variables are consulted in order, otherwise the field is absent. An
//! empty frontmatter value does not shadow the environment — the
//! environment is a genuine fallback, not a default shown in help text.

use resumark_model::{
    FrontmatterPair, Metadata, MetadataSource, MetadataValue, metadata_field, metadata_fields,
};

/// Resolve frontmatter pairs against environment fallbacks.
///
/// `lookup` abstracts `std::env::var` so tests stay hermetic.
pub fn resolve_metadata(
    pairs: &[FrontmatterPair],
    lookup: impl Fn(&str) -> Option<String>,
) -> Metadata {
    let mut metadata = Metadata::new();

    for def in metadata_fields() {
        let pair = pairs.iter().find(|p| p.key.value == def.key);

        if let Some(pair) = pair
            && !pair.value.value.trim().is_empty()
        {
            metadata.insert(
                def.key,
                MetadataValue {
                    value: pair.value.value.clone(),
                    source: MetadataSource::Frontmatter(pair.value.range),
                },
            );
            continue;
        }

        let env_hit = def
            .env_vars
            .iter()
            .find_map(|var| lookup(var).filter(|v| !v.trim().is_empty()).map(|v| (*var, v)));

        if let Some((var, value)) = env_hit {
            metadata.insert(
                def.key,
                MetadataValue {
                    value,
                    source: MetadataSource::Environment(var.to_string()),
                },
            );
        }
    }

    // Frontmatter keys outside the field table are carried through
    // untouched so downstream consumers can use custom fields.
    for pair in pairs {
        if metadata_field(&pair.key.value).is_none() {
            metadata.insert(
                pair.key.value.clone(),
                MetadataValue {
                    value: pair.value.value.clone(),
                    source: MetadataSource::Frontmatter(pair.value.range),
                },
            );
        }
    }

    metadata
}

#[cfg(test)]
mod tests {
    use super::*;
    use resumark_source_map::{Located, Range};

    fn pair(key: &str, value: &str) -> FrontmatterPair {
        FrontmatterPair {
            key: Located::new(key.to_string(), Range::default()),
            value: Located::new(value.to_string(), Range::from_coords(1, 6, 1, 6)),
        }
    }

    #[test]
    fn frontmatter_wins_when_non_empty() {
        let pairs = vec![pair("name", "Ada")];
        let metadata = resolve_metadata(&pairs, |var| {
            (var == "CV_NAME").then(|| "Grace".to_string())
        });
        assert_eq!(metadata.value("name"), Some("Ada"));
        assert!(matches!(
            metadata.get("name").unwrap().source,
            MetadataSource::Frontmatter(_)
        ));
    }

    #[test]
    fn empty_frontmatter_falls_through_to_env() {
        let pairs = vec![pair("name", "")];
        let metadata = resolve_metadata(&pairs, |var| {
            (var == "CV_NAME").then(|| "Grace".to_string())
        });
        assert_eq!(metadata.value("name"), Some("Grace"));
        assert_eq!(
            metadata.get("name").unwrap().source,
            MetadataSource::Environment("CV_NAME".to_string())
        );
    }

    #[test]
    fn env_vars_are_consulted_in_order() {
        let metadata = resolve_metadata(&[], |var| match var {
            "CV_EMAIL" => None,
            "CV_EMAIL_ADDRESS" => Some("ada@example.org".to_string()),
            _ => None,
        });
        assert_eq!(metadata.value("email_address"), Some("ada@example.org"));
        assert_eq!(
            metadata.get("email_address").unwrap().source,
            MetadataSource::Environment("CV_EMAIL_ADDRESS".to_string())
        );
    }

    #[test]
    fn absent_everywhere_is_missing() {
        let metadata = resolve_metadata(&[], |_| None);
        assert!(metadata.is_missing("name"));
        assert!(metadata.is_missing("phone_number"));
    }

    #[test]
    fn whitespace_only_env_value_does_not_resolve() {
        let metadata = resolve_metadata(&[], |var| {
            (var == "CV_NAME").then(|| "   ".to_string())
        });
        assert!(metadata.is_missing("name"));
    }

    #[test]
    fn unrecognized_keys_pass_through() {
        let pairs = vec![pair("twitter", "@ada")];
        let metadata = resolve_metadata(&pairs, |_| None);
        assert_eq!(metadata.value("twitter"), Some("@ada"));
    }
}
