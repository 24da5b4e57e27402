//! Analysis report domain model.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// A website analysis produced by the inference model.
///
/// Wire field names are the camelCase keys the model is instructed to emit.
/// Object-valued fields are kept as ordered pairs so the renderer shows
/// keywords and platforms in the order the model listed them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub description: String,
    /// Meaningful in 0–100; checked by [`AnalysisReport::validate`].
    pub seo_score: u8,
    /// Keyword → density percentage, in insertion order.
    #[serde(with = "ordered_pairs")]
    pub keywords: Vec<(String, f64)>,
    pub marketing_strategy: String,
    /// Platform key → suggested posts, in insertion order. Keys outside the
    /// four known platforms are carried through, not rejected.
    #[serde(with = "ordered_pairs", default)]
    pub social_suggestions: Vec<(String, Vec<String>)>,
}

impl AnalysisReport {
    /// Range checks the schema itself cannot express.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.seo_score > 100 {
            return Err(AnalysisError::schema(format!(
                "seoScore {} out of range 0-100",
                self.seo_score
            )));
        }
        for (keyword, density) in &self.keywords {
            if *density < 0.0 {
                return Err(AnalysisError::schema(format!(
                    "negative density {} for keyword '{}'",
                    density, keyword
                )));
            }
        }
        Ok(())
    }
}

/// The four platforms the prompt asks post suggestions for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Facebook,
    Twitter,
    Instagram,
    Linkedin,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Facebook,
        Platform::Twitter,
        Platform::Instagram,
        Platform::Linkedin,
    ];

    /// Match a wire key (case-insensitive) to a known platform.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "facebook" => Some(Self::Facebook),
            "twitter" => Some(Self::Twitter),
            "instagram" => Some(Self::Instagram),
            "linkedin" => Some(Self::Linkedin),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::Twitter => "twitter",
            Self::Instagram => "instagram",
            Self::Linkedin => "linkedin",
        }
    }

    /// Human-facing tab label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Facebook => "Facebook",
            Self::Twitter => "Twitter",
            Self::Instagram => "Instagram",
            Self::Linkedin => "LinkedIn",
        }
    }
}

/// Serde adapter decoding a JSON object into `Vec<(String, V)>`.
///
/// The default map types lose encounter order, and the display contract is
/// "same order the model emitted", so object entries are collected as pairs.
pub mod ordered_pairs {
    use std::fmt;
    use std::marker::PhantomData;

    use serde::de::{Deserializer, MapAccess, Visitor};
    use serde::ser::{SerializeMap, Serializer};
    use serde::{Deserialize, Serialize};

    pub fn serialize<S, V>(pairs: &[(String, V)], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        V: Serialize,
    {
        let mut map = serializer.serialize_map(Some(pairs.len()))?;
        for (key, value) in pairs {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D, V>(deserializer: D) -> Result<Vec<(String, V)>, D::Error>
    where
        D: Deserializer<'de>,
        V: Deserialize<'de>,
    {
        struct PairsVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for PairsVisitor<V> {
            type Value = Vec<(String, V)>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry()? {
                    pairs.push((key, value));
                }
                Ok(pairs)
            }
        }

        deserializer.deserialize_map(PairsVisitor(PhantomData))
    }
}
