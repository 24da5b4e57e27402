//! Prompt construction for the analysis request.

/// JSON shape the model is instructed to reply with. Kept in lockstep with
/// [`crate::report::AnalysisReport`].
const RESPONSE_SCHEMA: &str = r#"{
  "description": "A short description of the site's content",
  "seoScore": 75,
  "keywords": {"keyword": 3.5},
  "marketingStrategy": "A recommended marketing strategy",
  "socialSuggestions": {
    "facebook": ["post text"],
    "twitter": ["post text"],
    "instagram": ["post text"],
    "linkedin": ["post text"]
  }
}"#;

/// Build the instruction text for a website analysis.
///
/// Deterministic in the URL; the URL appears verbatim. No validation of the
/// URL's shape happens here.
pub fn build_prompt(url: &str) -> String {
    format!(
        r#"Analyze the website {url} and provide the following information:
1. A short description of the site's content
2. An SEO score from 0 to 100
3. The main keywords and their density as a percentage
4. A recommended marketing strategy
5. Suggested social media posts for Facebook, Twitter, Instagram and LinkedIn

Return ONLY a valid JSON object (no markdown, no explanation) matching this exact structure:

{schema}"#,
        url = url,
        schema = RESPONSE_SCHEMA,
    )
}
