use scout_core::{RawSourceBundle, SourceKind};

pub const UNAVAILABLE_MARKER: &str = "(no data retrieved)";

const SCHEMA_INSTRUCTIONS: &str = r#"Respond with a single JSON object and nothing else, using exactly these keys:
{
  "overview": string or null,
  "pricing": string or null,
  "strengths": array of strings,
  "weaknesses": array of strings,
  "social_presence": string or null,
  "recent_news": string or null,
  "competitive_angle": string or null
}

Rules:
- Only state facts supported by the source material above.
- If a source is marked "(no data retrieved)", the fields that depend on
  it must be null (or an empty array). Never invent values for them.
- If the sources contain no evidence for a field, set it to null.
- "competitive_angle" is a positioning suggestion for a rival of this
  company, derived from the weaknesses you found; null if none apply."#;

/// Builds the synthesis prompt for one bundle. Unavailable sources are
/// labeled explicitly so the model has no blank to fill with guesses.
pub fn build_prompt(bundle: &RawSourceBundle) -> String {
    let mut prompt = format!(
        "You are analyzing the competitor '{}' (domain: {}).\n\
         Extract a structured competitor profile from the raw source \
         material below.\n\n",
        bundle.query.raw, bundle.query.domain
    );

    for kind in [SourceKind::Website, SourceKind::News, SourceKind::Social] {
        let text = bundle
            .source(kind)
            .as_text()
            .unwrap_or(UNAVAILABLE_MARKER);
        prompt.push_str(&format!("=== {} ===\n{}\n\n", kind.label(), text));
    }

    prompt.push_str(SCHEMA_INSTRUCTIONS);
    prompt
}
