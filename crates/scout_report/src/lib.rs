use scout_core::{CompetitorQuery, CompetitorRecord, Result};

pub const ABSENT_MARKER: &str = "no data found";

/// Section order is fixed; every header appears in every report so that
/// an absent field is visibly absent instead of silently missing.
pub const SECTIONS: [&str; 7] = [
    "Overview",
    "Pricing",
    "Strengths",
    "Weaknesses",
    "Social Presence",
    "Recent News",
    "Competitive Angle",
];

const RULE_WIDTH: usize = 50;

/// Renders the final plain-text report. Pure string formatting: no
/// network, no clock reads, so the same record always yields the same
/// bytes.
pub fn assemble(record: &CompetitorRecord, query: &CompetitorQuery) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = Vec::new();

    out.push(rule.clone());
    out.push(format!("COMPETITOR ANALYSIS: {}", query.raw.to_uppercase()));
    out.push(rule);
    out.push(String::new());
    out.push(format!("Domain:   {}", query.domain));
    out.push(format!(
        "Analyzed: {}",
        record.analyzed_at.format("%Y-%m-%d")
    ));
    out.push(String::new());

    for section in SECTIONS {
        out.push(format!("## {}", section));
        out.push(render_section(record, section));
        out.push(String::new());
    }

    out.join("\n")
}

/// Structured rendering of the same record for `--json` consumers.
pub fn to_json(record: &CompetitorRecord, query: &CompetitorQuery) -> Result<String> {
    let value = serde_json::json!({
        "query": query,
        "record": record,
    });
    Ok(serde_json::to_string_pretty(&value)?)
}

fn render_section(record: &CompetitorRecord, section: &str) -> String {
    match section {
        "Overview" => render_text(&record.overview),
        "Pricing" => render_text(&record.pricing),
        "Strengths" => render_list(&record.strengths),
        "Weaknesses" => render_list(&record.weaknesses),
        "Social Presence" => render_text(&record.social_presence),
        "Recent News" => render_text(&record.recent_news),
        "Competitive Angle" => render_text(&record.competitive_angle),
        _ => unreachable!("unknown section: {}", section),
    }
}

fn render_text(field: &Option<String>) -> String {
    match field {
        Some(text) if !text.trim().is_empty() => text.trim().to_string(),
        _ => ABSENT_MARKER.to_string(),
    }
}

fn render_list(items: &[String]) -> String {
    if items.is_empty() {
        return ABSENT_MARKER.to_string();
    }
    items
        .iter()
        .map(|item| format!("  - {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}
