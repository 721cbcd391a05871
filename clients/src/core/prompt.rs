//! Prompt construction for the judgment source

use shared::Candidate;

const OUTPUT_CONTRACT: &[&str] = &[
    "Output rules:",
    "- Reply with exactly one JSON object and nothing else: no prose, no code fences.",
    r#"- Shape: {"url": string, "confidence": number}"#,
    "- confidence is a real number between 0 and 1 describing how sure you are that the URL is what the user wants.",
    "- url must be a complete absolute http or https URL.",
];

/// Prompt for the speculative path: pick a URL from the query alone
pub fn build_prediction_prompt(query: &str, comparison_budget: u32) -> String {
    let mut lines = vec![
        "You are a search assistant. Interpret the user's intent precisely and".to_string(),
        "choose the single most relevant destination URL for their query.".to_string(),
        format!(
            "You may weigh up to {} alternatives internally, but the final answer is exactly one URL.",
            comparison_budget.max(1)
        ),
        String::new(),
    ];
    lines.extend(OUTPUT_CONTRACT.iter().map(|line| line.to_string()));
    lines.push(String::new());
    lines.push(format!("User query: {query}"));
    lines.join("\n")
}

/// Prompt for the conclusive path: choose among retrieved candidates
pub fn build_selection_prompt(query: &str, candidates: &[Candidate]) -> String {
    let mut lines = vec![
        "You are a search assistant. The user typed a query and a web search returned".to_string(),
        "the candidates below in rank order. Choose the one candidate that best satisfies".to_string(),
        "the user's intent. Answer with the candidate's URL exactly as listed.".to_string(),
        String::new(),
    ];
    lines.extend(OUTPUT_CONTRACT.iter().map(|line| line.to_string()));
    lines.push(String::new());
    lines.push(format!("User query: {query}"));
    lines.push(String::new());
    lines.push("Candidates:".to_string());

    for (index, candidate) in candidates.iter().enumerate() {
        lines.push(format!(
            "{}. {}",
            index + 1,
            candidate.title.as_deref().unwrap_or("(untitled)")
        ));
        lines.push(format!("   URL: {}", candidate.url));
        if let Some(snippet) = candidate.snippet.as_deref().filter(|s| !s.trim().is_empty()) {
            lines.push(format!("   Snippet: {}", snippet.trim()));
        }
    }

    lines.join("\n")
}
