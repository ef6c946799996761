//! Text output for matchup results

use typedex_chart::TypeSet;
use typedex_dex::MatchupResult;

/// Shown to the user when a lookup fails
pub const NOT_FOUND_MESSAGE: &str = "Pokémon not found.";

fn join_types(types: TypeSet) -> String {
    if types.is_empty() {
        return "None".to_string();
    }
    types
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_counters(counters: &[String]) -> String {
    if counters.is_empty() {
        return "None found".to_string();
    }
    counters.join(", ")
}

/// Human-readable block for one result
pub fn render_text(info: &MatchupResult) -> String {
    format!(
        "Results for {}\nWeaknesses: {}\nStrengths: {}\nCounters: {}\n",
        info.name,
        join_types(info.weaknesses),
        join_types(info.strengths),
        join_counters(&info.counters)
    )
}
