//! Offline tool names from fixed rotating lists.

use async_trait::async_trait;

use super::{GeneratedTool, GenerationError, GenerationRequest, ToolGenerator};

type Entry = (&'static str, &'static str, &'static str);

/// Product-style names for the first generated tools.
const EARLY: &[Entry] = &[
    ("Copilot Ultra", "Writes flawless code in seconds", "✨"),
    ("Claude 4 Max", "Reads any document instantly", "📊"),
    ("Gemini Pro X", "Next-generation multimodal analysis", "🔮"),
    ("Llama 3 Turbo", "Open weights, closed deadlines", "🦙"),
    ("Codex Neo", "Turns comments into programs", "🧩"),
    ("Devin 2.0", "Ships features while you sleep", "🛠"),
    ("Mistral Next", "Small model, large opinions", "🌬"),
];

/// Futuristic names once the catalog passes index 25.
const ADVANCED: &[Entry] = &[
    ("Neural Architect", "Builds neural networks without code", "🧠"),
    ("Quantum Agent", "An autonomous agent in superposition", "⚛️"),
    ("Meta Synapse", "Merges a thousand AIs into one", "🌐"),
    ("Hyper Synth", "Synthesises whole codebases", "🎛"),
    ("Agent Smith Pro", "Replicates itself across servers", "🕶"),
];

/// Cosmic names past index 35.
const LEGENDARY: &[Entry] = &[
    ("Omega Prime", "Builds AIs that build AIs", "👁"),
    ("Celestial Forge", "A forge for digital universes", "🌌"),
    ("Infinity Core", "Unbounded compute", "♾️"),
    ("Genesis Engine", "Compiles reality from scratch", "🌠"),
    ("Cosmic Creator", "Writes the laws of physics", "🪐"),
];

fn entries_for(index: usize) -> &'static [Entry] {
    match index {
        0..=25 => EARLY,
        26..=35 => ADVANCED,
        _ => LEGENDARY,
    }
}

/// Deterministic generator: the same request always yields the same tool,
/// and never a name already in the request.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalGenerator;

impl LocalGenerator {
    pub fn pick(request: &GenerationRequest) -> GeneratedTool {
        let entries = entries_for(request.tool_index);
        let start = request.tool_index % entries.len();
        let rotated = entries[start..].iter().chain(&entries[..start]);

        for &(name, description, icon) in rotated {
            if !request.is_name_taken(name) {
                return tool(name.to_string(), description, icon);
            }
        }

        // Every base name is taken: number a variant of the first one.
        let (name, description, icon) = entries[start];
        let mut mark = 2;
        loop {
            let candidate = format!("{name} Mk {mark}");
            if !request.is_name_taken(&candidate) {
                return tool(candidate, description, icon);
            }
            mark += 1;
        }
    }
}

fn tool(name: String, description: &str, icon: &str) -> GeneratedTool {
    GeneratedTool {
        name,
        description: description.to_string(),
        icon: icon.to_string(),
    }
}

#[async_trait(?Send)]
impl ToolGenerator for LocalGenerator {
    fn label(&self) -> &'static str {
        "local generator"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedTool, GenerationError> {
        Ok(Self::pick(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{ToolSummary, MAX_DESCRIPTION_CHARS, MAX_NAME_CHARS};

    fn request(index: usize, names: &[&str]) -> GenerationRequest {
        GenerationRequest {
            all_tools: names
                .iter()
                .map(|n| ToolSummary {
                    name: n.to_string(),
                    description: String::new(),
                    icon: String::new(),
                })
                .collect(),
            tool_index: index,
        }
    }

    #[test]
    fn deterministic_for_same_request() {
        let r = request(18, &["ChatGPT"]);
        assert_eq!(LocalGenerator::pick(&r), LocalGenerator::pick(&r));
    }

    #[test]
    fn rotates_with_index() {
        assert_ne!(
            LocalGenerator::pick(&request(18, &[])).name,
            LocalGenerator::pick(&request(19, &[])).name
        );
    }

    #[test]
    fn naming_tier_follows_index() {
        assert!(EARLY.iter().any(|e| e.0 == LocalGenerator::pick(&request(20, &[])).name));
        assert!(ADVANCED.iter().any(|e| e.0 == LocalGenerator::pick(&request(30, &[])).name));
        assert!(LEGENDARY.iter().any(|e| e.0 == LocalGenerator::pick(&request(50, &[])).name));
    }

    #[test]
    fn skips_taken_names() {
        let first = LocalGenerator::pick(&request(40, &[])).name;
        let second = LocalGenerator::pick(&request(40, &[first.as_str()])).name;
        assert_ne!(first, second);
    }

    #[test]
    fn numbers_variants_when_list_exhausted() {
        let mut names: Vec<String> = LEGENDARY.iter().map(|e| e.0.to_string()).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let picked = LocalGenerator::pick(&request(40, &refs)).name;
        assert!(picked.ends_with("Mk 2"), "{picked}");

        names.push(picked.clone());
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let next = LocalGenerator::pick(&request(40, &refs)).name;
        assert_ne!(next, picked);
        assert!(next.ends_with("Mk 3"), "{next}");
    }

    #[test]
    fn entries_fit_display_limits() {
        for (name, description, _) in EARLY.iter().chain(ADVANCED).chain(LEGENDARY) {
            assert!(name.chars().count() <= MAX_NAME_CHARS);
            assert!(description.chars().count() <= MAX_DESCRIPTION_CHARS);
        }
    }
}
