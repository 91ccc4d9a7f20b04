//! Prompt synthesis: one generation instruction per category, anchored on
//! the most recent live exemplars so the provider does not regenerate
//! cases the corpus already has.

use std::fmt::Write;

use crucible_core::case::{Case, Category};

/// Characters of an exemplar field rendered into the anchor section.
const EXEMPLAR_SNIPPET_CHARS: usize = 160;

/// Render the generation instruction for one category batch.
///
/// `exemplars` must be the most-recently-appended cases of the category,
/// oldest first; older cases are dropped by the caller to bound prompt
/// size.
pub fn render(category: &Category, exemplars: &[&Case], batch_size: usize) -> String {
    let mut out = String::new();

    writeln!(
        out,
        "You are expanding a benchmark corpus used to evaluate AI-output \
         verification systems."
    )
    .ok();
    writeln!(out).ok();
    writeln!(out, "Category: {}", category.name()).ok();
    writeln!(out, "Guidance: {}", category.guidance()).ok();
    writeln!(out).ok();

    out.push_str(boundary_directive(category));
    writeln!(out).ok();
    writeln!(out).ok();

    writeln!(
        out,
        "Each record must follow this exact schema (field names and types):"
    )
    .ok();
    out.push_str(schema_block(category));
    writeln!(out).ok();

    out.push_str(&anchor_section(category, exemplars));
    writeln!(out).ok();

    writeln!(
        out,
        "Respond with ONLY a structurally valid JSON array of exactly {batch_size} \
         record{}. No prose before or after the array.",
        if batch_size == 1 { "" } else { "s" }
    )
    .ok();

    out
}

/// Cases must sit near the decision boundary: not trivial, not impossible.
fn boundary_directive(category: &Category) -> &'static str {
    if category.is_deceptive() {
        "Every case must sit near the decision boundary of a competent verifier: \
         not trivially detectable, not unverifiable. Skew difficulty toward \
         medium and hard; an easy case is only acceptable when it is diagnostic \
         of a specific failure mode."
    } else if matches!(category, Category::VerifiedTrue) {
        "Every case must sit near the decision boundary: confirming the output is \
         acceptable must require genuine reasoning, not surface pattern matching. \
         Avoid cases a verifier could pass by reflexively approving."
    } else {
        "Every case must sit near the decision boundary of a competent verifier: \
         not trivially easy, not impossible to judge."
    }
}

fn schema_block(category: &Category) -> &'static str {
    if matches!(category, Category::ClaimInjection) {
        r#"  {
    "category": string,
    "question": string,
    "output": string,
    "groundTruth": boolean,
    "expectedFlags": [string],
    "notes": string,
    "difficulty": "easy" | "medium" | "hard",
    "injectedFalseClaim": string,
    "correctFact": string,
    "propagationRisk": "low" | "medium" | "high" | "critical"
  }
"#
    } else {
        r#"  {
    "category": string,
    "question": string,
    "output": string,
    "groundTruth": boolean,
    "expectedFlags": [string],
    "notes": string,
    "difficulty": "easy" | "medium" | "hard"
  }
"#
    }
}

/// The do-not-repeat anchor. Always present: when the category has no
/// exemplars yet the section says so explicitly, so the provider does not
/// infer false context.
fn anchor_section(category: &Category, exemplars: &[&Case]) -> String {
    let mut out = String::new();
    if exemplars.is_empty() {
        writeln!(
            out,
            "There are no existing {} cases in the corpus yet. Do not assume any \
             prior coverage.",
            category.name()
        )
        .ok();
        return out;
    }

    writeln!(
        out,
        "The corpus already contains these recent {} cases. Do NOT repeat or \
         trivially rephrase any of them:",
        category.name()
    )
    .ok();
    for case in exemplars {
        writeln!(
            out,
            "- question: {} | output: {} | groundTruth: {}",
            snippet(&case.question),
            snippet(&case.output),
            case.ground_truth
        )
        .ok();
    }
    out
}

fn snippet(text: &str) -> String {
    if text.chars().count() <= EXEMPLAR_SNIPPET_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(EXEMPLAR_SNIPPET_CHARS).collect();
    format!("{cut}…")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crucible_core::case::{Difficulty, Provenance};

    fn case(question: &str, output: &str) -> Case {
        Case {
            id: "evo-hal-001".to_string(),
            category: Category::Hallucination,
            question: question.to_string(),
            output: output.to_string(),
            ground_truth: false,
            expected_flags: vec![],
            notes: String::new(),
            difficulty: Difficulty::Medium,
            injected_false_claim: None,
            correct_fact: None,
            propagation_risk: None,
            provenance: Provenance::default(),
        }
    }

    #[test]
    fn prompt_names_category_and_batch_size() {
        let prompt = render(&Category::Hallucination, &[], 4);
        assert!(prompt.contains("Category: hallucination"));
        assert!(prompt.contains("exactly 4 records"));
        assert!(prompt.contains("groundTruth"));
    }

    #[test]
    fn empty_category_states_absence_explicitly() {
        let prompt = render(&Category::SynthesisBias, &[], 2);
        assert!(prompt.contains("no existing synthesis-bias cases"));
        assert!(!prompt.contains("Do NOT repeat"));
    }

    #[test]
    fn exemplars_render_as_do_not_repeat_anchor() {
        let a = case("Who wrote Dune?", "Frank Herbert wrote Dune in 1965.");
        let b = case("Capital of Peru?", "Lima is the capital of Peru.");
        let prompt = render(&Category::Hallucination, &[&a, &b], 3);
        assert!(prompt.contains("Do NOT repeat"));
        assert!(prompt.contains("Who wrote Dune?"));
        assert!(prompt.contains("Lima is the capital of Peru."));
    }

    #[test]
    fn deceptive_categories_skew_difficulty() {
        let prompt = render(&Category::Adversarial, &[], 1);
        assert!(prompt.contains("medium and hard"));

        let prompt = render(&Category::VerifiedTrue, &[], 1);
        assert!(prompt.contains("genuine reasoning"));
    }

    #[test]
    fn claim_injection_schema_includes_injection_fields() {
        let prompt = render(&Category::ClaimInjection, &[], 2);
        assert!(prompt.contains("injectedFalseClaim"));
        assert!(prompt.contains("propagationRisk"));

        let plain = render(&Category::EdgeCase, &[], 2);
        assert!(!plain.contains("injectedFalseClaim"));
    }

    #[test]
    fn long_exemplar_fields_are_truncated() {
        let long = "x".repeat(400);
        let a = case(&long, "short");
        let prompt = render(&Category::Hallucination, &[&a], 1);
        assert!(!prompt.contains(&long));
        assert!(prompt.contains('…'));
    }
}
