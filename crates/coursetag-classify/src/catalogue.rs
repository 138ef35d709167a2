//! Built-in rule catalogues and fuzzy phrase lists.
//!
//! Patterns are regex bodies matched against normalised text (lower-case,
//! punctuation and hyphens already turned into single spaces). Word
//! boundaries are added by [`RuleSet::compile`](crate::rules::RuleSet::compile).

use crate::rules::{Rule, Scope, Tier};

type RuleSpec = (&'static str, &'static str);

// ── AI (gated) ───────────────────────────────────────────────────────────────

/// Specific enough to classify on their own.
const AI_PRIMARY: &[RuleSpec] = &[
    ("artificial_intelligence",    "artificial intelligence"),
    ("ai",                         "ai"),
    ("machine_learning",           "machine learning"),
    ("deep_learning",              "deep learning"),
    ("generative_ai",              "generative ai|genai"),
    ("llm",                        "large language models?|llms?"),
    ("gpt",                        "gpt"),
    ("chatgpt",                    "chatgpt"),
    ("neural_network",             "neural networks?|neural nets?"),
    ("reinforcement_learning",     "reinforcement learning"),
    ("nlp",                        "natural language processing|nlp"),
    ("computer_vision",            "computer vision|machine vision"),
    ("intelligent_agents",         "intelligent agents?"),
    ("expert_systems",             "expert systems?"),
    ("knowledge_representation",   "knowledge representation"),
    ("computational_intelligence", "computational intelligence"),
    ("speech_recognition",         "speech recognition"),
    ("statistical_learning",       "statistical learning"),
];

/// Too broad alone; count only next to an AI context signal.
const AI_SECONDARY: &[RuleSpec] = &[
    ("autonomous",            "autonomous"),
    ("robotics",              "robotics?|robots?"),
    ("data_science",          "data science"),
    ("data_mining",           "data mining"),
    ("pattern_recognition",   "pattern recognition"),
    ("image_processing",      "image processing"),
    ("information_retrieval", "information retrieval"),
    ("recommender_systems",   "recommend(ation|er) systems?"),
    ("decision_support",      "decision support"),
    ("intelligent_systems",   "intelligent (systems?|control)"),
    ("automation",            "automation|automated decision making"),
    ("predictive_analytics",  "predictive (analytics|modeling|modelling)"),
    ("big_data",              "big data"),
    ("algorithmic_bias",      "algorithmic (bias|fairness|accountability)"),
    ("ethics",                "ethic(s|al)?"),
];

const AI_CONTEXT: &[RuleSpec] = &[
    ("ai",                      "ai"),
    ("artificial_intelligence", "artificial intelligence"),
    ("machine_learning",        "machine learning"),
    ("algorithms",              "algorithms?"),
    ("neural",                  "neural"),
    ("learning_models",         "(learning|predictive|statistical) models?"),
    ("data_driven",             "data driven"),
];

pub const AI_FUZZY_PHRASES: &[&str] = &[
    "artificial intelligence",
    "machine learning",
    "deep learning",
    "generative ai",
    "large language model",
    "neural network",
    "reinforcement learning",
    "natural language processing",
    "computer vision",
    "intelligent agent",
    "computational intelligence",
];

// ── Ethics (conservative) ────────────────────────────────────────────────────

/// Strict word rules, title only.
const ETHICS_TITLE: &[RuleSpec] = &[
    ("title_ethics",      "ethic(s|al)?"),
    ("title_bioethics",   "bioethic(s|al)?"),
    ("title_cyberethics", "cyberethic(s|al)?"),
];

/// Phrases precise enough to trust in free-text descriptions.
const ETHICS_DESCRIPTION: &[RuleSpec] = &[
    ("professional_ethics",       "professional ethics"),
    ("ethical_decision_making",   "ethical decision making"),
    ("ethical_issues",            "ethical issues?"),
    ("ethics_and",                "ethics and"),
    ("ethics_of",                 "ethics of"),
    ("ethics_in",                 "ethics in"),
    ("research_ethics",           "research ethics"),
    ("ethical_standards",         "ethical standards?"),
    ("ethical_responsibilities",  "ethical responsibilit(y|ies)"),
    ("health_care_ethics",        "health ?care ethics"),
    ("environmental_ethics",      "environmental ethics"),
    ("bioethics",                 "bioethic(s|al)?"),
    ("cyberethics",               "cyberethic(s|al)?"),
    ("code_of_ethics",            "codes? of ethics"),
];

/// No fuzzy net by default; ethics stays conservative.
pub const ETHICS_FUZZY_PHRASES: &[&str] = &[];

// ── Broad AI candidates ──────────────────────────────────────────────────────

/// Permissive recall list for manual review. Every entry is primary.
const CANDIDATE_PATTERNS: &[RuleSpec] = &[
    ("artificial_intelligence",    "artificial intelligence"),
    ("ai",                         "ai"),
    ("machine_learning",           "machine learning"),
    ("deep_learning",              "deep learning"),
    ("generative_ai",              "generative ai"),
    ("llm",                        "large language models?"),
    ("llm",                        "llm"),
    ("gpt",                        "gpt"),
    ("chatgpt",                    "chatgpt"),
    ("neural_network",             "neural networks?"),
    ("reinforcement_learning",     "reinforcement learning"),
    ("nlp",                        "natural language processing"),
    ("nlp",                        "nlp"),
    ("computer_vision",            "computer vision"),
    ("machine_vision",             "machine vision"),
    ("image_processing",           "image processing"),
    ("pattern_recognition",        "pattern recognition"),
    ("data_mining",                "data mining"),
    ("information_retrieval",      "information retrieval"),
    ("expert_systems",             "expert systems?"),
    ("knowledge_representation",   "knowledge representation"),
    ("intelligent_systems",        "intelligent systems?"),
    ("intelligent_agents",         "intelligent agents?"),
    ("autonomous_systems",         "autonomous systems?"),
    ("autonomous",                 "autonomous"),
    ("robotics",                   "robotics?"),
    ("computational_intelligence", "computational intelligence"),
    ("speech_recognition",         "speech recognition"),
    ("recommendation_systems",     "recommendation systems?"),
    ("recommender_systems",        "recommender systems?"),
    ("decision_support",           "decision support"),
    ("intelligent_control",        "intelligent control"),
    ("data_science",               "data science"),
];

pub const CANDIDATE_FUZZY_PHRASES: &[&str] = &[
    "artificial intelligence",
    "machine learning",
    "deep learning",
    "generative ai",
    "large language model",
    "neural network",
    "reinforcement learning",
    "natural language processing",
    "computer vision",
    "pattern recognition",
    "data mining",
    "information retrieval",
    "expert systems",
    "knowledge representation",
    "intelligent systems",
    "intelligent agent",
    "autonomous systems",
    "computational intelligence",
    "speech recognition",
    "recommendation systems",
    "recommender systems",
    "decision support",
    "intelligent control",
    "data science",
];

fn expand(specs: &[RuleSpec], tier: Tier, scope: Scope) -> impl Iterator<Item = Rule> + '_ {
    specs.iter().map(move |(label, pattern)| Rule::new(*label, *pattern, tier, scope))
}

/// AI rules: primary, secondary and context tiers over title + description.
pub fn ai_rules() -> Vec<Rule> {
    expand(AI_PRIMARY, Tier::Primary, Scope::Combined)
        .chain(expand(AI_SECONDARY, Tier::Secondary, Scope::Combined))
        .chain(expand(AI_CONTEXT, Tier::Context, Scope::Combined))
        .collect()
}

/// Ethics rules. Title rules always apply; description rules only when
/// `include_description` is set.
pub fn ethics_rules(include_description: bool) -> Vec<Rule> {
    let mut rules: Vec<Rule> = expand(ETHICS_TITLE, Tier::Primary, Scope::Title).collect();
    if include_description {
        rules.extend(expand(ETHICS_DESCRIPTION, Tier::Primary, Scope::Description));
    }
    rules
}

/// Broad AI recall rules, all primary, no gating.
pub fn candidate_rules() -> Vec<Rule> {
    expand(CANDIDATE_PATTERNS, Tier::Primary, Scope::Combined).collect()
}
