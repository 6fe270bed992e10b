//! Mode definitions for the reconstruct pipeline.
//!
//! A mode is a register the model is asked to write in. Each mode carries a
//! compiled-in instruction that is embedded verbatim in the prompt.
//!
//! # Key matching
//!
//! Keys are matched exactly and case-sensitively. `"standard"` is not
//! `"Standard"`: it resolves to the Standard instruction through the
//! unknown-key fallback, the same path older clients sending retired mode
//! names take. The lowercase register's key is `"LOWERCASE"`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A rewriting register (Value Object).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Natural, human-sounding rewrite of the original
    #[default]
    Standard,
    /// Formal scholarly register
    Academic,
    /// Concise professional register
    Executive,
    /// Warm first-person voice for letters and statements
    Epistolary,
    /// Persuasive, opinionated register
    Dialectic,
    /// Aggressively pruned prose
    Minimalist,
    /// All-lowercase, low-ceremony register
    #[serde(rename = "LOWERCASE")]
    Lowercase,
}

const STANDARD_INSTRUCTION: &str = "Refine this text to sound more natural and human-like while maintaining its original meaning. Add subtle nuance and improve the flow.";

const ACADEMIC_INSTRUCTION: &str = "Refine this text for an academic audience. Maintain formal tone while improving clarity, precision, and scholarly expression.";

const EXECUTIVE_INSTRUCTION: &str = "Refine this text for executive communication. Make it concise, impactful, and professional while preserving key information.";

const EPISTOLARY_INSTRUCTION: &str = "Refine this text in a warm, direct, first-person voice. Make it feel personal and slightly vulnerable. Vary sentence length to mimic a speaking voice. Use \"I\" statements naturally. This is for cover letters, personal emails, artist statements, and manifestos.";

const DIALECTIC_INSTRUCTION: &str = "Refine this text to be persuasive, logical, and sharp with strong contrasts. Prioritize rhetorical devices like antithesis and rhetorical questions. Make it feel like it has a strong opinion. This is for opinion pieces, debate prep, critical essays, and legal arguments.";

const MINIMALIST_INSTRUCTION: &str = "Refine this text to be Hemingway-esque: short, punchy, with no adverbs. Aggressively prune the text, stripping away all fluff to leave only the bones. Use the fewest words possible while preserving meaning. This is for UX copy, landing page headers, and fast-paced newsletters.";

const LOWERCASE_INSTRUCTION: &str = "Refine this text in a high-competence, low-effort style. Force all text to lowercase with zero capitalization. Use periods where they naturally belong (end of sentences, abbreviations). Use soft punctuation (line breaks or commas) only for rapid-fire thoughts or lists. Strip out corporate language like \"synergy,\" \"circling back,\" and \"delighted to.\" Be direct and use the fewest words possible to convey meaning. Fix any dictation errors. This mimics the Alt-Twitter or Dev aesthetic - natural, lowercase, but grammatically sound.";

impl Mode {
    /// Every mode, in the order the workspace presents them.
    pub fn all() -> &'static [Mode] {
        &[
            Mode::Standard,
            Mode::Academic,
            Mode::Executive,
            Mode::Epistolary,
            Mode::Dialectic,
            Mode::Minimalist,
            Mode::Lowercase,
        ]
    }

    /// The wire key clients send for this mode.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Standard => "Standard",
            Mode::Academic => "Academic",
            Mode::Executive => "Executive",
            Mode::Epistolary => "Epistolary",
            Mode::Dialectic => "Dialectic",
            Mode::Minimalist => "Minimalist",
            Mode::Lowercase => "LOWERCASE",
        }
    }

    /// The instruction embedded in the prompt for this mode.
    pub fn instruction(&self) -> &'static str {
        match self {
            Mode::Standard => STANDARD_INSTRUCTION,
            Mode::Academic => ACADEMIC_INSTRUCTION,
            Mode::Executive => EXECUTIVE_INSTRUCTION,
            Mode::Epistolary => EPISTOLARY_INSTRUCTION,
            Mode::Dialectic => DIALECTIC_INSTRUCTION,
            Mode::Minimalist => MINIMALIST_INSTRUCTION,
            Mode::Lowercase => LOWERCASE_INSTRUCTION,
        }
    }

    /// Exact, case-sensitive key lookup.
    pub fn from_key(key: &str) -> Option<Mode> {
        Mode::all().iter().copied().find(|m| m.label() == key)
    }

    /// Resolve an optional client key, falling back to [`Mode::Standard`].
    pub fn resolve_or_default(key: Option<&str>) -> Mode {
        key.and_then(Mode::from_key).unwrap_or_default()
    }

    /// Whether the lowercase post-processing pass applies.
    pub fn is_lowercase(&self) -> bool {
        matches!(self, Mode::Lowercase)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Static lookup from mode key to prompt instruction.
///
/// The table is compiled in; there is no runtime registration.
pub struct ModeRegistry;

impl ModeRegistry {
    /// Return the instruction for `key`. Never fails: missing or unknown keys
    /// yield the Standard instruction.
    pub fn resolve(key: Option<&str>) -> &'static str {
        Mode::resolve_or_default(key).instruction()
    }
}
