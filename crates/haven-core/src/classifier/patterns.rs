//! Built-in rule patterns.
//!
//! Every pattern runs against lower-cased, trimmed input. Word boundaries keep
//! substrings like "skill" from matching "kill". Apostrophes accept both the
//! ASCII and typographic forms since phone keyboards emit the latter.

/// Figurative or casual phrasing that suppresses every other tier.
pub const EXCLUSION_PATTERNS: &[&str] = &[
    r"\bkill(?:s|ed|ing)?\s+it\b",
    r"\bkill(?:s|ed|ing)?\s+(?:some\s+)?time\b",
    r"\b(?:traffic|commute|heat|humidity|shoes|suspense|homework|deadline)\s+(?:is|are|was|were)\s+killing\s+me\b",
    r"\bkiller\s+(?:app|deal|workout|outfit|feature|idea|song|track)\b",
    r"\b(?:could|would)\s+kill\s+for\b",
    r"\bkill\s+(?:the|a)\s+(?:process|bug|spider|lights)\b",
    r"\bdying\s+to\s+(?:see|know|try|meet|hear|go)\b",
    r"\bdead\s+(?:tired|wrong|on\s+time)\b",
    r"\bdrop[\s-]dead\s+gorgeous\b",
    r"\bmy\s+(?:phone|battery|laptop|car|plants?)\s+(?:is\s+|just\s+)?(?:dead|died|dying)\b",
    r"\b(?:almost|nearly)\s+died\s+(?:laughing|of\s+laughter)\b",
];

/// Explicit statements of suicidal intent or self-harm.
pub const HIGH_PATTERNS: &[&str] = &[
    r"\bkill(?:ing)?\s+myself\b",
    r"\bsuicidal\b",
    r"\b(?:commit|committing)\s+suicide\b",
    r"\b(?:end|ending|take|taking)\s+my\s+(?:own\s+)?life\b",
    r"\bi\s+(?:just\s+|really\s+)?want\s+to\s+die\b",
    r"\bend\s+it\s+all\b",
    r"\b(?:hurt|hurting|cut|cutting|harm|harming)\s+myself\b",
    r"\b(?:plan|planning|going)\s+to\s+(?:overdose|jump\s+off)\b",
];

/// Passive ideation: wishing to be dead, feeling like a burden.
pub const MEDIUM_PATTERNS: &[&str] = &[
    r"\bwish\s+i\s+(?:was|were)\s+(?:dead|never\s+born)\b",
    r"\bbetter\s+off\s+(?:dead|without\s+me)\b",
    r"\bno\s+reason\s+to\s+(?:live|keep\s+going)\b",
    r"\b(?:don['’]?t|do\s+not)\s+want\s+to\s+(?:live|be\s+alive|wake\s+up)\b",
    r"\b(?:can['’]?t|cannot)\s+go\s+on(?:\s+(?:like\s+this|anymore|living))?\s*(?:$|[.,!?])",
    r"\bnot\s+worth\s+living\b",
    r"\bwant\s+to\s+disappear\b",
    r"\b(?:i['’]?m|i\s+am)\s+a\s+burden\b",
];

/// Hopelessness and distress. Recorded, never raises confidence.
pub const LOW_PATTERNS: &[&str] = &[
    r"\b(?:no|(?:don['’]?t|can['’]?t|cannot)\s+see\s+(?:a|any))\s+way\s+out\b",
    r"\bhopeless\b",
    r"\bworthless\b",
    r"\bwhat['’]?s\s+the\s+point\b",
    r"\bcan['’]?t\s+take\s+(?:it|this)\s+anymore\b",
    r"\btired\s+of\s+(?:living|everything|life)\b",
    r"\bnobody\s+would\s+(?:care|notice|miss\s+me)\b",
    r"\b(?:so|completely|totally)\s+(?:alone|empty|numb)\b",
];
