//! Thought trap categories and their bilingual keyword tables.
//!
//! Keywords are matched as plain substrings of the lowercased input, so
//! every entry here must already be lowercase.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::language::Language;

// ── Categories ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ThoughtTrapCategory {
    AllOrNothing,
    Overgeneralization,
    MentalFilter,
    DisqualifyingPositive,
    JumpingToConclusions,
    Magnification,
    EmotionalReasoning,
    ShouldStatements,
    Labeling,
    Personalization,
}

impl ThoughtTrapCategory {
    /// Canonical order, also the order of the keyword table.
    pub const ALL: [ThoughtTrapCategory; 10] = [
        ThoughtTrapCategory::AllOrNothing,
        ThoughtTrapCategory::Overgeneralization,
        ThoughtTrapCategory::MentalFilter,
        ThoughtTrapCategory::DisqualifyingPositive,
        ThoughtTrapCategory::JumpingToConclusions,
        ThoughtTrapCategory::Magnification,
        ThoughtTrapCategory::EmotionalReasoning,
        ThoughtTrapCategory::ShouldStatements,
        ThoughtTrapCategory::Labeling,
        ThoughtTrapCategory::Personalization,
    ];

    /// Stable identifier, identical to the serialized form.
    pub fn id(self) -> &'static str {
        self.info().id
    }

    /// Localization key for the display name.
    pub fn name_key(self) -> &'static str {
        self.info().name_key
    }

    /// English display name, used when the host has no translation.
    pub fn display_name(self) -> &'static str {
        self.info().name
    }

    pub fn description(self) -> &'static str {
        self.info().description
    }

    pub fn examples(self) -> &'static [&'static str] {
        self.info().examples
    }

    /// Keyword set for `language`.
    pub fn keywords(self, language: Language) -> &'static [&'static str] {
        let entry = &TRAP_KEYWORDS[self as usize];
        debug_assert_eq!(entry.category, self);
        match language {
            Language::English => entry.en,
            Language::Turkish => entry.tr,
        }
    }

    fn info(self) -> &'static CategoryInfo {
        &CATEGORY_INFO[self as usize]
    }
}

impl fmt::Display for ThoughtTrapCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown thought trap category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for ThoughtTrapCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ThoughtTrapCategory::ALL
            .into_iter()
            .find(|c| c.id() == wanted)
            .ok_or_else(|| UnknownCategory(wanted.to_string()))
    }
}

// ── Display metadata ────────────────────────────────────────────────

struct CategoryInfo {
    id: &'static str,
    name_key: &'static str,
    name: &'static str,
    description: &'static str,
    examples: &'static [&'static str],
}

static CATEGORY_INFO: [CategoryInfo; 10] = [
    CategoryInfo {
        id: "allOrNothing",
        name_key: "trap_all_or_nothing",
        name: "All-or-Nothing Thinking",
        description: "Seeing things in black and white: if it's not perfect, it's a total failure.",
        examples: &[
            "\"I got a B on the exam. I'm a complete failure.\"",
            "\"If I can't do it perfectly, there's no point in trying.\"",
            "\"My diet is ruined because I ate one cookie.\"",
        ],
    },
    CategoryInfo {
        id: "overgeneralization",
        name_key: "trap_overgeneralization",
        name: "Overgeneralization",
        description: "Taking one negative event and expecting it to happen over and over again.",
        examples: &[
            "\"I didn't get the job. I'll never find work.\"",
            "\"This relationship failed. I'm destined to be alone.\"",
            "\"I failed the test again. I always mess things up.\"",
        ],
    },
    CategoryInfo {
        id: "mentalFilter",
        name_key: "trap_mental_filter",
        name: "Mental Filter",
        description: "Focusing only on the negatives while ignoring the positives.",
        examples: &[
            "\"One person criticized my presentation. The whole thing was terrible.\"",
            "\"I got great feedback from 9 people, but I can only think about the one negative comment.\"",
            "\"The trip was amazing but I keep thinking about the one rainy day.\"",
        ],
    },
    CategoryInfo {
        id: "disqualifyingPositive",
        name_key: "trap_disqualifying_positive",
        name: "Disqualifying the Positive",
        description: "Dismissing positive experiences by insisting they don't count.",
        examples: &[
            "\"They only said that to be nice. They didn't really mean it.\"",
            "\"I got the promotion, but it's only because nobody else wanted it.\"",
            "\"She smiled at me, but she probably does that with everyone.\"",
        ],
    },
    CategoryInfo {
        id: "jumpingToConclusions",
        name_key: "trap_jumping_conclusions",
        name: "Jumping to Conclusions",
        description: "Making negative assumptions without actual evidence.",
        examples: &[
            "\"My friend didn't text back. They must be angry at me.\"",
            "\"My boss wants to meet. I'm definitely getting fired.\"",
            "\"They looked at me and whispered. They're talking about me.\"",
        ],
    },
    CategoryInfo {
        id: "magnification",
        name_key: "trap_magnification",
        name: "Magnification",
        description: "Blowing things out of proportion or shrinking their importance.",
        examples: &[
            "\"I made a small mistake at work. I'll probably get fired.\"",
            "\"I stuttered during the speech. Everyone thinks I'm incompetent.\"",
            "\"I forgot their birthday. Our entire friendship is over.\"",
        ],
    },
    CategoryInfo {
        id: "emotionalReasoning",
        name_key: "trap_emotional_reasoning",
        name: "Emotional Reasoning",
        description: "Believing something must be true because you feel it strongly.",
        examples: &[
            "\"I feel anxious about flying, so it must be dangerous.\"",
            "\"I feel guilty, so I must have done something wrong.\"",
            "\"I feel stupid, so I must actually be stupid.\"",
        ],
    },
    CategoryInfo {
        id: "shouldStatements",
        name_key: "trap_should_statements",
        name: "Should Statements",
        description: "Putting pressure on yourself with rigid rules about how things should be.",
        examples: &[
            "\"I should always be productive. Resting means I'm lazy.\"",
            "\"I shouldn't feel sad. Other people have it worse.\"",
            "\"A good parent should never lose their patience.\"",
        ],
    },
    CategoryInfo {
        id: "labeling",
        name_key: "trap_labeling",
        name: "Labeling",
        description: "Attaching a negative label to yourself instead of describing the behavior.",
        examples: &[
            "\"I forgot to reply. I'm such a terrible person.\"",
            "\"I didn't finish on time. I'm a total loser.\"",
            "\"I made a mistake. I'm an idiot.\"",
        ],
    },
    CategoryInfo {
        id: "personalization",
        name_key: "trap_personalization",
        name: "Personalization",
        description: "Blaming yourself for things outside your control.",
        examples: &[
            "\"My team lost the project. It's all my fault.\"",
            "\"My friend seems upset. I must have done something wrong.\"",
            "\"The kids are struggling at school. I'm a bad parent.\"",
        ],
    },
];

// ── Keyword table ───────────────────────────────────────────────────

struct TrapKeywords {
    category: ThoughtTrapCategory,
    en: &'static [&'static str],
    tr: &'static [&'static str],
}

static TRAP_KEYWORDS: [TrapKeywords; 10] = [
    TrapKeywords {
        category: ThoughtTrapCategory::AllOrNothing,
        en: &[
            "always", "never", "completely", "totally", "perfect",
            "ruined", "nothing", "everything", "worst", "impossible",
        ],
        tr: &[
            "hep", "hiç", "asla", "tamamen", "kesinlikle",
            "mükemmel", "berbat", "hiçbir şey", "her şey", "imkansız",
        ],
    },
    TrapKeywords {
        category: ThoughtTrapCategory::Overgeneralization,
        en: &[
            "always", "never", "everyone", "nobody", "every time",
            "nothing ever",
        ],
        tr: &[
            "hep", "hiçbir zaman", "herkes", "kimse", "her seferinde",
            "hiçbir şey",
        ],
    },
    TrapKeywords {
        category: ThoughtTrapCategory::MentalFilter,
        en: &["only", "just the bad", "nothing good", "all negative", "can't see"],
        tr: &["sadece", "kötü olan", "iyi bir şey yok", "hep olumsuz", "göremiyorum"],
    },
    TrapKeywords {
        category: ThoughtTrapCategory::DisqualifyingPositive,
        en: &["doesn't count", "they were just", "only because", "not really", "but that's"],
        tr: &["sayılmaz", "sadece şey", "sırf", "gerçekten değil", "ama o"],
    },
    TrapKeywords {
        category: ThoughtTrapCategory::JumpingToConclusions,
        en: &["they think", "they must", "i know they", "probably", "i bet", "going to be"],
        tr: &["düşünüyordur", "kesin", "bence", "muhtemelen", "eminim", "olacak"],
    },
    TrapKeywords {
        category: ThoughtTrapCategory::Magnification,
        en: &[
            "catastrophe", "disaster", "end of the world", "worst thing",
            "horrible", "can't handle",
        ],
        tr: &["felaket", "yıkım", "dünyanın sonu", "en kötü", "korkunç", "kaldıramam"],
    },
    TrapKeywords {
        category: ThoughtTrapCategory::EmotionalReasoning,
        en: &["i feel like", "feels like", "must be true", "i feel so", "because i feel"],
        tr: &[
            "hissediyorum", "gibi hissediyorum", "doğru olmalı",
            "çok hissediyorum", "hissettiğim için",
        ],
    },
    TrapKeywords {
        category: ThoughtTrapCategory::ShouldStatements,
        en: &["should", "must", "have to", "ought to", "supposed to", "need to be"],
        tr: &["yapmalı", "etmeli", "zorunda", "gerekiyor", "lazım", "olmalı"],
    },
    TrapKeywords {
        category: ThoughtTrapCategory::Labeling,
        en: &[
            "i'm a", "i'm so", "i'm such a", "loser", "idiot", "stupid",
            "worthless", "failure",
        ],
        tr: &[
            "ben bir", "ben çok", "aptal", "salak", "değersiz",
            "işe yaramaz", "başarısız",
        ],
    },
    TrapKeywords {
        category: ThoughtTrapCategory::Personalization,
        en: &["my fault", "because of me", "i caused", "i'm to blame", "if only i"],
        tr: &[
            "benim yüzümden", "benim hatam", "ben sebep oldum",
            "suçlu benim", "keşke ben",
        ],
    },
];
