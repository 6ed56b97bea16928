//! Command resolution: raw console input to a canonical [`CommandId`].
//!
//! Resolution order, first match wins:
//! 1. the trimmed, lowercased input against the locale's alias table
//! 2. the diacritic-stripped input against the same table
//! 3. keyword intent detection over the diacritic-stripped input
//!
//! Anything else is unresolved. Resolution is pure: it never touches the
//! console's history or queue.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::command::CommandId;
use crate::locale::Locale;

/// Spanish command words.
const ALIASES_ES: &[(&str, CommandId)] = &[
    ("ayuda", CommandId::Help),
    ("help", CommandId::Help),
    ("comandos", CommandId::Help),
    ("?", CommandId::Help),
    ("sobre-mi", CommandId::About),
    ("sobremi", CommandId::About),
    ("whoami", CommandId::About),
    ("contratar", CommandId::Hire),
    ("precios", CommandId::Pricing),
    ("tarifas", CommandId::Pricing),
    ("contacto", CommandId::Contact),
    ("proyectos", CommandId::Projects),
    ("stack", CommandId::Stack),
    ("tecnologias", CommandId::Stack),
    ("cv", CommandId::Cv),
    ("curriculum", CommandId::Cv),
    ("github", CommandId::Github),
    ("linkedin", CommandId::Linkedin),
    ("limpiar", CommandId::Clear),
    ("clear", CommandId::Clear),
    ("cls", CommandId::Clear),
];

/// English command words.
const ALIASES_EN: &[(&str, CommandId)] = &[
    ("help", CommandId::Help),
    ("commands", CommandId::Help),
    ("?", CommandId::Help),
    ("about", CommandId::About),
    ("whoami", CommandId::About),
    ("hire", CommandId::Hire),
    ("pricing", CommandId::Pricing),
    ("rates", CommandId::Pricing),
    ("contact", CommandId::Contact),
    ("projects", CommandId::Projects),
    ("stack", CommandId::Stack),
    ("skills", CommandId::Stack),
    ("cv", CommandId::Cv),
    ("resume", CommandId::Cv),
    ("github", CommandId::Github),
    ("linkedin", CommandId::Linkedin),
    ("clear", CommandId::Clear),
    ("cls", CommandId::Clear),
];

/// A keyword set for natural-language intent detection.
#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    pub command: CommandId,
    /// Accent-free, lowercase fragments matched by substring containment.
    pub keywords: &'static [&'static str],
}

/// Intent rules in priority order. The first rule with any matching keyword wins.
///
/// Matching is plain containment, so a keyword hidden inside a longer word
/// still matches ("hey" in "they").
pub const INTENTS: &[IntentRule] = &[
    IntentRule {
        command: CommandId::Greeting,
        keywords: &[
            "hola",
            "buenas",
            "buenos dias",
            "saludos",
            "hello",
            "hey",
            "good morning",
            "good afternoon",
        ],
    },
    IntentRule {
        command: CommandId::About,
        keywords: &[
            "quien eres",
            "quien sos",
            "quien es lucas",
            "sobre ti",
            "presentate",
            "who are you",
            "who is lucas",
            "about you",
            "tell me about",
        ],
    },
    IntentRule {
        command: CommandId::Hire,
        keywords: &[
            "contratar",
            "trabajar contigo",
            "trabajar juntos",
            "disponible",
            "freelance",
            "hire",
            "hiring",
            "work with you",
            "work together",
            "available",
        ],
    },
    IntentRule {
        command: CommandId::Pricing,
        keywords: &[
            "precio",
            "cuanto cuesta",
            "cuanto cobras",
            "tarifa",
            "presupuesto",
            "price",
            "pricing",
            "cost",
            "rates",
            "budget",
            "quote",
        ],
    },
    IntentRule {
        command: CommandId::Contact,
        keywords: &[
            "contacto",
            "contactar",
            "correo",
            "escribirte",
            "email",
            "mail",
            "contact",
            "reach you",
        ],
    },
    IntentRule {
        command: CommandId::Projects,
        keywords: &[
            "proyecto",
            "portfolio",
            "portafolio",
            "trabajos",
            "repos",
            "project",
            "showcase",
        ],
    },
    IntentRule {
        command: CommandId::Stack,
        keywords: &[
            "stack",
            "tecnolog",
            "react",
            "typescript",
            "tailwind",
            "habilidades",
            "herramientas",
            "skills",
            "tech",
            "tools",
            "framework",
        ],
    },
    IntentRule {
        command: CommandId::Cv,
        keywords: &["curriculum", "cv", "resume", "experiencia", "experience"],
    },
    IntentRule {
        command: CommandId::Thanks,
        keywords: &["gracias", "thanks", "thank you", "thx", "genial", "great"],
    },
];

/// The alias table for a locale.
pub fn aliases(locale: Locale) -> &'static [(&'static str, CommandId)] {
    match locale {
        Locale::Es => ALIASES_ES,
        Locale::En => ALIASES_EN,
    }
}

/// Trim and lowercase.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Normalize, decompose (NFD) and drop combining marks, so accents and
/// tildes fall away while every other character is kept as is.
///
/// `"Quién eres"` becomes `"quien eres"`; emoji and non-Latin scripts pass
/// through unchanged.
pub fn strip_diacritics(input: &str) -> String {
    normalize(input)
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Resolve raw input to a command for the given locale.
///
/// Returns `None` when nothing matches (including empty input).
pub fn resolve(input: &str, locale: Locale) -> Option<CommandId> {
    let normalized = normalize(input);
    if normalized.is_empty() {
        return None;
    }

    let table = aliases(locale);
    if let Some(command) = lookup_alias(table, &normalized) {
        return Some(command);
    }

    let stripped = strip_diacritics(&normalized);
    if let Some(command) = lookup_alias(table, &stripped) {
        return Some(command);
    }

    detect_intent(&stripped)
}

/// Scan already-stripped text for the first matching intent.
pub fn detect_intent(stripped: &str) -> Option<CommandId> {
    INTENTS
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| stripped.contains(kw)))
        .map(|rule| rule.command)
}

fn lookup_alias(table: &[(&str, CommandId)], word: &str) -> Option<CommandId> {
    table
        .iter()
        .find(|(alias, _)| *alias == word)
        .map(|(_, command)| *command)
}
