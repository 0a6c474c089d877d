use serde::Serialize;

use crate::services::i18n::{translate, Lang};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Greeting,
    Hours,
    Prices,
    Booking,
    Location,
    Gel,
    Acrylic,
    Pedicure,
    GiftCards,
    Fallback,
}

struct Rule {
    topic: Topic,
    reply_key: &'static str,
    keywords: &'static [&'static str],
    hand_off: bool,
}

/// Order matters: ties go to the earlier rule. Keywords match whole words; a
/// trailing `*` matches any word starting with the stem.
const RULES: &[Rule] = &[
    Rule {
        topic: Topic::Booking,
        reply_key: "chat.booking",
        keywords: &["book*", "appointment*", "reserv*", "schedul*", "cita*", "availab*"],
        hand_off: true,
    },
    Rule {
        topic: Topic::Prices,
        reply_key: "chat.prices",
        keywords: &["price*", "cost*", "how much", "$", "precio*", "cuánto", "cuanto"],
        hand_off: false,
    },
    Rule {
        topic: Topic::Hours,
        reply_key: "chat.hours",
        keywords: &["hour*", "open*", "close*", "sunday*", "horario*", "abren"],
        hand_off: false,
    },
    Rule {
        topic: Topic::Gel,
        reply_key: "chat.gel",
        keywords: &["gel", "gels", "shellac"],
        hand_off: false,
    },
    Rule {
        topic: Topic::Acrylic,
        reply_key: "chat.acrylic",
        keywords: &["acrylic*", "extension*", "full set*", "acrílico*", "acrilico*"],
        hand_off: false,
    },
    Rule {
        topic: Topic::Pedicure,
        reply_key: "chat.pedicure",
        keywords: &["pedi*", "feet", "foot", "toe*", "pies"],
        hand_off: false,
    },
    Rule {
        topic: Topic::GiftCards,
        reply_key: "chat.gift",
        keywords: &["gift*", "voucher*", "regalo*"],
        hand_off: false,
    },
    Rule {
        topic: Topic::Location,
        reply_key: "chat.location",
        keywords: &["where", "address*", "location*", "located", "parking", "dónde", "donde"],
        hand_off: false,
    },
    Rule {
        topic: Topic::Greeting,
        reply_key: "chat.greeting",
        keywords: &["hello", "hi", "hey", "hola", "good morning"],
        hand_off: false,
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    pub topic: Topic,
    pub reply: String,
    pub hand_off: bool,
}

/// Lowercased words joined by single spaces, padded with a space on each side.
/// `$` is kept as a word of its own.
fn normalize(message: &str) -> String {
    let mut words = Vec::new();
    let mut word = String::new();
    for c in message.chars() {
        if c.is_alphanumeric() {
            word.extend(c.to_lowercase());
            continue;
        }
        if !word.is_empty() {
            words.push(std::mem::take(&mut word));
        }
        if c == '$' {
            words.push("$".to_string());
        }
    }
    if !word.is_empty() {
        words.push(word);
    }
    format!(" {} ", words.join(" "))
}

fn matches(text: &str, keyword: &str) -> bool {
    match keyword.strip_suffix('*') {
        Some(stem) => text.contains(&format!(" {stem}")),
        None => text.contains(&format!(" {keyword} ")),
    }
}

/// Scores each rule by how many of its keywords appear in the message.
pub fn respond(lang: Lang, message: &str) -> ChatReply {
    let text = normalize(message);

    let mut best: Option<(&Rule, usize)> = None;
    for rule in RULES {
        let score = rule.keywords.iter().filter(|k| matches(&text, k)).count();
        if score > 0 && best.map_or(true, |(_, s)| score > s) {
            best = Some((rule, score));
        }
    }

    match best {
        Some((rule, _)) => ChatReply {
            topic: rule.topic,
            reply: translate(lang, rule.reply_key),
            hand_off: rule.hand_off,
        },
        None => ChatReply {
            topic: Topic::Fallback,
            reply: translate(lang, "chat.fallback"),
            hand_off: true,
        },
    }
}
