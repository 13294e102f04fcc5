//! Embedded word lists
//!
//! Built-in lists compiled into the binary, one per difficulty tier and word
//! length. Each list serves as both the target pool and the guess dictionary.

use crate::game::Difficulty;

pub const EASY_3: &[&str] = &[
    "cat", "dog", "sun", "hat", "bat", "car", "bus", "cup", "pen", "box", "fox", "red", "bed",
    "map", "jar", "key", "egg", "ice", "arm", "leg", "pig", "cow", "owl", "bee", "ant", "net",
    "top", "toy", "fan", "man", "ten", "sky", "day", "art", "bag", "can", "hot", "run", "sit",
    "win", "act", "tac",
];

pub const EASY_4: &[&str] = &[
    "book", "tree", "fish", "bird", "cake", "door", "fire", "frog", "game", "hand", "home",
    "kite", "lamp", "moon", "nest", "park", "rain", "ship", "shoe", "star", "sock", "time",
    "wind", "wolf", "milk", "rock", "sand", "snow", "duck", "farm", "gift", "hill",
];

pub const EASY_5: &[&str] = &[
    "apple", "beach", "bread", "chair", "cloud", "dance", "earth", "field", "grass", "happy",
    "horse", "house", "juice", "light", "money", "music", "night", "ocean", "paper", "party",
    "plant", "river", "smile", "sugar", "table", "tiger", "train", "water", "world", "grand",
    "mango", "speed", "erase", "crane", "slate", "llama", "robot", "floor",
];

pub const MEDIUM_5: &[&str] = &[
    "blaze", "charm", "crisp", "dwarf", "flair", "glyph", "haste", "knack", "lunar", "mirth",
    "nudge", "oasis", "plume", "quirk", "rivet", "scald", "thyme", "vigor", "waltz", "yacht",
    "zesty", "adept", "brisk", "civic", "dozen", "epoch",
];

pub const MEDIUM_6: &[&str] = &[
    "anchor", "bridge", "candle", "castle", "dragon", "effort", "forest", "garden", "hammer",
    "island", "jungle", "kitten", "lagoon", "marble", "needle", "orange", "parrot", "puzzle",
    "rabbit", "saddle", "temple", "velvet", "wander", "yellow", "zipper",
];

pub const MEDIUM_7: &[&str] = &[
    "balloon", "cabinet", "captain", "diamond", "dolphin", "fantasy", "gallery", "harvest",
    "journey", "kingdom", "lantern", "mystery", "network", "orchard", "pattern", "quarter",
    "rainbow", "station", "thunder", "uniform", "village", "weather",
];

pub const HARD_7: &[&str] = &[
    "abolish", "bravado", "cadence", "dilemma", "epitome", "fervent", "gimmick", "halcyon",
    "insipid", "jocular", "kinetic", "maudlin", "nostrum", "obscure", "panacea", "quibble",
    "reverie", "stoical", "tenuous", "umbrage", "vicious", "wistful", "zealous",
];

pub const HARD_8: &[&str] = &[
    "absolute", "abundant", "boundary", "carnival", "crescent", "diligent", "eloquent",
    "envelope", "frontier", "gorgeous", "hesitate", "illusion", "jubilant", "kindling",
    "lukewarm", "magnetic", "nebulous", "obstacle", "paradigm", "quandary", "resolute",
    "serenity", "tangible", "ubiquity", "vigilant", "yearling", "zeppelin",
];

pub const HARD_9: &[&str] = &[
    "adventure", "beautiful", "celebrate", "dangerous", "education", "fantastic", "geography",
    "happiness", "important", "knowledge", "landscape", "marvelous", "necessary", "orchestra",
    "peninsula", "quicksand", "realistic", "sculpture", "telescope", "universal", "vegetable",
    "wonderful", "yesterday",
];

/// Built-in list for a tier and length; empty when the tier has none
#[must_use]
pub fn builtin(difficulty: Difficulty, length: usize) -> &'static [&'static str] {
    match (difficulty, length) {
        (Difficulty::Easy, 3) => EASY_3,
        (Difficulty::Easy, 4) => EASY_4,
        (Difficulty::Easy, 5) => EASY_5,
        (Difficulty::Medium, 5) => MEDIUM_5,
        (Difficulty::Medium, 6) => MEDIUM_6,
        (Difficulty::Medium, 7) => MEDIUM_7,
        (Difficulty::Hard, 7) => HARD_7,
        (Difficulty::Hard, 8) => HARD_8,
        (Difficulty::Hard, 9) => HARD_9,
        _ => &[],
    }
}
