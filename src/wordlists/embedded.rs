//! Embedded secret word list
//!
//! Every entry is a valid 5-letter uppercase word.

/// Words a secret is drawn from when no fixed secret or custom list is given
pub const SECRETS: &[&str] = &[
    "BEANS", "BRAVE", "CRANE", "DREAM", "EAGLE", "FLUTE", "BREAK", "HEART", "IVORY", "JELLY",
    "KNOCK", "MELON", "SCORE", "NOBLE", "OCEAN", "PEARL", "QUIET", "RAVEN", "SMILE", "TIGER",
    "URBAN", "VIVID", "WHALE", "TULIP", "YIELD", "ZEBRA", "CANDY", "DELTA", "EMBER", "FROST",
    "GLOBE", "HONEY", "INBOX", "JUMPY", "KARMA", "LUNAR", "MIRTH", "NURSE", "ORBIT", "PIANO",
    "QUILT", "RIDER", "SPICE", "TOAST", "ULTRA", "VAPOR", "WRIST", "YOUTH", "ZESTY", "CRISP",
];

/// Number of words in SECRETS
pub const SECRETS_COUNT: usize = 50;
