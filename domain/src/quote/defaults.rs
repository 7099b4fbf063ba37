//! Built-in starter quotes

use super::entities::Quote;

const DEFAULT_QUOTES: &[(&str, &str)] = &[
    ("The only way to do great work is to love what you do.", "Motivation"),
    ("Life is what happens when you're busy making other plans.", "Life"),
    ("The future belongs to those who believe in the beauty of their dreams.", "Dreams"),
    (
        "Success is not final, failure is not fatal: it is the courage to continue that counts.",
        "Success",
    ),
    ("In the middle of difficulty lies opportunity.", "Opportunity"),
    ("The best way to predict the future is to invent it.", "Innovation"),
    ("Be the change you wish to see in the world.", "Change"),
    ("Everything you've ever wanted is on the other side of fear.", "Courage"),
    ("The journey of a thousand miles begins with one step.", "Journey"),
    (
        "What you get by achieving your goals is not as important as what you become by achieving your goals.",
        "Growth",
    ),
];

/// Quotes shown before anything has been saved.
pub fn default_quotes() -> Vec<Quote> {
    DEFAULT_QUOTES
        .iter()
        .filter_map(|(text, category)| Quote::new(text, category).ok())
        .collect()
}
