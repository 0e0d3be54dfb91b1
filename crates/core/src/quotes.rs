//! Trading quotes shown alongside the journal.

pub const TRADING_QUOTES: &[&str] = &[
    "Plan the trade, trade the plan.",
    "Cut your losses short and let your winners run.",
    "The market can stay irrational longer than you can stay solvent.",
    "The trend is your friend until it ends.",
    "Risk comes from not knowing what you are doing.",
    "It's not whether you're right or wrong, but how much you make when you're right and lose when you're wrong.",
    "The goal of a successful trader is to make the best trades. Money is secondary.",
    "Amateurs think about how much money they can make. Professionals think about how much they could lose.",
    "Every trader has strengths and weaknesses. Know yours.",
    "Do more of what works and less of what doesn't.",
    "Losses are part of the game. Revenge trading is not.",
    "No trade is also a position.",
];

/// The quote at `index`, wrapping around the list.
pub fn quote_at(index: usize) -> &'static str {
    TRADING_QUOTES[index % TRADING_QUOTES.len()]
}
