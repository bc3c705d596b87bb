use crate::database::models::Outcome;

const WIN_WORDS: &[&str] = &["victoire", "win"];
const LOSS_WORDS: &[&str] = &["défaite", "defaite", "lose", "loss"];
const DRAW_WORDS: &[&str] = &["égalité", "egalite", "draw"];

/// Maps a free-text match result to an outcome. Total: anything that does
/// not match a vocabulary — including `None` and empty strings — counts as
/// a loss, which is how the product has always scored unreadable results.
/// Win is checked before Loss, Loss before Draw.
pub fn classify(result: Option<&str>) -> Outcome {
    let text = match result {
        Some(raw) => raw.trim().to_lowercase(),
        None => return Outcome::Loss,
    };

    if text == "v" || WIN_WORDS.iter().any(|w| text.contains(w)) {
        return Outcome::Win;
    }
    if text == "d" || LOSS_WORDS.iter().any(|w| text.contains(w)) {
        return Outcome::Loss;
    }
    // "nul" must match as a word: "annulée" contains it, and a cancelled
    // game is not a draw
    if text == "n"
        || DRAW_WORDS.iter().any(|w| text.contains(w))
        || text.split_whitespace().any(|word| word == "nul")
    {
        return Outcome::Draw;
    }

    Outcome::Loss
}
