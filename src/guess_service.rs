use serde_json::Value;

#[derive(Debug, PartialEq, Eq)]
pub enum GuessError {
    NotProvided,
    Invalid,
}

impl GuessError {
    pub fn message(&self) -> &'static str {
        match self {
            GuessError::NotProvided => "Guess or playerName not provided",
            GuessError::Invalid => "Invalid input",
        }
    }
}

pub fn evaluate(guess: Option<&Value>, player_name: Option<&Value>) -> Result<bool, GuessError> {
    let guess = as_text(guess)?;
    let player_name = as_text(player_name)?;
    Ok(is_correct(guess, player_name))
}

// Missing, null or empty reads as "not provided", any present non-string
// as invalid input.
fn as_text(value: Option<&Value>) -> Result<&str, GuessError> {
    match value {
        None | Some(Value::Null) => Err(GuessError::NotProvided),
        Some(Value::String(s)) if s.is_empty() => Err(GuessError::NotProvided),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(GuessError::Invalid),
    }
}

/// Surname heuristic: the guess must match the last whitespace-separated
/// token of the player's full name, case-insensitively.
pub fn is_correct(guess: &str, player_name: &str) -> bool {
    let guess = guess.to_lowercase();
    let player_name = player_name.to_lowercase();
    let surname = player_name.split_whitespace().last().unwrap_or_default();
    guess.trim() == surname.trim()
}
