//! End-of-round verdicts, told from the human's side of the table.
//!
//! The human is trying to lose, so a human win is the "bad" ending.

use serde::{Deserialize, Serialize};

use crate::core::Mark;
use crate::rules::{EndingMode, Outcome};

/// How a finished round reads to the human.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// The opponent completed a line.
    HumanLost,
    /// The human completed a line on their own.
    HumanWon,
    /// The human won, and the opponent gave a forced win away at least once
    /// this round.
    OpponentSuicide,
    /// Board filled without a line.
    Draw,
}

impl Verdict {
    /// Verdict for a finished round.
    #[must_use]
    pub fn of(outcome: Outcome, human: Mark, ending_mode: EndingMode) -> Self {
        match outcome {
            Outcome::Draw => Verdict::Draw,
            Outcome::Winner(mark) if mark != human => Verdict::HumanLost,
            Outcome::Winner(_) => match ending_mode {
                EndingMode::Regular => Verdict::HumanWon,
                EndingMode::Suicide => Verdict::OpponentSuicide,
            },
        }
    }

    /// Message shown under the board.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Verdict::HumanLost => "Congratulations! You have lost, you did the impossible thing!",
            Verdict::HumanWon => "You have won. Try to lose, it's not that simple",
            Verdict::OpponentSuicide => {
                "That was a nice try but CPU player went mad and committed suicide, \
                 so you have won again. Give it another try, good luck!"
            }
            Verdict::Draw => "Draw. Try again, I trust in you!",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdicts() {
        let regular = EndingMode::Regular;
        let suicide = EndingMode::Suicide;

        assert_eq!(Verdict::of(Outcome::Draw, Mark::A, suicide), Verdict::Draw);
        assert_eq!(Verdict::of(Outcome::Winner(Mark::B), Mark::A, regular), Verdict::HumanLost);
        assert_eq!(Verdict::of(Outcome::Winner(Mark::B), Mark::A, suicide), Verdict::HumanLost);
        assert_eq!(Verdict::of(Outcome::Winner(Mark::A), Mark::A, regular), Verdict::HumanWon);
        assert_eq!(
            Verdict::of(Outcome::Winner(Mark::A), Mark::A, suicide),
            Verdict::OpponentSuicide
        );
    }

    #[test]
    fn test_messages_are_distinct() {
        let all = [
            Verdict::HumanLost,
            Verdict::HumanWon,
            Verdict::OpponentSuicide,
            Verdict::Draw,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.message(), b.message());
            }
        }
        assert!(Verdict::OpponentSuicide.to_string().contains("suicide"));
    }

    #[test]
    fn test_message_text() {
        assert_eq!(
            Verdict::HumanWon.message(),
            "You have won. Try to lose, it's not that simple"
        );
        assert_eq!(
            Verdict::OpponentSuicide.message(),
            "That was a nice try but CPU player went mad and committed suicide, so you have won \
             again. Give it another try, good luck!"
        );
        assert_eq!(
            Verdict::HumanLost.message(),
            "Congratulations! You have lost, you did the impossible thing!"
        );
        assert_eq!(Verdict::Draw.message(), "Draw. Try again, I trust in you!");
    }
}
