//! The game module contains the core parts of the game, except for input handling.
//!
//! It contains the `init()` function to initialize and start the game loop, the session state
//! that holds the computer's one-shot move and the running score, and the outcome table that
//! scores a round.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use console::{style, Term};
use fastrand::Rng;

use crate::input::take_input;

/// The keyword that ends the session. It is matched exactly and case-sensitively against the
/// round's token, before any round output is produced.
const EXIT_KEYWORD: &str = "exit";

/// This struct holds information about the application when it comes to the command-line argument
/// parser of choice, which is clap. The game itself takes no flags, so the struct carries no
/// fields; parsing argv still gives the binary the usual `--help` and `--version` behavior.
#[derive(Parser)]
#[command(name = "roshambo", version, about)]
struct Cli;

/// This enum holds the three moves of the game. The computer commits to one of them for the whole
/// session; the user's side of a round stays a plain string token so that unrecognized input can
/// flow through the outcome table instead of being rejected.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Move {
    /// The first move, produced by a random draw of 0.
    Rock,
    /// The second move, produced by a random draw of 1.
    Paper,
    /// The third move, produced by a random draw of 2.
    Scissors,
}

impl Move {
    /// Draws the computer's move by picking uniformly over the three variants, in the order they
    /// are declared. This runs exactly once per session.
    fn draw(rng: &mut Rng) -> Self {
        match rng.usize(0..3) {
            0 => Self::Rock,
            1 => Self::Paper,
            _ => Self::Scissors,
        }
    }

    /// Returns the lowercase token that names the move, which is also the exact string the user
    /// must type to draw against it.
    pub(crate) const fn name(self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
        }
    }
}

/// This enum holds the variants to the result of a single round, to better transfer between the
/// outcome table, the score bookkeeping and the text printed to the terminal.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Outcome {
    /// The user typed the computer's own move name; the score does not change.
    Draw,
    /// The round landed on one of the three losing pairs; the score goes down by one.
    Lost,
    /// Any other non-draw token, recognized or not; the score goes up by one.
    Won,
}

impl Outcome {
    /// Returns the line printed for the round. The wording is part of the game's output contract
    /// and is matched on by the tests.
    pub(crate) const fn label(self) -> &'static str {
        match self {
            Self::Draw => "Draw",
            Self::Lost => "You lose",
            Self::Won => "You won",
        }
    }
}

/// This struct owns all of the state of one session: the computer's move, drawn once at
/// construction and never redrawn, and the running score. It is created in `init()` and lives on
/// the loop's stack; nothing about a session survives the process.
pub(crate) struct Session {
    /// The move the computer committed to for the whole session.
    computer: Move,
    /// The running score: wins minus losses across all non-exit rounds so far.
    score: i32,
}

impl Session {
    /// Creates a session by drawing the computer's single move. The score starts at zero.
    pub(crate) fn new(rng: &mut Rng) -> Self {
        Self {
            computer: Move::draw(rng),
            score: 0,
        }
    }

    /// Returns the name of the move the computer committed to.
    pub(crate) const fn computer_name(&self) -> &'static str {
        self.computer.name()
    }

    /// Scores one round. The round's token runs through the outcome table against the stored
    /// computer move, the result is folded into the score, and the outcome is handed back so the
    /// loop can print it. No round ever moves the score by more than one.
    pub(crate) fn play(&mut self, input: &str) -> Outcome {
        let outcome = round_outcome(input, self.computer);

        match outcome {
            Outcome::Draw => {}
            Outcome::Lost => self.score -= 1,
            Outcome::Won => self.score += 1,
        }

        outcome
    }

    /// Returns the running score.
    pub(crate) const fn score(&self) -> i32 {
        self.score
    }
}

/// Initializes the game state and handles literally everything. This is a `main()` function of
/// sorts though it is still called from main.rs.
///
/// This function specifically creates a new interface to the standard output, and a new rng
/// instance seeded once from the wall clock, from which the computer's move for the whole session
/// is drawn before the loop starts.
///
/// # Errors
///
/// The function may return any one of the following errors:
///
/// - io::Error
/// - dialoguer::Error
/// - SystemTimeError
pub fn init() -> Result<()> {
    let term = Term::stdout();
    let mut rng = Rng::with_seed(clock_seed()?);
    let _cli = Cli::parse();

    let mut session = Session::new(&mut rng);

    init_message(&term)?;

    // game loop
    loop {
        // prompt for the round's token
        let input = take_input(&term)?;

        // the exit keyword ends the session with no round output
        if input == EXIT_KEYWORD {
            break;
        }

        // reveal the computer's move, then score the round
        term.write_line(&format!(
            "Computer chose {}",
            style(session.computer_name()).bold()
        ))?;

        let outcome = session.play(&input);
        term.write_line(&format!("{}", style(outcome.label()).bold()))?;
    }

    farewell(&term, session.score())
}

/// This function seeds the session's random draw from the current wall-clock time, coarsely, as
/// seconds since the Unix epoch. The draw happens once per run, so the seed does too.
fn clock_seed() -> Result<u64> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs())
}

/// This function prints the closing summary once the loop has ended: the fixed farewell lines and
/// the final score. The process exits successfully no matter what the score is.
fn farewell(term: &Term, score: i32) -> Result<()> {
    term.write_line("Game over")?;
    term.write_line("The score is:")?;
    term.write_line(&format!("My score is: {score}"))?;

    Ok(())
}

/// This function initializes the message to be used at the start of the program, as well as a few
/// other fallible operations. Among these, the screen is cleared and the title of the console
/// window is set to the name of the game. The message tells the user the computer has already
/// decided, names the three valid moves and the exit keyword.
fn init_message(term: &Term) -> Result<()> {
    const MSG: &str = "Computer decided on its choice";
    let msg = style(MSG).bold();

    term.clear_screen()?;
    term.set_title("roshambo");

    term.write_line(&format!("{msg}"))?;
    term.write_line("Please enter your choice between rock, paper, scissors (or exit to stop)")?;

    Ok(())
}

/// This function takes the role of judge for a single round. The comparison is case-sensitive and
/// exact: a token equal to the computer's move name is a draw; the three pairs listed here are
/// the only losses; every other token wins, including tokens that name no move at all. The pair
/// set is the game's historical table and must not be swapped for a conventional one.
pub(crate) fn round_outcome(input: &str, computer: Move) -> Outcome {
    if input == computer.name() {
        return Outcome::Draw;
    }

    match (input, computer) {
        ("rock", Move::Paper) | ("paper", Move::Scissors) | ("scissors", Move::Rock) => {
            Outcome::Lost
        }
        _ => Outcome::Won,
    }
}

#[cfg(test)]
mod tests {
    //! Tests for the scoring core: the outcome table, the per-round score arithmetic and the
    //! random draw's mapping. The terminal shell around them is exercised by hand, not here.

    use super::{round_outcome, Move, Outcome, Session};

    /// A session with a fixed computer move, bypassing the random draw.
    fn fixed_session(computer: Move) -> Session {
        Session { computer, score: 0 }
    }

    /// The computer's own move name is a draw for every move.
    #[test]
    fn matching_token_draws() {
        for computer in [Move::Rock, Move::Paper, Move::Scissors] {
            assert_eq!(
                round_outcome(computer.name(), computer),
                Outcome::Draw,
                "a token equal to the computer's name must draw"
            );
        }
    }

    /// The three historical losing pairs, and only those, lose.
    #[test]
    fn losing_pairs_lose() {
        let losses = [
            ("rock", Move::Paper),
            ("paper", Move::Scissors),
            ("scissors", Move::Rock),
        ];

        for (token, computer) in losses {
            assert_eq!(
                round_outcome(token, computer),
                Outcome::Lost,
                "{token} against {computer:?} is a loss"
            );
        }
    }

    /// The remaining recognized non-draw pairs all win.
    #[test]
    fn remaining_pairs_win() {
        let wins = [
            ("rock", Move::Scissors),
            ("paper", Move::Rock),
            ("scissors", Move::Paper),
        ];

        for (token, computer) in wins {
            assert_eq!(
                round_outcome(token, computer),
                Outcome::Won,
                "{token} against {computer:?} is a win"
            );
        }
    }

    /// Tokens that name no move are never rejected; they win automatically.
    #[test]
    fn unrecognized_token_wins() {
        for computer in [Move::Rock, Move::Paper, Move::Scissors] {
            assert_eq!(
                round_outcome("banana", computer),
                Outcome::Won,
                "an unrecognized token must win"
            );
        }
    }

    /// The comparison is case-sensitive, so a capitalized move name falls through to a win even
    /// against the move it names.
    #[test]
    fn comparison_is_case_sensitive() {
        assert_eq!(
            round_outcome("Rock", Move::Rock),
            Outcome::Won,
            "a capitalized token is not the computer's name and must win"
        );
    }

    /// The score is the running sum of +1, -1 and 0 contributions, one per round. This replays
    /// the fixed scenario against a computer committed to rock.
    #[test]
    fn score_accumulates_per_round() {
        let mut session = fixed_session(Move::Rock);

        assert_eq!(
            session.play("rock"),
            Outcome::Draw,
            "rock against rock draws"
        );
        assert_eq!(session.score(), 0, "a draw leaves the score untouched");

        assert_eq!(session.play("paper"), Outcome::Won, "paper beats rock here");
        assert_eq!(session.score(), 1, "a win adds one");

        assert_eq!(
            session.play("scissors"),
            Outcome::Lost,
            "scissors loses to rock here"
        );
        assert_eq!(session.score(), 0, "a loss takes one back");

        assert_eq!(
            session.play("banana"),
            Outcome::Won,
            "garbage is an automatic win"
        );
        assert_eq!(session.score(), 1, "the automatic win still adds one");
    }

    /// The score can go negative; there is no floor at zero.
    #[test]
    fn score_goes_negative() {
        let mut session = fixed_session(Move::Paper);

        assert_eq!(session.play("rock"), Outcome::Lost, "rock loses to paper");
        assert_eq!(session.score(), -1, "a loss from zero goes negative");
    }

    /// A fresh session always commits to one of the three moves and starts at zero.
    #[test]
    fn new_session_commits_to_one_move() {
        let mut rng = fastrand::Rng::with_seed(0);
        let session = Session::new(&mut rng);

        assert!(
            matches!(
                session.computer_name(),
                "rock" | "paper" | "scissors"
            ),
            "the draw always lands on one of the three moves"
        );
        assert_eq!(session.score(), 0, "a fresh session starts at zero");
    }

    /// Each outcome prints its fixed line.
    #[test]
    fn labels_match_output_contract() {
        assert_eq!(Outcome::Draw.label(), "Draw", "draw label is fixed");
        assert_eq!(Outcome::Lost.label(), "You lose", "loss label is fixed");
        assert_eq!(Outcome::Won.label(), "You won", "win label is fixed");
    }
}
