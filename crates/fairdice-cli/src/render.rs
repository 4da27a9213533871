//! Formatting of structured protocol data: plain results in, text out.

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use fairdice_core::{Die, Prompt, RoundResult, Update, WinMatrix};

/// Text shown before reading one reply line for the given prompt.
pub fn prompt_text(prompt: &Prompt, dice: &[Die]) -> String {
    match prompt {
        Prompt::FirstMoverGuess => {
            "Guess the committed bit to decide who picks first (0 or 1, x to exit): ".to_string()
        }
        Prompt::PickDie { available } => {
            let mut text = String::from("Pick your die (x to exit):\n");
            for &i in available {
                text.push_str(&format!("  {i}: {}\n", dice[i]));
            }
            text.push_str("choice: ");
            text
        }
        Prompt::FaceContribution { party } => {
            format!("Add your number to the {party} throw (0-5, x to exit): ")
        }
    }
}

/// One line of output per protocol update.
pub fn update_text(update: &Update, dice: &[Die]) -> String {
    match update {
        Update::CommitPublished { modulus, digest } => {
            format!(
                "{} a value in [0,{modulus}) is committed: {digest}",
                "commit".cyan()
            )
        }
        Update::Revealed { key, secret } => {
            format!(
                "{} secret {secret}, key {key} (digest verified)",
                "reveal".cyan()
            )
        }
        Update::FirstMover {
            secret,
            guess,
            combined,
            first,
        } => {
            format!(
                "bit {secret} + guess {guess} = {combined} (mod 2): {} picks first",
                first.to_string().bold()
            )
        }
        Update::DiePicked { party, die } => {
            format!("{party} plays die {die} [{}]", dice[*die])
        }
        Update::Throw {
            party,
            secret,
            contribution,
            face_index,
            face_value,
        } => {
            format!(
                "{party} throw: ({secret} + {contribution}) mod 6 = face {face_index}, value {}",
                face_value.to_string().bold()
            )
        }
        Update::Round(outcome) => {
            let verdict = match outcome.result {
                RoundResult::HumanWins => "you win".green().bold(),
                RoundResult::ComputerWins => "computer wins".red().bold(),
                RoundResult::Draw => "draw".yellow().bold(),
            };
            format!(
                "your {} vs computer's {}: {verdict}",
                outcome.human_face, outcome.computer_face
            )
        }
        Update::InvalidInput => "not an available choice, try again".yellow().to_string(),
        Update::Exited => "round abandoned".to_string(),
    }
}

/// Probability-of-winning table: entry (row, col) is P(row beats col) to
/// four decimal places; the diagonal is a dash.
pub fn matrix_table(dice: &[Die], matrix: &WinMatrix) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec!["P(row beats col)".to_string()];
    header.extend((0..dice.len()).map(|i| format!("#{i}")));
    table.set_header(header);

    for (i, die) in dice.iter().enumerate() {
        let mut row = vec![format!("#{i} [{die}]")];
        for j in 0..dice.len() {
            if i == j {
                row.push("-".to_string());
            } else {
                row.push(format!("{:.4}", matrix.get(i, j)));
            }
        }
        table.add_row(row);
    }
    table
}
