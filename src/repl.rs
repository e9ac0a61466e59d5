use anyhow::{Context, Result};
use golf_scorecard::model::{Course, Player, PlayerId};
use golf_scorecard::roster::{PlayerPatch, Roster};
use golf_scorecard::score::{hole_line, summarize, tens_summary, SectionSummary};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::str::FromStr;

const HELP: &str = "\
commands:
  add                           add a player (max 4)
  name <player> <name>          set a player's name
  handicap <player> <n>         set a player's handicap
  score <player> <hole> <gross> record a gross score
  ten <player> <hole>           toggle a Game-of-10s pick (max 10)
  players                       list players
  card                          print the scorecard
  tens                          print the Game-of-10s standings
  help                          show this help
  quit                          exit";

/// Run the interactive score-entry loop against one course.
///
/// # Errors
/// Returns an error if the line editor fails.
pub fn run_scorecard_repl(course: &Course, play_tens: bool) -> Result<()> {
    println!(
        "Scoring {} (par {}). Press Ctrl-C or Ctrl-D to quit.",
        course.name,
        course.total_par()
    );
    let mut rl = DefaultEditor::new().context("init repl")?;
    let mut roster = Roster::new();
    // The card starts with one open row, like the paper version.
    if let Some(id) = roster.add_player() {
        println!("Added player {id}.");
    }
    loop {
        match rl.readline("scorecard> ") {
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                rl.add_history_entry(input)?;
                if !dispatch(input, &mut roster, course, play_tens) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("read line"),
        }
    }
    Ok(())
}

fn dispatch(input: &str, roster: &mut Roster, course: &Course, play_tens: bool) -> bool {
    let mut parts = input.split_whitespace();
    let command = parts.next().unwrap_or_default();
    match command {
        "help" => println!("{HELP}"),
        "quit" | "exit" => return false,
        "add" => match roster.add_player() {
            Some(id) => println!("Added player {id}."),
            None => println!("Roster is full (4 players)."),
        },
        "name" => {
            let Some(id) = parse_token::<i64>(parts.next()).map(PlayerId) else {
                println!("usage: name <player> <name>");
                return true;
            };
            let name = parts.collect::<Vec<_>>().join(" ");
            if name.is_empty() {
                println!("usage: name <player> <name>");
                return true;
            }
            roster.update_player(
                id,
                PlayerPatch {
                    name: Some(name),
                    ..PlayerPatch::default()
                },
            );
        }
        "handicap" => {
            let (Some(id), Some(handicap)) = (
                parse_token::<i64>(parts.next()).map(PlayerId),
                parse_token::<u32>(parts.next()),
            ) else {
                println!("usage: handicap <player> <n>");
                return true;
            };
            roster.update_player(
                id,
                PlayerPatch {
                    handicap: Some(handicap),
                    ..PlayerPatch::default()
                },
            );
        }
        "score" => {
            let (Some(id), Some(hole), Some(gross)) = (
                parse_token::<i64>(parts.next()).map(PlayerId),
                parse_token::<u8>(parts.next()),
                parse_token::<u32>(parts.next()),
            ) else {
                println!("usage: score <player> <hole> <gross>");
                return true;
            };
            match roster.record_gross(id, course, hole, gross) {
                Ok(entry) => println!("Hole {hole}: gross {} net {}", entry.gross, entry.net),
                Err(err) => println!("{err}"),
            }
        }
        "ten" if play_tens => {
            let (Some(id), Some(hole)) = (
                parse_token::<i64>(parts.next()).map(PlayerId),
                parse_token::<u8>(parts.next()),
            ) else {
                println!("usage: ten <player> <hole>");
                return true;
            };
            match roster.toggle_ten(id, course, hole) {
                Ok(()) => {
                    if let Some(player) = roster.player(id) {
                        println!(
                            "{}: {} picked",
                            display_name(player),
                            tens_summary(player, course).count_display()
                        );
                    }
                }
                Err(err) => println!("{err}"),
            }
        }
        "players" => {
            for player in roster.players() {
                println!(
                    "{} {} (hcp {})",
                    player.id,
                    display_name(player),
                    player.handicap
                );
            }
        }
        "card" => print_card(roster, course),
        "tens" if play_tens => print_tens(roster, course),
        "ten" | "tens" => println!("Game of 10s is off; start with --play-tens."),
        _ => {
            println!("Unknown command: {input}");
            println!("{HELP}");
        }
    }
    true
}

fn parse_token<T: FromStr>(token: Option<&str>) -> Option<T> {
    token.and_then(|t| t.parse().ok())
}

fn display_name(player: &Player) -> &str {
    if player.name.is_empty() {
        "(unnamed)"
    } else {
        &player.name
    }
}

fn print_card(roster: &Roster, course: &Course) {
    for player in roster.players() {
        println!("{} (hcp {})", display_name(player), player.handicap);
        for hole in &course.holes {
            let line = hole_line(player, course, hole);
            let gross = line.gross.map_or_else(|| "-".to_string(), |g| g.to_string());
            let net = line.net.map_or_else(|| "-".to_string(), |n| n.to_string());
            println!(
                "  {:>2}  par {}  strokes {}  gross {gross:>2}  net {net:>3}",
                hole.number, hole.par, line.strokes_received
            );
        }
        let summary = summarize(player, course);
        print_section("front", summary.front);
        print_section("back", summary.back);
        print_section("total", summary.total);
    }
}

fn print_section(label: &str, section: SectionSummary) {
    println!(
        "  {label:>5}: gross {} net {} strokes {}",
        section.gross, section.net, section.strokes
    );
}

fn print_tens(roster: &Roster, course: &Course) {
    for player in roster.players() {
        let summary = tens_summary(player, course);
        println!(
            "{}: {} picked, total {} ({})",
            display_name(player),
            summary.count_display(),
            summary.total,
            summary.over_under_display()
        );
    }
}
