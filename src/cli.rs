//! Command-line surface. The web app this trainer grew out of posed the
//! same spots over HTTP; here each study tool is a subcommand and the
//! quiz runs as an interactive loop.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use clap::{Parser, Subcommand};
use colored::Colorize;

use crate::cards::{parse_board, parse_combo, parse_hand_type};
use crate::display;
use crate::error::TrainerResult;
use crate::hand_strength::evaluate_hand;
use crate::mdf::analyze_mdf;
use crate::open_ranges::in_open_range;
use crate::positions::Position;
use crate::power_number::{assign_power_number, players_behind, should_shove};
use crate::quiz::{generate, StudyMode};
use crate::ranges::{resolve_range, KNOWN_RANGE_IDS};
use crate::three_bet::{three_bet_actions, three_bet_defence};

#[derive(Parser)]
#[command(name = "trainer", about = "Preflop range and MDF study tool", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show a named range as a 13x13 grid
    Range {
        /// Range id, e.g. OPEN_CO, BB_DEFENCE_vs_BTN, SB_RFI
        id: String,
        /// Emit the combo list as JSON instead of the grid
        #[arg(long)]
        json: bool,
    },
    /// MDF breakdown for a range on a flop vs a bet size
    Mdf {
        /// Range id, e.g. OPEN_UTG
        range: String,
        /// Flop, e.g. Ks8h3d
        board: String,
        /// Bet size as a fraction of pot, e.g. 0.5
        bet: f64,
        #[arg(long)]
        json: bool,
        /// Also list the combos inside each bucket
        #[arg(long)]
        hands: bool,
    },
    /// Classify a specific hand on a flop
    Eval {
        /// Exact combo, e.g. AsKh
        combo: String,
        /// Flop, e.g. Ks8h3d
        board: String,
    },
    /// Open-or-fold verdict for a hand at a position
    Open {
        position: String,
        /// Hand type, e.g. AKs, T9o, QQ
        hand: String,
    },
    /// Allowed actions facing an open
    Threebet {
        hero: String,
        villain: String,
        hand: String,
    },
    /// Defend-or-fold after your open gets 3-bet
    Defend {
        hand: String,
        /// Hero is in position vs the 3-bettor
        #[arg(long)]
        ip: bool,
    },
    /// Power-number shove/fold at a given M
    Shove {
        position: String,
        hand: String,
        /// M-value (stack in orbits); shoving is only defined below 6
        m: f64,
    },
    /// Interactive quiz
    Quiz {
        /// open | sb | 3bet | 3bet_defence | shove | bb | mdf | mix
        #[arg(long, default_value = "mix")]
        mode: String,
        /// Number of questions
        #[arg(long, default_value_t = 10)]
        count: usize,
    },
    /// List the known range ids
    Ranges,
}

pub fn run() {
    let cli = Cli::parse();
    if let Err(err) = dispatch(cli.command) {
        eprintln!("{} {}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn dispatch(command: Command) -> TrainerResult<()> {
    match command {
        Command::Range { id, json } => {
            let combos = resolve_range(&id);
            if json {
                let labels: Vec<String> = combos.iter().map(|c| c.to_string()).collect();
                println!("{}", serde_json::to_string_pretty(&labels).unwrap_or_default());
            } else {
                println!("{}", display::range_summary(&id, &combos));
                print!("{}", display::render_range_grid(&combos));
                if combos.is_empty() {
                    println!("{}", "unknown range id — nothing matched".yellow());
                    println!("known ids: {}", KNOWN_RANGE_IDS.join(", "));
                }
            }
            Ok(())
        }
        Command::Mdf {
            range,
            board,
            bet,
            json,
            hands,
        } => {
            let board = parse_board(&board)?;
            let combos = resolve_range(&range);
            let result = analyze_mdf(&combos, &board, bet)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result).unwrap_or_default());
                return Ok(());
            }
            println!("{} on {} vs {:.2} pot", range.bold(), board, bet);
            println!("{}", display::render_mdf_table(&result));
            println!("{}", display::mdf_verdict(&result));
            if hands {
                for row in &result.buckets {
                    if let Some(members) = &row.hands {
                        println!("{}: {}", row.name.bold(), members.join(" "));
                    }
                }
            }
            Ok(())
        }
        Command::Eval { combo, board } => {
            let combo = parse_combo(&combo)?;
            let board = parse_board(&board)?;
            println!("{}", evaluate_hand(combo, &board));
            Ok(())
        }
        Command::Open { position, hand } => {
            let pos = Position::from_str(&position)?;
            let hand = parse_hand_type(&hand)?;
            let verdict = if in_open_range(pos, hand) { "open" } else { "fold" };
            println!("{} from {}: {}", hand, pos, verdict.bold());
            Ok(())
        }
        Command::Threebet {
            hero,
            villain,
            hand,
        } => {
            let hero = Position::from_str(&hero)?;
            let villain = Position::from_str(&villain)?;
            let hand = parse_hand_type(&hand)?;
            let actions = three_bet_actions(hero, villain, hand);
            let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();
            println!("{} at {} vs {} open: {}", hand, hero, villain, labels.join(" or ").bold());
            Ok(())
        }
        Command::Defend { hand, ip } => {
            let hand = parse_hand_type(&hand)?;
            println!("{}", three_bet_defence(ip, hand));
            Ok(())
        }
        Command::Shove { position, hand, m } => {
            let pos = Position::from_str(&position)?;
            let hand = parse_hand_type(&hand)?;
            let pn = assign_power_number(hand);
            let verdict = if should_shove(pos, hand, m) { "shove" } else { "fold" };
            println!(
                "{} at {} (PN {}, M {:.1}, {} behind): {}",
                hand,
                pos,
                pn,
                m,
                players_behind(pos),
                verdict.bold()
            );
            Ok(())
        }
        Command::Quiz { mode, count } => run_quiz(&mode, count),
        Command::Ranges => {
            for id in KNOWN_RANGE_IDS {
                println!("{}", id);
            }
            Ok(())
        }
    }
}

fn run_quiz(mode: &str, count: usize) -> TrainerResult<()> {
    let mode = StudyMode::from_str(mode)?;
    let mut rng = rand::thread_rng();
    let stdin = io::stdin();
    let mut correct = 0usize;

    for n in 1..=count {
        let question = generate(mode, &mut rng)?;
        println!();
        println!("{} {}", format!("Q{}:", n).bold(), prompt_for(&question));

        print!("> ");
        io::stdout().flush().ok();
        let mut answer = String::new();
        if stdin.lock().read_line(&mut answer).is_err() {
            break;
        }
        let answer = answer.trim();
        if answer.is_empty() {
            println!("{}", display::wrong_banner(&question.correct_action));
            continue;
        }

        if question.is_correct(answer) {
            correct += 1;
            println!("{}", display::correct_banner());
        } else {
            println!("{}", display::wrong_banner(&question.correct_action));
        }

        if let Some(spot) = &question.mdf {
            println!("{}", display::render_mdf_table(&spot.analysis));
            println!("{}", display::mdf_verdict(&spot.analysis));
        }
    }

    println!();
    println!("score: {}/{}", correct, count);
    Ok(())
}

fn prompt_for(question: &crate::quiz::Question) -> String {
    use StudyMode::*;
    let hand = question.hand.as_deref().unwrap_or("");
    match question.mode {
        OpenRange => format!(
            "{} at {} — open or fold?",
            hand,
            question.hero_pos.map(|p| p.label()).unwrap_or("?")
        ),
        SbOpen => format!("{} in the SB, folded to you — raise, limp, or fold?", hand),
        ThreeBet => format!(
            "{} at {} facing a {} open — 3bet, call, or fold? (list all allowed)",
            hand,
            question.hero_pos.map(|p| p.label()).unwrap_or("?"),
            question.villain_pos.map(|p| p.label()).unwrap_or("?")
        ),
        ThreeBetDefence => format!(
            "you opened {} at {} and {} 3-bets ({}) — defend or fold?",
            hand,
            question.hero_pos.map(|p| p.label()).unwrap_or("?"),
            question.villain_pos.map(|p| p.label()).unwrap_or("?"),
            if question.in_position == Some(true) { "you're IP" } else { "you're OOP" }
        ),
        PowerNumber => format!(
            "{} at {} with M = {:.1} — shove or fold?",
            hand,
            question.hero_pos.map(|p| p.label()).unwrap_or("?"),
            question.m_value.unwrap_or(0.0)
        ),
        BbDefence => format!(
            "{} in the BB vs a {} open — defend or fold?",
            hand,
            question.villain_pos.map(|p| p.label()).unwrap_or("?")
        ),
        MdfTrainer => {
            let spot = question.mdf.as_ref();
            format!(
                "{} on {} vs a {:.2}-pot bet — which bucket is the defend cutoff?",
                spot.map(|s| s.range_id).unwrap_or("?"),
                spot.map(|s| s.board.as_str()).unwrap_or("?"),
                spot.map(|s| s.bet_size).unwrap_or(0.0)
            )
        }
        Mix => String::new(),
    }
}
