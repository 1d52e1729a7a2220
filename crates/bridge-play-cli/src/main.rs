//! Play a recorded deal from the terminal: you sit North/South (or whichever
//! seats the config gives you) against the heuristic defenders.
use bridge_core::{Card, Contract, Hand, Seat, Suit, SuitColor};
use bridge_play::{DealRecord, Deferred, PlayConfig, PlayOutcome, Session, SessionView, Trick};
use clap::Parser;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Play out a recorded deal against the heuristic defenders"
)]
struct Args {
    /// YAML file of deal records
    #[arg(default_value = "tests/deals/sample_deals.yaml")]
    deals: PathBuf,

    /// Deal to play: 1-based position in the file, or its name
    #[arg(long, default_value = "1")]
    board: String,

    /// YAML play config (delays, human seats)
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    ai_delay_ms: Option<u64>,

    #[arg(long)]
    trick_delay_ms: Option<u64>,

    /// Let the computer play all four seats
    #[arg(long)]
    watch: bool,

    /// Print the final session view as JSON
    #[arg(long)]
    json: bool,
}

enum Command {
    Play(Card),
    Undo,
    Restart,
    Quit,
    Help,
}

fn parse_command(line: &str) -> Result<Command, String> {
    match line.trim().to_ascii_lowercase().as_str() {
        "u" | "undo" => Ok(Command::Undo),
        "r" | "restart" => Ok(Command::Restart),
        "q" | "quit" => Ok(Command::Quit),
        "?" | "h" | "help" => Ok(Command::Help),
        _ => line
            .trim()
            .to_ascii_uppercase()
            .parse::<Card>()
            .map(Command::Play)
            .map_err(|_| format!("not a card or command: {}", line.trim())),
    }
}

fn select_deal(records: Vec<DealRecord>, board: &str) -> Result<DealRecord, String> {
    let found = match board.parse::<usize>() {
        Ok(n) => records.into_iter().nth(n.wrapping_sub(1)),
        Err(_) => records
            .into_iter()
            .find(|r| r.name.as_deref().is_some_and(|n| n.eq_ignore_ascii_case(board))),
    };
    found.ok_or_else(|| format!("no deal {board:?} in file"))
}

fn holding_line(hand: &Hand) -> String {
    Suit::PLAY_ORDER
        .iter()
        .map(|&suit| {
            let holding = hand.holding(suit);
            format!(
                "{} {}",
                suit.symbol(),
                if holding.is_empty() { "-" } else { holding.as_str() }
            )
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Suit glyph plus rank, red suits in red.
fn card_label(card: Card) -> String {
    match card.suit.color() {
        SuitColor::Red => format!("\x1b[31m{}\x1b[0m{}", card.suit.symbol(), card.rank),
        SuitColor::Black => format!("{}{}", card.suit.symbol(), card.rank),
    }
}

fn trick_line(trick: &Trick) -> String {
    trick
        .plays
        .iter()
        .map(|&(seat, card)| format!("{}:{}", seat, card_label(card)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn contract_kind(contract: &Contract) -> &'static str {
    if contract.is_slam() {
        "slam"
    } else if contract.is_game() {
        "game"
    } else {
        "partscore"
    }
}

fn print_deal_header(title: &str, session: &Session) {
    let contract = session.contract();
    println!("{title}: {contract} ({}, {} tricks needed)", contract_kind(contract), contract.target());
    if let Some(auction) = &session.input().auction {
        let calls: Vec<String> = auction
            .iter()
            .map(|(seat, call)| format!("{}:{}", seat, call.render()))
            .collect();
        let suffix = if auction.is_finished() { "" } else { " ..." };
        println!("  auction {}{suffix}", calls.join(" "));
    }
    for seat in Seat::ALL.into_iter().filter(|&s| session.is_human(s)) {
        let hand = &session.input().board.hands[seat.idx()];
        let shape = hand.distribution().map(|n| n.to_string()).join("-");
        println!("  {:<6} {} hcp, {shape}", seat.name(), hand.hcp());
    }
}

fn render(view: &SessionView) {
    let dummy = view.contract.dummy();
    println!();
    for seat in Seat::ALL {
        if view.human_seats.contains(&seat) || seat == dummy || view.game_over {
            println!("  {:<6} {}", seat.name(), holding_line(&view.hands[seat.idx()]));
        }
    }
    if !view.trick.is_empty() {
        println!("  table  {}", trick_line(&view.trick));
    } else if let Some(last) = &view.last_trick {
        println!("  last   {}", trick_line(last));
    }
    println!(
        "  {}  |  declarer {}  defence {}",
        view.contract, view.declarer_tricks, view.defender_tricks
    );
    println!("  {}", view.status);
}

/// Wait out and fire every deferred action until a human must act.
fn run_deferred(session: &mut Session) {
    while let Some(ticket) = session.next_ticket() {
        thread::sleep(ticket.delay);
        if !session.fire(ticket) {
            break;
        }
        if let Deferred::AiPlay(seat) = ticket.action {
            let state = session.state();
            let card = state
                .trick
                .card_of(seat)
                .or_else(|| state.last_trick().and_then(|t| t.card_of(seat)));
            if let Some(card) = card {
                println!("  {} plays {}", seat.name(), card_label(card));
            }
        }
        render(&session.view());
    }
}

fn print_help() {
    println!("  Type a card to play it (SA, HT, D10, 4C), or: undo, restart, quit.");
}

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => PlayConfig::load(path)?,
        None => PlayConfig::default(),
    };
    if let Some(ms) = args.ai_delay_ms {
        config.ai_delay_ms = ms;
    }
    if let Some(ms) = args.trick_delay_ms {
        config.trick_clear_delay_ms = ms;
    }
    if args.watch {
        config.human_seats = Some(Vec::new());
    }

    let record = select_deal(DealRecord::load_all(&args.deals)?, &args.board)?;
    info!(deal = %record.title(), "loaded deal");
    let input = record.to_input()?;
    let mut session = Session::new(input, config)?;

    print_deal_header(&record.title(), &session);
    render(&session.view());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        run_deferred(&mut session);
        if session.is_over() && args.watch {
            break;
        }

        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => print_help(),
            Ok(Command::Undo) => {
                if session.undo() {
                    render(&session.view());
                } else {
                    println!("  nothing to undo");
                }
            }
            Ok(Command::Restart) => {
                session.restart();
                render(&session.view());
            }
            Ok(Command::Play(card)) => {
                let Some(seat) = session.state().to_act() else {
                    println!("  {}", session.state().status);
                    continue;
                };
                match session.play(seat, card) {
                    Ok(PlayOutcome::HandOver { result }) => {
                        info!(%result, "hand over");
                        render(&session.view());
                    }
                    Ok(_) => render(&session.view()),
                    Err(err) => println!("  {err}"),
                }
            }
            Err(msg) => println!("  {msg}"),
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&session.view())?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert!(matches!(parse_command(" undo "), Ok(Command::Undo)));
        assert!(matches!(parse_command("Q"), Ok(Command::Quit)));
        assert!(matches!(parse_command("sa"), Ok(Command::Play(c)) if c.to_string() == "SA"));
        assert!(matches!(parse_command("h10"), Ok(Command::Play(c)) if c.to_string() == "HT"));
        assert!(parse_command("zz").is_err());
    }

    #[test]
    fn test_card_label_colours_red_suits() {
        assert_eq!(card_label("SA".parse().unwrap()), "♠A");
        assert_eq!(card_label("HT".parse().unwrap()), "\x1b[31m♥\x1b[0mT");
    }

    #[test]
    fn test_contract_kind() {
        assert_eq!(contract_kind(&Contract::parse("3NT", Seat::North).unwrap()), "game");
        assert_eq!(contract_kind(&Contract::parse("2H", Seat::North).unwrap()), "partscore");
        assert_eq!(contract_kind(&Contract::parse("6S", Seat::North).unwrap()), "slam");
    }

    #[test]
    fn test_holding_line_marks_voids() {
        let hand = Hand::from_holdings("AK", "", "QJ2", "");
        assert_eq!(holding_line(&hand), "♠ AK  ♥ -  ♦ QJ2  ♣ -");
    }
}
