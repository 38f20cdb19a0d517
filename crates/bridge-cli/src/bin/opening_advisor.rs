use anyhow::{Context, Result};
use bridge_core::{parse_deal, Deal, Hand, Position, Suit};
use bridge_engine::{opening_round, Engine, OpeningConfig, SeatOpening};
use clap::Parser;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Show each seat's opening call for a PBN deal", long_about = None)]
struct Args {
    /// Deal in PBN form, e.g. "N:A65.J4.A764.A983 QJT73.9852.K3.Q7 ..."
    deal: String,

    /// Board number, used for vulnerability
    #[arg(short, long, default_value_t = 1)]
    board: u32,

    /// YAML file with opening thresholds
    #[arg(short, long)]
    rules: Option<PathBuf>,

    /// Print the deal and the openings as JSON
    #[arg(long)]
    json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct Report<'a> {
    deal: &'a Deal,
    openings: &'a [SeatOpening],
}

fn load_config(path: Option<&PathBuf>) -> Result<OpeningConfig> {
    let Some(path) = path else {
        return Ok(OpeningConfig::default());
    };
    let yaml = fs::read_to_string(path)
        .with_context(|| format!("Failed to read rules file: {}", path.display()))?;
    OpeningConfig::from_yaml(&yaml)
        .with_context(|| format!("Invalid rules file: {}", path.display()))
}

fn hand_lines(hand: Option<&Hand>) -> Vec<String> {
    let Some(hand) = hand else {
        return vec!["(no cards)".to_string(); 4];
    };
    Suit::ALL
        .iter()
        .map(|&suit| {
            let cards = hand.holding(suit).to_string();
            format!(
                "{}: {}",
                suit.to_char(),
                if cards.is_empty() { "-" } else { &cards }
            )
        })
        .collect()
}

fn summary(hand: Option<&Hand>) -> String {
    match hand {
        Some(h) => format!("{} HCP +{} = {}", h.hcp(), h.length_points(), h.valuation()),
        None => String::new(),
    }
}

fn print_hands_table(deal: &Deal) {
    let indent = "        "; // 8 spaces

    println!("{}North", indent);
    for s in hand_lines(deal.hand(Position::North)) {
        println!("{}{}", indent, s);
    }
    println!("{}{}", indent, summary(deal.hand(Position::North)));
    println!();

    let west = hand_lines(deal.hand(Position::West));
    let east = hand_lines(deal.hand(Position::East));
    println!("{:<24} East", "West");
    for (w, e) in west.iter().zip(&east) {
        println!("{:<24} {}", w, e);
    }
    println!(
        "{:<24} {}",
        summary(deal.hand(Position::West)),
        summary(deal.hand(Position::East))
    );
    println!();

    println!("{}South", indent);
    for s in hand_lines(deal.hand(Position::South)) {
        println!("{}{}", indent, s);
    }
    println!("{}{}", indent, summary(deal.hand(Position::South)));
}

fn print_openings(deal: &Deal, seats: &[SeatOpening]) {
    println!(
        "{:<4} | {:<5} | {:<4} | {:<7} | {:<15} | Call",
        "Seat", "Pos", "Vul", "Shape", "State"
    );
    println!("{:-<4}-+-{:-<5}-+-{:-<4}-+-{:-<7}-+-{:-<15}-+-----------", "", "", "", "", "");
    for seat in seats {
        let shape = deal
            .hand(seat.position)
            .map(Hand::shape_pattern)
            .unwrap_or_default();
        let call = seat.call.map(|c| c.to_string()).unwrap_or_default();
        let vul = if deal.vulnerability.is_vulnerable(seat.position) { "yes" } else { "" };
        println!(
            "{:<4} | {:<5} | {:<4} | {:<7} | {:<15} | {}",
            seat.seat,
            seat.position.name(),
            vul,
            shape,
            seat.state.to_string(),
            call
        );
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    let engine = Engine::new(load_config(args.rules.as_ref())?);
    let config = engine.config();
    log::info!(
        "Opening range {}-{}, 1NT {}-{} on {:?}",
        config.min_opening,
        config.max_opening,
        config.no_trump_min,
        config.no_trump_max,
        config.no_trump_metric
    );

    let deal = parse_deal(&args.deal, args.board)
        .with_context(|| format!("Failed to parse deal: {}", args.deal))?;
    let (auction, seats) = opening_round(&deal, &engine);

    if args.json {
        let report = Report {
            deal: &deal,
            openings: &seats,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Board: {}", deal.board);
    println!("Dealer: {}", deal.dealer.name());
    println!("Vulnerability: {}", deal.vulnerability.label());
    println!("\nHands:");
    print_hands_table(&deal);
    println!();
    print_openings(&deal, &seats);

    let calls: Vec<String> = auction.calls.iter().map(|c| c.render()).collect();
    let status = if auction.is_open() { "opened" } else { "not opened" };
    println!("\nAuction: {} ({})", calls.join(" "), status);
    Ok(())
}
