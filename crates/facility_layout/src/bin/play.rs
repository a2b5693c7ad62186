use anyhow::{Context, Result, bail};
use clap::Parser;
use facility_layout::{
    Config, DepartmentId, LayoutBoard, Move, Placement, SlotId, format_cost,
};
use log::{info, warn};
use std::{
    io::{BufRead, Write, stdin, stdout},
    path::PathBuf,
};

#[derive(Parser)]
#[command(author, version, about = "Move departments around the facility grid from the console", long_about = None)]
struct Args {
    /// Starting layout, slot 1 first ("_" for empty); all departments start in the pool otherwise
    #[arg(short, long)]
    layout: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    config: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConsoleCmd {
    Apply(Move),
    Show,
    Reset,
    Help,
    Quit,
}

impl ConsoleCmd {
    fn parse(input: &str) -> Result<ConsoleCmd> {
        let mut words = input.split_whitespace();
        let Some(cmd) = words.next() else {
            bail!("empty command");
        };
        let args: Vec<&str> = words.collect();

        match (cmd, args.as_slice()) {
            ("drop" | "d", [dept, slot]) => Ok(ConsoleCmd::Apply(Move::Drop {
                dept: parse_department(dept)?,
                slot: parse_slot(slot)?,
            })),
            ("pool" | "p", [dept]) => Ok(ConsoleCmd::Apply(Move::ToPool {
                dept: parse_department(dept)?,
            })),
            ("show" | "s", []) => Ok(ConsoleCmd::Show),
            ("reset" | "r", []) => Ok(ConsoleCmd::Reset),
            ("help" | "h" | "?", []) => Ok(ConsoleCmd::Help),
            ("quit" | "q" | "exit", []) => Ok(ConsoleCmd::Quit),
            ("drop" | "d" | "pool" | "p" | "show" | "s" | "reset" | "r", _) => {
                bail!("wrong number of arguments for '{cmd}'")
            }
            _ => bail!("cmd not recognized: {cmd}"),
        }
    }
}

fn parse_department(word: &str) -> Result<DepartmentId> {
    let id: u8 = word
        .parse()
        .with_context(|| format!("'{word}' is not a department"))?;
    Ok(DepartmentId::new(id)?)
}

fn parse_slot(word: &str) -> Result<SlotId> {
    let id: u8 = word
        .parse()
        .with_context(|| format!("'{word}' is not a slot"))?;
    Ok(SlotId::new(id)?)
}

const HELP: &str = "\
commands:
  drop <dept> <slot>   move a department onto a slot (swaps if occupied)
  pool <dept>          send a department back to the pool
  show                 print the grid and cost breakdown
  reset                restore the starting layout
  quit                 leave";

fn print_board(board: &LayoutBoard) {
    let pool: Vec<String> = board
        .placement()
        .pool()
        .map(|dept| dept.to_string())
        .collect();
    println!("{}", board.placement());
    println!("pool: [{}]", pool.join(" "));
    println!("cost: {}", format_cost(board.cost()));
}

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
    let args = Args::parse();
    let config = Config::load_or_default(Some(args.config.as_path()))?;

    let initial = match &args.layout {
        Some(seq) => Placement::from_slot_sequence(seq)
            .with_context(|| format!("invalid --layout '{seq}'"))?,
        None => config.initial_placement()?.unwrap_or_default(),
    };

    let mut board = LayoutBoard::new(initial);
    println!("{HELP}\n");
    print_board(&board);

    let mut out = stdout();
    for line in stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match ConsoleCmd::parse(&line) {
            Ok(ConsoleCmd::Apply(mv)) => {
                board.apply(mv);
                print_board(&board);
            }
            Ok(ConsoleCmd::Show) => println!("{}", board.report()),
            Ok(ConsoleCmd::Reset) => {
                board.reset(initial);
                print_board(&board);
            }
            Ok(ConsoleCmd::Help) => println!("{HELP}"),
            Ok(ConsoleCmd::Quit) => break,
            Err(e) => warn!("{e:#}"),
        }
        out.flush()?;
    }

    let history: Vec<String> = board.history().iter().map(|c| c.to_string()).collect();
    info!("Cost history: {}", history.join(" -> "));
    Ok(())
}
