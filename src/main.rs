use clap::Parser;
use rayon::prelude::*;

use domino_mcts::config::EngineConfig;
use domino_mcts::game::domino_game::DominoGame;
use domino_mcts::game::match_play::{play_match, MatchSummary};
use domino_mcts::logging::{setup_file_logging, setup_logging};
use domino_mcts::strategy::{BlindStrategy, MctsStrategy, RuleBasedStrategy, Strategy};
use domino_mcts::{Result, SeededChoices};

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum StrategyCli {
    /// Monte Carlo Tree Search
    Mcts,
    /// Uniformly random legal tile
    Blind,
    /// Hand-tuned scoring rules
    RuleBased,
}

#[derive(Parser, Debug)]
#[command(name = "domino_mcts", about = "Dominoes matches between MCTS, blind and rule-based players")]
struct Config {
    /// Player names, one per seat
    #[arg(long, num_args = 2.., default_values_t = ["ai 1".to_string(), "ai 2".to_string()])]
    players: Vec<String>,

    /// Strategy per seat; the last one repeats for remaining seats
    #[arg(long, value_enum, num_args = 1.., default_values_t = [StrategyCli::Mcts, StrategyCli::RuleBased])]
    strategy: Vec<StrategyCli>,

    /// Score at which a match is over
    #[arg(long)]
    score: Option<u32>,

    /// Tiles dealt to each player (default: split the set evenly)
    #[arg(long)]
    hand_size: Option<usize>,

    /// Seed for replication
    #[arg(long)]
    seed: Option<u64>,

    /// Number of matches to play (in parallel)
    #[arg(short = 'g', long, default_value_t = 1)]
    games: usize,

    /// MCTS iterations per move
    #[arg(short = 's', long)]
    searches: Option<usize>,

    /// MCTS exploration constant
    #[arg(long)]
    exploration: Option<f64>,

    /// JSON configuration file
    #[arg(long)]
    config: Option<String>,

    /// Write rotating log files to this directory instead of the console
    #[arg(long)]
    log_dir: Option<String>,
}

fn build_strategies(
    kinds: &[StrategyCli],
    seats: usize,
    engine: &EngineConfig,
    seed: u64,
) -> Result<Vec<Box<dyn Strategy>>> {
    (0..seats)
        .map(|seat| {
            let kind = kinds[seat.min(kinds.len() - 1)];
            let seat_seed = seed.wrapping_add(seat as u64 * 7919);
            let strategy: Box<dyn Strategy> = match kind {
                StrategyCli::Mcts => {
                    let mut params = engine.mcts.clone();
                    params.seed = Some(params.seed.map_or(seat_seed, |s| s.wrapping_add(seat_seed)));
                    Box::new(MctsStrategy::from_params(params)?)
                }
                StrategyCli::Blind => Box::new(BlindStrategy::new(SeededChoices::new(seat_seed))),
                StrategyCli::RuleBased => Box::new(RuleBasedStrategy::new(engine.rule_based.clone())),
            };
            Ok(strategy)
        })
        .collect()
}

fn run_match(game: &DominoGame, config: &Config, engine: &EngineConfig, seed: u64) -> Result<MatchSummary> {
    let mut strategies = build_strategies(&config.strategy, game.num_players(), engine, seed)?;
    let mut choices = SeededChoices::new(seed);
    play_match(game, &mut strategies, &mut choices)
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();

    let _logger = match &config.log_dir {
        Some(dir) => setup_file_logging("info", dir)?,
        None => setup_logging("info")?,
    };

    let mut engine = match &config.config {
        Some(path) => EngineConfig::load_from_file(path)?,
        None => EngineConfig::default(),
    };
    if let Some(score) = config.score {
        engine.game.target_score = score;
    }
    if config.hand_size.is_some() {
        engine.game.hand_size = config.hand_size;
    }
    if let Some(searches) = config.searches {
        engine.mcts.num_searches = searches;
    }
    if let Some(exploration) = config.exploration {
        engine.mcts.exploration_constant = exploration;
    }
    engine.mcts.validate()?;

    let game = DominoGame::new(config.players.clone(), engine.game.clone())?;
    let base_seed = config.seed.unwrap_or_else(rand::random);
    log::info!(
        "{} match(es), players {:?}, strategies {:?}, seed {}, {}",
        config.games,
        game.names,
        config.strategy,
        base_seed,
        engine.mcts.to_config_string()
    );

    let summaries: Vec<MatchSummary> = (0..config.games)
        .into_par_iter()
        .map(|i| run_match(&game, &config, &engine, base_seed.wrapping_add(i as u64)))
        .collect::<Result<_>>()?;

    let mut wins = vec![0usize; game.num_players()];
    for (i, summary) in summaries.iter().enumerate() {
        wins[summary.winner] += 1;
        log::info!(
            "Match {}: winner {} after {} rounds, scores {:?}",
            i + 1,
            game.names[summary.winner],
            summary.rounds.len(),
            summary.scores
        );
    }

    println!("Final Scores:");
    for (seat, name) in game.names.iter().enumerate() {
        let kind = config.strategy[seat.min(config.strategy.len() - 1)];
        println!("{} ({:?}): {} / {} matches won", name, kind, wins[seat], summaries.len());
    }
    Ok(())
}
