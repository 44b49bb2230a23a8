use anyhow::{bail, Context};
use arcade_execution::{
    casino::blackjack::Stage, shop::PACKAGES, Arcade, Draw, EntropyRng, FileStore, GameRng,
    Rejection, Store, Wallet,
};
use arcade_simulator::Config;
use arcade_types::casino::{Bet, DiceBet, RouletteColor, DEFAULT_STAKE};
use clap::{Parser, Subcommand};
use commonware_runtime::{tokio, Clock, Metrics, Runner, Spawner};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play arcade rounds against a local wallet.", long_about = None)]
struct Args {
    /// Path to the YAML configuration file.
    #[arg(short, long)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the wallet balance.
    Balance,
    /// Spin the slot machine.
    Slots {
        #[arg(long, default_value_t = DEFAULT_STAKE)]
        stake: u64,
        #[arg(long, default_value_t = 1)]
        rounds: u32,
    },
    /// Bet on a roulette color (red, black or green).
    Roulette {
        #[arg(long)]
        color: RouletteColor,
        #[arg(long, default_value_t = DEFAULT_STAKE)]
        stake: u64,
        #[arg(long, default_value_t = 1)]
        rounds: u32,
    },
    /// Bet on the sum of two dice (low, seven or high).
    Dice {
        #[arg(long)]
        bet: DiceBet,
        #[arg(long, default_value_t = DEFAULT_STAKE)]
        stake: u64,
        #[arg(long, default_value_t = 1)]
        rounds: u32,
    },
    /// Play blackjack, hitting until the hand reaches `stand_on`.
    Blackjack {
        #[arg(long, default_value_t = DEFAULT_STAKE)]
        stake: u64,
        #[arg(long, default_value_t = 17)]
        stand_on: u8,
        #[arg(long, default_value_t = 1)]
        rounds: u32,
    },
    /// Buy a coin package (1-5).
    Buy {
        #[arg(long)]
        package: usize,
    },
    /// Withdraw coins to a payout key.
    Withdraw {
        #[arg(long)]
        amount: u64,
        #[arg(long)]
        key: String,
    },
}

fn main() -> anyhow::Result<()> {
    // Parse args
    let args = Args::parse();

    // Load config
    let raw = std::fs::read_to_string(&args.config)
        .with_context(|| format!("could not read config file {}", args.config.display()))?;
    let config = Config::from_yaml(&raw)
        .context("could not parse config file")?
        .validate()
        .context("invalid config")?;

    // Create logger
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    // Open wallet
    let store = FileStore::new(&config.directory)
        .with_context(|| format!("could not open wallet store {}", config.directory.display()))?;
    let wallet = Wallet::open(store).context("could not load wallet balance")?;
    let rng: Box<dyn Draw + Send> = match config.seed {
        Some(seed) => Box::new(GameRng::new(seed, 0)),
        None => Box::new(EntropyRng::new()),
    };

    // Initialize runtime
    let cfg = tokio::Config::default()
        .with_worker_threads(config.worker_threads)
        .with_catch_panics(true);
    let executor = tokio::Runner::new(cfg);
    executor.start(move |context| async move {
        let arcade = Arcade::new(context.with_label("arcade"), config.engine, wallet, rng);
        run(&arcade, args.command).await
    })
}

async fn run<E, S, R>(arcade: &Arcade<E, S, R>, command: Command) -> anyhow::Result<()>
where
    E: Clock + Spawner + Metrics,
    S: Store + Send + 'static,
    R: Draw + Send + 'static,
{
    match command {
        Command::Balance => {}
        Command::Slots { stake, rounds } => {
            play(arcade, Bet::slots(stake), rounds, None).await;
        }
        Command::Roulette {
            color,
            stake,
            rounds,
        } => {
            play(arcade, Bet::roulette(stake, color), rounds, None).await;
        }
        Command::Dice { bet, stake, rounds } => {
            play(arcade, Bet::dice(stake, bet), rounds, None).await;
        }
        Command::Blackjack {
            stake,
            stand_on,
            rounds,
        } => {
            play(arcade, Bet::blackjack(stake), rounds, Some(stand_on)).await;
        }
        Command::Buy { package } => {
            let Some(selected) = package.checked_sub(1).and_then(|i| PACKAGES.get(i)) else {
                bail!("package must be between 1 and {}", PACKAGES.len());
            };
            let credited = arcade.purchase(selected);
            info!(%selected, credited, "purchased");
        }
        Command::Withdraw { amount, key } => {
            let receipt = arcade.withdraw(amount, &key).context("withdrawal refused")?;
            info!(
                coins = receipt.coins,
                gross_cents = receipt.gross_cents,
                fee_cents = receipt.fee_cents,
                net_cents = receipt.net_cents,
                "withdrawal queued"
            );
        }
    }
    info!(balance = arcade.balance(), "wallet");
    Ok(())
}

/// Play `rounds` rounds of `bet`, stopping at the first rejection.
async fn play<E, S, R>(arcade: &Arcade<E, S, R>, bet: Bet, rounds: u32, stand_on: Option<u8>)
where
    E: Clock + Spawner + Metrics,
    S: Store + Send + 'static,
    R: Draw + Send + 'static,
{
    for _ in 0..rounds {
        let ticket = match arcade.start_round(bet) {
            Ok(ticket) => ticket,
            Err(Rejection::InsufficientFunds { balance, stake }) => {
                warn!(balance, stake, "not enough coins, buy a package to keep playing");
                return;
            }
            Err(rejection) => {
                warn!(%rejection, "bet rejected");
                return;
            }
        };

        if let Some(stand_on) = stand_on {
            let round = ticket.round;
            let mut view = arcade.view(round);
            while let Ok(hand) = view {
                if hand.stage != Stage::PlayerTurn {
                    break;
                }
                if hand.player_value >= stand_on {
                    if let Err(e) = arcade.stand(round) {
                        warn!(round, ?e, "stand refused");
                    }
                    break;
                }
                view = arcade.hit(round);
            }
        }

        match ticket.resolved().await {
            Some(resolution) => info!(
                round = resolution.round,
                outcome = %resolution.outcome,
                category = %resolution.category,
                payout = resolution.payout,
                balance = resolution.balance,
                "resolved"
            ),
            None => warn!("round dropped without settling"),
        }
    }
}
