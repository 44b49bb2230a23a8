//! Round state machine.
//!
//! A round runs in two phases. [Arcade::start_round] validates the bet and
//! debits the stake synchronously. Settlement is deferred to a task spawned on
//! the runtime that waits out the resolve delay, draws the outcome, credits the
//! payout and notifies listeners. Dropping the [Ticket] never cancels that task.
//!
//! Blackjack inserts player moves between the phases:
//!
//! ```text
//! start_round --> PlayerTurn --hit--> PlayerTurn
//!                     |   \--hit (bust)---------------------------> Settled
//!                     \--stand--> DealerTurn --(resolve delay)----> Settled
//! start_round (natural) --------------------(natural delay)-------> Settled
//! ```
//!
//! Only one round may be open at a time, so a second round's debit can never
//! land between another round's debit and its credit.

use crate::{
    casino::{
        blackjack::{BlackjackState, Stage},
        play_instant, Bias, Draw, GameError, Wager,
    },
    shop::{self, Package},
    wallet::{Store, Wallet},
    withdrawal::{self, Policy, Receipt, WithdrawalError},
};
use arcade_types::casino::{Bet, Card, GameType, Resolution, DEFAULT_WIN_PROBABILITY};
use commonware_runtime::{Clock, Metrics, Spawner};
use futures::channel::oneshot;
use std::{
    sync::{Arc, Mutex},
    time::Duration,
};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Configuration for the [Arcade].
#[derive(Clone, Debug)]
pub struct Config {
    /// Delay between a bet (or a stand) and its settlement.
    pub resolve_delay: Duration,
    /// Delay before a natural blackjack settles.
    pub natural_delay: Duration,
    /// Initial win bias for slots and roulette.
    pub win_probability: f64,
    pub withdrawal: Policy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resolve_delay: Duration::from_secs(2),
            natural_delay: Duration::from_secs(1),
            win_probability: DEFAULT_WIN_PROBABILITY,
            withdrawal: Policy::default(),
        }
    }
}

/// Reason a bet was refused. Nothing is debited when a bet is refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("stake must be positive")]
    InvalidStake,
    #[error("{0} requires a selection")]
    MissingSelection(GameType),
    #[error("selection does not belong to {0}")]
    InvalidSelection(GameType),
    #[error("round {0} is still in progress")]
    RoundInProgress(u64),
    #[error("insufficient funds: balance {balance}, stake {stake}")]
    InsufficientFunds { balance: u64, stake: u64 },
    #[error("unable to deal: {0:?}")]
    Deal(GameError),
}

/// Handle to an accepted round.
#[derive(Debug)]
pub struct Ticket {
    pub round: u64,
    pub game: GameType,
    receiver: oneshot::Receiver<Resolution>,
}

impl Ticket {
    /// Wait for the round to settle.
    ///
    /// Returns `None` only if the engine dropped the round without settling it.
    pub async fn resolved(self) -> Option<Resolution> {
        self.receiver.await.ok()
    }
}

/// What the player can see of a blackjack round.
///
/// The dealer's hole card stays hidden until the player's turn ends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandView {
    pub round: u64,
    pub stage: Stage,
    pub player: Vec<Card>,
    pub player_value: u8,
    pub dealer: Vec<Card>,
}

impl HandView {
    fn new(round: u64, hand: &BlackjackState) -> Self {
        let dealer = match hand.stage() {
            Stage::PlayerTurn => hand.dealer().iter().take(1).copied().collect(),
            Stage::DealerTurn | Stage::Settled => hand.dealer().to_vec(),
        };
        Self {
            round,
            stage: hand.stage(),
            player: hand.player().to_vec(),
            player_value: hand.player_value(),
            dealer,
        }
    }
}

type Listener = Arc<dyn Fn(&Resolution) + Send + Sync>;

enum Play {
    /// Slots, roulette and dice, drawn in a single step at settlement.
    Instant { wager: Wager, bias: Bias },
    Blackjack(BlackjackState),
}

struct Active {
    round: u64,
    stake: u64,
    play: Play,
    sender: oneshot::Sender<Resolution>,
}

struct Table<S: Store, R: Draw> {
    wallet: Wallet<S>,
    rng: R,
    bias: Bias,
    next_round: u64,
    active: Option<Active>,
}

impl<S: Store, R: Draw> Table<S, R> {
    fn hand_mut(&mut self, round: u64) -> Result<&mut BlackjackState, GameError> {
        match &mut self.active {
            Some(active) if active.round == round => match &mut active.play {
                Play::Blackjack(hand) => Ok(hand),
                Play::Instant { .. } => Err(GameError::InvalidMove),
            },
            _ => Err(GameError::RoundNotFound),
        }
    }

    /// Draw (if needed), credit and close the active round.
    fn settle(&mut self, round: u64) -> Option<(Resolution, oneshot::Sender<Resolution>)> {
        let active = match self.active.take() {
            Some(active) if active.round == round => active,
            other => {
                self.active = other;
                return None;
            }
        };
        let Active {
            round,
            stake,
            play,
            sender,
        } = active;

        let (outcome, result) = match play {
            Play::Instant { wager, bias } => {
                let Some(drawn) = play_instant(wager, &bias, &mut self.rng) else {
                    warn!(round, "instant round carried a blackjack wager");
                    self.wallet.credit(stake);
                    return None;
                };
                drawn
            }
            Play::Blackjack(mut hand) => {
                if hand.stage() == Stage::DealerTurn {
                    // Only fails outside the dealer turn.
                    let _ = hand.play_dealer();
                }
                (hand.outcome(), hand.payout())
            }
        };

        let payout = result.payout(stake);
        self.wallet.credit(payout);
        let resolution = Resolution {
            round,
            stake,
            outcome,
            payout,
            category: result.category,
            balance: self.wallet.balance(),
        };
        info!(
            round,
            game = %resolution.game(),
            stake,
            payout,
            category = %resolution.category,
            balance = resolution.balance,
            outcome = %resolution.outcome,
            "round settled"
        );
        Some((resolution, sender))
    }
}

struct Shared<S: Store, R: Draw> {
    table: Mutex<Table<S, R>>,
    listeners: Mutex<Vec<Listener>>,
}

impl<S: Store, R: Draw> Shared<S, R> {
    /// Settle `round` and deliver the resolution outside the table lock.
    fn resolve(&self, round: u64) {
        let settled = self.table.lock().unwrap().settle(round);
        if let Some((resolution, sender)) = settled {
            self.deliver(resolution, sender);
        }
    }

    fn deliver(&self, resolution: Resolution, sender: oneshot::Sender<Resolution>) {
        let listeners = self.listeners.lock().unwrap().clone();
        for listener in listeners {
            listener(&resolution);
        }
        // The ticket may have been dropped; the wallet is already credited.
        let _ = sender.send(resolution);
    }
}

/// Wagering engine driving every game against a single wallet.
pub struct Arcade<E, S, R>
where
    E: Clock + Spawner + Metrics,
    S: Store,
    R: Draw,
{
    context: E,
    resolve_delay: Duration,
    natural_delay: Duration,
    withdrawal: Policy,
    shared: Arc<Shared<S, R>>,
}

impl<E, S, R> Clone for Arcade<E, S, R>
where
    E: Clock + Spawner + Metrics,
    S: Store,
    R: Draw,
{
    fn clone(&self) -> Self {
        Self {
            context: self.context.clone(),
            resolve_delay: self.resolve_delay,
            natural_delay: self.natural_delay,
            withdrawal: self.withdrawal,
            shared: self.shared.clone(),
        }
    }
}

impl<E, S, R> Arcade<E, S, R>
where
    E: Clock + Spawner + Metrics,
    S: Store + Send + 'static,
    R: Draw + Send + 'static,
{
    pub fn new(context: E, config: Config, wallet: Wallet<S>, rng: R) -> Self {
        let table = Table {
            wallet,
            rng,
            bias: Bias::new(config.win_probability),
            next_round: 0,
            active: None,
        };
        Self {
            context,
            resolve_delay: config.resolve_delay,
            natural_delay: config.natural_delay,
            withdrawal: config.withdrawal,
            shared: Arc::new(Shared {
                table: Mutex::new(table),
                listeners: Mutex::new(Vec::new()),
            }),
        }
    }

    pub fn balance(&self) -> u64 {
        self.shared.table.lock().unwrap().wallet.balance()
    }

    /// Credit coins outside of any round.
    pub fn credit(&self, amount: u64) {
        self.shared.table.lock().unwrap().wallet.credit(amount);
    }

    /// Debit coins outside of any round.
    pub fn debit(&self, amount: u64) -> bool {
        self.shared.table.lock().unwrap().wallet.debit(amount)
    }

    pub fn win_probability(&self) -> f64 {
        self.shared.table.lock().unwrap().bias.win_probability()
    }

    /// Change the win bias. Rounds already started keep the bias they began with.
    pub fn set_win_probability(&self, probability: f64) {
        let bias = Bias::new(probability);
        self.shared.table.lock().unwrap().bias = bias;
        debug!(win_probability = bias.win_probability(), "bias updated");
    }

    /// Register a callback invoked once for every settled round.
    pub fn on_resolved(&self, listener: impl Fn(&Resolution) + Send + Sync + 'static) {
        self.shared.listeners.lock().unwrap().push(Arc::new(listener));
    }

    /// Round currently open, if any.
    pub fn active_round(&self) -> Option<u64> {
        self.shared
            .table
            .lock()
            .unwrap()
            .active
            .as_ref()
            .map(|active| active.round)
    }

    /// Validate and debit a bet, then schedule its settlement.
    pub fn start_round(&self, bet: Bet) -> Result<Ticket, Rejection> {
        let result = self.open(bet);
        if let Err(rejection) = &result {
            debug!(game = %bet.game, stake = bet.stake, %rejection, "bet rejected");
        }
        result
    }

    fn open(&self, bet: Bet) -> Result<Ticket, Rejection> {
        if bet.stake == 0 {
            return Err(Rejection::InvalidStake);
        }
        let wager = Wager::from_bet(&bet).ok_or_else(|| {
            if bet.selection.is_none() && bet.game.requires_selection() {
                Rejection::MissingSelection(bet.game)
            } else {
                Rejection::InvalidSelection(bet.game)
            }
        })?;

        let mut table = self.shared.table.lock().unwrap();
        if let Some(active) = &table.active {
            return Err(Rejection::RoundInProgress(active.round));
        }
        if !table.wallet.debit(bet.stake) {
            return Err(Rejection::InsufficientFunds {
                balance: table.wallet.balance(),
                stake: bet.stake,
            });
        }

        let (play, delay) = match wager {
            Wager::Blackjack => match BlackjackState::deal(&mut table.rng) {
                Ok(hand) => {
                    let delay = hand.is_natural().then_some(self.natural_delay);
                    (Play::Blackjack(hand), delay)
                }
                Err(e) => {
                    table.wallet.credit(bet.stake);
                    return Err(Rejection::Deal(e));
                }
            },
            wager => {
                let bias = table.bias;
                (Play::Instant { wager, bias }, Some(self.resolve_delay))
            }
        };

        let round = table.next_round;
        table.next_round += 1;
        let (sender, receiver) = oneshot::channel();
        table.active = Some(Active {
            round,
            stake: bet.stake,
            play,
            sender,
        });
        info!(
            round,
            game = %bet.game,
            stake = bet.stake,
            balance = table.wallet.balance(),
            "round started"
        );
        drop(table);

        if let Some(delay) = delay {
            self.schedule(round, delay);
        }
        Ok(Ticket {
            round,
            game: bet.game,
            receiver,
        })
    }

    /// Settle `round` on a spawned task once `delay` elapses.
    fn schedule(&self, round: u64, delay: Duration) {
        self.context.with_label("round").spawn({
            let shared = self.shared.clone();
            move |context| async move {
                context.sleep(delay).await;
                shared.resolve(round);
            }
        });
    }

    /// Current blackjack hand.
    pub fn view(&self, round: u64) -> Result<HandView, GameError> {
        let mut table = self.shared.table.lock().unwrap();
        let hand = table.hand_mut(round)?;
        Ok(HandView::new(round, hand))
    }

    /// Draw a card. A bust settles the round immediately.
    pub fn hit(&self, round: u64) -> Result<HandView, GameError> {
        let mut table = self.shared.table.lock().unwrap();
        let hand = table.hand_mut(round)?;
        let card = hand.hit()?;
        let view = HandView::new(round, hand);
        debug!(round, %card, value = view.player_value, "player hit");
        if view.stage != Stage::Settled {
            return Ok(view);
        }

        let settled = table.settle(round);
        drop(table);
        if let Some((resolution, sender)) = settled {
            self.shared.deliver(resolution, sender);
        }
        Ok(view)
    }

    /// End the player's turn. The dealer plays out after the resolve delay.
    pub fn stand(&self, round: u64) -> Result<(), GameError> {
        let mut table = self.shared.table.lock().unwrap();
        let hand = table.hand_mut(round)?;
        hand.stand()?;
        debug!(round, value = hand.player_value(), "player stood");
        drop(table);

        self.schedule(round, self.resolve_delay);
        Ok(())
    }

    /// Credit a coin package. Returns the coins added.
    pub fn purchase(&self, package: &Package) -> u64 {
        let mut table = self.shared.table.lock().unwrap();
        let credited = shop::purchase(&mut table.wallet, package);
        info!(
            credited,
            balance = table.wallet.balance(),
            "package purchased"
        );
        credited
    }

    /// Cash out `amount` coins to `key` under the configured policy.
    pub fn withdraw(&self, amount: u64, key: &str) -> Result<Receipt, WithdrawalError> {
        let mut table = self.shared.table.lock().unwrap();
        withdrawal::request(&mut table.wallet, &self.withdrawal, amount, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        casino::{blackjack, GameRng},
        mocks::{create_wallet, Fixed},
        shop::PACKAGES,
        wallet::Memory,
    };
    use arcade_types::casino::{Category, DiceBet, Outcome, RouletteColor, Selection, Symbol};
    use commonware_runtime::{deterministic, deterministic::Runner, Runner as _};

    fn config(win_probability: f64) -> Config {
        Config {
            win_probability,
            ..Config::default()
        }
    }

    fn arcade<R: Draw + Send + 'static>(
        context: deterministic::Context,
        win_probability: f64,
        balance: u64,
        rng: R,
    ) -> Arcade<deterministic::Context, Memory, R> {
        Arcade::new(
            context,
            config(win_probability),
            create_wallet(balance),
            rng,
        )
    }

    #[test]
    fn test_roulette_forced_win() {
        let executor = Runner::default();
        executor.start(|context| async move {
            let arcade = arcade(context, 1.0, 100, GameRng::new(1, 1));
            let ticket = arcade
                .start_round(Bet::roulette(10, RouletteColor::Red))
                .unwrap();
            assert_eq!(arcade.balance(), 90);

            let resolution = ticket.resolved().await.unwrap();
            assert_eq!(resolution.category, Category::Win);
            assert_eq!(resolution.payout, 20);
            assert_eq!(resolution.balance, 110);
            assert_eq!(arcade.balance(), 110);
        });
    }

    #[test]
    fn test_insufficient_funds_rejected() {
        let executor = Runner::default();
        executor.start(|context| async move {
            let arcade = arcade(context, 0.15, 5, GameRng::new(1, 2));
            let result = arcade.start_round(Bet::dice(10, DiceBet::Seven));
            assert_eq!(
                result.unwrap_err(),
                Rejection::InsufficientFunds {
                    balance: 5,
                    stake: 10
                }
            );
            assert_eq!(arcade.balance(), 5);
            assert_eq!(arcade.active_round(), None);
        });
    }

    #[test]
    fn test_slots_forced_jackpot() {
        let executor = Runner::default();
        executor.start(|context| async move {
            // Bias 1 skips the Bernoulli draw, so the first draw picks the symbol.
            let arcade = arcade(context, 1.0, 100, Fixed::new(vec![0]));
            let ticket = arcade.start_round(Bet::slots(5)).unwrap();
            let resolution = ticket.resolved().await.unwrap();
            assert_eq!(resolution.outcome, Outcome::Slots([Symbol::Diamond; 3]));
            assert_eq!(resolution.payout, 500);
            assert_eq!(resolution.net(), 495);
            assert_eq!(arcade.balance(), 595);
        });
    }

    #[test]
    fn test_blackjack_natural() {
        let executor = Runner::default();
        executor.start(|context| async move {
            // Constant draws deal A♠ K♣ to the player and Q♣ J♣ to the dealer.
            let arcade = arcade(context, 0.15, 100, Fixed::new(vec![0]));
            let ticket = arcade.start_round(Bet::blackjack(10)).unwrap();

            let view = arcade.view(ticket.round).unwrap();
            assert_eq!(view.player_value, 21);
            assert_eq!(view.stage, Stage::Settled);
            assert_eq!(arcade.hit(ticket.round), Err(GameError::RoundComplete));

            let resolution = ticket.resolved().await.unwrap();
            assert_eq!(resolution.category, Category::Blackjack);
            assert_eq!(resolution.payout, 25);
            assert_eq!(arcade.balance(), 115);
        });
    }

    #[test]
    fn test_missing_and_invalid_selection() {
        let executor = Runner::default();
        executor.start(|context| async move {
            let arcade = arcade(context, 0.15, 100, GameRng::new(1, 3));

            let mut bet = Bet::roulette(10, RouletteColor::Green);
            bet.selection = None;
            assert_eq!(
                arcade.start_round(bet).unwrap_err(),
                Rejection::MissingSelection(GameType::Roulette)
            );

            let mut bet = Bet::dice(10, DiceBet::Low);
            bet.selection = Some(Selection::Roulette(RouletteColor::Red));
            assert_eq!(
                arcade.start_round(bet).unwrap_err(),
                Rejection::InvalidSelection(GameType::Dice)
            );

            // Slots take no selection at all
            let mut bet = Bet::slots(10);
            bet.selection = Some(Selection::Dice(DiceBet::High));
            assert_eq!(
                arcade.start_round(bet).unwrap_err(),
                Rejection::InvalidSelection(GameType::Slots)
            );

            assert_eq!(
                arcade.start_round(Bet::slots(0)).unwrap_err(),
                Rejection::InvalidStake
            );
            assert_eq!(arcade.balance(), 100);
        });
    }

    #[test]
    fn test_one_round_at_a_time() {
        let executor = Runner::default();
        executor.start(|context| async move {
            let arcade = arcade(context, 0.15, 100, GameRng::new(1, 4));
            let ticket = arcade.start_round(Bet::dice(10, DiceBet::High)).unwrap();
            assert_eq!(arcade.active_round(), Some(ticket.round));
            assert_eq!(
                arcade.start_round(Bet::slots(10)).unwrap_err(),
                Rejection::RoundInProgress(ticket.round)
            );
            assert_eq!(arcade.balance(), 90);

            ticket.resolved().await.unwrap();
            assert_eq!(arcade.active_round(), None);
            let next = arcade.start_round(Bet::slots(10)).unwrap();
            assert_eq!(next.round, 1);
        });
    }

    #[test]
    fn test_abandoned_ticket_still_credits() {
        let executor = Runner::default();
        executor.start(|context| async move {
            let arcade = arcade(context.clone(), 1.0, 100, GameRng::new(1, 5));
            let ticket = arcade
                .start_round(Bet::roulette(10, RouletteColor::Black))
                .unwrap();
            drop(ticket);
            assert_eq!(arcade.balance(), 90);

            context.sleep(Duration::from_secs(5)).await;
            assert_eq!(arcade.balance(), 110);
            assert_eq!(arcade.active_round(), None);
        });
    }

    #[test]
    fn test_settles_only_after_delay() {
        let executor = Runner::default();
        executor.start(|context| async move {
            let arcade = arcade(context.clone(), 1.0, 100, GameRng::new(1, 6));
            arcade.start_round(Bet::slots(10)).unwrap();

            context.sleep(Duration::from_secs(1)).await;
            assert_eq!(arcade.balance(), 90);
            assert!(arcade.active_round().is_some());

            context.sleep(Duration::from_secs(2)).await;
            assert!(arcade.balance() > 90);
        });
    }

    #[test]
    fn test_bias_snapshot_at_start() {
        let executor = Runner::default();
        executor.start(|context| async move {
            let arcade = arcade(context, 1.0, 100, GameRng::new(1, 7));
            let ticket = arcade.start_round(Bet::slots(10)).unwrap();
            arcade.set_win_probability(0.0);
            assert_eq!(arcade.win_probability(), 0.0);

            let resolution = ticket.resolved().await.unwrap();
            assert_eq!(resolution.category, Category::Win);

            let ticket = arcade.start_round(Bet::slots(10)).unwrap();
            let resolution = ticket.resolved().await.unwrap();
            assert_eq!(resolution.category, Category::Loss);
        });
    }

    #[test]
    fn test_listener_called_once_per_round() {
        let executor = Runner::default();
        executor.start(|context| async move {
            let arcade = arcade(context, 0.5, 1_000, GameRng::new(1, 8));
            let seen = Arc::new(Mutex::new(Vec::new()));
            arcade.on_resolved({
                let seen = seen.clone();
                move |resolution| seen.lock().unwrap().push(resolution.round)
            });

            for _ in 0..5 {
                let ticket = arcade.start_round(Bet::dice(10, DiceBet::Low)).unwrap();
                ticket.resolved().await.unwrap();
            }
            assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2, 3, 4]);
        });
    }

    #[test]
    fn test_blackjack_play_to_settlement() {
        let executor = Runner::default();
        executor.start(|context| async move {
            let arcade = arcade(context, 0.15, 1_000, GameRng::new(2, 0));
            for _ in 0..20 {
                let before = arcade.balance();
                let ticket = arcade.start_round(Bet::blackjack(10)).unwrap();
                let round = ticket.round;

                let mut view = arcade.view(round).unwrap();
                while view.stage == Stage::PlayerTurn && view.player_value < 17 {
                    assert_eq!(view.dealer.len(), 1);
                    view = arcade.hit(round).unwrap();
                }
                if view.stage == Stage::PlayerTurn {
                    arcade.stand(round).unwrap();
                    assert_eq!(arcade.stand(round), Err(GameError::InvalidMove));
                }

                let resolution = ticket.resolved().await.unwrap();
                let Outcome::Blackjack { player, dealer } = &resolution.outcome else {
                    panic!("unexpected outcome {:?}", resolution.outcome);
                };
                let expected = blackjack::payout(player, dealer);
                assert_eq!(resolution.category, expected.category);
                assert_eq!(resolution.payout, expected.payout(10));
                assert_eq!(arcade.balance(), before - 10 + resolution.payout);
                if resolution.category != Category::Bust && !blackjack::is_natural(player) {
                    assert!(blackjack::hand_value(dealer).0 >= 17);
                }
            }
        });
    }

    #[test]
    fn test_moves_on_wrong_round() {
        let executor = Runner::default();
        executor.start(|context| async move {
            let arcade = arcade(context, 0.15, 100, GameRng::new(1, 9));
            assert_eq!(arcade.hit(0), Err(GameError::RoundNotFound));

            let ticket = arcade.start_round(Bet::slots(10)).unwrap();
            assert_eq!(arcade.hit(ticket.round), Err(GameError::InvalidMove));
            assert_eq!(arcade.stand(ticket.round + 1), Err(GameError::RoundNotFound));
            ticket.resolved().await.unwrap();
        });
    }

    #[test]
    fn test_wallet_debit_and_credit() {
        let executor = Runner::default();
        executor.start(|context| async move {
            let arcade = arcade(context, 0.15, 100, GameRng::new(1, 11));

            // Overdraft is refused and leaves the balance alone
            assert!(!arcade.debit(101));
            assert_eq!(arcade.balance(), 100);

            assert!(arcade.debit(100));
            assert_eq!(arcade.balance(), 0);
            assert!(!arcade.debit(1));

            arcade.credit(40);
            assert_eq!(arcade.balance(), 40);
            assert_eq!(
                arcade.start_round(Bet::slots(50)).unwrap_err(),
                Rejection::InsufficientFunds {
                    balance: 40,
                    stake: 50
                }
            );
        });
    }

    #[test]
    fn test_purchase_and_withdraw() {
        let executor = Runner::default();
        executor.start(|context| async move {
            let arcade = arcade(context, 0.15, 100, GameRng::new(1, 10));
            assert_eq!(arcade.purchase(&PACKAGES[3]), 325);
            assert_eq!(arcade.balance(), 425);

            let receipt = arcade.withdraw(200, "pix-key").unwrap();
            assert_eq!(receipt.net_cents, 3_060);
            assert_eq!(arcade.balance(), 225);

            assert_eq!(
                arcade.withdraw(50, "pix-key"),
                Err(WithdrawalError::BelowMinimum {
                    amount: 50,
                    minimum: 100
                })
            );
            assert_eq!(arcade.balance(), 225);
        });
    }
}
