use log::debug;
use serde::Serialize;
use taverncraft_game::{BarSession, DaySettlement, ReferenceData, SessionPhase};

use crate::logic::policy::{BarkeepPolicy, BarkeepStrategy};

/// Configuration for one simulated run.
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    pub seed: u64,
    pub days: u32,
    pub strategy: BarkeepStrategy,
}

impl SimulationConfig {
    #[must_use]
    pub fn new(strategy: BarkeepStrategy, seed: u64, days: u32) -> Self {
        Self {
            seed,
            days,
            strategy,
        }
    }
}

/// Per-day tally plus the night's settlement.
#[derive(Debug, Clone, Serialize)]
pub struct DayReport {
    pub day: u32,
    pub serves: u32,
    pub hits: u32,
    pub points: u32,
    pub settlement: DaySettlement,
}

/// Aggregate outcome of a whole simulated run.
#[derive(Debug, Clone, Serialize)]
pub struct ShiftSummary {
    pub strategy: String,
    pub seed: u64,
    pub share_code: String,
    pub days: u32,
    pub total_serves: u32,
    pub total_hits: u32,
    pub final_score: u32,
    pub final_balance: i64,
    pub ledger_money: i64,
    pub upgrades_owned: u32,
    pub day_reports: Vec<DayReport>,
}

impl ShiftSummary {
    /// Fraction of serves that scored, in [0, 1].
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        if self.total_serves == 0 {
            0.0
        } else {
            f64::from(self.total_hits) / f64::from(self.total_serves)
        }
    }
}

/// Core deterministic simulation harness: drives a [`BarSession`] through
/// scripted days with a barkeep policy.
pub struct ShiftRunner {
    session: BarSession,
    policy: Box<dyn BarkeepPolicy + Send>,
    config: SimulationConfig,
}

impl ShiftRunner {
    #[must_use]
    pub fn new(config: SimulationConfig, data: ReferenceData) -> Self {
        let session = BarSession::new(config.seed, data);
        let policy = config.strategy.create_policy(config.seed);
        Self {
            session,
            policy,
            config,
        }
    }

    /// Play every configured day to completion and summarize.
    pub fn run(&mut self) -> ShiftSummary {
        let mut day_reports = Vec::with_capacity(self.config.days as usize);
        let mut total_serves = 0;
        let mut total_hits = 0;

        for _ in 0..self.config.days {
            let report = self.play_day();
            total_serves += report.serves;
            total_hits += report.hits;
            day_reports.push(report);
            self.session.next_day();
        }

        let upgrades = self.session.ledger().upgrades;
        let upgrades_owned = u32::from(upgrades.more_ingredients)
            + u32::from(upgrades.more_cocktails)
            + u32::from(upgrades.higher_earnings)
            + u32::from(upgrades.mead_fridge);

        ShiftSummary {
            strategy: self.policy.name().to_string(),
            seed: self.config.seed,
            share_code: self.session.share_code(),
            days: self.config.days,
            total_serves,
            total_hits,
            final_score: self.session.score(),
            final_balance: self.session.balance(),
            ledger_money: self.session.ledger().money,
            upgrades_owned,
            day_reports,
        }
    }

    fn play_day(&mut self) -> DayReport {
        let day = self.session.day();
        let mut serves = 0;
        let mut hits = 0;
        let points_before = self.session.score();

        let settlement = loop {
            debug_assert_eq!(self.session.phase(), SessionPhase::Mixing);

            for kind in self.policy.shopping_priority() {
                self.session.purchase(*kind);
            }
            if self.session.use_fridge() {
                debug!("day {day}: fridge serve");
            }

            if let Some(mission) = self.session.mission() {
                let pours = self
                    .policy
                    .plan_pours(mission, self.session.ingredient_pool());
                for pour in pours {
                    self.session.add_ingredient(pour);
                }
            }
            if let Some(outcome) = self.session.serve() {
                serves += 1;
                if outcome.success {
                    hits += 1;
                }
                debug!(
                    "day {day}: served for {} ({} credited)",
                    outcome.points, outcome.credited
                );
            }

            if let Some(settlement) = self.session.tick_second() {
                break settlement;
            }
        };

        DayReport {
            day,
            serves,
            hits,
            points: self.session.score() - points_before,
            settlement,
        }
    }
}
