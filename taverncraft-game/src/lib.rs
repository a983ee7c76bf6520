//! TavernCraft Game Engine
//!
//! Platform-agnostic core game logic for the TavernCraft bar-mixing game.
//! This crate provides all game mechanics without UI or platform-specific
//! dependencies.

pub mod constants;
pub mod data;
pub mod ledger;
pub mod mission;
pub mod mix;
pub mod rng;
pub mod scoring;
pub mod seed;
pub mod session;
pub mod settlement;

// Re-export commonly used types
pub use data::{CocktailRecipe, FlavorType, Garnish, Ingredient, PrepMethod, ReferenceData};
pub use ledger::{Ledger, LedgerCommand, LedgerOutcome, UpgradeCosts, UpgradeKind, Upgrades};
pub use mission::{Mission, MissionKind, MissionPools, MissionTarget, generate_mission};
pub use mix::Mix;
pub use rng::{CountingRng, RngBundle};
pub use scoring::evaluate;
pub use seed::{decode_to_seed, encode_friendly, generate_code_from_entropy};
pub use session::{BarSession, ServeOutcome, SessionPhase};
pub use settlement::{DaySettlement, EconomyConfig, EconomyError, settle};

/// Trait for abstracting data loading operations
/// Platform-specific implementations should provide this
pub trait DataLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the reference tables from the platform-specific source
    ///
    /// # Errors
    ///
    /// Returns an error if the reference data cannot be loaded.
    fn load_reference_data(&self) -> Result<ReferenceData, Self::Error>;

    /// Load configuration data for a specific system
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or parsed.
    fn load_config<T>(&self, config_name: &str) -> Result<T, Self::Error>
    where
        T: serde::de::DeserializeOwned;
}

/// Main game engine for constructing sessions from externally supplied data
pub struct GameEngine<L>
where
    L: DataLoader,
{
    data_loader: L,
}

impl<L> GameEngine<L>
where
    L: DataLoader,
{
    /// Create a new game engine with the provided data loader
    pub const fn new(data_loader: L) -> Self {
        Self { data_loader }
    }

    /// Create a new session with the specified seed and default tuning
    ///
    /// # Errors
    ///
    /// Returns an error if the reference data cannot be loaded.
    pub fn create_session(&self, seed: u64) -> Result<BarSession, L::Error> {
        let data = self.data_loader.load_reference_data()?;
        Ok(BarSession::new(seed, data))
    }

    /// Create a session with loader-supplied economy and upgrade pricing,
    /// rejecting invalid tuning.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails or the economy config is invalid.
    pub fn create_configured_session(&self, seed: u64) -> Result<BarSession, anyhow::Error>
    where
        L::Error: Into<anyhow::Error>,
    {
        let data = self.data_loader.load_reference_data().map_err(Into::into)?;
        let economy: EconomyConfig = self
            .data_loader
            .load_config("economy")
            .map_err(Into::into)?;
        economy.validate()?;
        let costs: UpgradeCosts = self
            .data_loader
            .load_config("upgrades")
            .map_err(Into::into)?;
        Ok(BarSession::with_configs(seed, data, economy, costs))
    }
}
