use core::fmt;

use serde::{Deserialize, Serialize};

/// Одна из трёх ставок формата 30-10-10.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Stake {
    Main,
    Dormie,
    Bye,
}

impl Stake {
    /// Порядок, в котором ставки идут в расчёте.
    pub const ALL: [Stake; 3] = [Stake::Main, Stake::Dormie, Stake::Bye];
}

impl fmt::Display for Stake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stake::Main => "main",
            Stake::Dormie => "dormie",
            Stake::Bye => "bye",
        };
        write!(f, "{s}")
    }
}

/// Стоимость ставок в очках.
///
/// По умолчанию классические 30 / 10 / 10.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StakeConfig {
    pub main: u32,
    pub dormie: u32,
    pub bye: u32,
}

impl Default for StakeConfig {
    fn default() -> Self {
        Self {
            main: 30,
            dormie: 10,
            bye: 10,
        }
    }
}

impl StakeConfig {
    pub fn new(main: u32, dormie: u32, bye: u32) -> Self {
        Self { main, dormie, bye }
    }

    pub fn points(&self, stake: Stake) -> u32 {
        match stake {
            Stake::Main => self.main,
            Stake::Dormie => self.dormie,
            Stake::Bye => self.bye,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.main == 0 {
            return Err("StakeConfig: main = 0".into());
        }
        if self.main < self.dormie {
            return Err("StakeConfig: main < dormie".into());
        }
        if self.main < self.bye {
            return Err("StakeConfig: main < bye".into());
        }
        Ok(())
    }

    /// Загрузить конфиг из JSON. Отсутствующие поля берутся из `Default`.
    pub fn from_json_str(json: &str) -> Result<Self, String> {
        let config: StakeConfig =
            serde_json::from_str(json).map_err(|e| format!("StakeConfig: {e}"))?;
        config.validate()?;
        Ok(config)
    }
}
