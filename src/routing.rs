//! Routing values understood by the dispatcher.
//!
//! Endpoint methods take routing as a plain `&str`; these enums exist so
//! callers and the CLI can name a host without typos, and so platform-scoped
//! lookups can be mapped onto the regional cluster that serves match and
//! account data.

use crate::error::AppError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Br1,
    Eun1,
    Euw1,
    Jp1,
    Kr,
    La1,
    La2,
    Me1,
    Na1,
    Oc1,
    Ph2,
    Ru,
    Sg2,
    Th2,
    Tr1,
    Tw2,
    Vn2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Americas,
    Asia,
    Europe,
    Sea,
}

/// Valorant shard, used by the `val/` resources in place of a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shard {
    Ap,
    Br,
    Eu,
    Kr,
    Latam,
    Na,
}

impl Platform {
    pub const ALL: [Platform; 17] = [
        Platform::Br1,
        Platform::Eun1,
        Platform::Euw1,
        Platform::Jp1,
        Platform::Kr,
        Platform::La1,
        Platform::La2,
        Platform::Me1,
        Platform::Na1,
        Platform::Oc1,
        Platform::Ph2,
        Platform::Ru,
        Platform::Sg2,
        Platform::Th2,
        Platform::Tr1,
        Platform::Tw2,
        Platform::Vn2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Br1 => "br1",
            Platform::Eun1 => "eun1",
            Platform::Euw1 => "euw1",
            Platform::Jp1 => "jp1",
            Platform::Kr => "kr",
            Platform::La1 => "la1",
            Platform::La2 => "la2",
            Platform::Me1 => "me1",
            Platform::Na1 => "na1",
            Platform::Oc1 => "oc1",
            Platform::Ph2 => "ph2",
            Platform::Ru => "ru",
            Platform::Sg2 => "sg2",
            Platform::Th2 => "th2",
            Platform::Tr1 => "tr1",
            Platform::Tw2 => "tw2",
            Platform::Vn2 => "vn2",
        }
    }

    /// Regional cluster serving account, match and challenge data for this
    /// platform.
    pub fn regional(&self) -> Region {
        match self {
            Platform::Na1 | Platform::Br1 | Platform::La1 | Platform::La2 => Region::Americas,
            Platform::Euw1 | Platform::Eun1 | Platform::Tr1 | Platform::Ru | Platform::Me1 => {
                Region::Europe
            }
            Platform::Kr | Platform::Jp1 => Region::Asia,
            Platform::Oc1
            | Platform::Ph2
            | Platform::Sg2
            | Platform::Th2
            | Platform::Tw2
            | Platform::Vn2 => Region::Sea,
        }
    }
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Americas => "americas",
            Region::Asia => "asia",
            Region::Europe => "europe",
            Region::Sea => "sea",
        }
    }
}

impl Shard {
    pub const ALL: [Shard; 6] = [
        Shard::Ap,
        Shard::Br,
        Shard::Eu,
        Shard::Kr,
        Shard::Latam,
        Shard::Na,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Shard::Ap => "ap",
            Shard::Br => "br",
            Shard::Eu => "eu",
            Shard::Kr => "kr",
            Shard::Latam => "latam",
            Shard::Na => "na",
        }
    }
}

impl FromStr for Shard {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Shard::ALL
            .iter()
            .copied()
            .find(|shard| shard.as_str() == lower)
            .ok_or_else(|| AppError::InvalidRouting(s.to_string()))
    }
}

impl FromStr for Platform {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Platform::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == lower)
            .ok_or_else(|| AppError::InvalidRouting(s.to_string()))
    }
}

impl FromStr for Region {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "americas" => Ok(Region::Americas),
            "asia" => Ok(Region::Asia),
            "europe" => Ok(Region::Europe),
            "sea" => Ok(Region::Sea),
            _ => Err(AppError::InvalidRouting(s.to_string())),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Platform {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Shard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Shard {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for Region {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
