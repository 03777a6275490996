use crate::api::endpoint::Endpoint;
use crate::api::params::{
    LeaderboardParams, MatchIdsParams, OptionalParams, PageParams, TopMasteryParams,
};
use crate::api::query::Dispatcher;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

resource!(ChampionMasteryV4, "lol/champion-mastery/v4/");

impl<D: Dispatcher> ChampionMasteryV4<D> {
    pub fn by_summoner_id(&self, routing: &str, summoner_id: &str) -> Result<Value, D::Error> {
        self.endpoint.call(
            "CHAMPION-MASTERY-V4-by-summoner-id",
            routing,
            &["champion-masteries/by-summoner/"],
            &[summoner_id],
            &[],
        )
    }

    pub fn by_summoner_by_champion(
        &self,
        routing: &str,
        summoner_id: &str,
        champion_id: &str,
    ) -> Result<Value, D::Error> {
        self.endpoint.call(
            "CHAMPION-MASTERY-V4-by-summoner-by-champion",
            routing,
            &["champion-masteries/by-summoner/", "/by-champion/"],
            &[summoner_id, champion_id],
            &[],
        )
    }

    /// Highest mastery entries; `count` defaults to 3.
    pub fn by_summoner_top(
        &self,
        routing: &str,
        summoner_id: &str,
        params: &TopMasteryParams,
    ) -> Result<Value, D::Error> {
        self.endpoint.call(
            "CHAMPION-MASTERY-V4-by-summoner-top",
            routing,
            &["champion-masteries/by-summoner/", "/top"],
            &[summoner_id],
            &params.to_pairs(),
        )
    }

    pub fn scores_by_summoner(&self, routing: &str, summoner_id: &str) -> Result<Value, D::Error> {
        self.endpoint.call(
            "CHAMPION-MASTERY-V4-scores-by-summoner",
            routing,
            &["scores/by-summoner/"],
            &[summoner_id],
            &[],
        )
    }
}

resource!(ChampionV3, "lol/platform/v3/");

impl<D: Dispatcher> ChampionV3<D> {
    pub fn rotations(&self, routing: &str) -> Result<Value, D::Error> {
        self.endpoint
            .call("CHAMPION-V3-rotations", routing, &["champion-rotations"], &[], &[])
    }
}

resource!(ClashV1, "lol/clash/v1/");

impl<D: Dispatcher> ClashV1<D> {
    pub fn by_summoner_id(&self, routing: &str, summoner_id: &str) -> Result<Value, D::Error> {
        self.endpoint.call(
            "CLASH-V1-by-summoner-id",
            routing,
            &["players/by-summoner/"],
            &[summoner_id],
            &[],
        )
    }

    pub fn by_team(&self, routing: &str, team: &str) -> Result<Value, D::Error> {
        self.endpoint
            .call("CLASH-V1-by-team", routing, &["teams/"], &[team], &[])
    }

    pub fn tournament_by_team(&self, routing: &str, team: &str) -> Result<Value, D::Error> {
        self.endpoint.call(
            "CLASH-V1-tournament-by-team",
            routing,
            &["tournaments/by-team/"],
            &[team],
            &[],
        )
    }

    pub fn by_tournament(&self, routing: &str, tournament: &str) -> Result<Value, D::Error> {
        self.endpoint.call(
            "CLASH-V1-by-tournament",
            routing,
            &["tournaments/"],
            &[tournament],
            &[],
        )
    }

    /// Active and upcoming tournaments.
    pub fn tournaments(&self, routing: &str) -> Result<Value, D::Error> {
        self.endpoint
            .call("CLASH-V1-tournaments", routing, &["tournaments"], &[], &[])
    }
}

resource!(LeagueExpV4, "lol/league-exp/v4/");

impl<D: Dispatcher> LeagueExpV4<D> {
    pub fn entries(
        &self,
        routing: &str,
        queue: &str,
        tier: &str,
        division: &str,
        params: &PageParams,
    ) -> Result<Value, D::Error> {
        self.endpoint.call(
            "LEAGUE-EXP-V4-entries",
            routing,
            &["entries/", "/", "/"],
            &[queue, tier, division],
            &params.to_pairs(),
        )
    }
}

resource!(LeagueV4, "lol/league/v4/");

impl<D: Dispatcher> LeagueV4<D> {
    pub fn challenger(&self, routing: &str, queue: &str) -> Result<Value, D::Error> {
        self.endpoint.call(
            "LEAGUE-V4-challenger",
            routing,
            &["challengerleagues/by-queue/"],
            &[queue],
            &[],
        )
    }

    pub fn grandmaster(&self, routing: &str, queue: &str) -> Result<Value, D::Error> {
        self.endpoint.call(
            "LEAGUE-V4-grandmaster",
            routing,
            &["grandmasterleagues/by-queue/"],
            &[queue],
            &[],
        )
    }

    pub fn master(&self, routing: &str, queue: &str) -> Result<Value, D::Error> {
        self.endpoint.call(
            "LEAGUE-V4-master",
            routing,
            &["masterleagues/by-queue/"],
            &[queue],
            &[],
        )
    }

    pub fn by_summoner_id(&self, routing: &str, summoner_id: &str) -> Result<Value, D::Error> {
        self.endpoint.call(
            "LEAGUE-V4-by-summoner-id",
            routing,
            &["entries/by-summoner/"],
            &[summoner_id],
            &[],
        )
    }

    pub fn by_puuid(&self, routing: &str, puuid: &str) -> Result<Value, D::Error> {
        self.endpoint
            .call("LEAGUE-V4-by-puuid", routing, &["entries/by-puuid/"], &[puuid], &[])
    }

    pub fn by_league_id(&self, routing: &str, league_id: &str) -> Result<Value, D::Error> {
        self.endpoint
            .call("LEAGUE-V4-by-league-id", routing, &["leagues/"], &[league_id], &[])
    }

    /// Entries below master tier; `page` defaults to 1.
    pub fn specific_league(
        &self,
        routing: &str,
        queue: &str,
        tier: &str,
        division: &str,
        params: &PageParams,
    ) -> Result<Value, D::Error> {
        self.endpoint.call(
            "LEAGUE-V4-specific-league",
            routing,
            &["entries/", "/", "/"],
            &[queue, tier, division],
            &params.to_pairs(),
        )
    }
}

resource!(LolChallengesV1, "lol/challenges/v1/");

impl<D: Dispatcher> LolChallengesV1<D> {
    pub fn config(&self, routing: &str) -> Result<Value, D::Error> {
        self.endpoint
            .call("LOL-CHALLENGES-V1-config", routing, &["challenges/config"], &[], &[])
    }

    pub fn percentiles(&self, routing: &str) -> Result<Value, D::Error> {
        self.endpoint.call(
            "LOL-CHALLENGES-V1-percentiles",
            routing,
            &["challenges/percentiles"],
            &[],
            &[],
        )
    }

    pub fn challenge_config(&self, routing: &str, challenge_id: &str) -> Result<Value, D::Error> {
        self.endpoint.call(
            "LOL-CHALLENGES-V1-challenge-config",
            routing,
            &["challenges/", "/config"],
            &[challenge_id],
            &[],
        )
    }

    /// Top players of a level (`MASTER`, `GRANDMASTER` or `CHALLENGER`).
    pub fn challenge_leaderboard(
        &self,
        routing: &str,
        challenge_id: &str,
        level: &str,
        params: &LeaderboardParams,
    ) -> Result<Value, D::Error> {
        self.endpoint.call(
            "LOL-CHALLENGES-V1-challenge-leaderboard",
            routing,
            &["challenges/", "/leaderboards/by-level/"],
            &[challenge_id, level],
            &params.to_pairs(),
        )
    }

    pub fn challenge_percentiles(
        &self,
        routing: &str,
        challenge_id: &str,
    ) -> Result<Value, D::Error> {
        self.endpoint.call(
            "LOL-CHALLENGES-V1-challenge-percentiles",
            routing,
            &["challenges/", "/percentiles"],
            &[challenge_id],
            &[],
        )
    }

    pub fn by_puuid(&self, routing: &str, puuid: &str) -> Result<Value, D::Error> {
        self.endpoint.call(
            "LOL-CHALLENGES-V1-by-puuid",
            routing,
            &["player-data/"],
            &[puuid],
            &[],
        )
    }
}

resource!(LolStatus, "lol/status/");

impl<D: Dispatcher> LolStatus<D> {
    pub fn v3(&self, routing: &str) -> Result<Value, D::Error> {
        self.endpoint
            .call("LOL-STATUS-v3", routing, &["v3/shard-data"], &[], &[])
    }

    pub fn v4(&self, routing: &str) -> Result<Value, D::Error> {
        self.endpoint
            .call("LOL-STATUS-v4", routing, &["v4/platform-data"], &[], &[])
    }
}

resource!(
    /// Match data. Routed by region, not platform.
    MatchV5,
    "lol/match/v5/"
);

impl<D: Dispatcher> MatchV5<D> {
    pub fn by_match_id(&self, routing: &str, match_id: &str) -> Result<Value, D::Error> {
        self.endpoint
            .call("MATCH-V5-by-match-id", routing, &["matches/"], &[match_id], &[])
    }

    pub fn timeline(&self, routing: &str, match_id: &str) -> Result<Value, D::Error> {
        self.endpoint.call(
            "MATCH-V5-timeline",
            routing,
            &["matches/", "/timeline"],
            &[match_id],
            &[],
        )
    }

    pub fn by_puuid(
        &self,
        routing: &str,
        puuid: &str,
        params: &MatchIdsParams,
    ) -> Result<Value, D::Error> {
        self.endpoint.call(
            "MATCH-V5-by-puuid",
            routing,
            &["matches/by-puuid/", "/ids"],
            &[puuid],
            &params.to_pairs(),
        )
    }
}

/// Summoner lookups. The RSO lookup lives under `fulfillment/v1/` and gets
/// its own descriptor.
pub struct SummonerV4<D> {
    endpoint: Endpoint<D>,
    fulfillment: Endpoint<D>,
}

impl<D> SummonerV4<D> {
    pub const PREFIX: &'static str = "lol/summoner/v4/";
    pub const FULFILLMENT_PREFIX: &'static str = "fulfillment/v1/";

    pub fn new(dispatcher: Arc<D>) -> Self {
        SummonerV4 {
            endpoint: Endpoint::new(Self::PREFIX, Arc::clone(&dispatcher)),
            fulfillment: Endpoint::new(Self::FULFILLMENT_PREFIX, dispatcher),
        }
    }

    pub fn endpoint(&self) -> &Endpoint<D> {
        &self.endpoint
    }
}

impl<D: Dispatcher> SummonerV4<D> {
    pub fn by_rso_puuid(&self, routing: &str, puuid: &str) -> Result<Value, D::Error> {
        self.fulfillment.call(
            "SUMMONER-V4-by-rso-puuid",
            routing,
            &["summoners/by-puuid/"],
            &[puuid],
            &[],
        )
    }

    pub fn by_account_id(&self, routing: &str, account_id: &str) -> Result<Value, D::Error> {
        self.endpoint.call(
            "SUMMONER-V4-by-account-id",
            routing,
            &["summoners/by-account/"],
            &[account_id],
            &[],
        )
    }

    pub fn by_name(&self, routing: &str, name: &str) -> Result<Value, D::Error> {
        self.endpoint
            .call("SUMMONER-V4-by-name", routing, &["summoners/by-name/"], &[name], &[])
    }

    pub fn by_puuid(&self, routing: &str, puuid: &str) -> Result<Value, D::Error> {
        self.endpoint.call(
            "SUMMONER-V4-by-puuid",
            routing,
            &["summoners/by-puuid/"],
            &[puuid],
            &[],
        )
    }

    pub fn by_summoner_id(&self, routing: &str, summoner_id: &str) -> Result<Value, D::Error> {
        self.endpoint.call(
            "SUMMONER-V4-by-summoner-id",
            routing,
            &["summoners/"],
            &[summoner_id],
            &[],
        )
    }
}

impl<D> Clone for SummonerV4<D> {
    fn clone(&self) -> Self {
        SummonerV4 {
            endpoint: self.endpoint.clone(),
            fulfillment: self.fulfillment.clone(),
        }
    }
}

impl<D> fmt::Debug for SummonerV4<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SummonerV4")
            .field("prefix", &Self::PREFIX)
            .field("fulfillment_prefix", &Self::FULFILLMENT_PREFIX)
            .finish()
    }
}

resource!(SpectatorV4, "lol/spectator/v4/");

impl<D: Dispatcher> SpectatorV4<D> {
    pub fn by_summoner_id(&self, routing: &str, summoner_id: &str) -> Result<Value, D::Error> {
        self.endpoint.call(
            "SPECTATOR-V4-by-summoner-id",
            routing,
            &["active-games/by-summoner/"],
            &[summoner_id],
            &[],
        )
    }

    pub fn featured_games(&self, routing: &str) -> Result<Value, D::Error> {
        self.endpoint
            .call("SPECTATOR-V4-featured-games", routing, &["featured-games"], &[], &[])
    }
}
