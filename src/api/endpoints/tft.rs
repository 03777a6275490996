use crate::api::params::{OptionalParams, TftMatchIdsParams, TierDivisionParams};
use crate::api::query::Dispatcher;
use serde_json::Value;

resource!(TftLeagueV1, "tft/league/v1/");

impl<D: Dispatcher> TftLeagueV1<D> {
    pub fn challenger(&self, routing: &str) -> Result<Value, D::Error> {
        self.endpoint
            .call("TFT-LEAGUE-V1-challenger", routing, &["challenger"], &[], &[])
    }

    pub fn grandmaster(&self, routing: &str) -> Result<Value, D::Error> {
        self.endpoint
            .call("TFT-LEAGUE-V1-grandmaster", routing, &["grandmaster"], &[], &[])
    }

    pub fn master(&self, routing: &str) -> Result<Value, D::Error> {
        self.endpoint
            .call("TFT-LEAGUE-V1-master", routing, &["master"], &[], &[])
    }

    pub fn by_summoner_id(&self, routing: &str, summoner_id: &str) -> Result<Value, D::Error> {
        self.endpoint.call(
            "TFT-LEAGUE-V1-by-summoner-id",
            routing,
            &["entries/by-summoner/"],
            &[summoner_id],
            &[],
        )
    }

    pub fn by_league_id(&self, routing: &str, league_id: &str) -> Result<Value, D::Error> {
        self.endpoint
            .call("TFT-LEAGUE-V1-by-league-id", routing, &["leagues/"], &[league_id], &[])
    }

    /// Top of a rated ladder, e.g. `RANKED_TFT_TURBO`.
    pub fn queue_top(&self, routing: &str, queue: &str) -> Result<Value, D::Error> {
        self.endpoint.call(
            "TFT-LEAGUE-V1-queue-top",
            routing,
            &["rated-ladders/", "/top"],
            &[queue],
            &[],
        )
    }

    pub fn by_tier_division(
        &self,
        routing: &str,
        tier: &str,
        division: &str,
        params: &TierDivisionParams,
    ) -> Result<Value, D::Error> {
        self.endpoint.call(
            "TFT-LEAGUE-V1-by-tier-division",
            routing,
            &["entries/", "/"],
            &[tier, division],
            &params.to_pairs(),
        )
    }
}

resource!(TftMatchV1, "tft/match/v1/");

impl<D: Dispatcher> TftMatchV1<D> {
    pub fn by_puuid(
        &self,
        routing: &str,
        puuid: &str,
        params: &TftMatchIdsParams,
    ) -> Result<Value, D::Error> {
        self.endpoint.call(
            "TFT-MATCH-V1-by-puuid",
            routing,
            &["matches/by-puuid/", "/ids"],
            &[puuid],
            &params.to_pairs(),
        )
    }

    pub fn by_match(&self, routing: &str, match_id: &str) -> Result<Value, D::Error> {
        self.endpoint
            .call("TFT-MATCH-V1-by-match", routing, &["matches/"], &[match_id], &[])
    }
}

resource!(TftStatusV1, "tft/status/v1/");

impl<D: Dispatcher> TftStatusV1<D> {
    pub fn v1(&self, routing: &str) -> Result<Value, D::Error> {
        self.endpoint
            .call("TFT-STATUS-V1-v1", routing, &["platform-data"], &[], &[])
    }
}

resource!(TftSummonerV1, "tft/summoner/v1/");

impl<D: Dispatcher> TftSummonerV1<D> {
    pub fn by_account(&self, routing: &str, account_id: &str) -> Result<Value, D::Error> {
        self.endpoint.call(
            "TFT-SUMMONER-V1-by-account",
            routing,
            &["summoners/by-account/"],
            &[account_id],
            &[],
        )
    }

    pub fn by_name(&self, routing: &str, summoner_name: &str) -> Result<Value, D::Error> {
        self.endpoint.call(
            "TFT-SUMMONER-V1-by-name",
            routing,
            &["summoners/by-name/"],
            &[summoner_name],
            &[],
        )
    }

    pub fn by_puuid(&self, routing: &str, puuid: &str) -> Result<Value, D::Error> {
        self.endpoint.call(
            "TFT-SUMMONER-V1-by-puuid",
            routing,
            &["summoners/by-puuid/"],
            &[puuid],
            &[],
        )
    }

    pub fn by_summoner_id(&self, routing: &str, summoner_id: &str) -> Result<Value, D::Error> {
        self.endpoint.call(
            "TFT-SUMMONER-V1-by-summoner-id",
            routing,
            &["summoners/"],
            &[summoner_id],
            &[],
        )
    }
}
