use crate::api::params::{ActLeaderboardParams, ContentParams, OptionalParams};
use crate::api::query::Dispatcher;
use serde_json::Value;

resource!(
    /// Game content catalogue for a shard, optionally localized.
    ValContentV1,
    "val/content/v1/"
);

impl<D: Dispatcher> ValContentV1<D> {
    pub fn content(&self, routing: &str, params: &ContentParams) -> Result<Value, D::Error> {
        self.endpoint
            .call("VAL-CONTENT-V1-content", routing, &["contents"], &[], &params.to_pairs())
    }
}

resource!(ValMatchV1, "val/match/v1/");

impl<D: Dispatcher> ValMatchV1<D> {
    pub fn by_match(&self, routing: &str, match_id: &str) -> Result<Value, D::Error> {
        self.endpoint
            .call("VAL-MATCH-V1-by-match", routing, &["matches/"], &[match_id], &[])
    }

    pub fn by_puuid(&self, routing: &str, puuid: &str) -> Result<Value, D::Error> {
        self.endpoint.call(
            "VAL-MATCH-V1-by-puuid",
            routing,
            &["matchlists/by-puuid/"],
            &[puuid],
            &[],
        )
    }

    pub fn by_queue(&self, routing: &str, queue: &str) -> Result<Value, D::Error> {
        self.endpoint.call(
            "VAL-MATCH-V1-by-queue",
            routing,
            &["recent-matches/by-queue/"],
            &[queue],
            &[],
        )
    }
}

resource!(ValRankedV1, "val/ranked/v1/");

impl<D: Dispatcher> ValRankedV1<D> {
    /// Competitive leaderboard for an act; `size` defaults to 200 and
    /// `startIndex` to 0.
    pub fn by_act(
        &self,
        routing: &str,
        act_id: &str,
        params: &ActLeaderboardParams,
    ) -> Result<Value, D::Error> {
        self.endpoint.call(
            "VAL-RANKED-V1-by-act",
            routing,
            &["leaderboards/by-act/"],
            &[act_id],
            &params.to_pairs(),
        )
    }
}

resource!(ValStatusV1, "val/status/v1/");

impl<D: Dispatcher> ValStatusV1<D> {
    pub fn platform_data(&self, routing: &str) -> Result<Value, D::Error> {
        self.endpoint
            .call("VAL-STATUS-V1-platform-data", routing, &["platform-data"], &[], &[])
    }
}
