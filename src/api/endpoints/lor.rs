use crate::api::query::Dispatcher;
use serde_json::Value;

resource!(LorMatchV1, "lor/match/v1/");

impl<D: Dispatcher> LorMatchV1<D> {
    pub fn by_puuid(&self, routing: &str, puuid: &str) -> Result<Value, D::Error> {
        self.endpoint.call(
            "LOR-MATCH-V1-by-puuid",
            routing,
            &["matches/by-puuid/", "/ids"],
            &[puuid],
            &[],
        )
    }

    pub fn by_match(&self, routing: &str, match_id: &str) -> Result<Value, D::Error> {
        self.endpoint
            .call("LOR-MATCH-V1-by-match", routing, &["matches/"], &[match_id], &[])
    }
}

resource!(LorRankedV1, "lor/ranked/v1/");

impl<D: Dispatcher> LorRankedV1<D> {
    pub fn leaderboards(&self, routing: &str) -> Result<Value, D::Error> {
        self.endpoint
            .call("LOR-RANKED-V1-leaderboards", routing, &["leaderboards"], &[], &[])
    }
}

resource!(LorStatusV1, "lor/status/v1/");

impl<D: Dispatcher> LorStatusV1<D> {
    pub fn v1(&self, routing: &str) -> Result<Value, D::Error> {
        self.endpoint
            .call("LOR-STATUS-V1-v1", routing, &["platform-data"], &[], &[])
    }
}
