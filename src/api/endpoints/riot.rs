use crate::api::query::Dispatcher;
use serde_json::Value;

resource!(
    /// Riot accounts, shared by every title. Routed by region.
    AccountV1,
    "riot/account/v1/"
);

impl<D: Dispatcher> AccountV1<D> {
    pub fn by_puuid(&self, routing: &str, puuid: &str) -> Result<Value, D::Error> {
        self.endpoint
            .call("ACCOUNT-V1-by-puuid", routing, &["accounts/by-puuid/"], &[puuid], &[])
    }

    pub fn by_riot_id(
        &self,
        routing: &str,
        game_name: &str,
        tag_line: &str,
    ) -> Result<Value, D::Error> {
        self.endpoint.call(
            "ACCOUNT-V1-by-riot-id",
            routing,
            &["accounts/by-riot-id/", "/"],
            &[game_name, tag_line],
            &[],
        )
    }

    /// Active shard of a player for `game` (`val` or `lor`).
    pub fn by_game(&self, routing: &str, game: &str, puuid: &str) -> Result<Value, D::Error> {
        self.endpoint.call(
            "ACCOUNT-V1-by-game",
            routing,
            &["active-shards/by-game/", "/by-puuid/"],
            &[game, puuid],
            &[],
        )
    }
}
