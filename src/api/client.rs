use super::endpoints::*;
use super::query::Dispatcher;
use std::sync::Arc;

/// Every resource of the catalogue, all calling through one shared
/// dispatcher.
pub struct RiotApi<D> {
    pub account_v1: AccountV1<D>,
    pub champion_mastery_v4: ChampionMasteryV4<D>,
    pub champion_v3: ChampionV3<D>,
    pub clash_v1: ClashV1<D>,
    pub league_exp_v4: LeagueExpV4<D>,
    pub league_v4: LeagueV4<D>,
    pub lol_challenges_v1: LolChallengesV1<D>,
    pub lol_status: LolStatus<D>,
    pub lor_match_v1: LorMatchV1<D>,
    pub lor_ranked_v1: LorRankedV1<D>,
    pub lor_status_v1: LorStatusV1<D>,
    pub match_v5: MatchV5<D>,
    pub summoner_v4: SummonerV4<D>,
    pub spectator_v4: SpectatorV4<D>,
    pub tft_league_v1: TftLeagueV1<D>,
    pub tft_match_v1: TftMatchV1<D>,
    pub tft_status_v1: TftStatusV1<D>,
    pub tft_summoner_v1: TftSummonerV1<D>,
    pub val_content_v1: ValContentV1<D>,
    pub val_match_v1: ValMatchV1<D>,
    pub val_ranked_v1: ValRankedV1<D>,
    pub val_status_v1: ValStatusV1<D>,
    dispatcher: Arc<D>,
}

impl<D: Dispatcher> RiotApi<D> {
    pub fn new(dispatcher: D) -> Self {
        Self::from_shared(Arc::new(dispatcher))
    }
}

impl<D> RiotApi<D> {
    pub fn from_shared(dispatcher: Arc<D>) -> Self {
        RiotApi {
            account_v1: AccountV1::new(Arc::clone(&dispatcher)),
            champion_mastery_v4: ChampionMasteryV4::new(Arc::clone(&dispatcher)),
            champion_v3: ChampionV3::new(Arc::clone(&dispatcher)),
            clash_v1: ClashV1::new(Arc::clone(&dispatcher)),
            league_exp_v4: LeagueExpV4::new(Arc::clone(&dispatcher)),
            league_v4: LeagueV4::new(Arc::clone(&dispatcher)),
            lol_challenges_v1: LolChallengesV1::new(Arc::clone(&dispatcher)),
            lol_status: LolStatus::new(Arc::clone(&dispatcher)),
            lor_match_v1: LorMatchV1::new(Arc::clone(&dispatcher)),
            lor_ranked_v1: LorRankedV1::new(Arc::clone(&dispatcher)),
            lor_status_v1: LorStatusV1::new(Arc::clone(&dispatcher)),
            match_v5: MatchV5::new(Arc::clone(&dispatcher)),
            summoner_v4: SummonerV4::new(Arc::clone(&dispatcher)),
            spectator_v4: SpectatorV4::new(Arc::clone(&dispatcher)),
            tft_league_v1: TftLeagueV1::new(Arc::clone(&dispatcher)),
            tft_match_v1: TftMatchV1::new(Arc::clone(&dispatcher)),
            tft_status_v1: TftStatusV1::new(Arc::clone(&dispatcher)),
            tft_summoner_v1: TftSummonerV1::new(Arc::clone(&dispatcher)),
            val_content_v1: ValContentV1::new(Arc::clone(&dispatcher)),
            val_match_v1: ValMatchV1::new(Arc::clone(&dispatcher)),
            val_ranked_v1: ValRankedV1::new(Arc::clone(&dispatcher)),
            val_status_v1: ValStatusV1::new(Arc::clone(&dispatcher)),
            dispatcher,
        }
    }

    pub fn dispatcher(&self) -> &Arc<D> {
        &self.dispatcher
    }
}
