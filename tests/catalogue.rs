use riot_endpoints::{
    ActLeaderboardParams, ContentParams, LeaderboardParams, MatchIdsParams, PageParams, Query,
    RiotApi, TftMatchIdsParams, TierDivisionParams, TopMasteryParams,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

type Recorded = Arc<Mutex<Vec<Query>>>;

/// Api whose dispatcher records each query and answers with its URL.
fn recording_api() -> (
    RiotApi<impl Fn(&mut Query) -> Result<Value, String>>,
    Recorded,
) {
    let seen: Recorded = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let api = RiotApi::new(move |query: &mut Query| -> Result<Value, String> {
        sink.lock().unwrap().push(query.clone());
        Ok(json!(query.url))
    });
    (api, seen)
}

fn url(result: Result<Value, String>) -> String {
    result.unwrap().as_str().unwrap().to_string()
}

#[test]
fn specific_league_sends_default_page() {
    let (api, seen) = recording_api();
    let out = api
        .league_v4
        .specific_league("na1", "RANKED_SOLO_5x5", "GOLD", "III", &PageParams::default());

    assert_eq!(url(out), "lol/league/v4/entries/RANKED_SOLO_5x5/GOLD/III?page=1");
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].method_key, "LEAGUE-V4-specific-league");
    assert_eq!(seen[0].routing_value, "na1");
}

#[test]
fn match_ids_encode_the_puuid_and_skip_absent_filters() {
    let (api, seen) = recording_api();
    let out = api
        .match_v5
        .by_puuid("americas", "abc 123", &MatchIdsParams::default());

    assert_eq!(url(out), "lol/match/v5/matches/by-puuid/abc%20123/ids");
    assert_eq!(seen.lock().unwrap()[0].method_key, "MATCH-V5-by-puuid");
}

#[test]
fn reserved_characters_never_reach_the_path_raw() {
    let (api, _) = recording_api();
    let out = url(api.account_v1.by_riot_id("europe", "Hide on/bush?", "KR#1"));

    assert_eq!(
        out,
        "riot/account/v1/accounts/by-riot-id/Hide%20on%2Fbush%3F/KR%231"
    );
    let path = out.trim_start_matches("riot/account/v1/accounts/by-riot-id/");
    assert!(!path.contains(' '));
    assert!(!path.contains('?'));
    assert!(!path.contains('#'));
    assert_eq!(path.matches('/').count(), 1);
}

#[test]
fn identical_calls_build_identical_urls() {
    let (api, seen) = recording_api();
    let params = MatchIdsParams {
        queue: Some(420),
        count: Some(10),
        ..Default::default()
    };
    api.match_v5.by_puuid("europe", "p/1", &params).unwrap();
    api.match_v5.by_puuid("europe", "p/1", &params).unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen[0].url, seen[1].url);
    assert_eq!(seen[0].url, "lol/match/v5/matches/by-puuid/p%2F1/ids?queue=420&count=10");
}

#[test]
fn dispatcher_errors_pass_through_unchanged() {
    let api = RiotApi::new(|query: &mut Query| -> Result<Value, (u16, String)> {
        Err((429, query.url.clone()))
    });

    let err = api.summoner_v4.by_puuid("kr", "xyz").unwrap_err();
    assert_eq!(err, (429, "lol/summoner/v4/summoners/by-puuid/xyz".to_string()));
}

#[test]
fn dispatcher_sees_an_unsent_record() {
    let api = RiotApi::new(|query: &mut Query| -> Result<Value, String> {
        assert!(query.send_time.is_none());
        assert_eq!(query.last_response, 0);
        assert_eq!(query.server_errors, 0);
        assert_eq!(query.response_content, Value::Null);
        Ok(Value::Null)
    });
    api.champion_v3.rotations("na1").unwrap();
}

#[test]
fn account_endpoints() {
    let (api, _) = recording_api();
    assert_eq!(
        url(api.account_v1.by_puuid("americas", "p")),
        "riot/account/v1/accounts/by-puuid/p"
    );
    assert_eq!(
        url(api.account_v1.by_game("americas", "val", "p")),
        "riot/account/v1/active-shards/by-game/val/by-puuid/p"
    );
}

#[test]
fn champion_mastery_endpoints() {
    let (api, _) = recording_api();
    let cm = &api.champion_mastery_v4;
    assert_eq!(
        url(cm.by_summoner_id("na1", "s")),
        "lol/champion-mastery/v4/champion-masteries/by-summoner/s"
    );
    assert_eq!(
        url(cm.by_summoner_by_champion("na1", "s", "266")),
        "lol/champion-mastery/v4/champion-masteries/by-summoner/s/by-champion/266"
    );
    assert_eq!(
        url(cm.by_summoner_top("na1", "s", &TopMasteryParams::default())),
        "lol/champion-mastery/v4/champion-masteries/by-summoner/s/top?count=3"
    );
    assert_eq!(
        url(cm.by_summoner_top("na1", "s", &TopMasteryParams { count: Some(10) })),
        "lol/champion-mastery/v4/champion-masteries/by-summoner/s/top?count=10"
    );
    assert_eq!(
        url(cm.scores_by_summoner("na1", "s")),
        "lol/champion-mastery/v4/scores/by-summoner/s"
    );
}

#[test]
fn champion_and_clash_endpoints() {
    let (api, _) = recording_api();
    assert_eq!(
        url(api.champion_v3.rotations("na1")),
        "lol/platform/v3/champion-rotations"
    );
    assert_eq!(
        url(api.clash_v1.by_summoner_id("na1", "s")),
        "lol/clash/v1/players/by-summoner/s"
    );
    assert_eq!(url(api.clash_v1.by_team("na1", "t")), "lol/clash/v1/teams/t");
    assert_eq!(
        url(api.clash_v1.tournament_by_team("na1", "t")),
        "lol/clash/v1/tournaments/by-team/t"
    );
    assert_eq!(
        url(api.clash_v1.by_tournament("na1", "2001")),
        "lol/clash/v1/tournaments/2001"
    );
    assert_eq!(url(api.clash_v1.tournaments("na1")), "lol/clash/v1/tournaments");
}

#[test]
fn league_endpoints() {
    let (api, _) = recording_api();
    let league = &api.league_v4;
    assert_eq!(
        url(league.challenger("euw1", "RANKED_SOLO_5x5")),
        "lol/league/v4/challengerleagues/by-queue/RANKED_SOLO_5x5"
    );
    assert_eq!(
        url(league.grandmaster("euw1", "RANKED_FLEX_SR")),
        "lol/league/v4/grandmasterleagues/by-queue/RANKED_FLEX_SR"
    );
    assert_eq!(
        url(league.master("euw1", "RANKED_SOLO_5x5")),
        "lol/league/v4/masterleagues/by-queue/RANKED_SOLO_5x5"
    );
    assert_eq!(
        url(league.by_summoner_id("euw1", "s")),
        "lol/league/v4/entries/by-summoner/s"
    );
    assert_eq!(url(league.by_puuid("euw1", "p")), "lol/league/v4/entries/by-puuid/p");
    assert_eq!(url(league.by_league_id("euw1", "l-1")), "lol/league/v4/leagues/l-1");
    let third_page = PageParams::page(3);
    assert_eq!(
        url(league.specific_league("euw1", "RANKED_SOLO_5x5", "DIAMOND", "I", &third_page)),
        "lol/league/v4/entries/RANKED_SOLO_5x5/DIAMOND/I?page=3"
    );
    let first_page = PageParams::default();
    assert_eq!(
        url(api.league_exp_v4.entries("euw1", "RANKED_SOLO_5x5", "MASTER", "I", &first_page)),
        "lol/league-exp/v4/entries/RANKED_SOLO_5x5/MASTER/I?page=1"
    );
}

#[test]
fn challenges_endpoints() {
    let (api, _) = recording_api();
    let ch = &api.lol_challenges_v1;
    assert_eq!(url(ch.config("na1")), "lol/challenges/v1/challenges/config");
    assert_eq!(url(ch.percentiles("na1")), "lol/challenges/v1/challenges/percentiles");
    assert_eq!(
        url(ch.challenge_config("na1", "101101")),
        "lol/challenges/v1/challenges/101101/config"
    );
    assert_eq!(
        url(ch.challenge_leaderboard("na1", "101101", "MASTER", &LeaderboardParams::default())),
        "lol/challenges/v1/challenges/101101/leaderboards/by-level/MASTER"
    );
    let top_five = LeaderboardParams { limit: Some(5) };
    assert_eq!(
        url(ch.challenge_leaderboard("na1", "101101", "MASTER", &top_five)),
        "lol/challenges/v1/challenges/101101/leaderboards/by-level/MASTER?limit=5"
    );
    assert_eq!(
        url(ch.challenge_percentiles("na1", "101101")),
        "lol/challenges/v1/challenges/101101/percentiles"
    );
    assert_eq!(url(ch.by_puuid("na1", "p")), "lol/challenges/v1/player-data/p");
}

#[test]
fn status_and_spectator_endpoints() {
    let (api, _) = recording_api();
    assert_eq!(url(api.lol_status.v3("na1")), "lol/status/v3/shard-data");
    assert_eq!(url(api.lol_status.v4("na1")), "lol/status/v4/platform-data");
    assert_eq!(url(api.lor_status_v1.v1("americas")), "lor/status/v1/platform-data");
    assert_eq!(url(api.tft_status_v1.v1("na1")), "tft/status/v1/platform-data");
    assert_eq!(url(api.val_status_v1.platform_data("eu")), "val/status/v1/platform-data");
    assert_eq!(
        url(api.spectator_v4.by_summoner_id("na1", "s")),
        "lol/spectator/v4/active-games/by-summoner/s"
    );
    assert_eq!(
        url(api.spectator_v4.featured_games("na1")),
        "lol/spectator/v4/featured-games"
    );
}

#[test]
fn match_and_summoner_endpoints() {
    let (api, _) = recording_api();
    assert_eq!(
        url(api.match_v5.by_match_id("europe", "EUW1_123")),
        "lol/match/v5/matches/EUW1_123"
    );
    assert_eq!(
        url(api.match_v5.timeline("europe", "EUW1_123")),
        "lol/match/v5/matches/EUW1_123/timeline"
    );

    let s = &api.summoner_v4;
    assert_eq!(
        url(s.by_rso_puuid("na1", "r")),
        "fulfillment/v1/summoners/by-puuid/r"
    );
    assert_eq!(url(s.by_account_id("na1", "a")), "lol/summoner/v4/summoners/by-account/a");
    assert_eq!(
        url(s.by_name("na1", "Doublelift Jr")),
        "lol/summoner/v4/summoners/by-name/Doublelift%20Jr"
    );
    assert_eq!(url(s.by_puuid("na1", "p")), "lol/summoner/v4/summoners/by-puuid/p");
    assert_eq!(url(s.by_summoner_id("na1", "s")), "lol/summoner/v4/summoners/s");
}

#[test]
fn lor_endpoints() {
    let (api, _) = recording_api();
    assert_eq!(
        url(api.lor_match_v1.by_puuid("americas", "p")),
        "lor/match/v1/matches/by-puuid/p/ids"
    );
    assert_eq!(url(api.lor_match_v1.by_match("americas", "m")), "lor/match/v1/matches/m");
    assert_eq!(
        url(api.lor_ranked_v1.leaderboards("americas")),
        "lor/ranked/v1/leaderboards"
    );
}

#[test]
fn tft_endpoints() {
    let (api, _) = recording_api();
    let league = &api.tft_league_v1;
    assert_eq!(url(league.challenger("na1")), "tft/league/v1/challenger");
    assert_eq!(url(league.grandmaster("na1")), "tft/league/v1/grandmaster");
    assert_eq!(url(league.master("na1")), "tft/league/v1/master");
    assert_eq!(
        url(league.by_summoner_id("na1", "s")),
        "tft/league/v1/entries/by-summoner/s"
    );
    assert_eq!(url(league.by_league_id("na1", "l")), "tft/league/v1/leagues/l");
    assert_eq!(
        url(league.queue_top("na1", "RANKED_TFT_TURBO")),
        "tft/league/v1/rated-ladders/RANKED_TFT_TURBO/top"
    );
    assert_eq!(
        url(league.by_tier_division("na1", "GOLD", "II", &TierDivisionParams::default())),
        "tft/league/v1/entries/GOLD/II"
    );
    assert_eq!(
        url(league.by_tier_division("na1", "GOLD", "II", &TierDivisionParams { page: Some(4) })),
        "tft/league/v1/entries/GOLD/II?page=4"
    );

    assert_eq!(
        url(api.tft_match_v1.by_puuid("americas", "p", &TftMatchIdsParams::default())),
        "tft/match/v1/matches/by-puuid/p/ids"
    );
    let filtered = TftMatchIdsParams {
        start: Some(0),
        count: Some(50),
        ..Default::default()
    };
    assert_eq!(
        url(api.tft_match_v1.by_puuid("americas", "p", &filtered)),
        "tft/match/v1/matches/by-puuid/p/ids?start=0&count=50"
    );
    assert_eq!(
        url(api.tft_match_v1.by_match("americas", "NA1_9")),
        "tft/match/v1/matches/NA1_9"
    );

    let s = &api.tft_summoner_v1;
    assert_eq!(url(s.by_account("na1", "a")), "tft/summoner/v1/summoners/by-account/a");
    assert_eq!(url(s.by_name("na1", "n")), "tft/summoner/v1/summoners/by-name/n");
    assert_eq!(url(s.by_puuid("na1", "p")), "tft/summoner/v1/summoners/by-puuid/p");
    assert_eq!(url(s.by_summoner_id("na1", "s")), "tft/summoner/v1/summoners/s");
}

#[test]
fn val_endpoints() {
    let (api, _) = recording_api();
    assert_eq!(
        url(api.val_content_v1.content("eu", &ContentParams::default())),
        "val/content/v1/contents"
    );
    assert_eq!(
        url(api.val_content_v1.content(
            "eu",
            &ContentParams {
                locale: Some("en-US".to_string())
            }
        )),
        "val/content/v1/contents?locale=en-US"
    );
    assert_eq!(url(api.val_match_v1.by_match("eu", "m")), "val/match/v1/matches/m");
    assert_eq!(
        url(api.val_match_v1.by_puuid("eu", "p")),
        "val/match/v1/matchlists/by-puuid/p"
    );
    assert_eq!(
        url(api.val_match_v1.by_queue("eu", "competitive")),
        "val/match/v1/recent-matches/by-queue/competitive"
    );
    assert_eq!(
        url(api.val_ranked_v1.by_act("eu", "act-1", &ActLeaderboardParams::default())),
        "val/ranked/v1/leaderboards/by-act/act-1?size=200&startIndex=0"
    );
}

#[test]
fn api_can_be_shared_between_threads() {
    let (api, seen) = recording_api();
    let api = Arc::new(api);

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let api = Arc::clone(&api);
            std::thread::spawn(move || {
                api.lol_status.v4(&format!("region{i}")).unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(seen.lock().unwrap().len(), 4);
}
