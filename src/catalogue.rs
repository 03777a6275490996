//! Name-based access to the endpoint catalogue, used by the `riotq` CLI.
//!
//! [`CATALOGUE`] lists every resource and method with the positional
//! arguments and query options it takes. [`invoke`] resolves a
//! `resource method` pair, checks the arguments against that listing and
//! calls the matching typed method on a [`RiotApi`].

use crate::api::client::RiotApi;
use crate::api::endpoints::*;
use crate::api::params::{
    ActLeaderboardParams, ContentParams, LeaderboardParams, MatchIdsParams, PageParams,
    TftMatchIdsParams, TierDivisionParams, TopMasteryParams,
};
use crate::api::query::Dispatcher;
use crate::error::AppError;
use serde_json::Value;

#[derive(Debug)]
pub struct MethodInfo {
    pub name: &'static str,
    pub args: &'static [&'static str],
    pub options: &'static [&'static str],
}

#[derive(Debug)]
pub struct ResourceInfo {
    pub name: &'static str,
    pub prefix: &'static str,
    pub methods: &'static [MethodInfo],
}

const fn m(name: &'static str, args: &'static [&'static str]) -> MethodInfo {
    MethodInfo {
        name,
        args,
        options: &[],
    }
}

const fn mo(
    name: &'static str,
    args: &'static [&'static str],
    options: &'static [&'static str],
) -> MethodInfo {
    MethodInfo {
        name,
        args,
        options,
    }
}

pub const CATALOGUE: &[ResourceInfo] = &[
    ResourceInfo {
        name: "account-v1",
        prefix: AccountV1::<()>::PREFIX,
        methods: &[
            m("by-puuid", &["puuid"]),
            m("by-riot-id", &["game_name", "tag_line"]),
            m("by-game", &["game", "puuid"]),
        ],
    },
    ResourceInfo {
        name: "champion-mastery-v4",
        prefix: ChampionMasteryV4::<()>::PREFIX,
        methods: &[
            m("by-summoner-id", &["summoner_id"]),
            m("by-summoner-by-champion", &["summoner_id", "champion_id"]),
            mo("by-summoner-top", &["summoner_id"], &["count"]),
            m("scores-by-summoner", &["summoner_id"]),
        ],
    },
    ResourceInfo {
        name: "champion-v3",
        prefix: ChampionV3::<()>::PREFIX,
        methods: &[m("rotations", &[])],
    },
    ResourceInfo {
        name: "clash-v1",
        prefix: ClashV1::<()>::PREFIX,
        methods: &[
            m("by-summoner-id", &["summoner_id"]),
            m("by-team", &["team_id"]),
            m("tournament-by-team", &["team_id"]),
            m("by-tournament", &["tournament_id"]),
            m("tournaments", &[]),
        ],
    },
    ResourceInfo {
        name: "league-exp-v4",
        prefix: LeagueExpV4::<()>::PREFIX,
        methods: &[mo("entries", &["queue", "tier", "division"], &["page"])],
    },
    ResourceInfo {
        name: "league-v4",
        prefix: LeagueV4::<()>::PREFIX,
        methods: &[
            m("challenger", &["queue"]),
            m("grandmaster", &["queue"]),
            m("master", &["queue"]),
            m("by-summoner-id", &["summoner_id"]),
            m("by-puuid", &["puuid"]),
            m("by-league-id", &["league_id"]),
            mo("specific-league", &["queue", "tier", "division"], &["page"]),
        ],
    },
    ResourceInfo {
        name: "lol-challenges-v1",
        prefix: LolChallengesV1::<()>::PREFIX,
        methods: &[
            m("config", &[]),
            m("percentiles", &[]),
            m("challenge-config", &["challenge_id"]),
            mo("challenge-leaderboard", &["challenge_id", "level"], &["limit"]),
            m("challenge-percentiles", &["challenge_id"]),
            m("by-puuid", &["puuid"]),
        ],
    },
    ResourceInfo {
        name: "lol-status",
        prefix: LolStatus::<()>::PREFIX,
        methods: &[m("v3", &[]), m("v4", &[])],
    },
    ResourceInfo {
        name: "lor-match-v1",
        prefix: LorMatchV1::<()>::PREFIX,
        methods: &[m("by-puuid", &["puuid"]), m("by-match", &["match_id"])],
    },
    ResourceInfo {
        name: "lor-ranked-v1",
        prefix: LorRankedV1::<()>::PREFIX,
        methods: &[m("leaderboards", &[])],
    },
    ResourceInfo {
        name: "lor-status-v1",
        prefix: LorStatusV1::<()>::PREFIX,
        methods: &[m("v1", &[])],
    },
    ResourceInfo {
        name: "match-v5",
        prefix: MatchV5::<()>::PREFIX,
        methods: &[
            m("by-match-id", &["match_id"]),
            m("timeline", &["match_id"]),
            mo(
                "by-puuid",
                &["puuid"],
                &["startTime", "endTime", "queue", "type", "start", "count"],
            ),
        ],
    },
    ResourceInfo {
        name: "summoner-v4",
        prefix: SummonerV4::<()>::PREFIX,
        methods: &[
            m("by-rso-puuid", &["rso_puuid"]),
            m("by-account-id", &["account_id"]),
            m("by-name", &["name"]),
            m("by-puuid", &["puuid"]),
            m("by-summoner-id", &["summoner_id"]),
        ],
    },
    ResourceInfo {
        name: "spectator-v4",
        prefix: SpectatorV4::<()>::PREFIX,
        methods: &[
            m("by-summoner-id", &["summoner_id"]),
            m("featured-games", &[]),
        ],
    },
    ResourceInfo {
        name: "tft-league-v1",
        prefix: TftLeagueV1::<()>::PREFIX,
        methods: &[
            m("challenger", &[]),
            m("grandmaster", &[]),
            m("master", &[]),
            m("by-summoner-id", &["summoner_id"]),
            m("by-league-id", &["league_id"]),
            m("queue-top", &["queue"]),
            mo("by-tier-division", &["tier", "division"], &["page"]),
        ],
    },
    ResourceInfo {
        name: "tft-match-v1",
        prefix: TftMatchV1::<()>::PREFIX,
        methods: &[
            mo(
                "by-puuid",
                &["puuid"],
                &["start", "endTime", "startTime", "count"],
            ),
            m("by-match", &["match_id"]),
        ],
    },
    ResourceInfo {
        name: "tft-status-v1",
        prefix: TftStatusV1::<()>::PREFIX,
        methods: &[m("v1", &[])],
    },
    ResourceInfo {
        name: "tft-summoner-v1",
        prefix: TftSummonerV1::<()>::PREFIX,
        methods: &[
            m("by-account", &["account_id"]),
            m("by-name", &["summoner_name"]),
            m("by-puuid", &["puuid"]),
            m("by-summoner-id", &["summoner_id"]),
        ],
    },
    ResourceInfo {
        name: "val-content-v1",
        prefix: ValContentV1::<()>::PREFIX,
        methods: &[mo("content", &[], &["locale"])],
    },
    ResourceInfo {
        name: "val-match-v1",
        prefix: ValMatchV1::<()>::PREFIX,
        methods: &[
            m("by-match", &["match_id"]),
            m("by-puuid", &["puuid"]),
            m("by-queue", &["queue"]),
        ],
    },
    ResourceInfo {
        name: "val-ranked-v1",
        prefix: ValRankedV1::<()>::PREFIX,
        methods: &[mo("by-act", &["act_id"], &["size", "startIndex"])],
    },
    ResourceInfo {
        name: "val-status-v1",
        prefix: ValStatusV1::<()>::PREFIX,
        methods: &[m("platform-data", &[])],
    },
];

pub fn find(
    resource: &str,
    method: &str,
) -> Result<(&'static ResourceInfo, &'static MethodInfo), AppError> {
    let info = CATALOGUE
        .iter()
        .find(|r| r.name == resource)
        .ok_or_else(|| AppError::UnknownEndpoint(resource.to_string()))?;
    let method_info = info
        .methods
        .iter()
        .find(|m| m.name == method)
        .ok_or_else(|| AppError::UnknownMethod {
            endpoint: resource.to_string(),
            method: method.to_string(),
        })?;
    Ok((info, method_info))
}

/// Splits a `key=value` CLI option.
pub fn parse_option(raw: &str) -> Result<(String, String), AppError> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(AppError::MalformedOption(raw.to_string())),
    }
}

struct Options<'a>(&'a [(String, String)]);

impl Options<'_> {
    fn string(&self, key: &str) -> Option<String> {
        self.0
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    fn number<T: std::str::FromStr>(&self, key: &str) -> Result<Option<T>, AppError> {
        self.string(key)
            .map(|value| {
                value.parse::<T>().map_err(|_| AppError::InvalidNumber {
                    key: key.to_string(),
                    value,
                })
            })
            .transpose()
    }
}

/// Calls `resource method` on `api`. The outer result reports resolution
/// problems, the inner one is the dispatcher's own.
pub fn invoke<D: Dispatcher>(
    api: &RiotApi<D>,
    resource: &str,
    method: &str,
    routing: &str,
    args: &[String],
    options: &[(String, String)],
) -> Result<Result<Value, D::Error>, AppError> {
    let (info, method_info) = find(resource, method)?;

    if args.len() != method_info.args.len() {
        return Err(AppError::WrongArgCount {
            method: format!("{} {}", info.name, method_info.name),
            expected: method_info.args.len(),
            got: args.len(),
        });
    }
    if let Some((key, _)) = options
        .iter()
        .find(|(key, _)| !method_info.options.contains(&key.as_str()))
    {
        return Err(AppError::UnknownOption {
            method: format!("{} {}", info.name, method_info.name),
            key: key.clone(),
        });
    }

    let path: Vec<&str> = args.iter().map(String::as_str).collect();
    let query = Options(options);

    let result = match (info.name, method_info.name) {
        ("account-v1", "by-puuid") => api.account_v1.by_puuid(routing, path[0]),
        ("account-v1", "by-riot-id") => api.account_v1.by_riot_id(routing, path[0], path[1]),
        ("account-v1", "by-game") => api.account_v1.by_game(routing, path[0], path[1]),

        ("champion-mastery-v4", "by-summoner-id") => {
            api.champion_mastery_v4.by_summoner_id(routing, path[0])
        }
        ("champion-mastery-v4", "by-summoner-by-champion") => api
            .champion_mastery_v4
            .by_summoner_by_champion(routing, path[0], path[1]),
        ("champion-mastery-v4", "by-summoner-top") => {
            let params = TopMasteryParams {
                count: query.number("count")?,
            };
            api.champion_mastery_v4.by_summoner_top(routing, path[0], &params)
        }
        ("champion-mastery-v4", "scores-by-summoner") => {
            api.champion_mastery_v4.scores_by_summoner(routing, path[0])
        }

        ("champion-v3", "rotations") => api.champion_v3.rotations(routing),

        ("clash-v1", "by-summoner-id") => api.clash_v1.by_summoner_id(routing, path[0]),
        ("clash-v1", "by-team") => api.clash_v1.by_team(routing, path[0]),
        ("clash-v1", "tournament-by-team") => api.clash_v1.tournament_by_team(routing, path[0]),
        ("clash-v1", "by-tournament") => api.clash_v1.by_tournament(routing, path[0]),
        ("clash-v1", "tournaments") => api.clash_v1.tournaments(routing),

        ("league-exp-v4", "entries") => {
            let params = PageParams {
                page: query.number("page")?,
            };
            api.league_exp_v4.entries(routing, path[0], path[1], path[2], &params)
        }

        ("league-v4", "challenger") => api.league_v4.challenger(routing, path[0]),
        ("league-v4", "grandmaster") => api.league_v4.grandmaster(routing, path[0]),
        ("league-v4", "master") => api.league_v4.master(routing, path[0]),
        ("league-v4", "by-summoner-id") => api.league_v4.by_summoner_id(routing, path[0]),
        ("league-v4", "by-puuid") => api.league_v4.by_puuid(routing, path[0]),
        ("league-v4", "by-league-id") => api.league_v4.by_league_id(routing, path[0]),
        ("league-v4", "specific-league") => {
            let params = PageParams {
                page: query.number("page")?,
            };
            api.league_v4.specific_league(routing, path[0], path[1], path[2], &params)
        }

        ("lol-challenges-v1", "config") => api.lol_challenges_v1.config(routing),
        ("lol-challenges-v1", "percentiles") => api.lol_challenges_v1.percentiles(routing),
        ("lol-challenges-v1", "challenge-config") => {
            api.lol_challenges_v1.challenge_config(routing, path[0])
        }
        ("lol-challenges-v1", "challenge-leaderboard") => {
            let params = LeaderboardParams {
                limit: query.number("limit")?,
            };
            api.lol_challenges_v1
                .challenge_leaderboard(routing, path[0], path[1], &params)
        }
        ("lol-challenges-v1", "challenge-percentiles") => {
            api.lol_challenges_v1.challenge_percentiles(routing, path[0])
        }
        ("lol-challenges-v1", "by-puuid") => api.lol_challenges_v1.by_puuid(routing, path[0]),

        ("lol-status", "v3") => api.lol_status.v3(routing),
        ("lol-status", "v4") => api.lol_status.v4(routing),

        ("lor-match-v1", "by-puuid") => api.lor_match_v1.by_puuid(routing, path[0]),
        ("lor-match-v1", "by-match") => api.lor_match_v1.by_match(routing, path[0]),
        ("lor-ranked-v1", "leaderboards") => api.lor_ranked_v1.leaderboards(routing),
        ("lor-status-v1", "v1") => api.lor_status_v1.v1(routing),

        ("match-v5", "by-match-id") => api.match_v5.by_match_id(routing, path[0]),
        ("match-v5", "timeline") => api.match_v5.timeline(routing, path[0]),
        ("match-v5", "by-puuid") => {
            let params = MatchIdsParams {
                start_time: query.number("startTime")?,
                end_time: query.number("endTime")?,
                queue: query.number("queue")?,
                match_type: query.string("type"),
                start: query.number("start")?,
                count: query.number("count")?,
            };
            api.match_v5.by_puuid(routing, path[0], &params)
        }

        ("summoner-v4", "by-rso-puuid") => api.summoner_v4.by_rso_puuid(routing, path[0]),
        ("summoner-v4", "by-account-id") => api.summoner_v4.by_account_id(routing, path[0]),
        ("summoner-v4", "by-name") => api.summoner_v4.by_name(routing, path[0]),
        ("summoner-v4", "by-puuid") => api.summoner_v4.by_puuid(routing, path[0]),
        ("summoner-v4", "by-summoner-id") => api.summoner_v4.by_summoner_id(routing, path[0]),

        ("spectator-v4", "by-summoner-id") => api.spectator_v4.by_summoner_id(routing, path[0]),
        ("spectator-v4", "featured-games") => api.spectator_v4.featured_games(routing),

        ("tft-league-v1", "challenger") => api.tft_league_v1.challenger(routing),
        ("tft-league-v1", "grandmaster") => api.tft_league_v1.grandmaster(routing),
        ("tft-league-v1", "master") => api.tft_league_v1.master(routing),
        ("tft-league-v1", "by-summoner-id") => api.tft_league_v1.by_summoner_id(routing, path[0]),
        ("tft-league-v1", "by-league-id") => api.tft_league_v1.by_league_id(routing, path[0]),
        ("tft-league-v1", "queue-top") => api.tft_league_v1.queue_top(routing, path[0]),
        ("tft-league-v1", "by-tier-division") => {
            let params = TierDivisionParams {
                page: query.number("page")?,
            };
            api.tft_league_v1.by_tier_division(routing, path[0], path[1], &params)
        }

        ("tft-match-v1", "by-puuid") => {
            let params = TftMatchIdsParams {
                start: query.number("start")?,
                end_time: query.number("endTime")?,
                start_time: query.number("startTime")?,
                count: query.number("count")?,
            };
            api.tft_match_v1.by_puuid(routing, path[0], &params)
        }
        ("tft-match-v1", "by-match") => api.tft_match_v1.by_match(routing, path[0]),
        ("tft-status-v1", "v1") => api.tft_status_v1.v1(routing),

        ("tft-summoner-v1", "by-account") => api.tft_summoner_v1.by_account(routing, path[0]),
        ("tft-summoner-v1", "by-name") => api.tft_summoner_v1.by_name(routing, path[0]),
        ("tft-summoner-v1", "by-puuid") => api.tft_summoner_v1.by_puuid(routing, path[0]),
        ("tft-summoner-v1", "by-summoner-id") => {
            api.tft_summoner_v1.by_summoner_id(routing, path[0])
        }

        ("val-content-v1", "content") => {
            let params = ContentParams {
                locale: query.string("locale"),
            };
            api.val_content_v1.content(routing, &params)
        }
        ("val-match-v1", "by-match") => api.val_match_v1.by_match(routing, path[0]),
        ("val-match-v1", "by-puuid") => api.val_match_v1.by_puuid(routing, path[0]),
        ("val-match-v1", "by-queue") => api.val_match_v1.by_queue(routing, path[0]),
        ("val-ranked-v1", "by-act") => {
            let params = ActLeaderboardParams {
                size: query.number("size")?,
                start_index: query.number("startIndex")?,
            };
            api.val_ranked_v1.by_act(routing, path[0], &params)
        }
        ("val-status-v1", "platform-data") => api.val_status_v1.platform_data(routing),

        _ => {
            return Err(AppError::UnknownMethod {
                endpoint: info.name.to_string(),
                method: method_info.name.to_string(),
            })
        }
    };

    Ok(result)
}
