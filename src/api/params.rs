//! Query-string parameters, one struct per method that accepts any.
//!
//! Fields left as `None` are omitted from the URL unless the API documents a
//! default for them, in which case the default is sent.

pub type QueryPairs = Vec<(&'static str, String)>;

pub trait OptionalParams {
    fn to_pairs(&self) -> QueryPairs;
}

fn push<T: ToString>(pairs: &mut QueryPairs, name: &'static str, value: &Option<T>) {
    if let Some(value) = value {
        pairs.push((name, value.to_string()));
    }
}

/// `page` for paginated league entry listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageParams {
    pub page: Option<u32>,
}

impl PageParams {
    pub const DEFAULT_PAGE: u32 = 1;

    pub fn page(page: u32) -> Self {
        PageParams { page: Some(page) }
    }
}

impl OptionalParams for PageParams {
    fn to_pairs(&self) -> QueryPairs {
        vec![("page", self.page.unwrap_or(Self::DEFAULT_PAGE).to_string())]
    }
}

/// `page` for TFT tier/division listings, sent only when set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierDivisionParams {
    pub page: Option<u32>,
}

impl OptionalParams for TierDivisionParams {
    fn to_pairs(&self) -> QueryPairs {
        let mut pairs = Vec::new();
        push(&mut pairs, "page", &self.page);
        pairs
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TopMasteryParams {
    pub count: Option<u32>,
}

impl TopMasteryParams {
    pub const DEFAULT_COUNT: u32 = 3;
}

impl OptionalParams for TopMasteryParams {
    fn to_pairs(&self) -> QueryPairs {
        vec![("count", self.count.unwrap_or(Self::DEFAULT_COUNT).to_string())]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeaderboardParams {
    pub limit: Option<u32>,
}

impl OptionalParams for LeaderboardParams {
    fn to_pairs(&self) -> QueryPairs {
        let mut pairs = Vec::new();
        push(&mut pairs, "limit", &self.limit);
        pairs
    }
}

/// Filters for `lol/match/v5` match id listings. Times are epoch seconds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchIdsParams {
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub queue: Option<u32>,
    pub match_type: Option<String>,
    pub start: Option<u32>,
    pub count: Option<u32>,
}

impl OptionalParams for MatchIdsParams {
    fn to_pairs(&self) -> QueryPairs {
        let mut pairs = Vec::new();
        push(&mut pairs, "startTime", &self.start_time);
        push(&mut pairs, "endTime", &self.end_time);
        push(&mut pairs, "queue", &self.queue);
        push(&mut pairs, "type", &self.match_type);
        push(&mut pairs, "start", &self.start);
        push(&mut pairs, "count", &self.count);
        pairs
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TftMatchIdsParams {
    pub start: Option<u32>,
    pub end_time: Option<i64>,
    pub start_time: Option<i64>,
    pub count: Option<u32>,
}

impl OptionalParams for TftMatchIdsParams {
    fn to_pairs(&self) -> QueryPairs {
        let mut pairs = Vec::new();
        push(&mut pairs, "start", &self.start);
        push(&mut pairs, "endTime", &self.end_time);
        push(&mut pairs, "startTime", &self.start_time);
        push(&mut pairs, "count", &self.count);
        pairs
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentParams {
    pub locale: Option<String>,
}

impl OptionalParams for ContentParams {
    fn to_pairs(&self) -> QueryPairs {
        let mut pairs = Vec::new();
        push(&mut pairs, "locale", &self.locale);
        pairs
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActLeaderboardParams {
    pub size: Option<u32>,
    pub start_index: Option<u32>,
}

impl ActLeaderboardParams {
    pub const DEFAULT_SIZE: u32 = 200;
    /// The API's documented default; older clients sent 200 here, which skips
    /// the top of the leaderboard.
    pub const DEFAULT_START_INDEX: u32 = 0;
}

impl OptionalParams for ActLeaderboardParams {
    fn to_pairs(&self) -> QueryPairs {
        vec![
            ("size", self.size.unwrap_or(Self::DEFAULT_SIZE).to_string()),
            (
                "startIndex",
                self.start_index
                    .unwrap_or(Self::DEFAULT_START_INDEX)
                    .to_string(),
            ),
        ]
    }
}
