//! The endpoint catalogue: one type per versioned Riot API resource.

// Must stay above the `mod` declarations so the submodules see it.
/// Declares a resource type wrapping a single [`Endpoint`](super::endpoint::Endpoint)
/// with a fixed prefix.
macro_rules! resource {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        pub struct $name<D> {
            endpoint: $crate::api::endpoint::Endpoint<D>,
        }

        impl<D> $name<D> {
            pub const PREFIX: &'static str = $prefix;

            pub fn new(dispatcher: ::std::sync::Arc<D>) -> Self {
                $name {
                    endpoint: $crate::api::endpoint::Endpoint::new(Self::PREFIX, dispatcher),
                }
            }

            pub fn endpoint(&self) -> &$crate::api::endpoint::Endpoint<D> {
                &self.endpoint
            }
        }

        impl<D> Clone for $name<D> {
            fn clone(&self) -> Self {
                $name {
                    endpoint: self.endpoint.clone(),
                }
            }
        }

        impl<D> ::std::fmt::Debug for $name<D> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("prefix", &Self::PREFIX)
                    .finish()
            }
        }
    };
}

mod lol;
mod lor;
mod riot;
mod tft;
mod val;

pub use lol::{
    ChampionMasteryV4, ChampionV3, ClashV1, LeagueExpV4, LeagueV4, LolChallengesV1, LolStatus,
    MatchV5, SpectatorV4, SummonerV4,
};
pub use lor::{LorMatchV1, LorRankedV1, LorStatusV1};
pub use riot::AccountV1;
pub use tft::{TftLeagueV1, TftMatchV1, TftStatusV1, TftSummonerV1};
pub use val::{ValContentV1, ValMatchV1, ValRankedV1, ValStatusV1};
