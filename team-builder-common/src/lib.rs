// `error_chain!` can recurse deeply
#![recursion_limit = "1024"]

#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate serde_derive;

#[macro_use]
extern crate derive_new;

#[macro_use]
extern crate log;

extern crate reqwest;

extern crate byteorder;
extern crate chrono;
extern crate serde;
extern crate serde_json;
extern crate rmp_serde;

extern crate kafka;

pub mod pubsub;
pub mod api;
pub mod config;

/*
    Common error_chain for all of lib to use so the ? operator passes things around real well.

    Add `use ::errors::*;` to the sub-modules to gain access to it.

    Technically you don't want to do this because it hides the reason for an error and you'll want to use a lot of `links` instead of `foreign_links` but this is way easier.
*/
pub mod errors {
    // Create the Error, ErrorKind, ResultExt, and Result types
     error_chain!{
        errors {
            EmptyRoster(game_id: String) {
                description("no players were found on the server")
                display("No players were found on the server for game: {}", game_id)
            }
            MissingRoleRatings(player: String) {
                description("player has no role ratings")
                display("Player: {} has no role ratings", player)
            }
            RosterExceedsCapacity(players: usize, capacity: usize) {
                description("more players than team slots")
                display("{} players do not fit into {} team slots", players, capacity)
            }
            TeamCapacityOverflow(team_count: usize, team_size: usize) {
                description("team slots overflow")
                display("{} teams of {} players is more team slots than can be counted", team_count, team_size)
            }
            TooManyTeams(team_count: usize, players: usize) {
                description("more teams than players")
                display("{} teams can not be filled by {} players", team_count, players)
            }
            InvalidBalanceThreshold(threshold: f64) {
                description("balance threshold is not a finite, non negative number")
                display("Balance threshold must be a finite, non negative number: {}", threshold)
            }
            NoTeamWithCapacity(player: String) {
                description("no team has a free slot")
                display("No team has a free slot for player: {}", player)
            }
            ProviderStatus(status: u16) {
                description("roster provider returned a bad status")
                display("Bad roster provider status: {}", status)
            }
        }

        foreign_links {
            Io(::std::io::Error);
            Kafka(::kafka::error::Error);
            ToRmp(::rmp_serde::encode::Error);
            FromRmp(::rmp_serde::decode::Error);
            Json(::serde_json::Error);
            ParseInt(::std::num::ParseIntError);
            ParseFloat(::std::num::ParseFloatError);
            /* NoneError doesn't like to be implemented. Just use `.ok_or("Nothing")?` instead of only `?` */
            Reqwest(::reqwest::Error);
        }
    }
}
