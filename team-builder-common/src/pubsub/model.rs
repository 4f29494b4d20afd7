use api::roster::GameConfig;
use api::team_builder::MatchSummary;

use std::collections::VecDeque;

/// Envelope for everything sent between services.
///
/// `destinations` is a route: whoever handles the message pops the first topic and replies there with the rest
/// of the route attached.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, new)]
pub struct Message<T>
{
    pub data: T,
    pub destinations: VecDeque<String>,
    pub debug: bool,
}

/// A chat command asking for `players` to be split into teams for `game`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, new)]
pub struct MatchRequest
{
    pub players: Vec<String>,
    pub game: GameConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum MatchResponse
{
    Built(MatchSummary),
    Failed(String),
}
