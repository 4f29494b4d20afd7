pub mod model;
pub mod assembly;
pub mod placement;
pub mod balance;

use self::model::Match;
use self::placement::Placement;
use self::balance::BalanceReport;

use provider::RosterProvider;

use team_builder_common::api::roster::{GameConfig, PlayerRecord};
use team_builder_common::api::team_builder::{MatchSummary, MemberSummary, TeamSummary};
use team_builder_common::errors::*;
use team_builder_common::pubsub::MatchRequest;

use chrono::Utc;

use rand::Rng;

/// A finished match together with how it got there.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltMatch
{
    pub game_match: Match,
    pub placements: Vec<Placement>,
    pub balance: BalanceReport,
}

impl BuiltMatch
{
    pub fn summarize(&self) -> MatchSummary
    {
        let teams = self.game_match.teams().iter()
            .map(|team| {
                let members = team.members().iter()
                    .map(|member| MemberSummary::new(
                        member.name().to_string(),
                        member.tag().to_string(),
                        member.selected_role().role_name().to_string(),
                        member.selected_rating(),
                        member.selected_role_index() == member.primary_role_index()))
                    .collect();

                TeamSummary::new(team.label().to_string(), team.total_rating(), members)
            })
            .collect();

        MatchSummary::new(
            self.game_match.game().game_id.clone(),
            teams,
            self.game_match.balance_spread(),
            self.balance.is_balanced(),
            Utc::now())
    }
}

/// Fetches the requested players and splits them into balanced teams.
///
/// The fetch is the only thing that waits on anything; it finishes before the match is touched.
pub fn build_match<P, R>(provider: &P, request: &MatchRequest, default_threshold: f64, rng: &mut R) -> Result<BuiltMatch>
    where P: RosterProvider + ?Sized, R: Rng + ?Sized
{
    info!("===========Initializing Team Builder===========");

    let records = provider.fetch_roster(&request.players, &request.game.game_id)?;

    build_match_from_records(&records, request.game.clone(), default_threshold, rng)
}

/// Assembly, initial placement and balancing for records already in memory.
///
/// The game's own balance threshold wins over `default_threshold`.
pub fn build_match_from_records<R>(records: &[PlayerRecord], game: GameConfig, default_threshold: f64, rng: &mut R) -> Result<BuiltMatch>
    where R: Rng + ?Sized
{
    let members = assembly::construct_team_members(records, &game.game_id)?;

    let capacity = game.total_capacity()
        .ok_or_else(|| Error::from(ErrorKind::TeamCapacityOverflow(game.max_team_count, game.max_team_size)))?;

    if members.len() > capacity
    {
        bail!(ErrorKind::RosterExceedsCapacity(members.len(), capacity));
    }

    /* Bounds how many teams Match::new allocates */
    if game.max_team_count > members.len()
    {
        bail!(ErrorKind::TooManyTeams(game.max_team_count, members.len()));
    }

    let threshold = game.balance_threshold.unwrap_or(default_threshold);
    if !threshold.is_finite() || threshold < 0.0
    {
        bail!(ErrorKind::InvalidBalanceThreshold(threshold));
    }

    info!("Constructing Base Match Object with {} teams of {}", game.max_team_count, game.max_team_size);
    let mut game_match = Match::new(game);

    let placements = placement::execute_initial_placings(members, &mut game_match, rng)?;
    let balance = balance::execute_team_balance(&mut game_match, threshold, rng);

    info!("===========Match Successfully Generated===========");

    Ok(
        BuiltMatch {
            game_match,
            placements,
            balance,
        }
    )
}
