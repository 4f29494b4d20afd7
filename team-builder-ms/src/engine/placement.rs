use engine::model::{Match, TeamMember};

use team_builder_common::errors::*;

use rand::Rng;

/// Where one member ended up during the initial placement, and how strong that team was right before.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement
{
    pub member_name: String,
    pub team_index: usize,
    pub team_rating_before: f64,
}

/// Picks the unplaced members in a random order and drops each one into the currently weakest team that still
/// has room.
///
/// Consumes every member. Returns the placements in the order they happened.
pub fn execute_initial_placings<R>(mut unplaced: Vec<TeamMember>, game_match: &mut Match, rng: &mut R) -> Result<Vec<Placement>>
    where R: Rng + ?Sized
{
    info!("Starting Initial Placements for {} players", unplaced.len());

    let mut placements = Vec::with_capacity(unplaced.len());

    while !unplaced.is_empty()
    {
        let member_index = rng.gen_range(0..unplaced.len());

        let team_index = match game_match.weakest_team_index(true)
        {
            Some(team_index) => team_index,
            None => bail!(ErrorKind::NoTeamWithCapacity(unplaced[member_index].name().to_string())),
        };

        let member = unplaced.remove(member_index);
        let team = &game_match.teams()[team_index];

        debug!("Adding {} to Team {} ({} -> {})", member.name(), team.label(), team.total_rating(), team.total_rating() + member.selected_rating());

        placements.push(Placement {
            member_name: member.name().to_string(),
            team_index,
            team_rating_before: team.total_rating(),
        });

        game_match.add_team_member(member, team_index);
    }

    Ok(placements)
}
