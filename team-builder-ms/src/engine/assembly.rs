use engine::model::{RoleRating, TeamMember};

use team_builder_common::api::roster::PlayerRecord;
use team_builder_common::errors::*;

use std::cmp::Ordering;

/// Turns the records from the roster service into unplaced team members, one per record.
///
/// Role ratings are sorted highest first on the way in; the member's primary role is looked up after sorting.
pub fn construct_team_members(records: &[PlayerRecord], game_id: &str) -> Result<Vec<TeamMember>>
{
    info!("Constructing Team Members from Server Data...");

    if records.is_empty()
    {
        bail!(ErrorKind::EmptyRoster(game_id.to_string()));
    }

    records.iter()
        .map(construct_team_member)
        .collect()
}

fn construct_team_member(record: &PlayerRecord) -> Result<TeamMember>
{
    if record.role_ratings.is_empty()
    {
        bail!(ErrorKind::MissingRoleRatings(record.name.clone()));
    }

    if let Some(role) = record.role_ratings.iter().find(|role| !role.value.is_finite())
    {
        bail!("Player: {} has an unusable rating: {} for role: {}", record.name, role.value, role.role);
    }

    let mut role_ratings: Vec<RoleRating> = record.role_ratings.iter()
        .map(|role| RoleRating::new(role.role.as_str(), role.value, role.is_primary))
        .collect();

    /* Stable so equally rated roles keep the order the server sent them in */
    role_ratings.sort_by(|a, b| b.rating_value().partial_cmp(&a.rating_value()).unwrap_or(Ordering::Equal));

    let primaries: Vec<usize> = role_ratings.iter()
        .enumerate()
        .filter(|&(_, role)| role.is_primary())
        .map(|(index, _)| index)
        .collect();

    let primary_role_index = match primaries.first()
    {
        None =>
        {
            warn!("Player: {} has no primary role, using their best rated role: {}", record.name, role_ratings[0].role_name());
            0
        },
        Some(&index) =>
        {
            if primaries.len() > 1
            {
                warn!("Player: {} has {} primary roles, using: {}", record.name, primaries.len(), role_ratings[index].role_name());
            }
            index
        },
    };

    trace!("Constructed member: {} with primary role: {}", record.name, role_ratings[primary_role_index].role_name());

    Ok(TeamMember::new(record.name.as_str(), record.discord_handle.as_str(), primary_role_index, role_ratings))
}
