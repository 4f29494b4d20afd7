use engine::model::Match;

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceOutcome
{
    /// The spread ended up at or below the threshold
    Balanced,
    /// The strongest team ran out of members with a lower role to fall back to
    NotAchieved,
}

/// A member of `team_index` switched from one of their roles to a lower rated one.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleAdjustment
{
    pub member_name: String,
    pub team_index: usize,
    pub from_role: String,
    pub from_rating: f64,
    pub to_role: String,
    pub to_rating: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BalanceReport
{
    pub outcome: BalanceOutcome,
    pub adjustments: Vec<RoleAdjustment>,
    pub final_spread: f64,
}

impl BalanceReport
{
    pub fn is_balanced(&self) -> bool
    {
        self.outcome == BalanceOutcome::Balanced
    }
}

/// Upper bound on how many adjustments balancing a match can take: every member can step down at most once per
/// role below their first.
pub fn max_balance_steps(game_match: &Match) -> usize
{
    game_match.teams().iter()
        .flat_map(|team| team.members().iter())
        .map(|member| member.role_ratings().len().saturating_sub(1))
        .sum()
}

/// Repeatedly moves a random member of the strongest team to their next lower rated role until the spread between
/// the strongest and weakest team is within `threshold`.
///
/// Members never change teams and no team total ever goes up. Gives up, without failing, once nobody on the
/// strongest team has a lower role left.
pub fn execute_team_balance<R>(game_match: &mut Match, threshold: f64, rng: &mut R) -> BalanceReport
    where R: Rng + ?Sized
{
    info!("Starting Team Balance with threshold: {}", threshold);

    let step_limit = max_balance_steps(game_match);
    let mut adjustments: Vec<RoleAdjustment> = Vec::new();

    loop
    {
        let spread = game_match.balance_spread();
        if spread <= threshold
        {
            if adjustments.is_empty()
            {
                info!("Skipping Balance as initial placements are already balanced (spread: {})", spread);
            } else
            {
                info!("Teams balanced after {} adjustments (spread: {})", adjustments.len(), spread);
            }

            return BalanceReport {
                outcome: BalanceOutcome::Balanced,
                adjustments,
                final_spread: spread,
            };
        }

        let lowerable = game_match.strongest_team_index(false)
            .map(|team_index| (team_index, game_match.teams()[team_index].lowerable_member_indices()))
            .filter(|&(_, ref members)| !members.is_empty());

        let (team_index, members) = match lowerable
        {
            Some(lowerable) => lowerable,
            None =>
            {
                warn!("Could not balance teams, spread is still {} after {} adjustments", spread, adjustments.len());

                return BalanceReport {
                    outcome: BalanceOutcome::NotAchieved,
                    adjustments,
                    final_spread: spread,
                };
            },
        };

        let member_index = members[rng.gen_range(0..members.len())];

        let (from, to) = match game_match.lower_member_role(team_index, member_index)
        {
            Some(change) => change,
            None => unreachable!("member {} of team {} was picked without a lower role", member_index, team_index),
        };

        let member = &game_match.teams()[team_index].members()[member_index];
        let adjustment = RoleAdjustment {
            member_name: member.name().to_string(),
            team_index,
            from_role: member.role_ratings()[from].role_name().to_string(),
            from_rating: member.role_ratings()[from].rating_value(),
            to_role: member.role_ratings()[to].role_name().to_string(),
            to_rating: member.role_ratings()[to].rating_value(),
        };

        debug!("Setting {} from {} to {}", adjustment.member_name, adjustment.from_role, adjustment.to_role);

        adjustments.push(adjustment);
        assert!(adjustments.len() <= step_limit, "balancing took more than {} steps", step_limit);
    }
}
