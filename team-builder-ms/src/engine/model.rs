use team_builder_common::api::roster::GameConfig;

/// One role a player can fill together with how good they are at it.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleRating
{
    role_name: String,
    rating_value: f64,
    is_primary: bool,
}

impl RoleRating
{
    pub fn new<S>(role_name: S, rating_value: f64, is_primary: bool) -> RoleRating
        where S: Into<String>
    {
        RoleRating {
            role_name: role_name.into(),
            rating_value,
            is_primary,
        }
    }

    pub fn role_name(&self) -> &str
    {
        &self.role_name
    }

    pub fn rating_value(&self) -> f64
    {
        self.rating_value
    }

    pub fn is_primary(&self) -> bool
    {
        self.is_primary
    }
}

/// A player for the lifetime of one match.
///
/// `role_ratings` are ordered from the highest to the lowest rating. The selected role starts at the primary role
/// and can only ever move further down that list.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamMember
{
    name: String,
    tag: String,
    primary_role_index: usize,
    role_ratings: Vec<RoleRating>,
    selected_role_index: usize,
}

impl TeamMember
{
    pub fn new<S1, S2>(name: S1, tag: S2, primary_role_index: usize, role_ratings: Vec<RoleRating>) -> TeamMember
        where S1: Into<String>, S2: Into<String>
    {
        assert!(primary_role_index < role_ratings.len(), "primary role index {} out of {} roles", primary_role_index, role_ratings.len());
        assert!(role_ratings.windows(2).all(|pair| pair[0].rating_value >= pair[1].rating_value), "role ratings must be sorted highest first");

        TeamMember {
            name: name.into(),
            tag: tag.into(),
            primary_role_index,
            role_ratings,
            selected_role_index: primary_role_index,
        }
    }

    pub fn name(&self) -> &str
    {
        &self.name
    }

    pub fn tag(&self) -> &str
    {
        &self.tag
    }

    pub fn primary_role_index(&self) -> usize
    {
        self.primary_role_index
    }

    pub fn selected_role_index(&self) -> usize
    {
        self.selected_role_index
    }

    pub fn role_ratings(&self) -> &[RoleRating]
    {
        &self.role_ratings
    }

    pub fn selected_role(&self) -> &RoleRating
    {
        &self.role_ratings[self.selected_role_index]
    }

    /// What this member currently adds to their team's total
    pub fn selected_rating(&self) -> f64
    {
        self.selected_role().rating_value
    }

    /// Index of the first role after the selected one with a strictly lower rating.
    ///
    /// Roles rated the same as the current selection are skipped, switching to them wouldn't change anything.
    pub fn next_lower_role_index(&self) -> Option<usize>
    {
        let current = self.selected_rating();

        self.role_ratings.iter()
            .enumerate()
            .skip(self.selected_role_index + 1)
            .find(|&(_, role)| role.rating_value < current)
            .map(|(index, _)| index)
    }

    pub fn can_lower_role(&self) -> bool
    {
        self.next_lower_role_index().is_some()
    }

    fn lower_role(&mut self) -> Option<(usize, usize)>
    {
        let from = self.selected_role_index;
        let to = self.next_lower_role_index()?;

        assert!(to > from, "selected role can only move towards lower rated roles");
        self.selected_role_index = to;

        Some((from, to))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Team
{
    label: String,
    capacity: usize,
    members: Vec<TeamMember>,
}

impl Team
{
    pub fn new<S>(label: S, capacity: usize) -> Team
        where S: Into<String>
    {
        Team {
            label: label.into(),
            capacity,
            members: Vec::new(),
        }
    }

    pub fn label(&self) -> &str
    {
        &self.label
    }

    pub fn capacity(&self) -> usize
    {
        self.capacity
    }

    pub fn members(&self) -> &[TeamMember]
    {
        &self.members
    }

    pub fn is_full(&self) -> bool
    {
        self.members.len() >= self.capacity
    }

    /// Sum of every member's selected role rating. Derived on every call so it can't drift from the members.
    pub fn total_rating(&self) -> f64
    {
        self.members.iter()
            .map(|member| member.selected_rating())
            .sum()
    }

    pub fn add_member(&mut self, member: TeamMember)
    {
        assert!(!self.is_full(), "team {} is already at its capacity of {}", self.label, self.capacity);

        self.members.push(member);
    }

    /// Indices of the members that still have a lower rated role to fall back to
    pub fn lowerable_member_indices(&self) -> Vec<usize>
    {
        self.members.iter()
            .enumerate()
            .filter(|&(_, member)| member.can_lower_role())
            .map(|(index, _)| index)
            .collect()
    }

    /// Moves a member to their next lower rated role. Returns the `(from, to)` role indices, `None` when the member
    /// has nothing lower.
    pub fn lower_member_role(&mut self, member_index: usize) -> Option<(usize, usize)>
    {
        self.members.get_mut(member_index)?.lower_role()
    }
}

/// All the teams of one game session.
#[derive(Debug, Clone, PartialEq)]
pub struct Match
{
    max_team_count: usize,
    game: GameConfig,
    teams: Vec<Team>,
}

impl Match
{
    /// Creates `max_team_count` empty teams labelled "1", "2", ... each holding up to `max_team_size` players.
    pub fn new(game: GameConfig) -> Match
    {
        let teams = (0..game.max_team_count)
            .map(|index| Team::new(format!("{}", index + 1), game.max_team_size))
            .collect();

        Match {
            max_team_count: game.max_team_count,
            game,
            teams,
        }
    }

    pub fn max_team_count(&self) -> usize
    {
        self.max_team_count
    }

    pub fn game(&self) -> &GameConfig
    {
        &self.game
    }

    pub fn teams(&self) -> &[Team]
    {
        &self.teams
    }

    pub fn team(&self, team_index: usize) -> Option<&Team>
    {
        self.teams.get(team_index)
    }

    pub fn member_count(&self) -> usize
    {
        self.teams.iter()
            .map(|team| team.members.len())
            .sum()
    }

    pub fn total_capacity(&self) -> usize
    {
        self.teams.iter()
            .map(|team| team.capacity)
            .sum()
    }

    pub fn add_team_member(&mut self, member: TeamMember, team_index: usize)
    {
        let team_count = self.teams.len();
        match self.teams.get_mut(team_index)
        {
            Some(team) => team.add_member(member),
            None => panic!("team index {} out of {} teams", team_index, team_count),
        }
    }

    pub fn lower_member_role(&mut self, team_index: usize, member_index: usize) -> Option<(usize, usize)>
    {
        self.teams.get_mut(team_index)?.lower_member_role(member_index)
    }

    /// Team with the lowest total rating, the first one wins ties. With `consider_capacity` full teams are skipped.
    pub fn weakest_team_index(&self, consider_capacity: bool) -> Option<usize>
    {
        self.find_team_index(consider_capacity, |candidate, best| candidate < best)
    }

    /// Team with the highest total rating, the first one wins ties. With `consider_capacity` full teams are skipped.
    pub fn strongest_team_index(&self, consider_capacity: bool) -> Option<usize>
    {
        self.find_team_index(consider_capacity, |candidate, best| candidate > best)
    }

    /// Strongest total minus weakest total over every team, full or not
    pub fn balance_spread(&self) -> f64
    {
        let strongest = self.strongest_team_index(false)
            .map(|index| self.teams[index].total_rating());
        let weakest = self.weakest_team_index(false)
            .map(|index| self.teams[index].total_rating());

        match (strongest, weakest)
        {
            (Some(strongest), Some(weakest)) => strongest - weakest,
            _ => 0.0,
        }
    }

    fn find_team_index<F>(&self, consider_capacity: bool, is_better: F) -> Option<usize>
        where F: Fn(f64, f64) -> bool
    {
        let mut best: Option<(usize, f64)> = None;

        for (index, team) in self.teams.iter().enumerate()
        {
            if consider_capacity && team.is_full()
            {
                continue;
            }

            let total = team.total_rating();
            best = match best
            {
                Some((_, best_total)) if !is_better(total, best_total) => best,
                _ => Some((index, total)),
            };
        }

        best.map(|(index, _)| index)
    }
}
