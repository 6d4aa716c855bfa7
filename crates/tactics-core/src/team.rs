//! Per-team display options

use serde::{Deserialize, Serialize};

use crate::annotation::Color;
use crate::player::{PlayerId, Team};
use crate::store::Patch;

/// Derived visualization that works on a subset of a team's players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamFeature {
    PassingNet,
    CoveredArea,
}

impl TeamFeature {
    pub const ALL: [TeamFeature; 2] = [TeamFeature::PassingNet, TeamFeature::CoveredArea];

    pub fn name(&self) -> &'static str {
        match self {
            TeamFeature::PassingNet => "Passing network",
            TeamFeature::CoveredArea => "Covered area",
        }
    }
}

/// Display options for one team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamOptions {
    pub color: Color,
    pub show_passing_net: bool,
    pub show_covered_area: bool,
    pub show_names: bool,
    pub show_roles: bool,
    pub show_numbers: bool,
    pub passing_net_ids: Vec<PlayerId>,
    pub covered_area_ids: Vec<PlayerId>,
}

impl TeamOptions {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            show_passing_net: false,
            show_covered_area: false,
            show_names: true,
            show_roles: false,
            show_numbers: true,
            passing_net_ids: Vec::new(),
            covered_area_ids: Vec::new(),
        }
    }

    pub fn members(&self, feature: TeamFeature) -> &[PlayerId] {
        match feature {
            TeamFeature::PassingNet => &self.passing_net_ids,
            TeamFeature::CoveredArea => &self.covered_area_ids,
        }
    }

    fn members_mut(&mut self, feature: TeamFeature) -> &mut Vec<PlayerId> {
        match feature {
            TeamFeature::PassingNet => &mut self.passing_net_ids,
            TeamFeature::CoveredArea => &mut self.covered_area_ids,
        }
    }

    pub fn is_enabled(&self, feature: TeamFeature) -> bool {
        match feature {
            TeamFeature::PassingNet => self.show_passing_net,
            TeamFeature::CoveredArea => self.show_covered_area,
        }
    }

    pub fn is_member(&self, feature: TeamFeature, player: PlayerId) -> bool {
        self.members(feature).contains(&player)
    }

    /// Add the player if absent, remove it if present.
    ///
    /// Re-adding appends at the end, so a double toggle preserves the set of
    /// members but not necessarily their order. Returns the new membership.
    pub fn toggle_member(&mut self, feature: TeamFeature, player: PlayerId) -> bool {
        let members = self.members_mut(feature);
        if let Some(index) = members.iter().position(|id| *id == player) {
            members.remove(index);
            false
        } else {
            members.push(player);
            true
        }
    }
}

/// Partial update for team options
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamOptionsPatch {
    pub color: Option<Color>,
    pub show_passing_net: Option<bool>,
    pub show_covered_area: Option<bool>,
    pub show_names: Option<bool>,
    pub show_roles: Option<bool>,
    pub show_numbers: Option<bool>,
}

impl Patch<TeamOptions> for TeamOptionsPatch {
    fn apply(self, options: &mut TeamOptions) {
        if let Some(color) = self.color {
            options.color = color;
        }
        if let Some(show) = self.show_passing_net {
            options.show_passing_net = show;
        }
        if let Some(show) = self.show_covered_area {
            options.show_covered_area = show;
        }
        if let Some(show) = self.show_names {
            options.show_names = show;
        }
        if let Some(show) = self.show_roles {
            options.show_roles = show;
        }
        if let Some(show) = self.show_numbers {
            options.show_numbers = show;
        }
    }
}

/// Options for both teams
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teams {
    pub a: TeamOptions,
    pub b: TeamOptions,
}

impl Teams {
    pub fn get(&self, team: Team) -> &TeamOptions {
        match team {
            Team::A => &self.a,
            Team::B => &self.b,
        }
    }

    pub fn get_mut(&mut self, team: Team) -> &mut TeamOptions {
        match team {
            Team::A => &mut self.a,
            Team::B => &mut self.b,
        }
    }
}

impl Default for Teams {
    fn default() -> Self {
        Self {
            a: TeamOptions::new(Color::RED),
            b: TeamOptions::new(Color::BLUE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_double_toggle_restores_member_set() {
        let mut options = TeamOptions::new(Color::RED);
        for id in [1, 2, 3] {
            options.toggle_member(TeamFeature::PassingNet, PlayerId(id));
        }
        let before: HashSet<_> = options.passing_net_ids.iter().copied().collect();

        assert!(!options.toggle_member(TeamFeature::PassingNet, PlayerId(1)));
        assert!(options.toggle_member(TeamFeature::PassingNet, PlayerId(1)));

        let after: HashSet<_> = options.passing_net_ids.iter().copied().collect();
        assert_eq!(before, after);
        // Re-added members go to the back
        assert_eq!(options.passing_net_ids.last(), Some(&PlayerId(1)));
    }

    #[test]
    fn test_features_have_independent_members() {
        let mut options = TeamOptions::new(Color::BLUE);
        options.toggle_member(TeamFeature::CoveredArea, PlayerId(4));
        assert!(options.is_member(TeamFeature::CoveredArea, PlayerId(4)));
        assert!(!options.is_member(TeamFeature::PassingNet, PlayerId(4)));
    }

    #[test]
    fn test_patch_leaves_memberships_alone() {
        let mut options = TeamOptions::new(Color::BLUE);
        options.toggle_member(TeamFeature::PassingNet, PlayerId(9));
        TeamOptionsPatch {
            show_passing_net: Some(true),
            color: Some(Color::YELLOW),
            ..Default::default()
        }
        .apply(&mut options);

        assert!(options.show_passing_net);
        assert_eq!(options.color, Color::YELLOW);
        assert_eq!(options.passing_net_ids, vec![PlayerId(9)]);
    }
}
