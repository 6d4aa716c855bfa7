//! Players and their identity

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::geometry::GROUND_Y;
use crate::store::{Keyed, Patch};

/// Unique player identifier, stable for the whole session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Team side
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Team {
    A,
    B,
}

impl Team {
    pub const ALL: [Team; 2] = [Team::A, Team::B];

    pub fn name(&self) -> &'static str {
        match self {
            Team::A => "Team A",
            Team::B => "Team B",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Playing role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Goalkeeper,
        Role::Defender,
        Role::Midfielder,
        Role::Forward,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Role::Goalkeeper => "Goalkeeper",
            Role::Defender => "Defender",
            Role::Midfielder => "Midfielder",
            Role::Forward => "Forward",
        }
    }

    /// Short label shown above the player
    pub fn code(&self) -> &'static str {
        match self {
            Role::Goalkeeper => "GK",
            Role::Defender => "DF",
            Role::Midfielder => "MF",
            Role::Forward => "FW",
        }
    }
}

/// A player on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub team: Team,
    pub name: String,
    pub number: u8,
    pub role: Role,
    /// World position; y always sits on the ground plane
    pub position: Vec3,
}

impl Player {
    pub fn new(
        id: PlayerId,
        team: Team,
        name: impl Into<String>,
        number: u8,
        role: Role,
        x: f32,
        z: f32,
    ) -> Self {
        Self {
            id,
            team,
            name: name.into(),
            number,
            role,
            position: Vec3::new(x, GROUND_Y, z),
        }
    }
}

impl Keyed for Player {
    type Id = PlayerId;

    fn id(&self) -> PlayerId {
        self.id
    }
}

/// Partial update for a player. Unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerPatch {
    pub name: Option<String>,
    pub number: Option<u8>,
    pub role: Option<Role>,
    pub position: Option<Vec3>,
}

impl PlayerPatch {
    pub fn position(position: Vec3) -> Self {
        Self {
            position: Some(position),
            ..Default::default()
        }
    }
}

impl Patch<Player> for PlayerPatch {
    fn apply(self, player: &mut Player) {
        if let Some(name) = self.name {
            player.name = name;
        }
        if let Some(number) = self.number {
            player.number = number;
        }
        if let Some(role) = self.role {
            player.role = role;
        }
        if let Some(position) = self.position {
            // Players never leave the ground plane
            player.position = Vec3::new(position.x, GROUND_Y, position.z);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_merges_only_set_fields() {
        let mut player = Player::new(PlayerId(7), Team::A, "Winger", 7, Role::Forward, 10.0, 5.0);
        PlayerPatch {
            number: Some(11),
            ..Default::default()
        }
        .apply(&mut player);

        assert_eq!(player.number, 11);
        assert_eq!(player.name, "Winger");
        assert_eq!(player.role, Role::Forward);
        assert_eq!(player.position, Vec3::new(10.0, GROUND_Y, 5.0));
    }

    #[test]
    fn test_position_patch_is_pinned_to_ground() {
        let mut player = Player::new(PlayerId(1), Team::B, "Keeper", 1, Role::Goalkeeper, 0.0, 0.0);
        PlayerPatch::position(Vec3::new(3.0, 9.0, -4.0)).apply(&mut player);
        assert_eq!(player.position, Vec3::new(3.0, GROUND_Y, -4.0));
    }
}
