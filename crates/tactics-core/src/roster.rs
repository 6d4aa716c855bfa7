//! Starting roster
//!
//! Team A lines up in a 4-3-3 on the negative X half, team B in a 4-4-2 on
//! the positive X half.

use crate::player::{Player, PlayerId, Role, Team};

struct Slot {
    number: u8,
    name: &'static str,
    role: Role,
    /// Distance from own goal line toward halfway, 0..1
    depth: f32,
    /// Lateral position across the pitch, -1..1
    lateral: f32,
}

const fn slot(number: u8, name: &'static str, role: Role, depth: f32, lateral: f32) -> Slot {
    Slot {
        number,
        name,
        role,
        depth,
        lateral,
    }
}

const FOUR_THREE_THREE: [Slot; 11] = [
    slot(1, "Navas", Role::Goalkeeper, 0.04, 0.0),
    slot(2, "Carvajal", Role::Defender, 0.30, -0.70),
    slot(4, "Ramos", Role::Defender, 0.25, -0.22),
    slot(5, "Varane", Role::Defender, 0.25, 0.22),
    slot(12, "Marcelo", Role::Defender, 0.30, 0.70),
    slot(8, "Kroos", Role::Midfielder, 0.55, -0.40),
    slot(14, "Casemiro", Role::Midfielder, 0.48, 0.0),
    slot(10, "Modric", Role::Midfielder, 0.55, 0.40),
    slot(7, "Vinicius", Role::Forward, 0.85, -0.65),
    slot(9, "Benzema", Role::Forward, 0.92, 0.0),
    slot(11, "Rodrygo", Role::Forward, 0.85, 0.65),
];

const FOUR_FOUR_TWO: [Slot; 11] = [
    slot(1, "Oblak", Role::Goalkeeper, 0.04, 0.0),
    slot(2, "Trippier", Role::Defender, 0.30, 0.70),
    slot(15, "Savic", Role::Defender, 0.25, 0.22),
    slot(24, "Gimenez", Role::Defender, 0.25, -0.22),
    slot(3, "Reinildo", Role::Defender, 0.30, -0.70),
    slot(11, "Lemar", Role::Midfielder, 0.55, 0.70),
    slot(5, "De Paul", Role::Midfielder, 0.52, 0.22),
    slot(6, "Koke", Role::Midfielder, 0.52, -0.22),
    slot(8, "Llorente", Role::Midfielder, 0.55, -0.70),
    slot(7, "Griezmann", Role::Forward, 0.88, 0.20),
    slot(19, "Morata", Role::Forward, 0.92, -0.20),
];

/// Field depth used when placing a team in its own half
const HALF_DEPTH: f32 = crate::pitch::HALF_LENGTH - 1.0;
/// Lateral spread of the outermost players
const LATERAL_SPREAD: f32 = crate::pitch::HALF_WIDTH - 6.0;

fn place(team: Team, first_id: u32, slots: &[Slot]) -> impl Iterator<Item = Player> + '_ {
    // Team A attacks toward +X from the -X half, team B the other way
    let direction = match team {
        Team::A => 1.0,
        Team::B => -1.0,
    };

    slots.iter().enumerate().map(move |(i, s)| {
        let x = direction * (-HALF_DEPTH + s.depth * HALF_DEPTH);
        let z = s.lateral * LATERAL_SPREAD;
        Player::new(
            PlayerId(first_id + i as u32),
            team,
            s.name,
            s.number,
            s.role,
            x,
            z,
        )
    })
}

/// The fixed starting roster for both teams
pub fn default_roster() -> Vec<Player> {
    place(Team::A, 1, &FOUR_THREE_THREE)
        .chain(place(Team::B, 1 + FOUR_THREE_THREE.len() as u32, &FOUR_FOUR_TWO))
        .collect()
}
