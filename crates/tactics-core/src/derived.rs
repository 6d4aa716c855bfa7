//! Derived tactical visualizations
//!
//! Both generators are pure functions of the current player positions and a
//! team's selected ids, so callers simply recompute them whenever either
//! store changes.

use glam::Vec3;

use crate::geometry::convex_hull_with_smoothing;
use crate::player::{Player, PlayerId};

/// A straight line between two players
pub type Segment = [Vec3; 2];

/// Current positions of the selected players, in selection order.
/// Ids that no longer resolve are skipped.
pub fn member_positions(players: &[Player], members: &[PlayerId]) -> Vec<Vec3> {
    members
        .iter()
        .filter_map(|id| players.iter().find(|p| p.id == *id))
        .map(|p| p.position)
        .collect()
}

/// Complete graph between the selected players: n(n-1)/2 segments
pub fn passing_network(players: &[Player], members: &[PlayerId]) -> Vec<Segment> {
    let positions = member_positions(players, members);
    if positions.len() < 2 {
        return Vec::new();
    }

    let mut segments = Vec::with_capacity(positions.len() * (positions.len() - 1) / 2);
    for (i, a) in positions.iter().enumerate() {
        for b in &positions[i + 1..] {
            segments.push([*a, *b]);
        }
    }
    segments
}

/// Closed outline of the area covered by the selected players, or None if
/// fewer than three points remain.
pub fn covered_area(players: &[Player], members: &[PlayerId]) -> Option<Vec<Vec3>> {
    let positions = member_positions(players, members);
    if positions.len() < 3 {
        return None;
    }

    let outline = convex_hull_with_smoothing(&positions);
    (outline.len() >= 3).then_some(outline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{Role, Team};

    fn players(n: u32) -> Vec<Player> {
        (0..n)
            .map(|i| {
                Player::new(
                    PlayerId(i),
                    Team::A,
                    format!("P{i}"),
                    i as u8,
                    Role::Midfielder,
                    i as f32 * 3.0,
                    (i * i) as f32,
                )
            })
            .collect()
    }

    fn ids(n: u32) -> Vec<PlayerId> {
        (0..n).map(PlayerId).collect()
    }

    #[test]
    fn test_passing_network_is_complete_graph() {
        let roster = players(11);
        for n in 0..=11 {
            let expected = if n < 2 { 0 } else { n * (n - 1) / 2 };
            assert_eq!(passing_network(&roster, &ids(n)).len(), expected as usize);
        }
    }

    #[test]
    fn test_passing_network_pairs_are_unique() {
        let roster = players(3);
        let segments = passing_network(&roster, &ids(3));
        assert_eq!(segments.len(), 3);

        let p = member_positions(&roster, &ids(3));
        assert!(segments.contains(&[p[0], p[1]]));
        assert!(segments.contains(&[p[0], p[2]]));
        assert!(segments.contains(&[p[1], p[2]]));
    }

    #[test]
    fn test_unknown_ids_are_skipped() {
        let roster = players(2);
        let members = vec![PlayerId(0), PlayerId(99), PlayerId(1)];
        assert_eq!(passing_network(&roster, &members).len(), 1);
    }

    #[test]
    fn test_covered_area_needs_three_players() {
        let roster = players(5);
        assert!(covered_area(&roster, &ids(2)).is_none());

        let triangle = covered_area(&roster, &ids(3)).unwrap();
        assert_eq!(triangle, member_positions(&roster, &ids(3)));

        assert_eq!(covered_area(&roster, &ids(5)).unwrap().len(), 10);
    }
}
