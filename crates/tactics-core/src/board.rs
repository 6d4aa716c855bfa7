//! The board: every store the editor reads and writes

use glam::Vec3;
use tracing::{debug, warn};

use crate::annotation::{Annotation, AnnotationId, AnnotationStylePatch};
use crate::derived::{self, Segment};
use crate::error::{BoardError, BoardResult};
use crate::geometry::ground_distance;
use crate::player::{Player, PlayerId, PlayerPatch, Team};
use crate::roster::default_roster;
use crate::store::Store;
use crate::team::{TeamFeature, TeamOptionsPatch, Teams};
use crate::tool::{Tool, ToolSettings};

/// Ground-plane radius within which a click grabs a player
pub const PLAYER_PICK_RADIUS: f32 = 1.2;

/// All editor state shared between the gesture controller and the UI
#[derive(Debug)]
pub struct Board {
    pub players: Store<Vec<Player>>,
    pub teams: Store<Teams>,
    pub annotations: Store<Vec<Annotation>>,
    pub tool: Store<ToolSettings>,
    /// When true the camera ignores orbit/pan/zoom input
    pub nav_lock: Store<bool>,
}

impl Board {
    pub fn new(players: Vec<Player>) -> Self {
        Self {
            players: Store::new(players),
            teams: Store::new(Teams::default()),
            annotations: Store::new(Vec::new()),
            tool: Store::new(ToolSettings::default()),
            nav_lock: Store::new(false),
        }
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.find(id)
    }

    pub fn update_player(&mut self, id: PlayerId, patch: PlayerPatch) -> BoardResult<()> {
        if !self.players.patch_by_id(id, patch) {
            return Err(BoardError::UnknownPlayer(id));
        }
        Ok(())
    }

    /// Move a player on the ground plane; stale ids are ignored
    pub fn move_player(&mut self, id: PlayerId, position: Vec3) {
        self.players.patch_by_id(id, PlayerPatch::position(position));
    }

    /// Closest player to `point` within [`PLAYER_PICK_RADIUS`]
    pub fn pick_player(&self, point: Vec3) -> Option<PlayerId> {
        self.players
            .get()
            .iter()
            .map(|p| (p.id, ground_distance(p.position, point)))
            .filter(|(_, dist)| *dist <= PLAYER_PICK_RADIUS)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }

    pub fn update_team_options(&mut self, team: Team, patch: TeamOptionsPatch) {
        use crate::store::Patch;
        self.teams.update(|teams| patch.apply(teams.get_mut(team)));
    }

    /// Toggle a player's membership in one of the team's derived features.
    ///
    /// Returns the new membership state.
    pub fn toggle_player_selection(
        &mut self,
        team: Team,
        feature: TeamFeature,
        player: PlayerId,
    ) -> BoardResult<bool> {
        let owner = self
            .player(player)
            .map(|p| p.team)
            .ok_or(BoardError::UnknownPlayer(player))?;
        if owner != team {
            warn!("Rejected {:?} toggle: {} plays for {}", feature, player, owner);
            return Err(BoardError::WrongTeam { player, team });
        }

        let member = self
            .teams
            .update(|teams| teams.get_mut(team).toggle_member(feature, player));
        debug!("{} {:?} member {} -> {}", team, feature, player, member);
        Ok(member)
    }

    pub fn passing_network(&self, team: Team) -> Vec<Segment> {
        derived::passing_network(
            self.players.get(),
            self.teams.get().get(team).members(TeamFeature::PassingNet),
        )
    }

    pub fn covered_area(&self, team: Team) -> Option<Vec<Vec3>> {
        derived::covered_area(
            self.players.get(),
            self.teams.get().get(team).members(TeamFeature::CoveredArea),
        )
    }

    pub fn annotation(&self, id: AnnotationId) -> Option<&Annotation> {
        self.annotations.find(id)
    }

    pub fn add_annotation(&mut self, annotation: Annotation) -> AnnotationId {
        let id = annotation.id;
        self.annotations.push(annotation);
        id
    }

    pub fn remove_annotation(&mut self, id: AnnotationId) -> Option<Annotation> {
        self.annotations.remove_by_id(id)
    }

    pub fn clear_annotations(&mut self) {
        self.annotations.clear();
    }

    pub fn update_annotation_style(&mut self, id: AnnotationId, patch: AnnotationStylePatch) {
        self.annotations.patch_by_id(id, patch);
    }

    pub fn set_tool(&mut self, tool: Option<Tool>) {
        self.tool.update(|settings| settings.active = tool);
    }

    pub fn update_tool_style(&mut self, patch: AnnotationStylePatch) {
        use crate::store::Patch;
        self.tool.update(|settings| patch.apply(settings));
    }

    pub fn nav_locked(&self) -> bool {
        *self.nav_lock.get()
    }

    pub fn set_nav_lock(&mut self, locked: bool) {
        self.nav_lock.set_if_changed(locked);
    }

    pub fn toggle_nav_lock(&mut self) -> bool {
        let locked = !self.nav_locked();
        self.nav_lock.set(locked);
        locked
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(default_roster())
    }
}
