//! End-to-end editing scenarios driven through the gesture controller

use glam::Vec3;
use tactics_core::gesture::{GestureController, GesturePhase, Key, PointerDown, TransformMode};
use tactics_core::{Board, Shape, ShapeKind, Team, TeamFeature, Tool};

fn draw_rectangle(board: &mut Board, controller: &mut GestureController, from: Vec3, to: Vec3) {
    board.set_tool(Some(Tool::Draw(ShapeKind::Rectangle)));
    controller.pointer_down(board, PointerDown::primary(from));
    controller.pointer_move(board, Some(to));
    controller.pointer_up(board);
}

/// An empty board keeps player picks out of the way
fn empty_board() -> Board {
    Board::new(Vec::new())
}

#[test]
fn rectangle_draw_then_move() {
    let mut board = empty_board();
    let mut controller = GestureController::new();

    draw_rectangle(&mut board, &mut controller, Vec3::ZERO, Vec3::new(10.0, 0.0, 5.0));
    let id = board.annotations.get()[0].id;
    assert_eq!(
        board.annotation(id).map(|a| a.shape),
        Some(Shape::Rectangle {
            start: Vec3::ZERO,
            end: Vec3::new(10.0, 0.0, 5.0),
            rotation: 0.0,
        })
    );

    controller.pointer_down(&mut board, PointerDown::secondary(Vec3::new(5.0, 0.0, 2.5)));
    assert_eq!(controller.selected_annotation(), Some(id));

    let grab = Vec3::new(5.0, 0.0, 2.5);
    controller.pointer_down(&mut board, PointerDown::primary(grab));
    assert_eq!(
        controller.phase(),
        GesturePhase::TransformingAnnotation(TransformMode::Move)
    );
    controller.pointer_move(&mut board, Some(grab + Vec3::new(1.0, 0.0, 1.0)));
    controller.pointer_move(&mut board, Some(grab + Vec3::new(2.0, 0.0, 3.0)));
    controller.pointer_up(&mut board);

    assert_eq!(
        board.annotation(id).map(|a| a.shape),
        Some(Shape::Rectangle {
            start: Vec3::new(2.0, 0.0, 3.0),
            end: Vec3::new(12.0, 0.0, 8.0),
            rotation: 0.0,
        })
    );
}

#[test]
fn nav_lock_survives_draw_gestures() {
    for prior in [false, true] {
        let mut board = empty_board();
        let mut controller = GestureController::new();
        board.set_nav_lock(prior);

        draw_rectangle(&mut board, &mut controller, Vec3::ZERO, Vec3::new(3.0, 0.0, 3.0));
        assert_eq!(board.nav_locked(), prior);
    }
}

#[test]
fn lock_toggled_mid_gesture_is_reset_on_release() {
    let mut board = empty_board();
    let mut controller = GestureController::new();
    board.set_tool(Some(Tool::Draw(ShapeKind::Circle)));

    controller.pointer_down(&mut board, PointerDown::primary(Vec3::ZERO));
    controller.key_down(&mut board, Key::Space, false);
    controller.key_down(&mut board, Key::Space, false);
    controller.key_down(&mut board, Key::Space, false);
    controller.pointer_up(&mut board);

    // The snapshot taken at gesture start wins
    assert!(!board.nav_locked());
}

#[test]
fn passing_net_with_three_players() {
    let mut board = Board::default();
    let ids: Vec<_> = board
        .players
        .get()
        .iter()
        .filter(|p| p.team == Team::A)
        .take(3)
        .map(|p| p.id)
        .collect();

    for id in &ids {
        assert!(
            board
                .toggle_player_selection(Team::A, TeamFeature::PassingNet, *id)
                .unwrap()
        );
    }
    assert_eq!(board.passing_network(Team::A).len(), 3);
    assert!(board.covered_area(Team::A).is_none());

    assert!(
        !board
            .toggle_player_selection(Team::A, TeamFeature::PassingNet, ids[1])
            .unwrap()
    );
    assert_eq!(board.passing_network(Team::A).len(), 1);
}

#[test]
fn covered_area_follows_dragged_player() {
    let mut board = Board::default();
    let mut controller = GestureController::new();
    let members: Vec<_> = board
        .players
        .get()
        .iter()
        .filter(|p| p.team == Team::B)
        .take(4)
        .map(|p| (p.id, p.position))
        .collect();
    for (id, _) in &members {
        board
            .toggle_player_selection(Team::B, TeamFeature::CoveredArea, *id)
            .unwrap();
    }
    assert_eq!(board.covered_area(Team::B).map(|a| a.len()), Some(8));

    let (dragged, start) = members[0];
    let target = Vec3::new(30.0, 0.0, 25.0);
    controller.pointer_down(&mut board, PointerDown::primary(start));
    controller.pointer_move(&mut board, Some(target));
    controller.pointer_up(&mut board);

    assert_eq!(board.player(dragged).map(|p| p.position), Some(target));
    let outline = board.covered_area(Team::B).unwrap_or_default();
    assert!(outline.contains(&target));
}
