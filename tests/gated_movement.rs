//! Movement through the room graph, including gated rooms.

mod common;
use common::{fixture_session, say};
use grue::adventure::PlayerEvent;

#[test]
fn torch_opens_the_cave() {
    let (mut s, out) = fixture_session("cave.json");
    assert_eq!(s.player().location(), "Clearing");
    assert!(s.player().is_holding("Torch"));

    say(&mut s, &out, "N");
    assert_eq!(s.player().location(), "Forest");

    assert_eq!(
        say(&mut s, &out, "N"),
        "It is far too dark to go in without a light.\n"
    );
    assert_eq!(s.player().location(), "Forest");

    assert_eq!(say(&mut s, &out, "EQUIP TORCH"), "You equip the torch (hand).\n");
    assert!(s.world().is_equipped("Torch"));

    say(&mut s, &out, "N");
    assert_eq!(s.player().location(), "Cave");
    assert_eq!(s.player().moves(), 4);
}

#[test]
fn dead_ends_cost_a_move_but_go_nowhere() {
    let (mut s, out) = fixture_session("cave.json");
    for (verb, moves) in [("W", 1), ("EAST", 2), ("s", 3)] {
        assert_eq!(say(&mut s, &out, verb), "The way is shut!\n");
        assert_eq!(s.player().location(), "Clearing");
        assert_eq!(s.player().moves(), moves);
    }
}

#[test]
fn location_events_follow_real_changes_only() {
    let (mut s, out) = fixture_session("cave.json");
    let mut rx = s.subscribe();
    say(&mut s, &out, "N");
    say(&mut s, &out, "N");
    say(&mut s, &out, "S");

    let mut rooms = Vec::new();
    let mut last_moves = 0;
    while let Ok(event) = rx.try_recv() {
        match event {
            PlayerEvent::LocationChanged(room) => rooms.push(room),
            PlayerEvent::MovesChanged(m) => last_moves = m,
            other => panic!("unexpected event {other:?}"),
        }
    }
    assert_eq!(rooms, ["Forest", "Clearing"]);
    assert_eq!(last_moves, 3);
}

#[test]
fn torch_cannot_be_put_away_inside_the_cave() {
    let (mut s, out) = fixture_session("cave.json");
    for line in ["EQUIP TORCH", "N", "N"] {
        say(&mut s, &out, line);
    }
    assert_eq!(s.player().location(), "Cave");
    assert_eq!(
        say(&mut s, &out, "UNEQUIP TORCH"),
        "You can't unequip the torch while you still need it here.\n"
    );
    assert_eq!(
        say(&mut s, &out, "DROP TORCH"),
        "You need to unequip the torch first.\n"
    );

    say(&mut s, &out, "S");
    assert_eq!(say(&mut s, &out, "UNEQUIP TORCH"), "You unequip the torch.\n");
    assert_eq!(say(&mut s, &out, "DROP TORCH"), "You drop the torch.\n");
    assert!(s.world().object("Torch").unwrap().location.is_room("Forest"));

    assert_eq!(
        say(&mut s, &out, "N"),
        "It is far too dark to go in without a light.\n"
    );
}
