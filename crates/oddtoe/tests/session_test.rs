//! Session flow across several rounds, driven through input events.

use oddtoe::{InputEvent, SessionCoordinator, SessionEvent};
use oddtoe_rules::{BoardSize, Mark, Outcome, Rejection, SizeViolation};
use std::cell::RefCell;
use std::rc::Rc;

fn play(session: &mut SessionCoordinator, moves: &[(i64, i64)]) {
    for &(row, col) in moves {
        session.handle(InputEvent::cell(row, col)).unwrap();
    }
}

fn record_events(session: &mut SessionCoordinator) -> Rc<RefCell<Vec<SessionEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    session.subscribe(move |event| sink.borrow_mut().push(event.clone()));
    events
}

#[test]
fn test_full_session_scores_and_history() {
    let mut session = SessionCoordinator::new(BoardSize::CLASSIC, "Ada", "Bo");

    // Round 1: X takes the top row.
    play(&mut session, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert_eq!(session.engine().outcome(), Outcome::Won(Mark::X));

    // Round 2: draw.
    session.handle(InputEvent::NextRound).unwrap();
    play(
        &mut session,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ],
    );
    assert_eq!(session.engine().outcome(), Outcome::Draw);

    // Round 3 on a larger board: O takes the anti-diagonal.
    session.handle(InputEvent::length(5)).unwrap();
    play(
        &mut session,
        &[
            (0, 0),
            (4, 0),
            (0, 1),
            (3, 1),
            (1, 0),
            (2, 2),
            (1, 1),
            (1, 3),
            (3, 3),
            (0, 4),
        ],
    );
    assert_eq!(session.engine().outcome(), Outcome::Won(Mark::O));

    let scores = session.scores();
    assert_eq!(*scores.x_wins(), 1);
    assert_eq!(*scores.o_wins(), 1);
    assert_eq!(*scores.draws(), 1);

    let rounds: Vec<String> = session.history().iter().map(ToString::to_string).collect();
    assert_eq!(
        rounds,
        vec![
            "Round 1 (3 x 3): Ada (X) won in 5 moves",
            "Round 2 (3 x 3): Draw after 9 moves",
            "Round 3 (5 x 5): Bo (O) won in 10 moves",
        ]
    );
}

#[test]
fn test_moves_after_round_end_are_rejected() {
    let mut session = SessionCoordinator::default();
    play(&mut session, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    let events = record_events(&mut session);

    let result = session.select_cell(2, 2);
    assert_eq!(result.rejection(), Some(&Rejection::GameOver));
    assert_eq!(events.borrow().as_slice(), &[SessionEvent::MoveRejected(Rejection::GameOver)]);
    assert_eq!(session.scores().rounds(), 1);
}

#[test]
fn test_round_finished_follows_winning_move() {
    let mut session = SessionCoordinator::default();
    let events = record_events(&mut session);
    play(&mut session, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

    let events = events.borrow();
    assert_eq!(events.len(), 6);
    assert_eq!(
        events[4],
        SessionEvent::MovePlaced {
            row: 0,
            col: 2,
            mark: Mark::X
        }
    );
    let SessionEvent::RoundFinished(record) = &events[5] else {
        panic!("expected RoundFinished, got {:?}", events[5]);
    };
    assert_eq!(*record.outcome(), Outcome::Won(Mark::X));
}

#[test]
fn test_text_coordinates_from_presenter() {
    let mut session = SessionCoordinator::default();
    session.handle(InputEvent::cell("1", "2")).unwrap();
    assert_eq!(
        session.engine().board().get(1, 2).and_then(|c| c.mark()),
        Some(Mark::X)
    );

    for row in ["one", " 2 ", "01"] {
        let result = session.select_cell(row, "2");
        assert!(matches!(result.rejection(), Some(Rejection::OutOfBounds { .. })));
    }
    assert_eq!(session.current_mark(), Mark::O);
}

#[test]
fn test_invalid_length_reports_violation() {
    let mut session = SessionCoordinator::default();
    let events = record_events(&mut session);

    let err = session.handle(InputEvent::length(1)).unwrap_err();
    assert_eq!(err.violation, SizeViolation::TooSmall);
    let err = session.handle(InputEvent::length(10)).unwrap_err();
    assert_eq!(err.violation, SizeViolation::Even);
    let err = session.handle(InputEvent::length("NaN")).unwrap_err();
    assert_eq!(err.violation, SizeViolation::NotANumber);
    let err = session.handle(InputEvent::LengthChanged(String::new())).unwrap_err();
    assert_eq!(err.violation, SizeViolation::NotANumber);
    let err = session.handle(InputEvent::length(101)).unwrap_err();
    assert_eq!(err.violation, SizeViolation::TooLarge);

    assert!(events.borrow().is_empty());
    assert_eq!(session.engine().size(), BoardSize::CLASSIC);
}

#[test]
fn test_subscribers_run_in_registration_order() {
    let mut session = SessionCoordinator::default();
    let order = Rc::new(RefCell::new(Vec::new()));
    for id in 0..3 {
        let sink = Rc::clone(&order);
        session.subscribe(move |_| sink.borrow_mut().push(id));
    }
    session.handle(InputEvent::ClearScores).unwrap();
    assert_eq!(*order.borrow(), vec![0, 1, 2]);
}
