use std::time::Duration;

use marquee_core::card_stack::{
    CardBoard, CardRole, CardStack, CardStackConfig, CardStackMessage,
};
use marquee_core::host::FixedViewport;
use marquee_core::input::{GestureOutcome, Key, PointerEvent, PointerPhase};
use marquee_core::timers::{CardStackTimer, SharedScheduler, TimerEvent};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

type Stack = CardStack<CardBoard, SharedScheduler>;

const WIDE: FixedViewport = FixedViewport(1280.0);
const NARROW: FixedViewport = FixedViewport(600.0);

fn build(cards: usize, viewport: FixedViewport) -> (Stack, SharedScheduler) {
    let clock = SharedScheduler::new();
    let stack = CardStack::new(
        CardBoard::new(cards),
        clock.clone(),
        &viewport,
        CardStackConfig::default(),
    );
    (stack, clock)
}

/// Advance the clock, feeding card-stack timers back. Returns how many
/// auto-advance ticks fired.
fn pump(clock: &SharedScheduler, stack: &mut Stack, ms: u64) -> usize {
    let mut ticks = 0;
    clock.advance(Duration::from_millis(ms), |event| match event {
        TimerEvent::CardStack(timer) => {
            if timer == CardStackTimer::AutoAdvance {
                ticks += 1;
            }
            stack.update(CardStackMessage::Timer(timer));
        }
        other => panic!("unexpected timer {other:?}"),
    });
    ticks
}

fn unlock(clock: &SharedScheduler, stack: &mut Stack) {
    pump(clock, stack, 600);
    assert!(!stack.is_animating());
}

fn assert_rendered(stack: &Stack) {
    let board = stack.surface();
    let current = stack.current_index();
    assert_eq!(board.cards_with(CardRole::Active), vec![current]);
    assert_eq!(board.active_indicators(), vec![current]);
}

fn swipe(stack: &mut Stack, from: (f32, f32), to: (f32, f32)) -> GestureOutcome {
    stack.handle_pointer(PointerEvent::mouse(PointerPhase::Down, from.0, from.1));
    stack.handle_pointer(PointerEvent::mouse(PointerPhase::Move, to.0, to.1));
    stack.handle_pointer(PointerEvent::mouse(PointerPhase::Up, to.0, to.1))
}

#[test]
fn random_walks_step_by_one_modulo_n() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for cards in 1..=7 {
        let (mut stack, clock) = build(cards, NARROW);
        for _ in 0..40 {
            let before = stack.current_index();
            let forward = rng.random_bool(0.5);
            let moved = if forward {
                stack.next_card()
            } else {
                stack.prev_card()
            };
            assert!(moved);

            let expected = if forward {
                (before + 1) % cards
            } else {
                (before + cards - 1) % cards
            };
            assert_eq!(stack.current_index(), expected);
            assert!(stack.current_index() < cards);
            assert_rendered(&stack);
            unlock(&clock, &mut stack);
        }
    }
}

#[test]
fn go_to_current_card_is_a_no_op() {
    let (mut stack, clock) = build(4, NARROW);
    let writes = stack.surface().role_writes();
    let pending = clock.pending_count();

    assert!(!stack.go_to_card(0));
    assert!(!stack.is_animating());
    assert_eq!(stack.surface().role_writes(), writes);
    assert_eq!(clock.pending_count(), pending);
}

#[test]
fn navigation_while_animating_changes_nothing() {
    let (mut stack, clock) = build(5, NARROW);
    assert!(stack.go_to_card(2));
    let board = stack.surface().clone();

    assert!(!stack.next_card());
    assert!(!stack.prev_card());
    assert!(!stack.go_to_card(4));
    assert!(!stack.indicator_clicked(0));
    assert!(!stack.handle_key(&Key::ArrowRight));
    assert_eq!(stack.current_index(), 2);
    assert_eq!(stack.surface(), &board);

    pump(&clock, &mut stack, 599);
    assert!(stack.is_animating());
    pump(&clock, &mut stack, 1);
    assert!(stack.next_card());
    assert_eq!(stack.current_index(), 3);
}

#[test]
fn active_role_follows_every_reachable_index() {
    let (mut stack, clock) = build(6, NARROW);
    for target in (0..6).rev() {
        stack.go_to_card(target);
        assert_eq!(stack.role_of(target), CardRole::Active);
        assert_eq!(stack.surface().role(target), Some(CardRole::Active));
        assert_rendered(&stack);
        unlock(&clock, &mut stack);
    }
}

#[test]
fn horizontal_swipes_past_threshold_navigate_once() {
    let (mut stack, clock) = build(5, NARROW);

    let outcome = swipe(&mut stack, (100.0, 40.0), (50.0, 40.0));
    assert!(outcome.ended_gesture());
    assert_eq!(stack.current_index(), 1);
    unlock(&clock, &mut stack);

    swipe(&mut stack, (50.0, 40.0), (100.0, 40.0));
    assert_eq!(stack.current_index(), 0);
    unlock(&clock, &mut stack);

    let outcome = swipe(&mut stack, (100.0, 40.0), (90.0, 40.0));
    assert_eq!(outcome, GestureOutcome::Released);
    assert_eq!(stack.current_index(), 0);
    assert!(!stack.is_animating());
}

#[test]
fn vertical_drag_is_not_a_swipe() {
    let (mut stack, _clock) = build(3, NARROW);
    swipe(&mut stack, (100.0, 0.0), (40.0, 200.0));
    assert_eq!(stack.current_index(), 0);
}

#[test]
fn touch_and_mouse_share_one_gesture() {
    use marquee_core::input::TouchPoint;

    let (mut stack, _clock) = build(3, NARROW);
    let down = PointerEvent::from_touches(
        PointerPhase::Down,
        &[TouchPoint {
            client_x: 200.0,
            client_y: 10.0,
        }],
    )
    .expect("one touch");
    assert_eq!(stack.handle_pointer(down), GestureOutcome::Started);
    assert!(stack.is_dragging());

    let up = PointerEvent::mouse(PointerPhase::Up, 120.0, 12.0);
    stack.handle_pointer(up);
    assert_eq!(stack.current_index(), 1);
    assert!(!stack.is_dragging());
}

#[test]
fn gesture_pauses_and_always_restarts_auto_advance() {
    let (mut stack, _clock) = build(3, WIDE);
    stack.handle_pointer(PointerEvent::mouse(PointerPhase::Down, 10.0, 10.0));
    assert!(!stack.is_auto_advancing());
    stack.handle_pointer(PointerEvent::mouse(PointerPhase::Up, 12.0, 10.0));
    assert!(stack.is_auto_advancing());
}

#[test]
fn starting_twice_keeps_a_single_schedule() {
    let (mut stack, clock) = build(4, WIDE);
    stack.start_auto_advance();
    stack.start_auto_advance();
    assert_eq!(
        clock.pending_for(TimerEvent::CardStack(CardStackTimer::AutoAdvance)),
        1
    );

    let ticks = pump(&clock, &mut stack, 10_000);
    assert_eq!(ticks, 2);
    assert_eq!(stack.current_index(), 2);
}

#[test]
fn stopped_auto_advance_never_navigates() {
    let (mut stack, clock) = build(4, WIDE);
    stack.stop_auto_advance();
    stack.stop_auto_advance();

    assert_eq!(pump(&clock, &mut stack, 20_000), 0);
    assert_eq!(stack.current_index(), 0);
}

#[test]
fn hover_pauses_auto_advance_until_leave() {
    let (mut stack, clock) = build(3, WIDE);
    stack.update(CardStackMessage::HoverEnter);
    assert_eq!(pump(&clock, &mut stack, 9_000), 0);

    stack.update(CardStackMessage::HoverLeave);
    assert_eq!(pump(&clock, &mut stack, 4_000), 1);
    assert_eq!(stack.current_index(), 1);
}

#[test]
fn five_cards_three_steps_lands_on_index_three() {
    let (mut stack, clock) = build(5, NARROW);
    for _ in 0..3 {
        assert!(stack.next_card());
        unlock(&clock, &mut stack);
    }
    assert_eq!(stack.current_index(), 3);
    let board = stack.surface();
    assert!(board.indicator(3));
    for other in [0, 1, 2, 4] {
        assert!(!board.indicator(other));
    }
    assert_eq!(board.role(4), Some(CardRole::Next));
    assert_eq!(board.role(2), Some(CardRole::Prev));
    assert_eq!(board.cards_with(CardRole::Hidden), vec![0, 1]);
}

#[test]
fn two_cards_give_next_precedence() {
    let (stack, _clock) = build(2, NARROW);
    assert_eq!(stack.surface().role(0), Some(CardRole::Active));
    assert_eq!(stack.surface().role(1), Some(CardRole::Next));
}

#[test]
fn disposed_stack_ignores_unlock_and_input() {
    let (mut stack, clock) = build(3, WIDE);
    stack.next_card();
    stack.dispose();

    assert_eq!(pump(&clock, &mut stack, 10_000), 0);
    assert!(stack.is_animating());
    assert!(!stack.next_card());
    assert_eq!(
        stack.handle_pointer(PointerEvent::mouse(PointerPhase::Down, 0.0, 0.0)),
        GestureOutcome::Ignored
    );
    assert_eq!(stack.current_index(), 1);
}

#[test]
#[should_panic(expected = "out of range")]
fn out_of_range_index_panics() {
    let (mut stack, _clock) = build(3, NARROW);
    stack.go_to_card(3);
}
