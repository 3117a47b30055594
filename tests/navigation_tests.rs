use proptest::prelude::*;
use scrolly_rs::scene::{NavigationEvent, NavigationState, Scene, reduce};

#[test]
fn initial_state_is_trend_at_first_date() {
    let state = NavigationState::new(30).expect("state");
    assert_eq!(state.scene(), Scene::Trend);
    assert_eq!(state.date_index(), 0);
    assert_eq!(state.last_date_index(), 29);
}

#[test]
fn advance_past_the_end_lands_on_explore() {
    let mut state = NavigationState::new(5).expect("state");
    for _ in 0..Scene::ALL.len() + 5 {
        state = reduce(state, NavigationEvent::Advance);
    }
    assert_eq!(state.scene(), Scene::Explore);
    assert_eq!(state.scene().index(), 2);
}

#[test]
fn retreat_before_the_start_stays_on_trend() {
    let state = NavigationState::new(5)
        .expect("state")
        .apply(NavigationEvent::Advance)
        .apply(NavigationEvent::Retreat)
        .apply(NavigationEvent::Retreat)
        .apply(NavigationEvent::Retreat);
    assert_eq!(state.scene(), Scene::Trend);
}

#[test]
fn set_date_clamps_into_range() {
    let state = NavigationState::new(10).expect("state");
    assert_eq!(state.apply(NavigationEvent::SetDate(-5)).date_index(), 0);
    assert_eq!(state.apply(NavigationEvent::SetDate(9_999)).date_index(), 9);
    assert_eq!(state.apply(NavigationEvent::SetDate(4)).date_index(), 4);
}

#[test]
fn scene_moves_keep_the_date_cursor() {
    let state = NavigationState::new(10)
        .expect("state")
        .apply(NavigationEvent::SetDate(6))
        .apply(NavigationEvent::Advance)
        .apply(NavigationEvent::Advance);
    assert_eq!(state.scene(), Scene::Explore);
    assert_eq!(state.date_index(), 6);
}

#[test]
fn reducer_is_pure() {
    let state = NavigationState::new(3).expect("state");
    let once = reduce(state, NavigationEvent::Advance);
    let again = reduce(state, NavigationEvent::Advance);
    assert_eq!(once, again);
    assert_eq!(state.scene(), Scene::Trend);
}

fn event() -> impl Strategy<Value = NavigationEvent> {
    prop_oneof![
        Just(NavigationEvent::Advance),
        Just(NavigationEvent::Retreat),
        any::<i64>().prop_map(NavigationEvent::SetDate),
    ]
}

proptest! {
    #[test]
    fn any_event_sequence_stays_in_bounds(
        date_count in 1usize..500,
        events in prop::collection::vec(event(), 0..64)
    ) {
        let mut state = NavigationState::new(date_count).expect("state");
        for event in events {
            state = reduce(state, event);
            prop_assert!(state.date_index() < date_count);
            prop_assert!(state.scene().index() < Scene::ALL.len());
        }
    }
}
