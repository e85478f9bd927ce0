//! Saving a session mid-round and restoring it must not change the game:
//! continuing the restored copy ends exactly where uninterrupted play does.

use proptest::prelude::*;
use rstest::rstest;
use wordle_quest::core::Word;
use wordle_quest::session::{GameSession, SessionRecord, SessionStatus};

#[derive(Debug, Clone)]
enum Action {
    Type(char),
    Delete,
    Submit,
    Bonus(usize),
    Remove(char),
    Prefill(usize, char),
}

fn apply(session: &mut GameSession, action: &Action) {
    match *action {
        Action::Type(letter) => {
            session.on_key_pressed(letter);
        }
        Action::Delete => {
            session.on_delete();
        }
        Action::Submit => {
            session.on_submit(|_, _| true);
        }
        Action::Bonus(count) => session.add_bonus_guesses(count),
        Action::Remove(letter) => session.remove_letter(letter),
        Action::Prefill(position, letter) => {
            session.prefill_position(position, letter);
        }
    }
}

fn type_guess(word: &str) -> Vec<Action> {
    word.chars()
        .map(Action::Type)
        .chain(std::iter::once(Action::Submit))
        .collect()
}

fn save_and_restore(session: &GameSession) -> GameSession {
    let json = session
        .to_record("2026-02-23", None)
        .to_json()
        .expect("record serialises");
    let record = SessionRecord::from_json(&json).expect("record parses");
    GameSession::from_record(&record).expect("record restores")
}

fn play_with_break(target: &str, max_guesses: usize, actions: &[Action], split: usize) {
    let mut uninterrupted = GameSession::new(Word::new(target).unwrap(), max_guesses);
    for action in &actions[..split] {
        apply(&mut uninterrupted, action);
    }

    let mut restored = save_and_restore(&uninterrupted);
    assert_eq!(restored, uninterrupted, "restore changed the session");

    for action in &actions[split..] {
        apply(&mut uninterrupted, action);
        apply(&mut restored, action);
    }
    assert_eq!(restored, uninterrupted);
    assert_eq!(restored.board(), uninterrupted.board());
}

#[rstest]
#[case::before_any_guess(0)]
#[case::mid_typing(2)]
#[case::after_first_guess(6)]
#[case::after_items(8)]
#[case::near_the_end(13)]
fn restore_then_continue_matches(#[case] split: usize) {
    let mut actions = type_guess("dark");
    actions.push(Action::Remove('Q'));
    actions.push(Action::Prefill(0, 'a'));
    actions.extend(type_guess("calm"));
    actions.extend(type_guess("able"));

    play_with_break("able", 6, &actions, split);
}

#[test]
fn out_of_guesses_session_resumes_after_restore() {
    let mut session = GameSession::new(Word::new("able").unwrap(), 1);
    for action in type_guess("dark") {
        apply(&mut session, &action);
    }
    assert_eq!(session.status(), SessionStatus::OutOfGuesses);

    let mut restored = save_and_restore(&session);
    assert_eq!(restored.status(), SessionStatus::OutOfGuesses);

    restored.add_bonus_guesses(1);
    for action in type_guess("able") {
        apply(&mut restored, &action);
    }
    assert_eq!(restored.status(), SessionStatus::Won);
    assert_eq!(restored.completed_guesses().len(), 2);
}

#[test]
fn stale_daily_record_is_detected() {
    let session = GameSession::new(Word::new("speed").unwrap(), 6);
    let record = session.to_record("2026-02-22", None);
    assert!(record.is_stale("2026-02-23"));
    assert!(!record.is_stale("2026-02-22"));

    let legacy = session.to_record("", None);
    assert!(!legacy.is_stale("2026-02-23"));
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        6 => prop::sample::select(vec!['A', 'B', 'D', 'E', 'L', 'R', 'S']).prop_map(Action::Type),
        1 => Just(Action::Delete),
        3 => Just(Action::Submit),
        1 => (0usize..3).prop_map(Action::Bonus),
        1 => prop::sample::select(vec!['C', 'Q', 'Z', 'D']).prop_map(Action::Remove),
        1 => (0usize..6, prop::sample::select(vec!['A', 'B', 'L', 'E']))
            .prop_map(|(position, letter)| Action::Prefill(position, letter)),
    ]
}

proptest! {
    #[test]
    fn any_break_point_is_invisible(
        actions in prop::collection::vec(action(), 0..60),
        split_seed in any::<prop::sample::Index>(),
        max_guesses in 1usize..7,
    ) {
        let split = split_seed.index(actions.len() + 1);
        play_with_break("able", max_guesses, &actions, split);
    }
}
