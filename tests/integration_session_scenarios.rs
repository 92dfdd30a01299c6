use rand::{rngs::StdRng, SeedableRng};

use wordsprint::{
    history::HISTORY_CAPACITY,
    language::{Language, PhrasePool},
    session::{Phase, SessionConfig, SessionController, TestDuration, WordState},
};

fn controller(language: Language, duration: TestDuration, seed: u64) -> SessionController {
    let pool = PhrasePool::builtin().unwrap();
    SessionController::new(
        pool,
        SessionConfig {
            language,
            duration,
            min_words: 300,
        },
        StdRng::seed_from_u64(seed),
    )
}

fn type_word(c: &mut SessionController, word: &str) {
    for ch in word.chars() {
        c.type_char(ch);
    }
    c.type_char(' ');
}

fn run_out(c: &mut SessionController) {
    for _ in 0..c.duration().secs() {
        c.on_tick();
    }
}

#[test]
fn perfect_ten_words_in_thirty_seconds() {
    let mut c = controller(Language::En, TestDuration::Thirty, 7);
    let target: Vec<String> = c.practice_text().words()[..10].to_vec();

    for word in &target {
        type_word(&mut c, word);
    }
    assert_eq!(c.phase(), Phase::Running);
    run_out(&mut c);

    assert_eq!(c.phase(), Phase::Finished);
    let score = c.score();
    assert_eq!(score.correct_words, 10);
    assert_eq!(score.confirmed_words, 10);
    assert_eq!(score.accuracy, 100);
    assert_eq!(score.wpm, 20);

    assert_eq!(c.history().len(), 1);
    let result = c.history().latest().unwrap();
    assert_eq!(result.language, Language::En);
    assert_eq!(result.duration_secs, 30);
    assert_eq!(result.wpm, 20);
}

#[test]
fn two_mistakes_out_of_five() {
    let mut c = controller(Language::It, TestDuration::Fifteen, 3);
    let target: Vec<String> = c.practice_text().words()[..5].to_vec();

    type_word(&mut c, &target[0]);
    type_word(&mut c, "zzz");
    type_word(&mut c, &target[2]);
    type_word(&mut c, "qqq");
    type_word(&mut c, &target[4]);

    let score = c.score();
    assert_eq!(score.correct_words, 3);
    assert_eq!(score.confirmed_words, 5);
    assert_eq!(score.accuracy, 60);

    assert_eq!(c.word_state(0), WordState::ConfirmedCorrect);
    assert_eq!(c.word_state(1), WordState::ConfirmedIncorrect);
    assert_eq!(c.word_state(5), WordState::Current);
    assert_eq!(c.word_state(6), WordState::Untouched);
}

#[test]
fn language_change_mid_session_resets_everything() {
    let mut c = controller(Language::It, TestDuration::Sixty, 11);
    let first = c.practice_text().words()[0].clone();
    type_word(&mut c, &first);
    c.type_char('x');
    c.on_tick();
    assert_eq!(c.state().time_remaining_secs, 59);

    c.set_language(Language::Fr);

    let state = c.state();
    assert_eq!(state.language, Language::Fr);
    assert!(!state.running);
    assert_eq!(state.time_remaining_secs, 60);
    assert!(state.confirmed_words.is_empty());
    assert!(state.pending_input.is_empty());
    assert_eq!(c.phase(), Phase::Idle);
    assert!(c.history().is_empty());

    // a stray tick after the reset does nothing
    assert!(c.on_tick().is_none());
    assert_eq!(c.state().time_remaining_secs, 60);
}

#[test]
fn blank_commit_changes_nothing() {
    let mut c = controller(Language::De, TestDuration::Thirty, 5);

    c.type_char(' ');
    c.commit_word();

    assert!(c.state().confirmed_words.is_empty());
    assert_eq!(c.phase(), Phase::Idle);

    c.set_input("   ");
    assert!(!c.commit_word());
    assert!(c.state().confirmed_words.is_empty());
}

#[test]
fn every_language_meets_minimum_word_count() {
    for lang in Language::ALL {
        let c = controller(lang, TestDuration::Thirty, 13);
        assert!(
            c.practice_text().len() >= 300,
            "{lang} produced {} words",
            c.practice_text().len()
        );
        assert!(c.practice_text().words().iter().all(|w| !w.is_empty()));
    }
}

#[test]
fn history_keeps_five_newest_first() {
    let mut c = controller(Language::Es, TestDuration::Fifteen, 17);

    for run in 1..=7 {
        let words: Vec<String> = c.practice_text().words()[..run].to_vec();
        for word in &words {
            type_word(&mut c, word);
        }
        run_out(&mut c);
        assert!(c.has_finished());
        c.reset();
    }

    assert_eq!(c.history().len(), HISTORY_CAPACITY);
    let confirmed: Vec<usize> = c.history().iter().map(|r| r.confirmed_words).collect();
    assert_eq!(confirmed, vec![7, 6, 5, 4, 3]);
}

#[test]
fn finished_session_ignores_input_until_reset() {
    let mut c = controller(Language::En, TestDuration::Fifteen, 19);
    let first = c.practice_text().words()[0].clone();
    type_word(&mut c, &first);
    run_out(&mut c);

    c.type_char('a');
    assert!(!c.commit_word());
    assert!(c.on_tick().is_none());
    assert_eq!(c.history().len(), 1);

    c.reset();
    c.type_char('a');
    assert_eq!(c.phase(), Phase::Running);
}
