use podplay_core::{Episode, PlayerStore};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn feed() -> Vec<Episode> {
    vec![
        Episode::new("The beginning", "https://cdn.example.com/e0.mp3", 1200)
            .with_members("Diego, Tiago")
            .with_thumbnail("https://cdn.example.com/e0.jpg"),
        Episode::new("Middle ground", "https://cdn.example.com/e1.mp3", 2400).with_members("Diego"),
        Episode::new("Finale", "https://cdn.example.com/e2.mp3", 3600).with_members("Tiago"),
    ]
}

#[test]
fn play_single_episode() {
    init_logger();
    let mut store = PlayerStore::new();
    let episode = feed().remove(1);

    store.play(episode.clone());

    let state = store.state();
    assert_eq!(state.episode_list(), &[episode]);
    assert_eq!(state.current_episode_index(), 0);
    assert!(state.is_playing());
}

#[test]
fn walk_forward_then_back_through_a_list() {
    init_logger();
    let mut store = PlayerStore::new();
    let views = store.subscribe();

    store.play_list(feed(), 0);
    store.play_next();
    store.play_next();
    let at_end = views.latest().unwrap();
    assert_eq!(at_end.current_episode_index, 2);
    assert!(!at_end.has_next);
    assert_eq!(at_end.current_episode().map(|e| e.title.as_str()), Some("Finale"));

    store.play_next();
    assert_eq!(store.state().current_episode_index(), 2);
    assert!(views.latest().is_none());

    store.play_previous();
    store.play_previous();
    let at_start = views.latest().unwrap();
    assert_eq!(at_start.current_episode_index, 0);
    assert!(!at_start.has_previous);
    assert!(at_start.has_next);
}

#[test]
fn toggle_play_twice_restores_flag() {
    init_logger();
    let mut store = PlayerStore::new();
    store.play_list(feed(), 0);

    store.toggle_play();
    assert!(!store.state().is_playing());
    store.toggle_play();
    assert!(store.state().is_playing());
}

#[test]
fn clear_leaves_playing_flag_alone() {
    init_logger();
    for playing in [true, false] {
        let mut store = PlayerStore::new();
        store.play_list(feed(), 2);
        store.set_playing_state(playing);

        store.clear_player_state();

        assert!(store.state().episode_list().is_empty());
        assert_eq!(store.state().current_episode_index(), 0);
        assert_eq!(store.state().is_playing(), playing);
    }
}

#[test]
fn shuffled_next_stays_within_the_list() {
    init_logger();
    let mut store = PlayerStore::new();
    store.play_list(feed(), 0);
    store.toggle_shuffling();

    for _ in 0..1000 {
        store.play_next();
        assert!(store.state().current_episode_index() < 3);
        assert!(store.state().has_next());
    }
}

#[test]
fn playing_through_the_end_of_the_list_stops() {
    init_logger();
    let mut store = PlayerStore::new();
    let views = store.subscribe();
    store.play_list(feed(), 0);

    for _ in 0..3 {
        store.handle_episode_ended();
    }

    let last = views.latest().unwrap();
    assert!(last.episode_list.is_empty());
    assert!(!last.is_playing);
}
