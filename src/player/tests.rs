use super::*;
use crate::library::{Playlist, Track, TrackId};

/// Recording backend: keeps the command log so tests can assert on what
/// the controller asked the transport to do.
#[derive(Default)]
struct MockBackend {
    calls: Vec<Call>,
}

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Load(TrackId),
    Play,
    Pause,
    SetPosition(f64),
    SetVolume(f32),
}

impl MediaBackend for MockBackend {
    fn load(&mut self, track: &Track) {
        self.calls.push(Call::Load(track.id));
    }
    fn play(&mut self) {
        self.calls.push(Call::Play);
    }
    fn pause(&mut self) {
        self.calls.push(Call::Pause);
    }
    fn set_position(&mut self, seconds: f64) {
        self.calls.push(Call::SetPosition(seconds));
    }
    fn set_volume(&mut self, level: f32) {
        self.calls.push(Call::SetVolume(level));
    }
}

fn t(id: TrackId, title: &str) -> Track {
    Track {
        id,
        title: title.into(),
        artist: "Artist".into(),
        album: "Album".into(),
        duration_secs: 180,
        source: format!("sample://{id}"),
    }
}

fn controller_with(n: TrackId) -> PlayerController<MockBackend> {
    let tracks = (1..=n).map(|i| t(i, &format!("Track {i}"))).collect();
    PlayerController::new(Playlist::new(tracks), MockBackend::default(), 0.7)
}

#[test]
fn starts_idle_with_default_volume() {
    let c = controller_with(3);
    assert_eq!(c.state().current, None);
    assert!(!c.state().playing);
    assert_eq!(c.state().volume, 0.7);
    assert_eq!(c.state().position_secs, 0.0);
    assert!(c.current_track().is_none());
}

#[test]
fn select_track_starts_playback_from_the_top() {
    let mut c = controller_with(3);
    c.select_track(1).unwrap();

    assert_eq!(c.state().current, Some(1));
    assert!(c.state().playing);
    assert_eq!(c.state().position_secs, 0.0);
    assert_eq!(c.state().duration_secs, 0.0); // unknown until metadata
    assert_eq!(c.current_track().unwrap().id, 2);
}

#[test]
fn select_track_instructs_backend_to_load_then_play() {
    let mut c = controller_with(2);
    c.select_track(0).unwrap();
    // first call is the initial volume push from new()
    assert_eq!(c.backend().calls[1..], [Call::Load(1), Call::Play]);
}

#[test]
fn select_track_rejects_out_of_range_index() {
    let mut c = controller_with(3);
    assert_eq!(
        c.select_track(3),
        Err(PlayerError::OutOfRange { index: 3, len: 3 })
    );
    assert_eq!(c.state().current, None);
}

#[test]
fn select_track_on_empty_playlist_is_an_error() {
    let mut c = PlayerController::new(Playlist::default(), MockBackend::default(), 0.5);
    assert_eq!(c.select_track(0), Err(PlayerError::EmptyPlaylist));
}

#[test]
fn toggle_play_pause_is_a_no_op_while_idle() {
    let mut c = controller_with(3);
    c.toggle_play_pause();
    assert!(!c.state().playing);
    assert_eq!(c.state().current, None);
}

#[test]
fn toggle_play_pause_flips_and_drives_backend() {
    let mut c = controller_with(3);
    c.select_track(0).unwrap();

    c.toggle_play_pause();
    assert!(!c.state().playing);
    assert_eq!(c.backend().calls.last(), Some(&Call::Pause));

    c.toggle_play_pause();
    assert!(c.state().playing);
    assert_eq!(c.backend().calls.last(), Some(&Call::Play));
}

#[test]
fn next_wraps_around_after_the_last_index() {
    let mut c = controller_with(4);
    c.select_track(0).unwrap();

    let start = c.state().current;
    for _ in 0..4 {
        c.next();
    }
    assert_eq!(c.state().current, start);
}

#[test]
fn previous_is_the_inverse_of_next() {
    let mut c = controller_with(5);
    for i in 0..5 {
        c.select_track(i).unwrap();
        c.next();
        c.previous();
        assert_eq!(c.state().current, Some(i));

        c.select_track(i).unwrap();
        c.previous();
        c.next();
        assert_eq!(c.state().current, Some(i));
    }
}

#[test]
fn previous_wraps_to_the_last_index_from_zero() {
    let mut c = controller_with(3);
    c.select_track(0).unwrap();
    c.previous();
    assert_eq!(c.state().current, Some(2));
    assert!(c.state().playing);
}

#[test]
fn next_and_previous_are_no_ops_on_an_empty_playlist() {
    let mut c = PlayerController::new(Playlist::default(), MockBackend::default(), 0.5);
    c.next();
    c.previous();
    assert_eq!(c.state().current, None);
    assert!(!c.state().playing);
}

#[test]
fn next_from_idle_behaves_as_if_index_zero_were_current() {
    let mut c = controller_with(3);
    c.next();
    assert_eq!(c.state().current, Some(1));

    let mut c = controller_with(3);
    c.previous();
    assert_eq!(c.state().current, Some(2));
}

#[test]
fn volume_is_clamped_not_rejected() {
    let mut c = controller_with(3);
    c.set_volume(-1.0);
    assert_eq!(c.state().volume, 0.0);
    c.set_volume(5.0);
    assert_eq!(c.state().volume, 1.0);
    assert_eq!(c.backend().calls.last(), Some(&Call::SetVolume(1.0)));
}

#[test]
fn volume_applies_while_idle_and_while_paused() {
    let mut c = controller_with(3);
    c.set_volume(0.3);
    assert_eq!(c.state().volume, 0.3);

    c.select_track(0).unwrap();
    c.toggle_play_pause();
    c.set_volume(0.9);
    assert_eq!(c.state().volume, 0.9);
}

#[test]
fn toggle_mute_restores_the_previous_volume() {
    let mut c = controller_with(3);
    c.set_volume(0.4);
    c.toggle_mute();
    assert_eq!(c.state().volume, 0.0);
    c.toggle_mute();
    assert_eq!(c.state().volume, 0.4);
}

#[test]
fn seek_clamps_to_the_known_duration() {
    let mut c = controller_with(3);
    c.select_track(0).unwrap();
    c.handle_backend_event(BackendEvent::MetadataReady {
        track: 1,
        duration_secs: 180.0,
    });

    c.seek(-10.0);
    assert_eq!(c.state().position_secs, 0.0);

    c.seek(280.0);
    assert_eq!(c.state().position_secs, 180.0);
    assert_eq!(c.backend().calls.last(), Some(&Call::SetPosition(180.0)));

    c.seek(42.5);
    assert_eq!(c.state().position_secs, 42.5);
}

#[test]
fn seek_is_a_no_op_while_idle() {
    let mut c = controller_with(3);
    c.seek(30.0);
    assert_eq!(c.state().position_secs, 0.0);
    assert_eq!(c.backend().calls.len(), 1); // just the initial volume push
}

#[test]
fn seek_before_metadata_clamps_to_zero() {
    let mut c = controller_with(3);
    c.select_track(0).unwrap();
    c.seek(30.0);
    assert_eq!(c.state().position_secs, 0.0);
}

#[test]
fn progress_is_zero_without_duration_and_bounded_otherwise() {
    let mut c = controller_with(3);
    c.select_track(0).unwrap();
    assert_eq!(c.state().progress(), 0.0);

    c.handle_backend_event(BackendEvent::MetadataReady {
        track: 1,
        duration_secs: 200.0,
    });
    c.handle_backend_event(BackendEvent::PositionAdvanced {
        track: 1,
        seconds: 50.0,
    });
    assert_eq!(c.state().progress(), 0.25);

    // backend may momentarily report past the end
    c.handle_backend_event(BackendEvent::PositionAdvanced {
        track: 1,
        seconds: 250.0,
    });
    assert_eq!(c.state().progress(), 1.0);
}

#[test]
fn ended_auto_advances_with_wraparound() {
    let mut c = controller_with(3);
    c.select_track(2).unwrap();

    c.handle_backend_event(BackendEvent::Ended { track: 3 });

    assert_eq!(c.state().current, Some(0));
    assert!(c.state().playing);
    assert_eq!(c.state().position_secs, 0.0);
}

#[test]
fn stale_metadata_from_a_superseded_track_is_discarded() {
    let mut c = controller_with(3);
    c.select_track(0).unwrap(); // track A, id 1
    c.select_track(1).unwrap(); // track B, id 2
    c.handle_backend_event(BackendEvent::MetadataReady {
        track: 2,
        duration_secs: 95.0,
    });

    // late report for track A must not clobber B's duration
    c.handle_backend_event(BackendEvent::MetadataReady {
        track: 1,
        duration_secs: 210.0,
    });
    assert_eq!(c.state().duration_secs, 95.0);
}

#[test]
fn stale_position_and_ended_events_are_discarded() {
    let mut c = controller_with(3);
    c.select_track(1).unwrap();

    c.handle_backend_event(BackendEvent::PositionAdvanced {
        track: 1,
        seconds: 60.0,
    });
    assert_eq!(c.state().position_secs, 0.0);

    c.handle_backend_event(BackendEvent::Ended { track: 1 });
    assert_eq!(c.state().current, Some(1));
}

#[test]
fn load_failure_keeps_the_track_selected_for_retry() {
    let mut c = controller_with(3);
    c.select_track(1).unwrap();

    c.handle_backend_event(BackendEvent::LoadFailed {
        track: 2,
        reason: "unresolvable source".into(),
    });

    assert!(!c.state().playing);
    assert!(c.state().backend_failed);
    assert_eq!(c.state().current, Some(1));

    // retrying the same track clears the flag
    c.select_track(1).unwrap();
    assert!(!c.state().backend_failed);
    assert!(c.state().playing);
}

#[test]
fn subscribers_are_notified_on_every_mutation() {
    let mut c = controller_with(3);
    let rx = c.subscribe();

    c.select_track(0).unwrap();
    c.toggle_play_pause();
    c.set_volume(0.2);

    assert_eq!(rx.try_iter().count(), 3);

    drop(rx);
    // pruned on the next notification, no panic
    c.toggle_play_pause();
}
