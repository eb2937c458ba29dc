use super::*;

fn t(id: TrackId, title: &str, artist: &str, album: &str, duration_secs: u32) -> Track {
    Track {
        id,
        title: title.into(),
        artist: artist.into(),
        album: album.into(),
        duration_secs,
        source: format!("sample://{id}"),
    }
}

fn five_track_playlist() -> Playlist {
    Playlist::new(vec![
        t(1, "Alpha", "Band One", "First", 100),
        t(2, "Beta", "Band One", "First", 120),
        t(3, "Gamma", "Band Two", "Second", 90),
        t(4, "Midnight Swing", "Ada Vereen", "Jazz Classics", 240),
        t(5, "Delta", "Band Three", "Third", 60),
    ])
}

#[test]
fn playlist_drops_duplicate_ids_keeping_first() {
    let p = Playlist::new(vec![
        t(1, "Keep", "A", "X", 10),
        t(1, "Drop", "B", "Y", 20),
        t(2, "Also keep", "C", "Z", 30),
    ]);
    assert_eq!(p.len(), 2);
    assert_eq!(p.get(0).unwrap().title, "Keep");
    assert_eq!(p.get(1).unwrap().title, "Also keep");
}

#[test]
fn empty_query_returns_no_results_not_the_full_playlist() {
    let p = five_track_playlist();
    assert!(search(&p, "").is_empty());
    assert!(search(&p, "   ").is_empty());
}

#[test]
fn search_is_case_insensitive_over_all_fields() {
    let p = five_track_playlist();

    // album match, mixed case query
    assert_eq!(search(&p, "jAzZ"), vec![3]);
    // artist match
    assert_eq!(search(&p, "band one"), vec![0, 1]);
    // title match
    assert_eq!(search(&p, "GAMMA"), vec![2]);
    // no match
    assert!(search(&p, "xyz123").is_empty());
}

#[test]
fn search_preserves_browse_order() {
    let p = Playlist::new(vec![
        t(1, "Z song", "Someone", "A", 10),
        t(2, "A song", "Someone", "A", 10),
        t(3, "M song", "Someone", "A", 10),
    ]);
    assert_eq!(search(&p, "song"), vec![0, 1, 2]);
}

#[test]
fn sorted_by_title_is_case_insensitive() {
    let p = Playlist::new(vec![
        t(1, "banana", "X", "X", 10),
        t(2, "Apple", "X", "X", 10),
        t(3, "cherry", "X", "X", 10),
    ]);
    assert_eq!(p.sorted_by(SortField::Title), vec![1, 0, 2]);
}

#[test]
fn sorted_by_duration_is_numeric() {
    let p = five_track_playlist();
    assert_eq!(p.sorted_by(SortField::Duration), vec![4, 2, 0, 1, 3]);
}

#[test]
fn sorted_by_is_stable_on_ties() {
    let p = Playlist::new(vec![
        t(1, "Same", "B", "X", 10),
        t(2, "Same", "A", "X", 10),
        t(3, "Same", "C", "X", 10),
    ]);
    // equal titles keep browse order
    assert_eq!(p.sorted_by(SortField::Title), vec![0, 1, 2]);
}

#[test]
fn albums_group_in_first_seen_order() {
    let p = five_track_playlist();
    let groups = p.albums();
    let names: Vec<&str> = groups.iter().map(|g| g.album).collect();
    assert_eq!(names, vec!["First", "Second", "Jazz Classics", "Third"]);
    assert_eq!(groups[0].track_indices, vec![0, 1]);
}

#[test]
fn stats_count_unique_artists_and_albums() {
    let p = five_track_playlist();
    let s = library_stats(&p);
    assert_eq!(s.tracks, 5);
    assert_eq!(s.artists, 4);
    assert_eq!(s.albums, 4);
    assert_eq!(s.total_secs, 610);
    assert_eq!(s.total_duration_text(), "10m");
}

#[test]
fn format_time_pads_seconds() {
    assert_eq!(format_time(0.0), "0:00");
    assert_eq!(format_time(65.0), "1:05");
    assert_eq!(format_time(90.0), "1:30");
    assert_eq!(format_time(59.9), "0:59");
    assert_eq!(format_time(600.0), "10:00");
}

#[test]
fn format_time_swallows_invalid_values() {
    assert_eq!(format_time(f64::NAN), "0:00");
    assert_eq!(format_time(f64::INFINITY), "0:00");
    assert_eq!(format_time(-3.0), "0:00");
}

#[test]
fn format_total_duration_switches_to_hours() {
    assert_eq!(format_total_duration(0), "0m");
    assert_eq!(format_total_duration(59), "0m");
    assert_eq!(format_total_duration(60), "1m");
    assert_eq!(format_total_duration(3600), "1h 0m");
    assert_eq!(format_total_duration(3600 + 23 * 60 + 5), "1h 23m");
}

#[test]
fn sample_playlist_has_unique_ids() {
    let p = sample_playlist();
    assert!(!p.is_empty());
    let mut ids: Vec<TrackId> = p.iter().map(|t| t.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), p.len());
}

#[test]
fn sort_field_cycles_through_all_four() {
    let mut f = SortField::Title;
    for _ in 0..4 {
        f = f.next();
    }
    assert_eq!(f, SortField::Title);
}
