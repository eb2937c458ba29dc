use super::model::Playlist;

/// Case-insensitive substring search over title, artist and album.
///
/// Returns matching track indices in browse order. An empty (or
/// whitespace-only) query returns an empty result set: the search view
/// shows the browse UI instead of a result list in that case, so "no
/// query" deliberately does not mean "no filter".
pub fn search(playlist: &Playlist, query: &str) -> Vec<usize> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    playlist
        .iter()
        .enumerate()
        .filter(|(_, track)| {
            track.title.to_lowercase().contains(&query)
                || track.artist.to_lowercase().contains(&query)
                || track.album.to_lowercase().contains(&query)
        })
        .map(|(i, _)| i)
        .collect()
}
