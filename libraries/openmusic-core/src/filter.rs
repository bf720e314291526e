//! In-memory song filtering
//!
//! Filtering runs after the full song list has been fetched, so a request
//! costs O(n) in the number of songs. Moving it into the store as a query
//! must keep these semantics: case-insensitive substring on both fields,
//! conjunctive when both are given.

use crate::types::Song;
use serde::Deserialize;

/// Optional title / performer filters for song listings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SongFilter {
    pub title: Option<String>,
    pub performer: Option<String>,
}

impl SongFilter {
    pub fn new(title: Option<String>, performer: Option<String>) -> Self {
        Self { title, performer }
    }

    /// Check a single song against every filter that is set
    pub fn matches(&self, song: &Song) -> bool {
        contains_folded(&song.title, self.title.as_deref())
            && contains_folded(&song.performer, self.performer.as_deref())
    }

    /// Keep the songs that match, preserving order
    pub fn apply(&self, songs: Vec<Song>) -> Vec<Song> {
        if self.title.is_none() && self.performer.is_none() {
            return songs;
        }
        songs.into_iter().filter(|song| self.matches(song)).collect()
    }
}

fn contains_folded(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SongId;
    use proptest::prelude::*;

    fn song(title: &str, performer: &str) -> Song {
        Song {
            id: SongId::new(format!("song-{title}")),
            title: title.to_string(),
            year: 2000,
            performer: performer.to_string(),
            genre: "Pop".to_string(),
            duration: None,
            album_id: None,
        }
    }

    fn library() -> Vec<Song> {
        vec![
            song("Killer Queen", "Queen"),
            song("Queen of Hearts", "Dave Edmunds"),
            song("Dancing Queen", "ABBA"),
            song("Smile", "Smith & Co"),
            song("Yesterday", "The Beatles"),
        ]
    }

    fn titles(songs: &[Song]) -> Vec<&str> {
        songs.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn no_filter_returns_everything() {
        let result = SongFilter::default().apply(library());
        assert_eq!(result.len(), 5);
    }

    #[test]
    fn title_filter_is_case_insensitive_substring() {
        let result = SongFilter::new(Some("queen".to_string()), None).apply(library());
        assert_eq!(
            titles(&result),
            vec!["Killer Queen", "Queen of Hearts", "Dancing Queen"]
        );
    }

    #[test]
    fn needle_is_case_folded_too() {
        let result = SongFilter::new(None, Some("ABBA".to_string())).apply(library());
        assert_eq!(titles(&result), vec!["Dancing Queen"]);

        let result = SongFilter::new(None, Some("abba".to_string())).apply(library());
        assert_eq!(titles(&result), vec!["Dancing Queen"]);
    }

    #[test]
    fn both_filters_are_conjunctive() {
        let result =
            SongFilter::new(Some("a".to_string()), Some("smith".to_string())).apply(library());
        // "Smile" has no "a" in its title, "Dancing Queen" is not by Smith
        assert!(result.is_empty());

        let result =
            SongFilter::new(Some("i".to_string()), Some("smith".to_string())).apply(library());
        assert_eq!(titles(&result), vec!["Smile"]);
    }

    proptest! {
        /// Property: every result satisfies both predicates, and nothing
        /// satisfying both is dropped
        #[test]
        fn results_are_exactly_the_conjunction(
            entries in prop::collection::vec(("[A-Za-z ]{0,12}", "[A-Za-z ]{0,12}"), 0..30),
            title in proptest::option::of("[A-Za-z]{0,3}"),
            performer in proptest::option::of("[A-Za-z]{0,3}"),
        ) {
            let songs: Vec<Song> = entries.iter().map(|(t, p)| song(t, p)).collect();
            let filter = SongFilter::new(title.clone(), performer.clone());

            let expected: Vec<Song> = songs
                .iter()
                .filter(|s| {
                    let contains = |field: &str, needle: &str| {
                        field.to_lowercase().contains(&needle.to_lowercase())
                    };
                    title.as_ref().map_or(true, |t| contains(&s.title, t))
                        && performer.as_ref().map_or(true, |p| contains(&s.performer, p))
                })
                .cloned()
                .collect();

            prop_assert_eq!(filter.apply(songs), expected);
        }
    }
}
