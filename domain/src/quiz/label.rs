//! Choice label templates
//!
//! Answers and distractors of the same shape are rendered with the same
//! template so the correct choice cannot be spotted by its format.
//! Blank optional parts are omitted.

/// `character[: version][, anime]`
pub fn character_label(
    character_name: &str,
    version_name: Option<&str>,
    anime_name: Option<&str>,
) -> String {
    let mut label = character_name.to_string();
    if let Some(version) = version_name.filter(|v| !v.trim().is_empty()) {
        label.push_str(": ");
        label.push_str(version);
    }
    if let Some(anime) = anime_name.filter(|a| !a.trim().is_empty()) {
        label.push_str(", ");
        label.push_str(anime);
    }
    label
}

/// `music, anime`
pub fn music_label(music_name: &str, anime_name: &str) -> String {
    format!("{}, {}", music_name, anime_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_label_full() {
        assert_eq!(
            character_label("Edward", Some("Child"), Some("Fullmetal Alchemist")),
            "Edward: Child, Fullmetal Alchemist"
        );
    }

    #[test]
    fn test_character_label_without_optional_parts() {
        assert_eq!(character_label("Edward", None, None), "Edward");
        assert_eq!(
            character_label("Edward", None, Some("Fullmetal Alchemist")),
            "Edward, Fullmetal Alchemist"
        );
        assert_eq!(character_label("Edward", Some("Child"), None), "Edward: Child");
    }

    #[test]
    fn test_blank_version_is_omitted() {
        assert_eq!(character_label("Edward", Some(" "), None), "Edward");
    }

    #[test]
    fn test_music_label() {
        assert_eq!(music_label("Tank!", "Cowboy Bebop"), "Tank!, Cowboy Bebop");
    }
}
