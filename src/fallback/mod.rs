//! Offline template content for when remote generation is unavailable.
//!
//! Used when no credential is configured or every endpoint attempt failed.
//! Deterministic by contract: no network, no clock, no randomness — the
//! same subject always yields the same text, so a cached fallback entry is
//! an idempotent regeneration, never a conflicting state.

use crate::prompt::SPOILER_WARNING;
use crate::types::Subject;

/// Generic sentence substituted when the catalog has no overview.
const GENERIC_OVERVIEW: &str =
    "The catalog doesn't carry a synopsis for this title, but the broad strokes below still apply.";

/// Build a templated spoiler narrative for a subject.
///
/// Mirrors the section structure the remote prompt demands, so callers see
/// a consistent shape whether content was generated or templated.
pub fn spoiler_fallback(subject: &Subject) -> String {
    let title = &subject.title;
    let setup = if subject.overview.is_empty() {
        GENERIC_OVERVIEW.to_string()
    } else {
        format!("The story opens as described: {}", subject.overview)
    };
    let flavor = if subject.genres.is_empty() {
        format!("{title} builds steadily toward a finale that recontextualises its opening act.")
    } else {
        format!(
            "As a {} story, {title} leans on the conventions of its genre before overturning them in the final act.",
            subject.genres.join("/"),
        )
    };

    format!(
        "{SPOILER_WARNING}\n\n\
         ## Plot summary\n{setup}\n\n\
         ## Character arcs\n\
         The protagonist of {title} begins the story certain of their world and ends it \
         transformed by what they uncover; the people closest to them are not who they \
         first appear to be.\n\n\
         ## Twists\n{flavor}\n\n\
         ## Ending\n\
         {title} closes by resolving its central conflict at a personal cost, leaving one \
         deliberate question open for the audience.\n\n\
         ## Themes\n\
         Identity, consequence, and the price of getting what you want run through \
         {title} from its first scene to its last.\n\n\
         _Live spoiler generation is unavailable right now — this outline was produced offline._"
    )
}

/// Deterministic assistant reply for the recommendation chat.
pub fn recommendation_fallback() -> String {
    "I can't reach the recommendation service right now, but browsing the Trending and \
     Top Rated rows is a good place to start — I'll have personalised picks for you as \
     soon as I'm back online."
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_deterministic() {
        let subject = Subject::new("1", "Inception")
            .release_year(2010)
            .overview("A thief enters dreams.")
            .genres(["Sci-Fi", "Thriller"]);
        assert_eq!(spoiler_fallback(&subject), spoiler_fallback(&subject));
    }

    #[test]
    fn fallback_contains_warning_and_title() {
        let subject = Subject::new("1", "Inception");
        let text = spoiler_fallback(&subject);
        assert!(text.contains(SPOILER_WARNING));
        assert!(text.contains("Inception"));
    }

    #[test]
    fn missing_overview_uses_generic_sentence() {
        let subject = Subject::new("2", "Obscure Short");
        let text = spoiler_fallback(&subject);
        assert!(text.contains(GENERIC_OVERVIEW));
    }
}
