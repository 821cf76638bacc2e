//! Tests for offline template content — determinism and substitution.

use nexus_ai::fallback::{recommendation_fallback, spoiler_fallback};
use nexus_ai::prompt::SPOILER_WARNING;
use nexus_ai::Subject;

fn inception() -> Subject {
    Subject::new("27205", "Inception")
        .release_year(2010)
        .overview("A thief who steals corporate secrets through dream-sharing technology.")
        .genres(["Sci-Fi", "Thriller"])
}

#[test]
fn spoiler_fallback_is_deterministic() {
    let subject = inception();
    let first = spoiler_fallback(&subject);
    let second = spoiler_fallback(&subject);
    assert_eq!(first, second);
}

#[test]
fn spoiler_fallback_contains_warning_and_title() {
    let text = spoiler_fallback(&inception());
    assert!(text.contains("⚠️ FULL SPOILERS AHEAD ⚠️"));
    assert!(text.contains("Inception"));
}

#[test]
fn spoiler_fallback_has_all_sections() {
    let text = spoiler_fallback(&inception());
    for section in ["Plot summary", "Character arcs", "Twists", "Ending", "Themes"] {
        assert!(text.contains(section), "missing section: {section}");
    }
}

#[test]
fn spoiler_fallback_substitutes_overview_and_genres() {
    let text = spoiler_fallback(&inception());
    assert!(text.contains("dream-sharing technology"));
    assert!(text.contains("Sci-Fi/Thriller"));
}

#[test]
fn sparse_subject_gets_generic_sentences() {
    let text = spoiler_fallback(&Subject::new("9", "Obscure Short"));
    assert!(text.contains(SPOILER_WARNING));
    assert!(text.contains("Obscure Short"));
    // No overview or genres available — still a full narrative
    for section in ["Plot summary", "Ending", "Themes"] {
        assert!(text.contains(section));
    }
}

#[test]
fn recommendation_fallback_is_deterministic() {
    assert_eq!(recommendation_fallback(), recommendation_fallback());
    assert!(!recommendation_fallback().is_empty());
}
