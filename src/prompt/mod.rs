//! Prompt construction for remote content generation.
//!
//! Pure formatting only: a [`Subject`] plus static instruction text in,
//! one natural-language request string out. Missing optional fields render
//! the literal [`UNKNOWN`] placeholder — building a prompt never fails.

use crate::types::Subject;

/// Warning line every spoiler narrative must open with, remote or offline.
pub const SPOILER_WARNING: &str = "⚠️ FULL SPOILERS AHEAD ⚠️";

/// Placeholder rendered for a missing release year or an empty genre list.
pub const UNKNOWN: &str = "Unknown";

/// System role line for the recommendation chat.
const RECOMMENDER_ROLE: &str = "You are the NEXUS movie assistant, a friendly expert on films and \
     shows. Recommend titles that match the user's taste, keep answers short, \
     and never reveal plot twists unless asked.";

/// Build the full spoiler request for a subject.
///
/// Embeds title, year, genre list, and overview, and instructs the model to
/// open with [`SPOILER_WARNING`] and cover five fixed sections.
pub fn spoiler_prompt(subject: &Subject) -> String {
    let year = subject
        .release_year
        .map_or_else(|| UNKNOWN.to_string(), |y| y.to_string());
    let genres = if subject.genres.is_empty() {
        UNKNOWN.to_string()
    } else {
        subject.genres.join(", ")
    };

    format!(
        "Give a complete spoiler breakdown of \"{title}\" ({year}).\n\
         Genres: {genres}\n\
         Overview: {overview}\n\n\
         Start your answer with the exact line \"{warning}\" and then cover, \
         with a heading for each:\n\
         1. Plot summary — the full story from beginning to end\n\
         2. Character arcs — how the main characters change\n\
         3. Twists — every major reveal and surprise\n\
         4. Ending — exactly how it concludes\n\
         5. Themes — what the story is really about",
        title = subject.title,
        year = year,
        genres = genres,
        overview = subject.overview,
        warning = SPOILER_WARNING,
    )
}

/// Build a short recommendation request from a user chat message.
pub fn recommendation_prompt(user_message: &str) -> String {
    format!("{RECOMMENDER_ROLE}\n\nUser: {user_message}")
}
