//! Short functional descriptions of standard 10-20 electrode sites.

use crate::data::dataset::{Channel, Dataset};
use crate::data::selection::SelectionState;

/// Shown for channels without any description.
pub const NO_DESCRIPTION: &str = "No description available.";

const ATLAS: &[(&str, &[&str])] = &[
    ("Fp1", &["Thinking and problem-solving", "Working memory", "Understanding what is happening around you"]),
    ("Fp2", &["Understanding feelings and emotions", "Thinking about social situations"]),
    ("F7", &["Speaking and forming words", "Remembering things you have heard", "Handling emotions"]),
    ("F3", &[
        "Language, logic and reasoning",
        "Making plans and solving problems",
        "Learning and practicing movements",
        "Directing gaze and attention for the right eye",
    ]),
    ("Fz", &["Staying focused", "Controlling thoughts and actions", "Planning and coordinating movements"]),
    ("F4", &[
        "Regulating feelings and awareness of the surroundings",
        "Making plans and solving problems",
        "Learning and practicing movements",
        "Directing gaze and attention for the left eye",
    ]),
    ("F8", &["Weighing risks and rewards", "Managing social and emotional behavior", "Handling emotions"]),
    ("T3", &["Listening and understanding language", "Storing new memories", "Managing emotions", "Processing sounds from the right ear"]),
    ("T4", &["Listening and understanding language", "Storing new memories", "Managing emotions", "Processing sounds from the left ear"]),
    ("T5", &[
        "Understanding other people's thoughts and feelings",
        "Recognizing gestures and facial expressions",
        "Combining what you see and hear",
    ]),
    ("T6", &["Understanding social situations", "Processing language", "Remembering things", "Handling emotions"]),
    ("T7", &[
        "Auditory processing for the left ear",
        "Language and speech comprehension",
        "Memory processing and recognition",
        "Left hemisphere visual-spatial processing",
    ]),
    ("T8", &[
        "Auditory processing for the right ear",
        "Language and speech comprehension",
        "Memory processing and recognition",
        "Right hemisphere visual-spatial processing",
    ]),
    ("C3", &[
        "Moving the right side of the body (hand, arm, face)",
        "Touch, pressure and temperature on the right side of the body",
    ]),
    ("Cz", &["Planning and coordinating movements"]),
    ("C4", &[
        "Moving the left side of the body (hand, arm, face)",
        "Touch, pressure and temperature on the left side of the body",
    ]),
    ("P3", &["Sense of where the body is in space", "Directing attention to locations", "Arithmetic and reading"]),
    ("Pz", &["Self-reflection", "Visualizing mental images"]),
    ("P4", &["Sense of where things are around you", "Attending to the environment", "Arithmetic and reading"]),
    ("P7", &[
        "Sensory processing for the left side of the body",
        "Left side spatial awareness and coordination",
        "Attention and focus",
        "Integrating sensory input",
    ]),
    ("P8", &[
        "Sensory processing for the right side of the body",
        "Right side spatial awareness and coordination",
        "Attention and focus",
        "Integrating sensory input",
    ]),
    ("O1", &["Visual processing (right visual field)"]),
    ("O2", &["Visual processing (left visual field)"]),
];

/// Built-in description for a standard label, case-insensitive.
pub fn builtin_description(name: &str) -> Option<&'static [&'static str]> {
    ATLAS
        .iter()
        .find(|(label, _)| label.eq_ignore_ascii_case(name))
        .map(|(_, lines)| *lines)
}

/// Description lines for a channel: its own, else the built-in one, else the placeholder.
pub fn describe(channel: &Channel) -> Vec<String> {
    if let Some(lines) = channel.description.as_ref().filter(|l| !l.is_empty()) {
        return lines.clone();
    }
    match builtin_description(&channel.name) {
        Some(lines) => lines.iter().map(|s| s.to_string()).collect(),
        None => vec![NO_DESCRIPTION.to_string()],
    }
}

/// One line per entry, each prefixed with a bullet.
pub fn bullet_list(lines: &[String]) -> String {
    lines
        .iter()
        .map(|l| format!("\u{2022} {l}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A row of the electrode description table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionRow {
    pub channel: String,
    pub text: String,
}

/// Rows for the selected channels, dataset order.
pub fn description_rows(dataset: &Dataset, selection: &SelectionState) -> Vec<DescriptionRow> {
    selection
        .indices()
        .filter_map(|i| dataset.channel(i))
        .map(|ch| DescriptionRow {
            channel: ch.name.clone(),
            text: bullet_list(&describe(ch)),
        })
        .collect()
}
