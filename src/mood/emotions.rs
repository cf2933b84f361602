//! Reference emotion definitions.
//!
//! These tables back [`Catalog::reference`](super::Catalog::reference). The
//! order of [`KEYWORD_TABLE`] is the keyword precedence: the first category
//! (and within it the first keyword) that matches wins.

/// A static emotion definition with its suggestion list
#[derive(Debug, Clone, Copy)]
pub struct EmotionDef {
    /// Stable identifier (lowercase)
    pub key: &'static str,
    /// Display name
    pub label: &'static str,
    /// Display glyph
    pub icon: &'static str,
    /// Suggestions as `(title, link)` pairs
    pub suggestions: &'static [(&'static str, &'static str)],
}

// ============================================================================
// Emotions
// ============================================================================

pub const EMOTION_HAPPY: EmotionDef = EmotionDef {
    key: "happy",
    label: "Happy",
    icon: "✨",
    suggestions: &[
        (
            "Happy — Pharrell Williams",
            "https://www.youtube.com/results?search_query=Happy+Pharrell",
        ),
        (
            "Good Life — OneRepublic",
            "https://www.youtube.com/results?search_query=Good+Life+OneRepublic",
        ),
        (
            "Mood Booster Playlist (YouTube)",
            "https://www.youtube.com/results?search_query=mood+booster+playlist",
        ),
    ],
};

pub const EMOTION_SAD: EmotionDef = EmotionDef {
    key: "sad",
    label: "Sad",
    icon: "😢",
    suggestions: &[
        (
            "Someone Like You — Adele",
            "https://www.youtube.com/results?search_query=Someone+Like+You+Adele",
        ),
        (
            "Fix You — Coldplay",
            "https://www.youtube.com/results?search_query=Fix+You+Coldplay",
        ),
        (
            "Lo-fi Sad Beats",
            "https://www.youtube.com/results?search_query=lofi+sad+beats",
        ),
    ],
};

pub const EMOTION_CALM: EmotionDef = EmotionDef {
    key: "calm",
    label: "Calm",
    icon: "🌙",
    suggestions: &[
        (
            "Weightless — Marconi Union",
            "https://www.youtube.com/results?search_query=Weightless+Marconi+Union",
        ),
        (
            "Calm Piano Playlist",
            "https://www.youtube.com/results?search_query=calm+piano+playlist",
        ),
        (
            "Lo-fi Chillhop",
            "https://www.youtube.com/results?search_query=lofi+chillhop",
        ),
    ],
};

pub const EMOTION_ROMANTIC: EmotionDef = EmotionDef {
    key: "romantic",
    label: "Romantic",
    icon: "💕",
    suggestions: &[
        (
            "Perfect — Ed Sheeran",
            "https://www.youtube.com/results?search_query=Perfect+Ed+Sheeran",
        ),
        (
            "Love Songs Playlist",
            "https://www.youtube.com/results?search_query=love+songs+playlist",
        ),
        (
            "Acoustic Love Songs",
            "https://www.youtube.com/results?search_query=acoustic+love+songs",
        ),
    ],
};

pub const EMOTION_ANGRY: EmotionDef = EmotionDef {
    key: "angry",
    label: "Angry",
    icon: "🔥",
    suggestions: &[
        (
            "Killing In The Name — Rage Against The Machine",
            "https://www.youtube.com/results?search_query=Rage+Against+The+Machine+Killing+in+the+Name",
        ),
        (
            "Hard Rock Playlist",
            "https://www.youtube.com/results?search_query=hard+rock+playlist",
        ),
        (
            "Metal Workout Mix",
            "https://www.youtube.com/results?search_query=metal+workout+mix",
        ),
    ],
};

pub const EMOTION_STRESSED: EmotionDef = EmotionDef {
    key: "stressed",
    label: "Stressed",
    icon: "😩",
    suggestions: &[
        (
            "Calming Breath & Soft Piano",
            "https://www.youtube.com/results?search_query=calming+breath+music+piano",
        ),
        (
            "Guided Relaxation Playlist",
            "https://www.youtube.com/results?search_query=guided+relaxation+music",
        ),
        (
            "Ambient Chill",
            "https://www.youtube.com/results?search_query=ambient+chill+music",
        ),
    ],
};

pub const EMOTION_ENERGETIC: EmotionDef = EmotionDef {
    key: "energetic",
    label: "Energetic",
    icon: "⚡",
    suggestions: &[
        (
            "Uptown Funk — Bruno Mars",
            "https://www.youtube.com/results?search_query=Uptown+Funk+Bruno+Mars",
        ),
        (
            "Workout Beats Playlist",
            "https://www.youtube.com/results?search_query=workout+beats+playlist",
        ),
        (
            "Electronic Energetic Mix",
            "https://www.youtube.com/results?search_query=electronic+energetic+mix",
        ),
    ],
};

pub const EMOTION_LONELY: EmotionDef = EmotionDef {
    key: "lonely",
    label: "Lonely",
    icon: "💜",
    suggestions: &[
        (
            "Someone You Loved — Lewis Capaldi",
            "https://www.youtube.com/results?search_query=Someone+You+Loved+Lewis+Capaldi",
        ),
        (
            "Soothing Indie Ballads",
            "https://www.youtube.com/results?search_query=soothing+indie+ballads",
        ),
        (
            "Comforting Acoustic",
            "https://www.youtube.com/results?search_query=comforting+acoustic+songs",
        ),
    ],
};

/// All reference emotions in display order
pub const REFERENCE_EMOTIONS: &[EmotionDef] = &[
    EMOTION_HAPPY,
    EMOTION_SAD,
    EMOTION_CALM,
    EMOTION_ROMANTIC,
    EMOTION_ANGRY,
    EMOTION_STRESSED,
    EMOTION_ENERGETIC,
    EMOTION_LONELY,
];

// ============================================================================
// Keyword precedence
// ============================================================================

/// Ordered keyword table. Category order and keyword order are both
/// tie-break rules.
pub const KEYWORD_TABLE: &[(&str, &[&str])] = &[
    (
        "happy",
        &[
            "happy", "joy", "excited", "great", "amazing", "blessed", "cheerful", "good",
        ],
    ),
    (
        "sad",
        &["sad", "depressed", "broken", "tear", "unhappy", "miserable"],
    ),
    ("calm", &["calm", "relaxed", "peace", "chill", "tranquil"]),
    ("romantic", &["love", "romantic", "crush", "heart"]),
    (
        "angry",
        &["angry", "mad", "furious", "annoyed", "irritated"],
    ),
    (
        "stressed",
        &["stressed", "stress", "anxious", "anxiety", "overwhelmed"],
    ),
    ("energetic", &["energetic", "hyper", "pumped", "energized"]),
    ("lonely", &["lonely", "alone", "isolated", "loneliness"]),
];

// ============================================================================
// Polarity buckets and boost
// ============================================================================

pub const POSITIVE_CANDIDATES: &[&str] = &["happy", "energetic"];
pub const NEUTRAL_CANDIDATES: &[&str] = &["calm"];
pub const NEGATIVE_CANDIDATES: &[&str] = &["sad", "lonely", "stressed"];

/// Categories redirected when the user asks to be cheered up
pub const BOOST_SOURCES: &[&str] = &["sad", "stressed", "lonely", "angry"];
pub const BOOST_TARGET: &str = "happy";

/// Category used whenever nothing better is known
pub const DEFAULT_EMOTION: &str = "calm";
