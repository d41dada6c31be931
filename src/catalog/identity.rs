use std::fmt;

/// Identifier of a top-level category (e.g., `cctv`, `control`).
///
/// Categories without an `id` field resolve to the empty identifier.
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct CategoryId(pub String);

/// Normalized identifier of a child entry.
///
/// Ids derived from bare names are always lower-case; ids copied from an
/// existing record are kept exactly as written.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ChildId(pub String);

// Display forms that simple capitalization gets wrong.
const DISPLAY_NAMES: &[(&str, &str)] = &[
    ("atc", "ATC"),
    ("2070", "2070"),
    ("170", "170"),
    ("radar", "Radar"),
    ("thermal", "Thermal"),
    ("video", "Video"),
    ("hybrid", "Hybrid"),
    ("lidar", "Lidar"),
    ("ptz", "PTZ"),
];

impl CategoryId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ChildId {
    /// Derive the id for a bare child name.
    pub fn from_name(name: &str) -> Self {
        Self(name.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ChildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Look up the fixed display form for a lower-case child id.
pub fn known_display_name(id: &str) -> Option<&'static str> {
    DISPLAY_NAMES
        .iter()
        .find(|(known, _)| *known == id)
        .map(|(_, display)| *display)
}

/// Display name for a bare child name.
///
/// The exception table wins; anything else is the lower-case id with its
/// first letter upper-cased (`PTZcam` -> `Ptzcam`).
pub fn display_name(raw: &str) -> String {
    let id = ChildId::from_name(raw);
    match known_display_name(id.as_str()) {
        Some(display) => display.to_string(),
        None => capitalize_first(id.as_str()),
    }
}

/// Upper-case the first character, leave the rest untouched.
pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Upper-case the first character and lower-case the rest (`ptz` -> `Ptz`).
pub fn capitalize_word(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => {
            let rest = chars.as_str().to_lowercase();
            first.to_uppercase().chain(rest.chars()).collect()
        }
        None => String::new(),
    }
}
