use movie_assistant_core::PreferenceField;

/// Which control on screen has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Genre,
    Mood,
    Content,
    Element,
    Submit,
    Results,
}

impl Focus {
    const ORDER: [Focus; 6] = [
        Focus::Genre,
        Focus::Mood,
        Focus::Content,
        Focus::Element,
        Focus::Submit,
        Focus::Results,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|&f| f == self).unwrap_or(0)
    }

    /// Next control in tab order, wrapping around.
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// Previous control in tab order, wrapping around.
    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    /// The preference field edited by this control, if any.
    pub fn field(self) -> Option<PreferenceField> {
        match self {
            Focus::Genre => Some(PreferenceField::Genre),
            Focus::Mood => Some(PreferenceField::Mood),
            Focus::Content => Some(PreferenceField::Content),
            Focus::Element => Some(PreferenceField::Element),
            Focus::Submit | Focus::Results => None,
        }
    }

    pub fn from_field(field: PreferenceField) -> Self {
        match field {
            PreferenceField::Genre => Focus::Genre,
            PreferenceField::Mood => Focus::Mood,
            PreferenceField::Content => Focus::Content,
            PreferenceField::Element => Focus::Element,
        }
    }

    pub fn is_text_input(self) -> bool {
        matches!(self, Focus::Content | Focus::Element)
    }

    pub fn is_selector(self) -> bool {
        matches!(self, Focus::Genre | Focus::Mood)
    }
}

/// Placeholder shown in an empty text input.
pub fn placeholder(field: PreferenceField) -> &'static str {
    match field {
        PreferenceField::Content => "e.g. Space Travel, Mafia, High School...",
        PreferenceField::Element => "e.g. Robot, Dragon, Plot Twist, 1980s...",
        PreferenceField::Genre | PreferenceField::Mood => "",
    }
}

/// Hint line under a text input.
pub fn hint(field: PreferenceField) -> Option<&'static str> {
    match field {
        PreferenceField::Content => Some("What is the movie about? Use single keywords."),
        PreferenceField::Element => Some("Is there a specific detail you are looking for?"),
        PreferenceField::Genre | PreferenceField::Mood => None,
    }
}

/// Step through `options` from `current`, wrapping at both ends.
///
/// A `current` value that isn't in the list starts from the first entry.
/// Returns `None` for an empty list.
pub fn cycle_option<'a>(options: &'a [String], current: &str, forward: bool) -> Option<&'a str> {
    if options.is_empty() {
        return None;
    }
    let len = options.len();
    let next = match options.iter().position(|o| o == current) {
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
        None => 0,
    };
    Some(options[next].as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_wraps_both_ways() {
        assert_eq!(Focus::Results.next(), Focus::Genre);
        assert_eq!(Focus::Genre.prev(), Focus::Results);
        assert_eq!(Focus::Element.next(), Focus::Submit);
    }

    #[test]
    fn focus_field_mapping_is_symmetric() {
        for &field in PreferenceField::all() {
            assert_eq!(Focus::from_field(field).field(), Some(field));
        }
        assert_eq!(Focus::Submit.field(), None);
    }

    #[test]
    fn cycle_option_wraps() {
        let opts: Vec<String> = vec!["Funny".into(), "Dark".into(), "Exciting".into()];
        assert_eq!(cycle_option(&opts, "Exciting", true), Some("Funny"));
        assert_eq!(cycle_option(&opts, "Funny", false), Some("Exciting"));
        assert_eq!(cycle_option(&opts, "Dark", true), Some("Exciting"));
    }

    #[test]
    fn cycle_option_unknown_or_empty() {
        let opts: Vec<String> = vec!["Action".into()];
        assert_eq!(cycle_option(&opts, "", false), Some("Action"));
        assert_eq!(cycle_option(&[], "Action", true), None);
    }
}
