/// User intents produced by [`crate::input::map_event`] and consumed by
/// [`crate::app::App::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    FocusNext,
    FocusPrev,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    /// Previous value of the focused selector.
    CycleLeft,
    /// Next value of the focused selector.
    CycleRight,
    /// Enter: submit the search, or open the highlighted result.
    Confirm,
    NavigateBack,
    InsertChar(char),
    Backspace,
    ClearField,
    ToggleHelp,
    CycleTheme,
    SaveConfig,
    Resize(u16, u16),
    Tick,
    None,
}
