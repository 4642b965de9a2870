use super::state::Focus;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    SetFocus(Focus),
    FocusNext,
    FocusPrev,
    ToggleHelp,
    DismissAlert,

    // Text inputs
    InputChar(char),
    Backspace,
    ClearInput,

    // Color actions
    Generate,
    Search,
    CopyHex,
    ToggleTheme,
    ExportHistory,
    ClearHistory,
    RandomizeBase,

    // History strip
    HistoryLeft,
    HistoryRight,
    ReselectSelected,
    Reselect(usize),

    Resize,
}
