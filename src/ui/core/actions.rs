use crate::tasks::{TaskId, Theme};

/// Which component receives plain key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    TaskList,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Task operations
    AddTask(String),
    CompleteTask(TaskId),
    CyclePriority(TaskId),
    ClearActive,
    ClearCompleted,

    // Theme
    SetTheme(Theme),
    CycleTheme,

    // UI operations
    ToggleCompleted,
    Focus(Focus),
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogType {
    Help,
    Logs,
}
