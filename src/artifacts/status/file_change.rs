use colored::Colorize;

const LABEL_WIDTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FileChangeType {
    /// Present on the newer side only
    Added,
    /// Present on both sides with different content
    Modified,
    /// Present in the working tree but not staged
    Untracked,
}

impl From<&FileChangeType> for &str {
    fn from(change: &FileChangeType) -> Self {
        match change {
            FileChangeType::Added => "new file:   ",
            FileChangeType::Modified => "modified:   ",
            FileChangeType::Untracked => "",
        }
    }
}

/// A status entry label, colored for the section it is printed in
#[derive(Debug, Clone, Copy)]
pub struct ChangeLabel {
    change: FileChangeType,
    staged: bool,
}

impl ChangeLabel {
    pub fn staged(change: FileChangeType) -> Self {
        ChangeLabel {
            change,
            staged: true,
        }
    }

    pub fn unstaged(change: FileChangeType) -> Self {
        ChangeLabel {
            change,
            staged: false,
        }
    }
}

impl std::fmt::Display for ChangeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = (&self.change).into();
        let colored_str = if self.staged {
            label.green()
        } else {
            label.red()
        };
        write!(f, "{:>width$}{}", "", colored_str, width = LABEL_WIDTH)
    }
}
