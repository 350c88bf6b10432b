use std::path::PathBuf;

/// A single filesystem action planned from the project tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldOperation {
    CreateDirectory { target: PathBuf, target_exists: bool },
    Write { target: PathBuf, content: String, target_exists: bool },
}

impl ScaffoldOperation {
    /// Returns the target path for this operation, used for error context.
    pub fn target_path(&self) -> &PathBuf {
        match self {
            ScaffoldOperation::CreateDirectory { target, .. } => target,
            ScaffoldOperation::Write { target, .. } => target,
        }
    }

    /// Gets a message describing the operation and its status.
    ///
    /// # Arguments
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    ///
    /// # Returns
    /// * `String` - A descriptive message about the operation
    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };

        match self {
            ScaffoldOperation::CreateDirectory { target, target_exists } => {
                if *target_exists {
                    format!(
                        "{}Skipping directory creation '{}' (already exists)",
                        prefix,
                        target.display()
                    )
                } else {
                    format!("{}Creating directory '{}'", prefix, target.display())
                }
            }

            ScaffoldOperation::Write { target, target_exists, .. } => {
                if *target_exists {
                    format!(
                        "{}Writing to '{}' (overwriting existing file)",
                        prefix,
                        target.display()
                    )
                } else {
                    format!("{}Writing to '{}'", prefix, target.display())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_directory_skips_when_exists() {
        let target = PathBuf::from("/tmp/demo");
        let expected =
            format!("Skipping directory creation '{}' (already exists)", target.display());

        let op = ScaffoldOperation::CreateDirectory { target, target_exists: true };
        assert_eq!(op.get_message(false), expected);
    }

    #[test]
    fn create_directory_message_when_missing() {
        let target = PathBuf::from("/tmp/demo");
        let expected = format!("Creating directory '{}'", target.display());

        let op = ScaffoldOperation::CreateDirectory { target, target_exists: false };
        assert_eq!(op.get_message(false), expected);
    }

    #[test]
    fn write_operation_overwrite_message() {
        let target = PathBuf::from("/tmp/demo/README.md");
        let expected =
            format!("Writing to '{}' (overwriting existing file)", target.display());

        let op = ScaffoldOperation::Write {
            target,
            content: String::new(),
            target_exists: true,
        };
        assert_eq!(op.get_message(false), expected);
    }

    #[test]
    fn dry_run_prefixes_messages() {
        let op = ScaffoldOperation::Write {
            target: PathBuf::from("/tmp/demo/LICENSE"),
            content: String::new(),
            target_exists: false,
        };
        assert_eq!(op.get_message(true), "[DRY RUN] Writing to '/tmp/demo/LICENSE'");
        assert_eq!(op.target_path(), &PathBuf::from("/tmp/demo/LICENSE"));
    }
}
