use crate::{
    error::Result,
    ioutils::{create_dir_all, write_file},
    project::{Directory, Project},
    template::operation::ScaffoldOperation,
};

/// Flushes a generated [`Project`] to disk.
pub struct ProjectWriter {
    dry_run: bool,
}

impl ProjectWriter {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Flattens the tree into operations: each directory comes before its
    /// files, and its files come before its subdirectories.
    pub fn plan(project: &Project) -> Vec<ScaffoldOperation> {
        let mut operations = Vec::new();
        plan_directory(project.root(), &mut operations);
        operations
    }

    /// Writes every planned operation in order, stopping at the first failure.
    pub fn write(&self, project: &Project) -> Result<()> {
        for operation in Self::plan(project) {
            log::debug!("Handling scaffold operation: {}", operation.target_path().display());
            if !self.dry_run {
                self.execute(&operation)?;
            }
            log::info!("{}", operation.get_message(self.dry_run));
        }
        Ok(())
    }

    fn execute(&self, operation: &ScaffoldOperation) -> Result<()> {
        match operation {
            ScaffoldOperation::CreateDirectory { target, target_exists } => {
                if !target_exists {
                    create_dir_all(target)?;
                }
                Ok(())
            }
            ScaffoldOperation::Write { target, content, .. } => write_file(content, target),
        }
    }
}

fn plan_directory(directory: &Directory, operations: &mut Vec<ScaffoldOperation>) {
    let target = directory.path().to_path_buf();
    let target_exists = target.is_dir();
    operations.push(ScaffoldOperation::CreateDirectory { target, target_exists });

    for file in directory.files() {
        let target = directory.file_path(file);
        let target_exists = target.exists();
        operations.push(ScaffoldOperation::Write {
            target,
            content: file.content().to_string(),
            target_exists,
        });
    }

    for child in directory.directories() {
        plan_directory(child, operations);
    }
}
