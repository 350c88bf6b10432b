use crate::{
    cli::{args::resolve_author, Args},
    error::Result,
    generator::{Generator, ProjectParams},
    ioutils::get_output_dir,
    project::Project,
    renderer::MiniJinjaRenderer,
    vcs::{GitInitializer, RepositoryInitializer},
    writer::ProjectWriter,
};
use chrono::Datelike;
use std::path::PathBuf;

/// Main CLI runner that orchestrates generation, writing and repository setup
pub struct Runner {
    args: Args,
    working_dir: Option<PathBuf>,
    year: Option<i32>,
    initializer: Box<dyn RepositoryInitializer>,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self {
            args,
            working_dir: None,
            year: None,
            initializer: Box::new(GitInitializer::new()),
        }
    }

    /// Creates the project under `dir` instead of the process working directory.
    pub fn with_working_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Pins the copyright year instead of reading the clock.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_initializer<I: RepositoryInitializer + 'static>(mut self, initializer: I) -> Self {
        self.initializer = Box::new(initializer);
        self
    }

    /// Executes the complete scaffold workflow and returns the project root.
    pub fn run(self) -> Result<PathBuf> {
        let project = self.generate()?;
        log::info!(
            "Creating project {} ({}, {} {})",
            project.name(),
            project.license(),
            project.year(),
            project.author()
        );

        let output_root = get_output_dir(project.root().path(), self.args.force)?;

        ProjectWriter::new(self.args.dry_run).write(&project)?;

        if self.args.dry_run || self.args.no_git {
            log::info!("Skipping repository initialization");
        } else {
            self.initializer.init(&output_root)?;
        }

        if self.args.dry_run {
            println!(
                "[DRY RUN] Project '{}' would be created in {}.",
                project.name(),
                output_root.display()
            );
        } else {
            println!("Project '{}' created in {}.", project.name(), output_root.display());
        }
        Ok(output_root)
    }

    /// Builds the project tree without touching the filesystem.
    fn generate(&self) -> Result<Project> {
        let engine = MiniJinjaRenderer::new();
        let cwd = match &self.working_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };
        let params = ProjectParams {
            name: self.args.project_name.clone(),
            author: resolve_author(self.args.author.as_deref(), |key| std::env::var(key).ok()),
            license: self.args.license.clone(),
            cwd,
            year: self.year.unwrap_or_else(|| chrono::Local::now().year()),
        };
        Generator::new(&engine).generate(&params)
    }
}

/// Runs the scaffold workflow for parsed command line arguments.
pub fn run(args: Args) -> Result<()> {
    Runner::new(args).run().map(|_| ())
}
