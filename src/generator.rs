use crate::{
    constants::{files, MIN_PROJECT_NAME_LEN, SOURCE_EXTENSION, TEST_FILE_SUFFIX},
    error::{Error, Result},
    project::{Directory, Project},
    renderer::TemplateRenderer,
    template::builtin::{self, TemplateContext},
};
use std::path::{Component, Path, PathBuf};

/// Everything needed to build a project tree.
#[derive(Debug, Clone)]
pub struct ProjectParams {
    /// Project name as supplied by the user, before whitespace removal.
    pub name: Option<String>,
    pub author: String,
    pub license: String,
    /// Absolute directory the project root is created in.
    pub cwd: PathBuf,
    pub year: i32,
}

/// Strips all whitespace from `raw`, checks the remaining length and that
/// the name is a single path segment, so the root stays under the cwd.
pub fn validate_project_name(raw: Option<&str>) -> Result<String> {
    let raw = raw.ok_or_else(|| {
        Error::InvalidArgument("missing project name as argument".to_string())
    })?;
    let name: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if name.chars().count() < MIN_PROJECT_NAME_LEN {
        return Err(Error::InvalidArgument(format!(
            "project name '{raw}' must have at least {MIN_PROJECT_NAME_LEN} non-whitespace characters"
        )));
    }
    let mut components = Path::new(&name).components();
    let single_segment = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(segment)), None) if segment == name.as_str()
    );
    if !single_segment {
        return Err(Error::InvalidArgument(format!(
            "project name '{raw}' must be a single directory name, not a path"
        )));
    }
    Ok(name)
}

/// Builds the in-memory project tree from the built-in template set.
pub struct Generator<'a> {
    engine: &'a dyn TemplateRenderer,
}

impl<'a> Generator<'a> {
    pub fn new(engine: &'a dyn TemplateRenderer) -> Self {
        Self { engine }
    }

    /// Validates `params` and renders every scaffold file. Performs no I/O.
    pub fn generate(&self, params: &ProjectParams) -> Result<Project> {
        let name = validate_project_name(params.name.as_deref())?;
        if !params.cwd.is_absolute() {
            return Err(Error::InvalidArgument(format!(
                "working directory '{}' is not absolute",
                params.cwd.display()
            )));
        }

        let context = serde_json::to_value(TemplateContext {
            name: &name,
            author: &params.author,
            license: &params.license,
            year: params.year,
        })?;
        let render = |file_name: &str, template: &str| {
            self.engine.render(template, &context, Some(file_name))
        };

        let main_file = format!("{name}.{SOURCE_EXTENSION}");
        let test_file = format!("{name}{TEST_FILE_SUFFIX}.{SOURCE_EXTENSION}");

        let mut root = Directory::new(params.cwd.join(&name));
        root.add_file(files::LICENSE, "")?;
        root.add_file(files::README, render(files::README, builtin::README)?)?;
        root.add_file(files::GITIGNORE, builtin::GITIGNORE)?;
        root.add_file(files::CI_CONFIG, builtin::CI_CONFIG)?;
        root.add_file(main_file.as_str(), render(&main_file, builtin::MAIN_SOURCE)?)?;
        root.add_file(test_file.as_str(), render(&test_file, builtin::TEST_SOURCE)?)?;

        log::debug!(
            "Generated {} files for project '{}' in {}",
            root.files().len(),
            name,
            root.path().display()
        );

        Ok(Project {
            name,
            author: params.author.clone(),
            license: params.license.clone(),
            year: params.year,
            root,
        })
    }
}
