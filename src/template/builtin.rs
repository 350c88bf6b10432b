//! The fixed template set.
//!
//! Slots are MiniJinja variables filled from [`TemplateContext`]. Nothing is
//! escaped or validated: values are inserted exactly as given.

use serde::Serialize;

/// `README.md`: project name, author, year, license.
pub const README: &str = "# {{ name }}

Author: {{ author }}

Year: {{ year }}

License: {{ license }}
";

/// `.travis.yml`: no slots.
pub const CI_CONFIG: &str = "language: go\n";

/// `.gitignore`: no slots.
pub const GITIGNORE: &str = "cover.out\n";

/// `<name>.go`: year, author, license, project name.
pub const MAIN_SOURCE: &str = "// Copyright {{ year }} {{ author }}
// License {{ license }}

package {{ name }}
";

/// `<name>_test.go`: project name.
pub const TEST_SOURCE: &str = "package {{ name }}

import (
\t\"testing\"
)

func Test(t *testing.T) {
\tt.Log(\"Test\")
}
";

/// Values available to every template.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateContext<'a> {
    pub name: &'a str,
    pub author: &'a str,
    pub license: &'a str,
    pub year: i32,
}
