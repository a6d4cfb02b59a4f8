//! Splitting a report body into `>>name\tverdict ... >>END_MODULE` blocks.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::core::module::Module;
use crate::core::types::Verdict;
use crate::parsing::report::ParseWarning;

/// Line closing every module block
pub const END_MODULE: &str = ">>END_MODULE";

static MODULE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^>>(?P<name>[-a-zA-Z 0-9%]+)\t(?P<verdict>pass|warn|fail)")
        .expect("static regex must compile")
});

/// Match a module-opening marker, returning the module name and verdict
#[must_use]
pub fn parse_module_marker(line: &str) -> Option<(String, Verdict)> {
    let caps = MODULE_MARKER.captures(line)?;
    let verdict = caps["verdict"].parse().ok()?;
    Some((caps["name"].to_string(), verdict))
}

/// Split numbered lines into module blocks, in order of appearance.
///
/// Lines that should open a module but do not are skipped with a warning.
/// A block still open at end of input keeps whatever it buffered. Duplicate
/// names are returned as-is; the report decides which one survives.
pub fn segment_modules<'a, I>(lines: I, warnings: &mut Vec<ParseWarning>) -> Vec<Module>
where
    I: IntoIterator<Item = (usize, &'a str)>,
{
    let mut lines = lines.into_iter();
    let mut modules = Vec::new();

    while let Some((line_number, line)) = lines.next() {
        let Some((name, verdict)) = parse_module_marker(line) else {
            warn!(line = line_number, content = %line, "Could not find module name");
            warnings.push(ParseWarning::MalformedModuleMarker {
                line_number,
                line: line.to_string(),
            });
            continue;
        };

        debug!(module = %name, verdict = %verdict, "Found module");

        let mut body = Vec::new();
        let mut terminated = false;
        for (_, line) in lines.by_ref() {
            if line.trim_end() == END_MODULE {
                terminated = true;
                break;
            }
            body.push(line.to_string());
        }

        if !terminated {
            warn!(module = %name, "Module is missing {END_MODULE} before end of input");
            warnings.push(ParseWarning::UnterminatedModule {
                module: name.clone(),
            });
        }

        modules.push(Module::new(name, verdict, body));
    }

    modules
}
