use crate::core::browser::Browser;
use crate::domain::model::Course;
use crate::utils::error::{DirectoryError, Result};
use serde::Serialize;
use std::fmt::Write as _;

pub const NO_RESULTS_MESSAGE: &str = "No courses found matching your criteria";
pub const RESET_LABEL: &str = "Show All Courses";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Serialize)]
struct JsonView<'a> {
    query: &'a str,
    department: &'a str,
    total: usize,
    courses: &'a [Course],
}

pub fn render(browser: &Browser, format: OutputFormat, title: &str) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(browser, title)),
        OutputFormat::Json => render_json(browser),
        OutputFormat::Csv => render_csv(browser.visible()),
    }
}

/// The department bar, with the selected entry in brackets.
pub fn render_department_bar(browser: &Browser) -> String {
    browser
        .departments()
        .iter()
        .map(|d| {
            if browser.is_department_selected(d) {
                format!("[{}]", d.name)
            } else {
                d.name.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

pub fn render_course(course: &Course) -> String {
    format!(
        "{}  ({})\n  {}\n  Join WhatsApp Group → {}\n",
        course.id, course.department, course.name, course.whatsapp_link
    )
}

pub fn render_text(browser: &Browser, title: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} (Beta)", title);
    let _ = writeln!(out, "{}", render_department_bar(browser));

    let state = browser.state();
    if !state.query.is_empty() {
        let _ = writeln!(out, "Search: \"{}\"  (:clear to clear)", state.query);
    }
    let _ = writeln!(out);

    if browser.visible().is_empty() {
        let _ = writeln!(out, "{}", NO_RESULTS_MESSAGE);
        let _ = writeln!(out, "{}: type :reset", RESET_LABEL);
        return out;
    }

    for course in browser.visible() {
        let _ = writeln!(out, "{}", render_course(course));
    }
    let _ = write!(
        out,
        "{} of {} courses",
        browser.visible().len(),
        browser.catalog().len()
    );
    out
}

fn render_json(browser: &Browser) -> Result<String> {
    let state = browser.state();
    let view = JsonView {
        query: &state.query,
        department: &state.department_id,
        total: browser.catalog().len(),
        courses: browser.visible(),
    };
    Ok(serde_json::to_string_pretty(&view)?)
}

fn render_csv(courses: &[Course]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for course in courses {
        writer.serialize(course)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| DirectoryError::IoError(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
