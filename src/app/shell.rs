use crate::app::render::{render_text, render_department_bar};
use crate::core::browser::{Browser, FilterEvent};
use crate::utils::error::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub const HELP: &str = "\
Type text to search by course name or id.
  :dept <id>    select a department (:depts lists them)
  :clear        clear the search
  :reset        show all courses
  :join <id>    print the course's WhatsApp group link
  :help         this help
  :quit         exit
Start a search with \\: to search for text beginning with ':'.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Filter(FilterEvent),
    Join(String),
    Departments,
    Help,
    Quit,
    Unknown(String),
}

/// Maps one input line to a command. Anything that is not a `:` command is
/// the new raw search text.
pub fn parse_command(line: &str) -> ShellCommand {
    let line = line.strip_suffix('\r').unwrap_or(line);

    if let Some(escaped) = line.strip_prefix('\\').filter(|rest| rest.starts_with(':')) {
        return ShellCommand::Filter(FilterEvent::SetQuery(escaped.to_string()));
    }

    let Some(command) = line.strip_prefix(':') else {
        return ShellCommand::Filter(FilterEvent::SetQuery(line.to_string()));
    };

    let mut parts = command.trim().splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or_default();
    let arg = parts.next().map(str::trim).unwrap_or_default();

    match (name, arg) {
        ("dept" | "d", id) if !id.is_empty() => {
            ShellCommand::Filter(FilterEvent::SelectDepartment(id.to_string()))
        }
        ("clear", "") => ShellCommand::Filter(FilterEvent::ClearQuery),
        ("reset", "") => ShellCommand::Filter(FilterEvent::Reset),
        ("join" | "j", id) if !id.is_empty() => ShellCommand::Join(id.to_string()),
        ("depts", "") => ShellCommand::Departments,
        ("help" | "h" | "?", "") => ShellCommand::Help,
        ("quit" | "q" | "exit", "") => ShellCommand::Quit,
        _ => ShellCommand::Unknown(line.to_string()),
    }
}

/// Runs the interactive loop until `:quit` or end of input, re-rendering
/// after every filter event.
pub async fn run_shell<R, W>(browser: &mut Browser, title: &str, reader: R, mut writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    writer
        .write_all(format!("{}\n\n", render_text(browser, title)).as_bytes())
        .await?;
    writer.write_all(b"> ").await?;
    writer.flush().await?;

    while let Some(line) = lines.next_line().await? {
        let output = match parse_command(&line) {
            ShellCommand::Filter(event) => {
                browser.apply(event);
                render_text(browser, title)
            }
            ShellCommand::Join(id) => match browser.join_link(&id) {
                Ok(link) => format!("Open in your browser: {}", link),
                Err(e) => {
                    tracing::debug!("Join failed: {}", e);
                    format!("{}. {}", e.user_friendly_message(), e.recovery_suggestion())
                }
            },
            ShellCommand::Departments => browser
                .departments()
                .iter()
                .map(|d| format!("  {:<12} {}", d.id, d.name))
                .chain(std::iter::once(render_department_bar(browser)))
                .collect::<Vec<_>>()
                .join("\n"),
            ShellCommand::Help => HELP.to_string(),
            ShellCommand::Quit => break,
            ShellCommand::Unknown(input) => format!("Unknown command: {} (:help for commands)", input),
        };

        writer.write_all(format!("{}\n\n> ", output).as_bytes()).await?;
        writer.flush().await?;
    }

    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{default_departments, Catalog, Course};

    #[test]
    fn test_plain_text_is_raw_query() {
        assert_eq!(
            parse_command("  Intro "),
            ShellCommand::Filter(FilterEvent::SetQuery("  Intro ".to_string()))
        );
        assert_eq!(
            parse_command(""),
            ShellCommand::Filter(FilterEvent::SetQuery(String::new()))
        );
        assert_eq!(
            parse_command("\\:colon\r"),
            ShellCommand::Filter(FilterEvent::SetQuery(":colon".to_string()))
        );
    }

    #[test]
    fn test_commands() {
        assert_eq!(
            parse_command(":dept business"),
            ShellCommand::Filter(FilterEvent::SelectDepartment("business".to_string()))
        );
        assert_eq!(parse_command(":clear"), ShellCommand::Filter(FilterEvent::ClearQuery));
        assert_eq!(parse_command(":reset"), ShellCommand::Filter(FilterEvent::Reset));
        assert_eq!(parse_command(":join CS101"), ShellCommand::Join("CS101".to_string()));
        assert_eq!(parse_command(":depts"), ShellCommand::Departments);
        assert_eq!(parse_command(":q"), ShellCommand::Quit);
        assert!(matches!(parse_command(":dept"), ShellCommand::Unknown(_)));
        assert!(matches!(parse_command(":bogus"), ShellCommand::Unknown(_)));
    }

    #[tokio::test]
    async fn test_session_applies_events_in_order() {
        let mut browser = Browser::new(
            Catalog::new(vec![
                Course::new("CS101", "Intro to Programming", "Computer Science", "https://chat.whatsapp.com/cs101"),
                Course::new("BUS200", "Marketing Basics", "Business School", "https://chat.whatsapp.com/bus200"),
            ]),
            default_departments(),
        );
        let input: &[u8] = b"market\n:dept cs\n:join bus200\n:reset\n:quit\nignored\n";
        let mut output = Vec::new();

        run_shell(&mut browser, "CourseConnect", input, &mut output)
            .await
            .unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("No courses found matching your criteria"));
        assert!(output.contains("Open in your browser: https://chat.whatsapp.com/bus200"));
        assert!(browser.state().is_default());
        assert_eq!(browser.visible().len(), 2);
    }
}
