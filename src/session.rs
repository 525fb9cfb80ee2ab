use crate::app::App;
use core_types::{CoreError, FieldUpdate};
use risk::FormState;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Update(FieldUpdate),
    Show,
    Reset,
    Export(Option<PathBuf>),
    Help,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = CoreError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match word {
            "show" => Ok(SessionCommand::Show),
            "reset" => Ok(SessionCommand::Reset),
            "help" | "?" => Ok(SessionCommand::Help),
            "quit" | "exit" => Ok(SessionCommand::Quit),
            "export" => Ok(SessionCommand::Export(
                (!rest.is_empty()).then(|| PathBuf::from(rest)),
            )),
            _ => line.parse::<FieldUpdate>().map(SessionCommand::Update),
        }
    }
}

const HELP: &str = "\
Commands:
  <field>=<value>   set a field (symbolName, investmentAmount, riskPercent,
                    riskPrice, profitLimit, buyPrice, lossLimit)
  show              print the summary
  reset             clear every field
  export [dir]      write the summary document
  quit              leave the session";

/// Runs the line-oriented form until `quit` or end of input.
///
/// Every accepted field update re-renders the summary. Bad lines are reported
/// and skipped; only I/O failures end the session early.
pub fn run<R: BufRead, W: Write>(app: &App, input: R, out: &mut W) -> anyhow::Result<()> {
    let mut form = FormState::new();
    writeln!(out, "Enter <field>=<value>, or 'help'.")?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<SessionCommand>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "error: {e}")?;
                continue;
            }
        };

        match command {
            SessionCommand::Update(update) => {
                form.apply(&update);
                print_summary(app, &form, out)?;
            }
            SessionCommand::Show => print_summary(app, &form, out)?,
            SessionCommand::Reset => {
                form.reset();
                print_summary(app, &form, out)?;
            }
            SessionCommand::Export(dir) => {
                let view = app.view(form.params())?;
                match app.export(&view, dir.as_deref(), None) {
                    Ok(path) => writeln!(out, "Exported to {}", path.display())?,
                    Err(e) => writeln!(out, "error: {e:#}")?,
                }
            }
            SessionCommand::Help => writeln!(out, "{HELP}")?,
            SessionCommand::Quit => break,
        }
    }

    Ok(())
}

fn print_summary<W: Write>(app: &App, form: &FormState, out: &mut W) -> anyhow::Result<()> {
    let view = app.view(form.params())?;
    app.write_summary(&view, out)?;
    Ok(())
}
