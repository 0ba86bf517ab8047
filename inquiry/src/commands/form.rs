use std::{future::Future, io::Write, pin::Pin};

use anyhow::Context;
use inquiry_config::Config;
use inquiry_core_form_contracts::{FormService, SubmitOutcome};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::{environment, ui};

type PendingSubmit = Pin<Box<dyn Future<Output = SubmitOutcome> + Send>>;

const HELP: &str = "\
Commands:
  <field> <value>  set name, email, subject or message (\\n starts a new line)
  submit           send the form
  show             print the form again
  help             print this help
  quit             leave (waits for a pending submission)
";

/// Runs the interactive contact form on stdin/stdout.
pub async fn invoke(config: Config) -> anyhow::Result<()> {
    let form = environment::build_form(&config)?;
    let input = BufReader::new(tokio::io::stdin());
    run(&form, &config.form.title, input, std::io::stdout()).await
}

/// Reads commands from `input` line by line and renders the form to `output`
/// after every change.
///
/// Edits are accepted while a submission is in flight. When `input` is
/// exhausted a pending submission is still awaited.
pub async fn run(
    form: &impl FormService,
    title: &str,
    input: impl AsyncBufRead + Unpin,
    mut output: impl Write,
) -> anyhow::Result<()> {
    let mut lines = input.lines();
    let mut pending: Option<PendingSubmit> = None;

    write!(output, "{}{HELP}", ui::render(title, &form.snapshot()))?;

    loop {
        tokio::select! {
            outcome = wait(&mut pending) => {
                pending = None;
                debug!(?outcome, "submission finished");
                write!(output, "{}", ui::render(title, &form.snapshot()))?;
            }
            line = lines.next_line() => {
                let line = line.context("Failed to read input")?;
                let Some(command) = line.as_deref().map_or(Some(Input::Quit), parse_input) else {
                    continue;
                };

                match command {
                    Input::Set { field, value } => {
                        if let Err(err) = form.on_field_change(&field, value) {
                            writeln!(output, "{err}")?;
                            continue;
                        }
                    }
                    Input::Submit => match form.on_submit() {
                        Ok(submit) => pending = Some(Box::pin(submit)),
                        // the submit control does nothing for invalid or busy forms
                        Err(err) => debug!("submit ignored: {err}"),
                    },
                    Input::Show => {}
                    Input::Help => {
                        write!(output, "{HELP}")?;
                        continue;
                    }
                    Input::Quit => {
                        if let Some(submit) = pending.take() {
                            writeln!(output, "Waiting for the submission to complete...")?;
                            submit.await;
                            write!(output, "{}", ui::render(title, &form.snapshot()))?;
                        }
                        return Ok(());
                    }
                }

                write!(output, "{}", ui::render(title, &form.snapshot()))?;
            }
        }
    }
}

async fn wait(pending: &mut Option<PendingSubmit>) -> SubmitOutcome {
    match pending {
        Some(submit) => submit.await,
        None => std::future::pending().await,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Set { field: String, value: String },
    Submit,
    Show,
    Help,
    Quit,
}

/// Returns `None` for blank lines.
pub fn parse_input(line: &str) -> Option<Input> {
    let line = line.trim_start();
    let (command, rest) = line.split_once(' ').unwrap_or((line.trim_end(), ""));

    Some(match command {
        "" => return None,
        "submit" => Input::Submit,
        "show" => Input::Show,
        "help" | "?" => Input::Help,
        "quit" | "exit" => Input::Quit,
        field => Input::Set {
            field: field.into(),
            value: rest.replace("\\n", "\n"),
        },
    })
}

#[cfg(test)]
mod tests {
    use std::{path::Path, time::Duration};

    use inquiry_models::form::FormValues;
    use inquiry_testing::inquiries::{self, FAILING_ROUTE, INQUIRIES_ROUTE};
    use pretty_assertions::assert_eq;
    use tokio::net::TcpListener;

    use super::*;

    #[test]
    fn parse() {
        assert_eq!(parse_input(""), None);
        assert_eq!(parse_input("   "), None);
        assert_eq!(parse_input("submit"), Some(Input::Submit));
        assert_eq!(parse_input("submit  "), Some(Input::Submit));
        assert_eq!(parse_input("show"), Some(Input::Show));
        assert_eq!(parse_input("?"), Some(Input::Help));
        assert_eq!(parse_input("exit"), Some(Input::Quit));
        assert_eq!(
            parse_input("name Max Mustermann"),
            Some(Input::Set {
                field: "name".into(),
                value: "Max Mustermann".into()
            })
        );
        assert_eq!(
            parse_input("message Hello\\nWorld"),
            Some(Input::Set {
                field: "message".into(),
                value: "Hello\nWorld".into()
            })
        );
        assert_eq!(
            parse_input("subject"),
            Some(Input::Set {
                field: "subject".into(),
                value: String::new()
            })
        );
    }

    #[tokio::test]
    async fn submit_ok() {
        let config = spawn_server(INQUIRIES_ROUTE).await;
        let form = environment::build_form(&config).unwrap();
        let input = "name Max Mustermann\n\
                     email max.mustermann@example.de\n\
                     message Hello World!\n\
                     submit\n";
        let mut output = Vec::new();

        run(&form, "Contact Us", input.as_bytes(), &mut output)
            .await
            .unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains(ui::BUSY_INDICATOR));
        assert!(output.ends_with(&ui::render(
            "Contact Us",
            &form.snapshot()
        )));
        assert_eq!(
            form.snapshot().status.success_message(),
            "Your entry has been received."
        );
        assert_eq!(form.snapshot().values, FormValues::default());
    }

    #[tokio::test]
    async fn submit_rejected() {
        let config = spawn_server(FAILING_ROUTE).await;
        let form = environment::build_form(&config).unwrap();
        let input = "name Max Mustermann\n\
                     email max.mustermann@example.de\n\
                     message Hello World!\n\
                     submit\n\
                     quit\n";
        let mut output = Vec::new();

        run(&form, "Contact Us", input.as_bytes(), &mut output)
            .await
            .unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("We're sorry, but your submission was not successful."));
        assert_eq!(form.snapshot().values.name, "Max Mustermann");
    }

    #[tokio::test]
    async fn submit_invalid_form_is_ignored() {
        let config = spawn_server(INQUIRIES_ROUTE).await;
        let form = environment::build_form(&config).unwrap();
        let input = "name Max Mustermann\nsubmit\n";
        let mut output = Vec::new();

        run(&form, "Contact Us", input.as_bytes(), &mut output)
            .await
            .unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(!output.contains(ui::BUSY_INDICATOR));
        assert!(output.contains("! Email is required!"));
        assert!(!form.snapshot().status.has_message());
    }

    #[tokio::test]
    async fn unknown_field() {
        let config = spawn_server(INQUIRIES_ROUTE).await;
        let form = environment::build_form(&config).unwrap();
        let mut output = Vec::new();

        run(&form, "Contact Us", "phone 0123\n".as_bytes(), &mut output)
            .await
            .unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Unknown field \"phone\"."));
    }

    async fn spawn_server(route: &str) -> Config {
        let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(inquiries::serve(listener, Duration::from_millis(50)));

        let endpoint = format!("api.endpoint = \"http://{addr}{route}\"");
        inquiry_config::load_with_override(&[] as &[&Path], &[&endpoint]).unwrap()
    }
}
