use anyhow::{anyhow, bail};
use clap::Args;
use inquiry_config::Config;
use inquiry_core_form_contracts::{FormService, FormSubmitError, SubmitOutcome};
use inquiry_models::form::FieldId;

use crate::environment;

#[derive(Debug, Args)]
pub struct SubmitCommand {
    /// Your name
    #[arg(long)]
    name: String,
    /// Your email address
    #[arg(long)]
    email: String,
    /// Subject of the inquiry
    #[arg(long, default_value = "")]
    subject: String,
    /// The inquiry itself
    #[arg(long)]
    message: String,
}

impl SubmitCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let form = environment::build_form(&config)?;
        let message = self.submit(&form).await?;
        println!("{message}");
        Ok(())
    }

    /// Fills in the form, submits it and returns the success message.
    pub async fn submit(self, form: &impl FormService) -> anyhow::Result<String> {
        for (field, value) in [
            (FieldId::Name, self.name),
            (FieldId::Email, self.email),
            (FieldId::Subject, self.subject),
            (FieldId::Message, self.message),
        ] {
            form.on_field_change(field.as_str(), value)?;
        }

        let pending = form.on_submit().map_err(|err| match err {
            FormSubmitError::Invalid => {
                let snapshot = form.snapshot();
                let errors = FieldId::ALL
                    .into_iter()
                    .filter_map(|field| {
                        snapshot
                            .field_error(field)
                            .map(|error| format!("  {field}: {error}"))
                    })
                    .collect::<Vec<_>>();
                anyhow!("{err}\n{}", errors.join("\n"))
            }
            FormSubmitError::Busy => err.into(),
        })?;

        match pending.await {
            SubmitOutcome::Succeeded { .. } => Ok(form.snapshot().status.success_message().into()),
            SubmitOutcome::Failed { message } => bail!(message),
            SubmitOutcome::Discarded => bail!("The submission was discarded."),
        }
    }
}
