use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::present::DialogView;
use crate::validate::{
    validate_accept_rules, validate_age, validate_hours, validate_name, validate_role,
};
use crate::{CheckinError, DecisionResult, UserRecord, ValidationError, evaluate};

/// Sequential prompt collector.
///
/// Asks one question at a time on `output` and reads the answer from `input`,
/// repeating a question until its validator accepts the answer.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask `question` until `validate` accepts the answer.
    ///
    /// # Errors
    ///
    /// Returns [`CheckinError::InputClosed`] if input ends first, or
    /// [`CheckinError::Io`] if reading or writing fails.
    pub fn ask<T>(
        &mut self,
        question: &str,
        validate: impl Fn(&str) -> Result<T, ValidationError>,
    ) -> Result<T, CheckinError> {
        loop {
            write!(self.output, "{question} ")?;
            self.output.flush()?;

            let mut answer = String::new();
            if self.input.read_line(&mut answer)? == 0 {
                return Err(CheckinError::InputClosed);
            }

            match validate(&answer) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    debug!(question, error = %err, "answer rejected");
                    writeln!(self.output, "{err}")?;
                }
            }
        }
    }

    /// Collect every field of a [`UserRecord`] in order.
    ///
    /// # Errors
    ///
    /// See [`ask()`](Self::ask).
    pub fn collect_user(&mut self) -> Result<UserRecord, CheckinError> {
        Ok(UserRecord {
            full_name: self.ask("Enter your full name:", validate_name)?,
            age: self.ask("Enter your age:", validate_age)?,
            role: self.ask("Enter your role (coder / tutor / visitor):", validate_role)?,
            accepted_rules: self.ask(
                "Do you accept the lab rules? (yes / no):",
                validate_accept_rules,
            )?,
            available_hours: self.ask(
                "How many hours are you available today? (1–12):",
                validate_hours,
            )?,
        })
    }

    /// Show `message` on its own lines.
    ///
    /// # Errors
    ///
    /// Returns [`CheckinError::Io`] if writing fails.
    pub fn alert(&mut self, message: &str) -> Result<(), CheckinError> {
        writeln!(self.output, "{message}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Full prompt check-in: collect, evaluate, and show the dialog message.
    ///
    /// # Errors
    ///
    /// See [`ask()`](Self::ask).
    pub fn run(&mut self) -> Result<(UserRecord, DecisionResult), CheckinError> {
        let user = self.collect_user()?;
        debug!(?user, "collected user");
        self.alert(DialogView::PROCESSING)?;

        for step in DialogView::STEPS {
            debug!("step: {step}");
        }

        let result = evaluate(&user);
        info!(
            role = %user.role,
            decision = DialogView::label(result.decision()),
            "check-in complete"
        );
        self.alert(&DialogView::message(result, &user))?;
        Ok((user, result))
    }

    /// Give back the writer, e.g. to inspect what was shown.
    pub fn into_output(self) -> W {
        self.output
    }
}
