use eyre::{Result, bail};

use mindcare_client::services::assessment;
use mindcare_instruments::InstrumentKind;
use mindcare_instruments::questionnaire::Questionnaire;
use mindcare_instruments::scoring::ScoreResult;

use super::{Context, require_user_id};

#[derive(Debug, clap::Args)]
pub struct Score {
    /// phq9 or gad7
    instrument: InstrumentKind,

    /// One answer per question, 0-3; -1 marks a question as unanswered
    #[arg(num_args = 1.., allow_negative_numbers = true)]
    answers: Vec<i32>,

    /// Refuse unanswered questions
    #[arg(long)]
    strict: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

impl Score {
    pub fn run(self) -> Result<()> {
        let instrument = self.instrument.instrument();
        let errors = instrument.validate_answers(&self.answers, !self.strict);
        if !errors.is_empty() {
            let messages: Vec<_> = errors.iter().map(|e| e.message.as_str()).collect();
            bail!("{}", messages.join("\n"));
        }

        let result = instrument.score(&self.answers);
        if self.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            print_result(self.instrument, &result);
        }
        Ok(())
    }
}

#[derive(Debug, clap::Args)]
pub struct Questions {
    /// phq9 or gad7
    instrument: InstrumentKind,
}

impl Questions {
    pub fn run(self) -> Result<()> {
        let instrument = self.instrument.instrument();
        println!("{} ({})", instrument.name(), instrument.description());
        println!("Over the last 2 weeks, how often have you been bothered by the following?\n");
        for (i, question) in instrument.questions().iter().enumerate() {
            println!("{:>2}. {question}", i + 1);
        }
        println!();
        for option in instrument.options() {
            println!("  {} = {}", option.value, option.label);
        }
        Ok(())
    }
}

#[derive(Debug, clap::Args)]
pub struct Submit {
    /// phq9 or gad7
    instrument: InstrumentKind,

    /// One answer per question, 0-3
    #[arg(num_args = 1..)]
    answers: Vec<i32>,
}

impl Submit {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        let mut questionnaire = Questionnaire::new(self.instrument);
        if self.answers.len() != questionnaire.answers().len() {
            bail!(
                "{} has {} questions, got {} answers",
                self.instrument,
                questionnaire.answers().len(),
                self.answers.len()
            );
        }
        for (index, &value) in self.answers.iter().enumerate() {
            questionnaire.answer_at(index, value)?;
        }
        let result = questionnaire.finish()?;

        let client = ctx.client()?;
        let user_id = require_user_id(&client)?;
        let record = assessment::submit_questionnaire(&client, &questionnaire, &user_id).await?;

        print_result(self.instrument, &result);
        println!("\nSaved as {} ({}).", record.id, record.created_at);
        Ok(())
    }
}

pub async fn latest_scores(ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let user_id = require_user_id(&client)?;
    let summary = assessment::get_scores(&client, &user_id).await?;

    let date = |d: Option<mindcare_core::time::Timestamp>| {
        d.map(|ts| ts.strftime("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "never".to_string())
    };
    println!(
        "PHQ-9: {:>2}/27  {:<18} {}",
        summary.phq9_score,
        summary.phq9_severity,
        date(summary.phq9_date)
    );
    println!(
        "GAD-7: {:>2}/21  {:<18} {}",
        summary.gad7_score,
        summary.gad7_severity,
        date(summary.gad7_date)
    );
    Ok(())
}

fn print_result(kind: InstrumentKind, result: &ScoreResult) {
    let instrument = kind.instrument();
    println!(
        "{}: {} out of {} \u{2022} {}",
        instrument.name(),
        result.total,
        result.max_score,
        result.severity
    );
    println!("\nWhat this means:\n{}", instrument.guidance(result.total));
    println!(
        "\nNote: This assessment is not a diagnosis. It's a tool to help you understand your feelings better."
    );
}
