// ============================================================
// Layer 1: Interactive Form Collector
// ============================================================
// Asks for each field in turn:
//
//   Job Family * [Technology/Sales/HR/Operations] (default: Technology):
//
// An empty answer takes the default, an invalid answer prints why
// and asks again, and EOF at any prompt ends the session. Generic
// over the reader and writer so tests can drive it with byte slices.

use anyhow::Result;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::domain::error::ParseFieldError;
use crate::domain::hiring::{
    Assessment, CandidateSource, City, InputRecord, JobBand, JobFamily, NoticePeriod,
    EXPERIENCE_MAX, PANEL_DAYS_MAX, ROUNDS_MAX, ROUNDS_MIN,
};

pub struct FormCollector<R, W> {
    input:  R,
    output: W,
}

impl<R: BufRead, W: Write> FormCollector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Collect one complete record, or None if input ended.
    ///
    /// The job role may come back empty; rejecting it is the
    /// use case's job, not the form's.
    pub fn collect(&mut self) -> Result<Option<InputRecord>> {
        let d = InputRecord::default();

        writeln!(self.output, "\n📌 Role Details")?;
        let Some(job_family) = self.ask_choice("Job Family", JobFamily::ALL, d.job_family)? else {
            return Ok(None);
        };
        let Some(job_role) = self.ask_text("Job Role (e.g. Data Engineer)")? else {
            return Ok(None);
        };
        let Some(job_band) = self.ask_choice("Job Band", JobBand::ALL, d.job_band)? else {
            return Ok(None);
        };
        let Some(experience_years) =
            self.ask_number("Experience Required (Years)", 0..=EXPERIENCE_MAX, d.experience_years)?
        else {
            return Ok(None);
        };

        writeln!(self.output, "\n🏢 Location & Source")?;
        let Some(city) = self.ask_choice("City", City::ALL, d.city)? else {
            return Ok(None);
        };
        let Some(candidate_source) =
            self.ask_choice("Candidate Source", CandidateSource::ALL, d.candidate_source)?
        else {
            return Ok(None);
        };
        let Some(assessment) = self.ask_choice("Assessment Included", Assessment::ALL, d.assessment)? else {
            return Ok(None);
        };
        let Some(notice_period) =
            self.ask_choice("Notice Period (Days)", NoticePeriod::ALL, d.notice_period)?
        else {
            return Ok(None);
        };

        writeln!(self.output, "\n🧪 Interview Process")?;
        let Some(panel_availability_days) = self.ask_number(
            "Panel Availability (Days)",
            0..=PANEL_DAYS_MAX,
            d.panel_availability_days,
        )?
        else {
            return Ok(None);
        };
        let Some(interview_rounds) =
            self.ask_number("Total Interview Rounds", ROUNDS_MIN..=ROUNDS_MAX, d.interview_rounds)?
        else {
            return Ok(None);
        };

        Ok(Some(InputRecord {
            job_family,
            job_role,
            job_band,
            experience_years,
            city,
            candidate_source,
            assessment,
            notice_period,
            panel_availability_days,
            interview_rounds,
        }))
    }

    /// Ask whether to go again. Anything but "q"/"quit" continues;
    /// EOF stops.
    pub fn ask_continue(&mut self) -> Result<bool> {
        write!(self.output, "\nPress Enter for another prediction, or 'q' to quit: ")?;
        self.output.flush()?;
        Ok(match self.read_line()? {
            None       => false,
            Some(line) => !matches!(line.trim(), "q" | "Q" | "quit" | "exit"),
        })
    }

    /// Print a block of text (results, warnings) between prompts.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    fn ask_choice<T>(&mut self, label: &str, options: &[T], default: T) -> Result<Option<T>>
    where
        T: FromStr<Err = ParseFieldError> + Display + Copy,
    {
        let listed = options.iter().map(|o| o.to_string()).collect::<Vec<_>>().join("/");
        loop {
            write!(self.output, "{label} * [{listed}] (default: {default}): ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else { return Ok(None) };
            let answer = line.trim();
            if answer.is_empty() {
                return Ok(Some(default));
            }
            match answer.parse::<T>() {
                Ok(v)  => return Ok(Some(v)),
                Err(e) => writeln!(self.output, "  {e}")?,
            }
        }
    }

    fn ask_number(
        &mut self,
        label:   &str,
        range:   RangeInclusive<u32>,
        default: u32,
    ) -> Result<Option<u32>> {
        loop {
            write!(
                self.output,
                "{label} * [{}-{}] (default: {default}): ",
                range.start(),
                range.end()
            )?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else { return Ok(None) };
            let answer = line.trim();
            if answer.is_empty() {
                return Ok(Some(default));
            }
            match answer.parse::<u32>() {
                Ok(n) if range.contains(&n) => return Ok(Some(n)),
                _ => writeln!(
                    self.output,
                    "  enter a whole number from {} to {}",
                    range.start(),
                    range.end()
                )?,
            }
        }
    }

    /// Free text, kept verbatim apart from the line terminator.
    fn ask_text(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label} *: ")?;
        self.output.flush()?;
        self.read_line()
    }

    /// One line without its trailing "\n" / "\r\n", or None at EOF.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
