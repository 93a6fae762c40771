//! Experience stream parser
//!
//! Walks the residual line stream once. A line carrying a year range opens a
//! new entry; the lines that follow are buffered until the next year range,
//! a blank line, or the end of the stream, at which point the buffer is
//! flushed into an [`Experience`].
//!
//! ```text
//!   Idle --year range--> Accumulating --year range--> (flush) Accumulating
//!                             |  ^
//!                     blank   |  | other line (buffered)
//!                             v  |
//!                     (flush) Idle
//! ```

use crate::models::Experience;
use crate::parsing::defaults::{BULLET_TRIM, PLACEHOLDER_ROLE, UNKNOWN_DATE};
use crate::parsing::entities::dedup_preserving_order;
use crate::parsing::patterns::{
    find_year_range, is_bullet, split_trimmed, strip_year_ranges, YearRange, TECHNOLOGY_SEPARATOR,
};
use crate::parsing::text::sanitize_line;
use log::debug;

/// Bounds applied while building experiences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceLimits {
    pub max_experiences: usize,
    pub max_achievements: usize,
    pub max_technologies: usize,
}

impl Default for ExperienceLimits {
    fn default() -> Self {
        Self {
            max_experiences: 8,
            max_achievements: 5,
            max_technologies: 8,
        }
    }
}

/// Current state of the stream parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamState {
    Idle,
    Accumulating {
        /// First line is the entry header.
        buffer: Vec<String>,
        dates: Option<YearRange>,
    },
}

/// What a single line did to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A year range flushed the previous entry (if any) and opened a new one.
    Opened,
    Buffered,
    /// A blank line closed the current entry.
    Closed,
    Ignored,
}

pub struct ExperienceStream {
    state: StreamState,
    limits: ExperienceLimits,
    completed: Vec<Experience>,
}

impl Default for ExperienceStream {
    fn default() -> Self {
        Self::new(ExperienceLimits::default())
    }
}

impl ExperienceStream {
    pub fn new(limits: ExperienceLimits) -> Self {
        Self {
            state: StreamState::Idle,
            limits,
            completed: Vec::new(),
        }
    }

    pub fn state(&self) -> &StreamState {
        &self.state
    }

    pub fn completed(&self) -> &[Experience] {
        &self.completed
    }

    /// Feed one raw line to the state machine.
    pub fn push_line(&mut self, line: &str) -> Transition {
        let clean = sanitize_line(line);

        if let Some(range) = find_year_range(&clean) {
            self.flush();
            let header = strip_year_ranges(&clean);
            let seed = if header.is_empty() { clean } else { header };
            self.state = StreamState::Accumulating {
                buffer: vec![seed],
                dates: Some(range),
            };
            return Transition::Opened;
        }

        if clean.is_empty() {
            if self.state == StreamState::Idle {
                return Transition::Ignored;
            }
            self.flush();
            return Transition::Closed;
        }

        match &mut self.state {
            StreamState::Idle => Transition::Ignored,
            StreamState::Accumulating { buffer, .. } => {
                buffer.push(clean);
                Transition::Buffered
            }
        }
    }

    /// Turn the pending buffer into an experience and go back to idle.
    pub fn flush(&mut self) {
        let state = std::mem::replace(&mut self.state, StreamState::Idle);
        if let StreamState::Accumulating { buffer, dates } = state {
            if let Some(experience) = build_experience(&buffer, dates, &self.limits) {
                self.completed.push(experience);
            }
        }
    }

    /// Final flush, then the bounded list of experiences.
    pub fn finish(mut self) -> Vec<Experience> {
        self.flush();
        let mut experiences = self.completed;
        experiences.truncate(self.limits.max_experiences);
        experiences
    }
}

/// Run the stream parser over `lines`.
pub fn parse_experiences<S: AsRef<str>>(lines: &[S], limits: ExperienceLimits) -> Vec<Experience> {
    let mut stream = ExperienceStream::new(limits);
    for line in lines {
        stream.push_line(line.as_ref());
    }
    let experiences = stream.finish();
    debug!("Parsed {} experiences from {} lines", experiences.len(), lines.len());
    experiences
}

/// Split a header into (company, role).
pub fn split_header(header: &str) -> (String, String) {
    let fragments: Vec<&str> = header
        .split('-')
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect();

    match fragments.as_slice() {
        [company, role, ..] => (company.to_string(), role.to_string()),
        _ => (header.to_string(), PLACEHOLDER_ROLE.to_string()),
    }
}

fn build_experience(buffer: &[String], dates: Option<YearRange>, limits: &ExperienceLimits) -> Option<Experience> {
    let (header, body) = buffer.split_first()?;
    let (company, role) = split_header(header);

    let mut achievements = Vec::new();
    let mut technologies = Vec::new();

    for line in body {
        let clean = line.trim_matches(BULLET_TRIM);
        if clean.is_empty() {
            continue;
        }
        if is_bullet(line) {
            achievements.push(clean.to_string());
        } else {
            technologies.extend(split_trimmed(&TECHNOLOGY_SEPARATOR, clean).into_iter().map(str::to_string));
        }
    }

    achievements.truncate(limits.max_achievements);
    let mut technologies = dedup_preserving_order(technologies);
    technologies.truncate(limits.max_technologies);

    let YearRange { start, end } = dates.unwrap_or(YearRange {
        start: UNKNOWN_DATE.to_string(),
        end: None,
    });

    let mut experience = Experience::new(company, role, start);
    experience.end_date = end;
    experience.achievements = achievements;
    experience.technologies = technologies;
    Some(experience)
}
