//! The prompt loop, generic over its input and output streams.

use std::io::{self, BufRead, Write};

use nav_core::GeoPoint;
use nav_query::{Campus, Leg, QueryError};
use nav_spatial::Building;

/// Typed as the first answer, ends the session.
const QUIT: &str = "#";

const PROMPT_FIRST: &str = "Enter person 1's building (partial name or abbreviation), or #> ";
const PROMPT_SECOND: &str = "Enter person 2's building (partial name or abbreviation)> ";

pub struct Session<'a> {
    campus:    &'a Campus,
    precision: usize,
}

impl<'a> Session<'a> {
    pub fn new(campus: &'a Campus, precision: usize) -> Self {
        Self { campus, precision: precision.max(1) }
    }

    /// Answer rounds until `#` or end of input.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut out: W) -> io::Result<()> {
        loop {
            writeln!(out)?;
            write!(out, "{PROMPT_FIRST}")?;
            out.flush()?;
            let Some(first) = read_answer(&mut input)? else { break };
            if first == QUIT {
                break;
            }

            write!(out, "{PROMPT_SECOND}")?;
            out.flush()?;
            let second = read_answer(&mut input)?.unwrap_or_default();

            self.round(&first, &second, &mut out)?;
        }
        writeln!(out)?;
        out.flush()
    }

    fn round<W: Write>(&self, first: &str, second: &str, out: &mut W) -> io::Result<()> {
        let plan = match self.campus.plan_meeting(first, second) {
            Ok(plan) => plan,
            Err(QueryError::PersonNotFound { person, .. }) => {
                return writeln!(out, "Person {person}'s building not found");
            }
            Err(err) => return writeln!(out, "{err}"),
        };

        writeln!(out)?;
        self.building(out, "Person 1's point:", &plan.origins[0])?;
        self.building(out, "Person 2's point:", &plan.origins[1])?;
        self.building(out, "Destination Building:", &plan.destination)?;
        writeln!(out)?;

        let Some(routes) = plan.routes() else {
            writeln!(
                out,
                "At least one person was unable to reach the destination building. Is an edge missing?"
            )?;
            for (person, leg) in (1..).zip(&plan.legs) {
                if *leg == Leg::Unreachable {
                    tracing::warn!(person, destination = %plan.destination.id, "destination unreachable");
                }
            }
            return writeln!(out);
        };

        for (person, route) in (1..).zip(routes) {
            if person > 1 {
                writeln!(out)?;
            }
            writeln!(out, "Person {person}'s distance to dest: {} miles", significant(route.miles, self.precision))?;
            writeln!(out, "Path: {route}")?;
        }
        Ok(())
    }

    fn building<W: Write>(&self, out: &mut W, heading: &str, building: &Building) -> io::Result<()> {
        writeln!(out, "{heading}")?;
        writeln!(out, " {}", building.name)?;
        writeln!(out, " {}", building.id)?;
        writeln!(out, " {}", self.point(building.location))
    }

    fn point(&self, p: GeoPoint) -> String {
        format!("({}, {})", significant(p.lat, self.precision), significant(p.lon, self.precision))
    }
}

/// Next line without its terminator, or `None` at end of input.
fn read_answer<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

/// Format `x` with `digits` significant digits, dropping trailing zeros.
fn significant(x: f64, digits: usize) -> String {
    if x == 0.0 || !x.is_finite() {
        return x.to_string();
    }
    let magnitude = x.abs().log10().floor() as i32;
    let decimals = (digits as i32 - 1 - magnitude).max(0) as usize;
    let s = format!("{x:.decimals$}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}
