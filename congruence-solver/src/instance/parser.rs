use std::io::BufRead;
use std::io::BufReader;
use std::io::Read;

use thiserror::Error;

use super::Equation;
use super::InstanceConfiguration;

#[derive(Debug, Error)]
pub enum InstanceParseError {
    #[error("failed to read file")]
    Io(#[from] std::io::Error),

    #[error("line {line}: '{token}' is not a 32-bit integer")]
    InvalidInteger { line: usize, token: String },

    #[error("line {line}: the domain [{lower_bound}, {upper_bound}] is empty")]
    EmptyDomain {
        line: usize,
        lower_bound: i32,
        upper_bound: i32,
    },

    #[error("line {line}: an instance must group at least one equation, got {size}")]
    InvalidGroupSize { line: usize, size: i32 },

    #[error("line {line}: equation given before any domain bounds")]
    MissingDomainBounds { line: usize },

    #[error("line {line}: expected an equation with {expected} coefficients, found {found}")]
    EquationLengthMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// Reads a batch of instances.
///
/// Every non-empty line is a row of integers, separated by whitespace or commas. Anything after
/// a `%` or `#` is a comment. The number of integers on a row determines its meaning:
///  - 2 integers `lo hi`: the domain bounds of the variables of all following instances;
///  - 1 integer `n`: all following instances group `n` equations (initially 1);
///  - 3 or more integers `c a_0 a_1 ...`: the equation `Σ a_i · x_i = c`.
///
/// An instance is complete once it holds the required number of equations. An empty line, a
/// change of the domain bounds or of the group size, and the end of the source finish an
/// incomplete instance early.
pub fn parse_instances(
    source: impl Read,
) -> Result<Vec<InstanceConfiguration>, InstanceParseError> {
    let reader = BufReader::new(source);
    let mut parser = InstanceParser::default();

    for (index, line) in reader.lines().enumerate() {
        parser.parse_line(index + 1, &line?)?;
    }
    parser.flush();

    Ok(parser.instances)
}

#[derive(Debug)]
struct InstanceParser {
    instances: Vec<InstanceConfiguration>,
    domain_bounds: Option<(i32, i32)>,
    group_size: usize,
    pending: Vec<Equation>,
}

impl Default for InstanceParser {
    fn default() -> Self {
        InstanceParser {
            instances: vec![],
            domain_bounds: None,
            group_size: 1,
            pending: vec![],
        }
    }
}

impl InstanceParser {
    fn parse_line(&mut self, line: usize, text: &str) -> Result<(), InstanceParseError> {
        let content = match text.find(|c: char| c == '%' || c == '#') {
            Some(comment_start) => &text[..comment_start],
            None => text,
        };

        let row = content
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<i32>()
                    .map_err(|_| InstanceParseError::InvalidInteger {
                        line,
                        token: token.to_owned(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        match row.as_slice() {
            // Comment-only lines do not separate groups.
            [] if content.len() < text.len() => {}
            [] => self.flush(),
            [size] => {
                if *size < 1 {
                    return Err(InstanceParseError::InvalidGroupSize { line, size: *size });
                }
                self.flush();
                self.group_size = *size as usize;
            }
            [lower_bound, upper_bound] => {
                if lower_bound > upper_bound {
                    return Err(InstanceParseError::EmptyDomain {
                        line,
                        lower_bound: *lower_bound,
                        upper_bound: *upper_bound,
                    });
                }
                self.flush();
                self.domain_bounds = Some((*lower_bound, *upper_bound));
            }
            [rhs, coefficients @ ..] => self.add_equation(line, *rhs, coefficients)?,
        }

        Ok(())
    }

    fn add_equation(
        &mut self,
        line: usize,
        rhs: i32,
        coefficients: &[i32],
    ) -> Result<(), InstanceParseError> {
        if self.domain_bounds.is_none() {
            return Err(InstanceParseError::MissingDomainBounds { line });
        }

        if let Some(first) = self.pending.first() {
            if first.coefficients.len() != coefficients.len() {
                return Err(InstanceParseError::EquationLengthMismatch {
                    line,
                    expected: first.coefficients.len(),
                    found: coefficients.len(),
                });
            }
        }

        self.pending.push(Equation {
            coefficients: coefficients.to_vec(),
            rhs,
        });

        if self.pending.len() == self.group_size {
            self.flush();
        }

        Ok(())
    }

    /// Turns the pending equations into an instance, if there are any.
    fn flush(&mut self) {
        let Some(domain_bounds) = self.domain_bounds else {
            return;
        };
        if self.pending.is_empty() {
            return;
        }

        self.instances.push(InstanceConfiguration {
            instance_id: self.instances.len(),
            domain_bounds,
            equations: std::mem::take(&mut self.pending),
        });
    }
}
