// SPDX-License-Identifier: MIT

//! The linear pipeline data model: [`Pipeline`], [`Step`], [`Token`], and
//! the per-run records the engine produces while executing one.

use serde::{Deserialize, Serialize};

/// One element of a step's command line.
///
/// A tagged sum type (not a heterogeneous list) per the source's token
/// model: either a literal argv element, or a reference to a variable
/// bound by an earlier step's captured output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Token {
    /// `{variable: name}` in the wire format.
    Variable { variable: String },
    /// A bare string in the wire format.
    Literal(String),
}

impl Token {
    pub fn literal(s: impl Into<String>) -> Self {
        Token::Literal(s.into())
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Token::Variable {
            variable: name.into(),
        }
    }
}

/// One step of a [`Pipeline`]: a command plus an optional captured-variable
/// name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub command: Vec<Token>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable: Option<String>,
}

impl Step {
    pub fn new(command: Vec<Token>) -> Self {
        Self {
            command,
            variable: None,
        }
    }

    pub fn capturing(mut self, variable: impl Into<String>) -> Self {
        self.variable = Some(variable.into());
        self
    }
}

/// An ordered, named list of steps.
///
/// Identity is the `name`: it is the lookup key in the Pipeline Store.
/// Pipelines are created once by an external compiler and never mutated
/// in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    pub name: String,
    pub steps: Vec<Step>,
}

impl Pipeline {
    pub fn new(name: impl Into<String>, steps: Vec<Step>) -> Self {
        Self {
            name: name.into(),
            steps,
        }
    }
}

/// One child-process invocation recorded during a pipeline run, together
/// with its captured output and exit code.
///
/// `returncode` is `None` only while the command is still running; it is
/// set exactly once, before the next `StageCommand` is appended.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StageCommand {
    pub command: Vec<String>,
    pub output: Vec<String>,
    pub returncode: Option<i32>,
}

impl StageCommand {
    pub fn new(command: Vec<String>) -> Self {
        Self {
            command,
            output: Vec::new(),
            returncode: None,
        }
    }
}

/// The result of running one pipeline trigger to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRecord {
    pub pipeline_name: String,
    pub started_at: std::time::SystemTime,
    pub ended_at: std::time::SystemTime,
    pub success: bool,
    pub stage_commands: Vec<StageCommand>,
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
