use std::fmt;

use crate::expr::{evaluate, ExprError, EXPR_CHARSET};

pub const EQUATION_LEN: usize = 7;
pub const OPERATORS: [char; 4] = ['+', '-', '*', '/'];

const GENERATE_MAX_ATTEMPTS: u32 = 512;
const FALLBACK_EQUATION: &str = "10+5=15";

const FIRST_OPERAND_MIN: u32 = 10;
const FIRST_OPERAND_MAX: u32 = 99;
const SECOND_OPERAND_MIN: u32 = 1;
const SECOND_OPERAND_MAX: u32 = 9;

pub fn splitmix32(mut value: u32) -> u32 {
    value = value.wrapping_add(0x9E37_79B9);
    let mut z = value;
    z = (z ^ (z >> 16)).wrapping_mul(0x85EB_CA6B);
    z = (z ^ (z >> 13)).wrapping_mul(0xC2B2_AE35);
    z ^ (z >> 16)
}

fn rand_unit(seed: u32, salt: u32) -> f32 {
    let mixed = splitmix32(seed ^ salt);
    let top = mixed >> 8;
    top as f32 / ((1u32 << 24) as f32)
}

fn rand_in(seed: u32, salt: u32, min: u32, max: u32) -> u32 {
    let span = max - min + 1;
    min + (rand_unit(seed, salt) * span as f32) as u32
}

/// Produces a random equation of exactly [`EQUATION_LEN`] characters.
///
/// Bounded rejection sampling: single-digit operand pairs can never format
/// to seven characters, so the first operand is drawn from a two-digit
/// range. Draws that fail the length check or leave a division remainder
/// are discarded; the attempt cap plus a constant fallback guarantee the
/// call returns without ever stalling the event loop.
pub fn generate_equation(seed: u32) -> Equation {
    for attempt in 0..GENERATE_MAX_ATTEMPTS {
        let salt = attempt.wrapping_mul(4);
        let op = OPERATORS[rand_in(seed, salt, 0, OPERATORS.len() as u32 - 1) as usize];
        let a = rand_in(seed, salt + 1, FIRST_OPERAND_MIN, FIRST_OPERAND_MAX) as i64;
        let b = rand_in(seed, salt + 2, SECOND_OPERAND_MIN, SECOND_OPERAND_MAX) as i64;
        let result = match op {
            '+' => a + b,
            '-' => a - b,
            '*' => a * b,
            _ => {
                if a % b != 0 {
                    continue;
                }
                a / b
            }
        };
        let formatted = format!("{a}{op}{b}={result}");
        if formatted.len() != EQUATION_LEN {
            continue;
        }
        if let Ok(equation) = Equation::parse(&formatted) {
            return equation;
        }
    }
    Equation::parse(FALLBACK_EQUATION).expect("fallback equation is valid")
}

/// A validated arithmetic identity of exactly [`EQUATION_LEN`] characters,
/// e.g. `12*4=48`. Both sides evaluate and compare exactly equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation(String);

impl Equation {
    pub fn parse(value: &str) -> Result<Self, EquationError> {
        let found = value.chars().count();
        if found != EQUATION_LEN {
            return Err(EquationError::WrongLength {
                expected: EQUATION_LEN,
                found,
            });
        }
        for (index, ch) in value.chars().enumerate() {
            if !EXPR_CHARSET.contains(ch) {
                return Err(EquationError::InvalidCharacter { ch, index });
            }
        }
        let parts: Vec<&str> = value.split('=').collect();
        if parts.len() != 2 {
            return Err(EquationError::NotTwoSided { parts: parts.len() });
        }
        let left = evaluate(parts[0]).map_err(EquationError::Unevaluable)?;
        let right = evaluate(parts[1]).map_err(EquationError::Unevaluable)?;
        if left != right {
            return Err(EquationError::SidesUnequal);
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for Equation {
    type Err = EquationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EquationError {
    WrongLength { expected: usize, found: usize },
    InvalidCharacter { ch: char, index: usize },
    NotTwoSided { parts: usize },
    Unevaluable(ExprError),
    SidesUnequal,
}

impl fmt::Display for EquationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EquationError::WrongLength { expected, found } => {
                write!(f, "equation must be {expected} chars, got {found}")
            }
            EquationError::InvalidCharacter { ch, index } => {
                write!(f, "invalid character '{ch}' at position {index}")
            }
            EquationError::NotTwoSided { parts } => {
                write!(f, "equation must have exactly two sides, got {parts}")
            }
            EquationError::Unevaluable(err) => write!(f, "side does not evaluate: {err}"),
            EquationError::SidesUnequal => write!(f, "sides are not equal"),
        }
    }
}

impl std::error::Error for EquationError {}
