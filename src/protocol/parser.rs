// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Command line parser.
//!
//! Converts one received text line into a [`Command`]. Number handling is delegated to a
//! [`NumberPolicy`], so swapping the lenient policy for the strict one changes nothing else.

use crate::geometry::{Anchor, Point};
use crate::protocol::messages::*;
use crate::protocol::{NumberPolicy, ParseError};

pub struct Parser {
    mode: CommandMode,
    policy: NumberPolicy,
}

impl Parser {
    pub fn new(mode: CommandMode, policy: NumberPolicy) -> Self {
        Self { mode, policy }
    }

    #[inline]
    pub fn mode(&self) -> CommandMode {
        self.mode
    }

    #[inline]
    pub fn policy(&self) -> NumberPolicy {
        self.policy
    }

    /// Parse a single line (without its terminator).
    pub fn parse(&self, line: &str) -> Result<Command, ParseError> {
        let mut tokens = line.split_ascii_whitespace().peekable();
        let mut mode = self.mode;
        let mut axis = None;

        match tokens.peek().copied() {
            Some(KW_SPEED) => {
                tokens.next();
                mode = CommandMode::Speed;
                if let Some(anchor) = tokens.peek().and_then(|t| Anchor::from_tag(t)) {
                    axis = Some(anchor);
                    tokens.next();
                }
            }
            Some(KW_POSITION) => {
                tokens.next();
                mode = CommandMode::Position;
            }
            _ => {}
        }

        let a = self.policy.number(tokens.next(), 0)?;
        let b = self.policy.number(tokens.next(), 1)?;

        if self.policy == NumberPolicy::Strict && tokens.next().is_some() {
            return Err(ParseError::TrailingInput);
        }

        Ok(match mode {
            CommandMode::Speed => Command::Speed {
                axis,
                speed: a,
                max_speed: b,
            },
            CommandMode::Position => Command::Target(Point::new(a, b)),
        })
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(CommandMode::default(), NumberPolicy::default())
    }
}
