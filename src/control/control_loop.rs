// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Main polling loop of the winch controller.
//!
//! One [`ControlLoop`] owns everything that changes at runtime: the live [`RigState`], one
//! [`Actuator`] per anchor and the run state of each. Each call to [`cycle`](ControlLoop::cycle)
//! handles at most one command line and then gives every winch its step quantum.
//!
//! Typical usage pattern:
//!
//! ```ignore
//! control.start(&mut usart);
//!
//! loop {
//!     let line = lines.poll(&mut usart_rx);
//!     control.cycle(line, timer.now_us(), &mut usart);
//! }
//! ```
//!
//! Status lines are written to any `core::fmt::Write` sink; write errors are ignored. On the board
//! the sink is a queue drained between cycles, so writing never waits on the serial line.

use core::fmt::Write;

use crate::config::Settings;
use crate::control::{Actuator, AxisState};
use crate::geometry::{Anchor, PerAnchor, Point, Workspace};
use crate::protocol::{Command, Parser};
use crate::rig::RigState;

pub struct ControlLoop<G: Actuator> {
    workspace: Workspace,
    parser: Parser,

    /// Target of speed commands that name no anchor.
    speed_axis: Anchor,
    startup_speed: Option<(i32, i32)>,

    rig: RigState,
    winches: PerAnchor<G>,
    axes: PerAnchor<AxisState>,
}

impl<G: Actuator> ControlLoop<G> {
    pub fn new(workspace: Workspace, winches: PerAnchor<G>, settings: Settings) -> Self {
        Self {
            workspace,
            parser: Parser::new(settings.mode, settings.policy),
            speed_axis: settings.speed_axis,
            startup_speed: settings.startup_speed,
            rig: RigState::default(),
            winches,
            axes: PerAnchor::default(),
        }
    }

    /// Print the banner, disable every driver, then apply the startup speed (if any).
    pub fn start<W: Write>(&mut self, out: &mut W) {
        let _ = write!(
            out,
            "quadwinch: workspace {}x{} points, {:?} mode, {:?} input\r\n",
            self.workspace.width(),
            self.workspace.height(),
            self.parser.mode(),
            self.parser.policy(),
        );

        for (_, winch) in self.winches.iter_mut() {
            winch.set_enabled(false);
        }

        if let Some((speed, max_speed)) = self.startup_speed {
            self.set_axis(self.speed_axis, speed, max_speed, out);
        }
    }

    /// Run one loop iteration.
    ///
    /// `line` is the command line received since the previous cycle, if any.
    pub fn cycle<W: Write>(&mut self, line: Option<&str>, now_us: u32, out: &mut W) {
        if let Some(line) = line {
            self.handle_line(line, out);
        }

        for (anchor, winch) in self.winches.iter_mut() {
            // Disable is level-triggered.
            if self.axes[anchor] == AxisState::Idle {
                winch.set_enabled(false);
            }
            winch.run_step(now_us);
        }
    }

    /// Parse and apply one command line.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) {
        let command = match self.parser.parse(line) {
            Ok(command) => command,
            Err(e) => {
                let _ = write!(out, "error: {}\r\n", e);
                return;
            }
        };

        let (a, b) = command.values();
        let _ = write!(out, "x = {}; y = {}\r\n", a, b);

        match command {
            Command::Speed {
                axis,
                speed,
                max_speed,
            } => self.set_axis(axis.unwrap_or(self.speed_axis), speed, max_speed, out),
            Command::Target(p) => self.move_to(p, out),
        }
    }

    fn set_axis<W: Write>(&mut self, anchor: Anchor, speed: i32, max_speed: i32, out: &mut W) {
        let state = AxisState::from_command(speed, max_speed);
        state.apply(&mut self.winches[anchor]);
        self.axes[anchor] = state;

        let _ = match state {
            AxisState::Idle => write!(out, "{} disabled\r\n", anchor.tag()),
            AxisState::Running { speed, max_speed } => write!(
                out,
                "{}: setting speed to: {:.2} and max speed to: {:.2}\r\n",
                anchor.tag(),
                speed as f32,
                max_speed as f32,
            ),
        };
    }

    fn move_to<W: Write>(&mut self, p: Point, out: &mut W) {
        self.rig = self.rig.move_to(p, &self.workspace);

        let _ = write!(out, "lengths:");
        for (anchor, length) in self.rig.lengths().iter() {
            let _ = write!(out, " {}={:.2}", anchor.tag(), length);
        }
        if !self.workspace.contains(p) {
            let _ = write!(out, " (outside workspace)");
        }
        let _ = write!(out, "\r\n");
    }

    #[inline]
    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    #[inline]
    pub fn rig(&self) -> &RigState {
        &self.rig
    }

    #[inline]
    pub fn axis_state(&self, anchor: Anchor) -> AxisState {
        self.axes[anchor]
    }

    /// True if any winch is currently commanded to run.
    pub fn any_running(&self) -> bool {
        self.axes.iter().any(|(_, s)| s.is_running())
    }

    #[inline]
    pub fn winch(&self, anchor: Anchor) -> &G {
        &self.winches[anchor]
    }
}
