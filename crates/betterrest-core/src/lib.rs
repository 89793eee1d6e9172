//! # BetterRest Core Library
//!
//! This library estimates an ideal bedtime from a desired wake-up time, a
//! desired amount of sleep and daily coffee intake. Front ends (the CLI in
//! this workspace) collect the inputs and render the result; everything with
//! computational content lives here.
//!
//! ## Architecture
//!
//! - **Model**: A fixed, pre-trained linear regression loaded from a JSON
//!   artifact, behind the [`SleepModel`] trait so it can be stubbed
//! - **Calculator**: Derives the bedtime by subtracting the predicted sleep
//!   from the wake time and collapses failures into one user-facing message
//! - **Session**: The `Idle -> Computed` state machine a front end drives
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`BedtimeCalculator`]: Runs one calculation
//! - [`LinearSleepModel`]: The fitted estimation model
//! - [`BedtimeSession`]: Recomputes on every input change
//! - [`Config`]: Application configuration management

pub mod calculator;
pub mod error;
pub mod inputs;
pub mod model;
pub mod session;
pub mod storage;

pub use calculator::{BedtimeCalculator, BedtimeEstimate, ClockFormat};
pub use error::{ConfigError, CoreError, ModelError, ValidationError};
pub use inputs::{BedtimeInputs, CoffeeIntake, SleepAmount, WakeTime};
pub use model::{
    LinearSleepModel, ModelArtifact, ModelInput, ModelSource, RequiredSleep, SleepModel,
    UnavailableModel,
};
pub use session::{BedtimeSession, SessionCommand, SessionState};
pub use storage::Config;
