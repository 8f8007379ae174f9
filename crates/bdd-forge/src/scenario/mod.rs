//! Scenario synthesis from high-level automation intents.
//!
//! Each [`Intent`] becomes a one-feature, one-scenario Russian document with
//! a `# language: ru` pragma, ready to hand to the external automation
//! engine. Parameters are validated before any text is produced.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

mod synth;

pub use synth::synthesize;

/// Generate `FromStr`, `Display` and a name table for a closed set of
/// lowercase identifiers.
macro_rules! closed_set {
    ($ty:ident, $kind:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// Accepted names in declaration order.
            pub const NAMES: &'static [&'static str] = &[$($name),+];

            /// Canonical name of the variant.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = Error;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
                    $($name => Ok(Self::$variant),)+
                    _ => Err(Error::unknown_variant($kind, value, Self::NAMES)),
                }
            }
        }
    };
}

/// UI action performed on a form element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Single click.
    Click,
    /// Double click.
    DoubleClick,
    /// Type a value into a field; requires a value.
    Input,
    /// Pick a value from a list; requires a value.
    Select,
    /// Clear a field.
    Clear,
}

closed_set!(Action, "action", {
    Click => "click",
    DoubleClick => "double_click",
    Input => "input",
    Select => "select",
    Clear => "clear",
});

impl Action {
    /// Whether the action needs a value to act with.
    #[must_use]
    pub const fn requires_value(self) -> bool {
        matches!(self, Self::Input | Self::Select)
    }
}

/// Condition awaited on a form element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitCondition {
    /// The element becomes present.
    Appear,
    /// The element goes away.
    Disappear,
    /// The element becomes available for input.
    Enabled,
    /// The element stops accepting input.
    Disabled,
}

closed_set!(WaitCondition, "condition", {
    Appear => "appear",
    Disappear => "disappear",
    Enabled => "enabled",
    Disabled => "disabled",
});

/// Assertion checked against a form element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assertion {
    /// The element exists on the form.
    Exists,
    /// The element is visible.
    Visible,
    /// The element is available for input.
    Enabled,
    /// The element holds the expected value; requires an expected value.
    Value,
    /// A table holds the expected number of rows; requires an expected
    /// non-negative integer.
    Count,
}

closed_set!(Assertion, "assertion type", {
    Exists => "exists",
    Visible => "visible",
    Enabled => "enabled",
    Value => "value",
    Count => "count",
});

impl Assertion {
    /// Whether the assertion needs an expected value.
    #[must_use]
    pub const fn requires_expected(self) -> bool {
        matches!(self, Self::Value | Self::Count)
    }
}

/// A high-level request to be turned into a scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Inspect the structure of a form.
    ExploreForm {
        /// Form to open first; the active window is used when absent.
        form: Option<String>,
    },
    /// List the elements of the active form.
    ListElements {
        /// Restrict the listing to one element type.
        element_type: Option<String>,
    },
    /// Act on one element.
    PerformAction {
        /// What to do.
        action: Action,
        /// Element name.
        element: String,
        /// Value for `input` and `select`.
        value: Option<String>,
    },
    /// Capture the screen.
    TakeScreenshot {
        /// Optional snapshot name.
        name: Option<String>,
    },
    /// Wait for an element to reach a state.
    WaitForCondition {
        /// Awaited state.
        condition: WaitCondition,
        /// Element name.
        element: String,
        /// Upper bound in seconds; must be positive.
        timeout_secs: u32,
    },
    /// Read the rows of a table.
    ExtractTableData {
        /// Table element name.
        table: String,
        /// Upper bound on rows read.
        max_rows: Option<u32>,
    },
    /// Start recording user actions.
    StartRecording {
        /// File the engine records into.
        output: Option<String>,
    },
    /// Check a condition on an element.
    AssertCondition {
        /// What to check.
        assertion: Assertion,
        /// Element name.
        element: String,
        /// Expected value for `value` and `count`.
        expected: Option<String>,
    },
    /// Move to an application section.
    Navigate {
        /// Section name.
        section: String,
        /// Command to run inside the section.
        command: Option<String>,
    },
}

impl Intent {
    /// Kebab-case name of the intent.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ExploreForm { .. } => "explore-form",
            Self::ListElements { .. } => "list-elements",
            Self::PerformAction { .. } => "perform-action",
            Self::TakeScreenshot { .. } => "take-screenshot",
            Self::WaitForCondition { .. } => "wait-for-condition",
            Self::ExtractTableData { .. } => "extract-table-data",
            Self::StartRecording { .. } => "start-recording",
            Self::AssertCondition { .. } => "assert-condition",
            Self::Navigate { .. } => "navigate",
        }
    }
}
