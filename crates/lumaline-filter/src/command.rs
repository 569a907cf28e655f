use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{engine::FilterEngine, error::CommandError};

/// Method name of [`Command::Initialize`].
pub const METHOD_INITIALIZE: &str = "initializeFilter";
/// Method name of [`Command::SetEnabled`].
pub const METHOD_SET_ENABLED: &str = "setFilterEnabled";
/// Method name of [`Command::SetParams`].
pub const METHOD_SET_PARAMS: &str = "setFilterParams";
/// Method name of [`Command::Release`].
pub const METHOD_RELEASE: &str = "releaseFilter";
/// Method name of [`Command::IsEnabled`].
pub const METHOD_IS_ENABLED: &str = "isFilterEnabled";

/// A request to configure the filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Initialize the filter. Answers with the success flag.
    Initialize,
    /// Enable or disable filtering.
    SetEnabled {
        /// The new enabled flag.
        enabled: bool,
    },
    /// Replace the filter parameters.
    SetParams {
        /// First threshold.
        threshold1: i32,
        /// Second threshold.
        threshold2: i32,
        /// Colorful mode.
        colorful: bool,
    },
    /// Disable and deinitialize the filter.
    Release,
    /// Query the enabled flag.
    IsEnabled,
}

impl Command {
    /// The method name this command travels under.
    pub fn method(&self) -> &'static str {
        match self {
            Command::Initialize => METHOD_INITIALIZE,
            Command::SetEnabled { .. } => METHOD_SET_ENABLED,
            Command::SetParams { .. } => METHOD_SET_PARAMS,
            Command::Release => METHOD_RELEASE,
            Command::IsEnabled => METHOD_IS_ENABLED,
        }
    }
}

/// The answer to a [`Command`].
///
/// Serializes to a bare JSON boolean or to `null`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CommandResponse {
    /// A boolean result.
    Bool(bool),
    /// No result.
    Unit,
}

/// A method call as received from a transport: a method name and its named arguments.
///
/// # Example
///
/// ```
/// use lumaline_filter::{Command, MethodCall};
///
/// let call: MethodCall = serde_json::from_str(
///     r#"{ "method": "setFilterEnabled", "arguments": { "enabled": true } }"#,
/// ).unwrap();
///
/// assert_eq!(call.into_command(), Ok(Command::SetEnabled { enabled: true }));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    /// The method name.
    pub method: String,
    /// The arguments, a JSON object or `null` for methods without arguments.
    #[serde(default)]
    pub arguments: Value,
}

impl MethodCall {
    /// Create a new method call.
    pub fn new(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }

    /// Resolve the call into a typed [`Command`].
    ///
    /// # Errors
    ///
    /// [`CommandError::NotImplemented`] for an unknown method name and
    /// [`CommandError::InvalidArgument`] for a missing or mistyped argument.
    pub fn into_command(self) -> Result<Command, CommandError> {
        let args = Arguments {
            method: &self.method,
            values: &self.arguments,
        };

        match self.method.as_str() {
            METHOD_INITIALIZE => Ok(Command::Initialize),
            METHOD_SET_ENABLED => Ok(Command::SetEnabled {
                enabled: args.bool("enabled")?,
            }),
            METHOD_SET_PARAMS => Ok(Command::SetParams {
                threshold1: args.int("threshold1")?,
                threshold2: args.int("threshold2")?,
                colorful: args.bool("colorful")?,
            }),
            METHOD_RELEASE => Ok(Command::Release),
            METHOD_IS_ENABLED => Ok(Command::IsEnabled),
            _ => Err(CommandError::NotImplemented(self.method)),
        }
    }
}

impl From<Command> for MethodCall {
    fn from(command: Command) -> Self {
        let arguments = match command {
            Command::SetEnabled { enabled } => serde_json::json!({ "enabled": enabled }),
            Command::SetParams {
                threshold1,
                threshold2,
                colorful,
            } => serde_json::json!({
                "threshold1": threshold1,
                "threshold2": threshold2,
                "colorful": colorful,
            }),
            Command::Initialize | Command::Release | Command::IsEnabled => Value::Null,
        };
        MethodCall::new(command.method(), arguments)
    }
}

/// Named argument lookup for one method call.
struct Arguments<'a> {
    method: &'a str,
    values: &'a Value,
}

impl Arguments<'_> {
    fn get(&self, name: &str) -> Result<&Value, CommandError> {
        self.values
            .get(name)
            .ok_or_else(|| self.invalid(name, "missing"))
    }

    fn bool(&self, name: &str) -> Result<bool, CommandError> {
        self.get(name)?
            .as_bool()
            .ok_or_else(|| self.invalid(name, "expected a boolean"))
    }

    fn int(&self, name: &str) -> Result<i32, CommandError> {
        self.get(name)?
            .as_i64()
            .and_then(|v| i32::try_from(v).ok())
            .ok_or_else(|| self.invalid(name, "expected a 32-bit integer"))
    }

    fn invalid(&self, name: &str, reason: &str) -> CommandError {
        CommandError::InvalidArgument {
            method: self.method.to_string(),
            argument: name.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Run a typed command against the engine.
pub fn dispatch(engine: &mut FilterEngine, command: Command) -> CommandResponse {
    debug!("dispatching {}", command.method());
    match command {
        Command::Initialize => CommandResponse::Bool(engine.initialize()),
        Command::SetEnabled { enabled } => {
            engine.set_enabled(enabled);
            CommandResponse::Unit
        }
        Command::SetParams {
            threshold1,
            threshold2,
            colorful,
        } => {
            engine.set_filter_params(threshold1, threshold2, colorful);
            CommandResponse::Unit
        }
        Command::Release => {
            engine.release();
            CommandResponse::Unit
        }
        Command::IsEnabled => CommandResponse::Bool(engine.is_enabled()),
    }
}

/// Resolve and run a method call against the engine.
///
/// The engine is left untouched when the call is rejected.
///
/// # Example
///
/// ```
/// use lumaline_filter::{handle_method_call, CommandError, CommandResponse, FilterEngine, MethodCall};
///
/// let mut engine = FilterEngine::new();
///
/// let res = handle_method_call(&mut engine, MethodCall::new("initializeFilter", serde_json::Value::Null));
/// assert_eq!(res, Ok(CommandResponse::Bool(true)));
///
/// let res = handle_method_call(&mut engine, MethodCall::new("takePicture", serde_json::Value::Null));
/// assert_eq!(res, Err(CommandError::NotImplemented("takePicture".to_string())));
/// ```
pub fn handle_method_call(
    engine: &mut FilterEngine,
    call: MethodCall,
) -> Result<CommandResponse, CommandError> {
    let command = call.into_command()?;
    Ok(dispatch(engine, command))
}
