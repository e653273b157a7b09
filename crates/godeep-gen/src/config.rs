//! Configuration for deep-copy generation.

/// Name of the generated method and of the method reused on nested types.
pub const DEFAULT_METHOD_NAME: &str = "DeepCopy";

/// Configuration for one generation run.
#[derive(Clone, Debug)]
pub struct Config {
    /// Generate `func (o *T) M() *T` instead of `func (o T) M() T`
    pub(crate) pointer_receiver: bool,
    /// Method name generated and looked up for reuse
    pub(crate) method_name: String,
    /// Command line recorded in the generated header
    pub(crate) invocation: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pointer_receiver: false,
            method_name: DEFAULT_METHOD_NAME.to_string(),
            invocation: "godeep".to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether generated methods use pointer receivers.
    pub fn pointer_receiver(mut self, value: bool) -> Self {
        self.pointer_receiver = value;
        self
    }

    /// Set the copy method name.
    pub fn method_name(mut self, value: impl Into<String>) -> Self {
        self.method_name = value.into();
        self
    }

    /// Set the invocation shown in the generated file header.
    pub fn invocation(mut self, value: impl Into<String>) -> Self {
        self.invocation = value.into();
        self
    }
}
