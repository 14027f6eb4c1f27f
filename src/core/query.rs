//! Search query parsing: free text plus `has:<capability>` filters.

/// Prefix that turns a token into a capability filter.
pub const CAPABILITY_PREFIX: &str = "has:";

/// A parsed search query. Capabilities keep the order they were given, duplicates included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub free_text: String,
    pub capabilities: Vec<String>,
}

impl Query {
    /// Parse a single combined query string, e.g. `"has:tools has:vision gemma"`.
    pub fn parse(input: &str) -> Self {
        Self::from_args([input])
    }

    /// Parse command-line query arguments. A single argument is the combined form;
    /// several arguments are the split form. Both yield the same query.
    pub fn from_cli(args: &[String]) -> Self {
        match args {
            [combined] => Self::parse(combined),
            split => Self::from_args(split),
        }
    }

    /// Parse a pre-split argument list. Each argument is split on whitespace again,
    /// so `["has:tools gemma"]` and `["has:tools", "gemma"]` produce the same query.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut query = Query::default();
        for arg in args {
            for token in arg.as_ref().split_whitespace() {
                query.push_token(token);
            }
        }
        query
    }

    fn push_token(&mut self, token: &str) {
        match token.strip_prefix(CAPABILITY_PREFIX) {
            Some(capability) => self.capabilities.push(capability.to_string()),
            None => {
                if !self.free_text.is_empty() {
                    self.free_text.push(' ');
                }
                self.free_text.push_str(token);
            }
        }
    }
}
