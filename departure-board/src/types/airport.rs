/// Represents the airport a departure board announces flights to.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Airport {
    pub destination: String,
}

impl Airport {
    pub fn new(destination: &str) -> Self {
        Airport {
            destination: destination.to_string(),
        }
    }
}

impl Default for Airport {
    fn default() -> Self {
        Airport {
            destination: "Default Airport".to_string(),
        }
    }
}
