use std::fmt::{Display, Formatter};

use crate::layer::style::{FCLASS_FOREST, FCLASS_NATURE_RESERVE};

/// Land use selection sent to the backend as the `filter` query parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    /// Both forests and nature reserves.
    #[default]
    All,
    /// Forests only.
    Forest,
    /// Nature reserves only.
    NatureReserve,
    /// Any other value, passed to the backend as is.
    Other(String),
}

impl Filter {
    /// Value of the query parameter.
    pub fn as_str(&self) -> &str {
        match self {
            Filter::All => "All",
            Filter::Forest => FCLASS_FOREST,
            Filter::NatureReserve => FCLASS_NATURE_RESERVE,
            Filter::Other(value) => value,
        }
    }
}

impl From<&str> for Filter {
    fn from(value: &str) -> Self {
        match value {
            "All" => Filter::All,
            FCLASS_FOREST => Filter::Forest,
            FCLASS_NATURE_RESERVE => Filter::NatureReserve,
            other => Filter::Other(other.to_string()),
        }
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
