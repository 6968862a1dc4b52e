use serde::{Deserialize, Serialize};
use std::fmt;

/// Where an identifier visible at the cursor was introduced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Origin {
    #[serde(rename = "local")]
    Local,
    #[serde(rename = "parameter")]
    Parameter,
    /// The implicit `self` of a `function a:b()` method
    #[serde(rename = "self")]
    SelfRef,
    #[serde(rename = "for-index")]
    ForIndex,
    /// A binding captured from an enclosing function
    #[serde(rename = "upvalue")]
    Upvalue,
}

impl Origin {
    pub const ALL: [Origin; 5] = [
        Origin::Local,
        Origin::Parameter,
        Origin::SelfRef,
        Origin::ForIndex,
        Origin::Upvalue,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Origin::Local => "local",
            Origin::Parameter => "parameter",
            Origin::SelfRef => "self",
            Origin::ForIndex => "for-index",
            Origin::Upvalue => "upvalue",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_match_serialized_form() {
        for origin in Origin::ALL {
            let json = serde_json::to_string(&origin).unwrap();
            assert_eq!(json, format!("\"{}\"", origin.label()));

            let back: Origin = serde_json::from_str(&json).unwrap();
            assert_eq!(back, origin);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Origin::ForIndex.to_string(), "for-index");
        assert_eq!(Origin::SelfRef.to_string(), "self");
    }
}
