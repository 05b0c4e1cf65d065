//! JSON share documents.
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" }
//! }
//! ```
//!
//! Every entry except `"keys"` is a share keyed by its integer identifier.
//! Entries keep their document order, which is the order used when the
//! first `k` shares are selected.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::encoding::Radix;
use crate::error::{Error, Result};
use crate::input::{Share, ShareSet};

const KEYS: &str = "keys";

#[derive(Debug, Serialize, Deserialize)]
struct Keys {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    n: Option<usize>,
    k: i64,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawShare {
    base: String,
    value: String,
}

impl ShareSet {
    /// Parses a share document.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let document: Map<String, Value> = serde_json::from_str(s)?;
        Self::from_json_map(document)
    }

    /// Reads and parses a share document from disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading share document");
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    fn from_json_map(document: Map<String, Value>) -> Result<Self> {
        let keys = document.get(KEYS).cloned().ok_or(Error::MissingKeys)?;
        let keys: Keys = serde_json::from_value(keys)?;

        if keys.k < 1 {
            return Err(Error::InvalidThreshold(keys.k));
        }

        let mut shares = Vec::with_capacity(document.len());
        // Share order is document order, so "keys" is skipped in place.
        for (key, value) in document {
            if key == KEYS {
                continue;
            }

            let id: i64 = key
                .trim()
                .parse()
                .map_err(|_| Error::InvalidIdentifier(key.clone()))?;

            let raw: RawShare =
                serde_json::from_value(value).map_err(|e| Error::MalformedShare {
                    id: key.clone(),
                    reason: e.to_string(),
                })?;

            let radix: Radix = raw.base.parse()?;
            shares.push(Share::new(id, radix, raw.value));
        }

        if let Some(n) = keys.n {
            if n != shares.len() {
                warn!(declared = n, found = shares.len(), "share count differs from \"n\"");
            }
        }

        let set = ShareSet::new(keys.k as usize, shares)?;
        Ok(match keys.n {
            Some(n) => set.with_declared_total(n),
            None => set,
        })
    }

    /// Writes the set back out in the document format.
    ///
    /// `n` is the number of shares held, `k` the threshold.
    pub fn to_json_string(&self) -> Result<String> {
        let mut document = Map::new();

        let keys = Keys {
            n: Some(self.shares.len()),
            k: self.threshold as i64,
        };
        document.insert(KEYS.to_string(), serde_json::to_value(keys)?);

        for share in &self.shares {
            let raw = RawShare {
                base: share.radix.to_string(),
                value: share.digits.clone(),
            };
            document.insert(share.id.to_string(), serde_json::to_value(raw)?);
        }

        Ok(serde_json::to_string_pretty(&Value::Object(document))?)
    }
}
