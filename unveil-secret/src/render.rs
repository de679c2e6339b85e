//! YAML rendering of decoded secrets.

use crate::{DecodedSecret, Error, Result};

impl DecodedSecret {
    /// Serialize to YAML with the fields in `apiVersion`, `kind`,
    /// `metadata`, `data` order.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|source| Box::new(Error::Serialize { source }))
    }
}
