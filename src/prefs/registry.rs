//! Windows registry [`KeyValueStore`] rooted at `HKEY_CURRENT_USER`.

use std::io::ErrorKind;

use tracing::debug;
use winreg::enums::HKEY_CURRENT_USER;
use winreg::RegKey;

use crate::error::PersistenceError;

use super::KeyValueStore;

/// DWORD values under the current user's hive.
pub struct RegistryStore {
    root: RegKey,
}

impl RegistryStore {
    pub fn current_user() -> Self {
        Self {
            root: RegKey::predef(HKEY_CURRENT_USER),
        }
    }
}

/// Absent keys and non-DWORD values both fall back to the default.
fn is_defaultable(kind: ErrorKind) -> bool {
    matches!(kind, ErrorKind::NotFound | ErrorKind::InvalidData)
}

impl KeyValueStore for RegistryStore {
    fn read_int(&self, path: &str, key: &str, default: u32) -> Result<u32, PersistenceError> {
        let subkey = match self.root.open_subkey(path) {
            Ok(subkey) => subkey,
            Err(err) if is_defaultable(err.kind()) => {
                debug!(path, "registry path missing; using default");
                return Ok(default);
            }
            Err(err) => return Err(PersistenceError::io(format!("open HKCU\\{path}"), err)),
        };
        match subkey.get_value::<u32, _>(key) {
            Ok(value) => Ok(value),
            Err(err) if is_defaultable(err.kind()) => {
                debug!(path, key, "registry value missing or not a DWORD; using default");
                Ok(default)
            }
            Err(err) => Err(PersistenceError::io(
                format!("read HKCU\\{path}\\{key}"),
                err,
            )),
        }
    }

    fn write_int(&self, path: &str, key: &str, value: u32) -> Result<(), PersistenceError> {
        let (subkey, _) = self
            .root
            .create_subkey(path)
            .map_err(|err| PersistenceError::io(format!("create HKCU\\{path}"), err))?;
        subkey
            .set_value(key, &value)
            .map_err(|err| PersistenceError::io(format!("write HKCU\\{path}\\{key}"), err))
    }
}
