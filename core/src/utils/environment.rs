use super::error::DumpsterError;
use log::error;
use std::env;

/// Get the value of an environment variable. Returns an empty string if it does not exist
pub(crate) fn get_env_value(var: &str) -> String {
    env::var(var).unwrap_or_default()
}

/// Get the drive letter Windows is installed on
pub(crate) fn get_systemdrive() -> Result<char, DumpsterError> {
    let sys_drive = get_env_value("SystemDrive");

    match sys_drive.chars().next() {
        Some(drive) => Ok(drive),
        None => {
            error!("[dumpster] Empty systemdrive value");
            Err(DumpsterError::Env)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{get_env_value, get_systemdrive};

    #[test]
    fn test_get_env_value() {
        let result = get_env_value("PATH");
        assert!(!result.is_empty());

        let result = get_env_value("DUMPSTER_NOT_A_REAL_VARIABLE");
        assert!(result.is_empty());
    }

    #[test]
    #[cfg(target_os = "windows")]
    fn test_get_systemdrive() {
        let result = get_systemdrive().unwrap();
        assert_eq!(result, 'C');
    }

    #[test]
    #[cfg(target_family = "unix")]
    fn test_get_systemdrive_missing() {
        assert!(get_systemdrive().is_err());
    }
}
