use anyhow::Error;
use mobscan_config::ConfigError;
use mobscan_io::IoError;
use std::process::ExitCode;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INVALID_INPUT: u8 = 3;

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    ExitCode::from(exit_status(err))
}

fn exit_status(err: &Error) -> u8 {
    for cause in err.chain() {
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return config_exit_code(config_err);
        }
        if let Some(io_err) = cause.downcast_ref::<IoError>() {
            return io_exit_code(io_err);
        }
    }
    EXIT_FAILURE
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir | ConfigError::Read { .. } => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InvalidField { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}

fn io_exit_code(err: &IoError) -> u8 {
    match err {
        IoError::InputMissing(_) | IoError::InputMalformed { .. } => EXIT_INVALID_INPUT,
        IoError::Read { .. } | IoError::OutputWrite { .. } => EXIT_FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::{exit_status, EXIT_FAILURE, EXIT_INVALID_INPUT};
    use anyhow::Context as _;
    use mobscan_config::ConfigError;
    use mobscan_io::IoError;
    use std::path::PathBuf;

    #[test]
    fn input_errors_map_to_invalid_input() {
        let err: anyhow::Result<()> = Err(IoError::InputMissing(PathBuf::from("a.json")).into());
        let err = err.context("load input a.json").unwrap_err();
        assert_eq!(exit_status(&err), EXIT_INVALID_INPUT);
    }

    #[test]
    fn output_errors_map_to_failure() {
        let err = anyhow::Error::from(IoError::OutputWrite {
            path: PathBuf::from("out.txt"),
            source: std::io::Error::other("disk full"),
        });
        assert_eq!(exit_status(&err), EXIT_FAILURE);
    }

    #[test]
    fn config_errors_map_to_invalid_input() {
        let err = anyhow::Error::from(ConfigError::MissingConfigFile(PathBuf::from("c.toml")));
        assert_eq!(exit_status(&err), EXIT_INVALID_INPUT);
    }

    #[test]
    fn unknown_errors_map_to_failure() {
        let err = anyhow::anyhow!("boom");
        assert_eq!(exit_status(&err), EXIT_FAILURE);
    }
}
