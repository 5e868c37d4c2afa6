use color_eyre::{
    eyre::{eyre, Context},
    Result,
};
use env_logger::{Builder, Target};
use log::LevelFilter;

/// [`config_logger`] The configuration for `env_logger`
pub fn config_logger(verbose_level: u8, target: Target) -> Result<()> {
    let mut builder = Builder::from_default_env();

    builder
        .target(target)
        .format_indent(Some(4))
        .format_module_path(false)
        .format_timestamp_millis();

    match verbose_level {
        0 => builder.filter(None, LevelFilter::Info),
        1 => builder.filter(None, LevelFilter::Debug),
        _ => return Err(eyre!("jBalCompTools maximum allowed verbosity level is: '-v'")),
    };

    builder
        .try_init()
        .with_context(|| "jBalCompTools wasn't able to set up the logger")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_verbose_is_rejected() {
        assert!(config_logger(2, Target::Stderr).is_err());
    }
}
