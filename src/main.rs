// SPDX-License-Identifier: MPL-2.0
use locale_bootstrap::{bootstrap, config, paths, Environment, FileStore, LocaleId};
use std::process::ExitCode;

struct Flags {
    server: bool,
    config_dir: Option<String>,
    locale: Option<String>,
}

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        server: args.contains("--server"),
        config_dir: args.opt_value_from_str("--config-dir")?,
        locale: args.opt_value_from_str("--locale")?,
    };
    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("ignoring unexpected arguments: {:?}", rest);
    }
    Ok(flags)
}

fn environment(flags: &Flags) -> Environment {
    if flags.server {
        return Environment::Server;
    }
    match config::default_settings_path() {
        Some(path) => {
            log::debug!("reading preferences from {}", path.display());
            Environment::client(FileStore::new(path))
        }
        None => {
            log::warn!("no config directory available, running without stored preferences");
            Environment::Server
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("Error: {}", err);
            eprintln!("Usage: locale_bootstrap [--server] [--config-dir DIR] [--locale TAG]");
            return ExitCode::FAILURE;
        }
    };
    paths::init_cli_override(flags.config_dir.clone());

    let context = bootstrap(&environment(&flags));

    if let Some(tag) = &flags.locale {
        match LocaleId::parse(tag) {
            Ok(locale) => context.locale().set(locale),
            Err(err) => {
                eprintln!("Error: {}", err);
                return ExitCode::FAILURE;
            }
        }
    }

    let active = context
        .locale()
        .get()
        .map_or_else(|| "(none)".to_string(), |locale| locale.to_string());
    match context.i18n().current_catalog().await {
        Ok(catalog) => {
            println!("active locale:   {}", active);
            println!("fallback locale: {}", context.i18n().fallback_locale());
            println!("catalog locale:  {}", catalog.locale());
            println!("messages:        {}", catalog.len());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
