//! Command line built from the options resource kinds registered.
//!
//! Kinds register at runtime, so the command is assembled with clap's
//! builder API: one subcommand per kind, one `--option` per registration.

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use model::ArgMap;
use std::path::PathBuf;

const INVENTORY_ARG: &str = "inventory";
const DRY_RUN_ARG: &str = "dry-run";
const VERBOSE_ARG: &str = "verbose";

/// Settings that apply to the whole run rather than to one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalSettings {
    pub inventory: PathBuf,
    pub dry_run: bool,
    pub verbose: bool,
}

/// Build the command line for every kind registered on `args`.
pub fn build_command(args: &ArgMap) -> Command {
    let mut command = Command::new("cloud-cleaner")
        .about("Delete cloud resources that match name and age filters")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(INVENTORY_ARG)
                .long(INVENTORY_ARG)
                .short('i')
                .value_name("FILE")
                .default_value("inventory.json")
                .value_parser(value_parser!(PathBuf))
                .global(true)
                .help("JSON inventory of resources, keyed by kind"),
        )
        .arg(
            Arg::new(DRY_RUN_ARG)
                .long(DRY_RUN_ARG)
                .action(ArgAction::SetTrue)
                .global(true)
                .help("List what would be deleted without deleting anything"),
        )
        .arg(
            Arg::new(VERBOSE_ARG)
                .long(VERBOSE_ARG)
                .short('v')
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Log every candidate considered"),
        );

    for kind in args.kinds() {
        let mut subcommand = Command::new(kind).about(format!("Clean up {} resources", kind));
        for option in args.options_for(kind) {
            let mut arg = Arg::new(option.name)
                .long(option.name)
                .value_name("VALUE")
                .num_args(1)
                .help(option.help);
            if let Some(short) = option.short {
                arg = arg.short(short);
            }
            subcommand = subcommand.arg(arg);
        }
        command = command.subcommand(subcommand);
    }

    command
}

/// Read the global flags off parsed matches.
pub fn global_settings(matches: &ArgMatches) -> GlobalSettings {
    GlobalSettings {
        inventory: matches
            .get_one::<PathBuf>(INVENTORY_ARG)
            .cloned()
            .unwrap_or_else(|| PathBuf::from("inventory.json")),
        dry_run: matches.get_flag(DRY_RUN_ARG),
        verbose: matches.get_flag(VERBOSE_ARG),
    }
}

/// Copy the selected kind's option values into `args` and return the kind.
pub fn resolve_kind(args: &mut ArgMap, matches: &ArgMatches) -> Result<String> {
    let (kind, sub_matches) = matches
        .subcommand()
        .context("No resource kind selected")?;

    args.clear_args();
    for option in args.options_for(kind) {
        if let Some(value) = sub_matches.get_one::<String>(option.name) {
            args.set_arg(option.name, value.clone());
        }
    }
    Ok(kind.to_string())
}
